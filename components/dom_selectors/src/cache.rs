//! Size-bounded selector compilation cache (§9's "Selector compilation
//! cache" redesign note): hot paths re-query with the same selector
//! strings, so compiling once and keying by the input string avoids
//! re-parsing on every call.

use crate::parser::{self, SelectorList};
use dom_types::DomError;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_CAPACITY: usize = 256;

struct Lru {
    capacity: usize,
    map: HashMap<String, Arc<SelectorList>>,
    order: VecDeque<String>,
}

impl Lru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&mut self, key: &str) -> Option<Arc<SelectorList>> {
        if let Some(value) = self.map.get(key).cloned() {
            self.touch(key);
            Some(value)
        } else {
            None
        }
    }

    fn insert(&mut self, key: String, value: Arc<SelectorList>) {
        if self.map.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
            if self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.map.remove(&oldest);
                }
            }
        } else {
            self.touch(&key);
        }
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
            self.order.push_back(key.to_string());
        }
    }
}

static CACHE: Lazy<Mutex<Lru>> = Lazy::new(|| Mutex::new(Lru::new(DEFAULT_CAPACITY)));

/// Parses `selector`, serving a cached compilation when the exact same
/// string was compiled before. An invalid selector is not cached: a
/// second call with the same invalid string parses (and fails) again,
/// matching §7's propagation policy.
pub fn compile(selector: &str) -> Result<Arc<SelectorList>, DomError> {
    if let Some(hit) = CACHE.lock().get(selector) {
        return Ok(hit);
    }
    let parsed = Arc::new(parser::parse(selector)?);
    CACHE.lock().insert(selector.to_string(), parsed.clone());
    Ok(parsed)
}
