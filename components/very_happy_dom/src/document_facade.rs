//! The public facade: a `Document` wrapper that adds `location` and
//! `history`, the two pieces of document-level state `dom_core` itself
//! has no notion of (§6).

use dom_types::DomError;
use std::sync::RwLock;
use url::Url;

/// The document's current URL, decomposed the way `window.location`
/// exposes it.
#[derive(Debug, Clone)]
pub struct Location {
    url: Url,
}

impl Location {
    fn new(href: &str) -> Self {
        let url = Url::parse(href).unwrap_or_else(|_| Url::parse("about:blank").unwrap());
        Self { url }
    }

    /// The full URL string.
    pub fn href(&self) -> String {
        self.url.as_str().to_string()
    }

    /// `https:`, `http:`, `about:`, ...
    pub fn protocol(&self) -> String {
        format!("{}:", self.url.scheme())
    }

    /// `hostname:port`, or just `hostname` when no port is set.
    pub fn host(&self) -> String {
        match self.url.port() {
            Some(port) => format!("{}:{}", self.hostname(), port),
            None => self.hostname(),
        }
    }

    /// The hostname with no port.
    pub fn hostname(&self) -> String {
        self.url.host_str().unwrap_or("").to_string()
    }

    /// The port, or the empty string if unset.
    pub fn port(&self) -> String {
        self.url.port().map(|p| p.to_string()).unwrap_or_default()
    }

    /// The URL path.
    pub fn pathname(&self) -> String {
        self.url.path().to_string()
    }

    /// The query string, including the leading `?`, or empty.
    pub fn search(&self) -> String {
        self.url.query().map(|q| format!("?{q}")).unwrap_or_default()
    }

    /// The fragment, including the leading `#`, or empty.
    pub fn hash(&self) -> String {
        self.url.fragment().map(|f| format!("#{f}")).unwrap_or_default()
    }

    /// `protocol + "//" + host`.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    state: Option<String>,
    title: String,
    url: String,
}

/// The document's session-history stack: one entry per
/// `push_state`/`replace_state` call, navigable with `back`/`forward`/`go`.
#[derive(Debug)]
pub struct History {
    entries: RwLock<Vec<HistoryEntry>>,
    index: RwLock<usize>,
}

impl History {
    fn new(initial_url: &str) -> Self {
        Self {
            entries: RwLock::new(vec![HistoryEntry { state: None, title: String::new(), url: initial_url.to_string() }]),
            index: RwLock::new(0),
        }
    }

    /// Number of entries in the stack.
    pub fn length(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// The serialized state of the current entry, if any.
    pub fn state(&self) -> Option<String> {
        let entries = self.entries.read().unwrap();
        entries.get(*self.index.read().unwrap()).and_then(|e| e.state.clone())
    }

    /// Pushes a new entry after the current one, truncating any forward
    /// entries (mirrors `window.history.pushState`).
    pub fn push_state(&self, state: Option<String>, title: &str, url: &str) {
        let mut entries = self.entries.write().unwrap();
        let mut index = self.index.write().unwrap();
        entries.truncate(*index + 1);
        entries.push(HistoryEntry { state, title: title.to_string(), url: url.to_string() });
        *index = entries.len() - 1;
    }

    /// Replaces the current entry in place.
    pub fn replace_state(&self, state: Option<String>, title: &str, url: &str) {
        let mut entries = self.entries.write().unwrap();
        let index = *self.index.read().unwrap();
        entries[index] = HistoryEntry { state, title: title.to_string(), url: url.to_string() };
    }

    /// Moves one entry back, if possible.
    pub fn back(&self) -> Option<String> {
        self.go(-1)
    }

    /// Moves one entry forward, if possible.
    pub fn forward(&self) -> Option<String> {
        self.go(1)
    }

    /// Moves `delta` entries relative to the current one, clamped to the
    /// stack bounds. Returns the resulting entry's URL, if the move
    /// landed within bounds.
    pub fn go(&self, delta: i64) -> Option<String> {
        let mut index = self.index.write().unwrap();
        let entries = self.entries.read().unwrap();
        let next = *index as i64 + delta;
        if next < 0 || next as usize >= entries.len() {
            return None;
        }
        *index = next as usize;
        Some(entries[*index].url.clone())
    }

    /// The URL of the current entry.
    pub fn current_url(&self) -> String {
        let entries = self.entries.read().unwrap();
        entries[*self.index.read().unwrap()].url.clone()
    }
}

/// The facade consumers construct: a `dom_core::Document` plus the
/// document-level `location`/`history` state `dom_core` does not model.
pub struct Document {
    /// The underlying node tree, attributes, selectors, and event
    /// dispatch.
    pub core: dom_core::Document,
    location: RwLock<Location>,
    history: History,
}

impl Document {
    /// Builds a document pre-populated with
    /// `<html><head></head><body></body></html>`, at `about:blank`.
    pub fn new() -> Self {
        Self::with_url("about:blank")
    }

    /// Builds a document at the given initial URL.
    pub fn with_url(href: &str) -> Self {
        let core = dom_core::Document::new();
        Self {
            core,
            location: RwLock::new(Location::new(href)),
            history: History::new(href),
        }
    }

    /// The current location view.
    pub fn location(&self) -> Location {
        self.location.read().unwrap().clone()
    }

    /// The session-history stack.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Navigates to `href`, recording it as a new history entry and
    /// updating `location`.
    pub fn navigate(&self, href: &str) -> Result<(), DomError> {
        let url = Url::parse(href).map_err(|_| DomError::Internal)?;
        self.history.push_state(None, "", url.as_str());
        *self.location.write().unwrap() = Location { url };
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for Document {
    type Target = dom_core::Document;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}
