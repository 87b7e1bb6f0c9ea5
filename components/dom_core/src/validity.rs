//! Constraint validation (C5/C10): `ValidityState` plus the
//! `checkValidity`/`reportValidity`/`setCustomValidity` trio.
//!
//! `compute_validity` is a pure function over the handful of attributes a
//! headless DOM can evaluate without layout: `required`, `pattern`,
//! `minlength`/`maxlength`, `min`/`max`, `type`, and a value supplied by
//! the caller (this workspace has no live form-control value distinct
//! from the `value` attribute). Constraints that need rendering
//! (`:invalid` styling, focus-driven UI) are out of scope.

/// The subset of the HTML `ValidityState` interface this workspace can
/// compute without a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub custom_error: bool,
}

impl ValidityState {
    /// `true` iff every individual failure flag is clear.
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.range_underflow
            || self.range_overflow
            || self.custom_error)
    }

    /// A human-readable message keyed off the first failing flag, checked
    /// in the order the HTML spec reports them. Wording is not part of
    /// the contract — only the flags are — but a message is convenient
    /// for `reportValidity` callers.
    pub fn validation_message(&self) -> Option<&'static str> {
        if self.custom_error {
            Some("custom error")
        } else if self.value_missing {
            Some("value missing")
        } else if self.type_mismatch {
            Some("type mismatch")
        } else if self.pattern_mismatch {
            Some("pattern mismatch")
        } else if self.too_short {
            Some("too short")
        } else if self.too_long {
            Some("too long")
        } else if self.range_underflow {
            Some("range underflow")
        } else if self.range_overflow {
            Some("range overflow")
        } else {
            None
        }
    }
}

/// The attributes relevant to constraint validation, read from an
/// element. `value` stands in for the live control value a headless DOM
/// has no runtime rendering of.
#[derive(Debug, Clone, Default)]
pub struct ValidationInput<'a> {
    pub input_type: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub pattern: Option<&'a str>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub custom_message: Option<&'a str>,
}

/// Computes validity for an element given its constraint-relevant
/// attributes.
pub fn compute_validity(input: ValidationInput<'_>) -> ValidityState {
    let has_value = !input.value.is_empty();
    let value_missing = input.required && !has_value;

    let type_mismatch = has_value && !type_matches(input.input_type, input.value);

    let pattern_mismatch = has_value
        && input
            .pattern
            .map(|p| !anchored_pattern_matches(p, input.value))
            .unwrap_or(false);

    let too_short = input
        .min_length
        .map(|min| has_value && input.value.chars().count() < min)
        .unwrap_or(false);
    let too_long = input
        .max_length
        .map(|max| input.value.chars().count() > max)
        .unwrap_or(false);

    let numeric_value = has_value.then(|| input.value.parse::<f64>().ok()).flatten();
    let range_underflow = match (input.min, numeric_value) {
        (Some(min), Some(v)) => v < min,
        _ => false,
    };
    let range_overflow = match (input.max, numeric_value) {
        (Some(max), Some(v)) => v > max,
        _ => false,
    };

    ValidityState {
        value_missing,
        type_mismatch,
        pattern_mismatch,
        too_long,
        too_short,
        range_underflow,
        range_overflow,
        custom_error: input.custom_message.is_some(),
    }
}

/// Whether `value` is well-formed for `input_type`. Types with no
/// well-formedness constraint of their own (`text`, `range`, …) always
/// match.
fn type_matches(input_type: &str, value: &str) -> bool {
    match input_type {
        "email" => value.contains('@') && !value.starts_with('@') && !value.ends_with('@'),
        "url" => value.contains("://"),
        "number" | "range" => value.parse::<f64>().is_ok(),
        _ => true,
    }
}

/// A small, dependency-free regex-like matcher for the common `pattern`
/// shapes seen in form markup: literal runs, `.`, character classes
/// (`[a-z0-9]`, with an optional leading `^`), and `*`/`+`/`?` quantifiers
/// on the immediately preceding atom. The HTML `pattern` attribute is
/// implicitly anchored at both ends.
fn anchored_pattern_matches(pattern: &str, value: &str) -> bool {
    let atoms = compile_pattern(pattern);
    matches_from(&atoms, 0, value.as_bytes(), 0)
}

#[derive(Debug, Clone)]
enum Atom {
    Literal(u8),
    Any,
    Class { negated: bool, ranges: Vec<(u8, u8)>, singles: Vec<u8> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
    One,
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
}

fn compile_pattern(pattern: &str) -> Vec<(Atom, Quantifier)> {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    let mut out = Vec::new();
    while i < bytes.len() {
        let atom = match bytes[i] {
            b'.' => {
                i += 1;
                Atom::Any
            }
            b'[' => {
                let end = pattern[i..].find(']').map(|p| i + p).unwrap_or(bytes.len());
                let inner = &pattern[i + 1..end.min(pattern.len())];
                i = (end + 1).min(bytes.len());
                parse_class(inner)
            }
            c => {
                i += 1;
                Atom::Literal(c)
            }
        };
        let quantifier = match bytes.get(i) {
            Some(b'*') => {
                i += 1;
                Quantifier::ZeroOrMore
            }
            Some(b'+') => {
                i += 1;
                Quantifier::OneOrMore
            }
            Some(b'?') => {
                i += 1;
                Quantifier::ZeroOrOne
            }
            _ => Quantifier::One,
        };
        out.push((atom, quantifier));
    }
    out
}

fn parse_class(inner: &str) -> Atom {
    let (negated, inner) = match inner.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let bytes = inner.as_bytes();
    let mut ranges = Vec::new();
    let mut singles = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if i + 2 < bytes.len() && bytes[i + 1] == b'-' {
            ranges.push((bytes[i], bytes[i + 2]));
            i += 3;
        } else {
            singles.push(bytes[i]);
            i += 1;
        }
    }
    Atom::Class { negated, ranges, singles }
}

fn atom_matches(atom: &Atom, b: u8) -> bool {
    match atom {
        Atom::Literal(l) => *l == b,
        Atom::Any => true,
        Atom::Class { negated, ranges, singles } => {
            let hit = singles.contains(&b) || ranges.iter().any(|&(lo, hi)| b >= lo && b <= hi);
            hit != *negated
        }
    }
}

fn matches_from(atoms: &[(Atom, Quantifier)], atom_idx: usize, value: &[u8], pos: usize) -> bool {
    if atom_idx == atoms.len() {
        return pos == value.len();
    }
    let (atom, quantifier) = &atoms[atom_idx];
    match quantifier {
        Quantifier::One => {
            pos < value.len() && atom_matches(atom, value[pos]) && matches_from(atoms, atom_idx + 1, value, pos + 1)
        }
        Quantifier::ZeroOrOne => {
            (pos < value.len() && atom_matches(atom, value[pos]) && matches_from(atoms, atom_idx + 1, value, pos + 1))
                || matches_from(atoms, atom_idx + 1, value, pos)
        }
        Quantifier::ZeroOrMore | Quantifier::OneOrMore => {
            let min_repeats = if *quantifier == Quantifier::OneOrMore { 1 } else { 0 };
            let mut count = 0;
            let mut cursor = pos;
            while cursor < value.len() && atom_matches(atom, value[cursor]) {
                cursor += 1;
                count += 1;
            }
            // Greedy with backtracking: try the longest match first.
            while count + 0 >= min_repeats {
                if matches_from(atoms, atom_idx + 1, value, pos + count) {
                    return true;
                }
                if count == 0 {
                    break;
                }
                count -= 1;
            }
            false
        }
    }
}
