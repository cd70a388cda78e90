//! Natural ("human") ordering of file names
//!
//! Splits a name into alternating runs of text and digits and compares the
//! runs pairwise: digit runs by numeric value, text runs case-insensitively.
//! Only ASCII `0-9` count as digits; other scripts' digits sort as text.
//! This places `img2.png` before `img10.png`, which plain lexical ordering
//! would invert.

use std::cmp::Ordering;

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPart {
    /// Lowercased non-digit run
    Text(String),
    /// Digit run with leading zeros stripped (so `007` and `7` are equal)
    Number(String),
}

impl Ord for KeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyPart::Text(a), KeyPart::Text(b)) => a.cmp(b),
            // Equal-length digit strings without leading zeros order like their values,
            // and a longer one is always larger.
            (KeyPart::Number(a), KeyPart::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            // Keys always alternate text/number starting with text, so mixed
            // pairs only come from hand-built keys.
            (KeyPart::Text(_), KeyPart::Number(_)) => Ordering::Greater,
            (KeyPart::Number(_), KeyPart::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the natural sort key for a name.
///
/// The key always starts with a (possibly empty) text run and then alternates
/// number, text, number, ... so that two keys compared position by position
/// always compare runs of the same kind.
///
/// # Examples
///
/// ```
/// use gridsheet::natural::{natural_key, KeyPart};
///
/// let key = natural_key("Img10.png");
/// assert_eq!(
///     key,
///     vec![
///         KeyPart::Text("img".to_string()),
///         KeyPart::Number("10".to_string()),
///         KeyPart::Text(".png".to_string()),
///     ]
/// );
/// ```
pub fn natural_key(name: &str) -> Vec<KeyPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            if digits.is_empty() {
                parts.push(KeyPart::Text(text.to_lowercase()));
                text.clear();
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                parts.push(number_part(&digits));
                digits.clear();
            }
            text.push(ch);
        }
    }

    if digits.is_empty() {
        parts.push(KeyPart::Text(text.to_lowercase()));
    } else {
        parts.push(number_part(&digits));
        // Trailing empty text run, matching a split that ends on a digit run
        parts.push(KeyPart::Text(String::new()));
    }

    parts
}

fn number_part(digits: &str) -> KeyPart {
    let trimmed = digits.trim_start_matches('0');
    KeyPart::Number(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
}

/// Compare two names in natural order.
///
/// Names whose keys are equal (for example `a01.png` and `a1.png`, or
/// `A.png` and `a.png`) fall back to byte order so the ordering is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

/// Sort names in place in natural order.
pub fn natural_sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| (natural_key(name.as_ref()), name.as_ref().to_string()));
}
