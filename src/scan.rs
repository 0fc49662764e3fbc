//! Reference scanner: extracts variable names referenced from free text.
//!
//! Two reference shapes exist. Any text field may interpolate a variable
//! as `{name}`. Embedded script bodies may additionally use a variable as
//! a bare identifier, recovered by whole-word matching against the known
//! variable table. Scope precedence is never resolved here; that is the
//! caller's job via `project::Scope`.

use std::collections::BTreeSet;

use crate::project::types::Variable;

/// Collect `{identifier}` interpolation tokens, left to right, duplicates
/// collapsed. A `{` immediately starts a token that ends at the next `}`;
/// there is no nesting. Content that is not a valid identifier contributes
/// nothing.
pub fn scan_references(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = text;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else { break };
        let token = &after[..end];
        if is_identifier(token) {
            names.insert(token.to_string());
        }
        rest = &after[end + 1..];
    }
    names
}

/// Scan an embedded script body: interpolation tokens plus every known
/// variable name that occurs as a case-sensitive whole word in the code.
pub fn scan_code_references<'a, I>(code: &str, variables: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Variable>,
{
    let mut names = scan_references(code);
    for var in variables {
        if names.contains(&var.name) {
            continue;
        }
        if contains_word(code, &var.name) {
            names.insert(var.name.clone());
        }
    }
    names
}

/// If the trimmed text is exactly one interpolation token, its identifier.
pub fn single_token(text: &str) -> Option<&str> {
    let name = text.trim().strip_prefix('{')?.strip_suffix('}')?;
    is_identifier(name).then_some(name)
}

pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(pos) = text[from..].find(word) {
        let start = from + pos;
        let end = start + word.len();
        let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
        let after_ok = end == text.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return true;
        }
        from = start + 1;
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
