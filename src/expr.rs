//! Boolean-context expression checks for decision and loop conditions.
//!
//! Three prioritized heuristics, first match wins. Passing them claims
//! nothing about semantic soundness; the validator only reports the
//! mistakes it can recognize.

use crate::diag::ExpressionVerdict;
use crate::lattice;
use crate::project::Scope;
use crate::scan::{is_identifier, single_token};

const COMPARISON_OPS: [&str; 8] = ["==", "!=", "===", "!==", ">", "<", ">=", "<="];

/// Judge a free-text condition against the resolved variable table.
pub fn validate_expression(text: &str, scope: &Scope) -> ExpressionVerdict {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ExpressionVerdict::valid();
    }
    if let Some(verdict) = check_assignment_confusion(trimmed) {
        return verdict;
    }
    if let Some(verdict) = check_binary_mismatch(trimmed, scope) {
        return verdict;
    }
    if let Some(verdict) = check_boolean_context(trimmed, scope) {
        return verdict;
    }
    ExpressionVerdict::valid()
}

/// A single `=` in a condition almost always means a mistyped `==`. The
/// suggested fix rewrites every lone `=` at once.
fn check_assignment_confusion(expr: &str) -> Option<ExpressionVerdict> {
    let positions = lone_equals_positions(expr);
    if positions.is_empty() || token_spans(expr).is_empty() {
        return None;
    }

    let mut replacement = String::with_capacity(expr.len() + positions.len());
    let mut next = positions.iter().peekable();
    for (i, ch) in expr.char_indices() {
        replacement.push(ch);
        if next.peek() == Some(&&i) {
            replacement.push('=');
            next.next();
        }
    }

    Some(ExpressionVerdict::invalid(
        "A single '=' assigns instead of comparing; use '==' to compare",
        Some(replacement),
    ))
}

/// Byte offsets of every `=` that is not part of `==`, `!=`, `>=`, `<=`.
fn lone_equals_positions(expr: &str) -> Vec<usize> {
    let bytes = expr.as_bytes();
    let mut positions = Vec::new();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'=' {
            continue;
        }
        let prev = if i > 0 { bytes[i - 1] } else { 0 };
        let next = if i + 1 < bytes.len() { bytes[i + 1] } else { 0 };
        if prev != b'=' && prev != b'!' && prev != b'<' && prev != b'>' && next != b'=' {
            positions.push(i);
        }
    }
    positions
}

/// For every `{a} <op> {b}` pair, both sides must resolve to compatible
/// types. The repair is semantic, so no replacement is suggested.
fn check_binary_mismatch(expr: &str, scope: &Scope) -> Option<ExpressionVerdict> {
    let spans = token_spans(expr);
    for pair in spans.windows(2) {
        let (_, end_a, lhs) = pair[0];
        let (start_b, _, rhs) = pair[1];
        let between = expr[end_a..start_b].trim();
        if !COMPARISON_OPS.contains(&between) {
            continue;
        }
        let (Some(a), Some(b)) = (scope.resolve(lhs), scope.resolve(rhs)) else {
            continue;
        };
        if !lattice::compatible(&a.declared_type, &b.declared_type) {
            return Some(ExpressionVerdict::invalid(
                format!(
                    "Cannot compare '{{{lhs}}}' of type {} with '{{{rhs}}}' of type {} using '{between}'",
                    a.declared_type, b.declared_type
                ),
                None,
            ));
        }
    }
    None
}

/// An expression that is exactly one non-boolean token gets a
/// type-appropriate coercion suggestion.
fn check_boolean_context(expr: &str, scope: &Scope) -> Option<ExpressionVerdict> {
    let name = single_token(expr)?;
    let var = scope.resolve(name)?;
    if var.declared_type == "boolean" {
        return None;
    }

    let suggestion = match var.declared_type.as_str() {
        "string" => format!("{{{name}}} != \"\""),
        ty if lattice::is_numeric(ty) => format!("{{{name}}} != 0"),
        _ => format!("{{{name}}} != null"),
    };
    Some(ExpressionVerdict::invalid(
        format!(
            "'{{{name}}}' has type {} but is used where a boolean is expected",
            var.declared_type
        ),
        Some(suggestion),
    ))
}

/// Spans of valid interpolation tokens: (start, end-exclusive, name).
fn token_spans(expr: &str) -> Vec<(usize, usize, &str)> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < expr.len() {
        if expr.as_bytes()[i] != b'{' {
            i += 1;
            continue;
        }
        let Some(rel) = expr[i + 1..].find('}') else {
            break;
        };
        let name = &expr[i + 1..i + 1 + rel];
        let end = i + rel + 2;
        if is_identifier(name) {
            spans.push((i, end, name));
        }
        i = end;
    }
    spans
}
