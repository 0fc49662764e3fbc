//! Signature parser: public method signatures from embedded-script source.
//!
//! A heuristic line scanner, not a real parser for the scripting language.
//! It is isolated behind `parse_signatures` so a proper lexer could be
//! dropped in later without touching downstream consumers. There is no
//! fatal parse state: a line that matches nothing is simply skipped and an
//! unparsable signature is omitted from the output.

use crate::project::types::{Callable, Parameter};
use crate::scan::is_identifier;

/// Extract all public method signatures from one file's source text, in
/// declaration order. Doc comments immediately preceding a declaration
/// (attributes and blank lines may intervene) become its description; a
/// comment block followed by unrelated code attaches to nothing.
pub fn parse_signatures(source: &str) -> Vec<Callable> {
    let mut callables = Vec::new();
    let mut pending_doc: Vec<String> = Vec::new();

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(text) = doc_comment_text(line) {
            if !text.is_empty() {
                pending_doc.push(text);
            }
            continue;
        }
        if is_attribute(line) {
            continue;
        }
        if let Some(callable) = parse_declaration(line, &pending_doc) {
            callables.push(callable);
            pending_doc.clear();
            continue;
        }
        if is_structural(line) {
            continue;
        }
        // Ordinary code breaks the comment-to-declaration attachment.
        pending_doc.clear();
    }

    callables
}

/// Comment text with markers and markup tags stripped, or None for a
/// non-comment line.
fn doc_comment_text(line: &str) -> Option<String> {
    let rest = line
        .strip_prefix("///")
        .or_else(|| line.strip_prefix("//"))?;
    Some(strip_markup(rest))
}

/// Drop `<summary>`-style markup tags, keeping their inner text.
fn strip_markup(text: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

fn is_attribute(line: &str) -> bool {
    line.starts_with('[') || line.starts_with('@')
}

/// Lines that shape the file without being executable code. These neither
/// emit a signature nor break doc attachment, so a comment above a class
/// header still reaches the first method inside.
fn is_structural(line: &str) -> bool {
    line == "{"
        || line == "}"
        || line.starts_with("using ")
        || line.starts_with("import ")
        || line.starts_with("namespace ")
        || line.starts_with("class ")
        || line.starts_with("struct ")
        || line.starts_with("public class ")
        || line.starts_with("public static class ")
        || line.starts_with("public struct ")
}

/// Match `public [static] <returnType> <name>(<paramList>)`.
fn parse_declaration(line: &str, pending_doc: &[String]) -> Option<Callable> {
    let rest = line.strip_prefix("public ")?.trim_start();
    let rest = match rest.strip_prefix("static ") {
        Some(after) => after.trim_start(),
        None => rest,
    };

    let open = rest.find('(')?;
    let close = rest.rfind(')')?;
    if close < open {
        return None;
    }

    let head = rest[..open].trim();
    let mut tokens = head.split_whitespace();
    let return_type = tokens.next()?;
    let name = tokens.next()?;
    if tokens.next().is_some() || !is_identifier(name) {
        return None;
    }

    Some(Callable {
        name: name.to_string(),
        return_type: return_type.to_string(),
        parameters: parse_parameters(&rest[open + 1..close]),
        description: pending_doc.join(" "),
    })
}

fn parse_parameters(text: &str) -> Vec<Parameter> {
    text.split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(parse_parameter)
        .collect()
}

/// Type is the second-to-last whitespace token, name the last, tolerating
/// modifier tokens before them. A default value marks the parameter
/// optional. Anything unparsable degrades to type `object` instead of
/// failing the signature.
fn parse_parameter(fragment: &str) -> Parameter {
    let (decl, optional) = match fragment.split_once('=') {
        Some((decl, _)) => (decl.trim(), true),
        None => (fragment, false),
    };

    let tokens: Vec<&str> = decl.split_whitespace().collect();
    match tokens.as_slice() {
        [.., ty, name] => Parameter {
            name: (*name).to_string(),
            param_type: (*ty).to_string(),
            optional,
        },
        [name] => Parameter {
            name: (*name).to_string(),
            param_type: "object".to_string(),
            optional,
        },
        [] => Parameter {
            name: String::new(),
            param_type: "object".to_string(),
            optional,
        },
    }
}
