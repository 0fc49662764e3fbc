//! Structural completeness checks for code files.

use crate::diag::Diagnostic;
use crate::project::types::CodeFile;

/// A well-formed script file declares a namespace and a public type. Both
/// checks are warnings: the file may still parse into callables.
pub fn check_code_file(file: &CodeFile, diags: &mut Vec<Diagnostic>) {
    if !has_namespace_declaration(&file.source_text) {
        diags.push(Diagnostic::warning(
            "C001",
            file.id.as_str(),
            None,
            format!("Code file '{}' has no namespace declaration", file.name),
        ));
    }
    if !has_public_type_declaration(&file.source_text) {
        diags.push(Diagnostic::warning(
            "C002",
            file.id.as_str(),
            None,
            format!("Code file '{}' has no public type declaration", file.name),
        ));
    }
}

fn has_namespace_declaration(source: &str) -> bool {
    source
        .lines()
        .any(|line| line.trim_start().starts_with("namespace "))
}

fn has_public_type_declaration(source: &str) -> bool {
    source.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with("public class ")
            || line.starts_with("public static class ")
            || line.starts_with("public struct ")
    })
}
