//! Heuristic type compatibility over the variable type vocabulary.
//!
//! This is a best-effort linter aid, not a sound type system: false
//! negatives are acceptable, spurious hard failures are not. Callers must
//! treat a "compatible" answer as absence of evidence rather than proof.

/// The built-in (non-struct) type vocabulary.
pub const BUILTIN_TYPES: [&str; 7] = [
    "string", "number", "integer", "float", "boolean", "datetime", "object",
];

pub fn is_builtin(ty: &str) -> bool {
    BUILTIN_TYPES.contains(&ty)
}

pub fn is_numeric(ty: &str) -> bool {
    matches!(ty, "integer" | "float" | "number")
}

/// Can a value of `source` be used where `target` is expected?
///
/// Identity always holds; the numeric family is mutually compatible;
/// `object` is a universal sink in both directions; everything else is
/// incompatible. Struct names only match themselves.
pub fn compatible(source: &str, target: &str) -> bool {
    if source == target {
        return true;
    }
    if is_numeric(source) && is_numeric(target) {
        return true;
    }
    source == "object" || target == "object"
}

/// Translate an embedded-script parameter type name into the variable
/// type vocabulary. Unknown names pass through unchanged so struct types
/// still compare by identity.
pub fn map_script_type(ty: &str) -> &str {
    match ty {
        "int" | "long" | "short" | "byte" | "uint" | "ulong" => "integer",
        "float" | "double" | "decimal" => "float",
        "string" | "String" | "char" => "string",
        "bool" | "Boolean" => "boolean",
        "DateTime" | "DateTimeOffset" | "TimeSpan" => "datetime",
        "object" | "var" | "dynamic" => "object",
        other => other,
    }
}
