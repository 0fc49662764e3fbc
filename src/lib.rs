pub mod callsite;
pub mod compile;
pub mod diag;
pub mod error;
pub mod expr;
pub mod lattice;
pub mod project;
pub mod scan;
pub mod signature;
pub mod wasm;
