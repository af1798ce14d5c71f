// src/validate/mod.rs
// =============================================================================
// Structural validation of arf.json.
//
// The validator never fails: it walks the tree once and returns a
// ValidationReport describing every problem it found. Deciding what to print
// and which exit code to use is left to the arf-validate binary.
// =============================================================================

mod structure;

pub use structure::{
    validate_document, DuplicateUrl, StructuralError, StructuralErrorKind, ValidationReport,
};
