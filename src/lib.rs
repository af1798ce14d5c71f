// src/lib.rs
// =============================================================================
// Library side of arf-tools.
//
// Both binaries (arf-validate and arf-check-links) are thin wrappers around
// the modules declared here:
// - tree: the arf.json model, loading, and the depth-first URL flattening
// - validate: structural validation and duplicate tracking
// - checker: the bounded-concurrency HEAD probe engine and its report
// - cli: clap argument structs shared by the binaries
// - error: the library error type
// =============================================================================

pub mod checker;
pub mod cli;
pub mod error;
pub mod logging;
pub mod tree;
pub mod validate;

pub use error::{ArfError, Result};
