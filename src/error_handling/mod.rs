//! Error types.
//!
//! Only initialization and the fetch step can fail. Extraction and scoring are
//! total over their input and have no error type.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError};
