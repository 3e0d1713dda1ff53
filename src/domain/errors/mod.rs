//! Error types.

mod submit_error;

pub use submit_error::SubmitError;
