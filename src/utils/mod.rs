//! Helpers shared across layers.
//!
//! - [`db_error`] - Database error classification
//! - [`url_validator`] - Validation of submitted URLs

pub mod db_error;
pub mod url_validator;
