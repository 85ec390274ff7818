pub mod error;
pub mod parse;
pub mod validate;
pub mod wasm;

pub use error::{AdmissionError, Check, Violation};
pub use validate::{ValidationReport, Validator, validate, validate_json, validate_optional};
