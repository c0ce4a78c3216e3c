//! MT799 message parsing and validation.
//!
//! This crate provides the core functionality for ingesting SWIFT-style MT799
//! free-format messages: splitting the raw text into its five curly-brace
//! blocks, extracting the tagged fields of the text block, and validating
//! field content against the MT799 syntax rules.
//!
//! The parser and validator are pure, synchronous, and stateless; every
//! invocation is an independent function of its input, so calls may run fully
//! in parallel with no coordination.

// Internal modules
pub mod charset;
pub mod envelope;
pub mod error;
pub mod field;
pub mod mt799;
pub mod parser;
mod scanner;
pub mod validator;

// Re-export public types for easier access
pub use envelope::SwiftEnvelope;
pub use error::{Error, Result};
pub use field::FieldTag;
pub use mt799::{Mt799Fields, NARRATIVE_SEPARATOR};
pub use parser::parse_mt799;
pub use validator::validate;
