//! # jsonm-core
//!
//! A JSON value model with its own tokenizer, recursive-descent parser and
//! renderer.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonm_core::{parse, render, Value};
//!
//! let mut doc = parse(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! assert_eq!(doc.get("name").unwrap().get_string().unwrap(), "Alice");
//!
//! // Write-lookup inserts a null entry on a miss.
//! doc.get_or_insert("team").unwrap().set_string("blue");
//! assert_eq!(doc.get("team").unwrap(), &Value::from("blue"));
//!
//! assert_eq!(
//!     render(&doc),
//!     r#"{ "team":"blue", "scores":[ 95, 87 ], "name":"Alice" }"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, the six-variant document node, with accessors and mutators
//! - [`sequence`]: `Sequence<T>`, the ordered container behind arrays and objects
//! - [`tokenizer`]: character stream → tokens
//! - [`parser`]: tokens → `Value`, with depth-checked recursion
//! - [`renderer`]: `Value` → text
//! - [`options`]: `ParseOptions` (maximum nesting depth)
//! - [`error`]: `JsonError` and the crate `Result` alias
//!
//! Strings are taken verbatim between quotes: escape sequences are neither
//! decoded by the tokenizer nor produced by the renderer.

pub mod error;
pub mod interop;
pub mod options;
pub mod parser;
pub mod renderer;
pub mod sequence;
pub mod tokenizer;
pub mod value;

pub use error::{JsonError, Result};
pub use options::ParseOptions;
pub use parser::{
    parse, parse_all, parse_all_with_options, parse_reader, parse_reader_with_options,
    parse_with_options, Parser,
};
pub use renderer::{render, render_to};
pub use sequence::Sequence;
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use value::{Entry, Value};
