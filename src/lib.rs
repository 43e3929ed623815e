// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Extraction
//!
//! Splits a decoded email body into classified fragments and assembles the
//! part a reader actually wrote, without quoted history, signatures or
//! mobile-client boilerplate.
//!
//! # Features
//!
//! - Quoted (`>`) blocks, including their `On ... wrote:` headers
//! - Multi-line reply headers folded before scanning
//! - `--`, `__`, `-Name` and `Sent from my ...` signatures
//! - Outlook-style underscore delimiters
//! - Serializable fragment list for callers that need the structure
//!
//! # Example
//!
//! ```rust
//! use email_reply::{extract_visible_reply, parse};
//!
//! let body = "Sounds good.\n\nOn Tue, Jan 1, 2013, Bob wrote:\n> Lunch?";
//! assert_eq!(extract_visible_reply(body).unwrap(), "Sounds good.");
//!
//! let email = parse(body).unwrap();
//! assert_eq!(email.len(), 2);
//! assert!(email.fragments()[1].is_quoted());
//! ```

mod config;
mod error;
mod parser;
mod preprocess;
mod types;

pub use config::{ParserConfig, ParserConfigBuilder, defaults};
pub use error::{ParseError, Result};
pub use parser::{ReplyParser, extract_visible_reply, parse, parse_reader};
pub use preprocess::normalize;
pub use types::{Email, Fragment};
