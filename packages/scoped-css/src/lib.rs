#![deny(clippy::all)]

//! scoped-css
//!
//! A CSS scoping preprocessor: rewrites a CSS source blob so that rules
//! authored inside `/* SCOPE <name> */` ... `/* END */` regions are prefixed
//! with the `.<name>` scope class. The rewrite is a pure, synchronous text
//! transform; file discovery, minification and rebuild scheduling belong to
//! the surrounding build pipeline, not to this crate.

pub mod chars;
mod error;
pub mod parse_util;
pub mod rule_parser;
pub mod scope_css;
pub mod selector_prefixer;

// Re-exports
pub use error::{Result, ScopeError};
pub use rule_parser::{parse_rules, CssRule};
pub use scope_css::ScopeCss;
pub use selector_prefixer::{apply_prefix, prefix_selector};
