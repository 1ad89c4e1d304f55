//! Scoping Errors

use thiserror::Error;

use crate::parse_util::ParseLocation;

/// Errors raised while rewriting scoped CSS. All failures are fatal for the
/// whole rewrite; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// An opening `SCOPE` marker has no matching `END` marker before the end
    /// of the input.
    #[error("unclosed scope block '{name}' opened at {location}")]
    UnclosedScopeBlock {
        name: String,
        location: ParseLocation,
    },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
