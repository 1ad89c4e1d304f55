//! Scope CSS
//!
//! CSS scoping by selector prefixing. Rules authored between a
//! `/* SCOPE <name> */` marker and the next `/* END */` marker are rewritten
//! so every selector is tied to the `.<name>` class, giving component-style
//! isolation without a CSS-in-JS system. Text outside marker pairs passes
//! through byte-for-byte.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ScopeError};
use crate::parse_util::ParseLocation;
use crate::selector_prefixer::apply_prefix;

/// Opening marker: a block comment containing `SCOPE` followed by whitespace
/// and the scope name.
static SCOPE_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*\s*SCOPE\s+(\S+)\s*\*/").unwrap());

/// Closing marker: a block comment whose content is exactly `END`.
static SCOPE_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*\s*END\s*\*/").unwrap());

/// The scoping preprocessor. One instance rewrites any number of independent
/// CSS text blobs; it holds no state between invocations.
pub struct ScopeCss;

impl ScopeCss {
    pub fn new() -> Self {
        ScopeCss
    }

    /// Rewrite `css_text`, prefixing every selector inside each scope block
    /// with `"." + name` from that block's opening marker.
    ///
    /// Scope blocks do not nest: the search for the next opening marker
    /// always starts after the previous closing marker. An opening marker
    /// with no closing marker fails the whole rewrite; no partial output is
    /// produced.
    pub fn rewrite_css_text(&self, css_text: &str) -> Result<String> {
        let mut out = String::with_capacity(css_text.len());
        let mut cursor = 0;

        while let Some(caps) = SCOPE_OPEN_RE.captures(&css_text[cursor..]) {
            let open = caps.get(0).unwrap();
            let name = caps.get(1).unwrap().as_str();

            // Text outside any scope passes through unmodified.
            out.push_str(&css_text[cursor..cursor + open.start()]);

            let inner_start = cursor + open.end();
            let close = SCOPE_CLOSE_RE.find(&css_text[inner_start..]).ok_or_else(|| {
                ScopeError::UnclosedScopeBlock {
                    name: name.to_string(),
                    location: ParseLocation::from_offset(css_text, cursor + open.start()),
                }
            })?;

            let inner = &css_text[inner_start..inner_start + close.start()];
            out.push_str(&apply_prefix(inner, &format!(".{}", name)));

            cursor = inner_start + close.end();
        }

        out.push_str(&css_text[cursor..]);
        Ok(out)
    }
}

impl Default for ScopeCss {
    fn default() -> Self {
        Self::new()
    }
}
