//! Rule Parser
//!
//! Splits a block of CSS text into rules (selector list + brace-delimited
//! body) in a single pass, without building a full CSS AST. It tracks just
//! enough structure to split comma-separated selector lists at the top level
//! and to find each rule's true closing brace when the body contains nested
//! brace-delimited groups such as `@media` blocks.

use serde::{Deserialize, Serialize};

use crate::chars;
use crate::selector_prefixer::apply_prefix;

/// One CSS rule: its selectors in source order and its raw body text,
/// including the surrounding `{`...`}` braces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRule {
    pub selectors: Vec<String>,
    pub body: String,
}

impl CssRule {
    pub fn new(selectors: Vec<String>, body: String) -> Self {
        CssRule { selectors, body }
    }
}

/// Parse `code` into an ordered sequence of rules.
///
/// Well-formed `/* ... */` comments are deleted from the output; an
/// unterminated `/*` is not an error and flows through as literal text.
/// Bodies of nested at-rules are kept verbatim; use
/// [`apply_prefix`](crate::selector_prefixer::apply_prefix) to rewrite them
/// with a scope prefix.
pub fn parse_rules(code: &str) -> Vec<CssRule> {
    parse_rules_scoped(code, None)
}

/// Parse `code`, additionally rewriting the body of every `@media` rule with
/// `prefix` when one is supplied. This is the variant the selector prefixer
/// recurses through so that rules nested inside media queries receive the
/// same scope prefix as top-level rules.
pub(crate) fn parse_rules_scoped(code: &str, prefix: Option<&str>) -> Vec<CssRule> {
    let source: Vec<char> = code.chars().collect();
    let len = source.len();

    let mut rules = Vec::new();
    let mut selectors: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut in_body = false;
    let mut nested_brackets = 0usize;
    // Byte offset into `buf` where a nested `@media` body begins.
    let mut media_rule_start: Option<usize> = None;

    let mut i = 0;
    'outer: while i < len {
        let c = source[i];

        // Skip comments. If no closing `*/` exists the skip never triggers
        // and the `/` falls through as an ordinary character.
        if c == chars::SLASH && i + 1 < len && source[i + 1] == chars::STAR {
            let mut k = i + 2;
            while k < len {
                if source[k] == chars::SLASH && source[k - 1] == chars::STAR {
                    i = k + 1;
                    continue 'outer;
                }
                k += 1;
            }
        }

        match c {
            chars::COMMA if !in_body => {
                selectors.push(trim_selector(&buf));
                buf.clear();
            }

            chars::LBRACE => {
                if in_body {
                    buf.push(c);
                    nested_brackets += 1;
                } else {
                    let selector = trim_selector(&buf);
                    let is_media_rule = selector.starts_with("@media");
                    selectors.push(selector);
                    buf.clear();
                    buf.push(c);
                    in_body = true;
                    // Media rule bodies need the prefix applied to their
                    // contents as well.
                    if is_media_rule {
                        media_rule_start = Some(buf.len());
                    }
                }
            }

            chars::RBRACE => {
                if nested_brackets > 0 {
                    buf.push(c);
                    nested_brackets -= 1;
                } else {
                    if let (Some(start), Some(prefix)) = (media_rule_start, prefix) {
                        let mut media_rules = apply_prefix(&buf[start..], prefix);
                        // Keep the output close to the source: one trailing
                        // newline trimmed, body re-indented by four spaces.
                        if media_rules.ends_with(chars::NEWLINE) {
                            media_rules.pop();
                        }
                        buf.truncate(start);
                        buf.push_str("\n    ");
                        buf.push_str(&media_rules);
                    }
                    media_rule_start = None;
                    buf.push(c);
                    rules.push(CssRule::new(
                        std::mem::take(&mut selectors),
                        std::mem::take(&mut buf),
                    ));
                    in_body = false;
                }
            }

            _ => buf.push(c),
        }

        i += 1;
    }

    rules
}

fn trim_selector(buf: &str) -> String {
    buf.trim_matches(|c| c == chars::NEWLINE || c == chars::SPACE || c == chars::TAB)
        .to_string()
}
