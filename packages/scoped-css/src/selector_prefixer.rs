//! Selector Prefixer
//!
//! Rewrites every selector of a parsed rule set with a scope prefix and
//! reassembles the rules into text. The body of an `@media` rule is rewritten
//! recursively with the same prefix, so rules nested in media queries are
//! scoped like top-level rules.

use crate::chars;
use crate::rule_parser::parse_rules_scoped;

/// How a single selector is rewritten, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorRewrite {
    /// A comment that survived as a selector token is left alone.
    Comment,
    /// An at-rule header is never prefixed.
    AtRule,
    /// The literal token `root` stands for the scope itself.
    RootExact,
    /// `root.x` / `root:x` / `root x`: the prefix replaces the `root` token.
    RootCompound,
    /// `directory...`: sibling styles share the parent scope's prefix with
    /// its last `-`-delimited segment dropped.
    Directory,
    /// Plain descendant-combinator prefixing.
    Descendant,
}

impl SelectorRewrite {
    fn classify(selector: &str) -> Self {
        if selector.starts_with("/*") {
            SelectorRewrite::Comment
        } else if selector.starts_with(chars::AT) {
            SelectorRewrite::AtRule
        } else if selector == "root" {
            SelectorRewrite::RootExact
        } else if selector.starts_with("root.")
            || selector.starts_with("root:")
            || selector.starts_with("root ")
        {
            SelectorRewrite::RootCompound
        } else if selector.starts_with("directory") {
            SelectorRewrite::Directory
        } else {
            SelectorRewrite::Descendant
        }
    }
}

/// Rewrite `code` so every selector carries `prefix`.
///
/// Each rule is emitted as its rewritten selectors joined with `",\n"`, a
/// space, the original body verbatim, then a blank line. Rules are
/// concatenated in source order.
pub fn apply_prefix(code: &str, prefix: &str) -> String {
    let mut buf = String::new();

    for rule in parse_rules_scoped(code, Some(prefix)) {
        let selectors: Vec<String> = rule
            .selectors
            .iter()
            .map(|selector| prefix_selector(prefix, selector))
            .collect();
        buf.push_str(&selectors.join(",\n"));
        buf.push(chars::SPACE);
        buf.push_str(&rule.body);
        buf.push_str("\n\n");
    }

    buf
}

/// Rewrite one selector per the prefixing policy.
pub fn prefix_selector(prefix: &str, selector: &str) -> String {
    match SelectorRewrite::classify(selector) {
        SelectorRewrite::Comment | SelectorRewrite::AtRule => selector.to_string(),
        SelectorRewrite::RootExact => prefix.to_string(),
        SelectorRewrite::RootCompound => {
            let rest = selector.strip_prefix("root").unwrap_or(selector);
            format!("{}{}", prefix, rest)
        }
        SelectorRewrite::Directory => {
            let rest = selector.strip_prefix("directory").unwrap_or(selector);
            format!("{}{}", parent_prefix(prefix), rest)
        }
        SelectorRewrite::Descendant => format!("{} {}", prefix, selector),
    }
}

/// Drop the last `-`-delimited segment of `prefix`; empty segments are
/// discarded before rejoining.
fn parent_prefix(prefix: &str) -> String {
    let mut parts: Vec<&str> = prefix
        .split(chars::MINUS)
        .filter(|part| !part.is_empty())
        .collect();
    parts.pop();
    parts.join("-")
}
