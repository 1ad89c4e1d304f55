//! Scoped CSS Test Utils

use scoped_css::{apply_prefix, ScopeCss};

#[allow(dead_code)]
pub fn rewrite(css: &str) -> scoped_css::Result<String> {
    ScopeCss::new().rewrite_css_text(css)
}

#[allow(dead_code)]
pub fn apply(css: &str, prefix: &str) -> String {
    apply_prefix(css, prefix)
}

#[allow(dead_code)]
pub fn assert_contains(actual: &str, expected: &str) {
    assert!(
        actual.contains(expected),
        "Expected '{}' to contain '{}'",
        actual,
        expected
    );
}

#[allow(dead_code)]
pub fn assert_not_contains(actual: &str, expected: &str) {
    assert!(
        !actual.contains(expected),
        "Expected '{}' to not contain '{}'",
        actual,
        expected
    );
}
