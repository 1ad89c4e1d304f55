//! Selector Prefixer Tests

mod utils;
use scoped_css::prefix_selector;
use utils::{apply, assert_not_contains};

#[test]
fn should_substitute_the_prefix_for_root() {
    assert_eq!(apply("root { color: red; }", ".card"), ".card { color: red; }\n\n");
}

#[test]
fn should_substitute_the_prefix_in_root_compounds() {
    assert_eq!(apply("root:hover { x: 1; }", ".card"), ".card:hover { x: 1; }\n\n");
    assert_eq!(apply("root.active { x: 1; }", ".card"), ".card.active { x: 1; }\n\n");
    assert_eq!(apply("root .child { x: 1; }", ".card"), ".card .child { x: 1; }\n\n");
}

#[test]
fn should_prefix_ordinary_selectors_as_descendants() {
    assert_eq!(apply(".btn { x: 1; }", ".card"), ".card .btn { x: 1; }\n\n");
}

#[test]
fn should_not_treat_root_like_identifiers_as_root() {
    assert_eq!(prefix_selector(".card", "rooted"), ".card rooted");
}

#[test]
fn should_join_rewritten_selector_lists_with_newlines() {
    assert_eq!(
        apply("one, two, three { x: 1; }", ".s"),
        ".s one,\n.s two,\n.s three { x: 1; }\n\n"
    );
}

#[test]
fn should_preserve_the_selector_count() {
    let out = apply("a, b, c, d { x: 1; }", ".s");
    assert_eq!(out.matches(".s ").count(), 4);
}

#[test]
fn should_use_the_parent_prefix_for_directory_selectors() {
    assert_eq!(
        apply("directory.active { x: 1; }", ".nav-item"),
        ".nav.active { x: 1; }\n\n"
    );
    assert_eq!(prefix_selector(".card-item", "directory.active"), ".card.active");
    assert_eq!(prefix_selector(".side-menu-entry", "directory:hover"), ".side-menu:hover");
    // A single-segment prefix has no parent left to keep.
    assert_eq!(prefix_selector(".card", "directory.active"), ".active");
}

#[test]
fn should_leave_at_rule_headers_untouched() {
    assert_eq!(prefix_selector(".card", "@charset \"utf-8\""), "@charset \"utf-8\"");
}

#[test]
fn should_leave_comment_selectors_untouched() {
    assert_eq!(prefix_selector(".card", "/* note"), "/* note");
}

#[test]
fn should_reprefix_media_rule_bodies() {
    assert_eq!(
        apply("@media (min-width: 1px) { .x { y: 1; } }", ".card"),
        "@media (min-width: 1px) {\n    .card .x { y: 1; }\n}\n\n"
    );
}

#[test]
fn should_substitute_root_inside_media_rule_bodies() {
    assert_eq!(
        apply("@media screen { root { x: 1; } }", ".card"),
        "@media screen {\n    .card { x: 1; }\n}\n\n"
    );
}

#[test]
fn should_rewrite_every_rule_inside_a_media_body() {
    assert_eq!(
        apply("@media screen { .a { x: 1; } .b { y: 2; } }", ".card"),
        "@media screen {\n    .card .a { x: 1; }\n\n.card .b { y: 2; }\n}\n\n"
    );
}

#[test]
fn should_remove_comments_from_rule_bodies() {
    let out = apply(".a { x: 1; /* note */ y: 2; }", ".card");
    assert_eq!(out, ".card .a { x: 1;  y: 2; }\n\n");
    assert_not_contains(&out, "note");
}

#[test]
fn should_prefix_an_empty_selector_rule() {
    assert_eq!(apply("{ x: 1; }", ".card"), ".card  { x: 1; }\n\n");
}
