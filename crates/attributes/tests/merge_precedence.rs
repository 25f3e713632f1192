//! Tests for how matching rules are merged.
//!
//! Rules are applied in definition order and each rule overwrites only the
//! attributes it sets. Later `parse` calls append rules, so a repository file
//! parsed after a global file takes precedence over it.

use attributes::{AttrValue, AttributeSet, Attributes, Rule, parse_attributes};

// =============================================================================
// Per-key precedence
// =============================================================================

#[test]
fn later_rule_wins_for_same_key() {
    let mut set = AttributeSet::new();
    set.parse("*.txt eol=crlf\n*.txt eol=lf\n");

    assert_eq!(
        set.attrs_for_path("a.txt").get("eol"),
        Some(&AttrValue::from("lf"))
    );
}

#[test]
fn disjoint_keys_are_both_present() {
    let mut set = AttributeSet::new();
    set.parse("*.txt text\n*.txt eol=lf\n");

    let attrs = set.attrs_for_path("a.txt");
    assert_eq!(attrs.get("text"), Some(&AttrValue::Bool(true)));
    assert_eq!(attrs.get("eol"), Some(&AttrValue::from("lf")));
}

#[test]
fn more_general_later_rule_still_wins() {
    let mut set = AttributeSet::new();
    set.parse("/docs/*.md -text\n*.md text\n");

    assert_eq!(
        set.attrs_for_path("docs/readme.md").get("text"),
        Some(&AttrValue::Bool(true))
    );
}

#[test]
fn negation_within_one_line() {
    let mut set = AttributeSet::new();
    set.parse("*.md flag -flag\n");

    assert_eq!(
        set.attrs_for_path("a.md").get("flag"),
        Some(&AttrValue::Bool(false))
    );
}

#[test]
fn set_after_unset_flips_back() {
    let mut set = AttributeSet::new();
    set.parse("*.md -flag\n*.md flag\n");

    assert_eq!(
        set.attrs_for_path("a.md").get("flag"),
        Some(&AttrValue::Bool(true))
    );
}

#[test]
fn unset_persists_when_later_rule_does_not_mention_key() {
    let mut set = AttributeSet::new();
    set.parse("*.md -text\n*.md eol=lf\n");

    let attrs = set.attrs_for_path("a.md");
    assert_eq!(attrs.get("text"), Some(&AttrValue::Bool(false)));
    assert_eq!(attrs.get("eol"), Some(&AttrValue::from("lf")));
}

#[test]
fn merged_keys_keep_first_seen_order() {
    let mut set = AttributeSet::new();
    set.parse("* text=auto eol=crlf\n*.sh eol=lf diff\n");

    let keys: Vec<_> = set.attrs_for_path("run.sh").keys().map(str::to_owned).collect();
    assert_eq!(keys, ["text", "eol", "diff"]);
}

// =============================================================================
// Non-matching rules
// =============================================================================

#[test]
fn non_matching_rules_do_not_contribute() {
    let mut with_noise = AttributeSet::new();
    with_noise.parse("*.rs diff=rust\n*.py diff=python\n/other/*.rs -diff\n");

    let mut without_noise = AttributeSet::new();
    without_noise.parse("*.rs diff=rust\n");

    assert_eq!(
        with_noise.attrs_for_path("src/lib.rs"),
        without_noise.attrs_for_path("src/lib.rs")
    );
}

#[test]
fn comments_and_blank_lines_never_match() {
    let mut set = AttributeSet::new();
    set.add_rules([
        Rule::comment("*"),
        Rule::empty(),
        Rule::pattern("*", parse_attributes("text")),
    ]);

    assert_eq!(set.rules_for_path("a").len(), 1);
}

// =============================================================================
// Layered sources
// =============================================================================

#[test]
fn local_file_parsed_second_overrides_global() {
    let mut set = AttributeSet::new();
    set.parse("*.txt text eol=crlf\n*.bin binary\n");
    set.parse("*.txt eol=lf\n");

    let attrs = set.attrs_for_path("notes/a.txt");
    assert_eq!(attrs.get("text"), Some(&AttrValue::Bool(true)));
    assert_eq!(attrs.get("eol"), Some(&AttrValue::from("lf")));
    assert_eq!(set.len(), 3);
}

#[test]
fn programmatic_rules_take_part_in_merging() {
    let mut set = AttributeSet::new();
    set.parse("*.lock text\n");

    let attrs: Attributes = [("text", AttrValue::Bool(false)), ("merge", AttrValue::from("ours"))]
        .into_iter()
        .collect();
    set.add_rule(Rule::pattern("Cargo.lock", attrs));

    let merged = set.attrs_for_path("Cargo.lock");
    assert_eq!(merged.get("text"), Some(&AttrValue::Bool(false)));
    assert_eq!(merged.get("merge"), Some(&AttrValue::from("ours")));
}

#[test]
fn replace_discards_previous_precedence() {
    let mut set = AttributeSet::new();
    set.parse("*.txt eol=crlf\n");
    set.replace([Rule::pattern("*.txt", parse_attributes("text"))]);

    let attrs = set.attrs_for_path("a.txt");
    assert!(!attrs.contains_key("eol"));
    assert_eq!(attrs.get("text"), Some(&AttrValue::Bool(true)));
}
