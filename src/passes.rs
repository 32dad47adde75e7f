//! The ordered rewrite passes that turn GN text into approximate CMake text.
//!
//! Each pass is a global find-and-replace over the whole current buffer, and
//! each pass's output is the next pass's input. Order matters: the single-line
//! forms must run before the multi-line openers, and the append rewrites must
//! run after the plain-assignment ones. The passes are anchored to GN-specific
//! line shapes rather than to any parsed structure, so tokens inside string
//! literals or comments get rewritten too; that blindness is the accepted
//! price of the approach.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A double-quoted string literal, escaped quotes allowed inside.
static QUOTED_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""((?:\\"|[^"])+)""#).unwrap());

/// Statements to delete outright, with an optional trailing brace block.
/// The block match is greedy across lines.
static STRIPPED_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^\s*(?:import|assert|config|angle_source_set)\([^)]+\)(?: \{.*\})?$")
        .unwrap()
});

/// A list literal that closes on the line it opened: `[ "a", "b" ]`.
static SINGLE_LINE_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)\[ ((?:"[^"]*",? )*)\]$"#).unwrap());

/// `x += y` between two bare identifiers on one line.
static SINGLE_LINE_APPEND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\s*)(\w+) \+= (\w+)$").unwrap());

/// `name = [` opening a multi-line list (the bracket may already be gone).
static LIST_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)(\w+) = ?\[?").unwrap());

/// A line holding nothing but one quoted list element and its comma.
static LIST_ELEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?m)^(\s*)("[^"]+",)$"#).unwrap());

/// A line holding nothing but the closing bracket of a list.
static LIST_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)\]$").unwrap());

/// `name += [` opening a multi-line list append.
static APPEND_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)(\w+) \+= ?\[?").unwrap());

/// `if (expr) {` or `} else if (expr) {` opening a conditional.
static IF_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\s*)((?:\} else )?)if \((.+)\) \{$").unwrap());

/// A bare `} else if` line, left over when the condition wrapped.
static ELSE_IF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\} else if$").unwrap());

/// A bare `} else {` line.
static ELSE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)\} else \{$").unwrap());

/// A line holding nothing but a closing brace.
static BLOCK_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*)\}$").unwrap());

/// Insert `prefix` directly after the opening quote of every string literal.
///
/// The replacement goes through a closure so the caller's prefix lands in the
/// output verbatim, without being expanded as a replacement template.
pub fn prefix_paths(input: &str, prefix: &str) -> String {
    QUOTED_LITERAL
        .replace_all(input, |caps: &Captures| {
            format!("\"{}{}\"", prefix, &caps[1])
        })
        .into_owned()
}

/// Remove import, assert, config, and angle_source_set statements.
pub fn strip_statements(input: &str) -> String {
    STRIPPED_STATEMENT.replace_all(input, "").into_owned()
}

/// Rewrite list declarations and appends, single-line and multi-line.
///
/// `foo = [ "a", "b" ]` becomes `set(foo "a", "b" )`, and
///
/// ```text
/// sources = [
///   "foo.cpp",
/// ]
/// ```
///
/// becomes
///
/// ```text
/// set(sources
///     "foo.cpp",
/// )
/// ```
///
/// The leading indent of each rewritten line is doubled.
pub fn rewrite_lists(input: &str) -> String {
    let text = SINGLE_LINE_LIST.replace_all(input, " ${1})");
    // `$$` emits a literal dollar sign into the replacement.
    let text = SINGLE_LINE_APPEND.replace_all(&text, "${1} set(${2}, \"$${${2}};$${${3}}\")");
    let text = LIST_OPEN.replace_all(&text, "${1}${1}set(${2}");
    let text = LIST_ELEMENT.replace_all(&text, "${1}${1}${2}");
    let text = LIST_CLOSE.replace_all(&text, "${1}${1})");
    APPEND_OPEN
        .replace_all(&text, "${1}${1}list(APPEND ${2}")
        .into_owned()
}

/// Rewrite brace-delimited conditionals into CMake's paren style.
///
/// A `} else if (expr) {` line keeps its `} else ` prefix untranslated; only
/// a bare `} else if` continuation line becomes `elseif`. Both quirks match
/// the line shapes the upstream auto-formatter actually emits.
pub fn rewrite_conditionals(input: &str) -> String {
    let text = IF_OPEN.replace_all(input, "${1}${1}${2}if(${3})");
    let text = ELSE_IF.replace_all(&text, "elseif");
    let text = ELSE_OPEN.replace_all(&text, "${1}${1}else()");
    BLOCK_CLOSE
        .replace_all(&text, "${1}${1}endif()")
        .into_owned()
}

/// Translate GN logic operators to CMake keywords, everywhere they appear.
pub fn translate_operators(input: &str) -> String {
    input
        .replace(" || ", " OR ")
        .replace(" && ", " AND ")
        .replace(" == ", " STREQUAL ")
        .replace('!', " NOT ")
}

/// Run the full pass sequence over one GN file's text.
pub fn convert(source: &str, path_prefix: &str) -> String {
    let text = prefix_paths(source, path_prefix);
    let text = strip_statements(&text);
    let text = rewrite_lists(&text);
    let text = rewrite_conditionals(&text);
    translate_operators(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_goes_right_after_the_opening_quote() {
        assert_eq!(prefix_paths(r#""x""#, "P"), r#""Px""#);
    }

    #[test]
    fn prefix_supports_escaped_quotes_inside_literals() {
        assert_eq!(prefix_paths(r#""a\"b""#, "p/"), r#""p/a\"b""#);
    }

    #[test]
    fn empty_prefix_leaves_literals_alone() {
        assert_eq!(prefix_paths(r#"x = "a""#, ""), r#"x = "a""#);
    }

    #[test]
    fn strips_an_import_statement() {
        assert_eq!(strip_statements("import(\"//foo.gni\")\n"), "\n");
    }

    #[test]
    fn strips_a_config_block_spanning_lines() {
        let src = "config(\"internal\") {\n  include_dirs = [ \"src\" ]\n}\n";
        assert_eq!(strip_statements(src), "\n");
    }

    #[test]
    fn stripping_without_matches_is_idempotent() {
        let src = "sources = [\n  \"a.cpp\",\n]\n";
        let once = strip_statements(src);
        assert_eq!(once, src);
        assert_eq!(strip_statements(&once), once);
    }

    #[test]
    fn single_line_list_becomes_a_set_call() {
        assert_eq!(
            rewrite_lists("foo = [ \"a\", \"b\" ]"),
            "set(foo \"a\", \"b\" )"
        );
    }

    #[test]
    fn single_line_list_indent_is_doubled() {
        assert_eq!(rewrite_lists("  foo = [ \"a\" ]"), "    set(foo \"a\" )");
    }

    #[test]
    fn single_line_append_becomes_self_concatenation() {
        assert_eq!(
            rewrite_lists("libs += extra"),
            " set(libs, \"${libs};${extra}\")"
        );
    }

    #[test]
    fn multi_line_list_declaration() {
        let src = "sources = [\n  \"a.cpp\",\n]\n";
        assert_eq!(rewrite_lists(src), "set(sources\n    \"a.cpp\",\n)\n");
    }

    #[test]
    fn multi_line_list_append() {
        let src = "  defines += [\n    \"X\",\n  ]\n";
        assert_eq!(
            rewrite_lists(src),
            "    list(APPEND defines\n        \"X\",\n    )\n"
        );
    }

    #[test]
    fn if_with_equality_comparison() {
        assert_eq!(
            convert("if (a == \"x\") {\n}\n", ""),
            "if(a STREQUAL \"x\")\nendif()\n"
        );
    }

    #[test]
    fn else_chain_keeps_the_known_quirk() {
        let src = "if (is_win) {\n} else if (is_linux && use_x11) {\n} else {\n}\n";
        assert_eq!(
            convert(src, ""),
            "if(is_win)\n} else if(is_linux AND use_x11)\nelse()\nendif()\n"
        );
    }

    #[test]
    fn bare_else_if_line_becomes_elseif() {
        assert_eq!(rewrite_conditionals("} else if\n"), "elseif\n");
    }

    #[test]
    fn operator_translation_touches_only_the_operator() {
        assert_eq!(translate_operators("a || b"), "a OR b");
        assert_eq!(translate_operators("a && b"), "a AND b");
        assert_eq!(translate_operators("a == b"), "a STREQUAL b");
        assert_eq!(translate_operators("!a"), " NOT a");
    }

    #[test]
    fn pipeline_is_stable_on_single_line_list_output() {
        let out = convert("foo = [ \"a\", \"b\" ]", "");
        assert_eq!(convert(&out, ""), out);
    }

    #[test]
    fn import_and_sources_end_to_end() {
        let src = "import(\"//foo.gni\")\nsources = [\n  \"bar.cc\",\n]\n";
        let out = convert(src, "root/");
        assert!(!out.contains("import("));
        assert!(out.contains("set(sources\n    \"root/bar.cc\",\n)"));
    }
}
