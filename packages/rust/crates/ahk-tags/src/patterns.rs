//! Line-anchored regex rules for AutoHotkey definitions.
//!
//! Rules run over raw script bytes with Unicode mode off: `\w`-style names
//! and `\s` are ASCII, and `.` matches any byte except `\n`, so ANSI-encoded
//! scripts match the same way UTF-8 ones do. `\s` may cross line breaks;
//! only the first line of a match ends up in the tag address.

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::types::TagKind;

/// Function definition: `Name(params) {` with an optional trailing comment.
pub const FUNCTION_PATTERN: &str = r"(?m-u)^[ \t]*(?P<name>[A-Za-z0-9_]+)\(.*\)\s*\{\s*(;?.*)$";
/// Label: `Name:` followed by nothing but whitespace or a comment.
pub const LABEL_PATTERN: &str = r"(?m-u)^[ \t]*(?P<name>[A-Za-z0-9_]+):\s*(;.*)?$";
/// Variable assignment: `Name = value` or `Name := value`.
pub const VARIABLE_PATTERN: &str = r"(?m-u)^[ \t]*(?P<name>[A-Za-z0-9_]+)\s*:?=\s*(;?.*)?$";

/// Capture group holding the symbol name in every rule.
pub const NAME_GROUP: &str = "name";

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_pattern_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| compile_regex(FUNCTION_PATTERN));
static RE_LABEL: LazyLock<Regex> = LazyLock::new(|| compile_regex(LABEL_PATTERN));
static RE_VARIABLE: LazyLock<Regex> = LazyLock::new(|| compile_regex(VARIABLE_PATTERN));

/// Compiled rule for a tag kind.
#[must_use]
pub fn rule_for(kind: TagKind) -> &'static Regex {
    match kind {
        TagKind::Function => &*RE_FUNCTION,
        TagKind::Label => &*RE_LABEL,
        TagKind::Variable => &*RE_VARIABLE,
    }
}
