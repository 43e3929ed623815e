//! Body normalization ahead of segmentation
//!
//! The segmenter reasons one physical line at a time, so anything that
//! spans lines but must be classified as a unit is folded here first.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

// Regex patterns
static REPLY_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^On\s(.+?)wrote:$").unwrap());

/// A header span that swallowed a second `On ... wrote:` is two headers glued
/// together by the lazy match, not one header broken over several lines.
static NESTED_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^On.*On\s.+?wrote:$").unwrap());

static UNDERSCORE_DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)([^\n])(\n_{7,})$").unwrap());

/// Normalize a raw body into segmenter input.
///
/// Line endings become `\n`, multi-line `On ... wrote:` headers are folded
/// onto one line, and a blank line is inserted above any underscore
/// delimiter that directly follows text.
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = normalize_line_endings(text);
    let text = collapse_reply_headers(&text);

    UNDERSCORE_DELIMITER_REGEX
        .replace_all(&text, "${1}\n${2}")
        .into_owned()
}

fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }

    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Single left-to-right pass; rejected spans are kept verbatim and never
/// rescanned, so header-heavy input stays linear.
fn collapse_reply_headers(text: &str) -> String {
    REPLY_HEADER_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let span = &caps[0];
            if !span.contains('\n') {
                return span.to_string();
            }

            if NESTED_HEADER_REGEX.is_match(span) {
                debug!(length = span.len(), "Skipping greedy reply header match");
                return span.to_string();
            }

            debug!(
                lines = span.lines().count(),
                "Collapsing multi-line reply header"
            );
            span.replace('\n', " ")
        })
        .into_owned()
}
