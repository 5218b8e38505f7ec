//! Lenient CSS subset parser.
//!
//! Four explicit scanning passes over the raw text: comment stripping,
//! at-rule unwrapping (header removal plus closer collapsing), rule
//! extraction, and declaration splitting. Malformed input is dropped or
//! passed through per pass, never reported as an error.

use std::ops::Range;

use tracing::debug;

use crate::model::{Declaration, Rule, Stylesheet};

/// Parse a stylesheet's source text.
///
/// Comments are stripped first. The media-query count is taken on the
/// comment-free text *before* at-rule wrappers are removed, so rules nested
/// inside `@media ... { ... }` are counted once as a media query and once
/// per inner rule.
pub fn parse(css: &str) -> Stylesheet {
    let cleaned = strip_comments(css);
    let media_query_count = count_at_rule_headers(&cleaned);
    let unwrapped = collapse_closers(&strip_at_rule_headers(&cleaned));
    let rules = extract_rules(&unwrapped);

    debug!(
        rules = rules.len(),
        media_queries = media_query_count,
        bytes = css.len(),
        "parsed stylesheet"
    );

    Stylesheet {
        rules,
        media_query_count,
        source_size: css.len(),
    }
}

/// Strip `/* ... */` comment spans, together with the whitespace runs
/// immediately before and after each span.
///
/// Comment-like sequences inside quoted strings are not respected. A
/// comment left unterminated at end of input is passed through verbatim
/// from its `/*` onward.
pub(crate) fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("/*") {
        let Some(close) = rest[open + 2..].find("*/") else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = rest[open + 2 + close + 2..].trim_start();
    }
    out.push_str(rest);
    out
}

/// Locate the next brace-opening at-rule header, returning its byte range
/// including the `{`.
///
/// A header is `@`, an ASCII-alphabetic identifier start, then a run of
/// characters ending at a `{`. The run must not contain `{`, `}`, or `;`,
/// so non-block at-rules (`@import "x.css";`) are never recognized and stay
/// in the text as literal content.
fn next_at_rule_header(input: &str) -> Option<Range<usize>> {
    let mut from = 0;
    while let Some(at) = input[from..].find('@').map(|i| from + i) {
        let after = &input[at + 1..];
        if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            if let Some(stop) = after.find(['{', '}', ';']) {
                if after.as_bytes()[stop] == b'{' {
                    return Some(at..at + 1 + stop + 1);
                }
            }
        }
        from = at + 1;
    }
    None
}

/// Count brace-opening at-rule headers, non-overlapping, left to right.
pub(crate) fn count_at_rule_headers(input: &str) -> usize {
    let mut count = 0;
    let mut rest = input;
    while let Some(header) = next_at_rule_header(rest) {
        count += 1;
        rest = &rest[header.end..];
    }
    count
}

/// Delete every brace-opening at-rule header (the header text and its `{`
/// only), leaving the wrapped rules in place.
pub(crate) fn strip_at_rule_headers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(header) = next_at_rule_header(rest) {
        out.push_str(&rest[..header.start]);
        rest = &rest[header.end..];
    }
    out.push_str(rest);
    out
}

/// Collapse `}` + optional whitespace + `}` into a single `}`, consuming
/// whitespace before the first `}` as part of the match.
///
/// One global left-to-right non-overlapping pass: each orphaned closer left
/// behind by a removed at-rule wrapper merges into the adjacent body
/// closer, and consecutive wrapper closures each collapse in turn.
pub(crate) fn collapse_closers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('}') {
        let after = &rest[pos + 1..];
        let next = after.trim_start();
        if next.starts_with('}') {
            out.push_str(rest[..pos].trim_end());
            out.push('}');
            rest = &next[1..];
        } else {
            out.push_str(&rest[..pos + 1]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

/// Characters permitted in a selector run. Deliberately broad: selector
/// lists, attribute selectors, simple pseudo-class syntax, and `@` all
/// pass; `;`, braces, and non-ASCII text end the run.
fn is_selector_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_ascii_whitespace()
        || matches!(
            c,
            ',' | '.'
                | ':'
                | '#'
                | '_'
                | '-'
                | '('
                | ')'
                | '>'
                | '['
                | ']'
                | '*'
                | '='
                | '\''
                | '"'
                | '~'
                | '|'
                | '$'
                | '^'
                | '@'
        )
}

/// Extract `selector { body }` blocks from unwrapped, comment-free text.
///
/// A block is a maximal run of selector characters immediately followed by
/// `{`, with the body reaching to the first `}` after it. Matches are
/// non-overlapping, left to right; a run not followed by a complete block
/// is skipped and scanning resumes after it. A block whose trimmed selector
/// text is empty is consumed but yields no rule.
pub(crate) fn extract_rules(input: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut rest = input;
    while let Some(start) = rest.find(is_selector_char) {
        let run = &rest[start..];
        let run_len = run
            .find(|c: char| !is_selector_char(c))
            .unwrap_or(run.len());
        let after_run = &run[run_len..];
        match after_run.strip_prefix('{') {
            Some(tail) => match tail.find('}') {
                Some(close) => {
                    let selector_text = run[..run_len].trim();
                    if !selector_text.is_empty() {
                        rules.push(Rule {
                            selector_text: selector_text.to_string(),
                            declarations: parse_declarations(&tail[..close]),
                        });
                    }
                    rest = &tail[close + 1..];
                }
                // `{` with no later `}`: no block can start inside the run,
                // so resume just past the `{`.
                None => rest = tail,
            },
            None => {
                // Run not followed by `{`: skip it and the character that
                // ended it.
                let skip = after_run.chars().next().map_or(0, char::len_utf8);
                rest = &after_run[skip..];
            }
        }
    }
    rules
}

/// Split a rule body into declarations.
///
/// Fragments are separated by `;`. Whitespace-only fragments are skipped,
/// and a fragment with no `:` is dropped silently. Only the first `:`
/// separates property from value.
pub(crate) fn parse_declarations(body: &str) -> Vec<Declaration> {
    body.trim()
        .split(';')
        .filter(|fragment| !fragment.trim().is_empty())
        .filter_map(|fragment| {
            let (property, value) = fragment.split_once(':')?;
            Some(Declaration {
                property: property.trim().to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}
