//! Parsed stylesheet data: Declaration, Rule, Stylesheet.

/// A single `property: value` pair from a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name, trimmed, e.g. `"color"`.
    pub property: String,
    /// The value text, trimmed, e.g. `"red"`. Only the first `:` in a
    /// fragment separates property from value, so values may themselves
    /// contain colons (`url(http://...)`).
    pub value: String,
}

/// One `selector-list { declarations }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The trimmed text preceding the opening brace. May hold several
    /// comma-separated selectors; always non-empty.
    pub selector_text: String,
    /// Declarations in source order. Duplicate property names are retained
    /// as distinct entries.
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Iterate the comma-separated selector segments of [`selector_text`],
    /// untrimmed.
    ///
    /// Stray commas produce empty segments, which are kept so that the
    /// segment count matches source occurrence.
    ///
    /// [`selector_text`]: Rule::selector_text
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.selector_text.split(',')
    }

    /// Number of comma-separated selector segments, empty segments included.
    pub fn selector_count(&self) -> usize {
        self.selectors().count()
    }
}

/// The result of parsing one stylesheet: what [`crate::parser::parse`]
/// returns and [`crate::analysis::Analysis::of`] consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Extracted rules in source order, not deduplicated.
    pub rules: Vec<Rule>,
    /// Number of brace-opening at-rule headers found in the comment-free
    /// text, counted before unwrapping.
    pub media_query_count: usize,
    /// Byte length of the original, unmodified input.
    pub source_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(selector_text: &str) -> Rule {
        Rule {
            selector_text: selector_text.to_string(),
            declarations: Vec::new(),
        }
    }

    // ── Selector segments ────────────────────────────────────────────

    #[test]
    fn single_selector() {
        let r = rule(".a");
        assert_eq!(r.selectors().collect::<Vec<_>>(), vec![".a"]);
        assert_eq!(r.selector_count(), 1);
    }

    #[test]
    fn comma_separated_selectors_are_untrimmed() {
        let r = rule(".a, .b");
        assert_eq!(r.selectors().collect::<Vec<_>>(), vec![".a", " .b"]);
        assert_eq!(r.selector_count(), 2);
    }

    #[test]
    fn stray_trailing_comma_counts_an_empty_segment() {
        let r = rule(".a,");
        assert_eq!(r.selectors().collect::<Vec<_>>(), vec![".a", ""]);
        assert_eq!(r.selector_count(), 2);
    }

    #[test]
    fn consecutive_commas_count_every_segment() {
        assert_eq!(rule(".a,,.b").selector_count(), 3);
    }

    // ── Declarations ─────────────────────────────────────────────────

    #[test]
    fn duplicate_properties_are_distinct_entries() {
        let r = Rule {
            selector_text: ".a".into(),
            declarations: vec![
                Declaration {
                    property: "color".into(),
                    value: "red".into(),
                },
                Declaration {
                    property: "color".into(),
                    value: "blue".into(),
                },
            ],
        };
        assert_eq!(r.declarations.len(), 2);
        assert_eq!(r.declarations[0].value, "red");
        assert_eq!(r.declarations[1].value, "blue");
    }

    // ── Stylesheet ───────────────────────────────────────────────────

    #[test]
    fn default_stylesheet_is_empty() {
        let sheet = Stylesheet::default();
        assert!(sheet.rules.is_empty());
        assert_eq!(sheet.media_query_count, 0);
        assert_eq!(sheet.source_size, 0);
    }
}
