//! Statistics over a parsed stylesheet: the six metrics, byte-size
//! formatting, and the stateful [`Analyser`] facade.

use std::fmt;

use tracing::trace;

use crate::model::{Rule, Stylesheet};
use crate::parser;

/// Errors from the stateful analysis surface.
///
/// Parsing itself never fails: malformed input falls under the parser's
/// leniency policies. The only modeled error is reading results before any
/// stylesheet has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("no stylesheet has been processed yet")]
    NotYetParsed,
}

/// The six stylesheet metrics, computed eagerly in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Brace-opening at-rule headers in the comment-free text.
    pub media_queries_count: usize,
    /// Extracted rule blocks, repeated selectors included.
    pub rules_count: usize,
    /// Declarations summed across all rules.
    pub property_definitions_count: usize,
    /// Comma-split selector segments summed across all rules, empty
    /// segments from stray commas included.
    pub selectors_count: usize,
    /// Byte length of the original input.
    pub size: usize,
    /// [`size`] with a `B`, `KB`, or `MB` unit suffix.
    ///
    /// [`size`]: Analysis::size
    pub size_formatted: String,
}

impl Analysis {
    /// Compute all six metrics for a parsed stylesheet.
    pub fn of(stylesheet: &Stylesheet) -> Self {
        let analysis = Analysis {
            media_queries_count: stylesheet.media_query_count,
            rules_count: stylesheet.rules.len(),
            property_definitions_count: stylesheet
                .rules
                .iter()
                .map(|rule| rule.declarations.len())
                .sum(),
            selectors_count: stylesheet.rules.iter().map(Rule::selector_count).sum(),
            size: stylesheet.source_size,
            size_formatted: format_size(stylesheet.source_size),
        };
        trace!(?analysis, "computed analysis");
        analysis
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "media queries:        {}", self.media_queries_count)?;
        writeln!(f, "rules:                {}", self.rules_count)?;
        writeln!(f, "property definitions: {}", self.property_definitions_count)?;
        writeln!(f, "selectors:            {}", self.selectors_count)?;
        write!(f, "size:                 {}", self.size_formatted)
    }
}

/// Format a byte count with a `B`, `KB`, or `MB` suffix.
///
/// KB and MB values are rounded to two decimal places and printed without
/// trailing zeros. The MB tier is unbounded: there is no GB tier.
pub(crate) fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let exact = bytes as f64;
    if exact < KIB {
        format!("{bytes} B")
    } else if exact < MIB {
        format!("{} KB", round2(exact / KIB))
    } else {
        format!("{} MB", round2(exact / MIB))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stateful analysis session: feed a stylesheet to [`process`], read the
/// metrics back through the accessors.
///
/// Each `process` call parses eagerly and fully supersedes the previous
/// state; one instance can analyse any number of inputs in turn. Accessors
/// called before the first `process` fail with
/// [`AnalysisError::NotYetParsed`].
///
/// [`process`]: Analyser::process
#[derive(Debug, Clone, Default)]
pub struct Analyser {
    analysis: Option<Analysis>,
}

impl Analyser {
    /// Create an analyser with no processed stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `css` and compute its metrics, discarding any prior state.
    ///
    /// The returned reference is valid until the next `process` call;
    /// callers that only want the side effect can ignore it.
    pub fn process(&mut self, css: &str) -> &Analysis {
        let stylesheet = parser::parse(css);
        self.analysis.insert(Analysis::of(&stylesheet))
    }

    /// All six metrics of the most recently processed stylesheet.
    pub fn get_analysis_results(&self) -> Result<&Analysis, AnalysisError> {
        self.analysis.as_ref().ok_or(AnalysisError::NotYetParsed)
    }

    /// Number of media queries (brace-opening at-rules).
    pub fn media_queries_count(&self) -> Result<usize, AnalysisError> {
        Ok(self.get_analysis_results()?.media_queries_count)
    }

    /// Number of rule blocks.
    pub fn rules_count(&self) -> Result<usize, AnalysisError> {
        Ok(self.get_analysis_results()?.rules_count)
    }

    /// Number of property declarations across all rules.
    pub fn property_definitions_count(&self) -> Result<usize, AnalysisError> {
        Ok(self.get_analysis_results()?.property_definitions_count)
    }

    /// Number of comma-separated selector segments across all rules.
    pub fn selectors_count(&self) -> Result<usize, AnalysisError> {
        Ok(self.get_analysis_results()?.selectors_count)
    }

    /// Byte length of the original input.
    pub fn size(&self) -> Result<usize, AnalysisError> {
        Ok(self.get_analysis_results()?.size)
    }

    /// Byte length formatted with a unit suffix.
    pub fn size_formatted(&self) -> Result<&str, AnalysisError> {
        Ok(self.get_analysis_results()?.size_formatted.as_str())
    }
}
