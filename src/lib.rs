//! # css-analyser
//!
//! Structural statistics over a stylesheet's source text: counts of media
//! queries, style rules, selectors, and property declarations, plus the raw
//! and unit-formatted byte size of the input.
//!
//! The parser handles a deliberately lenient CSS subset. Comments are
//! stripped, brace-opening at-rule wrappers (`@media ... {`) are unwrapped so
//! the rules inside them count as ordinary top-level rules, and malformed
//! fragments are dropped or passed through rather than reported as errors.
//! Everything is pure in-memory string work: no I/O, no configuration.
//!
//! ## Core Systems
//!
//! - **[`parser`]** — lenient subset parser: comment stripping, at-rule
//!   unwrapping, rule extraction, declaration splitting
//! - **[`model`]** — parsed stylesheet data: [`Stylesheet`], [`Rule`],
//!   [`Declaration`]
//! - **[`analysis`]** — the six metrics ([`Analysis`]), byte-size
//!   formatting, and the stateful [`Analyser`] facade
//!
//! ## Quick start
//!
//! ```
//! use css_analyser::Analyser;
//!
//! let mut analyser = Analyser::new();
//! let analysis = analyser.process(".a, .b { color: red; }");
//!
//! assert_eq!(analysis.rules_count, 1);
//! assert_eq!(analysis.selectors_count, 2);
//! assert_eq!(analysis.property_definitions_count, 1);
//! ```
//!
//! The stateful facade mirrors a process-then-read workflow; callers that
//! prefer pure functions can use [`parse`] and [`Analysis::of`] directly:
//!
//! ```
//! use css_analyser::{parse, Analysis};
//!
//! let stylesheet = parse("@media (min-width: 600px) { .a { color: red; } }");
//! let analysis = Analysis::of(&stylesheet);
//!
//! assert_eq!(analysis.media_queries_count, 1);
//! assert_eq!(analysis.rules_count, 1);
//! ```

pub mod analysis;
pub mod model;
pub mod parser;

pub use analysis::{Analyser, Analysis, AnalysisError};
pub use model::{Declaration, Rule, Stylesheet};
pub use parser::parse;
