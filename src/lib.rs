//! # Seopipe - SEO workflow tooling
//!
//! Seopipe validates workflow definition files used by SEO automation
//! pipelines and provides the scoring heuristics those pipelines rank
//! keywords with.
//!
//! ## Overview
//!
//! Workflow definitions are JSON documents describing a graph of nodes and
//! the connections between them. The validator checks a document's shape,
//! flags unresolved credential placeholders and leftover TODO markers, scans
//! for secret-like substrings, and verifies that connections reference
//! existing nodes. The scoring module is a library of small, deterministic
//! functions: opportunity score blending, click-through estimation,
//! commercial-intent detection, gap detection, and n-gram extraction for
//! keyword clustering.
//!
//! ## Modules
//!
//! - [`workflow`] - Workflow document types and loading
//! - [`validation`] - Structural and content checks for workflow documents
//! - [`scoring`] - Keyword scoring and clustering heuristics
//!
//! ## Example
//!
//! ```
//! use seopipe::scoring::{self, Keyword, ScoreWeights};
//!
//! let keyword = Keyword {
//!     search_volume: 1200,
//!     keyword_difficulty: 35,
//!     click_potential: scoring::estimate_click_potential(3, false),
//!     commercial_intent: scoring::detect_commercial_intent("campervan hire lisbon"),
//!     has_serp_features: false,
//! };
//!
//! let score = scoring::opportunity_score(&ScoreWeights::default(), &keyword).unwrap();
//! assert!(score <= 100);
//! ```

pub mod scoring;
pub mod validation;
pub mod workflow;
