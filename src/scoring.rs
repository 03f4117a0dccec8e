//! Keyword scoring and clustering heuristics
//!
//! Small deterministic functions used by the SEO pipeline to rank keywords:
//! opportunity score blending, Jaccard similarity, click-through estimation,
//! competitor penalty, commercial-intent detection, gap detection, and
//! n-gram extraction. The CTR curve and commercial-term list are data, not
//! logic, and live in static tables.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Search volume at (or above) which a keyword normalizes to 1.0.
pub const DEFAULT_MAX_VOLUME: u32 = 10_000;

/// Competitor rank threshold for gap detection (inclusive).
pub const DEFAULT_GAP_THRESHOLD: u32 = 20;

/// CTR penalty applied when the results page carries SERP features.
pub const SERP_FEATURE_CTR_PENALTY: f64 = 0.8;

/// Simplified organic CTR curve for ranks 1 through 10.
const CTR_BY_RANK: [f64; 10] = [0.31, 0.24, 0.18, 0.13, 0.09, 0.06, 0.04, 0.03, 0.03, 0.02];

/// Baseline CTR for any rank outside the curve.
const CTR_FLOOR: f64 = 0.01;

/// Terms signalling transactional or commercial search intent.
const COMMERCIAL_TERMS: [&str; 11] = [
    "buy", "price", "hire", "rent", "book", "booking", "cheap", "best", "review", "compare",
    "deal",
];

/// SERP features worth targeting when clustering keywords.
pub const IMPORTANT_SERP_FEATURES: [&str; 3] = ["featured_snippet", "faqs", "people_also_ask"];

/// A keyword as scored by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    /// Monthly search volume (non-negative)
    pub search_volume: u32,
    /// Keyword difficulty, 0-100
    pub keyword_difficulty: u32,
    /// Estimated click potential, 0-1
    pub click_potential: f64,
    /// Commercial intent signal, 0-1
    pub commercial_intent: f64,
    /// Whether the results page carries SERP features
    pub has_serp_features: bool,
}

/// Blend coefficients for the opportunity score. The five weights sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub volume: f64,
    pub click_potential: f64,
    pub serp_features: f64,
    pub keyword_difficulty: f64,
    pub commercial_intent: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            volume: 0.35,
            click_potential: 0.25,
            serp_features: 0.15,
            keyword_difficulty: 0.15,
            commercial_intent: 0.10,
        }
    }
}

/// Blend a keyword's signals into a 0-100 opportunity score.
///
/// Volume is normalized against [`DEFAULT_MAX_VOLUME`], difficulty is
/// inverted (easier keywords score higher), and the weighted sum is scaled
/// by 100 and rounded to the nearest integer.
pub fn opportunity_score(weights: &ScoreWeights, keyword: &Keyword) -> Result<u32> {
    let volume = normalize_volume(keyword.search_volume, DEFAULT_MAX_VOLUME);
    let difficulty = normalize_difficulty(keyword.keyword_difficulty)?;
    let serp = if keyword.has_serp_features { 1.0 } else { 0.0 };

    let blended = weights.volume * volume
        + weights.click_potential * keyword.click_potential
        + weights.serp_features * serp
        + weights.keyword_difficulty * (1.0 - difficulty)
        + weights.commercial_intent * keyword.commercial_intent;

    Ok((blended * 100.0).round() as u32)
}

/// Jaccard similarity between two keywords, tokenized on single spaces
/// after lowercasing.
///
/// Two empty inputs carry no signal and compare as 0.0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let left: HashSet<&str> = a.split(' ').collect();
    let right: HashSet<&str> = b.split(' ').collect();

    let intersection = left.intersection(&right).count();
    let union = left.union(&right).count();

    intersection as f64 / union as f64
}

/// Normalize search volume to 0-1, capped at 1 for volumes at or above
/// `max_volume`.
pub fn normalize_volume(volume: u32, max_volume: u32) -> f64 {
    (volume as f64 / max_volume as f64).min(1.0)
}

/// Normalize keyword difficulty to 0-1. Difficulty outside 0-100 is a
/// caller error.
pub fn normalize_difficulty(difficulty: u32) -> Result<f64> {
    ensure!(
        difficulty <= 100,
        "keyword difficulty must be between 0 and 100, got {}",
        difficulty
    );
    Ok(difficulty as f64 / 100.0)
}

/// Estimate organic click potential for a rank, applying the SERP feature
/// penalty when the results page carries features.
pub fn estimate_click_potential(rank: u32, has_features: bool) -> f64 {
    let base = match rank {
        1..=10 => CTR_BY_RANK[(rank - 1) as usize],
        _ => CTR_FLOOR,
    };

    if has_features {
        base * SERP_FEATURE_CTR_PENALTY
    } else {
        base
    }
}

/// Penalty for competing against a strong domain: the average of the
/// competitor's authority (domain rating / 100) and how close to the top
/// of the first two pages they rank.
pub fn competitor_penalty(domain_rating: u32, competitor_rank: u32) -> f64 {
    let authority = domain_rating as f64 / 100.0;
    let rank_score = ((20.0 - competitor_rank as f64) / 20.0).max(0.0);
    (authority + rank_score) / 2.0
}

/// Commercial intent signal: 0.8 when the keyword contains a commercial
/// term, 0.2 otherwise.
pub fn detect_commercial_intent(keyword: &str) -> f64 {
    let lowered = keyword.to_lowercase();
    if COMMERCIAL_TERMS.iter().any(|term| lowered.contains(term)) {
        0.8
    } else {
        0.2
    }
}

/// A gap is a keyword where we do not rank at all but a competitor ranks
/// within `threshold` (inclusive).
pub fn is_gap(our_rank: Option<u32>, competitor_rank: Option<u32>, threshold: u32) -> bool {
    our_rank.is_none() && competitor_rank.is_some_and(|rank| rank <= threshold)
}

/// Extract contiguous n-grams from a keyword, left to right. Tokenization
/// matches [`jaccard_similarity`]: lowercase, split on single spaces.
pub fn extract_ngrams(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split(' ').collect();
    words.windows(n).map(|window| window.join(" ")).collect()
}

/// Whether any observed SERP feature is in the watched set.
pub fn has_important_features(features: &[&str], important: &[&str]) -> bool {
    features.iter().any(|feature| important.contains(feature))
}
