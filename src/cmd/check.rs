//! Check command running the scoring heuristic suite
//!
//! Twelve independent checks over the scoring functions, each exercised
//! with fixed fixtures. A failing check is reported with its message and
//! does not stop the remaining checks; the summary decides the exit code.

use anyhow::{ensure, Result};
use colored::Colorize;
use std::collections::HashSet;

use seopipe::scoring::{
    self, Keyword, ScoreWeights, DEFAULT_GAP_THRESHOLD, DEFAULT_MAX_VOLUME,
    IMPORTANT_SERP_FEATURES,
};

const CHECKS: [(&str, fn() -> Result<()>); 12] = [
    ("Opportunity score calculation", check_opportunity_score),
    ("Keyword similarity calculation", check_keyword_similarity),
    ("Data validation - no duplicates", check_no_duplicate_keywords),
    ("Score ranges validation", check_score_ranges),
    ("Keyword difficulty normalization", check_difficulty_normalization),
    ("Search volume normalization", check_volume_normalization),
    ("SERP feature detection", check_serp_feature_detection),
    ("Click potential calculation", check_click_potential),
    ("Competitor strength penalty", check_competitor_penalty),
    ("Commercial intent detection", check_commercial_intent),
    ("Gap detection logic", check_gap_detection),
    ("N-gram extraction for clustering", check_ngram_extraction),
];

/// Run all checks and print a per-check line plus a summary.
pub fn cmd_check() -> Result<()> {
    println!("{}", "Running scoring heuristic checks...".bold());
    println!();

    let mut passed = 0;
    let mut failed = 0;

    for (name, check) in CHECKS {
        match check() {
            Ok(()) => {
                println!("{} {}", "✓".green(), name);
                passed += 1;
            }
            Err(e) => {
                eprintln!("{} {}", "✗".red(), name);
                eprintln!("   {}", e);
                failed += 1;
            }
        }
    }

    println!();
    println!("{}", "━".repeat(50).cyan());
    println!(
        "  {} {}, {} {}, {} total",
        passed,
        "passed".green(),
        failed,
        if failed == 0 {
            "failed".normal()
        } else {
            "failed".red()
        },
        passed + failed
    );
    println!("{}", "━".repeat(50).cyan());

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Pre-scored keyword rows used by the data validation checks.
const SCORED_FIXTURES: [(&str, u32, u32); 4] = [
    ("van hire lisbon", 1000, 75),
    ("campervan rental", 500, 50),
    ("motorhome portugal", 2000, 100),
    ("campervan meaning", 100, 0),
];

fn check_opportunity_score() -> Result<()> {
    let keyword = Keyword {
        search_volume: 1000,
        keyword_difficulty: 30,
        click_potential: 0.5,
        commercial_intent: 0.8,
        has_serp_features: true,
    };

    let score = scoring::opportunity_score(&ScoreWeights::default(), &keyword)?;
    ensure!(score <= 100, "score out of range: {}", score);
    ensure!(score > 0, "score should be positive for a valid keyword");
    Ok(())
}

fn check_keyword_similarity() -> Result<()> {
    let similar = scoring::jaccard_similarity("van hire lisbon", "rent van lisbon");
    let different = scoring::jaccard_similarity("van hire lisbon", "motorhome insurance portugal");

    ensure!(similar > 0.5, "similar keywords should score high, got {}", similar);
    ensure!(different < 0.5, "different keywords should score low, got {}", different);
    ensure!(similar > different, "similar keywords must outscore different ones");
    Ok(())
}

fn check_no_duplicate_keywords() -> Result<()> {
    let keywords: HashSet<&str> = SCORED_FIXTURES.iter().map(|(kw, _, _)| *kw).collect();
    ensure!(
        keywords.len() == SCORED_FIXTURES.len(),
        "duplicate keywords found in fixture data"
    );
    Ok(())
}

fn check_score_ranges() -> Result<()> {
    for (keyword, _volume, score) in SCORED_FIXTURES {
        ensure!(score <= 100, "invalid score {} for keyword: {}", score, keyword);
    }
    Ok(())
}

fn check_difficulty_normalization() -> Result<()> {
    for (difficulty, expected) in [(0, 0.0), (50, 0.5), (100, 1.0)] {
        let normalized = scoring::normalize_difficulty(difficulty)?;
        ensure!(
            (normalized - expected).abs() < 1e-3,
            "expected {}, got {}",
            expected,
            normalized
        );
    }
    Ok(())
}

fn check_volume_normalization() -> Result<()> {
    let cases = [(0, 0.0), (5000, 0.5), (10_000, 1.0), (20_000, 1.0)];
    for (volume, expected) in cases {
        let normalized = scoring::normalize_volume(volume, DEFAULT_MAX_VOLUME);
        ensure!(
            (normalized - expected).abs() < 1e-9,
            "volume {} should normalize to {}, got {}",
            volume,
            expected,
            normalized
        );
    }
    Ok(())
}

fn check_serp_feature_detection() -> Result<()> {
    let observed = ["featured_snippet", "people_also_ask", "local_pack"];
    ensure!(
        scoring::has_important_features(&observed, &IMPORTANT_SERP_FEATURES),
        "should detect important features"
    );
    ensure!(
        !scoring::has_important_features(&["video", "images"], &IMPORTANT_SERP_FEATURES),
        "should not detect unimportant features"
    );
    Ok(())
}

fn check_click_potential() -> Result<()> {
    let rank1 = scoring::estimate_click_potential(1, false);
    let rank3 = scoring::estimate_click_potential(3, false);
    let rank1_with_features = scoring::estimate_click_potential(1, true);

    ensure!(rank1 > rank3, "rank 1 should have higher CTR than rank 3");
    ensure!(rank1_with_features < rank1, "SERP features should reduce CTR");
    ensure!(rank1 > 0.2, "rank 1 CTR should be significant");
    Ok(())
}

fn check_competitor_penalty() -> Result<()> {
    let strong = scoring::competitor_penalty(80, 1);
    let weak = scoring::competitor_penalty(20, 15);

    ensure!(strong > weak, "strong competitor should carry higher penalty");
    ensure!(
        (0.0..=1.0).contains(&strong),
        "penalty should be normalized, got {}",
        strong
    );
    Ok(())
}

fn check_commercial_intent() -> Result<()> {
    ensure!(
        scoring::detect_commercial_intent("van hire lisbon") > 0.5,
        "should detect commercial intent in \"hire\""
    );
    ensure!(
        scoring::detect_commercial_intent("what is a campervan") < 0.5,
        "should not detect commercial intent in informational query"
    );
    ensure!(
        scoring::detect_commercial_intent("buy campervan portugal") > 0.5,
        "should detect commercial intent in \"buy\""
    );
    Ok(())
}

fn check_gap_detection() -> Result<()> {
    ensure!(
        scoring::is_gap(None, Some(5), DEFAULT_GAP_THRESHOLD),
        "should detect gap when only the competitor ranks"
    );
    ensure!(
        !scoring::is_gap(Some(15), Some(5), DEFAULT_GAP_THRESHOLD),
        "should not detect gap when we already rank"
    );
    ensure!(
        !scoring::is_gap(None, Some(25), DEFAULT_GAP_THRESHOLD),
        "should not detect gap when competitor ranks too low"
    );
    ensure!(
        scoring::is_gap(None, Some(20), DEFAULT_GAP_THRESHOLD),
        "should detect gap at threshold boundary"
    );
    Ok(())
}

fn check_ngram_extraction() -> Result<()> {
    let bigrams = scoring::extract_ngrams("van hire lisbon portugal", 2);

    ensure!(bigrams.len() == 3, "expected 3 bigrams, got {}", bigrams.len());
    ensure!(bigrams[0] == "van hire", "first bigram should be \"van hire\"");
    ensure!(bigrams[1] == "hire lisbon", "second bigram should be \"hire lisbon\"");
    Ok(())
}
