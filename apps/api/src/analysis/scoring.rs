//! Content Scoring: pluggable, trait-based rubric that grades text metrics.
//!
//! Default: `RubricScorer` (additive, deterministic, capped at 100).
//! `AppState` holds an `Arc<dyn ContentScorer>`, so the rubric can be swapped
//! without touching handlers.

use serde::{Deserialize, Serialize};

use crate::analysis::metrics::TextMetrics;

// ────────────────────────────────────────────────────────────────────────────
// Rubric constants
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_SCORE: u32 = 100;

const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 2000;
const LENGTH_FULL: u32 = 30;
const LENGTH_PARTIAL: u32 = 20;

const DENSITY_FLOOR: f64 = 0.5;
const DENSITY_MIN: f64 = 1.0;
const DENSITY_MAX: f64 = 3.0;
const DENSITY_CEILING: f64 = 5.0;
const DENSITY_FULL: u32 = 30;
const DENSITY_PARTIAL: u32 = 25;

const READABILITY_GOOD: f64 = 60.0;
const READABILITY_POOR: f64 = 30.0;
const READABILITY_FULL: u32 = 40;
const READABILITY_PARTIAL: u32 = 20;

const HEADING_POINTS: u32 = 15;
const MIN_INTERNAL_LINKS: usize = 2;
const INTERNAL_LINK_POINTS: u32 = 10;
const MIN_EXTERNAL_LINKS: usize = 1;
const EXTERNAL_LINK_POINTS: u32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Result of one analysis run.
///
/// `issues` block publishing quality; `suggestions` are optional improvements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u32, // 0 – 100
    pub metrics: TextMetrics,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Turns measured metrics and a focus keyword into a report.
///
/// Carried in `AppState` as `Arc<dyn ContentScorer>`.
pub trait ContentScorer: Send + Sync {
    fn score(&self, metrics: TextMetrics, keyword: &str) -> AnalysisReport;

    /// Measures `text` and scores it in one step. Never fails.
    fn analyze(&self, text: &str, keyword: &str, site_origin: &str) -> AnalysisReport {
        self.score(TextMetrics::compute(text, keyword, site_origin), keyword)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RubricScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Additive rubric:
///
/// | check          | full credit            | partial credit                   |
/// |----------------|------------------------|----------------------------------|
/// | length         | 300–2000 words → 30    | 1–299 or >2000 words → 20        |
/// | keyword        | 1%–3% density → 30     | 0.5%–1% or 3%–5% → 25            |
/// | readability    | ≥60 → 40               | 30–60 → 20                       |
/// | headings       | ≥1 → 15                |                                  |
/// | internal links | ≥2 → 10                |                                  |
/// | external links | ≥1 → 10                |                                  |
///
/// The sum is capped at 100.
pub struct RubricScorer;

impl ContentScorer for RubricScorer {
    fn score(&self, metrics: TextMetrics, keyword: &str) -> AnalysisReport {
        let mut card = Scorecard::default();

        score_length(&metrics, &mut card);
        score_keyword(&metrics, keyword, &mut card);
        score_readability(&metrics, &mut card);
        score_structure(&metrics, &mut card);

        AnalysisReport {
            score: card.points.min(MAX_SCORE),
            metrics,
            issues: card.issues,
            suggestions: card.suggestions,
        }
    }
}

#[derive(Default)]
struct Scorecard {
    points: u32,
    issues: Vec<String>,
    suggestions: Vec<String>,
}

fn score_length(m: &TextMetrics, card: &mut Scorecard) {
    let words = m.word_count;
    if (MIN_WORDS..=MAX_WORDS).contains(&words) {
        card.points += LENGTH_FULL;
    } else if words > MAX_WORDS {
        card.points += LENGTH_PARTIAL;
        card.suggestions.push(format!(
            "Content is very long ({words} words). Consider splitting it into several pages."
        ));
    } else {
        if words > 0 {
            card.points += LENGTH_PARTIAL;
        }
        card.issues.push(format!(
            "Content is too short ({words} words). Aim for at least {MIN_WORDS} words."
        ));
    }
}

fn score_keyword(m: &TextMetrics, keyword: &str, card: &mut Scorecard) {
    if keyword.trim().is_empty() {
        card.suggestions
            .push("Set a focus keyword to measure keyword density.".to_string());
        return;
    }

    let density = m.keyword_density;
    if (DENSITY_MIN..=DENSITY_MAX).contains(&density) {
        card.points += DENSITY_FULL;
    } else if density > DENSITY_MAX {
        if density <= DENSITY_CEILING {
            card.points += DENSITY_PARTIAL;
        }
        card.issues.push(format!(
            "Keyword density is too high ({density:.2}%). Keep \"{keyword}\" under {DENSITY_MAX}% to avoid keyword stuffing."
        ));
    } else if density >= DENSITY_FLOOR {
        card.points += DENSITY_PARTIAL;
    } else {
        card.suggestions.push(format!(
            "Keyword density is too low ({density:.2}%). Use \"{keyword}\" a few more times, aiming for {DENSITY_MIN}%–{DENSITY_MAX}%."
        ));
    }
}

fn score_readability(m: &TextMetrics, card: &mut Scorecard) {
    let score = m.readability_score;
    if score >= READABILITY_GOOD {
        card.points += READABILITY_FULL;
    } else if score >= READABILITY_POOR {
        card.points += READABILITY_PARTIAL;
        card.suggestions.push(format!(
            "Readability could be improved ({score:.1}). Use shorter sentences and simpler words."
        ));
    } else {
        card.issues.push(format!(
            "Content has poor readability ({score:.1}). Break up long sentences and prefer shorter words."
        ));
    }
}

fn score_structure(m: &TextMetrics, card: &mut Scorecard) {
    if m.heading_count >= 1 {
        card.points += HEADING_POINTS;
    } else {
        card.issues.push(
            "Content has no headings. Add headings (H1–H6) to structure the text.".to_string(),
        );
    }

    if m.internal_link_count >= MIN_INTERNAL_LINKS {
        card.points += INTERNAL_LINK_POINTS;
    } else {
        card.suggestions.push(format!(
            "Add more internal links ({} found, at least {MIN_INTERNAL_LINKS} recommended).",
            m.internal_link_count
        ));
    }

    if m.external_link_count >= MIN_EXTERNAL_LINKS {
        card.points += EXTERNAL_LINK_POINTS;
    } else {
        card.suggestions
            .push("Add at least one external link to an authoritative source.".to_string());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
