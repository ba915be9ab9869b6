//! Text Metrics: pure functions that measure raw text for SEO scoring.
//!
//! Input may be HTML (`<h2>`, `<a href>`) or markdown (`## `, `[text](url)`);
//! every function accepts both dialects.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static SENTENCE_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static HTML_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[1-6](\s[^>]*)?>").unwrap());
static MD_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]+\S").unwrap());
static HTML_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s[^>]*?href\s*=\s*["']([^"']+)["']"#).unwrap()
});
static MD_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[[^\]]*\]\(\s*([^)\s]+)[^)]*\)").unwrap());

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Snapshot of every measurement taken from a `(text, keyword, site_origin)` triple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Flesch Reading Ease, 0 – 100.
    pub readability_score: f64,
    /// Percentage; may exceed 100 for degenerate input.
    pub keyword_density: f64,
    pub heading_count: usize,
    pub internal_link_count: usize,
    pub external_link_count: usize,
}

impl TextMetrics {
    pub fn compute(text: &str, keyword: &str, site_origin: &str) -> Self {
        let (internal, external) = link_counts(text, site_origin);

        Self {
            word_count: word_count(text),
            sentence_count: sentence_count(text),
            syllable_count: syllable_count(text),
            readability_score: readability_score(text),
            keyword_density: keyword_density(text, keyword),
            heading_count: heading_count(text),
            internal_link_count: internal,
            external_link_count: external,
        }
    }
}

/// Replaces markup tags with whitespace so adjacent text does not fuse.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, " ").into_owned()
}

/// A whitespace token counts as a word only if it carries a letter or digit,
/// so bare markdown markers such as `#`, `-` or `>` are not words.
pub fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn words_of(stripped: &str) -> Vec<&str> {
    stripped.split_whitespace().filter(|t| is_word(t)).collect()
}

pub fn word_count(text: &str) -> usize {
    words_of(&strip_tags(text)).len()
}

fn count_sentences(stripped: &str) -> usize {
    SENTENCE_SPLIT_RE
        .split(stripped)
        .filter(|fragment| is_word(fragment))
        .count()
}

pub fn sentence_count(text: &str) -> usize {
    count_sentences(&strip_tags(text))
}

/// Vowel-run heuristic: each maximal run of `a e i o u y` is one syllable,
/// with a floor of one per word. Not a dictionary lookup, so unusual words
/// such as "area" or "poem" are undercounted.
fn word_syllables(word: &str) -> usize {
    let letters: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();

    let mut runs = 0;
    let mut in_run = false;
    for c in letters.chars() {
        let vowel = VOWELS.contains(&c);
        if vowel && !in_run {
            runs += 1;
        }
        in_run = vowel;
    }
    runs.max(1)
}

pub fn syllable_count(text: &str) -> usize {
    words_of(&strip_tags(text))
        .iter()
        .map(|w| word_syllables(w))
        .sum()
}

fn flesch(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words = words as f64;
    let score = 206.835 - 1.015 * (words / sentences as f64) - 84.6 * (syllables as f64 / words);
    score.clamp(0.0, 100.0)
}

pub fn readability_score(text: &str) -> f64 {
    let stripped = strip_tags(text);
    let words = words_of(&stripped);
    let syllables = words.iter().map(|w| word_syllables(w)).sum();
    flesch(words.len(), count_sentences(&stripped), syllables)
}

/// Occurrences are counted as case-insensitive substrings, so "cat" also
/// matches inside "category".
fn density(stripped: &str, words: usize, keyword: &str) -> f64 {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() || words == 0 {
        return 0.0;
    }
    let occurrences = stripped.to_lowercase().matches(keyword.as_str()).count();
    (occurrences as f64 * 100.0) / words as f64
}

pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let stripped = strip_tags(text);
    let words = words_of(&stripped).len();
    density(&stripped, words, keyword)
}

/// Counts `<h1>`…`<h6>` open tags plus markdown ATX heading lines.
pub fn heading_count(text: &str) -> usize {
    HTML_HEADING_RE.find_iter(text).count() + MD_HEADING_RE.find_iter(text).count()
}

/// Returns `(internal, external)` anchor counts.
///
/// Internal: starts with `site_origin` or is root-relative (`/path`).
/// External: any other `http`/`https` URL. Everything else (`mailto:`,
/// `#fragment`, images) is ignored.
pub fn link_counts(text: &str, site_origin: &str) -> (usize, usize) {
    let origin = site_origin.trim().trim_end_matches('/').to_lowercase();

    let html_targets = HTML_HREF_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()));
    let md_targets = MD_LINK_RE
        .captures_iter(text)
        .filter(|c| c.get(1).map_or(true, |bang| bang.as_str().is_empty()))
        .filter_map(|c| c.get(2).map(|m| m.as_str()));

    let mut internal = 0;
    let mut external = 0;
    for target in html_targets.chain(md_targets) {
        match classify_link(target.trim(), &origin) {
            Some(LinkKind::Internal) => internal += 1,
            Some(LinkKind::External) => external += 1,
            None => {}
        }
    }
    (internal, external)
}

#[derive(Debug, PartialEq)]
enum LinkKind {
    Internal,
    External,
}

fn classify_link(target: &str, origin: &str) -> Option<LinkKind> {
    let lower = target.to_lowercase();
    if !origin.is_empty() && lower.starts_with(origin) {
        return Some(LinkKind::Internal);
    }
    if lower.starts_with('/') && !lower.starts_with("//") {
        return Some(LinkKind::Internal);
    }
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(LinkKind::External);
    }
    None
}
