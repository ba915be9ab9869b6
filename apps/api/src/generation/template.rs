//! Template Provider: deterministic local synthesis, the terminal link of the chain.
//!
//! Flow: pick template for (content type, language) → substitute placeholders →
//!       pad with the "Additional Information" section or truncate → exactly
//!       `length` words.
//!
//! Never fails. This is substitution, not generation: the same request always
//! produces the same text.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::{Captures, Regex};

use crate::analysis::metrics::{is_word, strip_tags, word_count};
use crate::generation::provider::{ContentProvider, ProviderResult};
use crate::generation::templates::{filler_for, template_for};
use crate::models::content::{ContentRequest, ProviderKind};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(topic|keywords)\}").unwrap());

pub struct TemplateProvider;

impl TemplateProvider {
    /// Infallible form of `try_generate`, used directly by the orchestrator.
    pub fn render(&self, request: &ContentRequest) -> String {
        let target = request.length.max(1) as usize;
        let topic = plain_text(&request.topic);
        let keywords = match plain_text(&request.keywords_joined()) {
            k if k.is_empty() => topic.clone(),
            k => k,
        };
        // Single pass, so placeholders inside user values stay literal.
        let fill = |template: &str| {
            PLACEHOLDER_RE
                .replace_all(template, |caps: &Captures| match &caps[1] {
                    "topic" => topic.as_str(),
                    _ => keywords.as_str(),
                })
                .into_owned()
        };

        let mut text = fill(template_for(request.content_type, request.language))
            .trim_end()
            .to_string();

        let words = word_count(&text);
        if words < target {
            let (heading, body) = filler_for(request.language);
            let body = fill(body);
            let missing = (target - words).saturating_sub(word_count(heading));
            let repeats = missing.div_ceil(word_count(&body).max(1)).max(1);

            text.push_str("\n\n");
            text.push_str(heading);
            for _ in 0..repeats {
                text.push_str("\n\n");
                text.push_str(&body);
            }
        }

        truncate_words(&text, target)
    }
}

#[async_trait]
impl ContentProvider for TemplateProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Template
    }

    fn timeout(&self) -> Duration {
        Duration::ZERO
    }

    async fn try_generate(&self, request: &ContentRequest, _timeout: Duration) -> ProviderResult {
        ProviderResult::Success {
            text: self.render(request),
        }
    }
}

/// User values with markup removed. Templates carry no `<` or `>`, so the
/// rendered text tokenizes the same way `word_count` and `truncate_words` see it.
fn plain_text(value: &str) -> String {
    strip_tags(value)
        .replace(['<', '>'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps the first `limit` words while preserving line structure. Markers
/// that are not words (`#`, `-`) are kept with the words that follow them.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let mut remaining = limit;
    let mut lines = Vec::new();

    'lines: for line in text.lines() {
        if remaining == 0 {
            break;
        }
        let mut kept = Vec::new();
        for token in line.split_whitespace() {
            kept.push(token);
            if is_word(token) {
                remaining -= 1;
                if remaining == 0 {
                    lines.push(kept.join(" "));
                    break 'lines;
                }
            }
        }
        lines.push(kept.join(" "));
    }

    lines.join("\n").trim_end().to_string()
}
