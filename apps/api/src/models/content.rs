use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::metrics::word_count;

/// Word-count bounds applied by callers before a request reaches the generator.
pub const MIN_LENGTH: u32 = 100;
pub const MAX_LENGTH: u32 = 5000;
pub const DEFAULT_LENGTH: u32 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Blog,
    Article,
    Guide,
    Review,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Article => "article",
            ContentType::Guide => "guide",
            ContentType::Review => "review",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }
}

/// A request for generated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    pub topic: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Target word count.
    #[serde(default = "default_length")]
    pub length: u32,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub audience: Option<String>,
}

fn default_length() -> u32 {
    DEFAULT_LENGTH
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("topic cannot be empty")]
    EmptyTopic,
}

impl ContentRequest {
    #[cfg(test)]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            keywords: Vec::new(),
            length: DEFAULT_LENGTH,
            content_type: ContentType::default(),
            language: Language::default(),
            audience: None,
        }
    }

    /// The only check that can reject a request outright.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::EmptyTopic);
        }
        Ok(())
    }

    /// Clamps `length` into `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn with_clamped_length(mut self) -> Self {
        self.length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }

    /// Keywords joined the way the wire format and templates expect them.
    pub fn keywords_joined(&self) -> String {
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The keyword analysis is scored against: first keyword, else the topic.
    pub fn focus_keyword(&self) -> &str {
        self.keywords
            .iter()
            .map(|k| k.trim())
            .find(|k| !k.is_empty())
            .unwrap_or_else(|| self.topic.trim())
    }
}

/// Identity of the provider that produced a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Remote,
    Secondary,
    Template,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Remote => "remote",
            ProviderKind::Secondary => "secondary",
            ProviderKind::Template => "template",
        };
        f.write_str(name)
    }
}

/// Finished text produced by exactly one `generate` call. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub id: Uuid,
    pub text: String,
    pub word_count: usize,
    pub source_provider: ProviderKind,
    pub language: Language,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedContent {
    pub fn new(text: String, source_provider: ProviderKind, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            word_count: word_count(&text),
            text,
            source_provider,
            language,
            generated_at: Utc::now(),
        }
    }
}
