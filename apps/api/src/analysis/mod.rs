// SEO analysis: text metrics and the scoring rubric built on them.
// Pure and synchronous; safe to call from any handler without spawn_blocking.

pub mod handlers;
pub mod metrics;
pub mod scoring;
