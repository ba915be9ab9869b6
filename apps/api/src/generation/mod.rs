// Content generation: an ordered provider chain that always ends in local templates.
// Hosted providers go through api_client; nothing here builds HTTP requests.

pub mod handlers;
pub mod orchestrator;
pub mod provider;
pub mod remote;
pub mod secondary;
pub mod template;
pub mod templates;
