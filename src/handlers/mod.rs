// handlers/mod.rs - HTTP handlers grouped by resource
//
// system   → public, no credentials (/, /health)
// author   → /authors*, behind the API key gate
// article  → /articles*, behind the API key gate

pub mod article;
pub mod author;
pub mod system;
