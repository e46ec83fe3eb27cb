//! Terminal output: human-readable text or NDJSON events

pub mod json;
pub mod output;
