// Adapters layer: concrete implementations for the external content sources
// (file store, GraphQL API, preview-image service).

pub mod content;
pub mod graphcms;
pub mod preview;
