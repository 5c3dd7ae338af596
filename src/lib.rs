pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use crate::adapters::{content::FileContentStore, graphcms::GraphClient, preview::PreviewClient};
pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::SiteEngine, pipeline::SitePipeline};
pub use crate::utils::error::{Result, SiteError};
