pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_hostname, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "folio-build"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Builds the portfolio site from local and remote content")
)]
pub struct CliConfig {
    /// Root of the file-based content store (projects/, achievements/).
    #[cfg_attr(feature = "cli", arg(long, default_value = "./content"))]
    pub content_dir: String,

    /// GraphQL endpoint serving skill records.
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "https://api-eu-central-1.graphcms.com/v2/portfolio/master")
    )]
    pub skill_api_endpoint: String,

    /// Preview-image service endpoint.
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "https://preview.example.com/api/preview")
    )]
    pub preview_endpoint: String,

    /// Host whose image URLs are treated as locally resolvable.
    #[cfg_attr(feature = "cli", arg(long, default_value = "res.cloudinary.com"))]
    pub media_host: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./public"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn content_dir(&self) -> &str {
        &self.content_dir
    }

    fn skill_api_endpoint(&self) -> &str {
        &self.skill_api_endpoint
    }

    fn preview_endpoint(&self) -> &str {
        &self.preview_endpoint
    }

    fn media_host(&self) -> &str {
        &self.media_host
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("content_dir", &self.content_dir)?;
        validate_url("skill_api_endpoint", &self.skill_api_endpoint)?;
        validate_url("preview_endpoint", &self.preview_endpoint)?;
        validate_hostname("media_host", &self.media_host)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
