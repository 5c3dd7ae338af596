use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one full build: extract, transform, load. Any stage error aborts
/// the build; there is no retry or partial output.
pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");

        tracing::info!("Fetching content...");
        let content = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} projects, {} achievements, {} skills",
            content.projects.len(),
            content.achievements.len(),
            content.skills.len()
        );

        tracing::info!("Mapping view-models...");
        let model = self.pipeline.transform(content).await?;
        tracing::info!("Mapped {} project views", model.projects.len());

        tracing::info!("Rendering pages...");
        let output_path = self.pipeline.load(model).await?;
        tracing::info!("Site written to: {}", output_path);

        Ok(output_path)
    }
}
