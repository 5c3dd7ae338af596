use clap::Parser;
use folio_build::utils::{logger, validation::Validate};
use folio_build::{
    CliConfig, FileContentStore, GraphClient, LocalStorage, PreviewClient, SiteEngine,
    SitePipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting folio-build");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let content = FileContentStore::new(config.content_dir.clone());
    let skills = GraphClient::new(config.skill_api_endpoint.clone());
    let previews = PreviewClient::new(config.preview_endpoint.clone());
    let storage = LocalStorage::new(config.output_path.clone());

    let pipeline = SitePipeline::new(content, skills, previews, storage, config)?;
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site build completed successfully!");
            println!("✅ Site build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Site build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                folio_build::utils::error::ErrorSeverity::Low => 0,
                folio_build::utils::error::ErrorSeverity::Medium => 2,
                folio_build::utils::error::ErrorSeverity::High => 1,
                folio_build::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
