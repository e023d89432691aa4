use anyhow::Context;
use progress_collage_rs::image_pipeline::{CollageConfig, CollagePipeline};
use progress_collage_rs::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting progress collage...");

    let pipeline = CollagePipeline::new(CollageConfig::default());
    let config = pipeline.config();

    info!("Input: {}", config.input_dir.display());
    info!("Output: {}", config.output_dir.display());
    info!(
        "Logo: {}",
        config
            .logo_path
            .as_ref()
            .map_or_else(|| "disabled".to_string(), |path| path.display().to_string())
    );

    let report = pipeline
        .run_with(|path| println!("wrote {}", path.display()))
        .context("collage run failed")?;

    info!(
        sources = report.source_count,
        collages = report.written.len(),
        "Done"
    );

    Ok(())
}
