mod adapters;
mod core;
mod global_constants;

#[cfg(test)]
mod processed_image_tests;
#[cfg(test)]
mod upload_phase_tests;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::adapters::{ConsolePresenter, DiskResultWriter, RemoteProcessingService};
use crate::core::models::{BackgroundMode, Submission};
use crate::core::orchestrators::upload_controller::UploadController;

#[derive(Parser, Debug)]
#[command(name = "bg-studio-pc", about = "Send an image to the background-processing service")]
struct Cli {
    /// Image file to process.
    image: PathBuf,

    /// Background handling: 'color' fills behind the subject, 'remove'
    /// leaves it transparent.
    #[arg(long, default_value = global_constants::DEFAULT_BACKGROUND_TYPE)]
    background_type: BackgroundMode,

    /// Fill value for the 'color' background type.
    #[arg(long, default_value = global_constants::DEFAULT_BACKGROUND_VALUE)]
    background_value: String,

    /// Segmentation model the service should use.
    #[arg(long, default_value = global_constants::DEFAULT_MODEL)]
    model: String,

    /// Directory the processed image is saved into.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip opening the saved result with the system viewer.
    #[arg(long)]
    no_open: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    log::info!(
        "{} starting {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME
    );

    let image_bytes = tokio::fs::read(&cli.image)
        .await
        .with_context(|| format!("failed to read {:?}", cli.image))?;
    let file_name = cli
        .image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let processing_service = Arc::new(RemoteProcessingService::build(
        global_constants::PROCESSING_API_BASE_URL.to_string(),
    ));
    let presenter = Arc::new(ConsolePresenter::new());
    let result_writer = Arc::new(DiskResultWriter::build(cli.output_dir));

    let mut controller = UploadController::build(processing_service, presenter, result_writer);

    let submission = Submission::build(
        image_bytes,
        file_name,
        cli.background_type,
        cli.background_value,
        cli.model,
    );

    if controller.submit(submission).await.is_err() {
        // The presenter already showed the error.
        std::process::exit(1);
    }

    if let Some(path) = controller.download_current_result()? {
        println!("Saved to {}", path.display());

        if !cli.no_open {
            if let Err(error) = open::that(&path) {
                log::warn!(
                    "{} failed to open {:?}: {}",
                    global_constants::LOG_TAG_MAIN,
                    path,
                    error
                );
            }
        }
    }

    Ok(())
}
