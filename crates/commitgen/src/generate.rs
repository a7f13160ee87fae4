use crate::config::GeminiOptions;
use crate::generator::{generate_message, GeminiClient, Generator};
use crate::prelude::{eprintln, println, *};
use commitgen_core::GenerationRequest;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// File containing the diff (reads stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[clap(flatten)]
    pub gemini: GeminiOptions,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let diff = read_diff(options.file.as_deref()).await?;

    if global.verbose {
        eprintln!("Model: {}", options.gemini.model);
        eprintln!("Diff length: {} chars", diff.len());
    }

    let client = GeminiClient::new(&options.gemini)?;
    let message = message_for(&client, diff).await?;

    println!("{}", message);

    Ok(())
}

async fn read_diff(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| eyre!("Failed to read diff from '{}': {}", path.display(), e)),
        None => {
            let mut diff = String::new();
            tokio::io::stdin()
                .read_to_string(&mut diff)
                .await
                .context("Failed to read diff from stdin")?;
            Ok(diff)
        }
    }
}

async fn message_for(generator: &dyn Generator, diff: String) -> Result<String> {
    let request = GenerationRequest::new(diff);
    let result = generate_message(generator, &request).await?;
    Ok(result.message)
}
