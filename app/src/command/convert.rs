use anyhow::Context;
use memors_config::Config;
use memors_core::{ConvertOptions, Error, UnparsablePolicy};
use std::path::PathBuf;
use tracing::info;

/// Resolved parameters for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertInput {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
}

impl ConvertInput {
    /// Merge command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn resolve(
        config: Config,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        unparsable: Option<UnparsablePolicy>,
    ) -> Self {
        let mut options = config.convert;
        if let Some(policy) = unparsable {
            options.unparsable = policy;
        }

        Self {
            input: input.unwrap_or(config.files.input),
            output: output.unwrap_or(config.files.output),
            options,
        }
    }
}

/// Strategy for converting the HTML export into a text file.
///
/// The output file is only written when at least one memo block is found.
#[derive(Debug, Clone, Copy)]
pub struct ConvertStrategy;

impl super::CommandStrategy for ConvertStrategy {
    type Input = ConvertInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        info!("Reading memos from {}", input.input.display());
        let html = tokio::fs::read_to_string(&input.input)
            .await
            .with_context(|| format!("Error reading file: {}", input.input.display()))?;

        let rendered = match memors_core::convert(&html, &input.options) {
            Ok(rendered) => rendered,
            Err(Error::NoRecords) => {
                println!("No memos found.");
                return Ok(());
            }
        };

        tokio::fs::write(&input.output, rendered.text.as_bytes())
            .await
            .with_context(|| format!("Error writing output file: {}", input.output.display()))?;

        println!(
            "Successfully processed {} memos. Output written to {}",
            rendered.count,
            input.output.display()
        );
        Ok(())
    }
}
