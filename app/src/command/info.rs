use memors_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Shows where the config file is expected, whether it exists, and the
/// file and conversion settings a `convert` run would use without flags.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_from(&config_path)?;

        println!("=== memors Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if config_path.exists() {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults)");
        }
        println!();

        println!("Files:");
        println!("  Input: {}", config.files.input.display());
        println!("  Output: {}", config.files.output.display());
        println!();

        println!("Convert:");
        println!("  Timestamp Format: {}", config.convert.timestamp_format);
        println!("  Unparsable Timestamps: {}", config.convert.unparsable);

        Ok(())
    }
}
