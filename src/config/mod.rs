#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{OnInvalid, OutputFormat, ScanConfig};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "scan-weigh")]
#[command(about = "Tally weights decoded from scanned barcode labels")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Override display.output_format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override display.unit
    #[arg(long)]
    pub unit: Option<String>,

    /// Override display.decimals
    #[arg(long)]
    pub decimals: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read scans from the terminal one per line (default)
    Interactive,
    /// Decode every line of a file ('-' for stdin) and print the tally
    Sum {
        input: String,

        /// Override batch.on_invalid
        #[arg(long, value_enum)]
        on_invalid: Option<OnInvalid>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut ScanConfig) {
        if let Some(format) = self.format {
            config.display.output_format = format;
            tracing::debug!("output format overridden to {:?}", format);
        }
        if let Some(unit) = &self.unit {
            config.display.unit = unit.clone();
        }
        if let Some(decimals) = self.decimals {
            config.display.decimals = decimals;
        }
        if let Some(Command::Sum {
            on_invalid: Some(on_invalid),
            ..
        }) = &self.command
        {
            config.batch.on_invalid = *on_invalid;
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = CliConfig::parse_from([
            "scan-weigh",
            "--unit",
            "kg",
            "--decimals",
            "2",
            "--format",
            "json",
            "sum",
            "scans.txt",
            "--on-invalid",
            "abort",
        ]);
        let mut config = ScanConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.display.unit, "kg");
        assert_eq!(config.display.decimals, 2);
        assert_eq!(config.display.output_format, OutputFormat::Json);
        assert_eq!(config.batch.on_invalid, OnInvalid::Abort);
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = CliConfig::parse_from(["scan-weigh", "-y"]);
        assert!(cli.yes);
        assert!(cli.command.is_none());
    }
}
