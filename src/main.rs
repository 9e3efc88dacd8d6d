use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use storeshots::GeneratorConfig;

/// Generate placeholder App Store screenshots for iPhone and iPad
#[derive(Parser, Debug)]
#[command(name = "storeshots", version, about)]
struct Cli {
    /// Root directory; `iphone/` and `ipad/` are created inside it
    #[arg(long, default_value = "screenshots")]
    output_dir: PathBuf,

    /// Preferred font file (falls back to the built-in font if unusable)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print a JSON report of the generated files
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Log filter used when `RUST_LOG` is unset. `warn` keeps a missing preferred
/// font (logged at `info`) quiet while unreadable or invalid fonts still show.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = default_log_filter(cli.verbose);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = GeneratorConfig::default();
    if let Some(font) = cli.font {
        config.font_path = font;
    }

    let report = storeshots::run_with(&config, &cli.output_dir).with_context(|| {
        format!("failed to generate screenshots under {}", cli.output_dir.display())
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["storeshots"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("screenshots"));
        assert!(cli.font.is_none());
        assert!(!cli.json && !cli.verbose);
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(default_log_filter(false), "warn");
        assert_eq!(default_log_filter(true), "debug");
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "storeshots", "--output-dir", "out", "--font", "/tmp/a.ttf", "--json", "-v",
        ])
        .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.font, Some(PathBuf::from("/tmp/a.ttf")));
        assert!(cli.json && cli.verbose);
    }
}
