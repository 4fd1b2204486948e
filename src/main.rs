use clap::{Parser, builder::styling};
use deveui_extractor::cli::{resolve_paths, run};
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Extract the devEUI of every device in a device map JSON file into a plain-text list
#[derive(Parser)]
#[command(name = "deveui", version, styles = STYLES)]
struct Cli {
    /// Device map JSON file to read [env: DEVEUI_INPUT] [default: components/devices-2000.json]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Text file to write devEUI values to [env: DEVEUI_OUTPUT] [default: device_euis.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The dotenv file to source path overrides from
    #[arg(short, long, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dotenv = match dotenvy::from_filename(&cli.env) {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => return Err(e.into()),
    };

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    if let Some(path) = dotenv {
        log::debug!("Sourced environment from {}", path.display().bright_black());
    }

    let paths = resolve_paths(cli.input, cli.output);
    let count = run(&paths.input, &paths.output)?;

    println!(
        "Wrote {} devEUI value(s) to {}",
        count.cyan(),
        paths.output.display().bright_black()
    );

    Ok(())
}
