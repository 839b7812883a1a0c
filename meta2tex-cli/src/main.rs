use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};

use meta2tex::{convert_all_with, Conversion, ConvertConfig};

mod report;

/// Convert material metadata files into palette textures
#[derive(Parser)]
#[command(name = "meta2tex", version)]
struct Args {
    /// A metadata file, or a directory to search for metadata files
    input: PathBuf,

    /// Extension identifying metadata files
    #[arg(long, default_value = "meta")]
    extension: String,

    /// Fail files whose colors are not exactly six hex digits
    #[arg(long)]
    strict: bool,

    /// Print a JSON summary on stdout
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every conversion step
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Warn
    } else if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn log_outcome(i: usize, total: usize, conversion: &Conversion) {
    match &conversion.result {
        Ok(texture) => info!(
            "{}/{}: Converted {} to {}",
            i + 1,
            total,
            conversion.input.display(),
            texture.path.display()
        ),
        Err(err) => error!(
            "{}/{}: Error during conversion of {}, {}",
            i + 1,
            total,
            conversion.input.display(),
            err
        ),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let input = std::fs::canonicalize(&args.input)
        .with_context(|| format!("input not found: {}", args.input.display()))?;

    let config = ConvertConfig {
        extension: args.extension.trim_start_matches('.').to_string(),
        strict_colors: args.strict,
    };

    let conversions = convert_all_with(&input, &config, log_outcome);
    if conversions.is_empty() {
        info!("no .{} files found under {}", config.extension, input.display());
    }

    let summary = report::Summary::from_conversions(&conversions);
    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&summary)?
        } else {
            serde_json::to_string(&summary)?
        };
        println!("{json}");
    }

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} conversions failed",
            summary.failed,
            conversions.len()
        );
    }

    Ok(())
}
