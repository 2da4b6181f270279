use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use audiowrap::{CompatConfig, ConversionMode, DeviceConverter, ParameterRewriter};

/// Convert audio device masks between the ICS and JB layouts
#[derive(Parser)]
#[command(name = "audiowrap", version)]
struct Cli {
    /// JSON config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable the BUILTIN_MIC -> VOICE_CALL quirk
    #[arg(long)]
    quirk: bool,

    /// Pass masks through without layout conversion
    #[arg(long)]
    no_convert: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single device mask
    Convert {
        /// ics-to-jb or jb-to-ics
        mode: ConversionMode,
        /// Mask as decimal or 0x-prefixed hex
        mask: String,
    },
    /// Rewrite the device keys of a key=value;... parameter string
    Params {
        /// ics-to-jb or jb-to-ics
        mode: ConversionMode,
        kv_pairs: String,
    },
}

fn parse_mask(mask: &str) -> Result<u32> {
    let parsed = match mask.strip_prefix("0x").or_else(|| mask.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => mask.parse::<u32>(),
    };
    parsed.context(format!("Invalid device mask: {}", mask))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CompatConfig::load(path)?,
        None => CompatConfig::default(),
    };
    if cli.quirk {
        config.voice_call_quirk = true;
    }
    if cli.no_convert {
        config.convert_devices = false;
    }

    match cli.command {
        Command::Convert { mode, mask } => {
            let devices = parse_mask(&mask)?;
            let converted = DeviceConverter::new(&config).convert(devices, mode);
            println!("{:#010x}", converted);
        }
        Command::Params { mode, kv_pairs } => {
            println!("{}", ParameterRewriter::new(&config).rewrite(&kv_pairs, mode));
        }
    }

    Ok(())
}
