use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use std::{fs, path::PathBuf};
use unifig::{FlfFile, HexSource};

mod generate;

#[derive(Parser)]
#[command(name = "unifig", version, about = "Generate FIGlet fonts from Unifont glyphs")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate .flf fonts from a Unifont .hex file
    Generate(generate::GenerateArgs),
    /// Dump a .hex file as JSON (decimal code point -> hex rows)
    DumpJson {
        #[arg(long)]
        hex: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Inspect font metadata
    Inspect {
        #[arg(short, long)]
        font: PathBuf,
        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    let _logger = Logger::try_with_env_or_str(level)?.start()?;

    match cli.command {
        Cmd::Generate(args) => generate::run(args)?,
        Cmd::DumpJson { hex, output } => {
            let source = HexSource::load(&hex)
                .with_context(|| format!("failed to load {}", hex.display()))?;
            fs::write(&output, source.to_json()?)
                .with_context(|| format!("failed to write {}", output.display()))?;
            log::info!("dumped {} glyphs to {}", source.len(), output.display());
        }
        Cmd::Inspect { font, json } => {
            let content = fs::read_to_string(&font)
                .with_context(|| format!("failed to read {}", font.display()))?;
            let f = FlfFile::parse(&content)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&f.header)?);
            } else {
                let h = &f.header;
                println!("FIGfont: {}", font.display());
                println!("  Height: {} (baseline {})", h.height, h.baseline);
                println!("  Max length: {}", h.max_length);
                println!("  Comment lines: {}", h.comment_lines);
                println!("  Defined characters: {}", f.glyph_count());
                println!("  Code tagged: {}", f.tagged_count());
                if f.tagged_count() != h.codetag_count {
                    log::warn!(
                        "header declares {} code tagged characters, found {}",
                        h.codetag_count,
                        f.tagged_count()
                    );
                }
            }
        }
    }
    Ok(())
}
