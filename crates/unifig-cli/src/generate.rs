use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use std::{fs, path::PathBuf};
use unifig::{BoxDrawing, CodePointSet, Encoder, FigFont, HexSource, SolidFill};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncoderKind {
    Solid,
    HalfBlock,
    Braille,
    #[value(name = "box")]
    BoxDrawing,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Unifont .hex file, plain or zipped
    #[arg(long)]
    hex: PathBuf,
    /// Directory the .flf files are written to
    #[arg(short, long, default_value = "fig-fonts")]
    out_dir: PathBuf,
    /// File name prefix of the generated fonts
    #[arg(long, default_value = "chinese")]
    prefix: String,
    /// Encoders to run; all of them when omitted
    #[arg(short, long, value_enum)]
    encoder: Vec<EncoderKind>,
    /// Box drawing style: bold, normal, double or borad
    #[arg(long, default_value = "normal")]
    style: String,
    /// Outline every pixel on its own instead of whole shapes
    #[arg(long)]
    split_block: bool,
    /// Two characters drawn for a set pixel by the solid encoder
    #[arg(long, default_value = "\u{2588}\u{2588}")]
    fill: String,
    /// Two characters drawn for a clear pixel by the solid encoder
    #[arg(long, default_value = "  ")]
    blank: String,
    /// Extra code points or ranges in hex, e.g. 4E00-9FFF
    #[arg(short, long)]
    range: Vec<String>,
    /// Text file with one character per line to include
    #[arg(long)]
    charset_file: Option<PathBuf>,
    /// Leave out the default CJK punctuation
    #[arg(long)]
    no_punctuation: bool,
}

impl GenerateArgs {
    fn encoders(&self) -> Result<Vec<Encoder>> {
        let kinds = if self.encoder.is_empty() {
            EncoderKind::value_variants().to_vec()
        } else {
            self.encoder.clone()
        };
        kinds
            .into_iter()
            .map(|kind| -> Result<Encoder> {
                Ok(match kind {
                    EncoderKind::Solid => {
                        Encoder::SolidFill(SolidFill::new(self.fill.as_str(), self.blank.as_str())?)
                    }
                    EncoderKind::HalfBlock => Encoder::half_block(),
                    EncoderKind::Braille => Encoder::braille(),
                    EncoderKind::BoxDrawing => {
                        Encoder::BoxDrawing(BoxDrawing::from_name(&self.style, self.split_block)?)
                    }
                })
            })
            .collect()
    }

    fn code_points(&self) -> Result<CodePointSet> {
        let mut set = if self.no_punctuation {
            CodePointSet::new()
        } else {
            CodePointSet::cjk_punctuation()
        };
        for range in &self.range {
            set.parse_range(range)?;
        }
        if let Some(path) = &self.charset_file {
            let list = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            set.extend_from_list(&list)?;
        }
        Ok(set.with_required())
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    // configuration errors surface before any file is touched
    let encoders = args.encoders()?;
    let set = args.code_points()?;

    let source = HexSource::load(&args.hex)
        .with_context(|| format!("failed to load {}", args.hex.display()))?;
    let glyphs = source.select(&set)?;
    log::info!("loaded {} glyphs, {} selected", source.len(), glyphs.len());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let mut failed = 0;
    for encoder in &encoders {
        let font = FigFont::assemble(&glyphs, encoder);
        let path = args
            .out_dir
            .join(format!("{}_{}.flf", args.prefix, encoder.file_stem()));
        if let Err(err) = font.save(&path) {
            log::error!("failed to write {}: {err}", path.display());
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} fonts could not be written", encoders.len());
    }
    Ok(())
}
