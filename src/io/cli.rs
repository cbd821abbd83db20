//! Command-line interface for generating, batch-rendering, browsing and analyzing kolams

use crate::analysis::{AnalysisReport, UploadedImage};
use crate::io::configuration::{DEFAULT_COMPLEXITY, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT_DIR};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_pattern, timestamp_millis};
use crate::io::progress::BatchProgress;
use crate::pattern::presets::{PRESETS, Preset};
use crate::pattern::samples::{Sample, SampleFilter};
use crate::pattern::{GeneratedPattern, GenerationRequest, render};
use clap::{Args, Parser, Subcommand};
use std::fmt::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kolamgen")]
#[command(author, version, about = "Generate kolam patterns as SVG")]
/// Command-line arguments for the kolam tool
pub struct Cli {
    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate a single pattern
    Generate(GenerateArgs),
    /// Render every built-in preset
    Presets(PresetsArgs),
    /// Validate an uploaded image and show its analysis
    Analyze(AnalyzeArgs),
    /// Browse the sample catalogue
    Samples(SamplesArgs),
}

/// Arguments for `generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Pattern type: traditional, geometric, floral, festival or modern
    #[arg(short, long, default_value = "")]
    pub pattern: String,

    /// Dots per side of the guide lattice (3-12)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Motif density level (1-5)
    #[arg(short, long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: u32,

    /// Seed recorded with the pattern; drawn at random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start from a named preset; explicit options are ignored
    #[arg(long, conflicts_with_all = ["pattern", "grid_size", "complexity"])]
    pub preset: Option<String>,

    /// Directory the SVG is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Arguments for `presets`
#[derive(Args)]
pub struct PresetsArgs {
    /// Directory the SVGs are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Arguments for `analyze`
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Image file to analyze
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,
}

/// Arguments for `samples`
#[derive(Args)]
pub struct SamplesArgs {
    /// Category to show: all, traditional, geometric, floral, festival or modern
    #[arg(short, long, default_value = SampleFilter::ALL_TAG)]
    pub category: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

impl GenerateArgs {
    /// Resolve the arguments into a request, drawing a seed if none was given
    ///
    /// # Errors
    ///
    /// Returns an error if no pattern type or preset was selected, the
    /// preset name is unknown, or a numeric option is out of range
    pub fn to_request(&self) -> Result<GenerationRequest> {
        let seed = self.seed.unwrap_or_else(rand::random);

        if let Some(name) = &self.preset {
            let preset = Preset::find(name)
                .ok_or_else(|| invalid_parameter("preset", name, &"no preset with this name"))?;
            return Ok(preset.request(seed));
        }

        GenerationRequest::from_tag(self.grid_size, &self.pattern, self.complexity, seed)
    }
}

/// Executes a parsed command line
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if request validation, export or upload handling fails
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => self.generate(args).map(|_| ()),
            Command::Presets(args) => self.presets(&args.output).map(|_| ()),
            Command::Analyze(args) => Self::analyze(&args.image).map(|_| ()),
            Command::Samples(args) => Self::samples(&args.category).map(|_| ()),
        }
    }

    /// Generate and export one pattern, returning the written path
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or the export fails
    pub fn generate(&self, args: &GenerateArgs) -> Result<PathBuf> {
        let request = args.to_request()?;
        let pattern = render(&request);
        let path = export_pattern(&pattern, &args.output, timestamp_millis())?;
        self.report(&describe(&pattern, &path));
        Ok(path)
    }

    /// Render every preset into `output`, pairing each preset with its file
    ///
    /// # Errors
    ///
    /// Returns an error if any export fails
    pub fn presets(&self, output: &Path) -> Result<Vec<(&'static Preset, PathBuf)>> {
        let progress = BatchProgress::new(PRESETS.len(), self.cli.should_show_progress());
        let timestamp = timestamp_millis();
        let mut written = Vec::with_capacity(PRESETS.len());

        for preset in &PRESETS {
            progress.start(preset.name);
            let pattern = render(&preset.request(rand::random()));
            let path = export_pattern(&pattern, output, timestamp)?;
            tracing::info!(preset = preset.name, path = %path.display(), "exported preset");
            written.push((preset, path));
            progress.complete();
        }

        let elapsed = progress.finish();
        tracing::info!(count = written.len(), ?elapsed, "rendered presets");
        for (preset, path) in &written {
            self.report(&format!("{}: {}", preset.name, path.display()));
        }
        Ok(written)
    }

    /// Validate `image` and print its analysis
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is unreadable, too large or not an image
    pub fn analyze(image: &Path) -> Result<AnalysisReport> {
        let upload = UploadedImage::load(image)?;
        let report = AnalysisReport::sample(upload);
        emit(report.to_string().trim_end());
        Ok(report)
    }

    /// Print the samples in `category`, returning them in catalogue order
    ///
    /// # Errors
    ///
    /// Returns an error if `category` is neither `all` nor a pattern type
    pub fn samples(category: &str) -> Result<Vec<&'static Sample>> {
        let filter: SampleFilter = category.parse()?;
        let samples: Vec<_> = filter.select().collect();

        if let SampleFilter::Category(kind) = filter {
            emit(&format!("{}: {}\n", kind.label(), kind.description()));
        }
        if samples.is_empty() {
            emit(&format!("No samples in category '{filter}'"));
        }
        for sample in &samples {
            emit(&format!("{sample}\n"));
        }
        Ok(samples)
    }

    fn report(&self, text: &str) {
        if !self.cli.quiet {
            emit(text);
        }
    }
}

// Allow print for user-facing results
#[allow(clippy::print_stdout)]
fn emit(text: &str) {
    println!("{text}");
}

/// Human-readable summary of a generated pattern and where it was saved
pub fn describe(pattern: &GeneratedPattern, path: &Path) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = write_description(&mut text, pattern, path);
    text
}

fn write_description(
    out: &mut String,
    pattern: &GeneratedPattern,
    path: &Path,
) -> std::fmt::Result {
    let metadata = &pattern.metadata;
    writeln!(
        out,
        "{} ({})",
        metadata.traditional_name,
        metadata.pattern_type_label.unwrap_or("Unrecognized pattern")
    )?;
    if let Some(kind) = pattern.request.pattern() {
        writeln!(out, "  Style:        {}", kind.description())?;
    }
    writeln!(
        out,
        "  Grid:         {} ({} dots)",
        metadata.grid_size_label, metadata.total_dots
    )?;
    writeln!(
        out,
        "  Complexity:   {} ({})",
        metadata.complexity_level, metadata.difficulty
    )?;
    writeln!(
        out,
        "  Drawing time: {} minutes",
        metadata.estimated_minutes
    )?;
    writeln!(out, "  Palette:      {}", metadata.color_palette.join(", "))?;
    writeln!(out, "  Seed:         {}", pattern.request.seed())?;
    write!(out, "  Saved to:     {}", path.display())
}
