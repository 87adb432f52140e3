use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use collage_packer_core::{
    LayoutConfig, NullProgress, Phase, Progress, cm_to_points, compose_pdf, to_json,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "collage-packer",
    about = "Lay out a folder of images onto PDF pages",
    version
)]
struct Cli {
    // Input/Output
    /// Input directory (searched recursively for png/jpg/jpeg/gif/bmp)
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output PDF path
    #[arg(short, long, default_value = "collage.pdf", help_heading = "Input/Output")]
    output: PathBuf,
    /// Also export the computed layout as JSON to this path
    #[arg(long, help_heading = "Input/Output")]
    layout_json: Option<PathBuf>,

    // Layout
    /// Bounding-box width per image (cm)
    #[arg(long, default_value_t = 10.0, help_heading = "Layout")]
    max_width_cm: f32,
    /// Bounding-box height per image (cm)
    #[arg(long, default_value_t = 15.5, help_heading = "Layout")]
    max_height_cm: f32,
    /// Page margin and inter-image spacing (cm)
    #[arg(long, default_value_t = 0.3, help_heading = "Layout")]
    margin_cm: f32,
    /// Page width in points (default: A4)
    #[arg(long, help_heading = "Layout")]
    page_width: Option<f32>,
    /// Page height in points (default: A4)
    #[arg(long, help_heading = "Layout")]
    page_height: Option<f32>,

    // Logging/UX
    /// Show a progress bar (disable with --progress=false or --quiet)
    #[arg(long, default_value_t = true, action = ArgAction::Set, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

/// Drives an indicatif bar from the core's phase/percent notifications.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg} [{bar:40}] {pos}%")
                .unwrap()
                .progress_chars("=> "),
        );
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for BarProgress {
    fn report(&mut self, percent: u8, phase: Option<Phase>) {
        if let Some(phase) = phase {
            self.bar.set_message(phase.as_str());
        }
        self.bar.set_position(percent as u64);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);

    anyhow::ensure!(
        cli.input.is_dir(),
        "input directory not found: {}",
        cli.input.display()
    );
    anyhow::ensure!(
        cli.max_width_cm > 0.0 && cli.max_height_cm > 0.0,
        "bounding box must be positive, got {} x {} cm",
        cli.max_width_cm,
        cli.max_height_cm
    );

    let mut cfg = LayoutConfig {
        margin: cm_to_points(cli.margin_cm),
        ..LayoutConfig::default()
    };
    if let Some(w) = cli.page_width {
        cfg.page_width = w;
    }
    if let Some(h) = cli.page_height {
        cfg.page_height = h;
    }

    let box_w = cm_to_points(cli.max_width_cm);
    let box_h = cm_to_points(cli.max_height_cm);

    let layout = if cli.progress && !cli.quiet {
        let mut bar = BarProgress::new();
        let layout = compose_pdf(&cli.input, &cli.output, box_w, box_h, &cfg, &mut bar)
            .with_context(|| format!("compose {}", cli.output.display()))?;
        bar.finish();
        layout
    } else {
        compose_pdf(&cli.input, &cli.output, box_w, box_h, &cfg, &mut NullProgress)
            .with_context(|| format!("compose {}", cli.output.display()))?
    };

    let stats = layout.stats();
    info!(
        output = %cli.output.display(),
        pages = stats.num_pages,
        placements = stats.num_placements,
        rotated = stats.num_rotated,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "document written"
    );

    if let Some(path) = &cli.layout_json {
        let json = serde_json::to_string_pretty(&to_json(&layout))?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "layout exported");
    }

    Ok(())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
