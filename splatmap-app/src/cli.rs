use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use splatmap_core::{parse_pixel, RoutePlan, RouteSession};
use splatmap_render::{export_png, render, render_block_preview, ExportMetadata};

use crate::error::{AppError, Result};
use crate::preferences::{self, AppPreferences};

#[derive(Debug, Parser)]
#[command(
    name = "splatmap",
    about = "Select route plan blocks by pixel and render the selection",
    version
)]
pub struct Cli {
    /// Route file produced by the route planner (JSON).
    pub route_file: PathBuf,

    /// Select the block under pixel `ROW,COL`. Repeatable.
    #[arg(long, value_name = "ROW,COL", value_parser = pixel_arg, allow_hyphen_values = true)]
    pub select: Vec<(i64, i64)>,

    /// Deselect the block under pixel `ROW,COL`. Applied after selections.
    #[arg(long, value_name = "ROW,COL", value_parser = pixel_arg, allow_hyphen_values = true)]
    pub deselect: Vec<(i64, i64)>,

    /// Flip the block under pixel `ROW,COL`. Applied last.
    #[arg(long, value_name = "ROW,COL", value_parser = pixel_arg, allow_hyphen_values = true)]
    pub toggle: Vec<(i64, i64)>,

    /// Select every block before applying other edits.
    #[arg(long)]
    pub all: bool,

    /// Render only this block index, ignoring the selection.
    #[arg(long, value_name = "INDEX")]
    pub preview: Option<usize>,

    /// Output PNG path. Defaults to the configured output path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preferences file to use instead of the platform default.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print selected block indices and their pixel rectangles.
    #[arg(long)]
    pub list: bool,

    /// Do not embed schedule and selection metadata in the PNG.
    #[arg(long)]
    pub no_metadata: bool,

    /// Save the effective preferences to the config file.
    #[arg(long)]
    pub write_config: bool,
}

fn pixel_arg(s: &str) -> std::result::Result<(i64, i64), String> {
    parse_pixel(s).map_err(|e| e.to_string())
}

/// Read and decode a route file.
pub fn load_plan(path: &Path) -> Result<RoutePlan> {
    let json = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the command line's selection edits in order: all, select, deselect, toggle.
pub fn apply_edits(session: &mut RouteSession, cli: &Cli) -> Result<()> {
    if cli.all {
        session.select_all();
    }
    for &(row, col) in &cli.select {
        session.select_by_pixel(row, col)?;
    }
    for &(row, col) in &cli.deselect {
        session.deselect_by_pixel(row, col)?;
    }
    for &(row, col) in &cli.toggle {
        session.toggle_by_pixel(row, col)?;
    }
    Ok(())
}

/// Selection summary, one block per line.
pub fn format_listing(session: &RouteSession) -> Result<String> {
    let mut out = String::new();
    for (index, rect) in session.selected_rects()? {
        out.push_str(&format!(
            "{index}\trows {}..{}\tcols {}..{}\n",
            rect.top, rect.bottom, rect.left, rect.right
        ));
    }
    Ok(out)
}

/// Run one invocation, returning the path the image was written to.
pub fn run(cli: &Cli) -> Result<PathBuf> {
    let config = cli.config.clone().unwrap_or_else(preferences::config_path);
    let prefs = AppPreferences::load_from(&config);
    if cli.write_config {
        prefs.save_to(&config);
    }

    let plan = load_plan(&cli.route_file)?;
    let mut session = RouteSession::from_plan(&plan)?;
    apply_edits(&mut session, cli)?;

    if cli.list {
        print!("{}", format_listing(&session)?);
    }

    let style = prefs.overlay_style();
    let image = match cli.preview {
        Some(index) => render_block_preview(&session, index, &style)?,
        None => render(&session, &style)?,
    };
    if session.members().is_empty() && cli.preview.is_none() {
        warn!("No blocks selected; writing the plain visited map");
    }

    let output = cli.output.clone().unwrap_or_else(|| prefs.output_path.clone());
    let metadata = (prefs.embed_metadata && !cli.no_metadata)
        .then(|| ExportMetadata::from_session(&session));
    export_png(&image, &output, metadata.as_ref())?;
    info!(
        "Wrote {} ({} blocks selected)",
        output.display(),
        session.members().len()
    );
    Ok(output)
}
