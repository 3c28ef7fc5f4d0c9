//! Gridweave studio.
//!
//! Reads an optional sketch file, applies `--set` edits on top of it, commits
//! once and writes the resulting frame to a PNG (or, with `--dry-run`, prints
//! the backend calls as JSON).

mod config;
mod raster;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;

use gridweave_engine::config::FieldValue;
use gridweave_engine::core::{CommitOutcome, Sketch};
use gridweave_engine::logging::{LoggingConfig, init_logging};
use gridweave_engine::render::DrawingBackend;
use gridweave_engine::render::recording::RecordingBackend;

use crate::config::StudioConfig;
use crate::raster::RasterBackend;

#[derive(Parser, Debug)]
#[command(name = "gridweave")]
#[command(about = "Render a grid of repeated shapes to a PNG")]
struct Cli {
    /// Sketch file (TOML) with canvas, output, logging and draft sections
    sketch: Option<PathBuf>,

    /// Draft edit applied after the sketch file, e.g. `--set columns=8`
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_edit)]
    edits: Vec<(String, FieldValue)>,

    /// Output PNG path (overrides the sketch file)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log filter in env_logger syntax (overrides the sketch file and RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Print the backend call stream as JSON instead of rasterizing
    #[arg(long)]
    dry_run: bool,
}

fn parse_edit(s: &str) -> Result<(String, FieldValue), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {s:?}"))?;
    let value = FieldValue::from_str(value).unwrap_or_else(|never| match never {});
    Ok((field.trim().to_string(), value))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.sketch {
        Some(path) => StudioConfig::load(path)?,
        None => StudioConfig::default(),
    };

    init_logging(LoggingConfig {
        env_filter: cli.log.clone().or_else(|| config.logging.filter.clone()),
        ..LoggingConfig::default()
    });

    if cli.dry_run {
        let sketch = render(RecordingBackend::new(), &config, &cli.edits)?;
        let calls = sketch.renderer().backend().calls();
        println!("{}", serde_json::to_string_pretty(calls).context("failed to encode calls")?);
        return Ok(());
    }

    let sketch = render(RasterBackend::new(), &config, &cli.edits)?;
    let output = cli.output.unwrap_or_else(|| config.output.path.clone());
    sketch.renderer().backend().save_png(&output)?;
    log::info!("wrote {}", output.display());
    Ok(())
}

/// Stages every edit, commits, then delivers the readiness signal so the
/// commit turns into exactly one frame.
fn render<B: DrawingBackend>(
    backend: B,
    config: &StudioConfig,
    edits: &[(String, FieldValue)],
) -> anyhow::Result<Sketch<B>> {
    let mut sketch = Sketch::new(backend, config.sketch_options()?);

    let staged = config.draft.iter().chain(edits.iter().map(|(f, v)| (f, v)));
    for (field, value) in staged {
        sketch
            .apply_named_edit(field, value.clone())
            .with_context(|| format!("rejected edit {field} = {value}"))?;
    }

    match sketch.commit().context("commit failed")? {
        CommitOutcome::Deferred => log::debug!("commit staged; waiting for backend"),
        CommitOutcome::Rendered(_) => {}
    }

    let report = sketch
        .notify_backend_ready()
        .context("frame failed")?
        .context("backend produced no frame")?;
    log::info!(
        "rendered {} cells on surface {} ({} pattern fallbacks)",
        report.cells,
        report.surface.id(),
        report.fallbacks
    );
    Ok(sketch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_edits() {
        assert_eq!(parse_edit("columns=8").unwrap(), ("columns".into(), FieldValue::Int(8)));
        assert_eq!(parse_edit("is3D=true").unwrap(), ("is3D".into(), FieldValue::Bool(true)));
        assert_eq!(
            parse_edit("shapeColor=#00FF00").unwrap(),
            ("shapeColor".into(), FieldValue::Text("#00FF00".into()))
        );
        assert!(parse_edit("columns").is_err());
    }

    #[test]
    fn cli_accepts_repeated_set() {
        let cli = Cli::try_parse_from([
            "gridweave", "sketch.toml", "--set", "rows=2", "--set", "shapeSize=12.5", "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.sketch, Some(PathBuf::from("sketch.toml")));
        assert_eq!(cli.edits.len(), 2);
        assert_eq!(cli.edits[1].1, FieldValue::Real(12.5));
        assert!(cli.dry_run);
    }

    #[test]
    fn file_edits_then_cli_edits() {
        let config = StudioConfig::from_toml_str("[draft]\ncolumns = 3\nrows = 3").unwrap();
        let edits = vec![("columns".to_string(), FieldValue::Int(2))];
        let sketch = render(RecordingBackend::new(), &config, &edits).unwrap();
        assert_eq!(sketch.committed().grid.columns, 2);
        assert_eq!(sketch.committed().grid.rows, 3);
        assert_eq!(sketch.renderer().frames_rendered(), 1);
    }

    #[test]
    fn invalid_edit_is_reported() {
        let config = StudioConfig::default();
        let edits = vec![("columns".to_string(), FieldValue::Int(0))];
        assert!(render(RecordingBackend::new(), &config, &edits).is_err());
    }

    #[test]
    fn unknown_pattern_fails_the_run() {
        let config = StudioConfig::from_toml_str(
            "[draft]\nusePattern = true\npatternType = \"unknownXYZ\"",
        )
        .unwrap();
        let err = render(RecordingBackend::new(), &config, &[]).unwrap_err();
        assert!(format!("{err:#}").contains("unknownXYZ"));
    }

    #[test]
    fn raster_run_draws_pixels() {
        let config = StudioConfig::from_toml_str(
            "[canvas]\nwidth = 60\nheight = 60\n[draft]\ncolumns = 1\nrows = 1\nshapeSize = 40",
        )
        .unwrap();
        let sketch = render(RasterBackend::new(), &config, &[]).unwrap();
        let px = sketch.renderer().backend().pixmap().unwrap().pixel(30, 30).unwrap();
        assert_eq!((px.red(), px.green(), px.blue()), (255, 0, 0));
    }
}
