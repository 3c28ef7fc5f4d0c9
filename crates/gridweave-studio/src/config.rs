//! Sketch file.
//!
//! ```toml
//! [canvas]
//! width = 800
//! height = 600
//! background = "#F0F0F0"
//!
//! [output]
//! path = "grid.png"
//!
//! [logging]
//! filter = "gridweave_engine=debug"
//!
//! [draft]
//! is3D = true
//! shapeType = "torus"
//! columns = 4
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use gridweave_engine::config::FieldValue;
use gridweave_engine::coords::Viewport;
use gridweave_engine::core::SketchOptions;
use gridweave_engine::paint::Color;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub canvas: CanvasSection,
    pub output: OutputSection,
    pub logging: LoggingSection,
    /// Draft edits keyed by control name.
    pub draft: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSection {
    pub width: f32,
    pub height: f32,
    pub background: Color,
}

impl Default for CanvasSection {
    fn default() -> Self {
        let options = SketchOptions::default();
        Self {
            width: options.canvas.width,
            height: options.canvas.height,
            background: options.background,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub path: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { path: PathBuf::from("gridweave.png") }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub filter: Option<String>,
}

impl StudioConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sketch file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid sketch file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn sketch_options(&self) -> anyhow::Result<SketchOptions> {
        let options = SketchOptions {
            canvas: Viewport::new(self.canvas.width, self.canvas.height),
            background: self.canvas.background,
        };
        options.validate().context("invalid [canvas] section")?;
        Ok(options)
    }
}
