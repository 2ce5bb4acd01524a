use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    batch::{BatchEvent, BatchReport, generate_all},
    foundation::error::PlaceholderResult,
    manifest::load_manifest,
    render::{cpu::PlaceholderRenderer, settings::RenderSettings},
    text::font::{FontPreference, LoadedFont, load_font},
};

/// Manifest read when no path is given.
pub const DEFAULT_MANIFEST_PATH: &str = "screenshots.json";
/// Directory placeholders are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "screenshots";

/// Inputs of a single generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
    pub font: FontPreference,
    pub settings: RenderSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font: FontPreference::default(),
            settings: RenderSettings::default(),
        }
    }
}

/// Load the manifest, prepare the output directory and render every entry.
///
/// Only manifest and setup problems are returned as errors; per-entry
/// failures end up in the [`BatchReport`].
pub fn run(cfg: &RunConfig, observer: &mut dyn FnMut(&BatchEvent)) -> PlaceholderResult<BatchReport> {
    let records = load_manifest(&cfg.manifest_path)?;
    tracing::info!(
        manifest = %cfg.manifest_path.display(),
        records = records.len(),
        "manifest loaded"
    );

    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("create output dir '{}'", cfg.output_dir.display()))?;

    let font = load_font(&cfg.font);
    tracing::info!(font = %font.origin(), "font resolved");

    let mut renderer = match PlaceholderRenderer::new(font, cfg.settings.clone()) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "font rejected by shaper, using built-in font");
            PlaceholderRenderer::new(LoadedFont::builtin(), cfg.settings.clone())?
        }
    };
    Ok(generate_all(
        &records,
        &cfg.output_dir,
        &mut renderer,
        observer,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
