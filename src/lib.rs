//! Placeholder screenshot generator.
//!
//! Reads a JSON manifest of screenshot filenames and renders one labeled
//! placeholder PNG per entry: a fixed-size dark canvas with a thin border, the
//! wrapped and centered label derived from the filename, and a small badge in
//! the top-right corner.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `screenshots.json -> Vec<ManifestRecord>` (fatal on any error)
//! 2. **Label**: `space-my-cool-app.png -> "My Cool App"`
//! 3. **Wrap**: greedy first-fit against the canvas width minus a margin
//! 4. **Render**: `vello_cpu` rasterization, written as PNG via `image`
//!
//! Per-entry failures never abort a run; they are collected into a
//! [`BatchReport`].
#![forbid(unsafe_code)]

mod batch;
mod foundation;
mod label;
mod manifest;
mod pipeline;
mod render;
mod text;

pub use batch::{BatchEvent, BatchReport, ItemFailure, PROGRESS_EVERY, generate_all};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{PlaceholderError, PlaceholderResult};
pub use label::{FILENAME_PREFIX, IMAGE_EXTENSION, derive_label, is_target_image};
pub use manifest::{ManifestError, ManifestRecord, load_manifest, parse_manifest};
pub use pipeline::{DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_DIR, RunConfig, run};
pub use render::PlaceholderBackend;
pub use render::cpu::PlaceholderRenderer;
pub use render::layout::{PlacedLine, block_start_y, centered_x, layout_block};
pub use render::settings::{BADGE_TEXT, BadgeStyle, RenderSettings};
pub use text::font::{
    BuiltinFont, DEFAULT_FONT_PATH, FontFace, FontOrigin, FontPreference, LoadedFont, OutlineFont,
    load_font,
};
pub use text::shape::{ShapedText, SizedShaper, TextBrushRgba8, TextLayoutEngine, TextMeasure, TextShaper};
pub use text::wrap::{TextLine, wrap_greedy};
