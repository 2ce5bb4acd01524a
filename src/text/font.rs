//! Font resolution with a guaranteed fallback.
//!
//! Lookup order: the preferred font file, then a sans-serif face from the
//! system font database, then the built-in block font. [`load_font`] never
//! fails.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Font the placeholders were originally designed around.
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Arial.ttf";

/// Families tried, in order, when searching the system database.
const SYSTEM_FAMILY_NAMES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

/// Where to look for a font before falling back to the built-in one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontPreference {
    pub preferred_path: Option<PathBuf>,
    pub allow_system_fonts: bool,
}

impl Default for FontPreference {
    fn default() -> Self {
        Self {
            preferred_path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            allow_system_fonts: true,
        }
    }
}

impl FontPreference {
    /// Skip every lookup and use the built-in font.
    pub fn builtin_only() -> Self {
        Self {
            preferred_path: None,
            allow_system_fonts: false,
        }
    }
}

/// Which lookup tier produced a [`LoadedFont`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    Preferred(PathBuf),
    System { family: String },
    Builtin,
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontOrigin::Preferred(p) => write!(f, "preferred font '{}'", p.display()),
            FontOrigin::System { family } => write!(f, "system font '{family}'"),
            FontOrigin::Builtin => f.write_str("built-in block font"),
        }
    }
}

/// Raw outline font data (TTF/OTF/TTC) plus the face index to use.
#[derive(Clone)]
pub struct OutlineFont {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
}

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Fixed-advance font that draws every visible character as a solid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BuiltinFont;

impl BuiltinFont {
    /// Horizontal advance per character, in em.
    pub const ADVANCE_EM: f32 = 0.6;
    /// Cell ink box relative to the em square: (left, top, right, bottom).
    pub const CELL_EM: (f32, f32, f32, f32) = (0.08, 0.25, 0.52, 0.95);

    pub fn advance(self, size_px: f32) -> f32 {
        size_px * Self::ADVANCE_EM
    }

    pub fn measure(self, text: &str, size_px: f32) -> f32 {
        text.chars().count() as f32 * self.advance(size_px)
    }
}

#[derive(Clone, Debug)]
pub enum FontFace {
    Outline(OutlineFont),
    Builtin(BuiltinFont),
}

/// A resolved font and the tier it came from.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    face: FontFace,
    origin: FontOrigin,
}

impl LoadedFont {
    pub fn builtin() -> Self {
        Self {
            face: FontFace::Builtin(BuiltinFont),
            origin: FontOrigin::Builtin,
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn origin(&self) -> &FontOrigin {
        &self.origin
    }
}

/// Resolve a font according to `pref`. Always succeeds.
pub fn load_font(pref: &FontPreference) -> LoadedFont {
    if let Some(path) = &pref.preferred_path {
        match read_font_file(path) {
            Ok(font) => {
                return LoadedFont {
                    face: FontFace::Outline(font),
                    origin: FontOrigin::Preferred(path.clone()),
                };
            }
            Err(reason) => {
                tracing::debug!(path = %path.display(), %reason, "preferred font unavailable");
            }
        }
    }

    if pref.allow_system_fonts {
        if let Some((font, family)) = find_system_font() {
            return LoadedFont {
                face: FontFace::Outline(font),
                origin: FontOrigin::System { family },
            };
        }
        tracing::debug!("no usable system font found");
    }

    LoadedFont::builtin()
}

fn read_font_file(path: &Path) -> Result<OutlineFont, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;

    let mut db = usvg::fontdb::Database::new();
    db.load_font_data(bytes.clone());
    let index = db
        .faces()
        .next()
        .map(|face| face.index)
        .ok_or_else(|| "file contains no parseable font face".to_string())?;

    Ok(OutlineFont {
        bytes: Arc::new(bytes),
        index,
    })
}

fn find_system_font() -> Option<(OutlineFont, String)> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    let mut families: Vec<usvg::fontdb::Family<'_>> = SYSTEM_FAMILY_NAMES
        .iter()
        .map(|&name| usvg::fontdb::Family::Name(name))
        .collect();
    families.push(usvg::fontdb::Family::SansSerif);

    let query = usvg::fontdb::Query {
        families: &families,
        weight: usvg::fontdb::Weight::NORMAL,
        stretch: usvg::fontdb::Stretch::Normal,
        style: usvg::fontdb::Style::Normal,
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))?;

    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "unknown".to_string());

    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

    Some((
        OutlineFont {
            bytes: Arc::new(bytes),
            index,
        },
        family,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
