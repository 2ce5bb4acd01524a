use std::path::Path;

use crate::foundation::error::PlaceholderResult;

pub(crate) mod cpu;
pub(crate) mod layout;
pub(crate) mod settings;

/// Something that can turn a label into a placeholder file on disk.
///
/// The batch driver only talks to this trait.
pub trait PlaceholderBackend {
    fn render_placeholder(&mut self, label: &str, path: &Path) -> PlaceholderResult<()>;
}
