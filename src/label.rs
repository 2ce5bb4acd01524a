/// Prefix carried by every screenshot filename in the manifest.
pub const FILENAME_PREFIX: &str = "space-";

/// The only output extension the generator produces.
pub const IMAGE_EXTENSION: &str = ".png";

/// Derive the human-readable label drawn onto a placeholder.
///
/// `space-my-cool-app.png` becomes `My Cool App`. Any input is accepted: a
/// missing prefix or extension simply leaves the text as-is before the
/// hyphen replacement and title-casing.
pub fn derive_label(filename: &str) -> String {
    let stem = filename.strip_prefix(FILENAME_PREFIX).unwrap_or(filename);
    let stem = stem.strip_suffix(IMAGE_EXTENSION).unwrap_or(stem);
    title_case(&stem.replace('-', " "))
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Whether a manifest filename should get a placeholder.
pub fn is_target_image(filename: &str) -> bool {
    filename.ends_with(IMAGE_EXTENSION)
}

#[cfg(test)]
#[path = "../tests/unit/label.rs"]
mod tests;
