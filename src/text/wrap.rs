use crate::{foundation::error::PlaceholderResult, text::shape::TextMeasure};

/// One wrapped line: consecutive words of the input joined by single spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub words: Vec<String>,
}

impl TextLine {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Greedy first-fit word wrap against a pixel width budget.
///
/// Words are split on whitespace and packed left to right. A word that does
/// not fit on its own still becomes a line of its own; its width is allowed
/// to exceed `max_width`.
pub fn wrap_greedy(
    text: &str,
    max_width: f32,
    measure: &mut dyn TextMeasure,
) -> PlaceholderResult<Vec<TextLine>> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let mut trial = current.clone();
        trial.push(word);
        let width = measure.measure_width(&trial.join(" "))?;

        if width <= max_width {
            current = trial;
        } else if current.is_empty() {
            lines.push(to_line(&[word]));
        } else {
            lines.push(to_line(&current));
            current = vec![word];
        }
    }

    if !current.is_empty() {
        lines.push(to_line(&current));
    }
    Ok(lines)
}

fn to_line(words: &[&str]) -> TextLine {
    TextLine {
        words: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
