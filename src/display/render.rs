use crossterm::style::{Stylize, style};

/// Produces the short tag shown at the end of a row, if any.
pub trait Decorator<T: ?Sized> {
    fn decorate(&self, item: &T) -> Option<&'static str>;
}

/// Emphasises parts of a cell's text.
pub trait Highlighter {
    fn highlight(&self, text: &str) -> String;
}

/// Builds the ordered display cells of an item.
pub trait Columns<T: ?Sized> {
    fn columns(&self, item: &T) -> Vec<String>;
}

pub struct NoDecoration;

impl<T: ?Sized> Decorator<T> for NoDecoration {
    fn decorate(&self, _item: &T) -> Option<&'static str> {
        None
    }
}

pub struct NoHighlight;

impl Highlighter for NoHighlight {
    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Highlights every ASCII case-insensitive occurrence of `needle`.
pub struct SubstringHighlighter {
    needle: String,
}

impl SubstringHighlighter {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_ascii_lowercase(),
        }
    }

    /// Byte ranges of every non-overlapping match in `text`.
    pub fn matches(&self, text: &str) -> Vec<(usize, usize)> {
        if self.needle.is_empty() {
            return Vec::new();
        }
        // ASCII lowercasing keeps byte offsets identical to `text`.
        text.to_ascii_lowercase()
            .match_indices(&self.needle)
            .map(|(start, m)| (start, start + m.len()))
            .collect()
    }
}

impl Highlighter for SubstringHighlighter {
    fn highlight(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (start, end) in self.matches(text) {
            out.push_str(&text[last..start]);
            out.push_str(&style(&text[start..end]).bold().underlined().to_string());
            last = end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Renders items as aligned rows.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Spaces between columns.
    pub gap: usize,
    pub color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { gap: 2, color: true }
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

impl Renderer {
    pub fn render<T>(
        &self,
        items: &[T],
        columns: &dyn Columns<T>,
        decorator: &dyn Decorator<T>,
        highlighter: &dyn Highlighter,
    ) -> Vec<String> {
        let cells: Vec<Vec<String>> = items.iter().map(|item| columns.columns(item)).collect();

        let mut widths: Vec<usize> = Vec::new();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                if i == widths.len() {
                    widths.push(0);
                }
                widths[i] = widths[i].max(width(cell));
            }
        }

        items
            .iter()
            .zip(&cells)
            .map(|(item, row)| {
                let tag = decorator.decorate(item);
                let mut line = String::new();
                for (i, cell) in row.iter().enumerate() {
                    let is_last = i + 1 == row.len();
                    line.push_str(&highlighter.highlight(cell));
                    if !is_last || tag.is_some() {
                        let pad = widths[i] - width(cell) + self.gap;
                        line.push_str(&" ".repeat(pad));
                    }
                }
                if let Some(tag) = tag {
                    line.push_str(&self.tag(tag));
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Aligned `label: value` lines for a single entity.
    pub fn render_details(&self, pairs: &[(&str, String)]) -> Vec<String> {
        let label_width = pairs.iter().map(|(label, _)| width(label)).max().unwrap_or(0);
        pairs
            .iter()
            .map(|(label, value)| {
                let pad = label_width - width(label) + self.gap;
                let label = if self.color {
                    style(format!("{label}:")).bold().to_string()
                } else {
                    format!("{label}:")
                };
                format!("{label}{}{value}", " ".repeat(pad))
            })
            .collect()
    }

    fn tag(&self, tag: &str) -> String {
        if self.color {
            style(tag).bold().yellow().to_string()
        } else {
            tag.to_string()
        }
    }
}
