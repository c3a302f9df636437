//! Plain-text layout of an aggregated shopping list.

use std::fmt;

use crate::line::AggregatedLine;

/// Title used by [`render`].
pub const DEFAULT_TITLE: &str = "Shopping list";

/// Rendered shopping list: a title line followed by numbered rows.
///
/// [`fmt::Display`] writes the full document, title first, one line per
/// row, without a trailing newline. An empty list renders as the title line
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListDocument {
    title: String,
    rows: Vec<String>,
}

impl ShoppingListDocument {
    /// Header line of the document.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Numbered rows, in the order they were rendered.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rows joined with `\n`, without the title.
    #[must_use]
    pub fn body(&self) -> String {
        self.rows.join("\n")
    }

    /// Whether the document has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for ShoppingListDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for row in &self.rows {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}

/// Render aggregated lines under [`DEFAULT_TITLE`].
///
/// Rows keep the order of `lines`; sorting is the aggregator's job.
///
/// # Examples
/// ```
/// use shopping_list::{DEFAULT_TITLE, render};
///
/// let document = render(&[]);
/// assert_eq!(document.to_string(), DEFAULT_TITLE);
/// assert!(document.is_empty());
/// ```
#[must_use]
pub fn render(lines: &[AggregatedLine]) -> ShoppingListDocument {
    render_with_title(DEFAULT_TITLE, lines)
}

/// Render aggregated lines under a caller-supplied title.
#[must_use]
pub fn render_with_title(
    title: impl Into<String>,
    lines: &[AggregatedLine],
) -> ShoppingListDocument {
    let rows = lines
        .iter()
        .zip(1_usize..)
        .map(|(line, index)| {
            format!(
                "{index}.  {} - {} {}",
                line.ingredient_name(),
                line.total_amount(),
                line.unit()
            )
        })
        .collect();

    ShoppingListDocument {
        title: title.into(),
        rows,
    }
}
