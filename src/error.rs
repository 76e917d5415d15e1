//! Error types for reading symbol descriptions

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("invalid symbol JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read symbols: {0}")]
    IoError(#[from] std::io::Error),
}

impl SymbolError {
    /// Byte span of the offending input, when the error points at one
    pub fn span(&self, source: &str) -> Option<Span> {
        match self {
            SymbolError::Json(err) if err.line() > 0 => {
                let start = line_column_offset(source, err.line(), err.column());
                Some(start..(start + 1).min(source.len()).max(start))
            }
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span(source) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid symbol description")
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert a 1-based line/column pair into a byte offset
fn line_column_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error(source: &str) -> SymbolError {
        serde_json::from_str::<serde_json::Value>(source)
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_line_column_offset() {
        let source = "ab\ncd\nef";
        assert_eq!(line_column_offset(source, 1, 1), 0);
        assert_eq!(line_column_offset(source, 2, 2), 4);
        assert_eq!(line_column_offset(source, 3, 1), 6);
    }

    #[test]
    fn test_span_points_into_source() {
        let source = "{\n  \"markerFile\": ,\n}";
        let span = json_error(source).span(source).unwrap();
        assert!(span.start <= source.len());
        assert_eq!(source[..span.start].matches('\n').count(), 1);
    }

    #[test]
    fn test_format_mentions_filename() {
        let source = "{\"markerFile\": }";
        let report = json_error(source).format(source, "symbols.json");
        assert!(report.contains("symbols.json"));
    }
}
