use thiserror::Error;

/// Default keeps a table row's name and time tokens joined; the schedule
/// regexes stop matching if rows get split apart.
pub const DEFAULT_LINE_MARGIN: f32 = 0.1;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to extract text from PDF: {0}")]
    Extract(#[from] pdf_extract::OutputError),
}

/// PDF bytes → plain text. The rest of the pipeline only ever sees the
/// resulting string, so alternative backends slot in behind this trait.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, PdfError>;
}

/// pdf-extract backed implementation. pdf-extract emits each text run on
/// its own line; `line_margin` mirrors pdfminer's LAParams knob by joining
/// adjacent non-blank lines into one row (a blank line ends a row). Zero
/// disables joining.
pub struct PlainTextExtractor {
    pub line_margin: f32,
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self {
            line_margin: DEFAULT_LINE_MARGIN,
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, PdfError> {
        let raw = pdf_extract::extract_text_from_mem(bytes)?;
        Ok(merge_lines(&raw, self.line_margin))
    }
}

fn merge_lines(text: &str, line_margin: f32) -> String {
    if line_margin <= 0.0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut row = String::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !row.is_empty() {
                out.push_str(&row);
                out.push('\n');
                row.clear();
            }
            out.push('\n');
        } else {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(trimmed);
        }
    }
    if !row.is_empty() {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

// ── Tests ──
