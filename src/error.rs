//! Error types for loading layout documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read layout document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout document: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DocumentError {
    /// Format the error with source context using ariadne.
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, span) = match self {
            DocumentError::Parse(err) => match err.span() {
                Some(span) => (err.message(), span),
                None => return self.to_string(),
            },
            DocumentError::Io(_) => return self.to_string(),
        };

        // Clamp so an end-of-input span still points into the source
        let start = span.start.min(source.len());
        let span = start..span.end.clamp(start, source.len());

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid layout document")
            .with_label(
                Label::new((filename, span))
                    .with_message(message.trim_end())
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
