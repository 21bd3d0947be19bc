//! Line-oriented transcript of the demonstration scenarios.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered sections, each a titled list of labelled values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
    /// Render `label:value` instead of `label: value`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub compact: bool,
}

/// Output format of a rendered transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranscriptFormat {
    /// One `label: value` line per entry under a `title:` header.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub label: String,
    pub value: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new section and returns it for appending lines.
    pub fn section(&mut self, title: impl Into<String>) -> &mut Section {
        self.sections.push(Section {
            title: title.into(),
            lines: Vec::new(),
            compact: false,
        });
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| section.lines.len()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the transcript; text output ends with a newline, JSON does not.
    pub fn render(&self, format: TranscriptFormat) -> serde_json::Result<String> {
        match format {
            TranscriptFormat::Text => Ok(self.to_string()),
            TranscriptFormat::Json => self.to_json(),
        }
    }
}

impl Section {
    pub fn line(&mut self, label: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.lines.push(Line {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }

    pub fn compact(&mut self) -> &mut Self {
        self.compact = true;
        self
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}:", section.title)?;
            let separator = if section.compact { ":" } else { ": " };
            for line in &section.lines {
                writeln!(f, "{}{separator}{}", line.label, line.value)?;
            }
        }
        Ok(())
    }
}
