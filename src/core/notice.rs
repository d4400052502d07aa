//! Structured user-facing notices.
//!
//! A notice is a list of plain-text lines plus a severity. The UI renders
//! each line as its own element; line content is never interpreted as
//! markup.

/// Severity level of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

/// A transient, dismissible message for the page's single notice slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub lines: Vec<String>,
}

impl Notice {
    pub fn new(severity: Severity, lines: Vec<String>) -> Self {
        Self { severity, lines }
    }

    /// Single-line success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, vec![message.into()])
    }

    /// Single-line danger notice.
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, vec![message.into()])
    }

    /// Multi-line danger notice.
    pub fn danger_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Severity::Danger,
            lines.into_iter().map(Into::into).collect(),
        )
    }

    /// Single-line warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, vec![message.into()])
    }

    /// Single-line info notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, vec![message.into()])
    }

    /// All lines joined with newlines, for logs and assertions.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
