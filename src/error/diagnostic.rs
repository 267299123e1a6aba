use std::fmt;

/// Number of characters shown before a diagnostic position by default.
pub const DEFAULT_PREVIEW: usize = 10;
/// Number of characters shown after a diagnostic position by default.
pub const DEFAULT_POSTVIEW: usize = 5;

/// How much source text surrounds a rendered diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    /// Characters shown before the position.
    pub preview:  usize,
    /// Characters shown after the highlighted character.
    pub postview: usize,
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self { preview:  DEFAULT_PREVIEW,
               postview: DEFAULT_POSTVIEW, }
    }
}

/// A positioned, non-fatal parse error.
///
/// Diagnostics are collected in source order during a single parse pass and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable description.
    pub message:  String,
    /// Character offset of the token the diagnostic refers to.
    pub position: usize,
    /// Highlight the character at `position` itself rather than the gap
    /// before it.
    pub target:   bool,
}

impl Diagnostic {
    /// Creates a diagnostic that points at the gap before `position`.
    #[must_use]
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self { message: message.into(),
               position,
               target: false }
    }

    /// Creates a diagnostic that highlights the character at `position`.
    #[must_use]
    pub fn targeted(message: impl Into<String>, position: usize) -> Self {
        Self { message: message.into(),
               position,
               target: true }
    }

    /// Renders the diagnostic followed by a quoted excerpt of `source`.
    ///
    /// The excerpt holds up to `window.preview` characters before the
    /// position, a bracketed marker, and up to `window.postview` characters
    /// after it. A targeted diagnostic brackets the offending character; an
    /// untargeted one inserts `[x]` in front of it.
    ///
    /// ## Example
    /// ```
    /// use calcfront::error::{ContextWindow, Diagnostic};
    ///
    /// let source = "2.)";
    /// let stray = Diagnostic::targeted("Invalid ')'", 2);
    /// assert_eq!(stray.render(source, ContextWindow::default()),
    ///            "Invalid ')' at position 2        \"2.[)]\"");
    ///
    /// let gap = Diagnostic::new("Expected operator", 4);
    /// assert_eq!(gap.render("(5. 6.)", ContextWindow::default()),
    ///            "Expected operator at position 4        \"(5. [x] 6.)\"");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str, window: ContextWindow) -> String {
        let chars: Vec<char> = source.chars().collect();
        let len = chars.len();
        let pos = self.position;

        let start = pos.saturating_sub(window.preview).min(len);
        let mid = len.min(pos + 1);
        let end = len.min(pos + 1 + window.postview);

        let before: String = chars[start..pos.min(len)].iter().collect();
        let after: String = chars[mid..end].iter().collect();
        let marker = match chars.get(pos) {
            Some(c) if self.target => format!("[{c}]"),
            Some(c) => format!("[x] {c}"),
            None => "[x]".to_string(),
        };

        format!("{self}        \"{before}{marker}{after}\"")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)
    }
}
