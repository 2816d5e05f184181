//! Plain-text rendering of stories for the terminal.

use std::io::{self, Stdout, Write};

use cosmic_core::StoryUnit;
use cosmic_interface::StoryView;
use tracing::warn;

/// Writes stories to any [`Write`] sink.
///
/// Paragraphs are separated by a blank line and choices are numbered from 1.
///
/// ```
/// use cosmic::{StoryUnit, StoryView, TerminalView};
///
/// let mut view = TerminalView::new(Vec::new());
/// view.display_story(&StoryUnit::new("Stars.", vec!["Go".into()]));
///
/// let text = String::from_utf8(view.into_inner()).unwrap();
/// assert!(text.contains("Stars."));
/// assert!(text.contains("  1. Go"));
/// ```
#[derive(Debug)]
pub struct TerminalView<W = Stdout> {
    out: W,
    loading: bool,
}

impl TerminalView<Stdout> {
    /// View writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    /// View writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
        }
    }

    /// Whether the loading indicator is showing.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Consume the view and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_story(&mut self, unit: &StoryUnit) -> io::Result<()> {
        writeln!(self.out)?;
        let mut paragraphs = unit.paragraphs().peekable();
        while let Some(paragraph) = paragraphs.next() {
            writeln!(self.out, "{}", paragraph)?;
            if paragraphs.peek().is_some() {
                writeln!(self.out)?;
            }
        }

        if unit.has_choices() {
            writeln!(self.out)?;
            writeln!(self.out, "What will you do?")?;
            for (number, choice) in unit.choices().iter().enumerate() {
                writeln!(self.out, "  {}. {}", number + 1, choice)?;
            }
        }

        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> StoryView for TerminalView<W> {
    fn show_loading(&mut self, loading: bool) {
        if loading && !self.loading {
            self.write_line("✨ Generating your cosmic tale...");
        }
        self.loading = loading;
    }

    fn display_story(&mut self, unit: &StoryUnit) {
        if let Err(e) = self.render_story(unit) {
            warn!(error = %e, "Failed to write story to terminal");
        }
    }

    fn display_error(&mut self, message: &str) {
        self.write_line(&format!("⚠️  {}", message));
        self.write_line("Please try again.");
    }
}
