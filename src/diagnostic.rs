use std::io;

use crate::syntax::span::Span;

/// A reader error pointing into the source text.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    fn report<'a>(
        &self,
        filename: &'a str,
        color: bool,
    ) -> ariadne::Report<'static, (&'a str, std::ops::Range<usize>)> {
        use ariadne::{Color, Config, Label, Report, ReportKind};

        // Eof diagnostics carry an empty span; widen it so the label shows.
        let start = self.span.start as usize;
        let end = (self.span.end as usize).max(start + 1);

        let mut report = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(color))
            .with_message(&self.message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        report.finish()
    }

    /// Write the rendered diagnostic, without color, to `out`.
    pub fn write<W: io::Write>(&self, filename: &str, source: &str, out: W) -> io::Result<()> {
        self.report(filename, false)
            .write((filename, ariadne::Source::from(source)), out)
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str, source: &str) {
        let result = self
            .report(filename, true)
            .eprint((filename, ariadne::Source::from(source)));
        if let Err(err) = result {
            log::warn!("failed to render diagnostic `{}`: {}", self.message, err);
        }
    }
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str, source: &str) {
    for diag in diagnostics {
        diag.render(filename, source);
    }
}
