//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Painted};

use crate::source_file::{SourceFile, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = match self.severity {
            Severity::Error => Painted::new("[error]:").color(Color::Red),
            Severity::Info => Painted::new("[info]:").color(Color::Green),
            Severity::Warning => Painted::new("[warning]:").color(Color::Yellow),
        }
        .bold();

        write!(f, "{log_header} {}", Painted::new(&self.display).bold())
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the lines of a source file covered by a span,
/// underlining the covered characters.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The source file the span points into.
    pub source_file: &'a SourceFile,

    /// The span of the source code to be printed.
    pub span: Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        width: usize,
        line_number: Option<usize>,
        separator: &str,
    ) -> std::fmt::Result {
        match line_number {
            Some(line_number) => write!(
                f,
                "{}{:pad$}",
                Painted::new(line_number).color(Color::Cyan).bold(),
                "",
                pad = width - get_digit(line_number) + 1
            )?,
            None => write!(f, "{:pad$}", "", pad = width + 1)?,
        }

        write!(f, "{}", Painted::new(separator).color(Color::Cyan).bold())
    }

    fn write_line(
        f: &mut std::fmt::Formatter<'_>,
        line: &str,
        is_highlighted: impl Fn(usize) -> bool,
    ) -> std::fmt::Result {
        for (index, char) in line.chars().enumerate() {
            match char {
                '\t' => f.write_str("    ")?,
                '\n' | '\r' => {}
                char if is_highlighted(index) => {
                    write!(f, "{}", Painted::new(char).color(Color::Red).bold().underline())?;
                }
                char => write!(f, "{char}")?,
            }
        }

        writeln!(f)
    }

    fn write_context_line(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        width: usize,
        line_number: usize,
    ) -> std::fmt::Result {
        if line_number == 0 {
            return Ok(());
        }

        match self.source_file.get_line(line_number) {
            Some(line) => {
                Self::write_gutter(f, width, Some(line_number), "┃ ")?;
                Self::write_line(f, line, |_| false)
            }
            None => Ok(()),
        }
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span { start, end } = self.span;
        let last_line = end
            .line
            .min(self.source_file.line_number())
            .max(start.line);
        let is_multiline = self.span.is_multiline() && start.line != last_line;

        // when printing the source code, show the line before the span and the line after the span
        let width = get_digit(last_line + 1);

        write!(f, "{:width$}", "")?;
        writeln!(
            f,
            "{} {}:{}",
            Painted::new("-->").color(Color::Cyan).bold(),
            self.source_file.full_path().display(),
            start
        )?;

        Self::write_gutter(f, width, None, "┃")?;
        writeln!(f)?;

        self.write_context_line(f, width, start.line.saturating_sub(1))?;

        for line_number in start.line..=last_line {
            let Some(line) = self.source_file.get_line(line_number) else {
                break;
            };

            Self::write_gutter(f, width, Some(line_number), "┃ ")?;
            Self::write_line(f, line, |index| {
                let after_start = line_number > start.line || index >= start.column;
                let before_end = line_number < end.line || index < end.column;
                after_start && before_end
            })?;
        }

        if let (Some(help), false) = (&self.help_display, is_multiline) {
            Self::write_gutter(f, width, None, "┃ ")?;

            let indent: String = self
                .source_file
                .get_line(start.line)
                .unwrap_or_default()
                .chars()
                .take(start.column)
                .map(|char| match char {
                    '\t' => "    ",
                    '\r' => "",
                    _ => " ",
                })
                .collect();

            writeln!(f, "{indent}{}: {help}", Painted::new("help").bold())?;
        }

        self.write_context_line(f, width, last_line + 1)?;

        Self::write_gutter(f, width, None, "┃")?;
        writeln!(f)?;

        if let (Some(help), true) = (&self.help_display, is_multiline) {
            Self::write_gutter(f, width, None, "= ")?;
            writeln!(f, "{}: {help}", Painted::new("help").bold())?;
        }

        Ok(())
    }
}
