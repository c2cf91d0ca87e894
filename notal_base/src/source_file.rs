//! Contains the code related to the source code input and the positions within it.

use std::{
    fmt::{Debug, Display},
    fs::File,
    ops::Range,
    path::PathBuf,
};

use derive_new::new;
use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use serde::Serialize;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents a source text fed to the tokenizer, either loaded from a file or given in memory.
#[derive(Getters)]
pub struct SourceFile {
    source: Source,

    /// Gets the path the source was loaded from (or the name given to an in-memory source).
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish()
    }
}

enum Source {
    Mapped(MappedSource),
    Owned(String),
}

impl Source {
    fn content(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.content(),
            Self::Owned(string) => string,
        }
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // zero-length files can't be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped.as_ref().map_or(Ok(""), |mapped| {
                    std::str::from_utf8(mapped).map_err(Error::from)
                })
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    fn new(full_path: PathBuf, source: Source) -> Self {
        let lines = line_ranges(source.content());
        Self {
            source,
            full_path,
            lines,
        }
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Gets the line of the source file at the given line number, including its terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.source.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Loads the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Self, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, Source::Mapped(source)))
    }

    /// Creates a source file that lives only in memory, such as a source given on the command line.
    #[must_use]
    pub fn from_string(name: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(name.into(), Source::Owned(content.into()))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Self, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("notal")
            .suffix(".notal")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }
}

/// Is a struct pointing to a particular location in a source text.
///
/// Positions are ordered lexicographically: by line first, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, new)]
pub struct Position {
    /// The line number of the position (starts at 1).
    pub line: usize,

    /// The column number of the position (starts at 0).
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self { Self { line: 1, column: 0 } }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a range of source text delimited by two [`Position`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Span {
    /// The position where the span starts.
    pub start: Position,

    /// The position right after the last character covered by the span.
    pub end: Position,
}

impl Span {
    /// Creates a span from the given start and end positions.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "span starts after it ends");
        Self { start, end }
    }

    /// Creates a span covering the single character at the given position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            start: position,
            end: Position::new(position.line, position.column + 1),
        }
    }

    /// Checks whether the span covers more than one line.
    #[must_use]
    pub fn is_multiline(&self) -> bool { self.start.line != self.end.line }
}

/// Represents an element that is located within a source text.
pub trait SourceElement {
    /// Gets the span location of the element.
    fn span(&self) -> Span;
}

// only `\n` breaks a line, matching the line numbers the tokenizer reports; a `\r` stays part of
// its line
fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, _) in text.match_indices('\n') {
        #[allow(clippy::range_plus_one)]
        results.push(current_position..byte + 1);

        current_position = byte + 1;
    }

    results.push(current_position..text.len());

    results
}
