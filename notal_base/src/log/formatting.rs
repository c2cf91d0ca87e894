//! Contains the ANSI escape sequences used to paint messages printed to the console.

use std::fmt::Display;

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object together with the color
/// and styles to print it with.
///
/// ```
/// use notal_base::log::formatting::{Color, Painted};
///
/// let header = Painted::new("[error]:").color(Color::Red).bold();
/// assert_eq!(header.to_string(), "\x1B[1m\x1B[31m[error]:\x1B[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    /// The displayable object.
    pub display: T,

    /// The color applied to the object, if any.
    pub color: Option<Color>,

    /// Whether the object is printed in bold.
    pub bold: bool,

    /// Whether the object is underlined.
    pub underline: bool,
}

impl<T> Painted<T> {
    /// Wraps the given displayable object without any color or style.
    pub fn new(display: T) -> Self {
        Self {
            display,
            color: None,
            bold: false,
            underline: false,
        }
    }

    /// Applies the given color.
    #[must_use]
    pub fn color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Prints the object in bold.
    #[must_use]
    pub fn bold(self) -> Self { Self { bold: true, ..self } }

    /// Underlines the object.
    #[must_use]
    pub fn underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bold {
            f.write_str("\x1B[1m")?;
        }
        if self.underline {
            f.write_str("\x1B[4m")?;
        }
        if let Some(color) = self.color {
            f.write_str(color.code())?;
        }

        write!(f, "{}\x1B[0m", self.display)
    }
}
