//! Display attributes shared by nodes and arcs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Color of a node or arc.
///
/// The named palette doubles as the traversal marks; anything else is kept
/// verbatim in [`Color::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    Blue,
    Red,
    Green,
    Named(String),
}

impl Color {
    /// Returns the color name as written in exported output
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "black" => Self::Black,
            "blue" => Self::Blue,
            "red" => Self::Red,
            "green" => Self::Green,
            _ => Self::Named(s.to_string()),
        })
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(color) => color,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

/// Rendering hint for a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Ellipse,
    Box,
    Named(String),
}

impl Shape {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Box => "box",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Shape {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "ellipse" => Self::Ellipse,
            "box" => Self::Box,
            _ => Self::Named(s.to_string()),
        }
    }
}
