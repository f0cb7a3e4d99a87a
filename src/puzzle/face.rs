use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six sides of the cube. The declaration order is the canonical
/// serialization order.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub fn name(&self) -> &'static str {
        match self {
            Face::U => "U",
            Face::R => "R",
            Face::F => "F",
            Face::D => "D",
            Face::L => "L",
            Face::B => "B",
        }
    }

    /// The color on this face when the cube is solved.
    pub fn home_color(&self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Face {
    type Err = ParseTurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "R" => Ok(Face::R),
            "F" => Ok(Face::F),
            "D" => Ok(Face::D),
            "L" => Ok(Face::L),
            "B" => Ok(Face::B),
            _ => Err(ParseTurnError::UnknownFace(s.to_string())),
        }
    }
}

/// A sticker color, named after the face it starts on.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    pub fn letter(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Blue => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A quarter turn of one face, viewed facing that face from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub face: Face,
    pub clockwise: bool,
}

impl Turn {
    pub fn new(face: Face, clockwise: bool) -> Self {
        Turn { face, clockwise }
    }

    pub fn inverse(&self) -> Self {
        Turn {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.face, if self.clockwise { "" } else { "'" })
    }
}

impl FromStr for Turn {
    type Err = ParseTurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix('\'') {
            Some(face) => Ok(Turn::new(face.parse()?, false)),
            None => Ok(Turn::new(s.parse()?, true)),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTurnError {
    #[error("unknown face {0:?}")]
    UnknownFace(String),
}

/// Position `i` of a clockwise-turned face takes the value at `CW_CYCLE[i]`.
pub const CW_CYCLE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// Inverse of [`CW_CYCLE`].
pub const CCW_CYCLE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// The four 3-facelet strips bordering `face`, listed in the cyclic order
/// a clockwise turn advances values through. Strip indices are positions
/// on the *adjacent* face; values are copied across strips index for
/// index, with no internal reversal.
#[rustfmt::skip]
pub fn adjacent_strips(face: Face) -> [(Face, [usize; 3]); 4] {
    use Face::*;
    match face {
        F => [(U, [6, 7, 8]), (R, [0, 3, 6]), (D, [2, 1, 0]), (L, [8, 5, 2])],
        B => [(U, [2, 1, 0]), (L, [0, 3, 6]), (D, [6, 7, 8]), (R, [8, 5, 2])],
        U => [(B, [2, 1, 0]), (R, [2, 1, 0]), (F, [2, 1, 0]), (L, [2, 1, 0])],
        D => [(F, [6, 7, 8]), (R, [6, 7, 8]), (B, [6, 7, 8]), (L, [6, 7, 8])],
        L => [(U, [0, 3, 6]), (F, [0, 3, 6]), (D, [0, 3, 6]), (B, [8, 5, 2])],
        R => [(U, [8, 5, 2]), (B, [0, 3, 6]), (D, [8, 5, 2]), (F, [8, 5, 2])],
    }
}
