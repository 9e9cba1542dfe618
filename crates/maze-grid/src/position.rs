//! Position Type
//!
//! Grid coordinates with the `"x,y"` boundary encoding used when talking
//! to external hosts.
//!
//! # Example
//!
//! ```
//! use maze_grid::Position;
//!
//! let p: Position = " (3, 4) ".parse().unwrap();
//! assert_eq!(p, Position::new(3, 4));
//! assert_eq!(p.to_string(), "3,4");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::direction::Direction;

/// A cell coordinate on the grid.
///
/// Equality is structural. Serializes as the boundary string `"x,y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The fail-closed default substituted for unparseable boundary input.
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns the position offset by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the position one step in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Euclidean distance to another position.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Parses boundary input, substituting the origin on any failure.
    ///
    /// Host-supplied position strings must never stop the simulation; a
    /// malformed pair degrades to `(0, 0)`.
    pub fn parse_or_origin(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Self::origin())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Error type for parsing a Position from a boundary string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePositionError {
    /// Fewer than two comma-separated components.
    MissingComponent(String),
    /// A component was not numeric.
    InvalidCoordinate(String),
}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePositionError::MissingComponent(s) => {
                write!(f, "invalid position: '{}', expected 'x,y'", s)
            }
            ParsePositionError::InvalidCoordinate(s) => {
                write!(f, "invalid coordinate: '{}'", s)
            }
        }
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"x,y"`.
    ///
    /// Tolerates surrounding whitespace, optional parentheses, interior
    /// spaces, extra trailing components (`"x,y,z"`) and fractional
    /// coordinates (truncated toward zero).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
            .collect();

        let mut parts = cleaned.split(',');
        let x = parse_coordinate(parts.next(), s)?;
        let y = parse_coordinate(parts.next(), s)?;
        Ok(Position::new(x, y))
    }
}

fn parse_coordinate(part: Option<&str>, original: &str) -> Result<i32, ParsePositionError> {
    let part = match part {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ParsePositionError::MissingComponent(original.to_string())),
    };
    let value: f64 = part
        .parse()
        .map_err(|_| ParsePositionError::InvalidCoordinate(part.to_string()))?;
    Ok(value as i32)
}

// Serialize as the boundary string rather than an object
impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4).to_string(), "3,4");
        assert_eq!(Position::new(-1, 0).to_string(), "-1,0");
    }

    #[test]
    fn test_parse_plain() {
        let p: Position = "3,4".parse().unwrap();
        assert_eq!(p, Position::new(3, 4));
    }

    #[test]
    fn test_parse_with_spaces() {
        let p: Position = "  3 , 4  ".parse().unwrap();
        assert_eq!(p, Position::new(3, 4));
    }

    #[test]
    fn test_parse_with_parentheses() {
        let p: Position = "(3,4)".parse().unwrap();
        assert_eq!(p, Position::new(3, 4));
    }

    #[test]
    fn test_parse_extra_components() {
        // A trailing z component is ignored
        let p: Position = "3,4,7".parse().unwrap();
        assert_eq!(p, Position::new(3, 4));
    }

    #[test]
    fn test_parse_fractional() {
        let p: Position = "3.9,4.2".parse().unwrap();
        assert_eq!(p, Position::new(3, 4));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Position>().is_err());
        assert!("3".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("3,".parse::<Position>().is_err());
    }

    #[test]
    fn test_parse_or_origin_fails_closed() {
        assert_eq!(Position::parse_or_origin("12,7"), Position::new(12, 7));
        assert_eq!(Position::parse_or_origin("garbage"), Position::origin());
        assert_eq!(Position::parse_or_origin(""), Position::origin());
    }

    #[test]
    fn test_roundtrip() {
        let original = Position::new(12, 7);
        let parsed: Position = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_step() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::Up), Position::new(2, 1));
        assert_eq!(p.step(Direction::Down), Position::new(2, 3));
        assert_eq!(p.step(Direction::Left), Position::new(1, 2));
        assert_eq!(p.step(Direction::Right), Position::new(3, 2));
        assert_eq!(p.step(Direction::Stay), p);
    }

    #[test]
    fn test_distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.euclidean_distance(b), 5.0);
        assert_eq!(a.manhattan_distance(b), 7);
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Position::new(3, 4)).unwrap();
        assert_eq!(json, r#""3,4""#);
    }

    #[test]
    fn test_deserialize_from_string() {
        let p: Position = serde_json::from_str(r#""3,4""#).unwrap();
        assert_eq!(p, Position::new(3, 4));
    }
}
