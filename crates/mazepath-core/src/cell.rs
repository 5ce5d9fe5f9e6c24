//! The [`Marker`] and [`Cell`] types.

use std::borrow::Cow;
use std::fmt;

/// The classified content of one grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// Blank cell (`""` or whitespace only).
    #[default]
    Empty,
    /// `"W"`.
    Wall,
    /// `"S"`.
    Start,
    /// `"E"`.
    End,
    /// A positive integer weight. Always `>= 1`.
    Weight(u32),
    /// Any other text, kept verbatim for display.
    Unknown(String),
}

impl Marker {
    /// Classify a raw marker.
    ///
    /// Classification is case-sensitive. A run of ASCII digits is a weight
    /// unless its value is zero; values beyond `u32::MAX` saturate.
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Marker::Empty;
        }
        match text {
            "W" => Marker::Wall,
            "S" => Marker::Start,
            "E" => Marker::End,
            _ if text.bytes().all(|b| b.is_ascii_digit()) => match text.parse::<u32>() {
                Ok(0) => Marker::Unknown(text.to_string()),
                Ok(n) => Marker::Weight(n),
                Err(_) => Marker::Weight(u32::MAX),
            },
            _ => Marker::Unknown(text.to_string()),
        }
    }

    /// The canonical text of this marker. Blank cells yield `""`.
    ///
    /// Classification keeps only what the marker means: `"007"` labels as
    /// `"7"` and `"  "` as `""`. Unrecognised text comes back verbatim.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Marker::Empty => Cow::Borrowed(""),
            Marker::Wall => Cow::Borrowed("W"),
            Marker::Start => Cow::Borrowed("S"),
            Marker::End => Cow::Borrowed("E"),
            Marker::Weight(n) => Cow::Owned(n.to_string()),
            Marker::Unknown(text) => Cow::Borrowed(text),
        }
    }

    /// Whether this is a start or end marker.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        matches!(self, Marker::Start | Marker::End)
    }

    /// The explicit weight, if any.
    #[inline]
    pub fn weight(&self) -> Option<u32> {
        match self {
            Marker::Weight(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Marker {
    fn from(text: &str) -> Self {
        Marker::parse(text)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A grid cell: its marker plus the on-path flag set by annotation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub marker: Marker,
    pub on_path: bool,
}

impl Cell {
    /// A cell that is not on the path.
    #[inline]
    pub const fn new(marker: Marker) -> Self {
        Self {
            marker,
            on_path: false,
        }
    }

    /// Set the on-path flag (builder).
    #[inline]
    pub fn with_on_path(mut self, on_path: bool) -> Self {
        self.on_path = on_path;
        self
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::new(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_markers() {
        assert_eq!(Marker::parse(""), Marker::Empty);
        assert_eq!(Marker::parse("   "), Marker::Empty);
        assert_eq!(Marker::parse("W"), Marker::Wall);
        assert_eq!(Marker::parse("S"), Marker::Start);
        assert_eq!(Marker::parse("E"), Marker::End);
        assert_eq!(Marker::parse("7"), Marker::Weight(7));
        assert_eq!(Marker::parse("1"), Marker::Weight(1));
    }

    #[test]
    fn labels_are_canonical() {
        assert_eq!(Marker::parse("007").label(), "7");
        assert_eq!(Marker::parse("  ").label(), "");
        assert_eq!(Marker::parse("0").label(), "0");
        assert_eq!(Marker::parse(" 4").label(), " 4");
        assert_eq!(Marker::parse("99999999999").label(), u32::MAX.to_string());
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Marker::parse("s"), Marker::Unknown("s".into()));
        assert_eq!(Marker::parse("w"), Marker::Unknown("w".into()));
    }

    #[test]
    fn parse_odd_numbers() {
        assert_eq!(Marker::parse("0"), Marker::Unknown("0".into()));
        assert_eq!(Marker::parse("-3"), Marker::Unknown("-3".into()));
        assert_eq!(Marker::parse("+3"), Marker::Unknown("+3".into()));
        assert_eq!(Marker::parse("2.5"), Marker::Unknown("2.5".into()));
        assert_eq!(Marker::parse(" 4"), Marker::Unknown(" 4".into()));
        assert_eq!(Marker::parse("007"), Marker::Weight(7));
        assert_eq!(Marker::parse("99999999999"), Marker::Weight(u32::MAX));
    }

    #[test]
    fn labels() {
        assert_eq!(Marker::Empty.label(), "");
        assert_eq!(Marker::Wall.label(), "W");
        assert_eq!(Marker::Weight(12).label(), "12");
        assert_eq!(Marker::Unknown("door".into()).label(), "door");
        assert_eq!(Marker::Start.to_string(), "S");
    }

    #[test]
    fn cell_builder() {
        let c = Cell::new(Marker::Weight(3)).with_on_path(true);
        assert!(c.on_path);
        assert_eq!(c.marker.weight(), Some(3));
        assert!(!Cell::default().on_path);
    }
}
