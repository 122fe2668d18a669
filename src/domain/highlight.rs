//! Square highlights drawn as overlays under the pieces.

use std::fmt;

use shakmaty::Square;

use crate::domain::square::{SquareName, SquareParseError, parse_square};

/// A marker on a single square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub square: Square,
}

impl Highlight {
    pub fn new(square: Square) -> Self {
        Self { square }
    }

    /// Build a highlight from a square name such as `E4`
    pub fn parse(name: &str) -> Result<Self, SquareParseError> {
        parse_square(name).map(Self::new)
    }
}

impl From<Square> for Highlight {
    fn from(square: Square) -> Self {
        Self::new(square)
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&SquareName(self.square), f)
    }
}

/// Highlights in insertion order. Duplicates are kept.
#[derive(Clone, Debug, Default)]
pub struct HighlightSet {
    items: Vec<Highlight>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, highlight: Highlight) {
        self.items.push(highlight);
    }

    /// Remove the first matching highlight. Returns false if none matched.
    pub fn remove(&mut self, highlight: Highlight) -> bool {
        match self.items.iter().position(|h| *h == highlight) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, highlight: Highlight) -> bool {
        self.items.contains(&highlight)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut set = HighlightSet::new();
        set.add(Highlight::new(Square::E2));
        set.add(Highlight::new(Square::E4));
        set.add(Highlight::new(Square::E2));

        let squares: Vec<Square> = set.iter().map(|h| h.square).collect();
        assert_eq!(squares, vec![Square::E2, Square::E4, Square::E2]);
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let mut set = HighlightSet::new();
        set.add(Highlight::new(Square::E2));
        set.add(Highlight::new(Square::E4));
        set.add(Highlight::new(Square::E2));

        assert!(set.remove(Highlight::new(Square::E2)));
        let squares: Vec<Square> = set.iter().map(|h| h.square).collect();
        assert_eq!(squares, vec![Square::E4, Square::E2]);

        assert!(!set.remove(Highlight::new(Square::A1)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut set = HighlightSet::new();
        set.add(Square::A1.into());
        set.add(Square::H8.into());
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(Square::A1.into()));
    }

    #[test]
    fn test_parse_and_display() {
        let h = Highlight::parse("d5").unwrap();
        assert_eq!(h.square, Square::D5);
        assert_eq!(h.to_string(), "D5");
        assert!(Highlight::parse("Z9").is_err());
    }
}
