//! Ordered swatch and opacity sequences.
//!
//! Both types are guaranteed non-empty by construction; callers get `None`
//! from the constructors instead of a sequence the toolbar cannot index.

use super::color::{AlphaToken, BLACK, BLUE, Color, GREEN, PURPLE, RED, YELLOW};

/// Ordered set of selectable stroke colors.
///
/// Insertion order is display order. Duplicate colors are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Builds a palette, returning `None` for an empty color list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// First swatch; always present.
    pub fn first(&self) -> Color {
        self.colors[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                BLACK,
                RED,
                YELLOW,
                GREEN,
                Color::rgb(80, 213, 245),
                BLUE,
                PURPLE,
            ],
        }
    }
}

/// Ordered opacity levels, lowest to highest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaLevels {
    levels: Vec<AlphaToken>,
}

impl AlphaLevels {
    /// Builds the level list, returning `None` when it is empty.
    pub fn new(levels: Vec<AlphaToken>) -> Option<Self> {
        if levels.is_empty() {
            None
        } else {
            Some(Self { levels })
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<AlphaToken> {
        self.levels.get(index).copied()
    }

    pub fn position(&self, token: AlphaToken) -> Option<usize> {
        self.levels.iter().position(|level| *level == token)
    }

    /// Index of the most opaque level (the last one).
    pub fn last_index(&self) -> usize {
        self.levels.len() - 1
    }
}

impl Default for AlphaLevels {
    fn default() -> Self {
        Self {
            levels: [0x33, 0x77, 0xAA, 0xFF]
                .into_iter()
                .map(AlphaToken::new)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequences_are_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
        assert!(AlphaLevels::new(Vec::new()).is_none());
    }

    #[test]
    fn palette_keeps_duplicates_in_order() {
        let palette = Palette::new(vec![RED, BLACK, RED]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(0), Some(RED));
        assert_eq!(palette.get(2), Some(RED));
        assert_eq!(palette.get(3), None);
    }

    #[test]
    fn default_levels_end_fully_opaque() {
        let levels = AlphaLevels::default();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels.get(levels.last_index()), Some(AlphaToken::OPAQUE));
        assert_eq!(levels.position(AlphaToken::new(0x77)), Some(1));
    }
}
