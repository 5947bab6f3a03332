//! Display colors for terrain symbols

use crate::io::configuration::UNKNOWN_SYMBOL;

/// Color used for symbols missing from the table
pub const FALLBACK_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Surface color behind the tiles
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];

const DEFAULT_TABLE: [(char, [u8; 4]); 9] = [
    ('G', [0, 100, 0, 255]),      // darkgreen
    ('g', [50, 205, 50, 255]),    // limegreen
    ('A', [65, 105, 225, 255]),   // royalblue
    ('M', [160, 82, 45, 255]),    // sienna
    ('S', [240, 230, 140, 255]),  // khaki
    ('F', [85, 107, 47, 255]),    // darkolivegreen
    ('C', [224, 224, 224, 255]),  // light grey
    ('#', [105, 105, 105, 255]),  // dimgray
    (UNKNOWN_SYMBOL, [0, 0, 0, 255]),
];

/// Fixed symbol → RGBA table used by the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolColors {
    table: Vec<(char, [u8; 4])>,
    fallback: [u8; 4],
}

impl SymbolColors {
    /// Build a table with an explicit fallback color
    pub const fn new(table: Vec<(char, [u8; 4])>, fallback: [u8; 4]) -> Self {
        Self { table, fallback }
    }

    /// Color for `symbol`, or the fallback when the table has no entry
    pub fn lookup(&self, symbol: char) -> [u8; 4] {
        self.table
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(self.fallback, |&(_, color)| color)
    }

    /// Whether the table has an entry for `symbol`
    pub fn contains(&self, symbol: char) -> bool {
        self.table.iter().any(|(s, _)| *s == symbol)
    }

    /// Color used for unrecognized symbols
    pub const fn fallback(&self) -> [u8; 4] {
        self.fallback
    }
}

impl Default for SymbolColors {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_vec(),
            fallback: FALLBACK_COLOR,
        }
    }
}
