//! Built-in glyph outlines and symbol lookup.
//!
//! Every built-in glyph is drawn as one continuous path of 13 points: a
//! starting anchor followed by four cubic segments. Sharing a point count and
//! a rough topology is what lets any glyph morph into any other.
//!
//! The outlines are drawn for this crate on a 362-unit grid. They are not the
//! coordinate literals of the Android TimelyTextView widget; hosts that need
//! those exact shapes can supply them through [`GlyphTable::from_entries`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::data::{ControlPointSet, Point};
use crate::error::{MorphError, Result};

/// Number of points in every built-in glyph.
pub const POINTS_PER_GLYPH: usize = 13;

/// Outlines are authored on a 362 x 362 grid and normalized on load.
const GRID: f64 = 362.0;

type Outline = [(u16, u16); POINTS_PER_GLYPH];

#[rustfmt::skip]
const ZERO: Outline = [
    (89, 200),
    (89, 115), (126, 38), (188, 38),
    (250, 38), (287, 115), (287, 200),
    (287, 285), (250, 362), (188, 362),
    (126, 362), (89, 285), (89, 200),
];

#[rustfmt::skip]
const ONE: Outline = [
    (154, 41),
    (154, 41), (209, 41), (209, 41),
    (209, 41), (209, 362), (209, 362),
    (209, 362), (209, 362), (209, 362),
    (209, 362), (209, 362), (209, 362),
];

#[rustfmt::skip]
const TWO: Outline = [
    (110, 115),
    (110, 64), (147, 38), (196, 38),
    (246, 38), (282, 72), (282, 120),
    (282, 181), (181, 253), (91, 362),
    (91, 362), (296, 362), (296, 362),
];

#[rustfmt::skip]
const THREE: Outline = [
    (121, 92),
    (136, 53), (166, 38), (201, 38),
    (290, 38), (290, 191), (189, 191),
    (300, 191), (300, 362), (194, 362),
    (152, 362), (125, 342), (109, 308),
];

#[rustfmt::skip]
const FOUR: Outline = [
    (310, 269),
    (310, 269), (77, 269), (77, 269),
    (77, 269), (234, 38), (234, 38),
    (234, 38), (234, 200), (234, 200),
    (234, 200), (234, 362), (234, 362),
];

#[rustfmt::skip]
const FIVE: Outline = [
    (281, 38),
    (281, 38), (125, 38), (125, 38),
    (125, 38), (110, 186), (110, 186),
    (143, 159), (290, 138), (290, 256),
    (290, 362), (162, 362), (103, 316),
];

#[rustfmt::skip]
const SIX: Outline = [
    (257, 50),
    (164, 26), (90, 124), (90, 236),
    (90, 310), (131, 362), (189, 362),
    (252, 362), (287, 317), (287, 265),
    (287, 163), (90, 145), (90, 236),
];

#[rustfmt::skip]
const SEVEN: Outline = [
    (90, 38),
    (90, 38), (291, 38), (291, 38),
    (291, 38), (244, 146), (244, 146),
    (244, 146), (198, 254), (198, 254),
    (198, 254), (151, 362), (151, 362),
];

#[rustfmt::skip]
const EIGHT: Outline = [
    (188, 192),
    (102, 182), (102, 38), (188, 38),
    (274, 38), (274, 182), (188, 192),
    (92, 202), (92, 362), (188, 362),
    (284, 362), (284, 202), (188, 192),
];

#[rustfmt::skip]
const NINE: Outline = [
    (275, 138),
    (275, 202), (232, 233), (182, 233),
    (127, 233), (87, 194), (87, 136),
    (87, 78), (131, 38), (185, 38),
    (296, 38), (275, 314), (134, 362),
];

// Collapsed to a single spot so a digit can grow out of nothing.
const BLANK: Outline = [(188, 200); POINTS_PER_GLYPH];

#[rustfmt::skip]
const MINUS: Outline = [
    (110, 200),
    (110, 200), (150, 200), (150, 200),
    (150, 200), (190, 200), (190, 200),
    (190, 200), (230, 200), (230, 200),
    (230, 200), (270, 200), (270, 200),
];

const DIGITS: [&Outline; 10] = [
    &ZERO, &ONE, &TWO, &THREE, &FOUR, &FIVE, &SIX, &SEVEN, &EIGHT, &NINE,
];

/// A symbol that can be drawn and morphed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Empty glyph, all points collapsed together
    Blank,
    /// Decimal digit. Only `0..=9` have outlines.
    Digit(u8),
    /// Minus sign
    Minus,
}

impl Symbol {
    /// Create a digit symbol, rejecting values above 9.
    pub fn digit(value: u8) -> Result<Self> {
        if value <= 9 {
            Ok(Symbol::Digit(value))
        } else {
            Err(MorphError::UnsupportedSymbol(value.to_string()))
        }
    }

    /// Map a character to a symbol.
    ///
    /// Accepts `'0'..='9'`, `' '` for [`Symbol::Blank`] and `'-'` for
    /// [`Symbol::Minus`].
    ///
    /// ```rust
    /// use glyph_morph::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('7').unwrap(), Symbol::Digit(7));
    /// assert_eq!(Symbol::from_char('-').unwrap(), Symbol::Minus);
    /// assert!(Symbol::from_char('x').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0'..='9' => Ok(Symbol::Digit(c as u8 - b'0')),
            ' ' => Ok(Symbol::Blank),
            '-' => Ok(Symbol::Minus),
            other => Err(MorphError::UnsupportedSymbol(other.to_string())),
        }
    }

    /// Map an integer id to a symbol.
    ///
    /// `-1` is the blank glyph and `0..=9` are digits.
    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            -1 => Ok(Symbol::Blank),
            0..=9 => Ok(Symbol::Digit(id as u8)),
            other => Err(MorphError::UnsupportedSymbol(other.to_string())),
        }
    }

    /// The character this symbol is parsed from.
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Blank => Some(' '),
            Symbol::Digit(d) if d <= 9 => Some((b'0' + d) as char),
            Symbol::Digit(_) => None,
            Symbol::Minus => Some('-'),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Blank => write!(f, "blank"),
            Symbol::Digit(d) => write!(f, "{}", d),
            Symbol::Minus => write!(f, "-"),
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = MorphError;

    fn try_from(c: char) -> Result<Self> {
        Symbol::from_char(c)
    }
}

impl TryFrom<i32> for Symbol {
    type Error = MorphError;

    fn try_from(id: i32) -> Result<Self> {
        Symbol::from_id(id)
    }
}

fn normalize(outline: &Outline) -> ControlPointSet {
    ControlPointSet::new(
        outline
            .iter()
            .map(|&(x, y)| Point::new(x as f64 / GRID, y as f64 / GRID))
            .collect(),
    )
}

/// Immutable mapping from symbol to control points.
#[derive(Clone, Debug)]
pub struct GlyphTable {
    glyphs: HashMap<Symbol, ControlPointSet>,
}

static BUILTIN: OnceLock<Arc<GlyphTable>> = OnceLock::new();

impl GlyphTable {
    /// The shared built-in table: digits, blank and minus.
    ///
    /// Built on first access and never modified afterwards.
    pub fn builtin() -> &'static GlyphTable {
        Self::builtin_arc()
    }

    /// The built-in table as a shared handle, for views that own their table.
    pub fn shared() -> Arc<GlyphTable> {
        Arc::clone(Self::builtin_arc())
    }

    fn builtin_arc() -> &'static Arc<GlyphTable> {
        BUILTIN.get_or_init(|| {
            let mut glyphs = HashMap::with_capacity(DIGITS.len() + 2);
            for (value, outline) in DIGITS.iter().enumerate() {
                glyphs.insert(Symbol::Digit(value as u8), normalize(outline));
            }
            glyphs.insert(Symbol::Blank, normalize(&BLANK));
            glyphs.insert(Symbol::Minus, normalize(&MINUS));
            tracing::debug!(
                target: "glyph_morph::glyph",
                count = glyphs.len(),
                "built-in glyph table initialized"
            );
            Arc::new(GlyphTable { glyphs })
        })
    }

    /// Build a custom table.
    ///
    /// Fails with [`MorphError::InvalidPointCount`] if any entry is not a
    /// well-formed `1 + 3k` point set.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, ControlPointSet)>,
    {
        let mut glyphs = HashMap::new();
        for (symbol, points) in entries {
            if !points.is_well_formed() {
                return Err(MorphError::InvalidPointCount { len: points.len() });
            }
            glyphs.insert(symbol, points);
        }
        Ok(Self { glyphs })
    }

    /// Look up the control points for a symbol.
    ///
    /// ```rust
    /// use glyph_morph::{GlyphTable, Symbol};
    ///
    /// let zero = GlyphTable::builtin().lookup(Symbol::Digit(0)).unwrap();
    /// assert_eq!(zero.len(), 13);
    /// assert!(GlyphTable::builtin().lookup(Symbol::Digit(12)).is_err());
    /// ```
    pub fn lookup(&self, symbol: Symbol) -> Result<ControlPointSet> {
        self.get(symbol)
            .cloned()
            .ok_or_else(|| MorphError::UnsupportedSymbol(symbol.to_string()))
    }

    /// Look up a symbol by character.
    pub fn lookup_char(&self, c: char) -> Result<ControlPointSet> {
        self.lookup(Symbol::from_char(c)?)
    }

    /// Look up a symbol by integer id (`-1` for blank, `0..=9` for digits).
    pub fn lookup_id(&self, id: i32) -> Result<ControlPointSet> {
        self.lookup(Symbol::from_id(id)?)
    }

    /// Borrow the control points for a symbol, if present.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&ControlPointSet> {
        self.glyphs.get(&symbol)
    }

    /// Check whether a symbol has an entry.
    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.glyphs.contains_key(&symbol)
    }

    /// All symbols in the table, sorted.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.glyphs.keys().copied().collect();
        symbols.sort();
        symbols
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
