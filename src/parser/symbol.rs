//! Roman Symbols
//!
//! The fixed seven-letter alphabet and its base values.
//! No validation logic - pure data representation.

/// One of the seven classical Roman symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// All symbols in ascending value order
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Map a character onto the alphabet, folding lowercase letters.
    ///
    /// The fold covers the seven ASCII letters only and never consults
    /// the runtime locale, so `'ı'` or `'Ⅰ'` are rejected.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c.to_ascii_uppercase() {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Base value of the symbol
    pub fn value(self) -> i32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Uppercase letter for the symbol
    pub fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Whether the symbol may open a subtractive pair
    pub fn can_subtract(self) -> bool {
        matches!(self, Symbol::I | Symbol::X | Symbol::C)
    }

    /// True exactly for IV, IX, XL, XC, CD and CM
    pub fn forms_subtractive_pair(self, next: Symbol) -> bool {
        matches!(
            (self, next),
            (Symbol::I, Symbol::V)
                | (Symbol::I, Symbol::X)
                | (Symbol::X, Symbol::L)
                | (Symbol::X, Symbol::C)
                | (Symbol::C, Symbol::D)
                | (Symbol::C, Symbol::M)
        )
    }
}
