//! Roman numeral decoding, minimal re-encoding and the savings between the two.
//!
//! The decoder is a single left-to-right scan and does not check classical
//! legality: `IM` decodes to 999 and `IIV` to 5. Only characters outside the
//! seven-symbol alphabet are rejected.

use crate::domain::model::{LineSavings, NumeralRecord};
use crate::utils::error::{Result, RomanError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    pub const fn value(self) -> u64 {
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

    pub const fn as_char(self) -> char {
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
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            'I' => Ok(Symbol::I),
            'V' => Ok(Symbol::V),
            'X' => Ok(Symbol::X),
            'L' => Ok(Symbol::L),
            'C' => Ok(Symbol::C),
            'D' => Ok(Symbol::D),
            'M' => Ok(Symbol::M),
            other => Err(other),
        }
    }
}

/// Greedy tiers, largest first. Subtractive pairs sit between the plain symbols.
const TIERS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Decodes a numeral, possibly non-minimal, into its value. Empty input is 0.
pub fn decode(numeral: &str) -> Result<u64> {
    let mut total: u64 = 0;
    let mut previous: Option<u64> = None;

    for (position, c) in numeral.chars().enumerate() {
        let value = Symbol::try_from(c)
            .map_err(|symbol| RomanError::UnknownSymbol { symbol, position })?
            .value();

        total = match previous {
            // previous was already added at face value; swap it for a subtraction
            Some(prev) if value > prev => total + value - 2 * prev,
            _ => total + value,
        };
        previous = Some(value);
    }

    Ok(total)
}

/// Encodes `value` as the shortest numeral. Values past 3999 repeat `M`.
pub fn encode(mut value: u64) -> String {
    let mut out = String::new();
    for &(tier, fragment) in TIERS.iter() {
        while value >= tier {
            out.push_str(fragment);
            value -= tier;
        }
    }
    out
}

pub fn minimize(numeral: &str) -> Result<String> {
    decode(numeral).map(encode)
}

/// Characters saved by rewriting `numeral` in minimal form.
///
/// Never negative for well-formed numerals. Input the decoder tolerates but
/// classical rules reject (`IM`) can come out negative and is returned as is.
pub fn savings(numeral: &str) -> Result<i64> {
    let minimal = minimize(numeral)?;
    Ok(char_len(numeral) - char_len(&minimal))
}

pub fn analyze_line(record: &NumeralRecord) -> Result<LineSavings> {
    let value = decode(&record.text).map_err(|e| match e {
        RomanError::UnknownSymbol { symbol, position } => RomanError::MalformedLine {
            line: record.line,
            numeral: record.text.clone(),
            symbol,
            position,
        },
        other => other,
    })?;
    let minimal = encode(value);

    let original_len = record.text.chars().count();
    let minimal_len = minimal.len();

    Ok(LineSavings {
        line: record.line,
        original: record.text.clone(),
        value,
        minimal,
        original_len,
        minimal_len,
        saved: original_len as i64 - minimal_len as i64,
    })
}

fn char_len(s: &str) -> i64 {
    s.chars().count() as i64
}
