use serde::{Deserialize, Serialize};
use std::fmt;

/// Core symbols with built-in spatial meaning. These are never keys in a
/// genome and cannot be mutated away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreSymbol {
    /// Rotate around X in the positive direction (`x+`).
    RotXPos,
    /// Rotate around X in the negative direction (`x-`).
    RotXNeg,
    /// Rotate around Y in the positive direction (`y+`).
    RotYPos,
    /// Rotate around Y in the negative direction (`y-`).
    RotYNeg,
    /// Forward growth mark (`F`).
    Growth,
    /// Seed mark (`*`).
    Seed,
    /// Branch open (`[`).
    BranchOpen,
    /// Branch close (`]`).
    BranchClose,
}

impl CoreSymbol {
    pub const ALL: [CoreSymbol; 8] = [
        CoreSymbol::RotXPos,
        CoreSymbol::RotXNeg,
        CoreSymbol::RotYPos,
        CoreSymbol::RotYNeg,
        CoreSymbol::Growth,
        CoreSymbol::Seed,
        CoreSymbol::BranchOpen,
        CoreSymbol::BranchClose,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            CoreSymbol::RotXPos => "x+",
            CoreSymbol::RotXNeg => "x-",
            CoreSymbol::RotYPos => "y+",
            CoreSymbol::RotYNeg => "y-",
            CoreSymbol::Growth => "F",
            CoreSymbol::Seed => "*",
            CoreSymbol::BranchOpen => "[",
            CoreSymbol::BranchClose => "]",
        }
    }
}

impl fmt::Display for CoreSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Gene identifier. Identifiers are allocated from a monotonic counter and
/// rendered as bijective base-26 letter codes: 0 -> "A", 25 -> "Z",
/// 26 -> "AA", and so on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GeneId(pub u32);

impl GeneId {
    pub fn letters(&self) -> String {
        let mut i = self.0 + 1;
        let mut buf = Vec::new();
        while i > 0 {
            i -= 1;
            buf.push(b'A' + (i % 26) as u8);
            i /= 26;
        }
        buf.reverse();
        // buf only ever holds ASCII letters
        String::from_utf8(buf).unwrap()
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

/// A body symbol: either a fixed core symbol or a gene identifier that the
/// genome may (or may not) hold an activation rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Core(CoreSymbol),
    Gene(GeneId),
}

impl Symbol {
    pub fn is_core(&self) -> bool {
        matches!(self, Symbol::Core(_))
    }

    pub fn as_gene(&self) -> Option<GeneId> {
        match self {
            Symbol::Gene(id) => Some(*id),
            Symbol::Core(_) => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Core(core) => core.fmt(f),
            Symbol::Gene(id) => id.fmt(f),
        }
    }
}
