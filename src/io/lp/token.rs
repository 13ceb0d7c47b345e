//! # Tokens used in LP files
//!
//! Raw tokens come straight out of the scanner and only live in the lookahead window. Processed
//! tokens carry meaning: which section starts, whether a name is a constraint or a variable, and
//! so on.
use enum_map::Enum;

use crate::data::model::SosType;

/// Lexical unit read from a single line.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum RawToken {
    /// Identifier-like run of characters: a keyword, variable or constraint name.
    Text(String),
    Constant(f64),
    Less,
    Greater,
    Equal,
    Colon,
    BracketOpen,
    BracketClose,
    Plus,
    Minus,
    Hat,
    Slash,
    Asterisk,
    /// Repeated indefinitely once the input is exhausted.
    EndOfFile,
}

/// Keywords that start a section.
#[derive(Clone, Copy, Debug, Enum, PartialEq, Eq)]
pub(super) enum SectionKeyword {
    Minimize,
    Maximize,
    Constraints,
    Bounds,
    General,
    Binary,
    SemiContinuous,
    Sos,
    End,
}

impl SectionKeyword {
    /// Recognize a section keyword, ignoring case.
    ///
    /// # Arguments
    ///
    /// * `text`: A single word, or two words joined by a space or hyphen.
    pub(super) fn from_text(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "minimize" | "minimise" | "minimum" | "min" => Some(Self::Minimize),
            "maximize" | "maximise" | "maximum" | "max" => Some(Self::Maximize),
            "subject to" | "such that" | "st" | "s.t." => Some(Self::Constraints),
            "bounds" | "bound" => Some(Self::Bounds),
            "general" | "generals" | "gen" | "integer" | "integers" => Some(Self::General),
            "binary" | "binaries" | "bin" => Some(Self::Binary),
            "semi-continuous" | "semi" | "semis" => Some(Self::SemiContinuous),
            "sos" => Some(Self::Sos),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Direction of a comparison.
///
/// The strict variants are read, but are rejected by every section parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Comparison {
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
}

impl Comparison {
    pub(super) fn is_strict(self) -> bool {
        matches!(self, Self::Less | Self::Greater)
    }
}

/// A token with its meaning resolved.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Token {
    Section(SectionKeyword),
    SosType(SosType),
    /// A name followed by a colon.
    ConstraintName(String),
    VariableName(String),
    Constant(f64),
    Free,
    Comparison(Comparison),
    BracketOpen,
    BracketClose,
    Slash,
    Asterisk,
    Hat,
}

/// Marks a variable as unbounded in both directions, in the bounds section.
const FREE: &str = "free";

/// Stands for positive infinity wherever a constant is expected.
const INFINITY: [&str; 2] = ["infinity", "inf"];

pub(super) fn is_free(text: &str) -> bool {
    text.eq_ignore_ascii_case(FREE)
}

pub(super) fn is_infinity(text: &str) -> bool {
    INFINITY.iter().any(|spelling| text.eq_ignore_ascii_case(spelling))
}
