//! Dimensions, trait letters, choices and the 16 personality types.

use crate::error::AssessmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four bipolar personality axes, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    EI,
    SN,
    TF,
    JP,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP];

    /// The (first, second) letters of this dimension. Ties resolve to the second.
    pub const fn poles(self) -> (Trait, Trait) {
        match self {
            Dimension::EI => (Trait::E, Trait::I),
            Dimension::SN => (Trait::S, Trait::N),
            Dimension::TF => (Trait::T, Trait::F),
            Dimension::JP => (Trait::J, Trait::P),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Dimension::EI => "EI",
            Dimension::SN => "SN",
            Dimension::TF => "TF",
            Dimension::JP => "JP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::EI => "Extraversion / Introversion",
            Dimension::SN => "Sensing / Intuition",
            Dimension::TF => "Thinking / Feeling",
            Dimension::JP => "Judging / Perceiving",
        }
    }
}

/// A single pole of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trait {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Trait {
    pub const ALL: [Trait; 8] = [
        Trait::E,
        Trait::I,
        Trait::S,
        Trait::N,
        Trait::T,
        Trait::F,
        Trait::J,
        Trait::P,
    ];

    pub const fn dimension(self) -> Dimension {
        match self {
            Trait::E | Trait::I => Dimension::EI,
            Trait::S | Trait::N => Dimension::SN,
            Trait::T | Trait::F => Dimension::TF,
            Trait::J | Trait::P => Dimension::JP,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Trait::E => 'E',
            Trait::I => 'I',
            Trait::S => 'S',
            Trait::N => 'N',
            Trait::T => 'T',
            Trait::F => 'F',
            Trait::J => 'J',
            Trait::P => 'P',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Trait::E => "Extraversion",
            Trait::I => "Introversion",
            Trait::S => "Sensing",
            Trait::N => "Intuition",
            Trait::T => "Thinking",
            Trait::F => "Feeling",
            Trait::J => "Judging",
            Trait::P => "Perceiving",
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Trait::E),
            'I' => Some(Trait::I),
            'S' => Some(Trait::S),
            'N' => Some(Trait::N),
            'T' => Some(Trait::T),
            'F' => Some(Trait::F),
            'J' => Some(Trait::J),
            'P' => Some(Trait::P),
            _ => None,
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The option picked for a forced-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl FromStr for Choice {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            _ => Err(AssessmentError::InvalidChoice {
                value: s.to_string(),
            }),
        }
    }
}

/// One of the 16 four-letter types. Variant names are the stored codes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 16] = [
        PersonalityType::INTJ,
        PersonalityType::INTP,
        PersonalityType::ENTJ,
        PersonalityType::ENTP,
        PersonalityType::INFJ,
        PersonalityType::INFP,
        PersonalityType::ENFJ,
        PersonalityType::ENFP,
        PersonalityType::ISTJ,
        PersonalityType::ISFJ,
        PersonalityType::ESTJ,
        PersonalityType::ESFJ,
        PersonalityType::ISTP,
        PersonalityType::ISFP,
        PersonalityType::ESTP,
        PersonalityType::ESFP,
    ];

    /// Build a type from the per-dimension outcome: `true` selects the first
    /// letter of that dimension (E, S, T, J), `false` the second.
    pub fn from_poles(e: bool, s: bool, t: bool, j: bool) -> Self {
        use PersonalityType::*;
        match (e, s, t, j) {
            (false, false, true, true) => INTJ,
            (false, false, true, false) => INTP,
            (true, false, true, true) => ENTJ,
            (true, false, true, false) => ENTP,
            (false, false, false, true) => INFJ,
            (false, false, false, false) => INFP,
            (true, false, false, true) => ENFJ,
            (true, false, false, false) => ENFP,
            (false, true, true, true) => ISTJ,
            (false, true, false, true) => ISFJ,
            (true, true, true, true) => ESTJ,
            (true, true, false, true) => ESFJ,
            (false, true, true, false) => ISTP,
            (false, true, false, false) => ISFP,
            (true, true, true, false) => ESTP,
            (true, true, false, false) => ESFP,
        }
    }

    pub fn code(self) -> &'static str {
        use PersonalityType::*;
        match self {
            INTJ => "INTJ",
            INTP => "INTP",
            ENTJ => "ENTJ",
            ENTP => "ENTP",
            INFJ => "INFJ",
            INFP => "INFP",
            ENFJ => "ENFJ",
            ENFP => "ENFP",
            ISTJ => "ISTJ",
            ISFJ => "ISFJ",
            ESTJ => "ESTJ",
            ESFJ => "ESFJ",
            ISTP => "ISTP",
            ISFP => "ISFP",
            ESTP => "ESTP",
            ESFP => "ESFP",
        }
    }

    /// The four letters in dimension order EI, SN, TF, JP.
    pub fn letters(self) -> [Trait; 4] {
        let mut out = [Trait::E; 4];
        for (slot, c) in out.iter_mut().zip(self.code().chars()) {
            // Codes are built only from the eight trait letters.
            if let Some(t) = Trait::from_letter(c) {
                *slot = t;
            }
        }
        out
    }

    pub fn letter_for(self, dimension: Dimension) -> Trait {
        let idx = Dimension::ALL
            .iter()
            .position(|d| *d == dimension)
            .unwrap_or_default();
        self.letters()[idx]
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        PersonalityType::ALL
            .iter()
            .copied()
            .find(|t| t.code() == normalized)
            .ok_or(AssessmentError::InvalidType {
                value: s.to_string(),
            })
    }
}
