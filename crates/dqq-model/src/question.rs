use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DqqError;

/// Number of food/drink groups in the Diet Quality Questionnaire.
pub const QUESTION_COUNT: usize = 29;

/// One of the 29 DQQ food/drink groups per the FAO/FHI360 DQQ methodology.
///
/// The numbering is stable and never reassigned: indicator formulas reference
/// specific question keys, and stored answer maps are keyed by `DQQ1`..`DQQ29`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionId {
    Dqq1,
    Dqq2,
    Dqq3,
    Dqq4,
    Dqq5,
    Dqq6,
    Dqq7,
    Dqq8,
    Dqq9,
    Dqq10,
    Dqq11,
    Dqq12,
    Dqq13,
    Dqq14,
    Dqq15,
    Dqq16,
    Dqq17,
    Dqq18,
    Dqq19,
    Dqq20,
    Dqq21,
    Dqq22,
    Dqq23,
    Dqq24,
    Dqq25,
    Dqq26,
    Dqq27,
    Dqq28,
    Dqq29,
}

impl QuestionId {
    /// All 29 questions in questionnaire order. The single source of truth for
    /// iteration; the form UI, the storage layer, and the calculator all walk
    /// this list rather than keeping their own copies.
    pub const ALL: [QuestionId; QUESTION_COUNT] = [
        QuestionId::Dqq1,
        QuestionId::Dqq2,
        QuestionId::Dqq3,
        QuestionId::Dqq4,
        QuestionId::Dqq5,
        QuestionId::Dqq6,
        QuestionId::Dqq7,
        QuestionId::Dqq8,
        QuestionId::Dqq9,
        QuestionId::Dqq10,
        QuestionId::Dqq11,
        QuestionId::Dqq12,
        QuestionId::Dqq13,
        QuestionId::Dqq14,
        QuestionId::Dqq15,
        QuestionId::Dqq16,
        QuestionId::Dqq17,
        QuestionId::Dqq18,
        QuestionId::Dqq19,
        QuestionId::Dqq20,
        QuestionId::Dqq21,
        QuestionId::Dqq22,
        QuestionId::Dqq23,
        QuestionId::Dqq24,
        QuestionId::Dqq25,
        QuestionId::Dqq26,
        QuestionId::Dqq27,
        QuestionId::Dqq28,
        QuestionId::Dqq29,
    ];

    /// Zero-based position in questionnaire order, used to index dense storage.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stable storage key (`"DQQ1"`..`"DQQ29"`) used in persisted answer maps.
    pub fn key(self) -> &'static str {
        match self {
            QuestionId::Dqq1 => "DQQ1",
            QuestionId::Dqq2 => "DQQ2",
            QuestionId::Dqq3 => "DQQ3",
            QuestionId::Dqq4 => "DQQ4",
            QuestionId::Dqq5 => "DQQ5",
            QuestionId::Dqq6 => "DQQ6",
            QuestionId::Dqq7 => "DQQ7",
            QuestionId::Dqq8 => "DQQ8",
            QuestionId::Dqq9 => "DQQ9",
            QuestionId::Dqq10 => "DQQ10",
            QuestionId::Dqq11 => "DQQ11",
            QuestionId::Dqq12 => "DQQ12",
            QuestionId::Dqq13 => "DQQ13",
            QuestionId::Dqq14 => "DQQ14",
            QuestionId::Dqq15 => "DQQ15",
            QuestionId::Dqq16 => "DQQ16",
            QuestionId::Dqq17 => "DQQ17",
            QuestionId::Dqq18 => "DQQ18",
            QuestionId::Dqq19 => "DQQ19",
            QuestionId::Dqq20 => "DQQ20",
            QuestionId::Dqq21 => "DQQ21",
            QuestionId::Dqq22 => "DQQ22",
            QuestionId::Dqq23 => "DQQ23",
            QuestionId::Dqq24 => "DQQ24",
            QuestionId::Dqq25 => "DQQ25",
            QuestionId::Dqq26 => "DQQ26",
            QuestionId::Dqq27 => "DQQ27",
            QuestionId::Dqq28 => "DQQ28",
            QuestionId::Dqq29 => "DQQ29",
        }
    }

    /// Human-readable food-group label as shown on the questionnaire form.
    pub fn label(self) -> &'static str {
        match self {
            QuestionId::Dqq1 => "Foods made from grains",
            QuestionId::Dqq2 => "Whole grains",
            QuestionId::Dqq3 => "White roots or tubers",
            QuestionId::Dqq4 => "Pulses (beans, peas, lentils)",
            QuestionId::Dqq5 => "Vitamin A-rich orange vegetables",
            QuestionId::Dqq6 => "Dark green leafy vegetables",
            QuestionId::Dqq7 => "Other vegetables",
            QuestionId::Dqq8 => "Vitamin A-rich fruits",
            QuestionId::Dqq9 => "Citrus fruits",
            QuestionId::Dqq10 => "Other fruits",
            QuestionId::Dqq11 => "Baked or grain-based sweets",
            QuestionId::Dqq12 => "Other sweets",
            QuestionId::Dqq13 => "Eggs",
            QuestionId::Dqq14 => "Cheese",
            QuestionId::Dqq15 => "Yogurt",
            QuestionId::Dqq16 => "Processed meats",
            QuestionId::Dqq17 => "Unprocessed red meat (ruminant)",
            QuestionId::Dqq18 => "Unprocessed red meat (non-ruminant)",
            QuestionId::Dqq19 => "Poultry",
            QuestionId::Dqq20 => "Fish or seafood",
            QuestionId::Dqq21 => "Nuts or seeds",
            QuestionId::Dqq22 => "Packaged ultra-processed salty snacks",
            QuestionId::Dqq23 => "Instant noodles",
            QuestionId::Dqq24 => "Deep fried foods",
            QuestionId::Dqq25 => "Fluid milk",
            QuestionId::Dqq26 => "Sweet tea, coffee, or cocoa",
            QuestionId::Dqq27 => "Fruit juice or fruit drinks",
            QuestionId::Dqq28 => "Soft drinks",
            QuestionId::Dqq29 => "Fast food",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for QuestionId {
    type Err = DqqError;

    /// Parse a storage key (`DQQ7`, case-insensitive, surrounding whitespace
    /// tolerated) into a `QuestionId`. The question number must be plain
    /// digits with no sign or leading zeros, so every accepted spelling
    /// normalizes to exactly one stored key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("DQQ"))
            .map(|_| &trimmed[3..])
            .filter(|digits| {
                !digits.is_empty()
                    && !digits.starts_with('0')
                    && digits.bytes().all(|byte| byte.is_ascii_digit())
            })
            .and_then(|digits| digits.parse::<usize>().ok());
        match number {
            Some(n) if (1..=QUESTION_COUNT).contains(&n) => Ok(QuestionId::ALL[n - 1]),
            _ => Err(DqqError::UnknownQuestion(s.to_string())),
        }
    }
}
