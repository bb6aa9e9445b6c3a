use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::answers::AnswerSet;
use crate::question::{QUESTION_COUNT, QuestionId};

/// The full set of diet-quality indicators derived from one merged answer set
/// plus demographics.
///
/// This is a view, not authoritative state: it is recomputed whenever the
/// underlying answers or demographics change and is safe to discard. Boolean
/// indicators are carried as `0`/`1` and score indicators as small counts so
/// the serialized form matches the flat numeric map the storage layer and the
/// badge/chart UI consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietQualityIndicators {
    /// NCD-Protect score, 0-9.
    pub ncdp: u8,
    /// NCD-Risk score, 0-8.
    pub ncdr: u8,
    /// Global Dietary Recommendations score proxy: `ncdp - ncdr + 9`, 1-18.
    pub gdr: i8,
    /// Food Group Diversity Score, 0-10.
    pub fgds: u8,
    /// Minimum Dietary Diversity for Women. `None` when the user is outside
    /// the MDD-W reference population (or demographics are incomplete).
    #[serde(default)]
    pub mddw: Option<u8>,
    /// Consumed from all five broad food categories.
    pub all5: u8,
    /// At least one vegetable.
    pub all5a: u8,
    /// At least one fruit.
    pub all5b: u8,
    /// At least one pulse, nut, or seed.
    pub all5c: u8,
    /// At least one animal-source food.
    pub all5d: u8,
    /// At least one starchy staple.
    pub all5e: u8,
    /// At least one vegetable or fruit.
    pub vegfr: u8,
    /// Zero vegetables or fruit.
    pub zvegfr: u8,
    pub whole_grain_consumption: u8,
    pub pulse_consumption: u8,
    pub nuts_seeds_consumption: u8,
    pub processed_meat_consumption: u8,
    pub deep_fried_consumption: u8,
    pub soft_drink_consumption: u8,
    pub dveg_consumption: u8,
    pub oveg_consumption: u8,
    pub ofr_consumption: u8,
    /// Salty or fried snack consumption.
    pub safd: u8,
    /// Sweet food consumption.
    pub swtfd: u8,
    /// Sweet beverage consumption.
    pub swtbev: u8,
    /// Salty snacks, instant noodles, or fast food.
    pub snf: u8,
    /// Any dairy (cheese, yogurt, or milk).
    pub dairy: u8,
    /// Any meat, poultry, or fish.
    pub anml: u8,
    /// Unprocessed red meat.
    pub umeat: u8,
    /// Per-question passthrough flags, serialized as `DQQ1`..`DQQ29`.
    #[serde(flatten)]
    pub questions: QuestionFlags,
}

/// The 29 per-question 0/1 flags included verbatim in every result set, so
/// consumers can chart individual food groups without re-reading the answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuestionFlags {
    flags: [u8; QUESTION_COUNT],
}

impl QuestionFlags {
    pub fn get(&self, question: QuestionId) -> u8 {
        self.flags[question.index()]
    }
}

impl From<&AnswerSet> for QuestionFlags {
    fn from(answers: &AnswerSet) -> Self {
        let mut flags = [0u8; QUESTION_COUNT];
        for (question, consumed) in answers.iter() {
            flags[question.index()] = u8::from(consumed);
        }
        Self { flags }
    }
}

impl Serialize for QuestionFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(QUESTION_COUNT))?;
        for question in QuestionId::ALL {
            map.serialize_entry(question.key(), &self.get(question))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuestionFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagsVisitor;

        impl<'de> Visitor<'de> for FlagsVisitor {
            type Value = QuestionFlags;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of DQQ question keys to 0/1 flags")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut flags = QuestionFlags::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.parse::<QuestionId>() {
                        Ok(question) => {
                            let value: u8 = map.next_value()?;
                            flags.flags[question.index()] = value;
                        }
                        Err(_) => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_map(FlagsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_flags_mirror_answers() {
        let answers = AnswerSet::from_consumed(&[QuestionId::Dqq3, QuestionId::Dqq29]);
        let flags = QuestionFlags::from(&answers);
        assert_eq!(flags.get(QuestionId::Dqq3), 1);
        assert_eq!(flags.get(QuestionId::Dqq29), 1);
        assert_eq!(flags.get(QuestionId::Dqq1), 0);
    }
}
