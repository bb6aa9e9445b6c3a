use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::question::{QUESTION_COUNT, QuestionId};

/// One day's (or one meal's) consumption flags, one boolean per DQQ question.
///
/// Stored densely and indexed by [`QuestionId`], so every question always has
/// a defined value; a question that was never answered is simply `false`
/// ("not consumed"). This replaces the permissive string-keyed maps of the
/// persisted form with compile-time exhaustive access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerSet {
    consumed: [bool; QUESTION_COUNT],
}

impl AnswerSet {
    /// The "nothing consumed" baseline used to initialize forms and to score
    /// days with no recorded meals.
    pub fn all_false() -> Self {
        Self::default()
    }

    /// Build a set with the given questions marked consumed.
    pub fn from_consumed(questions: &[QuestionId]) -> Self {
        let mut set = Self::default();
        for &question in questions {
            set.set(question, true);
        }
        set
    }

    pub fn get(&self, question: QuestionId) -> bool {
        self.consumed[question.index()]
    }

    pub fn set(&mut self, question: QuestionId, value: bool) {
        self.consumed[question.index()] = value;
    }

    /// True if at least one of the given questions is marked consumed. This is
    /// the building block for every composite indicator.
    pub fn any(&self, questions: &[QuestionId]) -> bool {
        questions.iter().any(|&question| self.get(question))
    }

    /// Number of food groups marked consumed.
    pub fn consumed_count(&self) -> usize {
        self.consumed.iter().filter(|&&value| value).count()
    }

    /// In-place logical OR with another set: a group counts as consumed if
    /// either set reports it consumed.
    pub fn merge(&mut self, other: &AnswerSet) {
        for question in QuestionId::ALL {
            self.consumed[question.index()] |= other.consumed[question.index()];
        }
    }

    /// Iterate `(question, consumed)` pairs in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, bool)> + '_ {
        QuestionId::ALL
            .into_iter()
            .map(|question| (question, self.get(question)))
    }
}

impl Serialize for AnswerSet {
    /// Serializes as the full `{"DQQ1": bool, ...}` map in questionnaire
    /// order, matching the shape persisted under `dqqData.answers`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(QUESTION_COUNT))?;
        for (question, consumed) in self.iter() {
            map.serialize_entry(question.key(), &consumed)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    /// Deserializes leniently from a partial answer map: missing keys read as
    /// `false`, unrecognized keys are skipped, and any value that is not
    /// literally boolean `true` (null, numbers, strings, `false`) reads as
    /// "not consumed". Stored documents written by older app versions carry
    /// all of those shapes.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnswerSetVisitor;

        impl<'de> Visitor<'de> for AnswerSetVisitor {
            type Value = AnswerSet;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of DQQ question keys to consumption flags")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = AnswerSet::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.parse::<QuestionId>() {
                        Ok(question) => {
                            let LenientFlag(consumed) = map.next_value()?;
                            if consumed {
                                set.set(question, true);
                            }
                        }
                        Err(_) => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(AnswerSetVisitor)
    }
}

/// A consumption flag that treats anything other than literal `true` as
/// "not consumed" instead of erroring.
struct LenientFlag(bool);

impl<'de> Deserialize<'de> for LenientFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagVisitor;

        impl<'de> Visitor<'de> for FlagVisitor {
            type Value = LenientFlag;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a consumption flag")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(LenientFlag(value))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                LenientFlag::deserialize(deserializer)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientFlag(false))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map
                    .next_entry::<IgnoredAny, IgnoredAny>()?
                    .is_some()
                {}
                Ok(LenientFlag(false))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_false() {
        let set = AnswerSet::all_false();
        assert_eq!(set.consumed_count(), 0);
        for question in QuestionId::ALL {
            assert!(!set.get(question));
        }
    }

    #[test]
    fn set_and_any() {
        let set = AnswerSet::from_consumed(&[QuestionId::Dqq6, QuestionId::Dqq28]);
        assert!(set.get(QuestionId::Dqq6));
        assert!(set.any(&[QuestionId::Dqq5, QuestionId::Dqq6, QuestionId::Dqq7]));
        assert!(!set.any(&[QuestionId::Dqq8, QuestionId::Dqq9, QuestionId::Dqq10]));
        assert_eq!(set.consumed_count(), 2);
    }

    #[test]
    fn merge_is_logical_or() {
        let mut left = AnswerSet::from_consumed(&[QuestionId::Dqq1]);
        let right = AnswerSet::from_consumed(&[QuestionId::Dqq2]);
        left.merge(&right);
        assert!(left.get(QuestionId::Dqq1));
        assert!(left.get(QuestionId::Dqq2));
        assert_eq!(right.consumed_count(), 1);
    }
}
