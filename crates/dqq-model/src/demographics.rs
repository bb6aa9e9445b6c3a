use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DqqError;

/// MDD-W eligible age range (women of reproductive age), inclusive.
pub const MDDW_MIN_AGE: u32 = 15;
pub const MDDW_MAX_AGE: u32 = 49;

/// Gender per the DQQ methodology coding: `0` = male, `1` = female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The numeric wire code used in stored demographics documents.
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }

    pub fn from_code(code: i64) -> Result<Self, DqqError> {
        match code {
            0 => Ok(Gender::Male),
            1 => Ok(Gender::Female),
            other => Err(DqqError::InvalidGender(other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GenderVisitor;

        impl<'de> Visitor<'de> for GenderVisitor {
            type Value = Gender;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a gender code (0 = male, 1 = female)")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Gender::from_code(value).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                let code = i64::try_from(value).map_err(|_| {
                    de::Error::invalid_value(de::Unexpected::Unsigned(value), &self)
                })?;
                Gender::from_code(code).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_u64(GenderVisitor)
    }
}

/// Per-user demographics consumed by the indicator calculator.
///
/// Both fields are optional: a user who never filled in their profile still
/// gets every indicator except MDD-W, which requires knowing that the user is
/// a woman aged 15-49.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl Demographics {
    pub fn new(age: Option<u32>, gender: Option<Gender>) -> Self {
        Self { age, gender }
    }

    /// True iff this user falls in the MDD-W reference population: female,
    /// aged 15-49 inclusive. Incomplete demographics are never eligible.
    pub fn mddw_eligible(&self) -> bool {
        matches!(self.gender, Some(Gender::Female))
            && matches!(self.age, Some(age) if (MDDW_MIN_AGE..=MDDW_MAX_AGE).contains(&age))
    }
}
