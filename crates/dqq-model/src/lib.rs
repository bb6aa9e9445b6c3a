pub mod answers;
pub mod demographics;
pub mod error;
pub mod indicators;
pub mod question;

pub use answers::AnswerSet;
pub use demographics::{Demographics, Gender, MDDW_MAX_AGE, MDDW_MIN_AGE};
pub use error::{DqqError, Result};
pub use indicators::{DietQualityIndicators, QuestionFlags};
pub use question::{QUESTION_COUNT, QuestionId};
