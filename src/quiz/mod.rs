pub mod definition;
pub mod error;
pub mod selection;

pub use self::definition::{ingest, Question, QuestionSet, RawTable};
pub use self::error::QuizError;
pub use self::selection::{sample, QuizSelection};
