use thiserror::Error;

use crate::quiz::definition::QUESTION_COLUMNS;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("table `{table}` has {columns} columns but at least {} are required", QUESTION_COLUMNS)]
    MalformedInput { table: String, columns: usize },

    #[error("no complete and unique questions were found")]
    EmptyResult,

    #[error("cannot pick {requested} questions out of {available}")]
    InvalidSampleSize { requested: usize, available: usize },

    #[error("cannot compose a quiz without any question")]
    EmptySelection,

    #[error("could not write quiz document")]
    DocumentWrite(#[source] Box<dyn std::error::Error + Send + Sync>),
}
