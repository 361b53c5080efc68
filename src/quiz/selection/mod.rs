use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::quiz::definition::{Question, QuestionSet};
use crate::quiz::error::QuizError;


/// Questions in the order they will be printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSelection {
    questions: Vec<Question>,
}

impl QuizSelection {
    pub fn new(questions: Vec<Question>) -> Self {
        QuizSelection { questions }
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions paired with their 1-based number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Question)> {
        self.questions.iter().enumerate().map(|(i, q)| (i + 1, q))
    }
}

pub fn sample<R: Rng + ?Sized>(
    set: &QuestionSet,
    count: usize,
    rng: &mut R,
) -> Result<QuizSelection, QuizError> {
    let available = set.len();
    if count < 1 || count > available {
        return Err(QuizError::InvalidSampleSize {
            requested: count,
            available,
        });
    }

    let questions = index::sample(rng, available, count)
        .into_iter()
        .map(|i| set.get_questions()[i].clone())
        .collect();

    debug!("Picked {} questions out of {}", count, available);
    Ok(QuizSelection { questions })
}
