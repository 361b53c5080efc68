use tracing::warn;


#[derive(Clone, Debug)]
pub struct Settings {
    pub default_question_count: usize,
    pub negative_marking: bool,
    pub file_name: String,
    pub spacing_after_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_question_count: 10,
            negative_marking: false,
            file_name: "quiz.docx".to_owned(),
            spacing_after_points: 6,
        }
    }
}

impl Settings {
    /// Number of questions to put in the quiz, kept within `1..=available`.
    pub fn question_count(&self, requested: Option<usize>, available: usize) -> usize {
        let upper = available.max(1);
        match requested {
            None => self.default_question_count.clamp(1, upper),
            Some(count) => {
                let clamped = count.clamp(1, upper);
                if clamped != count {
                    warn!(
                        "Asked for {} questions but only 1 to {} are possible, using {}",
                        count, upper, clamped
                    );
                }
                clamped
            }
        }
    }
}
