use std::io::Cursor;
use tracing::info;

use crate::output::{Block, DocumentOutput, DocxOutput, DOCX_CONTENT_TYPE};
use crate::quiz::{QuizError, QuizSelection};
use crate::settings::Settings;


pub const NEGATIVE_MARKING_RULES: &str = "Marking: +1 correct, -1/3 incorrect, 0 unattempted";

#[derive(Clone, Debug)]
pub struct QuizDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: &'static str,
}

pub struct Composer {
    file_name: String,
    spacing_after_points: u32,
}

impl Composer {
    pub fn new(settings: &Settings) -> Self {
        Composer {
            file_name: settings.file_name.clone(),
            spacing_after_points: settings.spacing_after_points,
        }
    }

    pub fn compose(
        &self,
        selection: &QuizSelection,
        negative_marking: bool,
    ) -> Result<QuizDocument, QuizError> {
        let output = DocxOutput::new(Cursor::new(Vec::new()));
        let bytes = self
            .compose_into(output, selection, negative_marking)?
            .into_inner();
        info!(
            "Composed {} with {} questions ({} bytes)",
            self.file_name,
            selection.len(),
            bytes.len()
        );
        Ok(QuizDocument {
            bytes,
            file_name: self.file_name.clone(),
            content_type: DOCX_CONTENT_TYPE,
        })
    }

    pub fn compose_into<O: DocumentOutput>(
        &self,
        mut output: O,
        selection: &QuizSelection,
        negative_marking: bool,
    ) -> Result<O::Finished, QuizError> {
        if selection.is_empty() {
            return Err(QuizError::EmptySelection);
        }

        output.append(&Block::Title("Quiz".to_owned()));
        if negative_marking {
            output.append(&Block::Text(NEGATIVE_MARKING_RULES.to_owned()));
        }

        for (number, question) in selection.numbered() {
            output.append(&Block::BoldText(format!(
                "Q{}. {}",
                number, question.question
            )));
            for (letter, option) in question.options().iter() {
                output.append(&Block::Text(format!("{}. {}", letter, option)));
            }
            output.append(&Block::Spacer(self.spacing_after_points));
        }

        output.append(&Block::PageBreak);
        output.append(&Block::Heading("Answer Key".to_owned()));
        for (number, question) in selection.numbered() {
            output.append(&Block::Text(format!("Q{}. {}", number, question.answer)));
        }

        output.finish()
    }
}
