use crate::quiz::QuizError;

pub mod docx;
#[cfg(test)]
pub mod mock;

pub use self::docx::DocxOutput;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    Text(String),
    BoldText(String),
    Spacer(u32),
    PageBreak,
}

pub trait DocumentOutput {
    type Finished;

    fn append(&mut self, block: &Block);

    fn finish(self) -> Result<Self::Finished, QuizError>;
}
