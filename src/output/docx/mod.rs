use docx_rs::{BreakType, Docx, LineSpacing, Paragraph, Run, Style, StyleType};
use std::io::{Seek, Write};

use crate::output::{Block, DocumentOutput};
use crate::quiz::QuizError;


const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

// Half-points
const TITLE_SIZE: usize = 56;
const HEADING_SIZE: usize = 32;

const TWIPS_PER_POINT: u32 = 20;

/// Lays blocks out as Word paragraphs and packs them into `sink` on finish.
pub struct DocxOutput<W: Write + Seek> {
    paragraphs: Vec<Paragraph>,
    sink: W,
}

impl<W: Write + Seek> DocxOutput<W> {
    pub fn new(sink: W) -> Self {
        DocxOutput {
            paragraphs: Vec::new(),
            sink,
        }
    }

    fn interpret_block(block: &Block) -> Paragraph {
        use Block::*;
        match block {
            Title(text) => Paragraph::new()
                .style(TITLE_STYLE)
                .add_run(Run::new().add_text(text)),
            Heading(text) => Paragraph::new()
                .style(HEADING_STYLE)
                .add_run(Run::new().add_text(text)),
            Text(text) => Paragraph::new().add_run(Run::new().add_text(text)),
            BoldText(text) => Paragraph::new().add_run(Run::new().add_text(text).bold()),
            Spacer(points) => {
                Paragraph::new().line_spacing(LineSpacing::new().after(points * TWIPS_PER_POINT))
            }
            PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
        }
    }
}

impl<W: Write + Seek> DocumentOutput for DocxOutput<W> {
    type Finished = W;

    fn append(&mut self, block: &Block) {
        self.paragraphs.push(Self::interpret_block(block));
    }

    fn finish(mut self) -> Result<W, QuizError> {
        let docx = Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Title")
                    .size(TITLE_SIZE)
                    .bold(),
            )
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(HEADING_SIZE)
                    .bold(),
            );
        let docx = self
            .paragraphs
            .into_iter()
            .fold(docx, |docx, paragraph| docx.add_paragraph(paragraph));

        docx.build()
            .pack(&mut self.sink)
            .map_err(|e| QuizError::DocumentWrite(e.into()))?;
        Ok(self.sink)
    }
}
