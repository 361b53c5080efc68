use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Block, DocumentOutput};
use crate::quiz::QuizError;

#[derive(Clone, Default)]
pub struct MockDocumentOutput {
    blocks: Arc<RwLock<Vec<Block>>>,
    fail_on_finish: bool,
}

impl MockDocumentOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn failing() -> Self {
        MockDocumentOutput {
            fail_on_finish: true,
            ..Default::default()
        }
    }

    pub fn get_blocks(&self) -> Vec<Block> {
        self.blocks.read().clone()
    }

    pub fn contains_block(&self, block: &Block) -> bool {
        self.blocks.read().iter().any(|b| b == block)
    }

    pub fn texts(&self) -> Vec<String> {
        self.blocks
            .read()
            .iter()
            .filter_map(|block| match block {
                Block::Title(t) | Block::Heading(t) | Block::Text(t) | Block::BoldText(t) => {
                    Some(t.clone())
                }
                Block::Spacer(_) | Block::PageBreak => None,
            })
            .collect()
    }
}

impl DocumentOutput for MockDocumentOutput {
    type Finished = Vec<u8>;

    fn append(&mut self, block: &Block) {
        self.blocks.write().push(block.clone());
    }

    fn finish(self) -> Result<Vec<u8>, QuizError> {
        if self.fail_on_finish {
            return Err(QuizError::DocumentWrite("disk full".into()));
        }
        Ok(self.texts().join("\n").into_bytes())
    }
}
