use crate::models::{Block, Heading};

use super::{decode::Value, error::ParseError};

#[derive(Debug)]
enum BuilderState {
    NoHeadingYet,
    InBlock(Block),
}

/// Folds decoded values into blocks, in line order.
///
/// Headings close the current block and open a new one; items are appended to
/// the open block. Heading uniqueness is not checked here.
#[derive(Debug)]
pub struct BlockBuilder {
    state: BuilderState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: BuilderState::NoHeadingYet,
            out: vec![],
        }
    }

    pub fn push(&mut self, line_no: usize, value: Value) -> Result<(), ParseError> {
        match value {
            Value::Heading(heading) => {
                self.open_block(heading);
                Ok(())
            }
            Value::Item(item) => match &mut self.state {
                BuilderState::InBlock(block) => {
                    block.items.push(item);
                    Ok(())
                }
                BuilderState::NoHeadingYet => {
                    Err(ParseError::ItemBeforeHeading { line: line_no })
                }
            },
            Value::Unknown => Err(ParseError::UnknownMarkup { line: line_no }),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_block();
        self.out
    }

    fn open_block(&mut self, heading: Heading) {
        self.flush_block();
        self.state = BuilderState::InBlock(Block::new(heading, vec![]));
    }

    fn flush_block(&mut self) {
        if let BuilderState::InBlock(block) =
            std::mem::replace(&mut self.state, BuilderState::NoHeadingYet)
        {
            self.out.push(block);
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
