use super::task::Block;

/// An ordered list of blocks with unique heading texts.
///
/// Built by the parser or assembled by callers; `get_or_insert_block` is the
/// supported way to add blocks without breaking heading uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Finds a block by exact, case-sensitive heading text.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name() == name)
    }

    pub fn block_mut(&mut self, name: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.name() == name)
    }

    /// Returns the block named `name`, appending an empty level-1 block first
    /// if there is none.
    pub fn get_or_insert_block(&mut self, name: &str) -> &mut Block {
        let index = match self.blocks.iter().position(|b| b.name() == name) {
            Some(index) => index,
            None => {
                log::debug!("Creating block '{name}'");
                self.blocks.push(Block::named(name));
                self.blocks.len() - 1
            }
        };
        &mut self.blocks[index]
    }

    pub fn heading_texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.name())
    }
}
