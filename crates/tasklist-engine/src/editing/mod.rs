/*!
 * # Editing Commands
 *
 * Block-level edits applied by the command line and the interactive editor.
 *
 * All edits are expressed as a [`Cmd`] and applied with [`Document::apply`],
 * which reports how many items were touched. Commands address blocks by exact
 * heading text and create missing destination blocks as empty level-1 blocks,
 * so heading uniqueness is preserved.
 *
 * Source blocks that are missing or empty turn `Copy`, `Move` and `Set` into
 * no-ops: nothing is created and nothing is reported.
 */

use crate::models::{Document, Item, Priority};

/// An edit to a document's blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Append every item of `source` to `dest`.
    Copy { source: String, dest: String },
    /// Append every item of `source` to `dest`, then clear `source`.
    Move { source: String, dest: String },
    /// Overwrite the checked state and/or priority of every item in `name`.
    Set {
        name: String,
        checked: Option<bool>,
        priority: Option<Priority>,
    },
    /// Replace the items of `name` wholesale.
    ReplaceItems { name: String, items: Vec<Item> },
    /// Append items to `name`.
    AppendItems { name: String, items: Vec<Item> },
}

/// Result of applying a [`Cmd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Number of items copied, moved, updated or written.
    pub affected: usize,
}

impl Document {
    pub fn apply(&mut self, cmd: Cmd) -> Outcome {
        log::debug!("Applying {cmd:?}");
        let affected = match cmd {
            Cmd::Copy { source, dest } => self.copy_items(&source, &dest),
            Cmd::Move { source, dest } => self.move_items(&source, &dest),
            Cmd::Set {
                name,
                checked,
                priority,
            } => self.set_items(&name, checked, priority),
            Cmd::ReplaceItems { name, items } => {
                let count = items.len();
                self.get_or_insert_block(&name).items = items;
                count
            }
            Cmd::AppendItems { name, items } => {
                if items.is_empty() {
                    0
                } else {
                    let count = items.len();
                    self.get_or_insert_block(&name).items.extend(items);
                    count
                }
            }
        };
        Outcome { affected }
    }

    fn source_items(&self, source: &str) -> Option<Vec<Item>> {
        self.block(source)
            .filter(|b| !b.items.is_empty())
            .map(|b| b.items.clone())
    }

    fn copy_items(&mut self, source: &str, dest: &str) -> usize {
        let Some(items) = self.source_items(source) else {
            return 0;
        };
        let count = items.len();
        self.get_or_insert_block(dest).items.extend(items);
        count
    }

    fn move_items(&mut self, source: &str, dest: &str) -> usize {
        if source == dest {
            return 0;
        }
        let count = self.copy_items(source, dest);
        if count > 0
            && let Some(block) = self.block_mut(source)
        {
            block.items.clear();
        }
        count
    }

    fn set_items(
        &mut self,
        name: &str,
        checked: Option<bool>,
        priority: Option<Priority>,
    ) -> usize {
        let Some(block) = self.block_mut(name) else {
            return 0;
        };
        for item in &mut block.items {
            if let Some(checked) = checked {
                item.checked = checked;
            }
            if let Some(priority) = priority {
                item.priority = priority;
            }
        }
        block.items.len()
    }
}
