use std::collections::HashMap;

use crate::blocks::BlockId;

type ActiveCallback = Box<dyn FnMut(bool) + Send>;

/// Tracks which block is active (hovered, showing its controls).
///
/// One registry belongs to one editor session. Blocks register a callback
/// that is told when they gain or lose the active state; at most one block
/// is active at a time. While a block menu is open the active block stays
/// put.
#[derive(Default)]
pub struct ActiveBlockRegistry {
    blocks: HashMap<BlockId, ActiveCallback>,
    active: Option<BlockId>,
    menu_open: bool,
}

impl ActiveBlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a block. A second registration for the same id is ignored.
    pub fn register(&mut self, id: BlockId, on_active: impl FnMut(bool) + Send + 'static) {
        self.blocks
            .entry(id)
            .or_insert_with(|| Box::new(on_active) as ActiveCallback);
    }

    pub fn unregister(&mut self, id: BlockId) {
        self.blocks.remove(&id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Makes `next` the active block, notifying the previous and new one.
    pub fn activate(&mut self, next: Option<BlockId>) {
        if self.menu_open && self.active.is_some() {
            return;
        }
        if next == self.active {
            return;
        }

        if let Some(callback) = self.active.and_then(|prev| self.blocks.get_mut(&prev)) {
            callback(false);
        }
        if let Some(callback) = next.and_then(|id| self.blocks.get_mut(&id)) {
            callback(true);
        }
        self.active = next;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn active(&self) -> Option<BlockId> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl std::fmt::Debug for ActiveBlockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveBlockRegistry")
            .field("blocks", &self.blocks.len())
            .field("active", &self.active)
            .field("menu_open", &self.menu_open)
            .finish()
    }
}
