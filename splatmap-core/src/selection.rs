use std::collections::HashSet;

use crate::error::CoreError;

/// Set of highlighted block indices for a fixed block count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    block_count: usize,
    members: HashSet<usize>,
}

impl Selection {
    /// Empty selection over `block_count` blocks.
    pub fn new(block_count: usize) -> Self {
        Self {
            block_count,
            members: HashSet::new(),
        }
    }

    /// Add `index`. Selecting a member again changes nothing.
    pub fn select(&mut self, index: usize) -> crate::Result<()> {
        if index >= self.block_count {
            return Err(CoreError::InvalidIndex {
                index,
                count: self.block_count,
            });
        }
        self.members.insert(index);
        Ok(())
    }

    /// Remove `index` if present. Returns whether it was a member.
    pub fn deselect(&mut self, index: usize) -> bool {
        self.members.remove(&index)
    }

    /// Flip membership of `index`. Returns the new membership.
    pub fn toggle(&mut self, index: usize) -> crate::Result<bool> {
        if self.deselect(index) {
            return Ok(false);
        }
        self.select(index)?;
        Ok(true)
    }

    pub fn select_all(&mut self) {
        self.members.extend(0..self.block_count);
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Current members, in no particular order.
    pub fn members(&self) -> &HashSet<usize> {
        &self.members
    }

    /// Members in ascending order, for display.
    pub fn sorted(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.members.iter().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }
}
