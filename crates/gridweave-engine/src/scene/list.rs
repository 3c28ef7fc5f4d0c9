use serde::Serialize;

use super::DrawInstruction;

/// Recorded draw stream for a frame.
///
/// Insertion order is paint order. A list is built completely before any of it
/// reaches a backend, so a failed frame never leaves half a list behind.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    items: Vec<DrawInstruction>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, instruction: DrawInstruction) {
        self.items.push(instruction);
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawInstruction] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawInstruction> {
        self.items.iter()
    }

    /// Serialized instruction stream. Equal lists give equal bytes.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawInstruction;
    type IntoIter = std::slice::Iter<'a, DrawInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
