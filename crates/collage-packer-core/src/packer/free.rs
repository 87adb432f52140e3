use serde::{Deserialize, Serialize};

/// A leftover rectangular gap trailing a row (right-edge index) or a page
/// (bottom-edge index), anchored at its top-left corner.
///
/// `available` is the one free dimension the owning index is sorted by:
/// remaining width for right-edge gaps, remaining height for bottom-edge
/// gaps. A gap lives in exactly one index at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeSpace {
    pub available: f32,
    pub x: f32,
    pub y: f32,
    pub page: usize,
}

/// Sorted vector of free spaces, ascending by `available`, supporting the
/// best-fit lookup "smallest gap that still fits".
#[derive(Debug, Clone, Default)]
pub struct FreeIndex {
    entries: Vec<FreeSpace>,
}

impl FreeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts after the last entry with an equal key, keeping the order
    /// stable for equal `available` values.
    pub fn insert(&mut self, space: FreeSpace) {
        let at = self
            .entries
            .partition_point(|e| e.available <= space.available);
        self.entries.insert(at, space);
    }

    /// Index of the first entry with `available >= need`; `len()` when no
    /// entry qualifies.
    pub fn first_at_least(&self, need: f32) -> usize {
        self.entries.partition_point(|e| e.available < need)
    }

    pub fn get(&self, index: usize) -> FreeSpace {
        self.entries[index]
    }

    pub fn remove(&mut self, index: usize) -> FreeSpace {
        self.entries.remove(index)
    }

    /// Overwrites an entry in place. The caller must keep `available`
    /// unchanged, otherwise the ordering would break.
    pub fn replace(&mut self, index: usize, space: FreeSpace) {
        debug_assert!(self.entries[index].available == space.available);
        self.entries[index] = space;
    }

    pub fn into_entries(self) -> Vec<FreeSpace> {
        self.entries
    }

    pub fn entries(&self) -> &[FreeSpace] {
        &self.entries
    }
}
