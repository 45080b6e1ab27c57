//! Per-kind entity collection
//!
//! Insertion order is spawn order and iteration follows it. Removal is
//! batched: the tick scans a whole registry first, collects doomed indices,
//! then removes them highest-first so earlier indices stay valid.

#[derive(Debug, Clone, Default)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Remove the given indices, tolerating duplicates and any order.
    pub fn remove_batch(&mut self, indices: &mut Vec<usize>) {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        for &idx in indices.iter() {
            self.items.remove(idx);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
