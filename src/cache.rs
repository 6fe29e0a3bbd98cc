use alloc::vec::Vec;

use crate::{Error, ItemSize, SizeAndPosition};

/// Per-index measurements, stored densely from index `0`.
///
/// The cache is always a contiguous prefix: entry `i` exists iff `i < len()`. Offsets are the
/// running sum of the sizes before them, so dropping a suffix never invalidates the rest.
#[derive(Clone, Debug, Default)]
pub(crate) struct MeasurementCache {
    entries: Vec<SizeAndPosition>,
}

impl MeasurementCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lays out the first `count` items of an eager source in one pass.
    pub(crate) fn eager(source: &ItemSize, count: usize) -> Result<Self, Error> {
        let available = source.available(count);
        if available < count {
            vwarn!(
                declared = count,
                available,
                "size sequence shorter than item count; truncating"
            );
        }

        let mut cache = Self {
            entries: Vec::with_capacity(available),
        };
        for i in 0..available {
            cache.push(source.measure(i)?);
        }
        Ok(cache)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<SizeAndPosition> {
        self.entries.get(index).copied()
    }

    pub(crate) fn last(&self) -> Option<SizeAndPosition> {
        self.entries.last().copied()
    }

    /// Offset just past the last measured item, `0` when empty.
    pub(crate) fn end_offset(&self) -> f64 {
        self.last().map_or(0.0, |last| last.end())
    }

    fn push(&mut self, size: f64) {
        let offset = self.end_offset();
        self.entries.push(SizeAndPosition { size, offset });
    }

    /// Returns the entry for `index`, measuring every missing index up to it (ascending,
    /// once each) with `source`.
    ///
    /// If `source` fails, entries measured before the failing index stay cached.
    pub(crate) fn fill_to(
        &mut self,
        source: &ItemSize,
        index: usize,
    ) -> Result<SizeAndPosition, Error> {
        if let Some(entry) = self.get(index) {
            return Ok(entry);
        }

        vtrace!(from = self.len(), to = index, "measure");
        self.entries.reserve(index + 1 - self.len());
        while self.len() <= index {
            let size = source.measure(self.len())?;
            self.push(size);
        }
        Ok(self.entries[index])
    }

    /// Drops every entry at or after `len`. Never grows the cache.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}
