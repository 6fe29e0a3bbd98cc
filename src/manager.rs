use alloc::vec::Vec;

use crate::cache::MeasurementCache;
use crate::{
    Align, Error, ItemSize, OffsetQuery, Options, OptionsUpdate, SizeAndPosition, VisibleItem,
    VisibleRange, VisibleRangeQuery,
};

/// Tracks the size and offset of every item in a virtualized list.
///
/// Queries that take `&mut self` may measure items as a side effect: with a generator
/// source, asking about index `i` invokes the generator for every unmeasured index up to `i`
/// and caches the results. Repeating a query with unchanged inputs returns the same answer
/// without measuring again.
///
/// Constant and sequence sources are fully laid out by [`Self::new`] and
/// [`Self::update_config`], so their queries never measure.
///
/// A manager has a single owner; wrap it in a lock if several threads must query it.
#[derive(Clone, Debug)]
pub struct SizeAndPositionManager {
    options: Options,
    cache: MeasurementCache,
}

impl SizeAndPositionManager {
    /// Creates a manager and, for eager sources, lays out every item.
    ///
    /// Fails if any eager size or the estimated size is `NaN`, infinite or negative. Eager
    /// sizes are checked first, so an invalid constant is reported as a measurement error even
    /// though the default estimate is derived from it.
    pub fn new(options: Options) -> Result<Self, Error> {
        let cache = Self::initial_cache(&options)?;
        options.validate()?;
        vdebug!(
            item_count = options.item_count,
            just_in_time = options.item_size.is_just_in_time(),
            estimated_item_size = options.estimated_item_size,
            "SizeAndPositionManager::new"
        );
        Ok(Self { options, cache })
    }

    fn initial_cache(options: &Options) -> Result<MeasurementCache, Error> {
        if options.item_size.is_just_in_time() {
            Ok(MeasurementCache::new())
        } else {
            MeasurementCache::eager(&options.item_size, options.item_count)
        }
    }

    /// Replaces every field set in `update` and reprocesses the configuration.
    ///
    /// - A different size source discards all measurements.
    /// - A new item count re-lays out eager sources and drops generator measurements past the
    ///   new end.
    /// - A new estimate only changes [`Self::total_size`].
    ///
    /// On error the manager is left unchanged.
    pub fn update_config(&mut self, update: OptionsUpdate) -> Result<(), Error> {
        if update.is_empty() {
            return Ok(());
        }

        let next = self.options.merged(update);
        let source_changed = !next.item_size.same_source(&self.options.item_size);
        let count_changed = next.item_count != self.options.item_count;

        let relaid = if source_changed || (count_changed && !next.item_size.is_just_in_time()) {
            Some(Self::initial_cache(&next)?)
        } else {
            None
        };
        next.validate()?;
        vdebug!(
            item_count = next.item_count,
            source_changed,
            count_changed,
            estimated_item_size = next.estimated_item_size,
            "SizeAndPositionManager::update_config"
        );

        if let Some(cache) = relaid {
            self.cache = cache;
        } else if count_changed {
            self.cache.truncate(next.item_count);
        }
        self.options = next;
        Ok(())
    }

    pub fn set_item_size(&mut self, item_size: impl Into<ItemSize>) -> Result<(), Error> {
        self.update_config(OptionsUpdate::new().item_size(item_size))
    }

    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), Error> {
        self.update_config(OptionsUpdate::new().item_count(item_count))
    }

    pub fn set_estimated_item_size(&mut self, estimated_item_size: f64) -> Result<(), Error> {
        self.update_config(OptionsUpdate::new().estimated_item_size(estimated_item_size))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn item_size(&self) -> &ItemSize {
        &self.options.item_size
    }

    /// Number of addressable items.
    ///
    /// This is the declared count, except for a sequence source with fewer entries, which
    /// truncates it.
    pub fn item_count(&self) -> usize {
        self.options.item_size.available(self.options.item_count)
    }

    pub fn estimated_item_size(&self) -> f64 {
        self.options.estimated_item_size
    }

    pub fn is_just_in_time(&self) -> bool {
        self.options.item_size.is_just_in_time()
    }

    /// Highest index whose measurement is cached, or `None` if nothing is measured.
    ///
    /// Eager sources are always fully measured.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.cache.len().checked_sub(1)
    }

    /// Size and offset of the item at [`Self::last_measured_index`], or all zeros.
    pub fn size_and_position_of_last_measured_item(&self) -> SizeAndPosition {
        self.cache.last().unwrap_or_default()
    }

    /// Returns the size and offset of `index`, measuring up to it if needed.
    pub fn size_and_position_for_index(&mut self, index: usize) -> Result<SizeAndPosition, Error> {
        let count = self.item_count();
        if index >= count {
            return Err(Error::IndexOutOfRange { index, count });
        }
        self.cache.fill_to(&self.options.item_size, index)
    }

    /// Total extent of the list.
    ///
    /// Exact for eager sources. For a generator source, items past
    /// [`Self::last_measured_index`] count as [`Self::estimated_item_size`] each, so the value
    /// converges as measurement advances.
    pub fn total_size(&self) -> f64 {
        // Eager caches cover every item, leaving no estimated remainder.
        let unmeasured = self.item_count().saturating_sub(self.cache.len());
        self.cache.end_offset() + unmeasured as f64 * self.options.estimated_item_size
    }

    /// Marks `index` and every item after it as unmeasured.
    ///
    /// Nothing is recomputed until a query needs the range again. Lowers
    /// [`Self::last_measured_index`] to `index - 1` at most; never raises it. Eager sources
    /// cannot change size without a config update, so this is a no-op for them.
    pub fn reset_item(&mut self, index: usize) {
        if !self.is_just_in_time() {
            return;
        }
        vtrace!(index, measured = self.cache.len(), "reset_item");
        self.cache.truncate(index);
    }

    /// Discards every generator measurement.
    pub fn reset_measurements(&mut self) {
        self.reset_item(0);
    }

    /// Computes the scroll offset that places `query.target_index` according to
    /// `query.align`, clamped to `[0, total_size - container_size]`.
    ///
    /// A non-positive container size yields `0`.
    pub fn updated_offset_for_index(&mut self, query: OffsetQuery) -> Result<f64, Error> {
        if query.container_size <= 0.0 {
            return Ok(0.0);
        }

        let datum = self.size_and_position_for_index(query.target_index)?;
        let max_offset = datum.offset;
        let min_offset = max_offset - query.container_size + datum.size;

        let ideal = match query.align {
            Align::Start => max_offset,
            Align::End => min_offset,
            Align::Center => max_offset - (query.container_size - datum.size) / 2.0,
            Align::Auto => min_offset.max(max_offset.min(query.current_offset)),
        };

        // Measured after the target so the estimate reflects it.
        let total = self.total_size();
        Ok(0.0_f64.max((total - query.container_size).min(ideal)))
    }

    /// Same as [`Self::updated_offset_for_index`], but a target outside the list is replaced
    /// by index `0` and an empty list yields `0`.
    pub fn offset_for_index(&mut self, mut query: OffsetQuery) -> Result<f64, Error> {
        if self.item_count() == 0 {
            return Ok(0.0);
        }
        if query.target_index >= self.item_count() {
            query.target_index = 0;
        }
        self.updated_offset_for_index(query)
    }

    /// Returns the inclusive range of items covering
    /// `[query.offset, query.offset + query.container_size)`, padded by
    /// `query.overscan_count` on both ends and clamped to the list.
    ///
    /// Returns `None` when the total size is `0`.
    pub fn visible_range(
        &mut self,
        query: VisibleRangeQuery,
    ) -> Result<Option<VisibleRange>, Error> {
        if query.offset.is_nan() {
            return Err(Error::InvalidOffset {
                offset: query.offset,
            });
        }
        if self.total_size() <= 0.0 {
            return Ok(None);
        }
        let Some(mut start) = self.find_nearest_item(query.offset)? else {
            return Ok(None);
        };

        let last = self.item_count() - 1;
        let max_offset = query.offset + query.container_size;
        let mut offset = self.size_and_position_for_index(start)?.end();
        let mut stop = start;
        while offset < max_offset && stop < last {
            stop += 1;
            offset += self.size_and_position_for_index(stop)?.size;
        }

        start = start.saturating_sub(query.overscan_count);
        stop = stop.saturating_add(query.overscan_count).min(last);
        Ok(Some(VisibleRange { start, stop }))
    }

    /// Calls `f` for every item of [`Self::visible_range`], in ascending order.
    pub fn for_each_visible_item(
        &mut self,
        query: VisibleRangeQuery,
        mut f: impl FnMut(VisibleItem),
    ) -> Result<(), Error> {
        let Some(range) = self.visible_range(query)? else {
            return Ok(());
        };
        for index in range.start..=range.stop {
            let SizeAndPosition { size, offset } = self.size_and_position_for_index(index)?;
            f(VisibleItem {
                index,
                size,
                offset,
            });
        }
        Ok(())
    }

    /// Collects the items of [`Self::visible_range`] into `out` (clears `out` first).
    ///
    /// Prefer [`Self::for_each_visible_item`] with a reused buffer in hot paths.
    pub fn collect_visible_items(
        &mut self,
        query: VisibleRangeQuery,
        out: &mut Vec<VisibleItem>,
    ) -> Result<(), Error> {
        out.clear();
        self.for_each_visible_item(query, |item| out.push(item))
    }

    /// Returns the greatest index whose offset is `<= offset`.
    ///
    /// Negative offsets (elastic overscroll) are treated as `0` and offsets past the end map
    /// to the last item. Returns `None` for an empty list.
    ///
    /// Within already measured items this is a binary search. Past them, a generator source
    /// is probed with exponentially growing steps before a bounded binary search, so a far
    /// jump measures at most about twice as many items as lie before the target, never the
    /// whole list.
    pub fn find_nearest_item(&mut self, offset: f64) -> Result<Option<usize>, Error> {
        if offset.is_nan() {
            return Err(Error::InvalidOffset { offset });
        }
        if self.item_count() == 0 {
            return Ok(None);
        }

        let offset = offset.max(0.0);
        let last_measured = self.size_and_position_of_last_measured_item();
        let last_measured_index = self.last_measured_index().unwrap_or(0);

        let index = if !self.is_just_in_time() || last_measured.offset >= offset {
            self.binary_search(0, last_measured_index, offset)?
        } else {
            self.exponential_search(last_measured_index, offset)?
        };
        Ok(Some(index))
    }

    fn binary_search(
        &mut self,
        mut low: usize,
        mut high: usize,
        offset: f64,
    ) -> Result<usize, Error> {
        while low <= high {
            let middle = low + (high - low) / 2;
            let current = self.size_and_position_for_index(middle)?.offset;

            if current < offset {
                low = middle + 1;
            } else if current > offset {
                if middle == 0 {
                    break;
                }
                high = middle - 1;
            } else {
                return Ok(middle);
            }
        }

        Ok(low.saturating_sub(1))
    }

    fn exponential_search(&mut self, start: usize, offset: f64) -> Result<usize, Error> {
        let count = self.item_count();
        let mut previous = start;
        let mut index = start;
        let mut interval = 1usize;

        while index < count && self.size_and_position_for_index(index)?.offset < offset {
            previous = index;
            index = index.saturating_add(interval);
            interval = interval.saturating_mul(2);
        }

        self.binary_search(previous, index.min(count - 1), offset)
    }
}
