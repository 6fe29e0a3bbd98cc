/// Where a target item should land in the viewport after a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item flush with the leading edge.
    Start,
    Center,
    /// Item flush with the trailing edge.
    End,
    /// Leave the offset alone if the item is fully visible, otherwise scroll the minimum
    /// distance that brings it into view.
    #[default]
    Auto,
}

/// Extent of one item along the scroll axis and its distance from the start of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeAndPosition {
    pub size: f64,
    /// Sum of the sizes of all preceding items.
    pub offset: f64,
}

impl SizeAndPosition {
    /// Offset just past the trailing edge of the item.
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// Inclusive index bounds of the items to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub stop: usize, // inclusive
}

impl VisibleRange {
    /// Number of indices in the range, `0` if `start > stop`.
    pub fn count(&self) -> usize {
        if self.start > self.stop {
            return 0;
        }
        self.stop - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.stop).contains(&index)
    }
}

/// One item of a visible range, ready to be positioned by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    pub index: usize,
    pub size: f64,
    pub offset: f64,
}

/// Number of items rendered past each end of the visible range by
/// [`VisibleRangeQuery::new`].
pub const DEFAULT_OVERSCAN_COUNT: usize = 3;

/// Input of [`crate::SizeAndPositionManager::visible_range`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRangeQuery {
    /// Viewport extent along the scroll axis.
    pub container_size: f64,
    /// Current scroll offset. Negative values (elastic overscroll) behave like `0`.
    pub offset: f64,
    /// Extra items to include before and after the tight range.
    pub overscan_count: usize,
}

impl VisibleRangeQuery {
    pub fn new(container_size: f64, offset: f64) -> Self {
        Self {
            container_size,
            offset,
            overscan_count: DEFAULT_OVERSCAN_COUNT,
        }
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }
}

/// Input of [`crate::SizeAndPositionManager::updated_offset_for_index`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetQuery {
    pub align: Align,
    pub container_size: f64,
    pub current_offset: f64,
    pub target_index: usize,
}

impl OffsetQuery {
    /// Creates a query with [`Align::Auto`] and a current offset of `0`.
    pub fn new(target_index: usize, container_size: f64) -> Self {
        Self {
            align: Align::Auto,
            container_size,
            current_offset: 0.0,
            target_index,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_current_offset(mut self, current_offset: f64) -> Self {
        self.current_offset = current_offset;
        self
    }
}
