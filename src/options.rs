use crate::{Error, ItemSize};

/// Estimated item size used when none is configured and the source is not a constant.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: f64 = 50.0;

/// Configuration for [`crate::SizeAndPositionManager`].
#[derive(Clone, Debug)]
pub struct Options {
    pub item_size: ItemSize,
    /// Declared number of items. A [`ItemSize::Sequence`] with fewer entries truncates it.
    pub item_count: usize,
    /// Stand-in size for items a generator source has not measured yet. Only affects the
    /// estimated total size.
    pub estimated_item_size: f64,
}

impl Options {
    /// Creates options with a derived estimate: the constant size itself for
    /// [`ItemSize::Constant`], [`DEFAULT_ESTIMATED_ITEM_SIZE`] otherwise.
    pub fn new(item_count: usize, item_size: impl Into<ItemSize>) -> Self {
        let item_size = item_size.into();
        let estimated_item_size = match item_size {
            ItemSize::Constant(size) => size,
            ItemSize::Sequence(_) | ItemSize::Generator(_) => DEFAULT_ESTIMATED_ITEM_SIZE,
        };
        Self {
            item_size,
            item_count,
            estimated_item_size,
        }
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_size(mut self, item_size: impl Into<ItemSize>) -> Self {
        self.item_size = item_size.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        let value = self.estimated_item_size;
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidEstimate { value })
        }
    }

    /// Returns a copy of `self` with every field set in `update` replaced.
    pub(crate) fn merged(&self, update: OptionsUpdate) -> Self {
        Self {
            item_size: update.item_size.unwrap_or_else(|| self.item_size.clone()),
            item_count: update.item_count.unwrap_or(self.item_count),
            estimated_item_size: update
                .estimated_item_size
                .unwrap_or(self.estimated_item_size),
        }
    }
}

/// A partial [`Options`] for [`crate::SizeAndPositionManager::update_config`].
///
/// Unset fields keep their current value.
#[derive(Clone, Debug, Default)]
pub struct OptionsUpdate {
    pub item_size: Option<ItemSize>,
    pub item_count: Option<usize>,
    pub estimated_item_size: Option<f64>,
}

impl OptionsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_size(mut self, item_size: impl Into<ItemSize>) -> Self {
        self.item_size = Some(item_size.into());
        self
    }

    pub fn item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = Some(estimated_item_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item_size.is_none() && self.item_count.is_none() && self.estimated_item_size.is_none()
    }
}
