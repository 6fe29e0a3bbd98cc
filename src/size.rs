use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::Error;

/// A size callback invoked on demand with an item index.
pub type SizeGenerator = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Where item sizes come from.
///
/// `Constant` and `Sequence` are laid out eagerly whenever the configuration changes.
/// `Generator` is measured just in time: it is called once per index, in ascending order, the
/// first time a query needs that index, and its result is cached until the index is reset.
///
/// Cloning is cheap: sequences and generators are shared behind `Arc`s.
#[derive(Clone)]
pub enum ItemSize {
    /// Every item has the same size.
    Constant(f64),
    /// `sizes[i]` is the size of item `i`. A sequence shorter than the item count truncates
    /// the list to the available entries.
    Sequence(Arc<[f64]>),
    /// Sizes computed on demand, e.g. measured at render time.
    Generator(SizeGenerator),
}

impl ItemSize {
    pub fn constant(size: f64) -> Self {
        Self::Constant(size)
    }

    pub fn sequence(sizes: impl Into<Arc<[f64]>>) -> Self {
        Self::Sequence(sizes.into())
    }

    pub fn generator(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Generator(Arc::new(f))
    }

    /// Returns `true` for sources that are measured lazily.
    pub fn is_just_in_time(&self) -> bool {
        matches!(self, Self::Generator(_))
    }

    /// Returns `true` if `other` describes the same sizes as `self`.
    ///
    /// Constants compare by value; sequences and generators compare by `Arc` identity, so a
    /// freshly allocated but equal sequence counts as a different source.
    pub fn same_source(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(a), Self::Constant(b)) => a.to_bits() == b.to_bits(),
            (Self::Sequence(a), Self::Sequence(b)) => Arc::ptr_eq(a, b),
            (Self::Generator(a), Self::Generator(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of items this source can actually describe when `item_count` are declared.
    pub(crate) fn available(&self, item_count: usize) -> usize {
        match self {
            Self::Sequence(sizes) => item_count.min(sizes.len()),
            Self::Constant(_) | Self::Generator(_) => item_count,
        }
    }

    /// Produces the validated size of `index`.
    ///
    /// Callers keep `index` below [`Self::available`].
    pub(crate) fn measure(&self, index: usize) -> Result<f64, Error> {
        let value = match self {
            Self::Constant(size) => *size,
            Self::Sequence(sizes) => sizes[index],
            Self::Generator(f) => f(index),
        };
        validate_size(index, value)
    }
}

fn validate_size(index: usize, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidMeasurement { index, value })
    }
}

impl From<f64> for ItemSize {
    fn from(size: f64) -> Self {
        Self::Constant(size)
    }
}

impl From<Vec<f64>> for ItemSize {
    fn from(sizes: Vec<f64>) -> Self {
        Self::Sequence(sizes.into())
    }
}

impl fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(size) => f.debug_tuple("Constant").field(size).finish(),
            Self::Sequence(sizes) => f
                .debug_struct("Sequence")
                .field("len", &sizes.len())
                .finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}
