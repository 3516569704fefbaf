use alloc::sync::Arc;

use crate::offset::{OffsetCurve, TransformFn, ZoomTransform, default_offset_curve};
use crate::{Axis, Error, Result, Size, Transform, WrapMode};

/// Configuration for [`crate::Carousel`].
///
/// Strategy closures live in `Arc`s, so cloning and tweaking a few fields for
/// `Carousel::update_options` does not reallocate them.
pub struct CarouselOptions {
    pub axis: Axis,
    pub wrap_mode: WrapMode,

    /// Maximum number of items on each side of the center item when idle.
    ///
    /// While scrolling one extra item per side is laid out to avoid pop-in.
    pub max_visible_items: usize,

    pub item_count: usize,

    /// Uniform item size. Only the extent along `axis` drives scrolling; the cross extent is used
    /// to center items across the scroll axis.
    pub item_size: Size,

    /// Optional per-item visual transform (scale/translation).
    pub transform_fn: Option<TransformFn>,

    /// Easing curve turning distance-from-center into pixel offsets.
    pub offset_curve: OffsetCurve,
}

impl CarouselOptions {
    pub const DEFAULT_MAX_VISIBLE_ITEMS: usize = 2;

    pub fn new(axis: Axis, item_count: usize, item_size: Size) -> Self {
        Self {
            axis,
            wrap_mode: WrapMode::Clamped,
            max_visible_items: Self::DEFAULT_MAX_VISIBLE_ITEMS,
            item_count,
            item_size,
            transform_fn: None,
            offset_curve: Arc::new(default_offset_curve),
        }
    }

    /// Builds options from a raw integer axis as stored by some hosts.
    pub fn from_raw_axis(axis: i32, item_count: usize, item_size: Size) -> Result<Self> {
        Ok(Self::new(Axis::try_from(axis)?, item_count, item_size))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_visible_items == 0 {
            return Err(Error::InvalidMaxVisibleItems);
        }
        Ok(())
    }

    /// Extent of one item along the scroll axis.
    pub fn item_extent(&self) -> u32 {
        self.item_size.main(self.axis)
    }

    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub fn with_circular(self, circular: bool) -> Self {
        self.with_wrap_mode(if circular {
            WrapMode::Circular
        } else {
            WrapMode::Clamped
        })
    }

    pub fn with_max_visible_items(mut self, max_visible_items: usize) -> Self {
        self.max_visible_items = max_visible_items;
        self
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_size(mut self, item_size: Size) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_transform_fn(
        mut self,
        transform_fn: Option<impl Fn(f32, Axis, Size) -> Option<Transform> + Send + Sync + 'static>,
    ) -> Self {
        self.transform_fn = transform_fn.map(|f| Arc::new(f) as _);
        self
    }

    /// Enables the default zoom transform with the given scale multiplier.
    pub fn with_zoom(mut self, scale_multiplier: f32) -> Self {
        self.transform_fn = Some(ZoomTransform::new(scale_multiplier).into_transform_fn());
        self
    }

    pub fn with_offset_curve(
        mut self,
        offset_curve: impl Fn(f32, usize) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.offset_curve = Arc::new(offset_curve);
        self
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            wrap_mode: self.wrap_mode,
            max_visible_items: self.max_visible_items,
            item_count: self.item_count,
            item_size: self.item_size,
            transform_fn: self.transform_fn.clone(),
            offset_curve: Arc::clone(&self.offset_curve),
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("axis", &self.axis)
            .field("wrap_mode", &self.wrap_mode)
            .field("max_visible_items", &self.max_visible_items)
            .field("item_count", &self.item_count)
            .field("item_size", &self.item_size)
            .field("transform_fn", &self.transform_fn.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}
