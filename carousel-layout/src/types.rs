use crate::Error;
use crate::float::round_half_up;

/// The single scroll axis of a carousel. The cross axis is never scrolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Raw value used by hosts that store the axis as an integer.
    pub const HORIZONTAL: i32 = 0;
    /// Raw value used by hosts that store the axis as an integer.
    pub const VERTICAL: i32 = 1;
}

impl TryFrom<i32> for Axis {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            Self::HORIZONTAL => Ok(Self::Horizontal),
            Self::VERTICAL => Ok(Self::Vertical),
            other => Err(Error::InvalidAxis(other)),
        }
    }
}

impl From<Axis> for i32 {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Axis::HORIZONTAL,
            Axis::Vertical => Axis::VERTICAL,
        }
    }
}

/// Whether indices and the scroll offset are bounded or cyclic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// The offset is bounded to `[0, max_offset]`.
    #[default]
    Clamped,
    /// Indices wrap modulo the item count; scrolling is infinite in both directions.
    Circular,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A platform-agnostic size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    pub fn main(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent across `axis`.
    pub fn cross(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }
}

/// One entry of a layout pass.
///
/// `distance` is signed and measured in item sizes: `0.0` is exactly centered, `1.0` is one full
/// item after the center line, fractional values show up mid-scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSlot {
    pub index: usize,
    pub distance: f32,
}

/// Scale and translation applied by the host on top of the base slot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The currently centered item, or none for an empty carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterSelection {
    pub index: Option<usize>,
}

impl CenterSelection {
    pub const NONE: Self = Self { index: None };

    pub const fn at(index: usize) -> Self {
        Self { index: Some(index) }
    }

    pub fn is_none(&self) -> bool {
        self.index.is_none()
    }
}

/// A rectangle in viewport coordinates (`start`/`end` on x, `top`/`bottom` on y).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRect {
    pub start: i32,
    pub top: i32,
    pub end: i32,
    pub bottom: i32,
}

impl ItemRect {
    pub fn width(&self) -> i32 {
        self.end - self.start
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            start: self.start.saturating_add(dx),
            top: self.top.saturating_add(dy),
            end: self.end.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
        }
    }
}

/// A laid out item handed to the host during [`crate::Carousel::layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedItem {
    pub index: usize,
    pub distance: f32,
    /// Position in draw order. Higher values are drawn on top; the center item has the highest.
    pub draw_order: usize,
    /// Base rectangle before any transform.
    pub rect: ItemRect,
    pub transform: Option<Transform>,
}

impl PlacedItem {
    /// The rectangle with the transform's translation applied (rounded to whole pixels).
    ///
    /// Scale is left to the host, which usually applies it around the item's own center.
    pub fn layout_rect(&self) -> ItemRect {
        match self.transform {
            None => self.rect,
            Some(t) => self.rect.translated(
                round_half_up(t.translate_x) as i32,
                round_half_up(t.translate_y) as i32,
            ),
        }
    }
}

/// What a layout pass produced besides the placed items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use = "a changed selection should be dispatched with `Carousel::notify_selection`"]
pub struct LayoutOutcome {
    pub slot_count: usize,
    /// Set when the center selection differs from the previous pass.
    pub selection_change: Option<CenterSelection>,
}
