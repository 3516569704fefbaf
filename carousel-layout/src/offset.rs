//! Distance-from-center to pixels, and the optional visual transform.

use alloc::sync::Arc;

use crate::float::{abs, powf, round_half_up, sign};
use crate::{Axis, Size, Transform};

/// Maps `(|distance|, max_visible)` to an eased factor of the half extent.
///
/// This is the single extension point for alternative motion curves.
pub type OffsetCurve = Arc<dyn Fn(f32, usize) -> f32 + Send + Sync>;

/// Computes an optional [`Transform`] for an item from `(distance, axis, item_size)`.
pub type TransformFn = Arc<dyn Fn(f32, Axis, Size) -> Option<Transform> + Send + Sync>;

/// The default two-piece easing curve.
///
/// Items close to the center (`d <= (1/m)^(1/3)`) move quadratically so the selection settles
/// calmly; items further away follow `sqrt(d/m)` and reach their resting place quickly.
pub fn default_offset_curve(abs_distance: f32, max_visible: usize) -> f32 {
    let m = max_visible.max(1) as f32;
    let threshold = powf(1.0 / m, 1.0 / 3.0);
    if abs_distance > threshold {
        powf(abs_distance / m, 0.5)
    } else {
        abs_distance * abs_distance
    }
}

/// Pixel offset from the center line for an item `distance` items away, using the default curve.
///
/// `half_extent` is the free space on one side of the centered item along the scroll axis.
pub fn pixel_offset(distance: f32, max_visible: usize, half_extent: i32) -> i32 {
    pixel_offset_with(default_offset_curve, distance, max_visible, half_extent)
}

/// Same as [`pixel_offset`] with a custom curve.
///
/// The magnitude is rounded before the sign is applied, so the result is exactly odd in
/// `distance`.
pub fn pixel_offset_with(
    curve: impl Fn(f32, usize) -> f32,
    distance: f32,
    max_visible: usize,
    half_extent: i32,
) -> i32 {
    let eased = curve(abs(distance), max_visible);
    let magnitude = round_half_up(half_extent as f32 * eased) as i32;
    sign(distance) as i32 * magnitude
}

/// Scales items down the further they are from the center, keeping them anchored to the outside
/// of the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomTransform {
    /// Scale lost per item of distance. Not clamped: keep `scale_multiplier * (max_visible + 1)`
    /// below `1.0` to keep scales positive.
    pub scale_multiplier: f32,
}

impl ZoomTransform {
    pub const DEFAULT_SCALE_MULTIPLIER: f32 = 0.17;

    pub fn new(scale_multiplier: f32) -> Self {
        Self { scale_multiplier }
    }

    pub fn transform(&self, distance: f32, axis: Axis, item_size: Size) -> Transform {
        let scale = 1.0 - self.scale_multiplier * abs(distance);
        // Scaling shrinks the item towards its own center; push it back outwards.
        let shift = sign(distance) * item_size.main(axis) as f32 * (1.0 - scale) / 2.0;
        let (translate_x, translate_y) = match axis {
            Axis::Horizontal => (shift, 0.0),
            Axis::Vertical => (0.0, shift),
        };
        Transform {
            scale_x: scale,
            scale_y: scale,
            translate_x,
            translate_y,
        }
    }

    /// Wraps this transform for [`crate::CarouselOptions::transform_fn`].
    pub fn into_transform_fn(self) -> TransformFn {
        Arc::new(move |distance, axis, item_size| Some(self.transform(distance, axis, item_size)))
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE_MULTIPLIER)
    }
}
