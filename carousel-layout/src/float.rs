//! `f32` helpers that work with either `std` or `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("carousel-layout requires either the `std` or the `libm` feature");

#[cfg(feature = "std")]
pub(crate) fn floor(x: f32) -> f32 {
    x.floor()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn floor(x: f32) -> f32 {
    libm::floorf(x)
}

#[cfg(feature = "std")]
pub(crate) fn powf(x: f32, n: f32) -> f32 {
    x.powf(n)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn powf(x: f32, n: f32) -> f32 {
    libm::powf(x, n)
}

pub(crate) fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

/// Sign with `0.0` for zero (unlike `f32::signum`, which returns `1.0` for `+0.0`).
pub(crate) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rounds half up: `0.5 -> 1`, `-0.5 -> 0`.
pub(crate) fn round_half_up(x: f32) -> f32 {
    floor(x + 0.5)
}
