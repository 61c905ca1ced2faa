//! Value types shared by the sampler, the shapes and the writers.

use std::fmt;

use glam::IVec2;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::errors::RangeError;

/// A bound type that can be drawn uniformly from a closed interval.
pub trait Bound: SampleUniform + PartialOrd + Copy + fmt::Display {
    /// Whether the value can serve as an interval endpoint
    fn is_usable(self) -> bool;

    /// Whether `[low, high]` is narrow enough to draw from
    fn span_is_usable(_low: Self, _high: Self) -> bool {
        true
    }
}

impl Bound for i32 {
    fn is_usable(self) -> bool {
        true
    }
}

impl Bound for u32 {
    fn is_usable(self) -> bool {
        true
    }
}

impl Bound for f64 {
    fn is_usable(self) -> bool {
        self.is_finite()
    }

    // Uniform sampling scales the width by `1 / (1 - EPSILON)`, which must
    // stay finite too
    fn span_is_usable(low: Self, high: Self) -> bool {
        ((high - low) / (1.0 - f64::EPSILON)).is_finite()
    }
}

/// Closed interval `[low, high]` bounding one sampled attribute.
///
/// `new` is unchecked so presets can be `const`; the interval is validated
/// every time it is sampled, and `try_new` validates up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSpec<T> {
    low: T,
    high: T,
}

/// Integer attribute bounds
pub type IntRange = RangeSpec<i32>;
/// Real attribute bounds
pub type RealRange = RangeSpec<f64>;

impl<T: Bound> RangeSpec<T> {
    /// Create an interval without checking it.
    #[inline]
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }

    /// Create an interval, rejecting `low > high`, non-finite bounds and
    /// real intervals too wide to sample.
    pub fn try_new(low: T, high: T) -> Result<Self, RangeError> {
        let spec = Self { low, high };
        spec.check("range")?;
        Ok(spec)
    }

    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Whether `value` lies within the interval (both ends inclusive)
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Validate the interval, naming `field` in the error.
    pub fn check(&self, field: &'static str) -> Result<(), RangeError> {
        // `!(low <= high)` also rejects NaN bounds
        if !self.low.is_usable()
            || !self.high.is_usable()
            || !(self.low <= self.high)
            || !T::span_is_usable(self.low, self.high)
        {
            return Err(RangeError::InvalidRange {
                field,
                low: self.low.to_string(),
                high: self.high.to_string(),
            });
        }
        Ok(())
    }

    /// Draw one value uniformly from `[low, high]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<T, RangeError> {
        self.sample_field(rng, "range")
    }

    pub(crate) fn sample_field<R: Rng>(
        &self,
        rng: &mut R,
        field: &'static str,
    ) -> Result<T, RangeError> {
        self.check(field)?;
        Ok(rng.gen_range(self.low..=self.high))
    }
}

impl<T: fmt::Display> fmt::Display for RangeSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.low, self.high)
    }
}

/// Fill colour as three channels.
///
/// Channels are kept as sampled; the default ranges keep them in `0..=255`
/// but nothing here clamps them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Fill opacity; displays rounded to one decimal place.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Opacity(pub f64);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(1.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Width and height of a drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize(pub IVec2);

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self(IVec2::new(width, height))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.0.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.0.y
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn int_samples_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = IntRange::new(-3, 12);
        for _ in 0..10_000 {
            let v = spec.sample(&mut rng).unwrap();
            assert!(spec.contains(v), "{v} outside {spec}");
        }
    }

    #[test]
    fn real_samples_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let spec = RealRange::new(0.25, 0.75);
        for _ in 0..10_000 {
            let v = spec.sample(&mut rng).unwrap();
            assert!((0.25..=0.75).contains(&v), "{v} outside {spec}");
        }
    }

    #[test]
    fn colour_channel_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = IntRange::new(0, 255);
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..100_000 {
            let v = spec.sample(&mut rng).unwrap();
            assert!((0..=255).contains(&v));
            saw_low |= v == 0;
            saw_high |= v == 255;
        }
        assert!(saw_low && saw_high);
    }

    #[test]
    fn degenerate_range_returns_its_only_value() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(IntRange::new(5, 5).sample(&mut rng).unwrap(), 5);
        assert_eq!(RealRange::new(0.5, 0.5).sample(&mut rng).unwrap(), 0.5);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = IntRange::new(10, 2).sample(&mut rng).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidRange {
                field: "range",
                low: "10".into(),
                high: "2".into(),
            }
        );
        assert!(IntRange::try_new(10, 2).is_err());
    }

    #[test]
    fn non_finite_real_bounds_are_rejected() {
        assert!(RealRange::try_new(f64::NAN, 1.0).is_err());
        assert!(RealRange::try_new(0.0, f64::INFINITY).is_err());
        assert!(RealRange::try_new(0.0, 1.0).is_ok());
    }

    #[test]
    fn overflowing_real_width_is_rejected_before_sampling() {
        let spec = RealRange::new(-f64::MAX, f64::MAX);
        assert!(matches!(
            spec.check("opacity"),
            Err(RangeError::InvalidRange { field: "opacity", .. })
        ));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spec.sample(&mut rng).is_err());
        assert!(RealRange::try_new(0.0, f64::MAX).is_err());

        let wide = RealRange::try_new(-1e300, 1e300).unwrap();
        assert!(wide.contains(wide.sample(&mut rng).unwrap()));
    }

    #[test]
    fn opacity_displays_one_decimal() {
        assert_eq!(Opacity(0.0).to_string(), "0.0");
        assert_eq!(Opacity(0.46).to_string(), "0.5");
        assert_eq!(Opacity(0.04).to_string(), "0.0");
        assert_eq!(Opacity::OPAQUE.to_string(), "1.0");
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(12, 0, 255).to_string(), "rgb(12,0,255)");
    }
}
