//! Bounded-random sampling of shape configurations.

use glam::IVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::RangeError;
use crate::shapes::ShapeConfig;
use crate::types::{Bound, IntRange, Opacity, RangeSpec, RealRange, Rgb};

/// One sampling interval per shape attribute.
///
/// `Default` is the fixed-default mode used by the small demos.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtRanges {
    pub discriminator: IntRange,
    pub x: IntRange,
    pub y: IntRange,
    pub radius: IntRange,
    pub rx: IntRange,
    pub ry: IntRange,
    pub width: IntRange,
    pub height: IntRange,
    pub red: IntRange,
    pub green: IntRange,
    pub blue: IntRange,
    pub opacity: RealRange,
}

impl Default for ArtRanges {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ArtRanges {
    pub const DEFAULT: ArtRanges = ArtRanges {
        discriminator: RangeSpec::new(0, 2),
        x: RangeSpec::new(0, 500),
        y: RangeSpec::new(0, 500),
        radius: RangeSpec::new(0, 100),
        rx: RangeSpec::new(10, 30),
        ry: RangeSpec::new(10, 30),
        width: RangeSpec::new(10, 100),
        height: RangeSpec::new(10, 100),
        red: RangeSpec::new(0, 255),
        green: RangeSpec::new(0, 255),
        blue: RangeSpec::new(0, 255),
        opacity: RangeSpec::new(0.0, 1.0),
    };

    /// Green-leaning palette with small ellipses.
    pub const FOREST: ArtRanges = ArtRanges {
        discriminator: RangeSpec::new(0, 2),
        x: RangeSpec::new(0, 1200),
        y: RangeSpec::new(0, 650),
        radius: RangeSpec::new(0, 50),
        rx: RangeSpec::new(5, 20),
        ry: RangeSpec::new(5, 20),
        width: RangeSpec::new(10, 150),
        height: RangeSpec::new(10, 100),
        red: RangeSpec::new(0, 140),
        green: RangeSpec::new(0, 230),
        blue: RangeSpec::new(0, 140),
        opacity: RangeSpec::new(0.0, 1.0),
    };

    /// Red and blue without much green, narrow rectangles.
    pub const DUSK: ArtRanges = ArtRanges {
        discriminator: RangeSpec::new(0, 2),
        x: RangeSpec::new(0, 1200),
        y: RangeSpec::new(0, 650),
        radius: RangeSpec::new(0, 100),
        rx: RangeSpec::new(10, 30),
        ry: RangeSpec::new(10, 30),
        width: RangeSpec::new(10, 50),
        height: RangeSpec::new(10, 100),
        red: RangeSpec::new(0, 200),
        green: RangeSpec::new(0, 100),
        blue: RangeSpec::new(0, 255),
        opacity: RangeSpec::new(0.0, 1.0),
    };

    /// Full colour range and the largest circles.
    pub const VIVID: ArtRanges = ArtRanges {
        discriminator: RangeSpec::new(0, 2),
        x: RangeSpec::new(0, 1200),
        y: RangeSpec::new(0, 650),
        radius: RangeSpec::new(0, 150),
        rx: RangeSpec::new(0, 100),
        ry: RangeSpec::new(10, 30),
        width: RangeSpec::new(10, 100),
        height: RangeSpec::new(10, 100),
        red: RangeSpec::new(0, 255),
        green: RangeSpec::new(0, 255),
        blue: RangeSpec::new(0, 255),
        opacity: RangeSpec::new(0.0, 1.0),
    };

    /// Validate all twelve intervals, reporting the first bad one.
    pub fn validate(&self) -> Result<(), RangeError> {
        self.discriminator.check("discriminator")?;
        self.x.check("x")?;
        self.y.check("y")?;
        self.radius.check("radius")?;
        self.rx.check("rx")?;
        self.ry.check("ry")?;
        self.width.check("width")?;
        self.height.check("height")?;
        self.red.check("red")?;
        self.green.check("green")?;
        self.blue.check("blue")?;
        self.opacity.check("opacity")?;
        Ok(())
    }

    /// Whether every field of `config` lies in its interval
    pub fn admits(&self, config: &ShapeConfig) -> bool {
        self.discriminator.contains(config.discriminator)
            && self.x.contains(config.position.x)
            && self.y.contains(config.position.y)
            && self.radius.contains(config.radius)
            && self.rx.contains(config.radii.x)
            && self.ry.contains(config.radii.y)
            && self.width.contains(config.extent.x)
            && self.height.contains(config.extent.y)
            && self.red.contains(config.color.red)
            && self.green.contains(config.color.green)
            && self.blue.contains(config.color.blue)
            && self.opacity.contains(config.opacity.raw())
    }
}

/// Draws fully parameterized shape configurations.
///
/// Each sampler owns its random source; two samplers never share state.
#[derive(Debug, Clone)]
pub struct ConfigSampler<R = StdRng> {
    ranges: ArtRanges,
    rng: R,
}

impl ConfigSampler<StdRng> {
    /// Sampler over `ranges`, seeded from the operating system.
    pub fn new(ranges: ArtRanges) -> Result<Self, RangeError> {
        Self::with_rng(ranges, StdRng::from_entropy())
    }

    /// Fixed-default mode.
    pub fn with_defaults() -> Self {
        Self {
            ranges: ArtRanges::DEFAULT,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> ConfigSampler<R> {
    /// Sampler over `ranges` drawing from `rng`. The ranges are validated
    /// here so a bad preset fails before anything is drawn.
    pub fn with_rng(ranges: ArtRanges, rng: R) -> Result<Self, RangeError> {
        ranges.validate()?;
        Ok(Self { ranges, rng })
    }

    pub fn ranges(&self) -> &ArtRanges {
        &self.ranges
    }

    /// Draw one value from an arbitrary interval with this sampler's source.
    pub fn sample<T: Bound>(&mut self, spec: &RangeSpec<T>) -> Result<T, RangeError> {
        spec.sample(&mut self.rng)
    }

    /// Draw one configuration, one value per attribute.
    pub fn next_config(&mut self) -> Result<ShapeConfig, RangeError> {
        let r = &self.ranges;
        let rng = &mut self.rng;
        Ok(ShapeConfig {
            discriminator: r.discriminator.sample_field(rng, "discriminator")?,
            position: IVec2::new(r.x.sample_field(rng, "x")?, r.y.sample_field(rng, "y")?),
            radius: r.radius.sample_field(rng, "radius")?,
            radii: IVec2::new(r.rx.sample_field(rng, "rx")?, r.ry.sample_field(rng, "ry")?),
            extent: IVec2::new(
                r.width.sample_field(rng, "width")?,
                r.height.sample_field(rng, "height")?,
            ),
            color: Rgb::new(
                r.red.sample_field(rng, "red")?,
                r.green.sample_field(rng, "green")?,
                r.blue.sample_field(rng, "blue")?,
            ),
            opacity: Opacity(r.opacity.sample_field(rng, "opacity")?),
        })
    }
}
