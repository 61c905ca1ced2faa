//! Generation presets: canvas size, shape count and attribute ranges.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;

use crate::defaults;
use crate::errors::{RangeError, ShapeError};
use crate::sample::ArtRanges;
use crate::shapes::{CircleShape, ShapeConfig, ShapeEnum};
use crate::types::{CanvasSize, Opacity, RangeSpec, Rgb};

/// How many shapes a document gets
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeCount {
    Fixed(u32),
    /// Drawn once per document
    Between(RangeSpec<u32>),
}

impl ShapeCount {
    pub fn check(&self) -> Result<(), RangeError> {
        match self {
            ShapeCount::Fixed(_) => Ok(()),
            ShapeCount::Between(spec) => spec.check("shape count"),
        }
    }
}

impl fmt::Display for ShapeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeCount::Fixed(n) => write!(f, "{n}"),
            ShapeCount::Between(spec) => write!(f, "{}..={}", spec.low(), spec.high()),
        }
    }
}

/// Everything needed to generate one document besides its title
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtProfile {
    pub canvas: CanvasSize,
    pub shape_count: ShapeCount,
    pub ranges: ArtRanges,
}

impl ArtProfile {
    /// Ten shapes from the default ranges on a 500x300 canvas
    pub const fn small_demo() -> Self {
        Self {
            canvas: CanvasSize(defaults::SMALL_CANVAS),
            shape_count: ShapeCount::Fixed(defaults::SMALL_SHAPE_COUNT),
            ranges: ArtRanges::DEFAULT,
        }
    }

    /// A large 1200x650 scene drawn with `ranges`
    pub const fn large_scene(ranges: ArtRanges) -> Self {
        Self {
            canvas: CanvasSize(defaults::LARGE_CANVAS),
            shape_count: ShapeCount::Between(RangeSpec::new(
                defaults::LARGE_SHAPE_COUNT_MIN,
                defaults::LARGE_SHAPE_COUNT_MAX,
            )),
            ranges,
        }
    }

    pub fn validate(&self) -> Result<(), RangeError> {
        self.shape_count.check()?;
        self.ranges.validate()
    }
}

impl Default for ArtProfile {
    fn default() -> Self {
        Self::small_demo()
    }
}

/// Named large-scene styles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtStyle {
    Forest,
    Dusk,
    Vivid,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 3] = [ArtStyle::Forest, ArtStyle::Dusk, ArtStyle::Vivid];

    pub fn name(self) -> &'static str {
        match self {
            ArtStyle::Forest => "forest",
            ArtStyle::Dusk => "dusk",
            ArtStyle::Vivid => "vivid",
        }
    }

    pub fn ranges(self) -> ArtRanges {
        match self {
            ArtStyle::Forest => ArtRanges::FOREST,
            ArtStyle::Dusk => ArtRanges::DUSK,
            ArtStyle::Vivid => ArtRanges::VIVID,
        }
    }

    pub fn profile(self) -> ArtProfile {
        ArtProfile::large_scene(self.ranges())
    }
}

impl fmt::Display for ArtStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown art style: {s} (expected forest, dusk or vivid)"))
    }
}

/// The fixed small demo: two rows of five circles, red on top, blue below.
pub fn demo_circles() -> Result<Vec<ShapeEnum>, ShapeError> {
    [(50, Rgb::RED), (250, Rgb::BLUE)]
        .into_iter()
        .flat_map(|(y, color)| (0..5).map(move |i| (IVec2::new(50 + 100 * i, y), color)))
        .map(|(center, color)| {
            let config = ShapeConfig::circle(center, 50, color, Opacity::OPAQUE);
            CircleShape::new(config).map(ShapeEnum::from)
        })
        .collect()
}
