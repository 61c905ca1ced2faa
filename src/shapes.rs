//! Shape types for art generation
//!
//! All variants carry the same [`ShapeConfig`], so one sampler can
//! parameterize any of them. Each variant only reads the fields that make
//! sense for its geometry:
//! - circle: `position` (centre), `radius`
//! - rect: `position` (top-left corner), `extent`
//! - ellipse: `position` (centre), `radii`
//!
//! Colour and opacity are read by every variant.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::errors::ShapeError;
use crate::types::{Opacity, Rgb};

/// One sampled set of shape attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeConfig {
    /// Selects the variant built from this config
    pub discriminator: i32,
    pub position: IVec2,
    pub radius: i32,
    /// `rx`, `ry`
    pub radii: IVec2,
    /// `width`, `height`
    pub extent: IVec2,
    pub color: Rgb,
    pub opacity: Opacity,
}

impl ShapeConfig {
    /// A circle config with every unused field zeroed
    pub fn circle(center: IVec2, radius: i32, color: Rgb, opacity: Opacity) -> Self {
        Self {
            discriminator: ShapeKind::Circle.discriminator(),
            position: center,
            radius,
            radii: IVec2::ZERO,
            extent: IVec2::ZERO,
            color,
            opacity,
        }
    }
}

/// Fixed-width row of all twelve values, in `SHA X Y RAD RX RY W H R G B OP` order.
impl fmt::Display for ShapeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3.1}",
            self.discriminator,
            self.position.x,
            self.position.y,
            self.radius,
            self.radii.x,
            self.radii.y,
            self.extent.x,
            self.extent.y,
            self.color.red,
            self.color.green,
            self.color.blue,
            self.opacity.raw(),
        )
    }
}

/// The closed set of shape variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Ellipse];

    /// Discriminator value that selects this variant
    pub const fn discriminator(self) -> i32 {
        match self {
            ShapeKind::Circle => 0,
            ShapeKind::Rectangle => 1,
            ShapeKind::Ellipse => 2,
        }
    }

    /// Map a sampled discriminator to its variant.
    pub fn from_discriminator(discriminator: i32) -> Result<Self, ShapeError> {
        match discriminator {
            0 => Ok(ShapeKind::Circle),
            1 => Ok(ShapeKind::Rectangle),
            2 => Ok(ShapeKind::Ellipse),
            _ => Err(ShapeError::UnknownShapeVariant { discriminator }),
        }
    }

    /// SVG element name
    pub const fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rect",
            ShapeKind::Ellipse => "ellipse",
        }
    }

    fn check_config(self, config: &ShapeConfig) -> Result<(), ShapeError> {
        if config.discriminator != self.discriminator() {
            return Err(ShapeError::DiscriminatorMismatch {
                expected: self.tag(),
                found: config.discriminator,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Which variant this is
    fn kind(&self) -> ShapeKind;

    /// The configuration the shape was built from
    fn config(&self) -> &ShapeConfig;

    /// Render as a single SVG element with no surrounding whitespace
    fn to_markup_element(&self) -> String;

    /// Fixed-width table row of the full configuration
    fn table_row(&self) -> String {
        self.config().to_string()
    }
}

/// Shared `fill` / `fill-opacity` attributes
fn paint(config: &ShapeConfig) -> String {
    format!(r#"fill="{}" fill-opacity="{}""#, config.color, config.opacity)
}

// ============================================================================
// Shape Types
// ============================================================================

/// A circle centred on `position` with `radius`
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    config: ShapeConfig,
}

impl CircleShape {
    pub fn new(config: ShapeConfig) -> Result<Self, ShapeError> {
        ShapeKind::Circle.check_config(&config)?;
        Ok(Self { config })
    }
}

impl Shape for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn config(&self) -> &ShapeConfig {
        &self.config
    }

    fn to_markup_element(&self) -> String {
        let c = &self.config;
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}></circle>"#,
            c.position.x,
            c.position.y,
            c.radius,
            paint(c)
        )
    }
}

/// A rectangle with its top-left corner at `position` and size `extent`
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    config: ShapeConfig,
}

impl RectangleShape {
    pub fn new(config: ShapeConfig) -> Result<Self, ShapeError> {
        ShapeKind::Rectangle.check_config(&config)?;
        Ok(Self { config })
    }
}

impl Shape for RectangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn config(&self) -> &ShapeConfig {
        &self.config
    }

    fn to_markup_element(&self) -> String {
        let c = &self.config;
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}></rect>"#,
            c.position.x,
            c.position.y,
            c.extent.x,
            c.extent.y,
            paint(c)
        )
    }
}

/// An ellipse centred on `position` with radii `radii`
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    config: ShapeConfig,
}

impl EllipseShape {
    pub fn new(config: ShapeConfig) -> Result<Self, ShapeError> {
        ShapeKind::Ellipse.check_config(&config)?;
        Ok(Self { config })
    }
}

impl Shape for EllipseShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn config(&self) -> &ShapeConfig {
        &self.config
    }

    fn to_markup_element(&self) -> String {
        let c = &self.config;
        format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}></ellipse>"#,
            c.position.x,
            c.position.y,
            c.radii.x,
            c.radii.y,
            paint(c)
        )
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// Any shape variant
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Circle(CircleShape),
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
}
