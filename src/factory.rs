//! Discriminator-driven shape construction.

use crate::errors::ShapeError;
use crate::shapes::{CircleShape, EllipseShape, RectangleShape, ShapeConfig, ShapeEnum, ShapeKind};

/// Builds the shape variant a sampled configuration selects.
///
/// Dispatch is exhaustive over `0 => circle`, `1 => rect`, `2 => ellipse`;
/// any other discriminator is an error rather than a fallback variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn build(config: ShapeConfig) -> Result<ShapeEnum, ShapeError> {
        let shape: ShapeEnum = match ShapeKind::from_discriminator(config.discriminator)? {
            ShapeKind::Circle => CircleShape::new(config)?.into(),
            ShapeKind::Rectangle => RectangleShape::new(config)?.into(),
            ShapeKind::Ellipse => EllipseShape::new(config)?.into(),
        };
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;
    use crate::types::{Opacity, Rgb};
    use glam::IVec2;

    fn config(discriminator: i32) -> ShapeConfig {
        ShapeConfig {
            discriminator,
            position: IVec2::new(100, 60),
            radius: 25,
            radii: IVec2::new(12, 18),
            extent: IVec2::new(40, 30),
            color: Rgb::new(200, 100, 0),
            opacity: Opacity(0.5),
        }
    }

    #[test]
    fn dispatches_each_discriminator() {
        for (d, tag) in [(0, "circle"), (1, "rect"), (2, "ellipse")] {
            let shape = ShapeFactory::build(config(d)).unwrap();
            assert_eq!(shape.kind().tag(), tag);
            assert!(shape.to_markup_element().starts_with(&format!("<{tag} ")));
            assert!(shape.to_markup_element().ends_with(&format!("></{tag}>")));
        }
    }

    #[test]
    fn building_twice_gives_equal_shapes() {
        let a = ShapeFactory::build(config(1)).unwrap();
        let b = ShapeFactory::build(config(1)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.config(), &config(1));
    }

    #[test]
    fn discriminator_three_is_unknown() {
        assert_eq!(
            ShapeFactory::build(config(3)).unwrap_err(),
            ShapeError::UnknownShapeVariant { discriminator: 3 }
        );
    }

    #[test]
    fn negative_discriminator_is_unknown() {
        assert!(matches!(
            ShapeFactory::build(config(-1)),
            Err(ShapeError::UnknownShapeVariant { discriminator: -1 })
        ));
    }
}
