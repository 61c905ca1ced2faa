//! Default sizes and settings

use glam::IVec2;

/// One level of document indentation
pub const INDENT: &str = "   ";

/// Drawing surface of the small demo documents
pub const SMALL_CANVAS: IVec2 = IVec2::new(500, 300);
/// Drawing surface of the large scene documents
pub const LARGE_CANVAS: IVec2 = IVec2::new(1200, 650);

/// Number of shapes in a small demo
pub const SMALL_SHAPE_COUNT: u32 = 10;
/// Shape count bounds for a large scene
pub const LARGE_SHAPE_COUNT_MIN: u32 = 500;
pub const LARGE_SHAPE_COUNT_MAX: u32 = 1250;

/// Title used by the tooling when none is given
pub const TITLE: &str = "My Art";
