//! Plain-text listing of generated shapes.

use std::fmt;

use crate::shapes::{Shape, ShapeEnum};

pub const TABLE_HEADER: &str = "CNT SHA   X   Y RAD  RX  RY   W   H   R   G   B  OP";

/// Numbered rows of shape configurations under a column header
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    shapes: Vec<ShapeEnum>,
}

impl ShapeTable {
    pub fn new(shapes: Vec<ShapeEnum>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[ShapeEnum] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl FromIterator<ShapeEnum> for ShapeTable {
    fn from_iter<I: IntoIterator<Item = ShapeEnum>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ShapeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TABLE_HEADER}")?;
        for (i, shape) in self.shapes.iter().enumerate() {
            writeln!(f, "{i:>3} {}", shape.table_row())?;
        }
        Ok(())
    }
}
