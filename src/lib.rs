//! Procedurally generated SVG art.
//!
//! A [`ConfigSampler`] draws one value per attribute from a set of
//! [`RangeSpec`]s, the [`ShapeFactory`] turns that configuration into a
//! circle, rect or ellipse, and an [`SvgCanvas`] writes each shape as one
//! indented line of an HTML document, straight to its sink.
//!
//! ```no_run
//! use artgen::{ArtStyle, generate_document};
//!
//! let file = std::fs::File::create("forest.html")?;
//! let counts = generate_document(std::io::BufWriter::new(file), "My Art", &ArtStyle::Forest.profile())?;
//! println!("{counts}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod defaults;
pub mod document;
pub mod errors;
pub mod factory;
pub mod generator;
pub mod log;
pub mod profile;
pub mod sample;
pub mod shapes;
pub mod table;
pub mod types;

pub use document::{HtmlDocument, SvgCanvas};
pub use errors::{ArtError, RangeError, ShapeError, WriterError};
pub use factory::ShapeFactory;
pub use generator::{ArtGenerator, ShapeCounts, generate_document, generate_to_string, write_shapes};
pub use profile::{ArtProfile, ArtStyle, ShapeCount, demo_circles};
pub use sample::{ArtRanges, ConfigSampler};
pub use shapes::{CircleShape, EllipseShape, RectangleShape, Shape, ShapeConfig, ShapeEnum, ShapeKind};
pub use table::ShapeTable;
pub use types::{CanvasSize, IntRange, Opacity, RangeSpec, RealRange, Rgb};
