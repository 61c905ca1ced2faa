//! The generation loop: sample, build, render, append.

use std::fmt;
use std::io::Write;

use rand::Rng;
use rand::rngs::StdRng;

use crate::document::SvgCanvas;
use crate::errors::{ArtError, RangeError, WriterError};
use crate::factory::ShapeFactory;
use crate::log::{debug, info, trace};
use crate::profile::{ArtProfile, ShapeCount};
use crate::sample::{ArtRanges, ConfigSampler};
use crate::shapes::{Shape, ShapeEnum, ShapeKind};
use crate::table::ShapeTable;
use crate::types::CanvasSize;

/// Number of shapes emitted so far, per variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub circles: u32,
    pub rectangles: u32,
    pub ellipses: u32,
}

impl ShapeCounts {
    pub fn record(&mut self, kind: ShapeKind) {
        match kind {
            ShapeKind::Circle => self.circles += 1,
            ShapeKind::Rectangle => self.rectangles += 1,
            ShapeKind::Ellipse => self.ellipses += 1,
        }
    }

    pub fn get(&self, kind: ShapeKind) -> u32 {
        match kind {
            ShapeKind::Circle => self.circles,
            ShapeKind::Rectangle => self.rectangles,
            ShapeKind::Ellipse => self.ellipses,
        }
    }

    pub fn total(&self) -> u32 {
        self.circles + self.rectangles + self.ellipses
    }
}

impl fmt::Display for ShapeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shapes ({} circles, {} rects, {} ellipses)",
            self.total(),
            self.circles,
            self.rectangles,
            self.ellipses
        )
    }
}

/// Drives shape generation for one or more documents.
///
/// Shapes are generated and appended in order, one at a time; the document
/// order is exactly the generation order.
#[derive(Debug, Clone)]
pub struct ArtGenerator<R = StdRng> {
    sampler: ConfigSampler<R>,
    counts: ShapeCounts,
}

impl ArtGenerator<StdRng> {
    pub fn new(ranges: ArtRanges) -> Result<Self, RangeError> {
        Ok(Self::from_sampler(ConfigSampler::new(ranges)?))
    }
}

impl<R: Rng> ArtGenerator<R> {
    pub fn with_rng(ranges: ArtRanges, rng: R) -> Result<Self, RangeError> {
        Ok(Self::from_sampler(ConfigSampler::with_rng(ranges, rng)?))
    }

    pub fn from_sampler(sampler: ConfigSampler<R>) -> Self {
        Self {
            sampler,
            counts: ShapeCounts::default(),
        }
    }

    /// Shapes this generator has written to a canvas or table so far
    pub fn counts(&self) -> ShapeCounts {
        self.counts
    }

    /// Resolve a shape count, drawing it if it is a range.
    pub fn shape_count(&mut self, count: &ShapeCount) -> Result<u32, RangeError> {
        match count {
            ShapeCount::Fixed(n) => Ok(*n),
            ShapeCount::Between(spec) => {
                spec.check("shape count")?;
                self.sampler.sample(spec)
            }
        }
    }

    /// Sample one configuration and build its shape.
    ///
    /// The shape is counted only once [`fill`](Self::fill) or
    /// [`table`](Self::table) has emitted it.
    pub fn next_shape(&mut self) -> Result<ShapeEnum, ArtError> {
        let config = self.sampler.next_config()?;
        let shape = ShapeFactory::build(config)?;
        trace!(kind = %shape.kind(), "built shape");
        Ok(shape)
    }

    /// Append `count` freshly generated shapes to `canvas`.
    pub fn fill<W: Write>(&mut self, canvas: &mut SvgCanvas<W>, count: u32) -> Result<(), ArtError> {
        for _ in 0..count {
            let shape = self.next_shape()?;
            canvas.append_shape(&shape)?;
            self.counts.record(shape.kind());
        }
        Ok(())
    }

    /// Generate `rows` shapes into a table instead of a document.
    pub fn table(&mut self, rows: usize) -> Result<ShapeTable, ArtError> {
        let mut shapes = Vec::with_capacity(rows);
        for _ in 0..rows {
            let shape = self.next_shape()?;
            self.counts.record(shape.kind());
            shapes.push(shape);
        }
        Ok(ShapeTable::new(shapes))
    }

    /// Write a whole canvas document to `sink` and hand the sink back.
    ///
    /// The shape count is resolved before the document is opened, so a bad
    /// count range leaves `sink` untouched.
    pub fn render<W: Write>(
        &mut self,
        sink: W,
        title: &str,
        canvas_size: CanvasSize,
        count: &ShapeCount,
    ) -> Result<W, ArtError> {
        let count = self.shape_count(count)?;
        debug!(count, %canvas_size, "generating document");
        let mut canvas = SvgCanvas::open(sink, title, canvas_size)?;
        self.fill(&mut canvas, count)?;
        canvas.close()?;
        info!(counts = %self.counts, "document generated");
        Ok(canvas.into_inner())
    }
}

/// Write prebuilt shapes, in order, into a fresh canvas document.
pub fn write_shapes<W: Write>(
    sink: W,
    title: &str,
    canvas_size: CanvasSize,
    shapes: &[ShapeEnum],
) -> Result<W, ArtError> {
    let mut canvas = SvgCanvas::open(sink, title, canvas_size)?;
    for shape in shapes {
        canvas.append_shape(shape)?;
    }
    canvas.close()?;
    Ok(canvas.into_inner())
}

/// Generate one document for `profile` into `sink`.
///
/// The profile is validated first; nothing is written if it is invalid.
pub fn generate_document<W: Write>(
    sink: W,
    title: &str,
    profile: &ArtProfile,
) -> Result<ShapeCounts, ArtError> {
    profile.validate()?;
    let mut generator = ArtGenerator::new(profile.ranges)?;
    generator.render(sink, title, profile.canvas, &profile.shape_count)?;
    Ok(generator.counts())
}

/// Generate one document for `profile` as a string.
pub fn generate_to_string(title: &str, profile: &ArtProfile) -> Result<String, ArtError> {
    profile.validate()?;
    let mut generator = ArtGenerator::new(profile.ranges)?;
    let bytes = generator.render(Vec::new(), title, profile.canvas, &profile.shape_count)?;
    Ok(String::from_utf8(bytes).map_err(WriterError::from)?)
}
