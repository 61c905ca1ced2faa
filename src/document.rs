//! Incremental, indentation-tracking document writers
//!
//! Lines go straight to the sink as they are appended; nothing but the stack
//! of still-open elements is kept in memory. Each opened element remembers
//! the depth it was opened at, and [`HtmlDocument::close`] checks that the
//! caller's indent/outdent calls returned to that depth before writing the
//! closing tag.

use std::io::Write;

use crate::defaults::INDENT;
use crate::errors::WriterError;
use crate::log::debug;
use crate::shapes::Shape;
use crate::types::CanvasSize;

/// An element opened by the writer and not yet closed
#[derive(Debug)]
struct OpenElement {
    close_tag: String,
    /// Depth of the opening line
    depth: usize,
    /// Whether the element's content is indented one level
    indented: bool,
}

/// An HTML document written line by line to `W`.
#[derive(Debug)]
pub struct HtmlDocument<W: Write> {
    sink: W,
    depth: usize,
    open: Vec<OpenElement>,
    lines: usize,
    closed: bool,
}

impl<W: Write> HtmlDocument<W> {
    /// Start a document: `<html>`, the head with its title, and `<body>`.
    pub fn open(sink: W, title: &str) -> Result<Self, WriterError> {
        Self::begin(sink, title, false)
    }

    pub(crate) fn begin(sink: W, title: &str, indent_body: bool) -> Result<Self, WriterError> {
        let mut doc = Self {
            sink,
            depth: 0,
            open: Vec::new(),
            lines: 0,
            closed: false,
        };
        debug!(title, "opening document");
        doc.open_element("<html>", "</html>", false)?;
        doc.append("<head>")?;
        doc.indent()?;
        doc.append(&format!("<title>{}</title>", escape_text(title)))?;
        doc.outdent()?;
        doc.append("</head>")?;
        doc.open_element("<body>", "</body>", indent_body)?;
        Ok(doc)
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn indent(&mut self) -> Result<(), WriterError> {
        self.ensure_open()?;
        self.depth += 1;
        Ok(())
    }

    pub fn outdent(&mut self) -> Result<(), WriterError> {
        self.ensure_open()?;
        if self.depth == 0 {
            return Err(WriterError::IndentUnderflow);
        }
        self.depth -= 1;
        Ok(())
    }

    /// Write `line` at the current depth, followed by a newline.
    pub fn append(&mut self, line: &str) -> Result<(), WriterError> {
        self.ensure_open()?;
        for _ in 0..self.depth {
            self.sink.write_all(INDENT.as_bytes())?;
        }
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Write `open_tag` and remember `close_tag` for [`close`](Self::close).
    pub fn open_element(
        &mut self,
        open_tag: &str,
        close_tag: impl Into<String>,
        indented: bool,
    ) -> Result<(), WriterError> {
        self.append(open_tag)?;
        self.open.push(OpenElement {
            close_tag: close_tag.into(),
            depth: self.depth,
            indented,
        });
        if indented {
            self.indent()?;
        }
        Ok(())
    }

    /// Close the innermost open element.
    pub fn close_element(&mut self) -> Result<(), WriterError> {
        self.ensure_open()?;
        let Some(element) = self.open.pop() else {
            return Err(WriterError::NoOpenElement);
        };
        let expected = element.depth + usize::from(element.indented);
        if self.depth != expected {
            return Err(WriterError::UnbalancedIndent {
                expected,
                found: self.depth,
            });
        }
        self.depth = element.depth;
        self.append(&element.close_tag)
    }

    /// Close every open element, innermost first, and flush the sink.
    ///
    /// The writer is terminal afterwards, even if closing fails.
    pub fn close(&mut self) -> Result<(), WriterError> {
        self.ensure_open()?;
        let result = self.close_all();
        self.closed = true;
        debug!(lines = self.lines, "closed document");
        result
    }

    fn close_all(&mut self) -> Result<(), WriterError> {
        while !self.open.is_empty() {
            self.close_element()?;
        }
        self.sink.flush()?;
        Ok(())
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn ensure_open(&self) -> Result<(), WriterError> {
        if self.closed {
            return Err(WriterError::WriterClosed);
        }
        Ok(())
    }
}

/// An HTML document whose body holds a fixed-size `<svg>` drawing surface.
///
/// Everything appended after [`open`](Self::open) lands inside the surface,
/// one level deeper than the `<svg>` line.
#[derive(Debug)]
pub struct SvgCanvas<W: Write> {
    doc: HtmlDocument<W>,
    size: CanvasSize,
}

impl<W: Write> SvgCanvas<W> {
    pub fn open(sink: W, title: &str, size: CanvasSize) -> Result<Self, WriterError> {
        let mut doc = HtmlDocument::begin(sink, title, true)?;
        doc.open_element(
            &format!(r#"<svg width="{}" height="{}">"#, size.width(), size.height()),
            "</svg>",
            true,
        )?;
        debug!(%size, "opened svg canvas");
        Ok(Self { doc, size })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn depth(&self) -> usize {
        self.doc.depth()
    }

    pub fn lines_written(&self) -> usize {
        self.doc.lines_written()
    }

    pub fn is_closed(&self) -> bool {
        self.doc.is_closed()
    }

    pub fn indent(&mut self) -> Result<(), WriterError> {
        self.doc.indent()
    }

    pub fn outdent(&mut self) -> Result<(), WriterError> {
        self.doc.outdent()
    }

    pub fn append(&mut self, line: &str) -> Result<(), WriterError> {
        self.doc.append(line)
    }

    /// Render `shape` and append it as one line.
    pub fn append_shape(&mut self, shape: &impl Shape) -> Result<(), WriterError> {
        self.doc.append(&shape.to_markup_element())
    }

    /// Close `</svg>`, `</body>` and `</html>`, in that order.
    pub fn close(&mut self) -> Result<(), WriterError> {
        self.doc.close()
    }

    pub fn into_inner(self) -> W {
        self.doc.into_inner()
    }
}

/// Escape text content for HTML
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
