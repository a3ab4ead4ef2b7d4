use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, trace};

use crate::object::{Object, ObjectContainer, Render};
use crate::writer::RenderContext;

const XML_DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n";
const SVG_OPEN: &str =
    "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n";
const SVG_CLOSE: &str = "</svg>";

/// Spaces added per nesting level.
pub const INDENT_STEP: usize = 2;

/// High-level API for building SVG documents.
///
/// Objects are owned by the document once added and rendered in
/// insertion order. Rendering only reads the document, so it can be
/// repeated and gives the same bytes each time.
#[derive(Default)]
pub struct Document {
    objects: Vec<Box<dyn Object>>,
    compress: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gzip the output of [`write_to`](Self::write_to) and
    /// [`save`](Self::save), producing `.svgz` data.
    /// [`render`](Self::render) always writes plain text.
    pub fn set_compression(&mut self, enabled: bool) -> &mut Self {
        self.compress = enabled;
        self
    }

    pub fn is_compressed(&self) -> bool {
        self.compress
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Write the complete SVG text. No newline follows the closing
    /// `</svg>` tag.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!("rendering svg document with {} objects", self.objects.len());
        out.write_all(XML_DECLARATION.as_bytes())?;
        out.write_all(SVG_OPEN.as_bytes())?;
        let mut ctx =
            RenderContext::with_indent(out, INDENT_STEP, INDENT_STEP);
        for (i, object) in self.objects.iter().enumerate() {
            trace!("rendering object {}", i);
            object.render(&mut ctx)?;
        }
        out.write_all(SVG_CLOSE.as_bytes())
    }

    /// Render into `writer`, gzip-compressed if enabled, flush it and
    /// hand it back.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<W> {
        if self.compress {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            self.render(&mut encoder)?;
            writer = encoder.finish()?;
        } else {
            self.render(&mut writer)?;
        }
        writer.flush()?;
        Ok(writer)
    }

    /// Write the document to a file, replacing any existing one.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!(
            "saving svg document to {} (compressed: {})",
            path.display(),
            self.compress
        );
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        Ok(())
    }
}

impl ObjectContainer for Document {
    fn add_ptr(&mut self, object: Box<dyn Object>) {
        self.objects.push(object);
    }
}
