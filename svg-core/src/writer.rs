use std::fmt::{self, Display};
use std::io::{self, Write};

/// Output state for a single render pass: the text sink plus the
/// current indentation and the step added per nesting level.
///
/// The context only borrows the sink. Flushing and closing it stays
/// with whoever owns it.
pub struct RenderContext<'a> {
    out: &'a mut dyn Write,
    indent_step: usize,
    indent: usize,
}

impl<'a> RenderContext<'a> {
    /// Context with no indentation at all.
    pub fn new(out: &'a mut dyn Write) -> Self {
        RenderContext {
            out,
            indent_step: 0,
            indent: 0,
        }
    }

    pub fn with_indent(
        out: &'a mut dyn Write,
        indent_step: usize,
        indent: usize,
    ) -> Self {
        RenderContext {
            out,
            indent_step,
            indent,
        }
    }

    /// Child context one step deeper, writing to the same sink.
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent: self.indent + self.indent_step,
        }
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    /// Write `indent` spaces.
    pub fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.indent {
            self.out.write_all(b" ")?;
        }
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    /// Lets `write!(ctx, ...)` target the context directly.
    pub fn write_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.out.write_fmt(args)
    }

    /// Write ` name="value"`, with the leading space.
    pub fn write_attr<V: Display + ?Sized>(
        &mut self,
        name: &str,
        value: &V,
    ) -> io::Result<()> {
        write!(self.out, " {}=\"{}\"", name, value)
    }
}
