use std::io;

use crate::writer::RenderContext;

/// A drawable SVG element.
///
/// Implementors write only their own markup (tag and attributes).
/// Indentation and the trailing newline are added by [`Render`], so
/// every element is framed the same way.
pub trait Object {
    fn render_object(
        &self,
        ctx: &mut RenderContext<'_>,
    ) -> io::Result<()>;
}

/// Framed rendering: indent, element body, newline.
///
/// Blanket-implemented for every [`Object`] and not meant to be
/// implemented by hand.
pub trait Render {
    fn render(&self, ctx: &mut RenderContext<'_>) -> io::Result<()>;
}

impl<T: Object + ?Sized> Render for T {
    fn render(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        ctx.write_indent()?;
        self.render_object(ctx)?;
        ctx.write_str("\n")
    }
}

/// Anything that takes ownership of objects.
pub trait ObjectContainer {
    fn add_ptr(&mut self, object: Box<dyn Object>);

    /// Move `object` into the container.
    fn add<T: Object + 'static>(&mut self, object: T) -> &mut Self
    where
        Self: Sized,
    {
        self.add_ptr(Box::new(object));
        self
    }
}
