use std::fmt;
use std::io;

use crate::color::Color;
use crate::writer::RenderContext;

/// Shape used at the ends of open stroked subpaths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

/// Shape used at the corners of stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// Fill and stroke attributes shared by path-like shapes.
///
/// Shapes embed one of these by value and expose the fluent setters
/// through [`PathStyled`]. Unset values produce no attribute at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathProps {
    fill_color: Color,
    stroke_color: Color,
    stroke_width: Option<f64>,
    stroke_line_cap: Option<StrokeLineCap>,
    stroke_line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    pub fn fill_color(&self) -> &Color {
        &self.fill_color
    }

    pub fn stroke_color(&self) -> &Color {
        &self.stroke_color
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn stroke_line_cap(&self) -> Option<StrokeLineCap> {
        self.stroke_line_cap
    }

    pub fn stroke_line_join(&self) -> Option<StrokeLineJoin> {
        self.stroke_line_join
    }

    /// Write the set attributes in fixed order: fill, stroke,
    /// stroke-width, stroke-linecap, stroke-linejoin.
    pub fn render_attrs(
        &self,
        ctx: &mut RenderContext<'_>,
    ) -> io::Result<()> {
        if !self.fill_color.is_none() {
            ctx.write_attr("fill", &self.fill_color)?;
        }
        if !self.stroke_color.is_none() {
            ctx.write_attr("stroke", &self.stroke_color)?;
        }
        if let Some(width) = self.stroke_width {
            ctx.write_attr("stroke-width", &width)?;
        }
        if let Some(cap) = self.stroke_line_cap {
            ctx.write_attr("stroke-linecap", &cap)?;
        }
        if let Some(join) = self.stroke_line_join {
            ctx.write_attr("stroke-linejoin", &join)?;
        }
        Ok(())
    }
}

/// Fluent style setters for any shape that embeds [`PathProps`].
///
/// Each setter returns the shape itself so calls chain:
///
/// ```
/// use svg_core::{Circle, PathStyled, StrokeLineCap};
///
/// let mut c = Circle::new();
/// c.set_fill_color("red")
///     .set_stroke_width(2.0)
///     .set_stroke_line_cap(StrokeLineCap::Round);
/// ```
pub trait PathStyled {
    fn path_props(&self) -> &PathProps;

    fn path_props_mut(&mut self) -> &mut PathProps;

    fn set_fill_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.path_props_mut().fill_color = color.into();
        self
    }

    fn set_stroke_color(
        &mut self,
        color: impl Into<Color>,
    ) -> &mut Self {
        self.path_props_mut().stroke_color = color.into();
        self
    }

    fn set_stroke_width(&mut self, width: f64) -> &mut Self {
        self.path_props_mut().stroke_width = Some(width);
        self
    }

    fn set_stroke_line_cap(&mut self, cap: StrokeLineCap) -> &mut Self {
        self.path_props_mut().stroke_line_cap = Some(cap);
        self
    }

    fn set_stroke_line_join(
        &mut self,
        join: StrokeLineJoin,
    ) -> &mut Self {
        self.path_props_mut().stroke_line_join = Some(join);
        self
    }
}
