use std::io;

use crate::geometry::Point;
use crate::object::Object;
use crate::style::{PathProps, PathStyled};
use crate::writer::RenderContext;

/// `<circle>` element. Defaults to a unit circle at the origin.
///
/// The radius is written as given, zero and negative included.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Default for Circle {
    fn default() -> Self {
        Circle {
            center: Point::default(),
            radius: 1.0,
            props: PathProps::default(),
        }
    }
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_center(&mut self, center: impl Into<Point>) -> &mut Self {
        self.center = center.into();
        self
    }

    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.radius = radius;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl PathStyled for Circle {
    fn path_props(&self) -> &PathProps {
        &self.props
    }

    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl Object for Circle {
    fn render_object(
        &self,
        ctx: &mut RenderContext<'_>,
    ) -> io::Result<()> {
        ctx.write_str("<circle")?;
        ctx.write_attr("cx", &self.center.x)?;
        ctx.write_attr("cy", &self.center.y)?;
        ctx.write_attr("r", &self.radius)?;
        self.props.render_attrs(ctx)?;
        ctx.write_str("/>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::StrokeLineJoin;

    fn body(c: &Circle) -> String {
        let mut buf = Vec::new();
        let mut ctx = RenderContext::with_indent(&mut buf, 2, 2);
        c.render_object(&mut ctx).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn default_circle() {
        let c = Circle::new();
        assert_eq!(c.center(), Point::new(0.0, 0.0));
        assert_eq!(c.radius(), 1.0);
        assert_eq!(body(&c), "<circle cx=\"0\" cy=\"0\" r=\"1\"/>");
    }

    #[test]
    fn body_has_no_framing() {
        let mut c = Circle::new();
        c.set_fill_color("red");
        let out = body(&c);
        assert!(out.starts_with("<circle"));
        assert!(out.ends_with("/>"));
    }

    #[test]
    fn geometry_precedes_style() {
        let mut c = Circle::new();
        c.set_radius(3.5)
            .set_center((1.0, 2.0))
            .set_fill_color(Color::rgba(100, 200, 255, 0.5))
            .set_stroke_color("purple");
        assert_eq!(
            body(&c),
            "<circle cx=\"1\" cy=\"2\" r=\"3.5\" \
             fill=\"rgba(100,200,255,0.5)\" stroke=\"purple\"/>"
        );
    }

    #[test]
    fn radius_is_not_validated() {
        let mut c = Circle::new();
        c.set_radius(-2.25).set_stroke_line_join(StrokeLineJoin::Bevel);
        assert_eq!(
            body(&c),
            "<circle cx=\"0\" cy=\"0\" r=\"-2.25\" stroke-linejoin=\"bevel\"/>"
        );
        c.set_radius(0.0);
        assert!(body(&c).contains(" r=\"0\""));
    }
}
