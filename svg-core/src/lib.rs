pub mod color;
pub mod geometry;
pub mod writer;
pub mod object;
pub mod style;
pub mod shapes;
pub mod document;

pub use color::{Color, Rgb, Rgba, NONE_COLOR};
pub use document::Document;
pub use geometry::Point;
pub use object::{Object, ObjectContainer, Render};
pub use shapes::Circle;
pub use style::{PathProps, PathStyled, StrokeLineCap, StrokeLineJoin};
pub use writer::RenderContext;
