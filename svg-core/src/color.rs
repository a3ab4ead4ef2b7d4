use std::fmt;

/// Opaque RGB color. Each channel is in the range 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// RGB color with an opacity channel.
///
/// `opacity` is meant to be 0.0 (transparent) to 1.0 (opaque) but is
/// not clamped; whatever the caller stores is written out as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Rgba {
            red,
            green,
            blue,
            opacity,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::new(0, 0, 0, 1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.opacity
        )
    }
}

/// Paint value for fill and stroke attributes.
///
/// `None` is the absent color: it renders as `none` on its own, and
/// suppresses the attribute entirely when used as a shape style.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    #[default]
    None,
    /// Any SVG color keyword or string, written verbatim.
    Named(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

/// The absent color.
pub const NONE_COLOR: Color = Color::None;

impl Color {
    /// Create a named color (e.g. "purple", "#ff0000").
    pub fn named(name: &str) -> Self {
        Color::Named(name.to_string())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb(Rgb::new(red, green, blue))
    }

    pub fn rgba(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Color::Rgba(Rgba::new(red, green, blue, opacity))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::named(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Color::Rgba(rgba) => fmt::Display::fmt(rgba, f),
        }
    }
}
