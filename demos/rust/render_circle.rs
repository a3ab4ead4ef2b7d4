use std::io::{self, Write};

use svg_core::{
    Circle, Color, Document, ObjectContainer, PathStyled, Rgb, Rgba,
    NONE_COLOR,
};

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() -> io::Result<()> {
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Color formatting
    let purple = Color::from("purple");
    let rgb: Color = Rgb::new(100, 200, 255).into();
    let rgba: Color = Rgba::new(100, 200, 255, 0.5).into();
    writeln!(out, "{}", NONE_COLOR)?;
    writeln!(out, "{}", purple)?;
    writeln!(out, "{}", rgb)?;
    writeln!(out, "{}", rgba)?;

    let mut c = Circle::new();
    c.set_radius(3.5).set_center((1.0, 2.0));
    c.set_fill_color(rgba);
    c.set_stroke_color(purple);

    let mut doc = Document::new();
    doc.add(c);
    doc.render(&mut out)?;
    writeln!(out)?;

    log::info!("rendered {} object(s)", doc.len());
    Ok(())
}
