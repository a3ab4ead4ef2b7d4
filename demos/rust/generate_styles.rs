use svg_core::{
    Circle, Color, Document, ObjectContainer, PathStyled, StrokeLineCap,
    StrokeLineJoin,
};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    std::fs::create_dir_all("demos/output")?;

    let mut doc = Document::new();

    // A row of circles, one per line join.
    let joins = [
        StrokeLineJoin::Arcs,
        StrokeLineJoin::Bevel,
        StrokeLineJoin::Miter,
        StrokeLineJoin::MiterClip,
        StrokeLineJoin::Round,
    ];
    for (i, join) in joins.into_iter().enumerate() {
        let mut c = Circle::new();
        c.set_center((30.0 + 50.0 * i as f64, 30.0))
            .set_radius(20.0)
            .set_fill_color(Color::rgba(255, 160, 0, 0.25 * (i + 1) as f64))
            .set_stroke_color("black")
            .set_stroke_width(3.0)
            .set_stroke_line_join(join);
        doc.add(c);
    }

    let mut capped = Circle::new();
    capped
        .set_center((130.0, 100.0))
        .set_radius(40.0)
        .set_stroke_color(Color::rgb(0, 90, 180))
        .set_stroke_width(6.0)
        .set_stroke_line_cap(StrokeLineCap::Round);
    doc.add(capped);

    doc.save("demos/output/styles.svg")?;
    doc.set_compression(true);
    doc.save("demos/output/styles.svgz")?;
    log::info!("wrote demos/output/styles.svg and styles.svgz");
    Ok(())
}
