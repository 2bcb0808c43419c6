//! The functions used to plot the linkage pose.
//!
//! ```
//! use five_bar::{plot, FiveBar, Orient};
//!
//! let fb = FiveBar::example();
//! let angles = fb.ik([2., 1.5], Orient::InIn).unwrap();
//! let js = fb.fk(angles).unwrap();
//! let mut svg = String::new();
//! plot::linkage(plot::SVGBackend::with_string(&mut svg, (800, 600)), &js, &angles).unwrap();
//! assert!(svg.contains("theta1=51.32"));
//! ```
pub use plotters::{prelude::*, *};

use crate::{Angles, Joints};

/// Get font setting.
pub fn font() -> TextStyle<'static> {
    ("sans-serif", 24).into_font().color(&BLACK)
}

/// Plot the linkage as a polyline `g1-a-p-b-g2` with the angles as caption.
pub fn linkage<B>(backend: B, joints: &Joints, angles: &Angles) -> anyhow::Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let line = joints.to_polyline();
    let [x_min, x_max, y_min, y_max] = bounding_box(&line);
    let cap = format!("Angles: {}", angles.label());
    let mut chart = ChartBuilder::on(&root)
        .caption(cap, font())
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (6).percent())
        .margin((4).percent())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_label_style(font())
        .y_label_style(font())
        .draw()?;
    let color = Palette99::pick(0);
    chart.draw_series(LineSeries::new(
        line.iter().map(|&[x, y]| (x, y)),
        color.stroke_width(3),
    ))?;
    chart.draw_series(
        line.iter()
            .map(|&[x, y]| Circle::new((x, y), 5, color.filled())),
    )?;
    // Ground anchors
    chart.draw_series(
        [joints.g1, joints.g2]
            .into_iter()
            .map(|[x, y]| TriangleMarker::new((x, y), 9, BLACK.filled())),
    )?;
    root.present()?;
    Ok(())
}

/// Get the bounding box `[x_min, x_max, y_min, y_max]` of the points.
///
/// The box is square and padded by 10% of its side on each edge.
pub fn bounding_box(pts: &[[f64; 2]]) -> [f64; 4] {
    let [mut x_min, mut x_max] = [f64::INFINITY, -f64::INFINITY];
    let [mut y_min, mut y_max] = [f64::INFINITY, -f64::INFINITY];
    for &[x, y] in pts {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let dx = (x_max - x_min).abs();
    let dy = (y_max - y_min).abs();
    let r = dx.max(dy).max(1.) * 0.6;
    let [cx, cy] = [(x_min + x_max) * 0.5, (y_min + y_max) * 0.5];
    [cx - r, cx + r, cy - r, cy + r]
}
