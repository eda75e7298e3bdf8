//! tiny-skia rendering for the indicator

use tiny_skia::{
    Color, FillRule, GradientStop, Paint, PathBuilder, Pixmap, Point, RadialGradient, SpreadMode,
    Transform,
};

use crate::domain::indicator::{Glow, Gradient, IndicatorInstance, PulseFrame, Rgb};

/// Padding around the circle so the glow and the pulse's largest scale
/// both fit inside the surface.
const GLOW_PADDING: f32 = 24.0;

/// Largest pulse scale the surface must accommodate
const MAX_SCALE: f32 = 1.1;

/// Star glyph outer radius as a fraction of the circle radius
const STAR_RATIO: f32 = 0.42;

/// Side length of the square surface for a given circle diameter
pub fn surface_size(diameter: u32) -> u32 {
    (diameter as f32 * MAX_SCALE + GLOW_PADDING * 2.0).ceil() as u32
}

/// Render one pulse frame of the indicator into `pixmap`.
///
/// The gradient comes from the instance's gradient variant and the glow
/// from its glow variant; the two can differ after a re-show.
pub fn render_indicator(pixmap: &mut Pixmap, instance: &IndicatorInstance, frame: PulseFrame) {
    let size = pixmap.width() as f32;
    let center = size / 2.0;
    let base_radius = (size - 2.0 * GLOW_PADDING) / (2.0 * MAX_SCALE);
    let radius = base_radius * frame.scale;

    let gradient = instance.gradient.appearance().gradient;
    let glow = instance.glow.appearance().glow;

    draw_glow(pixmap, center, radius, &glow, frame.opacity);
    draw_disc(pixmap, center, radius, &gradient, frame.opacity);
    draw_star(pixmap, center, radius * STAR_RATIO, frame.opacity);
}

fn color(rgb: Rgb, alpha: f32) -> Color {
    Color::from_rgba(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    )
    .unwrap_or(Color::TRANSPARENT)
}

/// Double shadow: a tight inner halo and a wide diffuse outer halo, each a
/// radial fade from the glow color to transparent.
fn draw_glow(pixmap: &mut Pixmap, center: f32, radius: f32, glow: &Glow, opacity: f32) {
    draw_halo(
        pixmap,
        center,
        radius,
        glow.outer_spread,
        color(glow.color, glow.outer_alpha * opacity),
    );
    draw_halo(
        pixmap,
        center,
        radius,
        glow.inner_spread,
        color(glow.color, glow.inner_alpha * opacity),
    );
}

fn draw_halo(pixmap: &mut Pixmap, center: f32, radius: f32, spread: f32, color: Color) {
    let outer = radius + spread;
    let Some(shader) = RadialGradient::new(
        Point::from_xy(center, center),
        Point::from_xy(center, center),
        outer,
        vec![
            GradientStop::new(radius / outer, color),
            GradientStop::new(1.0, Color::TRANSPARENT),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    ) else {
        return;
    };

    let mut paint = Paint::default();
    paint.shader = shader;
    paint.anti_alias = true;

    let Some(circle) = PathBuilder::from_circle(center, center, outer) else {
        return;
    };

    pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
}

fn draw_disc(pixmap: &mut Pixmap, center: f32, radius: f32, gradient: &Gradient, opacity: f32) {
    let Some(shader) = RadialGradient::new(
        Point::from_xy(center, center),
        Point::from_xy(center, center),
        radius,
        vec![
            GradientStop::new(0.0, color(gradient.center, opacity)),
            GradientStop::new(1.0, color(gradient.edge, opacity)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    ) else {
        return;
    };

    let mut paint = Paint::default();
    paint.shader = shader;
    paint.anti_alias = true;

    let Some(circle) = PathBuilder::from_circle(center, center, radius) else {
        return;
    };

    pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
}

fn draw_star(pixmap: &mut Pixmap, center: f32, outer_radius: f32, opacity: f32) {
    let Some(star) = star_path(center, center, outer_radius) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(color(Rgb::new(255, 255, 255), opacity));
    paint.anti_alias = true;

    pixmap.fill_path(&star, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Five-pointed star with one point straight up
fn star_path(cx: f32, cy: f32, outer_radius: f32) -> Option<tiny_skia::Path> {
    let inner_radius = outer_radius * 0.4;
    let mut pb = PathBuilder::new();

    for i in 0..10 {
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        let angle = std::f32::consts::PI * (i as f32 / 5.0) - std::f32::consts::FRAC_PI_2;
        let x = cx + radius * angle.cos();
        let y = cy + radius * angle.sin();
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.close();

    pb.finish()
}
