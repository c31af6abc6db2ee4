//! Starfield rasterization onto RGB canvases

use crate::io::configuration::{BACKGROUND_GRAY, STAR_GRAY};
use crate::render::projection::{Geometry, project};
use crate::scene::Star;
use image::{Rgb, RgbImage};

/// Rasterize one frame of the starfield
///
/// Starts from a canvas filled with the background gray and paints every
/// visible projection of every star as a white disc, in star order.
pub fn render_frame(stars: &[Star], ratio: f64, geometry: &Geometry) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        geometry.width,
        geometry.height,
        Rgb([BACKGROUND_GRAY; 3]),
    );
    let color = Rgb([STAR_GRAY; 3]);

    for star in stars {
        for projection in project(star, ratio, geometry) {
            fill_circle(
                &mut canvas,
                projection.x,
                projection.y,
                projection.radius,
                color,
            );
        }
    }

    canvas
}

/// Paint a filled disc centered at `(cx, cy)`
///
/// Pixels whose centers lie inside the disc take `color`; pixels straddling
/// the edge are blended by their approximate coverage. Discs with a
/// non-positive radius paint nothing and pixels outside the canvas are clipped.
pub fn fill_circle(canvas: &mut RgbImage, cx: f64, cy: f64, radius: f64, color: Rgb<u8>) {
    if radius.is_nan() || radius <= 0.0 || !cx.is_finite() || !cy.is_finite() {
        return;
    }

    let reach = radius + 0.5;
    let x_start = (cx - reach).floor().max(0.0);
    let y_start = (cy - reach).floor().max(0.0);
    let x_end = (cx + reach).ceil().min(f64::from(canvas.width()));
    let y_end = (cy + reach).ceil().min(f64::from(canvas.height()));
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    for py in (y_start as u32)..(y_end as u32) {
        let dy = f64::from(py) + 0.5 - cy;
        for px in (x_start as u32)..(x_end as u32) {
            let dx = f64::from(px) + 0.5 - cx;
            // One pixel wide ramp across the edge
            let coverage = (reach - dx.hypot(dy)).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
                *pixel = blend(*pixel, color, coverage);
            }
        }
    }
}

fn blend(dst: Rgb<u8>, src: Rgb<u8>, coverage: f64) -> Rgb<u8> {
    let mix = |d: u8, s: u8| -> u8 {
        (f64::from(s) - f64::from(d))
            .mul_add(coverage, f64::from(d))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    let [dr, dg, db] = dst.0;
    let [sr, sg, sb] = src.0;
    Rgb([mix(dr, sr), mix(dg, sg), mix(db, sb)])
}
