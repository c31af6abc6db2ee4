//! Floyd-Steinberg error diffusion onto a fixed palette

use crate::render::palette::Palette;
use image::RgbImage;

// Diffusion weights out of 16
const RIGHT: i32 = 7;
const BELOW_LEFT: i32 = 3;
const BELOW: i32 = 5;
const BELOW_RIGHT: i32 = 1;
const WEIGHT_TOTAL: i32 = 16;

type Residual = [i32; 3];

/// Reduce an RGB canvas to palette indices
///
/// Pixels are visited row by row, left to right. Each pixel's carried
/// error is added before the nearest palette color is chosen, and the
/// remaining error is pushed to the unvisited neighbors. Returns one index
/// per pixel in row-major order.
pub fn dither(canvas: &RgbImage, palette: &Palette) -> Vec<u8> {
    let width = canvas.width() as usize;
    let mut indices = Vec::with_capacity(width * canvas.height() as usize);

    // Padded by one slot on each side so neighbors never fall off the row
    let mut current: Vec<Residual> = vec![[0; 3]; width + 2];
    let mut below: Vec<Residual> = vec![[0; 3]; width + 2];

    for row in canvas.rows() {
        for (x, pixel) in row.enumerate() {
            let carried = current.get(x + 1).copied().unwrap_or_default();
            let mut value = [0i32; 3];
            for ((slot, &channel), error) in value.iter_mut().zip(&pixel.0).zip(carried) {
                *slot = (i32::from(channel) + error / WEIGHT_TOTAL).clamp(0, 255);
            }

            let index = palette.nearest(value);
            indices.push(index);

            let chosen = palette.color(index).unwrap_or_default();
            let mut error = [0i32; 3];
            for ((slot, v), c) in error.iter_mut().zip(value).zip(chosen) {
                *slot = v - i32::from(c);
            }

            spread(&mut current, x + 2, error, RIGHT);
            spread(&mut below, x, error, BELOW_LEFT);
            spread(&mut below, x + 1, error, BELOW);
            spread(&mut below, x + 2, error, BELOW_RIGHT);
        }

        std::mem::swap(&mut current, &mut below);
        below.fill([0; 3]);
    }

    indices
}

fn spread(row: &mut [Residual], at: usize, error: Residual, weight: i32) {
    if let Some(slot) = row.get_mut(at) {
        for (acc, e) in slot.iter_mut().zip(error) {
            *acc += e * weight;
        }
    }
}
