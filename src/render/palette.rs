//! Fixed grayscale palette shared by every frame of an animation

use crate::io::configuration::PALETTE_LEVELS;

/// Ordered set of RGB colors frames are reduced to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Evenly spaced grays from black to white
    ///
    /// With the default 16 levels this is `#000000, #111111, ..., #ffffff`.
    pub fn grayscale() -> Self {
        let steps = (PALETTE_LEVELS - 1).max(1);
        let colors = (0..PALETTE_LEVELS)
            .map(|level| {
                let gray = (level * usize::from(u8::MAX) / steps) as u8;
                [gray; 3]
            })
            .collect();
        Self { colors }
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color stored at `index`
    pub fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(usize::from(index)).copied()
    }

    /// All colors in order
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Flat `r, g, b, r, g, b, ...` bytes as stored in a GIF color table
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Index of the color closest to `value` by squared RGB distance
    ///
    /// Ties resolve to the lowest index.
    pub fn nearest(&self, value: [i32; 3]) -> u8 {
        let mut best_index = 0;
        let mut best_distance = i32::MAX;
        for (index, color) in self.colors.iter().enumerate() {
            let distance: i32 = value
                .iter()
                .zip(color)
                .map(|(&v, &c)| {
                    let d = v - i32::from(c);
                    d * d
                })
                .sum();
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }
        best_index as u8
    }
}
