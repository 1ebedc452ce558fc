//! Procedural pixel data shared by the demos. Nothing is loaded from disk;
//! every texture is synthesized before the frame loop starts.
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use specular::{CubeData, TextureData};

/// Two-color checkerboard.
pub fn checkerboard(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> TextureData {
    let cell = (size / cells).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let odd = ((x / cell) + (y / cell)) % 2 == 1;
            pixels.extend_from_slice(if odd { &b } else { &a });
        }
    }
    TextureData::new(size, size, pixels)
}

/// Sky-like cubemap: vertical gradient on the side faces, zenith color on
/// +Y, ground color on -Y. Face order: +X, -X, +Y, -Y, +Z, -Z.
pub fn sky_cubemap(size: u32) -> CubeData {
    let zenith = [86u8, 137, 204, 255];
    let horizon = [214u8, 188, 154, 255];
    let ground = [92u8, 74, 58, 255];

    let lerp = |a: [u8; 4], b: [u8; 4], t: f32| -> [u8; 4] {
        let mut out = [0u8; 4];
        for i in 0..4 {
            out[i] = (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t) as u8;
        }
        out
    };

    let side = |_face: usize| -> TextureData {
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            let t = y as f32 / (size - 1).max(1) as f32;
            let row = lerp(zenith, horizon, t);
            for _ in 0..size {
                pixels.extend_from_slice(&row);
            }
        }
        TextureData::new(size, size, pixels)
    };

    CubeData::new([
        side(0),
        side(1),
        TextureData::solid(size, size, zenith),
        TextureData::solid(size, size, ground),
        side(4),
        side(5),
    ])
}

/// Seeded value-noise texture; the red channel drives mirror distortion.
pub fn noise(size: u32, seed: u64) -> TextureData {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size * size {
        let v: u8 = rng.random();
        pixels.extend_from_slice(&[v, v, v, 255]);
    }
    TextureData::new(size, size, pixels)
}
