//! CPU-side Pixel Data
//!
//! Image assets are consumed as opaque RGBA8 pixel blocks prepared before
//! the frame loop starts. There is no file decoding here; demos synthesize
//! their pixels procedurally or bring their own.

/// RGBA8 pixel block for a 2D texture.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl TextureData {
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Single-color texture.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .into_iter()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self::new(width, height, pixels)
    }
}

/// Six square faces of an environment cubemap, in wgpu layer order:
/// +X, −X, +Y, −Y, +Z, −Z.
#[derive(Debug, Clone)]
pub struct CubeData {
    pub faces: [TextureData; 6],
}

impl CubeData {
    #[must_use]
    pub fn new(faces: [TextureData; 6]) -> Self {
        debug_assert!(
            faces
                .iter()
                .all(|f| f.width == faces[0].width && f.height == faces[0].height),
            "cubemap faces must share one size"
        );
        debug_assert_eq!(faces[0].width, faces[0].height, "cubemap faces must be square");
        Self { faces }
    }

    #[inline]
    #[must_use]
    pub fn face_size(&self) -> u32 {
        self.faces[0].width
    }
}
