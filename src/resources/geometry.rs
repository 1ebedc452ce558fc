//! Mesh Geometry
//!
//! CPU-side mesh data: planar position/normal/uv attribute arrays plus
//! triangle indices. Each attribute is uploaded to its own vertex buffer
//! (slot 0 = position, 1 = normal, 2 = uv), so passes that only consume
//! positions — the shadow pass — bind a single buffer.

/// Triangle mesh with planar vertex attributes.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl Geometry {
    /// Assembles a geometry from raw attribute arrays.
    ///
    /// All attribute arrays must describe the same vertex count and every
    /// index must be in range; both are debug-asserted.
    #[must_use]
    pub fn new(
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < positions.len()),
            "geometry index out of range"
        );

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    #[inline]
    #[must_use]
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
