use crate::resources::geometry::Geometry;

/// Flat quad in the XZ plane centered at the origin, normal +Y.
///
/// Lies flat so it can serve directly as a floor or mirror surface; the
/// mirror's local reflection normal is `Vec3::Y`.
#[must_use]
pub fn create_plane(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> Geometry {
    let width_half = width / 2.0;
    let depth_half = depth / 2.0;

    let grid_x = width_segments.max(1);
    let grid_z = depth_segments.max(1);

    let grid_x1 = grid_x + 1;
    let grid_z1 = grid_z + 1;

    let segment_width = width / grid_x as f32;
    let segment_depth = depth / grid_z as f32;

    let mut positions = Vec::with_capacity((grid_x1 * grid_z1) as usize);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());
    let mut indices = Vec::with_capacity((grid_x * grid_z * 6) as usize);

    for iz in 0..grid_z1 {
        let z = iz as f32 * segment_depth - depth_half;
        for ix in 0..grid_x1 {
            let x = ix as f32 * segment_width - width_half;

            positions.push([x, 0.0, z]);
            normals.push([0.0, 1.0, 0.0]);
            uvs.push([
                ix as f32 / grid_x as f32,
                1.0 - (iz as f32 / grid_z as f32),
            ]);
        }
    }

    for iz in 0..grid_z {
        for ix in 0..grid_x {
            let a = ix + grid_x1 * iz;
            let b = ix + grid_x1 * (iz + 1);
            let c = (ix + 1) + grid_x1 * (iz + 1);
            let d = (ix + 1) + grid_x1 * iz;

            // CCW as seen from +Y
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::new(positions, normals, uvs, indices)
}
