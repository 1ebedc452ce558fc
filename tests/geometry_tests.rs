//! Primitive Geometry Tests
//!
//! Tests for:
//! - Vertex/index counts of box, plane and sphere constructors
//! - Attribute invariants: unit normals, indices in range, UVs in [0, 1]

use specular::{create_box, create_plane, create_sphere};

const EPSILON: f32 = 1e-4;

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

// ============================================================================
// Box
// ============================================================================

#[test]
fn box_counts() {
    let geometry = create_box(1.5, 1.5, 1.5);
    // 4 vertices per face, 2 triangles per face
    assert_eq!(geometry.vertex_count(), 24);
    assert_eq!(geometry.index_count(), 36);
}

#[test]
fn box_extents_match_dimensions() {
    let geometry = create_box(2.0, 4.0, 6.0);
    for position in geometry.positions() {
        assert!(position[0].abs() <= 1.0 + EPSILON);
        assert!(position[1].abs() <= 2.0 + EPSILON);
        assert!(position[2].abs() <= 3.0 + EPSILON);
    }
}

#[test]
fn box_normals_are_axis_aligned_units() {
    let geometry = create_box(1.0, 1.0, 1.0);
    for normal in geometry.normals() {
        assert!((length(*normal) - 1.0).abs() < EPSILON);
        let nonzero = normal.iter().filter(|c| c.abs() > EPSILON).count();
        assert_eq!(nonzero, 1, "box normals are axis-aligned");
    }
}

// ============================================================================
// Plane
// ============================================================================

#[test]
fn plane_counts_with_segments() {
    let geometry = create_plane(10.0, 10.0, 4, 3);
    assert_eq!(geometry.vertex_count(), 5 * 4);
    assert_eq!(geometry.index_count(), 4 * 3 * 6);
}

#[test]
fn plane_lies_flat_with_up_normal() {
    let geometry = create_plane(2.0, 2.0, 2, 2);
    for position in geometry.positions() {
        assert!(position[1].abs() < EPSILON, "plane vertices sit at y=0");
    }
    for normal in geometry.normals() {
        assert!((normal[1] - 1.0).abs() < EPSILON, "plane normal is +Y");
    }
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn sphere_vertices_lie_on_radius() {
    let radius = 2.5;
    let geometry = create_sphere(radius, 16, 8);
    for position in geometry.positions() {
        assert!(
            (length(*position) - radius).abs() < 1e-3,
            "vertex {position:?} off the sphere"
        );
    }
}

#[test]
fn sphere_normals_are_radial_units() {
    let geometry = create_sphere(3.0, 12, 6);
    for (position, normal) in geometry.positions().iter().zip(geometry.normals()) {
        assert!((length(*normal) - 1.0).abs() < 1e-3);
        // Normal parallel to position vector
        let dot = position[0] * normal[0] + position[1] * normal[1] + position[2] * normal[2];
        assert!(dot > 0.0, "normal must point outward");
    }
}

// ============================================================================
// Shared invariants
// ============================================================================

#[test]
fn indices_stay_in_range() {
    for geometry in [
        create_box(1.0, 2.0, 3.0),
        create_plane(5.0, 5.0, 3, 3),
        create_sphere(1.0, 10, 5),
    ] {
        let vertex_count = geometry.vertex_count();
        assert!(geometry.indices().iter().all(|&i| i < vertex_count));
        assert_eq!(geometry.index_count() % 3, 0, "triangle lists only");
    }
}

#[test]
fn uvs_stay_normalized() {
    for geometry in [
        create_box(1.0, 1.0, 1.0),
        create_plane(4.0, 4.0, 2, 2),
        create_sphere(1.0, 8, 4),
    ] {
        for uv in geometry.uvs() {
            assert!((-EPSILON..=1.0 + EPSILON).contains(&uv[0]));
            assert!((-EPSILON..=1.0 + EPSILON).contains(&uv[1]));
        }
    }
}
