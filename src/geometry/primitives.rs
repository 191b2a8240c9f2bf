//! # Primitive Shape Generation
//!
//! Procedural generators for the basic shapes: a subdivided cube, a
//! cylinder with cap fans, and an icosahedron-subdivision sphere. All
//! shapes are unit sized and centered at the origin, with counter-clockwise
//! winding and normals suitable for the requested [`NormalMode`].
//!
//! Subdivision arguments below their documented minimum are clamped up
//! with a logged warning rather than rejected; the generators are total.

use std::f32::consts::PI;

use super::{Mesh, NormalMode};
use crate::math::Vec3;

/// Per-face walk for the cube: anchor corner, step direction across the
/// face, and step direction down the face. Face order: front, back, right,
/// left, top, bottom.
const CUBE_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
    ),
    (
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
    ),
    (
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, -1.0, 0.0),
    ),
    (
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, -1.0, 0.0),
    ),
    (
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ),
    (
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
    ),
];

/// Generates a unit cube centered at the origin.
///
/// Each face is a `sub_div` x `sub_div` grid of quads, two flat-shaded
/// triangles per cell, so the result has `6 * sub_div^2 * 2` triangles.
/// `sub_div` is clamped to a minimum of 1.
pub fn generate_cube(sub_div: u32) -> Mesh {
    let sub_div = clamp_min(sub_div, 1, "cube subdivision");
    let side = 1.0 / sub_div as f32;

    let mut mesh = Mesh::new();
    for (origin, across, down) in CUBE_FACES {
        let across = across * side;
        let down = down * side;
        for i in 0..sub_div {
            for j in 0..sub_div {
                let corner = origin + across * i as f32 + down * j as f32;
                mesh.add_triangle(corner, corner + down, corner + across);
                mesh.add_triangle(corner + down, corner + across + down, corner + across);
            }
        }
    }

    mesh.fill_sequential_elements();
    mesh
}

/// Generates a cylinder of radius 0.5 and height 1, centered at the
/// origin with its axis along Y.
///
/// Walks `sub_div_base` angular wedges; each wedge contributes one
/// triangle to the top cap fan, one to the bottom cap fan, and
/// `sub_div_height` side quads. [`NormalMode::Smooth`] gives the side
/// vertices radial `(x, 0, z)` normals while the caps keep their flat
/// vertical normals in both modes.
///
/// `sub_div_base` is clamped to a minimum of 3 and `sub_div_height` to a
/// minimum of 1.
pub fn generate_cylinder(sub_div_base: u32, sub_div_height: u32, mode: NormalMode) -> Mesh {
    let sub_div_base = clamp_min(sub_div_base, 3, "cylinder base subdivision");
    let sub_div_height = clamp_min(sub_div_height, 1, "cylinder height subdivision");

    let theta = (2.0 * PI) / sub_div_base as f32;
    let side = 1.0 / sub_div_height as f32;
    let radius = 0.5;

    let top = Vec3::new(0.0, 0.5, 0.0);
    let bottom = Vec3::new(0.0, -0.5, 0.0);

    let mut mesh = Mesh::new();
    for i in 0..sub_div_base {
        // Wedge rim points, leading edge first.
        let (x1, z1) = {
            let a = (i + 1) as f32 * theta;
            (radius * a.cos(), radius * a.sin())
        };
        let (x2, z2) = {
            let a = i as f32 * theta;
            (radius * a.cos(), radius * a.sin())
        };

        mesh.add_triangle(
            bottom,
            Vec3::new(x2, -0.5, z2),
            Vec3::new(x1, -0.5, z1),
        );
        mesh.add_triangle(top, Vec3::new(x1, 0.5, z1), Vec3::new(x2, 0.5, z2));

        for j in 0..sub_div_height {
            let y_hi = 0.5 - j as f32 * side;
            let y_lo = 0.5 - (j + 1) as f32 * side;
            let a = Vec3::new(x1, y_hi, z1);
            let b = Vec3::new(x1, y_lo, z1);
            let c = Vec3::new(x2, y_hi, z2);
            let d = Vec3::new(x2, y_lo, z2);

            match mode {
                NormalMode::Flat => {
                    mesh.add_triangle(a, b, c);
                    mesh.add_triangle(b, d, c);
                }
                NormalMode::Smooth => {
                    let n1 = Vec3::new(x1, 0.0, z1).normalize();
                    let n2 = Vec3::new(x2, 0.0, z2).normalize();
                    mesh.add_triangle_with_normals(a, b, c, n1, n1, n2);
                    mesh.add_triangle_with_normals(b, d, c, n1, n2, n2);
                }
            }
        }
    }

    mesh.fill_sequential_elements();
    mesh
}

/// Generates a unit sphere by icosahedron subdivision.
///
/// Starts from the 12 analytic vertices of a regular icosahedron (apex at
/// `+Z`, pentagon rings at latitude `±atan(0.5)`, nadir at `-Z`) and
/// splits each of the 20 faces at its edge midpoints, renormalizing every
/// midpoint back onto the unit sphere. `sub_div = 1` emits the raw
/// icosahedron; each further level quadruples the triangle count, for
/// `20 * 4^(sub_div - 1)` triangles total.
///
/// [`NormalMode::Smooth`] uses each (unit-length) vertex position as its
/// own normal; [`NormalMode::Flat`] replicates the face normal.
///
/// `sub_div` is clamped to a minimum of 1. The subdivision runs on an
/// explicit work-stack, so deep levels do not grow the call stack.
///
/// Reference: Hoffmann, Gernot. Sphere Tesselation by Icosahedron
/// Subdivision. <http://docs-hoffmann.de/ikos27042002.pdf>
pub fn generate_sphere(sub_div: u32, mode: NormalMode) -> Mesh {
    let sub_div = clamp_min(sub_div, 1, "sphere subdivision");

    let vert = icosahedron_vertices();

    #[rustfmt::skip]
    const FACES: [(usize, usize, usize); 20] = [
        (1, 2, 0), (2, 3, 0), (3, 4, 0), (4, 5, 0), (5, 1, 0),
        (6, 2, 1), (6, 7, 2), (7, 3, 2), (7, 8, 3), (8, 4, 3),
        (8, 9, 4), (9, 5, 4), (9, 10, 5), (10, 1, 5), (10, 6, 1),
        (11, 7, 6), (11, 8, 7), (11, 9, 8), (11, 10, 9), (11, 6, 10),
    ];

    let mut mesh = Mesh::new();
    let mut stack: Vec<(Vec3, Vec3, Vec3, u32)> = Vec::new();

    for (a, b, c) in FACES {
        stack.push((vert[a], vert[b], vert[c], sub_div));
        while let Some((v0, v1, v2, depth)) = stack.pop() {
            if depth == 1 {
                match mode {
                    NormalMode::Flat => mesh.add_triangle(v0, v1, v2),
                    NormalMode::Smooth => {
                        mesh.add_triangle_with_normals(v0, v1, v2, v0, v1, v2)
                    }
                }
            } else {
                // Edge midpoints, pushed back onto the unit sphere. Children
                // go on the stack in reverse so they emit in corner,
                // corner, corner, center order.
                let m01 = (v0 + v1).normalize();
                let m12 = (v1 + v2).normalize();
                let m20 = (v2 + v0).normalize();
                stack.push((m01, m12, m20, depth - 1));
                stack.push((m20, m12, v2, depth - 1));
                stack.push((m01, v1, m12, depth - 1));
                stack.push((v0, m01, m20, depth - 1));
            }
        }
    }

    mesh.fill_sequential_elements();
    mesh
}

/// The 12 vertices of a regular icosahedron inscribed in the unit sphere,
/// apex at `+Z`.
fn icosahedron_vertices() -> [Vec3; 12] {
    // Pentagon rings sit at latitude atan(1/2).
    let theta = 26.565_f32.to_radians();
    let (sin_t, cos_t) = (theta.sin(), theta.cos());
    let step = 2.0 * PI / 5.0;

    let mut vert = [Vec3::zero(); 12];
    vert[0] = Vec3::new(0.0, 0.0, 1.0);

    let mut psi: f32 = 0.0;
    for v in vert.iter_mut().take(6).skip(1) {
        *v = Vec3::new(cos_t * psi.cos(), cos_t * psi.sin(), sin_t);
        psi += step;
    }

    psi = PI / 5.0;
    for v in vert.iter_mut().take(11).skip(6) {
        *v = Vec3::new(cos_t * psi.cos(), cos_t * psi.sin(), -sin_t);
        psi += step;
    }

    vert[11] = Vec3::new(0.0, 0.0, -1.0);
    vert
}

fn clamp_min(value: u32, min: u32, what: &str) -> u32 {
    if value < min {
        log::warn!("{what} of {value} is below the minimum, clamping to {min}");
        min
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn normal_lengths(mesh: &Mesh) -> impl Iterator<Item = f32> + '_ {
        mesh.normals
            .chunks(3)
            .map(|n| Vec3::new(n[0], n[1], n[2]).length())
    }

    #[test]
    fn cube_triangle_count_scales_with_subdivision() {
        for n in [1, 2, 4] {
            let cube = generate_cube(n);
            let expected = 6 * n as usize * n as usize * 2;
            assert_eq!(cube.triangle_count(), expected);
            assert_eq!(cube.vertex_count(), expected * 3);
            assert_eq!(cube.normal_count(), cube.vertex_count());
        }
    }

    #[test]
    fn cube_subdivision_below_minimum_is_clamped() {
        assert_eq!(generate_cube(0).triangle_count(), 12);
    }

    #[test]
    fn cube_normals_are_unit_and_axis_aligned() {
        let cube = generate_cube(3);
        for len in normal_lengths(&cube) {
            assert!((len - 1.0).abs() < EPS);
        }
        for n in cube.normals.chunks(3) {
            let axis_components = n.iter().filter(|c| c.abs() > EPS).count();
            assert_eq!(axis_components, 1);
        }
    }

    #[test]
    fn cube_vertices_stay_on_surface() {
        let cube = generate_cube(2);
        for v in cube.vertices.chunks(3) {
            let max = v.iter().fold(0.0f32, |m, c| m.max(c.abs()));
            assert!((max - 0.5).abs() < EPS);
        }
    }

    #[test]
    fn sphere_level_one_is_the_raw_icosahedron() {
        let sphere = generate_sphere(1, NormalMode::Flat);
        assert_eq!(sphere.vertex_count(), 20 * 3);
        assert_eq!(sphere.triangle_count(), 20);
    }

    #[test]
    fn sphere_subdivision_quadruples_triangles() {
        for n in 1..=4 {
            let sphere = generate_sphere(n, NormalMode::Smooth);
            assert_eq!(sphere.triangle_count(), 20 * 4usize.pow(n - 1));
        }
    }

    #[test]
    fn sphere_vertices_lie_on_unit_sphere() {
        for n in [1, 3] {
            let sphere = generate_sphere(n, NormalMode::Flat);
            for v in sphere.vertices.chunks(3) {
                let len = Vec3::new(v[0], v[1], v[2]).length();
                assert!((len - 1.0).abs() < EPS, "vertex off sphere at level {n}");
            }
        }
    }

    #[test]
    fn smooth_sphere_normals_equal_positions() {
        let sphere = generate_sphere(2, NormalMode::Smooth);
        assert_eq!(sphere.vertices, sphere.normals);
    }

    #[test]
    fn cylinder_triangle_count_matches_wedge_layout() {
        let base = 8;
        let height = 3;
        let cyl = generate_cylinder(base, height, NormalMode::Flat);
        // Per wedge: one top cap, one bottom cap, two per side quad.
        let expected = base as usize * (2 + 2 * height as usize);
        assert_eq!(cyl.triangle_count(), expected);
    }

    #[test]
    fn cylinder_subdivisions_below_minimum_are_clamped() {
        let cyl = generate_cylinder(1, 0, NormalMode::Flat);
        assert_eq!(cyl.triangle_count(), 3 * (2 + 2));
    }

    #[test]
    fn smooth_cylinder_sides_get_radial_normals() {
        let cyl = generate_cylinder(4, 1, NormalMode::Smooth);
        // Per wedge the first two triangles are caps (vertical normals),
        // the next two are sides (radial normals).
        for wedge in 0..4 {
            let base = wedge * 4 * 3;
            for corner in 0..3 {
                let n = &cyl.normals[(base + corner) * 3..(base + corner) * 3 + 3];
                assert!(n[1].abs() > 0.99, "cap normal should be vertical");
            }
            for corner in 6..12 {
                let n = &cyl.normals[(base + corner) * 3..(base + corner) * 3 + 3];
                assert!(n[1].abs() < EPS, "side normal should be radial");
                let len = (n[0] * n[0] + n[2] * n[2]).sqrt();
                assert!((len - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn cylinder_rim_stays_at_radius() {
        let cyl = generate_cylinder(6, 2, NormalMode::Flat);
        for v in cyl.vertices.chunks(3) {
            let r = (v[0] * v[0] + v[2] * v[2]).sqrt();
            assert!(r < 0.5 + EPS);
        }
    }

    #[test]
    fn generators_emit_dense_sequential_elements() {
        let sphere = generate_sphere(2, NormalMode::Flat);
        assert_eq!(sphere.element_count(), sphere.vertex_count());
        assert!(sphere
            .elements
            .iter()
            .enumerate()
            .all(|(i, &e)| usize::from(e) == i));
    }
}
