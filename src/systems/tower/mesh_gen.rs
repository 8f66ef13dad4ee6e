use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use super::shape::Contour;

// contours are in the XZ plane (contour y -> world z), counter-clockwise seen from +Y
// slabs are centered on y = 0 so the floor transform places their mid-plane

fn empty_mesh() -> Mesh {
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}

/// Signed area, positive for counter-clockwise contours.
fn contour_area(contour: &[Vec2]) -> f32 {
    if contour.len() < 3 {
        return 0.0;
    }

    let n = contour.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += contour[i].x * contour[j].y - contour[j].x * contour[i].y;
    }
    area / 2.0
}

/// Area centroid, `Vec2::ZERO` for degenerate contours.
pub fn contour_centroid(contour: &[Vec2]) -> Vec2 {
    let area = contour_area(contour);
    if contour.len() < 3 || area.abs() < f32::EPSILON {
        return Vec2::ZERO;
    }

    let n = contour.len();
    let mut centroid = Vec2::ZERO;
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = contour[i].x * contour[j].y - contour[j].x * contour[i].y;
        centroid += (contour[i] + contour[j]) * cross;
    }
    centroid / (6.0 * area)
}

/// Extrudes a contour into a closed slab of the given thickness.
/// Returns an empty mesh for contours with fewer than 3 points.
pub fn contour_to_slab(contour: &Contour, thickness: f32) -> Mesh {
    if contour.len() < 3 {
        return empty_mesh();
    }

    let n = contour.len();
    let bottom = -thickness * 0.5;
    let top = thickness * 0.5;

    let mut positions = Vec::with_capacity(6 * n + 2);
    let mut normals = Vec::with_capacity(6 * n + 2);
    let mut uvs = Vec::with_capacity(6 * n + 2);
    let mut indices = Vec::with_capacity(12 * n);

    // walls, one flat-shaded quad per contour edge
    for i in 0..n {
        let v1 = contour[i];
        let v2 = contour[(i + 1) % n];
        let edge = v2 - v1;
        let normal = Vec2::new(edge.y, -edge.x).normalize_or_zero();
        let base_idx = positions.len() as u32;

        positions.extend([
            [v1.x, bottom, v1.y],
            [v2.x, bottom, v2.y],
            [v1.x, top, v1.y],
            [v2.x, top, v2.y],
        ]);
        normals.extend([[normal.x, 0.0, normal.y]; 4]);

        let edge_length = edge.length();
        uvs.extend([
            [0.0, 0.0], [edge_length, 0.0],
            [0.0, thickness], [edge_length, thickness],
        ]);

        indices.extend([base_idx, base_idx + 2, base_idx + 1]);
        indices.extend([base_idx + 1, base_idx + 2, base_idx + 3]);
    }

    // caps, fans around the centroid
    let centroid = contour_centroid(contour);
    let extent = contour
        .iter()
        .map(|p| p.abs().max_element())
        .fold(0.0_f32, f32::max)
        .max(f32::EPSILON);
    let cap_uv = |p: Vec2| [p.x / extent * 0.5 + 0.5, p.y / extent * 0.5 + 0.5];

    for (y, up) in [(bottom, false), (top, true)] {
        let center = positions.len() as u32;
        let normal = if up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };

        positions.push([centroid.x, y, centroid.y]);
        normals.push(normal);
        uvs.push(cap_uv(centroid));

        for (i, vertex) in contour.iter().enumerate() {
            positions.push([vertex.x, y, vertex.y]);
            normals.push(normal);
            uvs.push(cap_uv(*vertex));

            let current = center + 1 + i as u32;
            let next = center + 1 + ((i + 1) % n) as u32;
            if up {
                indices.extend([center, next, current]);
            } else {
                indices.extend([center, current, next]);
            }
        }
    }

    let mut mesh = empty_mesh();
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}
