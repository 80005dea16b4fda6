//! Mesh generation for WorldMap
//!
//! Generates engine-agnostic mesh data from world polygons.

mod colors;

pub use colors::{BasicColorMapper, ColorMapper, PaletteColorMapper, TerrainColor};

use std::collections::HashSet;

use crate::config::TextureId;
use crate::sphere::UnitVector;
use crate::world::WorldMap;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (normalized direction from sphere center)
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate a mesh of the whole world on a sphere of `radius`
///
/// Every polygon becomes one flat-colored triangle (or fan, for larger
/// polygons). Vertices are not shared between polygons so colors stay sharp.
pub fn generate_mesh<C>(world: &WorldMap, color_mapper: &C, radius: f32) -> MeshData
where
    C: ColorMapper<Option<TextureId>>,
{
    generate_mesh_with_visibility(world, color_mapper, radius, None, [0.0, 0.0, 0.0, 1.0])
}

/// Generate mesh with fog of war support
///
/// # Arguments
/// * `world` - The world to generate mesh for
/// * `color_mapper` - Maps textures to colors
/// * `radius` - Sphere radius in world units
/// * `visible_polygons` - Optional slice of visible polygon IDs. If None, all polygons are visible.
/// * `hidden_color` - Color for hidden polygons (typically black)
pub fn generate_mesh_with_visibility<C>(
    world: &WorldMap,
    color_mapper: &C,
    radius: f32,
    visible_polygons: Option<&[usize]>,
    hidden_color: TerrainColor,
) -> MeshData
where
    C: ColorMapper<Option<TextureId>>,
{
    let mut mesh = MeshData::default();

    let visible_set: Option<HashSet<usize>> =
        visible_polygons.map(|ids| ids.iter().copied().collect());

    for polygon in world.polygons() {
        if polygon.vertices.len() < 3 {
            continue;
        }

        let is_visible = visible_set
            .as_ref()
            .map(|set| set.contains(&polygon.id))
            .unwrap_or(true);

        let color = if is_visible {
            color_mapper.map_color(&polygon.texture)
        } else {
            hidden_color
        };

        push_polygon(&polygon.vertices, radius, color, &mut mesh);
    }

    mesh
}

/// Append a convex polygon as a fan from its first vertex
fn push_polygon(vertices: &[UnitVector], radius: f32, color: TerrainColor, mesh: &mut MeshData) {
    let base_idx = mesh.positions.len() as u32;

    for vertex in vertices {
        let normal = vertex.xyz().as_vec3();
        let position = normal * radius;
        mesh.positions.push(position.to_array());
        mesh.normals.push(normal.to_array());
        mesh.colors.push(color);
    }

    // Vertices are sorted by descending bearing (clockwise seen from outside);
    // emit counter-clockwise triangles
    for i in 1..(vertices.len() as u32 - 1) {
        mesh.indices.push(base_idx);
        mesh.indices.push(base_idx + i + 1);
        mesh.indices.push(base_idx + i);
    }
}
