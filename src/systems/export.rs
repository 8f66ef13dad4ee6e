// saves the tower as an obj file
// by iterating through all the floor meshes

use bevy::prelude::*;
use bevy::render::mesh::{Indices, VertexAttributeValues};
use std::fs::File;
use std::io::{BufWriter, Write};
use thiserror::Error;

use crate::systems::tower::spawn::Floor;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write obj file: {0}")]
    Io(#[from] std::io::Error),
    #[error("no floor meshes to export")]
    Empty,
}

// export event
#[derive(Event)]
pub struct ExportEvent {
    pub filename: String,
}

/// Writes `floors` (mesh plus world transform, bottom first) as OBJ objects.
/// Returns the number of meshes written.
pub fn write_obj<W: Write>(
    writer: &mut W,
    floors: &[(&Mesh, GlobalTransform)],
) -> Result<usize, ExportError> {
    writeln!(writer, "# Exported from Tower Generator")?;

    // OBJ indices start at 1
    let mut vertex_offset = 1u32;
    let mut mesh_count = 0;

    for (index, (mesh, transform)) in floors.iter().enumerate() {
        let Some(VertexAttributeValues::Float32x3(vertices)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            continue;
        };

        writeln!(writer, "o Floor_{}", index)?;

        for vertex in vertices {
            let world = transform.transform_point(Vec3::from(*vertex));
            writeln!(writer, "v {} {} {}", world.x, world.y, world.z)?;
        }

        let faces: Vec<u32> = match mesh.indices() {
            Some(Indices::U32(indices)) => indices.clone(),
            Some(Indices::U16(indices)) => indices.iter().map(|&i| i as u32).collect(),
            None => Vec::new(),
        };
        for chunk in faces.chunks_exact(3) {
            writeln!(
                writer,
                "f {} {} {}",
                vertex_offset + chunk[0],
                vertex_offset + chunk[1],
                vertex_offset + chunk[2]
            )?;
        }

        vertex_offset += vertices.len() as u32;
        writeln!(writer)?;
        mesh_count += 1;
    }

    if mesh_count == 0 {
        return Err(ExportError::Empty);
    }

    writer.flush()?;
    Ok(mesh_count)
}

pub fn export_obj(
    meshes: &Assets<Mesh>,
    floors: &Query<(&Floor, &Mesh3d, &GlobalTransform)>,
    filename: &str,
) -> Result<usize, ExportError> {
    let mut collected: Vec<(u32, &Mesh, GlobalTransform)> = floors
        .iter()
        .filter_map(|(floor, mesh3d, transform)| {
            meshes.get(&mesh3d.0).map(|mesh| (floor.index, mesh, *transform))
        })
        .collect();
    collected.sort_by_key(|(index, _, _)| *index);

    let ordered: Vec<(&Mesh, GlobalTransform)> = collected
        .into_iter()
        .map(|(_, mesh, transform)| (mesh, transform))
        .collect();
    if ordered.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = BufWriter::new(File::create(filename)?);
    write_obj(&mut writer, &ordered)
}

// handle export events
pub fn handle_export(
    mut events: EventReader<ExportEvent>,
    meshes: Res<Assets<Mesh>>,
    floors: Query<(&Floor, &Mesh3d, &GlobalTransform)>,
) {
    for event in events.read() {
        match export_obj(&meshes, &floors, &event.filename) {
            Ok(count) => info!("exported {} floors to {}", count, event.filename),
            Err(e) => warn!("export to {} failed: {}", event.filename, e),
        }
    }
}
