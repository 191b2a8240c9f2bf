//! # OBJ Import
//!
//! Loads Wavefront OBJ files into indexed [`Mesh`] buffers. File reading
//! and record parsing are delegated to `tobj`; this module runs the vertex
//! welding pass on top of tobj's raw multi-index output.
//!
//! ## Welding
//!
//! An OBJ face corner names separate position/UV/normal indices. Corners
//! that reference the identical `(position, uv, normal)` tuple are one
//! logical vertex, so they are merged into a single emitted vertex that
//! the element buffer references repeatedly. Assignment is
//! first-seen-wins: emitted indices follow the order tuples first appear
//! in the face stream.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use super::Mesh;

/// Errors from OBJ import.
#[derive(Debug, Error)]
pub enum ObjError {
    /// The file could not be read or parsed.
    #[error("failed to load OBJ file: {0}")]
    Load(#[from] tobj::LoadError),

    /// Welding produced more unique vertices than a 16-bit element buffer
    /// can address.
    #[error("mesh needs {count} welded vertices, more than a 16-bit index buffer can address")]
    IndexOverflow { count: usize },
}

/// Loads an OBJ file, producing one welded [`Mesh`] per model in the file.
///
/// Faces are triangulated during parsing. Normals and UVs are carried
/// through when the file provides them and left empty otherwise; texture
/// and material files referenced by the OBJ are ignored (image decoding
/// belongs to the rendering layer).
pub fn load_obj(path: impl AsRef<Path>) -> Result<Vec<Mesh>, ObjError> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            // Keep the raw per-attribute index streams so the welding pass
            // below controls vertex identity.
            single_index: false,
            ..Default::default()
        },
    )?;

    let mut meshes = Vec::with_capacity(models.len());
    for model in &models {
        let mesh = weld(&model.mesh)?;
        log::debug!(
            "loaded OBJ model {:?} from {}: {} face corners welded to {} vertices",
            model.name,
            path.display(),
            model.mesh.indices.len(),
            mesh.vertex_count()
        );
        meshes.push(mesh);
    }
    Ok(meshes)
}

/// Welds a tobj multi-index mesh into single-index buffers.
fn weld(raw: &tobj::Mesh) -> Result<Mesh, ObjError> {
    let has_uvs = !raw.texcoord_indices.is_empty();
    let has_normals = !raw.normal_indices.is_empty();

    let mut mesh = Mesh::new();
    let mut seen: HashMap<(u32, Option<u32>, Option<u32>), u16> = HashMap::new();

    for corner in 0..raw.indices.len() {
        let key = (
            raw.indices[corner],
            has_uvs.then(|| raw.texcoord_indices[corner]),
            has_normals.then(|| raw.normal_indices[corner]),
        );

        let index = match seen.get(&key) {
            Some(&index) => index,
            None => {
                let pos = key.0 as usize * 3;
                mesh.vertices
                    .extend_from_slice(&raw.positions[pos..pos + 3]);

                if let Some(uv_index) = key.1 {
                    let uv = uv_index as usize * 2;
                    mesh.uvs.extend_from_slice(&raw.texcoords[uv..uv + 2]);
                }
                if let Some(normal_index) = key.2 {
                    let n = normal_index as usize * 3;
                    mesh.normals.extend_from_slice(&raw.normals[n..n + 3]);
                }

                let emitted = mesh.vertex_count() - 1;
                let index = u16::try_from(emitted)
                    .map_err(|_| ObjError::IndexOverflow { count: emitted + 1 })?;
                seen.insert(key, index);
                index
            }
        };
        mesh.elements.push(index);
    }

    Ok(mesh)
}
