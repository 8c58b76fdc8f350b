//! Indexed triangle meshes and their flat wire form.

use crate::errors::GenerationError;
use crate::float_types::Real;
use nalgebra::Point3;
use serde::Serialize;

/// One triangle as three indices into [`Mesh::vertices`].
pub type Face = [usize; 3];

/// Vertex positions plus triangle index triples, as produced by a sampler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub const fn from_parts(vertices: Vec<Point3<Real>>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Faces referencing a vertex index past the end of [`Mesh::vertices`].
    ///
    /// Non-zero only when samples were rejected, since face indices are laid out in grid space.
    pub fn dangling_face_count(&self) -> usize {
        let len = self.vertices.len();
        self.faces
            .iter()
            .filter(|face| face.iter().any(|&idx| idx >= len))
            .count()
    }

    /// Consume the mesh into interleaved `x,y,z` positions and `a,b,c` indices.
    pub fn flatten(self) -> FlatMesh {
        let mut vertices = Vec::with_capacity(self.vertices.len() * 3);
        for p in &self.vertices {
            vertices.extend_from_slice(&[p.x, p.y, p.z]);
        }

        let mut faces = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            faces.extend_from_slice(face);
        }

        FlatMesh { vertices, faces }
    }
}

/// Flat sequences sent over the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlatMesh {
    pub vertices: Vec<Real>,
    pub faces: Vec<usize>,
}

impl FlatMesh {
    /// Fail with [`GenerationError::NonFiniteOutput`] if any element is NaN or infinite.
    ///
    /// Indices are integers and always pass; they are still checked so a future index
    /// representation cannot slip through unaudited.
    pub fn audit(&self) -> Result<(), GenerationError> {
        let vertices_ok = self.vertices.iter().all(|c| c.is_finite());
        let faces_ok = self.faces.iter().all(|&idx| (idx as Real).is_finite());
        if vertices_ok && faces_ok {
            Ok(())
        } else {
            Err(GenerationError::NonFiniteOutput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_interleaves_coordinates_and_indices() {
        let mesh = Mesh::from_parts(
            vec![
                Point3::new(0.0, 1.0, 2.0),
                Point3::new(3.0, 4.0, 5.0),
                Point3::new(6.0, 7.0, 8.0),
            ],
            vec![[0, 1, 2], [2, 1, 0]],
        );
        let flat = mesh.flatten();
        assert_eq!(flat.vertices, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(flat.faces, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn audit_catches_nan_and_infinity() {
        let mut flat = FlatMesh {
            vertices: vec![0.0, 1.0, 2.0],
            faces: vec![0, 0, 0],
        };
        assert!(flat.audit().is_ok());

        flat.vertices[1] = Real::NAN;
        assert_eq!(flat.audit(), Err(GenerationError::NonFiniteOutput));

        flat.vertices[1] = Real::NEG_INFINITY;
        assert_eq!(flat.audit(), Err(GenerationError::NonFiniteOutput));
    }

    #[test]
    fn default_mesh_is_empty() {
        let mesh = Mesh::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.flatten(), FlatMesh::default());
    }

    #[test]
    fn dangling_faces_are_counted() {
        let mesh = Mesh::from_parts(vec![Point3::origin(); 2], vec![[0, 1, 0], [0, 1, 2]]);
        assert_eq!(mesh.dangling_face_count(), 1);
    }
}
