mod lathe;

pub use lathe::TessellateLathe;

use crate::math::{Point3, Vector3};

/// Parameters controlling lathe tessellation.
#[derive(Debug, Clone, Copy)]
pub struct LatheParams {
    /// Angular step between revolution rings, in degrees. A full turn is
    /// closed when this divides 360.
    pub step_degrees: u32,
}

impl Default for LatheParams {
    fn default() -> Self {
        Self { step_degrees: 3 }
    }
}

/// A triangle mesh of the revolved profile.
#[derive(Debug, Clone, Default)]
pub struct LatheMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}
