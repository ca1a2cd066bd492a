use std::f32::consts::PI;

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3};
use crate::profile::Profile;

use super::{LatheMesh, LatheParams};

/// Revolves a profile around the x axis into a triangle mesh.
///
/// Each open-traversal vertex pair becomes one band of the surface,
/// shaded with the profile's cached edge normal swept around the axis.
/// The closing wraparound edge has no cached normal and produces no
/// band, matching the profile's open traversal.
#[derive(Debug, Clone, Copy)]
pub struct TessellateLathe {
    params: LatheParams,
}

impl TessellateLathe {
    /// Creates a lathe tessellation with the given parameters.
    #[must_use]
    pub fn new(params: LatheParams) -> Self {
        Self { params }
    }

    /// Generates the revolved mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the angular step is zero or larger than
    /// 120 degrees.
    pub fn execute(&self, profile: &Profile) -> Result<LatheMesh> {
        let step = self.params.step_degrees;
        if step == 0 || step > 120 {
            return Err(TessellationError::InvalidParameters(format!(
                "angular step must be in 1..=120 degrees, got {step}"
            ))
            .into());
        }

        let points = profile.points();
        let normals = profile.normals();
        let mut mesh = LatheMesh::default();

        for (pair, normal) in points.windows(2).zip(normals) {
            let (pre, cur) = (&pair[0], &pair[1]);
            #[allow(clippy::cast_possible_truncation)]
            let base = mesh.vertices.len() as u32;
            let mut rings = 0_u32;

            for angle in (0..=360_u32).step_by(step as usize) {
                #[allow(clippy::cast_precision_loss)]
                let theta = angle as f32 * PI / 180.0;
                let (sin, cos) = theta.sin_cos();

                mesh.vertices
                    .push(Point3::new(pre.x, pre.y * cos, pre.y * sin));
                mesh.vertices
                    .push(Point3::new(cur.x, cur.y * cos, cur.y * sin));
                let swept = Vector3::new(normal.x, normal.y * cos, normal.y * sin);
                mesh.normals.push(swept);
                mesh.normals.push(swept);
                rings += 1;
            }

            for k in 0..rings - 1 {
                let b = base + 2 * k;
                mesh.indices.push([b, b + 1, b + 2]);
                mesh.indices.push([b + 2, b + 1, b + 3]);
            }
        }

        Ok(mesh)
    }
}
