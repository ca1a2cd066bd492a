pub mod intersect_2d;
pub mod orient_2d;
pub mod polygon_2d;

/// 2D point type.
///
/// All profile geometry is single precision, and coincidence tests
/// throughout the crate use exact `==` comparison — there is no global
/// tolerance constant. Inputs on an exactly-representable grid
/// (integers, halves, quarters) keep their coincidence classifications
/// stable across repeated cuts.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type (lathe mesh output).
pub type Point3 = nalgebra::Point3<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type (lathe mesh output).
pub type Vector3 = nalgebra::Vector3<f32>;
