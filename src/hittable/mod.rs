use crate::*;
pub mod constant_medium;
pub mod hittable_list;
pub mod quad;
pub mod rotate;
pub mod sphere;
pub mod translate;

pub use constant_medium::*;
pub use hittable_list::*;
pub use quad::*;
pub use rotate::*;
pub use sphere::*;
pub use translate::*;

/// A node of the scene graph.
///
/// `pdf_value` and `random_direction` only mean something for shapes used as
/// light-sampling targets; structural nodes keep the defaults.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter inside `t`.
    fn hit(&self, ray: &Ray, t: &Interval, rng: &mut dyn RngCore) -> Option<HitRecord>;
    fn bounding_box(&self) -> &AABB;
    /// Solid-angle density of sampling `dir` from `orig` toward this shape.
    fn pdf_value(&self, _orig: &Point, _dir: &Vector, _rng: &mut dyn RngCore) -> Float {
        0.0
    }
    /// Direction from `orig` toward a random point on this shape.
    fn random_direction(&self, _orig: &Point, _rng: &mut dyn RngCore) -> Vector {
        Vector::X
    }
}
