use crate::*;

/// Orthonormal basis with `w` along the given normal.
#[derive(Debug, Clone, Copy)]
pub struct ONB {
    pub u: Vector,
    pub v: Vector,
    pub w: Vector,
}

impl ONB {
    pub fn new(n: &Vector) -> Self {
        let w = n.normalize();
        let a = if w.x.abs() > 0.9 { Vector::Y } else { Vector::X };
        let v = w.cross(a).normalize();
        let u = w.cross(v);
        Self { u, v, w }
    }
    /// Local basis coordinates to world space.
    pub fn transform(&self, local: &Vector) -> Vector {
        local.x * self.u + local.y * self.v + local.z * self.w
    }
}
