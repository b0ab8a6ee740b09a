use crate::*;

#[derive(Clone)]
pub struct HitRecord {
    pub p: Point,
    /// Always faces against the incoming ray.
    pub n: Vector,
    pub t: Float,
    pub mat: Arc<dyn Material>,
    /// Whether the ray struck the outward-facing side.
    pub front: bool,
    pub uv: UV,
}

impl HitRecord {
    /// `outward_normal` must be unit length.
    pub fn new(ray: &Ray, t: Float, outward_normal: Vector, mat: Arc<dyn Material>, uv: UV) -> Self {
        let front = outward_normal.dot(ray.dir) < 0.0;
        let n = if front { outward_normal } else { -outward_normal };
        Self { p: ray.at(t), n, t, mat, front, uv }
    }
}

impl std::fmt::Debug for HitRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("n", &self.n)
            .field("t", &self.t)
            .field("front", &self.front)
            .field("uv", &self.uv)
            .finish()
    }
}
