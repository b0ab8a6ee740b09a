use crate::*;

/// Homogeneous participating medium filling a closed boundary.
pub struct ConstantMedium {
    boundary: Arc<dyn Hittable>,
    neg_inv_density: Float,
    phase_function: Arc<dyn Material>,
}

impl ConstantMedium {
    pub fn from_color(boundary: Arc<dyn Hittable>, density: Float, albedo: Color) -> Self {
        Self::from_texture(boundary, density, Arc::new(SolidColor::from_color(albedo)))
    }
    pub fn from_texture(boundary: Arc<dyn Hittable>, density: Float, tex: Arc<dyn Texture>) -> Self {
        assert!(density > 0.0, "medium density must be positive, got {}", density);
        let neg_inv_density = -density.recip();
        let phase_function = Arc::new(Isotropic::from_texture(tex));
        Self { boundary, neg_inv_density, phase_function }
    }
}

impl Hittable for ConstantMedium {
    fn hit(&self, ray: &Ray, t: &Interval, rng: &mut dyn RngCore) -> Option<HitRecord> {
        let entry = self.boundary.hit(ray, &Interval::UNIVERSE, rng)?;
        let exit = self.boundary.hit(ray, &Interval::new(entry.t + 0.0001, INFINITY), rng)?;

        let t_enter = t.min.max(entry.t);
        let t_exit = t.max.min(exit.t);
        if t_enter >= t_exit {
            return None;
        }
        let t_enter = t_enter.max(0.0);

        let ray_length = ray.dir.length();
        let distance_inside_boundary = (t_exit - t_enter) * ray_length;
        let hit_distance = self.neg_inv_density * rand_unit(rng).ln();
        if hit_distance > distance_inside_boundary {
            return None;
        }

        let t = t_enter + hit_distance / ray_length;
        Some(HitRecord {
            p: ray.at(t),
            // normal and face are arbitrary inside a volume
            n: Vector::X,
            t,
            mat: self.phase_function.clone(),
            front: true,
            uv: UV::ZERO,
        })
    }
    fn bounding_box(&self) -> &AABB {
        self.boundary.bounding_box()
    }
}
