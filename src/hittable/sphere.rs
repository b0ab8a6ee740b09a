use crate::*;

pub struct Sphere {
    /// Center at `tm = 0` moving along `dir` until `tm = 1`.
    center: Ray,
    radius: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t: &Interval, _rng: &mut dyn RngCore) -> Option<HitRecord> {
        let center = self.center.at(ray.tm);
        let oc = center - ray.orig;
        let a = ray.dir.length_squared();
        let h = ray.dir.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        let mut root = (h - sqrtd) / a;
        if !t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t.surrounds(root) {
                return None;
            }
        }
        let outward_normal = (ray.at(root) - center) / self.radius;
        let uv = Sphere::get_sphere_uv(&outward_normal);
        Some(HitRecord::new(ray, root, outward_normal, self.mat.clone(), uv))
    }

    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }

    // Only valid for stationary spheres.
    fn pdf_value(&self, orig: &Point, dir: &Vector, rng: &mut dyn RngCore) -> Float {
        let ray = Ray::new(*orig, *dir, 0.0);
        if self.hit(&ray, &Interval::new(0.001, INFINITY), rng).is_none() {
            return 0.0;
        }
        let dist_squared = (self.center.orig - *orig).length_squared();
        let cos_max = (1.0 - self.radius * self.radius / dist_squared).max(0.0).sqrt();
        let solid_angle = 2.0 * PI * (1.0 - cos_max);
        solid_angle.recip()
    }

    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector {
        let dir = self.center.orig - *orig;
        let onb = ONB::new(&dir);
        onb.transform(&Vector::random_to_sphere(self.radius, dir.length_squared(), rng))
    }
}

impl Sphere {
    pub fn new(center: Point, radius: Float, mat: Arc<dyn Material>) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        let r = Vector::splat(radius);
        let bbox = AABB::enclosing_point(&(center - r), &(center + r));
        let center = Ray::new(center, Vector::ZERO, 0.0);
        Sphere { center, radius, mat, bbox }
    }
    /// Sphere moving linearly from `from` at `tm = 0` to `to` at `tm = 1`.
    pub fn moving(from: Point, to: Point, radius: Float, mat: Arc<dyn Material>) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        let r = Vector::splat(radius);
        let bbox = AABB::enclosing_volume(
            &AABB::enclosing_point(&(from - r), &(from + r)),
            &AABB::enclosing_point(&(to - r), &(to + r)),
        );
        let center = Ray::new(from, to - from, 0.0);
        Sphere { center, radius, mat, bbox }
    }
    /// `p` is a point on the unit sphere. `u` is the angle around Y from
    /// X = -1, `v` the angle from Y = -1 to Y = +1, both in `[0, 1]`.
    pub fn get_sphere_uv(p: &Point) -> UV {
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;
        UV::new(phi / (2.0 * PI), theta / PI)
    }
}
