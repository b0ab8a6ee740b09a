use crate::*;

/// The six sides of the axis-aligned box with opposite corners `a` and `b`.
pub fn make_box(a: Point, b: Point, mat: Arc<dyn Material>) -> Arc<HittableList> {
    let mut sides = HittableList::new();
    let min = a.min(b);
    let max = a.max(b);

    let dx = Vector::new(max.x - min.x, 0.0, 0.0);
    let dy = Vector::new(0.0, max.y - min.y, 0.0);
    let dz = Vector::new(0.0, 0.0, max.z - min.z);

    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, max.z), dx, dy, mat.clone()))); // front
    sides.add(Arc::new(Quad::new(Point::new(max.x, min.y, max.z), -dz, dy, mat.clone()))); // right
    sides.add(Arc::new(Quad::new(Point::new(max.x, min.y, min.z), -dx, dy, mat.clone()))); // back
    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, min.z), dz, dy, mat.clone()))); // left
    sides.add(Arc::new(Quad::new(Point::new(min.x, max.y, max.z), dx, -dz, mat.clone()))); // top
    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, min.z), dx, dz, mat))); // bottom
    Arc::new(sides)
}

/// Parallelogram spanned by edges `u` and `v` from corner `q`.
pub struct Quad {
    q: Point,
    u: Vector,
    v: Vector,
    /// Unit normal.
    n: Vector,
    /// `(u × v) / |u × v|²`, for planar coordinates without a per-ray solve.
    w: Vector,
    d: Float,
    area: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Quad {
    pub fn new(q: Point, u: Vector, v: Vector, mat: Arc<dyn Material>) -> Self {
        let normal = u.cross(v);
        let area = normal.length();
        assert!(area > 0.0, "quad edges must not be parallel");
        let a = AABB::enclosing_point(&q, &(q + u + v));
        let b = AABB::enclosing_point(&(q + u), &(q + v));
        let bbox = AABB::enclosing_volume(&a, &b);
        let w = normal / normal.length_squared();
        let n = normal / area;
        let d = n.dot(q);
        Self { q, u, v, n, w, d, area, mat, bbox }
    }
    /// Planar coordinates inside the unit square are interior; they double
    /// as the surface `uv`.
    pub fn is_interior(a: Float, b: Float) -> Option<UV> {
        if Interval::UNIT.contains(a) && Interval::UNIT.contains(b) {
            Some(UV::new(a, b))
        } else {
            None
        }
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray, t: &Interval, _rng: &mut dyn RngCore) -> Option<HitRecord> {
        let denom = ray.dir.dot(self.n);
        if denom.abs() < 1e-8 {
            return None;
        }
        let root = (self.d - self.n.dot(ray.orig)) / denom;
        if !t.contains(root) {
            return None;
        }
        let planar = ray.at(root) - self.q;
        let alpha = self.w.dot(planar.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar));
        Quad::is_interior(alpha, beta).map(|uv| HitRecord::new(ray, root, self.n, self.mat.clone(), uv))
    }

    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }

    fn pdf_value(&self, orig: &Point, dir: &Vector, rng: &mut dyn RngCore) -> Float {
        let ray = Ray::new(*orig, *dir, 0.0);
        match self.hit(&ray, &Interval::new(0.001, INFINITY), rng) {
            None => 0.0,
            Some(record) => {
                let distance_squared = record.t * record.t * dir.length_squared();
                let cos = (dir.dot(record.n) / dir.length()).abs();
                distance_squared / (cos * self.area)
            }
        }
    }

    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector {
        let p = self.q + rand_unit(rng) * self.u + rand_unit(rng) * self.v;
        p - *orig
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Quad {
        Quad::new(Point::ZERO, Vector::X, Vector::Y, Arc::new(EmptyMaterial))
    }

    #[test]
    fn test_interior_boundary() {
        for (a, b) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            assert!(Quad::is_interior(a, b).is_some(), "({a}, {b}) should be interior");
        }
        assert!(Quad::is_interior(1.0001, 0.0).is_none());
        assert!(Quad::is_interior(0.5, -0.0001).is_none());
    }

    #[test]
    fn test_hit_uv_and_normal() {
        let quad = unit_quad();
        let mut rng = TraceRng::seed_from_u64(5);
        let ray = Ray::new(Point::new(0.25, 0.75, 2.0), Vector::new(0.0, 0.0, -1.0), 0.0);
        let rec = quad.hit(&ray, &Interval::new(0.001, INFINITY), &mut rng).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!((rec.uv - UV::new(0.25, 0.75)).length() < 1e-12);
        assert!(rec.front);
        assert_eq!(rec.n, Vector::Z);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let quad = unit_quad();
        let mut rng = TraceRng::seed_from_u64(5);
        let ray = Ray::new(Point::new(0.5, 0.5, 0.0), Vector::X, 0.0);
        assert!(quad.hit(&ray, &Interval::UNIVERSE, &mut rng).is_none());
    }

    #[test]
    fn test_outside_misses() {
        let quad = unit_quad();
        let mut rng = TraceRng::seed_from_u64(5);
        let ray = Ray::new(Point::new(1.5, 0.5, 1.0), Vector::new(0.0, 0.0, -1.0), 0.0);
        assert!(quad.hit(&ray, &Interval::new(0.001, INFINITY), &mut rng).is_none());
    }

    #[test]
    fn test_flat_bbox_is_padded() {
        let quad = unit_quad();
        assert!(quad.bounding_box().z.len() >= AABB::PAD_DELTA);
    }

    #[test]
    fn test_pdf_value_head_on() {
        let quad = Quad::new(Point::new(-1.0, -1.0, -2.0), Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0), Arc::new(EmptyMaterial));
        let mut rng = TraceRng::seed_from_u64(5);
        let pdf = quad.pdf_value(&Point::ZERO, &Vector::new(0.0, 0.0, -1.0), &mut rng);
        // distance 2, area 4, cos 1
        assert!((pdf - 1.0).abs() < 1e-12);
        assert_eq!(quad.pdf_value(&Point::ZERO, &Vector::Z, &mut rng), 0.0);
    }

    #[test]
    fn test_random_direction_lands_on_quad() {
        let quad = unit_quad();
        let mut rng = TraceRng::seed_from_u64(6);
        let orig = Point::new(0.5, 0.5, 3.0);
        for _ in 0..50 {
            let dir = quad.random_direction(&orig, &mut rng);
            let p = orig + dir;
            assert!(p.z.abs() < 1e-12);
            assert!(Interval::UNIT.contains(p.x) && Interval::UNIT.contains(p.y));
        }
    }

    #[test]
    fn test_make_box_bounds() {
        let cube = make_box(Point::ONE, Point::ZERO, Arc::new(EmptyMaterial));
        assert_eq!(cube.objects.len(), 6);
        assert!(cube.bounding_box().contains(&Point::ZERO));
        assert!(cube.bounding_box().contains(&Point::ONE));
    }
}
