use crate::*;

/// Rotation about the Y axis.
pub struct RotateY {
    sin: Float,
    cos: Float,
    bbox: AABB,
    object: Arc<dyn Hittable>,
}

impl RotateY {
    pub fn new(object: Arc<dyn Hittable>, degrees: Float) -> Self {
        let radians = degrees.to_radians();
        let sin = radians.sin();
        let cos = radians.cos();
        let bbox = object.bounding_box();

        let corners = (0..2).flat_map(|i| (0..2).flat_map(move |j| (0..2).map(move |k| (i, j, k))));
        let (min, max) = corners.fold(
            (Point::splat(INFINITY), Point::splat(NEG_INFINITY)),
            |(min, max), (i, j, k)| {
                let x = if i == 0 { bbox.x.min } else { bbox.x.max };
                let y = if j == 0 { bbox.y.min } else { bbox.y.max };
                let z = if k == 0 { bbox.z.min } else { bbox.z.max };
                let corner = Point::new(cos * x + sin * z, y, -sin * x + cos * z);
                (min.min(corner), max.max(corner))
            },
        );
        let bbox = AABB::enclosing_point(&min, &max);
        Self { sin, cos, bbox, object }
    }
    fn to_object(&self, v: Vector) -> Vector {
        Vector::new(self.cos * v.x - self.sin * v.z, v.y, self.sin * v.x + self.cos * v.z)
    }
    fn to_world(&self, v: Vector) -> Vector {
        Vector::new(self.cos * v.x + self.sin * v.z, v.y, -self.sin * v.x + self.cos * v.z)
    }
}

impl Hittable for RotateY {
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
    fn hit(&self, ray: &Ray, t: &Interval, rng: &mut dyn RngCore) -> Option<HitRecord> {
        let rotated = Ray::new(self.to_object(ray.orig), self.to_object(ray.dir), ray.tm);
        self.object.hit(&rotated, t, rng).map(|record| {
            let p = self.to_world(record.p);
            let n = self.to_world(record.n);
            HitRecord { p, n, ..record }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_moves_offset_sphere() {
        // +90 degrees about Y maps +X to -Z.
        let sphere = Arc::new(Sphere::new(Point::new(5.0, 0.0, 0.0), 1.0, Arc::new(EmptyMaterial)));
        let rotated = RotateY::new(sphere, 90.0);
        let mut rng = TraceRng::seed_from_u64(0);
        let t = Interval::new(0.001, INFINITY);

        let down_z = Ray::new(Point::new(0.0, 0.0, 10.0), Vector::new(0.0, 0.0, -1.0), 0.0);
        let rec = rotated.hit(&down_z, &t, &mut rng).unwrap();
        assert!((rec.p - Point::new(0.0, 0.0, -4.0)).length() < 1e-9);
        assert!((rec.n - Vector::Z).length() < 1e-9);

        let at_old_spot = Ray::new(Point::new(5.0, 10.0, 0.0), Vector::new(0.0, -1.0, 0.0), 0.0);
        assert!(rotated.hit(&at_old_spot, &t, &mut rng).is_none());
    }

    #[test]
    fn test_rotated_bbox_encloses_corners() {
        let cube = make_box(Point::ZERO, Point::new(2.0, 1.0, 1.0), Arc::new(EmptyMaterial));
        let rotated = RotateY::new(cube, 45.0);
        let bbox = rotated.bounding_box();
        let s = (0.5 as Float).sqrt() * 0.999;
        // (2, 0, 0) rotates to about (1.41, 0, -1.41); (0, 1, 1) to about (0.71, 1, 0.71)
        assert!(bbox.contains(&Point::new(2.0 * s, 0.0, -2.0 * s)));
        assert!(bbox.contains(&Point::new(s, 1.0, s)));
    }
}
