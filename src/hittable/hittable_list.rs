use crate::*;

pub struct HittableList {
    pub objects: Vec<Arc<dyn Hittable>>,
    pub bbox: AABB,
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl HittableList {
    pub fn new() -> Self {
        HittableList { objects: Vec::new(), bbox: AABB::NONE }
    }
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.bbox = AABB::enclosing_volume(&self.bbox, object.bounding_box());
        self.objects.push(object);
    }
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, t: &Interval, rng: &mut dyn RngCore) -> Option<HitRecord> {
        // Each later hit is only accepted if it is closer than the last one.
        let mut t_least = t.max;
        let mut closest = None;
        for object in &self.objects {
            if let Some(record) = object.hit(ray, &Interval::new(t.min, t_least), rng) {
                t_least = record.t;
                closest = Some(record);
            }
        }
        closest
    }

    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }

    fn pdf_value(&self, orig: &Point, dir: &Vector, rng: &mut dyn RngCore) -> Float {
        if self.objects.is_empty() {
            return 0.0;
        }
        let weight = (self.objects.len() as Float).recip();
        self.objects.iter().map(|object| weight * object.pdf_value(orig, dir, rng)).sum()
    }

    fn random_direction(&self, orig: &Point, rng: &mut dyn RngCore) -> Vector {
        if self.objects.is_empty() {
            return Vector::X;
        }
        let index = rng.gen_range(0..self.objects.len());
        self.objects[index].random_direction(orig, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(z: Float) -> Arc<dyn Hittable> {
        Arc::new(Sphere::new(Point::new(0.0, 0.0, z), 0.5, Arc::new(EmptyMaterial)))
    }

    #[test]
    fn test_nearest_regardless_of_order() {
        let mut list = HittableList::new();
        list.add(sphere(-10.0));
        list.add(sphere(-3.0));
        list.add(sphere(-6.0));
        let mut rng = TraceRng::seed_from_u64(0);
        let ray = Ray::new(Point::ZERO, Vector::new(0.0, 0.0, -1.0), 0.0);
        let rec = list.hit(&ray, &Interval::new(0.001, INFINITY), &mut rng).unwrap();
        assert!((rec.t - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_bbox_grows() {
        let mut list = HittableList::new();
        list.add(sphere(-10.0));
        list.add(sphere(4.0));
        assert!(list.bounding_box().contains(&Point::new(0.0, 0.0, -10.4)));
        assert!(list.bounding_box().contains(&Point::new(0.0, 0.0, 4.4)));
    }

    #[test]
    fn test_pdf_value_is_average() {
        let a = Quad::new(Point::new(-1.0, -1.0, -2.0), Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0), Arc::new(EmptyMaterial));
        let b = Quad::new(Point::new(-1.0, -1.0, 2.0), Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0), Arc::new(EmptyMaterial));
        let mut list = HittableList::new();
        list.add(Arc::new(a));
        list.add(Arc::new(b));
        let mut rng = TraceRng::seed_from_u64(0);
        let pdf = list.pdf_value(&Point::ZERO, &Vector::new(0.0, 0.0, -1.0), &mut rng);
        assert!((pdf - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_list_has_no_density() {
        let list = HittableList::new();
        let mut rng = TraceRng::seed_from_u64(0);
        assert_eq!(list.pdf_value(&Point::ZERO, &Vector::X, &mut rng), 0.0);
        assert!(list.hit(&Ray::new(Point::ZERO, Vector::X, 0.0), &Interval::UNIVERSE, &mut rng).is_none());
    }
}
