use crate::*;

pub struct Translate {
    offset: Vector,
    object: Arc<dyn Hittable>,
    bbox: AABB,
}

impl Translate {
    pub fn new(object: Arc<dyn Hittable>, offset: Vector) -> Self {
        let bbox = object.bounding_box() + offset;
        Self { object, offset, bbox }
    }
}

impl Hittable for Translate {
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
    fn hit(&self, ray: &Ray, t: &Interval, rng: &mut dyn RngCore) -> Option<HitRecord> {
        let offset_ray = Ray { orig: ray.orig - self.offset, ..*ray };
        self.object.hit(&offset_ray, t, rng).map(|r| HitRecord { p: r.p + self.offset, ..r })
    }
}
