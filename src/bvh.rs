use crate::*;
use std::cmp::Ordering;

/// Binary bounding volume hierarchy node.
///
/// Spans are split at the median along the longest axis of their union box.
/// A span of one primitive uses that primitive as both children.
pub struct BVHNode {
    left: Arc<dyn Hittable>,
    right: Arc<dyn Hittable>,
    bbox: AABB,
}

impl Hittable for BVHNode {
    fn hit(&self, ray: &Ray, t: &Interval, rng: &mut dyn RngCore) -> Option<HitRecord> {
        if !self.bbox.hit(ray, t) {
            return None;
        }
        match self.left.hit(ray, t, rng) {
            // a right-hand hit can only replace the left one by being closer
            Some(record) => self.right.hit(ray, &Interval::new(t.min, record.t), rng).or(Some(record)),
            None => self.right.hit(ray, t, rng),
        }
    }
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
}

impl BVHNode {
    pub fn from_hittable_list(list: HittableList) -> Self {
        Self::new(list.objects)
    }

    /// Panics if `objects` is empty.
    pub fn new(mut objects: Vec<Arc<dyn Hittable>>) -> Self {
        assert!(!objects.is_empty(), "cannot build a BVH over zero primitives");
        let mut stats = BuildStats::default();
        let node = Self::from_slice(&mut objects, 0, &mut stats);
        log::debug!(
            "built BVH over {} primitives: {} nodes, depth {}",
            objects.len(),
            stats.nodes,
            stats.depth
        );
        node
    }

    fn from_slice(objects: &mut [Arc<dyn Hittable>], depth: usize, stats: &mut BuildStats) -> Self {
        stats.nodes += 1;
        stats.depth = stats.depth.max(depth + 1);

        let bbox = objects
            .iter()
            .fold(AABB::NONE, |bbox, object| AABB::enclosing_volume(&bbox, object.bounding_box()));
        let axis = bbox.longest_axis();

        let (left, right): (Arc<dyn Hittable>, Arc<dyn Hittable>) = match objects.len() {
            1 => (objects[0].clone(), objects[0].clone()),
            2 => (objects[0].clone(), objects[1].clone()),
            span => {
                objects.sort_by(|a, b| Self::box_compare(a.as_ref(), b.as_ref(), axis));
                let (lo, hi) = objects.split_at_mut(span / 2);
                (
                    Arc::new(BVHNode::from_slice(lo, depth + 1, stats)),
                    Arc::new(BVHNode::from_slice(hi, depth + 1, stats)),
                )
            }
        };
        Self { left, right, bbox }
    }

    fn box_compare(a: &dyn Hittable, b: &dyn Hittable, axis: usize) -> Ordering {
        a.bounding_box()[axis].min.total_cmp(&b.bounding_box()[axis].min)
    }
}

#[derive(Default)]
struct BuildStats {
    nodes: usize,
    depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_spheres(n: usize, rng: &mut TraceRng) -> Vec<Arc<dyn Hittable>> {
        let mat: Arc<dyn Material> = Arc::new(EmptyMaterial);
        (0..n)
            .map(|_| {
                let center = Vector::random(rng) * 20.0;
                let radius = 0.2 + rand_unit(rng) * 2.0;
                Arc::new(Sphere::new(center, radius, mat.clone())) as Arc<dyn Hittable>
            })
            .collect()
    }

    #[test]
    fn test_single_primitive() {
        let mut rng = TraceRng::seed_from_u64(1);
        let sphere: Arc<dyn Hittable> = Arc::new(Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, Arc::new(EmptyMaterial)));
        let bvh = BVHNode::new(vec![sphere]);
        let ray = Ray::new(Point::ZERO, Vector::new(0.0, 0.0, -1.0), 0.0);
        let rec = bvh.hit(&ray, &Interval::new(0.001, INFINITY), &mut rng).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "zero primitives")]
    fn test_empty_is_rejected() {
        BVHNode::new(Vec::new());
    }

    #[test]
    fn test_nearest_matches_linear_scan() {
        let mut rng = TraceRng::seed_from_u64(42);
        let spheres = random_spheres(200, &mut rng);
        let mut list = HittableList::new();
        for s in &spheres {
            list.add(s.clone());
        }
        let bvh = BVHNode::new(spheres);
        let t = Interval::new(0.001, INFINITY);

        let mut hits = 0;
        for _ in 0..500 {
            let orig = Vector::random(&mut rng) * 30.0;
            let dir = Vector::random_unit_vector(&mut rng);
            let ray = Ray::new(orig, dir, 0.0);
            let brute = list.hit(&ray, &t, &mut rng).map(|r| r.t);
            let fast = bvh.hit(&ray, &t, &mut rng).map(|r| r.t);
            match (brute, fast) {
                (Some(a), Some(b)) => {
                    hits += 1;
                    assert!((a - b).abs() < 1e-9, "linear {} vs bvh {}", a, b);
                }
                (None, None) => {}
                other => panic!("linear scan and BVH disagree: {:?}", other),
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_bbox_encloses_all() {
        let mut rng = TraceRng::seed_from_u64(3);
        let spheres = random_spheres(50, &mut rng);
        let boxes: Vec<AABB> = spheres.iter().map(|s| *s.bounding_box()).collect();
        let bvh = BVHNode::new(spheres);
        for b in boxes {
            assert_eq!(AABB::enclosing_volume(bvh.bounding_box(), &b), *bvh.bounding_box());
        }
    }
}
