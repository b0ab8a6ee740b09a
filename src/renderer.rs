//! Bucket-based parallel rendering.
//!
//! The image is cut into square buckets rendered independently on the rayon
//! pool. Each pixel draws from its own generator seeded from the render seed
//! and the pixel index, so a fixed seed gives the same image on any number of
//! threads.

use crate::*;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render cancelled after {done} of {total} pixels")]
    Cancelled { done: usize, total: usize },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
    pub bucket_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { seed: None, bucket_size: DEFAULT_BUCKET_SIZE }
    }
}

pub const DEFAULT_BUCKET_SIZE: usize = 32;

/// Shared between the render and whoever watches it.
#[derive(Debug, Default)]
pub struct RenderControl {
    cancelled: AtomicBool,
    pixels_done: AtomicUsize,
}

impl RenderControl {
    pub fn new() -> Self {
        Self::default()
    }
    /// Stops the render before its next bucket starts.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
    pub fn pixels_done(&self) -> usize {
        self.pixels_done.load(Ordering::Relaxed)
    }
}

/// Linear radiance, row-major, before gamma or clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Color::ZERO; width * height] }
    }
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }
    /// Gamma-2 corrected, clamped 8-bit RGB triples.
    pub fn to_rgb8(&self) -> Vec<u8> {
        const INTENSITY: Interval = Interval { min: 0.0, max: 0.999 };
        self.pixels
            .iter()
            .flat_map(|c| [c.x, c.y, c.z])
            .map(|v| (256.0 * INTENSITY.clamp(linear_to_gamma(v))) as u8)
            .collect()
    }
}

pub fn linear_to_gamma(linear: Float) -> Float {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Rectangular region of the image rendered as one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Tiles `width` x `height` in row-major bucket order; edge buckets are
/// clipped to the image.
pub fn generate_buckets(width: usize, height: usize, bucket_size: usize) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    (0..height)
        .step_by(size)
        .flat_map(|y| {
            (0..width).step_by(size).map(move |x| Bucket {
                x,
                y,
                width: size.min(width - x),
                height: size.min(height - y),
            })
        })
        .collect()
}

struct BucketResult {
    bucket: Bucket,
    pixels: Vec<Color>,
    bad_samples: usize,
}

/// Mean radiance of pixel `(i, j)` and the number of samples that had NaN
/// components zeroed.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    lights: Option<&dyn Hittable>,
    i: usize,
    j: usize,
    rng: &mut dyn RngCore,
) -> (Color, usize) {
    let mut sum = Color::ZERO;
    let mut bad = 0;
    for sj in 0..camera.sqrt_spp() {
        for si in 0..camera.sqrt_spp() {
            let ray = camera.get_ray(i, j, si, sj, rng);
            let sample = ray_color(&ray, camera.max_depth, world, lights, camera.background, rng);
            if sample.is_nan() {
                bad += 1;
                sum += Color::select(sample.cmpeq(sample), sample, Color::ZERO);
            } else {
                sum += sample;
            }
        }
    }
    (sum * camera.sample_scale(), bad)
}

fn render_bucket(
    bucket: Bucket,
    camera: &Camera,
    world: &dyn Hittable,
    lights: Option<&dyn Hittable>,
    seed: u64,
    control: &RenderControl,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.width * bucket.height);
    let mut bad_samples = 0;
    for j in bucket.y..bucket.y + bucket.height {
        for i in bucket.x..bucket.x + bucket.width {
            let mut rng = pixel_rng(seed, (j * camera.image_width + i) as u64);
            let (color, bad) = render_pixel(camera, world, lights, i, j, &mut rng);
            pixels.push(color);
            bad_samples += bad;
        }
    }
    control.pixels_done.fetch_add(pixels.len(), Ordering::Relaxed);
    BucketResult { bucket, pixels, bad_samples }
}

/// Renders the whole image on the current rayon pool.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    lights: Option<&dyn Hittable>,
    options: &RenderOptions,
    control: &RenderControl,
) -> Result<ImageBuffer, RenderError> {
    let (width, height) = (camera.image_width, camera.image_height);
    let seed = options.seed.unwrap_or_else(rand::random);
    let buckets = generate_buckets(width, height, options.bucket_size);
    log::info!(
        "rendering {}x{} at {} spp, depth {}, {} buckets, seed {}",
        width,
        height,
        camera.samples_per_pixel(),
        camera.max_depth,
        buckets.len(),
        seed
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            if control.is_cancelled() {
                return Err(RenderError::Cancelled { done: control.pixels_done(), total: width * height });
            }
            let result = render_bucket(bucket, camera, world, lights, seed, control);
            log::debug!("bucket at ({}, {}) done", bucket.x, bucket.y);
            Ok(result)
        })
        .collect::<Result<_, _>>()?;

    let mut image = ImageBuffer::new(width, height);
    let mut bad_samples = 0;
    for result in results {
        let bucket = result.bucket;
        for (k, color) in result.pixels.into_iter().enumerate() {
            image.set(bucket.x + k % bucket.width, bucket.y + k / bucket.width, color);
        }
        bad_samples += result.bad_samples;
    }
    if bad_samples > 0 {
        log::warn!("zeroed NaN components in {} path samples", bad_samples);
    }
    log::info!("render finished in {:.2?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_cover_image_once() {
        let (w, h) = (70, 45);
        let buckets = generate_buckets(w, h, 32);
        assert_eq!(buckets.len(), 3 * 2);
        let mut seen = vec![0; w * h];
        for b in &buckets {
            for y in b.y..b.y + b.height {
                for x in b.x..b.x + b.width {
                    seen[y * w + x] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_to_rgb8_clamps() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(4.0, 0.25, -1.0));
        image.set(1, 0, Color::ZERO);
        assert_eq!(image.to_rgb8(), vec![255, 128, 0, 0, 0, 0]);
    }

    fn tiny_scene() -> (Camera, HittableList) {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(Point::new(0.0, 0.0, -3.0), 1.0, Arc::new(Lambertian::from_color(Color::splat(0.5))))));
        let camera = Camera::new(&CameraConfig {
            image_width: 8,
            samples_per_pixel: 4,
            max_depth: 4,
            background: Color::ONE,
            ..Default::default()
        });
        (camera, world)
    }

    #[test]
    fn test_seeded_render_is_reproducible_across_bucket_sizes() {
        let (camera, world) = tiny_scene();
        let a = render(&camera, &world, None, &RenderOptions { seed: Some(5), bucket_size: 3 }, &RenderControl::new()).unwrap();
        let b = render(&camera, &world, None, &RenderOptions { seed: Some(5), bucket_size: 8 }, &RenderControl::new()).unwrap();
        assert_eq!(a, b);
        let c = render(&camera, &world, None, &RenderOptions { seed: Some(6), bucket_size: 3 }, &RenderControl::new()).unwrap();
        assert_ne!(a, c);
    }

    struct NanLight;
    impl Material for NanLight {
        fn emitted(&self, _ray: &Ray, _record: &HitRecord, _uv: UV, _p: &Point) -> Color {
            Color::new(Float::NAN, 1.0, 0.0)
        }
    }

    #[test]
    fn test_nan_components_are_zeroed() {
        let (camera, _) = tiny_scene();
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(Point::ZERO, 10.0, Arc::new(NanLight))));
        let mut rng = TraceRng::seed_from_u64(0);
        let (color, bad) = render_pixel(&camera, &world, None, 4, 4, &mut rng);
        assert_eq!(bad, camera.samples_per_pixel());
        assert_eq!(color, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_cancelled_render_errors() {
        let (camera, world) = tiny_scene();
        let control = RenderControl::new();
        control.cancel();
        let result = render(&camera, &world, None, &RenderOptions::default(), &control);
        assert!(matches!(result, Err(RenderError::Cancelled { .. })));
    }

    #[test]
    fn test_progress_counts_every_pixel() {
        let (camera, world) = tiny_scene();
        let control = RenderControl::new();
        render(&camera, &world, None, &RenderOptions { seed: Some(1), bucket_size: 4 }, &control).unwrap();
        assert_eq!(control.pixels_done(), camera.image_width * camera.image_height);
    }
}
