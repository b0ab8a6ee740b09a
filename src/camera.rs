use crate::*;

/// Camera placement and sampling parameters supplied by the scene.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Width over height.
    pub aspect_ratio: Float,
    pub image_width: usize,
    /// Rounded down to a perfect square for stratification.
    pub samples_per_pixel: usize,
    pub max_depth: usize,
    pub background: Color,
    /// Vertical field of view in degrees.
    pub vfov: Float,
    pub lookfrom: Point,
    pub lookat: Point,
    pub vup: Vector,
    /// Cone angle in degrees of rays through each pixel; 0 is a pinhole.
    pub defocus_angle: Float,
    /// Distance from `lookfrom` to the plane of perfect focus.
    pub focus_dist: Float,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            background: Color::ZERO,
            vfov: 90.0,
            lookfrom: Point::ZERO,
            lookat: Point::new(0.0, 0.0, -1.0),
            vup: Vector::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

pub struct Camera {
    pub image_width: usize,
    pub image_height: usize,
    pub max_depth: usize,
    pub background: Color,
    sqrt_spp: usize,
    recip_sqrt_spp: Float,
    sample_scale: Float,
    center: Point,
    pixel_corner: Point,
    pixel_delta_u: Vector,
    pixel_delta_v: Vector,
    defocus_angle: Float,
    defocus_disk_u: Vector,
    defocus_disk_v: Vector,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let image_width = config.image_width.max(1);
        let image_height = ((image_width as Float / config.aspect_ratio) as usize).max(1);

        let sqrt_spp = ((config.samples_per_pixel as Float).sqrt() as usize).max(1);
        let recip_sqrt_spp = (sqrt_spp as Float).recip();
        let sample_scale = ((sqrt_spp * sqrt_spp) as Float).recip();

        let center = config.lookfrom;
        let h = (config.vfov.to_radians() / 2.0).tan();
        let viewport_h = 2.0 * h * config.focus_dist;
        let viewport_w = viewport_h * (image_width as Float / image_height as Float);

        let w = (config.lookfrom - config.lookat).normalize();
        let u = config.vup.cross(w).normalize();
        let v = w.cross(u);

        let viewport_u = viewport_w * u;
        let viewport_v = viewport_h * -v;
        let pixel_delta_u = viewport_u / image_width as Float;
        let pixel_delta_v = viewport_v / image_height as Float;
        let viewport_upper_left = center - config.focus_dist * w - 0.5 * (viewport_u + viewport_v);
        let pixel_corner = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = config.focus_dist * (config.defocus_angle / 2.0).to_radians().tan();
        Camera {
            image_width,
            image_height,
            max_depth: config.max_depth,
            background: config.background,
            sqrt_spp,
            recip_sqrt_spp,
            sample_scale,
            center,
            pixel_corner,
            pixel_delta_u,
            pixel_delta_v,
            defocus_angle: config.defocus_angle,
            defocus_disk_u: defocus_radius * u,
            defocus_disk_v: defocus_radius * v,
        }
    }

    /// Samples actually taken per pixel.
    pub fn samples_per_pixel(&self) -> usize {
        self.sqrt_spp * self.sqrt_spp
    }

    /// Factor turning a sum of pixel samples into their mean.
    pub fn sample_scale(&self) -> Float {
        self.sample_scale
    }

    pub fn sqrt_spp(&self) -> usize {
        self.sqrt_spp
    }

    /// Ray through a random point of sub-pixel cell `(si, sj)` of pixel
    /// `(i, j)`, from the defocus disk, at a random time.
    pub fn get_ray(&self, i: usize, j: usize, si: usize, sj: usize, rng: &mut dyn RngCore) -> Ray {
        let offset = self.sample_square_stratified(si, sj, rng);
        let pixel_sample = self.pixel_corner
            + (i as Float + offset.x) * self.pixel_delta_u
            + (j as Float + offset.y) * self.pixel_delta_v;
        let orig = if self.defocus_angle > 0.0 { self.defocus_disk_sample(rng) } else { self.center };
        Ray::new(orig, pixel_sample - orig, rand_unit(rng))
    }

    fn sample_square_stratified(&self, si: usize, sj: usize, rng: &mut dyn RngCore) -> Vector {
        let px = (si as Float + rand_unit(rng)) * self.recip_sqrt_spp - 0.5;
        let py = (sj as Float + rand_unit(rng)) * self.recip_sqrt_spp - 0.5;
        Vector::new(px, py, 0.0)
    }

    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point {
        let p = Vector::random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}
