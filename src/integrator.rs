//! Monte Carlo radiance estimator.

use crate::*;

/// Nearest hits closer than this are ignored to avoid self-intersection acne.
pub const T_MIN: Float = 0.001;

/// Radiance arriving along `ray`.
///
/// PDF-driven materials are sampled from an equal mixture of `lights` and
/// their own density; without lights the material density is used alone.
/// Specular materials return a concrete ray and are followed unweighted.
pub fn ray_color(
    ray: &Ray,
    depth: usize,
    world: &dyn Hittable,
    lights: Option<&dyn Hittable>,
    background: Color,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let record = match world.hit(ray, &Interval::new(T_MIN, INFINITY), rng) {
        Some(record) => record,
        None => return background,
    };

    let emission = record.mat.emitted(ray, &record, record.uv, &record.p);
    let scatter = match record.mat.scatter(ray, &record, rng) {
        Some(scatter) => scatter,
        None => return emission,
    };

    let material_pdf = match scatter.scatter {
        Scatter::Ray(scattered) => {
            return emission
                + scatter.attenuation * ray_color(&scattered, depth - 1, world, lights, background, rng);
        }
        Scatter::Pdf(pdf) => pdf,
    };

    let (scattered, pdf_value) = match lights {
        Some(lights) => {
            let light_pdf = HittablePDF::new(lights, record.p);
            let mixture = MixturePDF::new(&light_pdf, material_pdf.as_ref());
            let scattered = Ray::new(record.p, mixture.generate(rng), ray.tm);
            let pdf_value = mixture.value(&scattered.dir);
            (scattered, pdf_value)
        }
        None => {
            let scattered = Ray::new(record.p, material_pdf.generate(rng), ray.tm);
            let pdf_value = material_pdf.value(&scattered.dir);
            (scattered, pdf_value)
        }
    };
    if pdf_value <= 0.0 {
        return emission;
    }

    let scattering_pdf = record.mat.scattering_pdf(ray, &record, &scattered);
    let sample_color = ray_color(&scattered, depth - 1, world, lights, background, rng);
    emission + scatter.attenuation * scattering_pdf * sample_color / pdf_value
}
