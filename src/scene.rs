//! Built-in demo scenes.

use crate::*;

/// Everything a render needs besides the output settings.
pub struct Scene {
    pub world: Arc<dyn Hittable>,
    /// Sampling targets for next-event estimation, if the scene has lights.
    pub lights: Option<Arc<dyn Hittable>>,
    pub camera: CameraConfig,
}

impl Scene {
    pub fn from_choice(choice: SceneChoice) -> Self {
        match choice {
            SceneChoice::Cornell => cornell_box(),
            SceneChoice::Smoke => cornell_smoke(),
        }
    }

    pub fn lights(&self) -> Option<&dyn Hittable> {
        self.lights.as_deref()
    }
}

fn cornell_camera() -> CameraConfig {
    CameraConfig {
        aspect_ratio: 1.0,
        image_width: 600,
        samples_per_pixel: 10,
        max_depth: 50,
        background: Color::ZERO,
        vfov: 40.0,
        lookfrom: Point::new(278.0, 278.0, -800.0),
        lookat: Point::new(278.0, 278.0, 0.0),
        vup: Vector::Y,
        defocus_angle: 0.0,
        ..Default::default()
    }
}

/// The five walls of the 555-unit box, open toward the camera.
fn cornell_walls(world: &mut HittableList) {
    let red = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
    let white = Arc::new(Lambertian::from_color(Color::splat(0.73)));
    let green = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));

    world.add(Arc::new(Quad::new(Point::new(555.0, 0.0, 0.0), Vector::new(0.0, 0.0, 555.0), Vector::new(0.0, 555.0, 0.0), green)));
    world.add(Arc::new(Quad::new(Point::new(0.0, 0.0, 555.0), Vector::new(0.0, 0.0, -555.0), Vector::new(0.0, 555.0, 0.0), red)));
    world.add(Arc::new(Quad::new(Point::new(0.0, 555.0, 0.0), Vector::new(555.0, 0.0, 0.0), Vector::new(0.0, 0.0, 555.0), white.clone())));
    world.add(Arc::new(Quad::new(Point::new(0.0, 0.0, 555.0), Vector::new(555.0, 0.0, 0.0), Vector::new(0.0, 0.0, -555.0), white.clone())));
    world.add(Arc::new(Quad::new(Point::new(555.0, 0.0, 555.0), Vector::new(-555.0, 0.0, 0.0), Vector::new(0.0, 555.0, 0.0), white)));
}

/// A `size` box at the origin rotated about Y by `degrees`, then moved to `offset`.
fn placed_box(size: Point, degrees: Float, offset: Vector, mat: Arc<dyn Material>) -> Arc<dyn Hittable> {
    let block = make_box(Point::ZERO, size, mat);
    let block = Arc::new(RotateY::new(block, degrees));
    Arc::new(Translate::new(block, offset))
}

/// Ceiling quad facing down, both as the emitter and as its sampling target.
fn ceiling_light(world: &mut HittableList, q: Point, u: Vector, v: Vector, radiance: Color) -> Arc<dyn Hittable> {
    let light = Arc::new(DiffuseLight::from_color(radiance));
    world.add(Arc::new(Quad::new(q, u, v, light)));
    Arc::new(Quad::new(q, u, v, Arc::new(EmptyMaterial)))
}

fn finish(world: HittableList, lights: Arc<dyn Hittable>, camera: CameraConfig) -> Scene {
    let world: Arc<dyn Hittable> = Arc::new(BVHNode::from_hittable_list(world));
    Scene { world, lights: Some(lights), camera }
}

/// Cornell box with a small ceiling light and two rotated white blocks.
pub fn cornell_box() -> Scene {
    let mut world = HittableList::new();
    cornell_walls(&mut world);
    let lights = ceiling_light(
        &mut world,
        Point::new(213.0, 554.0, 227.0),
        Vector::new(130.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 105.0),
        Color::splat(15.0),
    );

    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::splat(0.73)));
    world.add(placed_box(Point::new(165.0, 330.0, 165.0), 15.0, Vector::new(265.0, 0.0, 295.0), white.clone()));
    world.add(placed_box(Point::new(165.0, 165.0, 165.0), -18.0, Vector::new(130.0, 0.0, 65.0), white));

    finish(world, lights, cornell_camera())
}

/// Cornell box with a large dim light and the two blocks replaced by smoke
/// and fog of constant density.
pub fn cornell_smoke() -> Scene {
    let mut world = HittableList::new();
    cornell_walls(&mut world);
    let lights = ceiling_light(
        &mut world,
        Point::new(113.0, 554.0, 127.0),
        Vector::new(330.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 305.0),
        Color::splat(7.0),
    );

    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::splat(0.73)));
    let tall = placed_box(Point::new(165.0, 330.0, 165.0), 15.0, Vector::new(265.0, 0.0, 295.0), white.clone());
    let short = placed_box(Point::new(165.0, 165.0, 165.0), -18.0, Vector::new(130.0, 0.0, 65.0), white);
    world.add(Arc::new(ConstantMedium::from_color(tall, 0.01, Color::ZERO)));
    world.add(Arc::new(ConstantMedium::from_color(short, 0.01, Color::ONE)));

    finish(world, lights, cornell_camera())
}
