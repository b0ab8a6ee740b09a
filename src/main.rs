use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use restlife::scene::Scene;
use restlife::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("restlife")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monte Carlo path tracer")
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .value_parser(value_parser!(usize))
                .help("output width in pixels"),
        )
        .arg(
            Arg::new("aspect")
                .long("aspect")
                .short('a')
                .help("aspect ratio as W:H or a number"),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .short('s')
                .value_parser(value_parser!(usize))
                .help("samples per pixel, rounded down to a square"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .short('d')
                .value_parser(value_parser!(usize))
                .help("maximum path length"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('e')
                .value_parser(value_parser!(u64))
                .help("rng seed; random when omitted"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_parser(value_parser!(usize))
                .help("worker threads; defaults to the number of cores"),
        )
        .arg(
            Arg::new("scene")
                .long("scene")
                .value_parser(SceneChoice::NAMES)
                .default_value("cornell")
                .help("scene to render"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("PPM file to write; stdout when omitted"),
        )
}

/// Fills unspecified options from the chosen scene's camera.
fn settings(matches: &ArgMatches) -> Result<(Settings, Scene), ConfigError> {
    let choice: SceneChoice = matches.get_one::<String>("scene").map_or(Ok(SceneChoice::Cornell), |s| s.parse())?;
    let scene = Scene::from_choice(choice);
    let camera = &scene.camera;
    let aspect_ratio = match matches.get_one::<String>("aspect") {
        Some(s) => parse_aspect(s)?,
        None => camera.aspect_ratio,
    };
    let settings = Settings {
        width: matches.get_one("width").copied().unwrap_or(camera.image_width),
        aspect_ratio,
        samples_per_pixel: matches.get_one("samples").copied().unwrap_or(camera.samples_per_pixel),
        max_depth: matches.get_one("depth").copied().unwrap_or(camera.max_depth),
        seed: matches.get_one("seed").copied(),
        threads: matches.get_one("threads").copied(),
        scene: choice,
        output: matches.get_one::<PathBuf>("output").cloned(),
    }
    .validate()?;
    Ok((settings, scene))
}

fn write_ppm(out: &mut impl Write, image: &ImageBuffer) -> io::Result<()> {
    writeln!(out, "P3\n{} {}\n255", image.width, image.height)?;
    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    let (settings, mut scene) = settings(&matches)?;
    if let Some(threads) = settings.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(RenderError::from)?;
    }

    settings.apply(&mut scene.camera);
    let camera = Camera::new(&scene.camera);
    let control = RenderControl::new();
    let image = render(&camera, scene.world.as_ref(), scene.lights(), &settings.render_options(), &control)?;

    match &settings.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_ppm(&mut BufWriter::new(file), &image)?;
            log::info!("wrote {}", path.display());
        }
        None => write_ppm(&mut BufWriter::new(io::stdout().lock()), &image)?,
    }
    Ok(())
}
