use std::time::Instant;

use clap::{App, Arg, ArgMatches};
use whitted::{
    app::{self, RunSummary},
    controls::{Input, InputSource, ScriptedInput},
    error::RenderError,
    frame::PixelSink,
    scene::{InvariantPolicy, Scene},
};

/// Renders into an image, fed by a move script. The last frame is kept.
struct Headless {
    input: ScriptedInput,
    image: image::RgbImage,
}

impl InputSource for Headless {
    fn poll(&mut self) -> Input {
        self.input.poll()
    }
}

impl PixelSink for Headless {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.image.draw_pixel(x, y, color);
    }
}

fn run_headless(scene: &mut Scene, matches: &ArgMatches) -> Result<RunSummary, RenderError> {
    let frames = matches
        .value_of("frames")
        .unwrap_or("1")
        .parse::<u64>()
        .map_err(|e| RenderError::Args(format!("--frames must be a whole number: {}", e)))?;

    let script = ScriptedInput::parse(matches.value_of("moves").unwrap_or("")).ok_or_else(|| {
        RenderError::Args("--moves only accepts the characters l r u d f b q .".to_string())
    })?;
    let mut host = Headless {
        input: script.then_idle(),
        image: image::ImageBuffer::new(scene.camera.vw as u32, scene.camera.vh as u32),
    };
    let summary = app::run(scene, &mut host, Some(frames))?;

    let output = matches.value_of("output").unwrap_or("render.png");
    host.image.save_with_format(output, image::ImageFormat::Png)?;
    log::info!("Wrote {}", output);

    Ok(summary)
}

#[cfg(feature = "preview")]
fn run_window(scene: &mut Scene) -> Result<RunSummary, RenderError> {
    let mut preview = whitted::preview::Preview::new(
        "whitted",
        scene.camera.vw as usize,
        scene.camera.vh as usize,
    )?;
    app::run(scene, &mut preview, None)
}

#[cfg(not(feature = "preview"))]
fn run_window(_: &mut Scene) -> Result<RunSummary, RenderError> {
    Err(RenderError::Window(
        "built without the `preview` feature".to_string(),
    ))
}

fn main() {
    env_logger::init();

    let matches = App::new("Whitted Raytracer")
        .version("1.0")
        .about("Two spheres over a checkered floor, ray traced every frame")
        .arg(
            Arg::with_name("window")
                .long("window")
                .short("w")
                .help("Open a live window driven by the arrow keys")
                .required(false),
        )
        .arg(
            Arg::with_name("frames")
                .long("frames")
                .short("n")
                .value_name("N")
                .help("How many frames to render headless")
                .default_value("1"),
        )
        .arg(
            Arg::with_name("moves")
                .long("moves")
                .short("m")
                .value_name("SCRIPT")
                .help("One move per frame: l r u d, f/b for depth, . idle, q quit")
                .required(false),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .help("Where the last headless frame is written")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("lenient")
                .long("lenient")
                .help("Warn instead of failing when a pixel breaks a tracing invariant")
                .required(false),
        )
        .get_matches();

    let mut scene = Scene::classic();
    if matches.is_present("lenient") {
        scene.options.invariant_policy = InvariantPolicy::Warn;
    }

    log::info!(
        "Rendering {}x{} with {} spheres",
        scene.camera.vw,
        scene.camera.vh,
        scene.spheres.len()
    );
    let now = Instant::now();

    let result = if matches.is_present("window") {
        run_window(&mut scene)
    } else {
        run_headless(&mut scene, &matches)
    };

    match result {
        Ok(summary) => log::info!(
            "Rendered {} frame(s) in {}s",
            summary.frames,
            now.elapsed().as_secs_f32()
        ),
        Err(e @ RenderError::Args(_)) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            log::error!("Failed to render: {}", e);
            std::process::exit(1);
        }
    }
}
