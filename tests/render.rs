use whitted::{
    app,
    camera::Camera,
    controls::{Input, InputSource, ScriptedInput},
    error::RenderError,
    frame::{FrameBuffer, PixelSink},
    material::Color,
    math::Vector3,
    object::Sphere,
    scene::{InvariantPolicy, Scene, Surface},
};

struct TestHost {
    input: ScriptedInput,
    buffer: FrameBuffer,
    presented: usize,
}

impl TestHost {
    fn new(scene: &Scene, input: ScriptedInput) -> Self {
        Self {
            input,
            buffer: FrameBuffer::new(scene.camera.vw as usize, scene.camera.vh as usize),
            presented: 0,
        }
    }
}

impl InputSource for TestHost {
    fn poll(&mut self) -> Input {
        self.input.poll()
    }
}

impl PixelSink for TestHost {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.buffer.draw_pixel(x, y, color);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.presented += 1;
        Ok(())
    }
}

fn small_camera() -> Camera {
    Camera {
        vw: 64,
        vh: 48,
        ..Default::default()
    }
}

#[test]
fn sphere_pixel_end_to_end() {
    let scene = Scene::classic();
    let mut buffer = FrameBuffer::new(640, 480);
    let stats = scene.render_frame(&mut buffer).unwrap();

    assert_eq!(stats.failed_pixels, 0);
    assert_eq!(
        stats.sphere_pixels + stats.floor_pixels + stats.background_pixels,
        640 * 480
    );
    assert!(stats.sphere_pixels > 0);
    assert!(stats.shadowed_pixels > 0);

    // (170, 240) maps to world x = -150 at the first sphere's center height
    let shade = scene.trace_pixel(170, 240).unwrap();
    assert_eq!(shade.surface, Surface::Sphere(0));
    assert_eq!(buffer.get(170, 240), Some(shade.color.to_packed()));

    let floor_colors = [
        Color::from(Vector3::new(0., 0.7, 0.3)),
        Color::from(Vector3::new(0.2, 0.2, 0.2)),
    ];
    assert!(!floor_colors.contains(&shade.color));

    // albedo (1, 1, 0.8) scaled by a diffuse term well below one
    let Color { r, g, b } = shade.color;
    assert_eq!(r, g);
    assert!(b < r);
    assert!(r < 255 && r > 0);
}

#[test]
fn floor_under_first_sphere_is_shadowed() {
    let scene = Scene::classic();

    // (395, 390) sees the floor at (150, 300, -300), whose light ray passes
    // straight through the first sphere's center
    let shade = scene.trace_pixel(395, 390).unwrap();
    assert_eq!(shade.surface, Surface::Floor { shadowed: true });
    assert_eq!(
        shade.color,
        Color::from(Vector3::new(0., 0.7, 0.3) - Vector3::new(0., 0.2, 0.2))
    );

    let lit = scene.trace_pixel(630, 470).unwrap();
    assert_eq!(lit.surface, Surface::Floor { shadowed: false });
}

#[test]
fn list_order_beats_depth() {
    let mut scene = Scene::classic();
    // a small sphere halfway between the eye and the first sphere's center
    let blocker = Sphere::new(Vector3::new(-75., 0., 150.), 20., Vector3::new(0., 0., 1.));
    scene.spheres.push(blocker.clone());

    let shade = scene.trace_pixel(170, 240).unwrap();
    assert_eq!(shade.surface, Surface::Sphere(0));

    scene.spheres.insert(0, blocker);
    scene.spheres.pop();
    let shade = scene.trace_pixel(170, 240).unwrap();
    assert_eq!(shade.surface, Surface::Sphere(0));
    assert_eq!(scene.spheres[0].radius, 20.);
}

#[test]
fn move_right_shifts_only_first_sphere_x() {
    let mut scene = Scene::classic();
    scene.camera = small_camera();
    let before = scene.spheres.clone();

    let mut host = TestHost::new(&scene, ScriptedInput::parse("r").unwrap());
    let summary = app::run(&mut scene, &mut host, None).unwrap();

    assert_eq!(summary.frames, 1);
    assert_eq!(host.presented, 1);
    assert_eq!(
        scene.spheres[0].origin,
        before[0].origin + Vector3::new(1., 0., 0.)
    );
    assert_eq!(scene.spheres[0].radius, before[0].radius);
    assert_eq!(scene.spheres[0].albedo, before[0].albedo);
    assert_eq!(scene.spheres[1], before[1]);
}

#[test]
fn frame_limit_and_exit_signal() {
    let mut scene = Scene::classic();
    scene.camera = small_camera();

    let mut host = TestHost::new(&scene, ScriptedInput::idle(10));
    let summary = app::run(&mut scene, &mut host, Some(3)).unwrap();
    assert_eq!(summary.frames, 3);
    assert_eq!(host.presented, 3);
    assert!(summary.last_frame.is_some());

    let mut host = TestHost::new(&scene, ScriptedInput::parse("ddq").unwrap());
    let origin = scene.spheres[0].origin;
    let summary = app::run(&mut scene, &mut host, None).unwrap();
    assert_eq!(summary.frames, 2);
    assert_eq!(scene.spheres[0].origin, origin + Vector3::new(0., 2., 0.));
}

#[test]
fn idle_script_runs_to_the_frame_limit() {
    let mut scene = Scene::classic();
    scene.camera = small_camera();
    let origin = scene.spheres[0].origin;

    let mut host = TestHost::new(&scene, ScriptedInput::parse("r").unwrap().then_idle());
    let summary = app::run(&mut scene, &mut host, Some(5)).unwrap();
    assert_eq!(summary.frames, 5);
    assert_eq!(host.presented, 5);
    assert_eq!(scene.spheres[0].origin, origin + Vector3::new(1., 0., 0.));
}

#[test]
fn strict_policy_fails_after_drawing_the_frame() {
    let mut scene = Scene::classic();
    scene.camera = small_camera();
    scene.spheres[0].origin = scene.camera.origin;

    let mut buffer = FrameBuffer::new(64, 48);
    match scene.render_frame(&mut buffer) {
        Err(RenderError::Invariant { count, .. }) => assert_eq!(count, 64 * 48),
        other => panic!("expected an invariant error, got {:?}", other),
    }
    assert!(buffer
        .pixels
        .iter()
        .all(|&p| p == Color::magenta().to_packed()));
}

#[test]
fn warn_policy_keeps_going() {
    let mut scene = Scene::classic();
    scene.camera = small_camera();
    scene.options.invariant_policy = InvariantPolicy::Warn;
    scene.spheres[0].origin = scene.camera.origin;

    let mut buffer = FrameBuffer::new(64, 48);
    let stats = scene.render_frame(&mut buffer).unwrap();
    assert_eq!(stats.failed_pixels, 64 * 48);
}
