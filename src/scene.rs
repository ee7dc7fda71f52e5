use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::{
    camera::Camera,
    error::{RenderError, TraceError},
    frame::PixelSink,
    lighting::Sun,
    material::{clamp_color, Color, Texture},
    math::{Position3, Ray, Vector3},
    object::{Hit, Intersect, Plane, Sphere},
    skybox::{self, Skybox},
};

/// What to do with a frame that contains pixels failing a tracing invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantPolicy {
    /// Finish the frame, then report the violation as an error.
    Strict,

    /// Finish the frame and log a warning.
    Warn,
}

/// Scene options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// Constant baseline illumination multiplied into sphere albedo.
    pub ambient: f64,

    /// Added to the diffuse term when a sphere shows the floor's reflection.
    pub reflection_bias: f64,

    /// The color drawn for a pixel that failed to trace.
    pub error_color: Color,

    pub invariant_policy: InvariantPolicy,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            ambient: 1.,
            reflection_bias: 0.2,
            error_color: Color::magenta(),
            invariant_policy: InvariantPolicy::Strict,
        }
    }
}

/// The surface a pixel resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// A sphere, by its index in `Scene::spheres`.
    Sphere(usize),
    Floor { shadowed: bool },
    Background,
}

/// The outcome of tracing one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub surface: Surface,
    pub color: Color,
}

/// Per-frame counts of resolved surfaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub sphere_pixels: usize,
    pub floor_pixels: usize,
    pub shadowed_pixels: usize,
    pub background_pixels: usize,
    pub failed_pixels: usize,
    pub elapsed: Duration,
}

/// A scene: an ordered list of spheres, a floor, one light, and a camera.
///
/// Spheres are tested in list order and the first hit wins, even if a later
/// sphere is closer to the eye. Reorder the list to change who occludes whom.
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub floor: Plane,
    pub light: Sun,
    pub camera: Camera,
    pub skybox: Box<dyn Skybox>,
    pub options: SceneOptions,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            floor: Plane::default(),
            light: Sun::default(),
            camera: Camera::default(),
            skybox: Box::new(skybox::Checker::default()),
            options: SceneOptions::default(),
        }
    }
}

impl Scene {
    /// Two spheres over a checkered floor, lit from the upper left.
    pub fn classic() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vector3::new(-150., 0., 0.), 100., Vector3::new(1., 1., 0.8)),
                Sphere::new(Vector3::new(150., 50., -50.), 100., Vector3::new(1., 0.8, 0.8)),
            ],
            floor: Plane::new(Vector3::up(), -300., Texture::floor()),
            ..Default::default()
        }
    }

    /// Whether anything blocks the light at `pos`.
    ///
    /// The shadow ray is tested against the whole line, so spheres on either
    /// side of `pos` cast a shadow.
    pub fn in_shadow(&self, pos: Position3) -> bool {
        let shadow_ray = self.light.shadow_ray(pos);
        self.spheres
            .iter()
            .any(|sphere| sphere.intersect(&shadow_ray).is_hit())
    }

    /// The floor hit for a ray, if it strikes the front of the floor ahead of its origin.
    fn floor_hit(&self, ray: &Ray) -> Option<Hit> {
        self.floor.intersect(ray).hit().filter(Hit::is_forward)
    }

    /// Shade a primary ray that struck a sphere.
    fn shade_sphere(&self, sphere: &Sphere, ray: &Ray, hit: &Hit) -> Color {
        let hit_pos = hit.pos(ray);
        let normal = sphere.normal_at(hit_pos);
        let shading = self.light.shading(ray, normal);

        // a mirror bounce that reaches the floor replaces the direct shading
        let bounce = ray.reflect(hit_pos, normal);
        if let Some(floor) = self.floor_hit(&bounce) {
            let floor_color = self.floor.color_at(floor.pos(&bounce));
            return (floor_color * (shading.diffuse + self.options.reflection_bias)).into();
        }

        clamp_color(
            sphere.albedo * (shading.diffuse * self.options.ambient)
                + Vector3::splat(shading.specular),
        )
        .into()
    }

    /// Trace out a pixel, where top-left of the image is (0, 0).
    /// This function is run many times in parallel.
    pub fn trace_pixel(&self, x: i32, y: i32) -> Result<Shade, TraceError> {
        let ray = self.camera.ray_at(x, y);

        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(hit) = sphere.intersect(&ray).hit() {
                if hit.distance < 0. {
                    return Err(TraceError::NegativeHitDistance {
                        x,
                        y,
                        sphere: index,
                        distance: hit.distance,
                    });
                }

                return Ok(Shade {
                    surface: Surface::Sphere(index),
                    color: self.shade_sphere(sphere, &ray, &hit),
                });
            }
        }

        if let Some(hit) = self.floor_hit(&ray) {
            let pos = hit.pos(&ray);
            let shadowed = self.in_shadow(pos);
            let mut color = self.floor.color_at(pos);
            if shadowed {
                color = self.light.darken(color);
            }

            return Ok(Shade {
                surface: Surface::Floor { shadowed },
                color: color.into(),
            });
        }

        Ok(Shade {
            surface: Surface::Background,
            color: self.skybox.pixel_color(x, y, &ray),
        })
    }

    /// Render the image out as a list of traced pixels, row-major.
    ///
    /// Every pixel is independent and the scene is only read, so the whole
    /// frame is traced in parallel before anything is written.
    pub fn render(&self) -> Vec<Result<Shade, TraceError>> {
        let vw = self.camera.vw;
        (0..self.camera.pixel_count())
            .into_par_iter()
            .map(|i| {
                let i = i as i32;
                self.trace_pixel(i % vw, i / vw)
            })
            .collect()
    }

    /// Render one frame and draw every pixel into `sink`.
    pub fn render_frame<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<FrameStats, RenderError> {
        let now = Instant::now();
        let vw = self.camera.vw;
        let mut stats = FrameStats::default();
        let mut first_failure = None;

        for (i, traced) in self.render().into_iter().enumerate() {
            let (x, y) = (i as i32 % vw, i as i32 / vw);
            let color = match traced {
                Ok(shade) => {
                    match shade.surface {
                        Surface::Sphere(_) => stats.sphere_pixels += 1,
                        Surface::Floor { shadowed } => {
                            stats.floor_pixels += 1;
                            if shadowed {
                                stats.shadowed_pixels += 1;
                            }
                        }
                        Surface::Background => stats.background_pixels += 1,
                    }
                    shade.color
                }
                Err(e) => {
                    stats.failed_pixels += 1;
                    first_failure.get_or_insert(e);
                    self.options.error_color
                }
            };
            sink.draw_pixel(x, y, color.to_packed());
        }

        sink.present()?;
        stats.elapsed = now.elapsed();

        if let Some(first) = first_failure {
            match self.options.invariant_policy {
                InvariantPolicy::Strict => {
                    return Err(RenderError::Invariant {
                        count: stats.failed_pixels,
                        first,
                    })
                }
                InvariantPolicy::Warn => log::warn!(
                    "{} pixel(s) failed to trace, first: {}",
                    stats.failed_pixels,
                    first
                ),
            }
        }

        Ok(stats)
    }
}
