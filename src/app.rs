use crate::{
    controls::InputSource,
    error::RenderError,
    frame::PixelSink,
    scene::{FrameStats, Scene},
};

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub last_frame: Option<FrameStats>,
}

/// Drive the frame loop until the host asks to exit or `max_frames` is reached.
///
/// Each iteration polls input, moves the first sphere, then renders and
/// presents a full frame. Scene state only changes between frames.
pub fn run<H>(scene: &mut Scene, host: &mut H, max_frames: Option<u64>) -> Result<RunSummary, RenderError>
where
    H: InputSource + PixelSink,
{
    let mut summary = RunSummary::default();

    while max_frames.map_or(true, |max| summary.frames < max) {
        let input = host.poll();
        if input.exit {
            log::debug!("exit requested after {} frame(s)", summary.frames);
            break;
        }

        if let Some(sphere) = scene.spheres.first_mut() {
            input.apply(sphere);
        }

        let stats = scene.render_frame(host)?;
        log::debug!(
            "frame {} in {:.1}ms: {} sphere, {} floor ({} shadowed), {} background",
            summary.frames,
            stats.elapsed.as_secs_f64() * 1000.,
            stats.sphere_pixels,
            stats.floor_pixels,
            stats.shadowed_pixels,
            stats.background_pixels,
        );

        summary.frames += 1;
        summary.last_frame = Some(stats);
    }

    Ok(summary)
}
