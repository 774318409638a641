/// Terminal front end for the rotating torus
use std::thread;
use std::time::{Duration, Instant};
use torus3d_core::{EulerAngles, Point2D, Projector, SceneConfig, Torus};

pub mod console;
pub mod error;
pub mod logging;
pub mod pacing;
pub mod renderer;

pub use console::{Console, CrosstermConsole};
pub use error::AppError;
pub use pacing::{FpsCounter, FramePacer, FrameStats, Pacing, StopToken};
pub use renderer::AsciiRenderer;

/// Main application struct: owns the scene and drives it frame by frame
pub struct TerminalApp<C: Console> {
    console: C,
    torus: Torus,
    spin: EulerAngles,
    projector: Projector,
    renderer: AsciiRenderer,
    pacer: FramePacer,
    projected: Vec<Point2D>,
    frame_text: String,
    stats: FrameStats,
    fps: FpsCounter,
}

impl<C: Console> TerminalApp<C> {
    /// Query the viewport once and build the scene. The size is never re-read.
    pub fn new(console: C, config: &SceneConfig) -> Result<Self, AppError> {
        let (width, height) = console.size().map_err(AppError::ViewportQuery)?;
        if width == 0 || height == 0 {
            return Err(AppError::EmptyViewport { width, height });
        }

        let torus = Torus::with_resolution(
            config.center,
            config.major_radius,
            config.minor_radius,
            config.resolution,
        )?;
        let projector = Projector::new(width, height)
            .with_focal_length(config.focal_length)
            .with_depth_policy(config.depth_policy);

        tracing::info!(width, height, points = torus.len(), "scene ready");

        Ok(Self {
            console,
            torus,
            spin: config.spin,
            projector,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            pacer: FramePacer::new(config.frame_interval()),
            projected: Vec::new(),
            frame_text: String::new(),
            stats: FrameStats::default(),
            fps: FpsCounter::new(Instant::now()),
        })
    }

    /// Run until `stop` is set. The binary never sets it.
    pub fn run(&mut self, stop: &StopToken) -> Result<FrameStats, AppError> {
        self.console.clear()?;
        while !stop.is_stopped() {
            self.frame()?;
        }
        Ok(self.stats)
    }

    /// Run exactly `frames` frames
    pub fn run_frames(&mut self, frames: u64) -> Result<FrameStats, AppError> {
        self.console.clear()?;
        for _ in 0..frames {
            self.frame()?;
        }
        Ok(self.stats)
    }

    /// One paced frame: render, then sleep off whatever is left of the budget
    fn frame(&mut self) -> Result<(), AppError> {
        let frame_start = Instant::now();
        self.render_frame()?;

        let pacing = self.pacer.plan(frame_start.elapsed());
        match pacing {
            Pacing::Sleep(remaining) => thread::sleep(remaining),
            Pacing::Overrun(over) => {
                tracing::warn!(over_budget = ?over, "frame processing took too long");
            }
        }
        self.stats.record(pacing);

        if let Some(fps) = self.fps.tick(Instant::now()) {
            tracing::debug!(fps, "frame rate");
        }
        Ok(())
    }

    /// Rotate, project, rasterize, clear, draw. No pacing.
    pub fn render_frame(&mut self) -> Result<(), AppError> {
        self.torus.rotate(&self.spin)?;
        self.rasterize();

        self.console.clear()?;
        self.console.write_frame(&self.frame_text)?;
        Ok(())
    }

    /// Project the torus in its current orientation into the render buffer
    /// and refresh the frame text
    pub fn rasterize(&mut self) {
        let projector = &self.projector;
        self.projected.clear();
        self.projected.extend(
            self.torus
                .points()
                .iter()
                .filter_map(|p| projector.project_point(p)),
        );

        self.renderer.clear();
        self.renderer.plot(&self.projected);
        self.renderer.write_text(&mut self.frame_text);
    }

    pub fn frame_text(&self) -> &str {
        &self.frame_text
    }

    pub fn renderer(&self) -> &AsciiRenderer {
        &self.renderer
    }

    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn frame_interval(&self) -> Duration {
        self.pacer.target()
    }
}
