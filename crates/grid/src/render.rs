//! Render adapter seam.
//!
//! The viewport engine computes geometry and emits abstract drawing
//! commands through this trait; collaborators own the actual pixels.
//! All coordinates are in pixel space, origin top-left, y increasing
//! downward.

use tui_life_types::GridError;

/// Drawing surface contract consumed by the viewport engine.
pub trait RenderAdapter {
    /// Acquire (or re-acquire, on resize) a drawing surface of the given
    /// pixel dimensions.
    fn acquire_surface(&mut self, width: u32, height: u32) -> Result<(), GridError>;

    /// Clear the whole surface.
    fn clear_all(&mut self);

    /// Draw a gridline segment.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Fill a rectangle (a live cell, margin already applied).
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Clear a rectangle (a cell that died, margin already applied).
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearAll,
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
}

/// Adapter that records every command instead of drawing.
///
/// Used by the test suites and benches to assert exactly which commands
/// the engine emits; can also be forced to refuse the surface to
/// exercise the `SurfaceUnavailable` path.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    commands: Vec<RenderCommand>,
    fail_acquire: bool,
    surface: Option<(u32, u32)>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An adapter whose `acquire_surface` always fails.
    pub fn unavailable() -> Self {
        Self {
            fail_acquire: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
    }

    pub fn count_lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Line { .. }))
            .count()
    }

    pub fn count_fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::FillRect { .. }))
            .count()
    }

    pub fn count_clear_rects(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::ClearRect { .. }))
            .count()
    }

    pub fn surface(&self) -> Option<(u32, u32)> {
        self.surface
    }
}

impl RenderAdapter for RecordingAdapter {
    fn acquire_surface(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        if self.fail_acquire {
            return Err(GridError::SurfaceUnavailable {
                reason: "recording adapter configured without a surface".into(),
            });
        }
        self.surface = Some((width, height));
        Ok(())
    }

    fn clear_all(&mut self) {
        self.commands.push(RenderCommand::ClearAll);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(RenderCommand::Line { x1, y1, x2, y2 });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(RenderCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(RenderCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_adapter_logs_commands() {
        let mut adapter = RecordingAdapter::new();
        adapter.acquire_surface(100, 50).unwrap();
        adapter.clear_all();
        adapter.draw_line(0.0, 10.0, 100.0, 10.0);
        adapter.fill_rect(5.0, 5.0, 9.0, 9.0);

        assert_eq!(adapter.surface(), Some((100, 50)));
        assert_eq!(adapter.commands().len(), 3);
        assert_eq!(adapter.count_lines(), 1);
        assert_eq!(adapter.count_fills(), 1);
        assert_eq!(adapter.count_clear_rects(), 0);
    }

    #[test]
    fn test_unavailable_adapter_refuses_surface() {
        let mut adapter = RecordingAdapter::unavailable();
        let err = adapter.acquire_surface(100, 50).unwrap_err();
        assert!(matches!(err, GridError::SurfaceUnavailable { .. }));
    }
}
