/// Loading indicator shown while a try-on is in flight
/// Drawn on a canvas: a faint ring with a rotating accent arc
use iced::widget::canvas::{self, path, Stroke};
use iced::widget::{column, text, Canvas};
use iced::{mouse, Alignment, Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

use super::ACCENT;
use crate::Message;

/// Radians advanced per animation tick
const STEP: f32 = PI / 24.0;

/// Length of the accent arc
const SWEEP: f32 = PI / 2.0;

const SIZE: f32 = 48.0;
const STROKE_WIDTH: f32 = 4.0;

/// Spinner animation state
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    /// Current start angle of the arc
    pub rotation: f32,
}

impl Spinner {
    /// Advance one animation frame
    pub fn tick(&mut self) {
        self.rotation = (self.rotation + STEP) % (2.0 * PI);
    }

    /// Spinner plus the "working on it" caption
    pub fn view(&self) -> Element<'_, Message> {
        column![
            Canvas::new(*self)
                .width(Length::Fixed(SIZE))
                .height(Length::Fixed(SIZE)),
            text("AI is working its magic...").size(18),
            text("This may take a moment.").size(14),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into()
    }
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = (bounds.width.min(bounds.height) - STROKE_WIDTH) / 2.0;

        // Track
        let ring = canvas::Path::circle(center, radius);
        frame.stroke(
            &ring,
            Stroke::default()
                .with_color(Color { a: 0.25, ..ACCENT })
                .with_width(STROKE_WIDTH),
        );

        // Moving arc
        let mut builder = path::Builder::new();
        builder.arc(path::Arc {
            center,
            radius,
            start_angle: Radians(self.rotation),
            end_angle: Radians(self.rotation + SWEEP),
        });
        frame.stroke(
            &builder.build(),
            Stroke::default().with_color(ACCENT).with_width(STROKE_WIDTH),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps_around() {
        let mut spinner = Spinner::default();
        for _ in 0..48 {
            spinner.tick();
        }
        // 48 steps of PI/24 is a full turn
        assert!(spinner.rotation.abs() < 1e-3 || (spinner.rotation - 2.0 * PI).abs() < 1e-3);
        assert!(spinner.rotation < 2.0 * PI + 1e-3);
    }
}
