use super::super::messages::Message;
use crate::theme;
use iced::widget::canvas::{self, Frame, Geometry, Text};
use iced::{Font, Pixels, Point, Rectangle, Renderer, Theme, mouse};
use portfolio_core::rain::{MatrixRain, TRAIL_LEN};

/// Overall opacity of the background so content stays readable.
const RAIN_OPACITY: f32 = 0.35;

pub(super) struct RainCanvas<'a> {
    pub(super) rain: &'a MatrixRain,
}

impl canvas::Program<Message> for RainCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = self.rain.glyph_size();

        for (col, column) in self.rain.columns().iter().enumerate() {
            let x = col as f32 * size;
            for (age, glyph) in column.trail().enumerate() {
                let y = glyph.row * size;
                if y < -size || y > bounds.height {
                    continue;
                }
                let fade = (1.0 - age as f32 / TRAIL_LEN as f32) * RAIN_OPACITY;
                frame.fill_text(Text {
                    content: glyph.ch.to_string(),
                    position: Point::new(x, y),
                    color: theme::rain_color(glyph.tone, fade),
                    size: Pixels(size),
                    font: Font::MONOSPACE,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
