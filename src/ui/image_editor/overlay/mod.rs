// SPDX-License-Identifier: MPL-2.0
//! Interactive photo canvas shared by the editor and the sheet preview.
//!
//! The canvas only reports pointer input and its own size; all geometry is
//! decided by the editor state. A leave event is reported as a release so a
//! drag can never get stuck.

use crate::domain::editing::{Point, Rect, Size};
use crate::ui::image_editor::render::{Label, LabelAnchor};
use crate::ui::image_editor::state::crop::hit_test;
use crate::ui::image_editor::CanvasMessage;
use iced::widget::canvas::{self, Frame, Geometry, Text};
use iced::widget::image::{self, FilterMethod};
use iced::{alignment, mouse, Color, Rectangle};

const LABEL_SIZE: f32 = 12.0;
const SHEET_BACKDROP: Color = Color::from_rgb8(17, 24, 39);

/// What the canvas paints.
#[derive(Debug, Clone, Copy)]
pub enum Backdrop<'a> {
    /// A pre-rendered frame covering the whole surface.
    Frame(&'a image::Handle),
    /// An image placed at a screen rectangle.
    Placed {
        handle: &'a image::Handle,
        rect: Rect,
    },
}

/// Localized guide caption.
#[derive(Debug, Clone)]
pub struct Caption {
    pub text: String,
    pub label: Label,
}

/// Canvas program for an editable photo surface.
pub struct PhotoCanvas<'a, Message> {
    pub backdrop: Option<Backdrop<'a>>,
    pub captions: Vec<Caption>,
    /// Surface size the state last saw; a mismatch is reported.
    pub surface: Size,
    /// Crop rectangle, for handle cursors.
    pub crop: Option<Rect>,
    pub dragging: bool,
    pub on_event: fn(CanvasMessage) -> Message,
}

fn to_point(point: iced::Point) -> Point {
    Point::new(point.x, point.y)
}

fn scroll_zooms_in(delta: &mouse::ScrollDelta) -> Option<bool> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
    };
    if y.abs() < f32::EPSILON {
        None
    } else {
        Some(y > 0.0)
    }
}

impl<Message> canvas::Program<Message> for PhotoCanvas<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let size = Size::new(bounds.width, bounds.height);
        if size != self.surface && size.is_drawable() {
            return Some(Action::publish((self.on_event)(CanvasMessage::SurfaceResized(
                size,
            ))));
        }

        let message = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                CanvasMessage::MouseDown(to_point(position))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => match cursor.position_in(bounds)
            {
                Some(position) => CanvasMessage::MouseMove(to_point(position)),
                None if self.dragging => CanvasMessage::MouseUp,
                None => return None,
            },
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                CanvasMessage::MouseUp
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => CanvasMessage::MouseUp,
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                CanvasMessage::Wheel {
                    position: to_point(position),
                    zoom_in: scroll_zooms_in(delta)?,
                }
            }
            _ => return None,
        };

        Some(Action::publish((self.on_event)(message)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        match self.backdrop {
            Some(Backdrop::Frame(handle)) => {
                let area = Rectangle::new(
                    iced::Point::ORIGIN,
                    iced::Size::new(self.surface.width, self.surface.height),
                );
                frame.draw_image(
                    area,
                    canvas::Image::new(handle.clone()).filter_method(FilterMethod::Nearest),
                );
            }
            Some(Backdrop::Placed { handle, rect }) => {
                frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), SHEET_BACKDROP);
                let area = Rectangle::new(
                    iced::Point::new(rect.x, rect.y),
                    iced::Size::new(rect.width, rect.height),
                );
                frame.draw_image(
                    area,
                    canvas::Image::new(handle.clone()).filter_method(FilterMethod::Linear),
                );
            }
            None => {
                frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), SHEET_BACKDROP);
            }
        }

        for caption in &self.captions {
            let [r, g, b, a] = caption.label.color;
            let align = match caption.label.anchor {
                LabelAnchor::Left => alignment::Horizontal::Left,
                LabelAnchor::Right => alignment::Horizontal::Right,
            };
            frame.fill_text(Text {
                content: caption.text.clone(),
                position: iced::Point::new(caption.label.position.x, caption.label.position.y),
                color: Color::from_rgba8(r, g, b, f32::from(a) / 255.0),
                size: LABEL_SIZE.into(),
                align_x: align.into(),
                align_y: alignment::Vertical::Bottom,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        match self.crop {
            Some(rect) if hit_test(&rect, to_point(position)).is_some() => {
                mouse::Interaction::Crosshair
            }
            _ => mouse::Interaction::Grab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(
            scroll_zooms_in(&mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            Some(true)
        );
        assert_eq!(
            scroll_zooms_in(&mouse::ScrollDelta::Pixels { x: 0.0, y: -40.0 }),
            Some(false)
        );
        assert_eq!(
            scroll_zooms_in(&mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 }),
            None
        );
    }
}
