// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to the active screen: file drops on the upload
//! screen, uncaptured keyboard events to the editor.

use super::{Message, Screen};
use crate::ui::image_editor;
use iced::{event, time, Subscription};
use std::time::Duration;

pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Upload => event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }
            None
        }),
        Screen::Editor => event::listen_with(|event, status, _window_id| {
            if let event::Event::Keyboard(..) = &event {
                match status {
                    event::Status::Ignored => {
                        Some(Message::ImageEditor(image_editor::Message::RawEvent(event)))
                    }
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        }),
    }
}

/// Ticks only while toasts are waiting to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
