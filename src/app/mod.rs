// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload screen and
//! the editor.
//!
//! The `App` struct owns localization, preferences and the toast manager,
//! and translates messages into side effects like file dialogs, photo
//! decoding, exports or the AI request.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::PendingExport;

use crate::config::{self, AiConfig};
use crate::i18n::fluent::I18n;
use crate::ui::image_editor::{EditorSettings, State as ImageEditorState};
use crate::ui::notifications;
use crate::ui::upload;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    upload: upload::State,
    editor: Option<ImageEditorState>,
    /// Preferences every new editing session starts from.
    settings: EditorSettings,
    ai: AiConfig,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("editing", &self.editor.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Upload,
            upload: upload::State::default(),
            editor: None,
            settings: EditorSettings::default(),
            ai: AiConfig::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), &config),
            settings: EditorSettings::from(&config),
            ai: config.ai.clone(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => {
                tracing::info!(%path, "opening photo from command line");
                update::handle_open_path(&mut app.update_context(), PathBuf::from(path))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.editor {
            Some(editor) if self.screen == Screen::Editor => {
                let size = editor.photo_size();
                format!("{app_name} - {:.0}×{:.0}", size.width, size.height)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            upload: &mut self.upload,
            editor: &mut self.editor,
            settings: &self.settings,
            ai: &self.ai,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(upload_message) => {
                update::handle_upload_message(&mut self.update_context(), upload_message)
            }
            Message::ImageEditor(editor_message) => {
                update::handle_editor_message(&mut self.update_context(), editor_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => match path {
                Some(path) => update::handle_open_path(&mut self.update_context(), path),
                None => Task::none(),
            },
            Message::FileDropped(path) => {
                update::handle_open_path(&mut self.update_context(), path)
            }
            Message::PhotoLoaded(result) => {
                update::handle_photo_loaded(&mut self.update_context(), result)
            }
            Message::ExportDialogResult { path, export } => {
                update::handle_export_dialog_result(path, export)
            }
            Message::ExportCompleted(result) => {
                update::handle_export_completed(&mut self.update_context(), result)
            }
            Message::Tick(now) => {
                self.notifications.expire(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            upload: &self.upload,
            editor: self.editor.as_ref(),
            notifications: &self.notifications,
        })
    }
}
