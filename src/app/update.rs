// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives the slice of app state it needs through
//! [`UpdateContext`] and returns the follow-up [`Task`]. Everything that
//! blocks (decoding, encoding, file writes, the AI call) runs inside a task.

use super::{Message, Screen};
use crate::config::AiConfig;
use crate::domain::editing::ImageFilters;
use crate::error::{Error, Result};
use crate::infrastructure::GeminiClient;
use crate::media::{self, export, ExportKind, LoadedPhoto, Photo};
use crate::application::port::{RetouchPort, RetouchRequest};
use crate::ui::image_editor::{
    self, EditorSettings, ErrorMessage, Event as ImageEditorEvent, State as ImageEditorState,
};
use crate::ui::notifications::{self, Notification};
use crate::ui::upload;
use chrono::Utc;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the app state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub upload: &'a mut upload::State,
    pub editor: &'a mut Option<ImageEditorState>,
    pub settings: &'a EditorSettings,
    pub ai: &'a AiConfig,
    pub notifications: &'a mut notifications::Manager,
}

/// Export waiting for the user to pick a destination.
#[derive(Debug, Clone)]
pub struct PendingExport {
    pub kind: ExportKind,
    pub photo: Photo,
    pub filters: ImageFilters,
}

pub fn handle_upload_message(ctx: &mut UpdateContext<'_>, message: upload::Message) -> Task<Message> {
    match message {
        upload::Message::Browse => {
            if ctx.upload.loading {
                return Task::none();
            }
            handle_open_file_dialog()
        }
    }
}

/// Opens the native picker filtered to PNG and JPEG.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Image", media::PHOTO_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Starts decoding a photo from disk. Ignored while another load runs.
pub fn handle_open_path(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if ctx.upload.loading || *ctx.screen != Screen::Upload {
        return Task::none();
    }
    ctx.upload.start_loading();
    Task::perform(
        async move { media::load_photo(&path) },
        Message::PhotoLoaded,
    )
}

pub fn handle_photo_loaded(ctx: &mut UpdateContext<'_>, result: Result<LoadedPhoto>) -> Task<Message> {
    match result {
        Ok(loaded) => {
            ctx.upload.loading = false;
            ctx.upload.error = None;
            *ctx.editor = Some(ImageEditorState::new(loaded, ctx.settings));
            *ctx.screen = Screen::Editor;
        }
        Err(err) => {
            tracing::warn!(%err, "photo could not be loaded");
            ctx.upload.fail(ErrorMessage::from(&err));
        }
    }
    Task::none()
}

pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: image_editor::Message,
) -> Task<Message> {
    let Some(editor_state) = ctx.editor.as_mut() else {
        return Task::none();
    };

    match editor_state.update(message) {
        ImageEditorEvent::None => Task::none(),
        ImageEditorEvent::EnhanceRequested(request) => handle_enhance_request(ctx.ai, request),
        ImageEditorEvent::ExportRequested {
            kind,
            photo,
            filters,
        } => handle_export_request(PendingExport {
            kind,
            photo,
            filters,
        }),
        ImageEditorEvent::ChangeImage => {
            *ctx.editor = None;
            *ctx.upload = upload::State::default();
            *ctx.screen = Screen::Upload;
            tracing::info!("editing session discarded");
            Task::none()
        }
    }
}

/// Sends the retouch request; the result always comes back to the editor.
fn handle_enhance_request(ai: &AiConfig, request: RetouchRequest) -> Task<Message> {
    let client = GeminiClient::from_config(ai);
    Task::perform(
        async move {
            let client = client?;
            client.retouch(request).await
        },
        |result| Message::ImageEditor(image_editor::Message::EnhanceFinished(result)),
    )
}

fn handle_export_request(export: PendingExport) -> Task<Message> {
    let file_name = export.kind.file_name(Utc::now());
    Task::perform(
        async move {
            let path = rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .add_filter("JPEG", &["jpg", "jpeg"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());
            (path, export)
        },
        |(path, export)| Message::ExportDialogResult { path, export },
    )
}

pub fn handle_export_dialog_result(path: Option<PathBuf>, export: PendingExport) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || write_export(&path, &export).map(|()| path))
                .await
                .map_err(|err| Error::Io(err.to_string()))?
        },
        Message::ExportCompleted,
    )
}

/// Encodes and writes one export.
pub fn write_export(path: &Path, export: &PendingExport) -> Result<()> {
    let bytes = export::render(export.kind, &export.photo, &export.filters)?;
    export::write(path, &bytes)?;
    tracing::info!(path = %path.display(), kind = ?export.kind, size = bytes.len(), "export written");
    Ok(())
}

pub fn handle_export_completed(ctx: &mut UpdateContext<'_>, result: Result<PathBuf>) -> Task<Message> {
    match result {
        Ok(path) => {
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ctx.notifications
                .push(Notification::success("notification-export-saved").with_arg("file", file));
            Task::none()
        }
        Err(err) => {
            tracing::warn!(%err, "export failed");
            let message = image_editor::Message::ExportFailed(ErrorMessage::from(&err));
            handle_editor_message(ctx, message)
        }
    }
}
