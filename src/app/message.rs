// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::LoadedPhoto;
use crate::ui::image_editor;
use crate::ui::notifications;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

use super::update::PendingExport;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    ImageEditor(image_editor::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    PhotoLoaded(Result<LoadedPhoto, Error>),
    /// Result from the save dialog for a pending export.
    ExportDialogResult {
        path: Option<PathBuf>,
        export: PendingExport,
    },
    ExportCompleted(Result<PathBuf, Error>),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path opened on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ID_LENS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
