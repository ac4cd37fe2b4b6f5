// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::{AIError, AiIntensity, RetouchRequest};
use crate::domain::editing::{FilterKind, Point, Size};
use crate::domain::media::EncodedImage;
use crate::media::image_transform::encode_for_upload;
use crate::media::{ExportKind, LoadedPhoto};
use crate::test_utils::assert_abs_diff_eq;
use iced::keyboard::{self, Key, Modifiers};
use image_rs::{Rgba, RgbaImage};

/// Editor over a solid grey photo, before the canvas reported its size.
pub(crate) fn editor(width: u32, height: u32) -> State {
    let pixels = RgbaImage::from_pixel(width, height, Rgba([128, 128, 128, 255]));
    let loaded = LoadedPhoto {
        photo: Photo::new(pixels),
        mime: ImageMime::Png,
    };
    State::new(loaded, &EditorSettings::default())
}

/// Editor after its first 800x600 layout.
fn laid_out(width: u32, height: u32) -> State {
    let mut state = editor(width, height);
    state.update(CanvasMessage::SurfaceResized(Size::new(800.0, 600.0)).into());
    state
}

fn release_filter(state: &mut State, kind: FilterKind, value: f32) {
    state.update(SidebarMessage::FilterChanged(kind, value).into());
    state.update(SidebarMessage::FilterReleased.into());
}

fn start_enhance(state: &mut State) -> RetouchRequest {
    match state.update(SidebarMessage::Enhance.into()) {
        Event::EnhanceRequested(request) => request,
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn new_editor_has_single_history_entry() {
    let state = editor(40, 30);
    assert_eq!(state.history().len(), 1);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.is_cropping());
    assert!(state.filters().is_neutral());
}

#[test]
fn first_layout_fits_and_records_fitted_viewport() {
    let state = laid_out(1000, 1200);
    assert_abs_diff_eq!(state.viewport().zoom().value(), 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(state.viewport().pan().x, 150.0, epsilon = 1e-4);
    assert_abs_diff_eq!(state.viewport().pan().y, 0.0, epsilon = 1e-4);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history().current().viewport, state.viewport());
}

#[test]
fn preview_frame_is_rendered_once_surface_is_known() {
    let mut state = editor(40, 30);
    assert!(state.frame().is_none());
    state.update(CanvasMessage::SurfaceResized(Size::new(200.0, 100.0)).into());
    assert!(state.frame().is_some());
}

#[test]
fn crop_end_to_end_bakes_region_and_records_history() {
    let mut state = laid_out(1000, 1200);
    state.update(SidebarMessage::ToggleCrop.into());
    assert!(state.is_cropping());

    // 420x540 rectangle at (190, 30), zoom 0.5, pan (150, 0).
    state.update(SidebarMessage::ApplyCrop.into());

    assert!(!state.is_cropping());
    assert_eq!(state.current_photo().width(), 840);
    assert_eq!(state.current_photo().height(), 1080);
    assert_eq!(state.original_photo().width(), 840);
    assert_eq!(state.history().len(), 2);
    assert!(state.can_undo());
}

#[test]
fn undo_and_redo_restore_image_and_filters() {
    let mut state = laid_out(1000, 1200);
    release_filter(&mut state, FilterKind::Brightness, 150.0);
    state.update(SidebarMessage::ToggleCrop.into());
    state.update(SidebarMessage::ApplyCrop.into());
    assert!(state.filters().is_neutral());

    state.update(ToolbarMessage::Undo.into());
    assert_eq!(state.current_photo().width(), 1000);
    assert_abs_diff_eq!(state.filters().brightness.value(), 150.0);

    state.update(ToolbarMessage::Undo.into());
    assert!(state.filters().is_neutral());
    assert!(!state.can_undo());

    state.update(ToolbarMessage::Redo.into());
    state.update(ToolbarMessage::Redo.into());
    assert_eq!(state.current_photo().width(), 840);
    assert!(!state.can_redo());
}

#[test]
fn new_commit_discards_redo_branch() {
    let mut state = laid_out(50, 50);
    release_filter(&mut state, FilterKind::Contrast, 120.0);
    release_filter(&mut state, FilterKind::Contrast, 140.0);
    state.update(ToolbarMessage::Undo.into());
    assert!(state.can_redo());

    release_filter(&mut state, FilterKind::Saturate, 80.0);
    assert!(!state.can_redo());
    assert_eq!(state.history().len(), 3);
}

#[test]
fn undo_keeps_crop_session_open() {
    let mut state = laid_out(100, 100);
    release_filter(&mut state, FilterKind::Brightness, 120.0);
    state.update(SidebarMessage::ToggleCrop.into());
    state.update(ToolbarMessage::Undo.into());
    assert!(state.is_cropping());
    assert!(state.filters().is_neutral());
}

#[test]
fn reset_restores_baseline_and_commits() {
    let mut state = laid_out(60, 80);
    release_filter(&mut state, FilterKind::Saturate, 0.0);
    state.update(ToolbarMessage::ZoomIn.into());

    state.update(ToolbarMessage::Reset.into());

    assert!(state.filters().is_neutral());
    assert_abs_diff_eq!(state.viewport().zoom().value(), 600.0 / 80.0, epsilon = 1e-4);
    assert_eq!(state.history().len(), 3);
}

#[test]
fn zoom_buttons_are_ignored_while_cropping() {
    let mut state = laid_out(1000, 1200);
    state.update(SidebarMessage::ToggleCrop.into());
    let before = state.viewport();

    state.update(ToolbarMessage::ZoomIn.into());
    state.update(ToolbarMessage::Fit.into());
    assert_eq!(state.viewport(), before);

    state.update(
        CanvasMessage::Wheel {
            position: Point::new(400.0, 300.0),
            zoom_in: true,
        }
        .into(),
    );
    assert!(state.viewport().zoom().value() > before.zoom().value());
}

#[test]
fn filters_and_exports_are_ignored_while_cropping() {
    let mut state = laid_out(100, 100);
    state.update(SidebarMessage::ToggleCrop.into());
    release_filter(&mut state, FilterKind::Brightness, 180.0);
    assert!(state.filters().is_neutral());
    assert!(matches!(
        state.update(SidebarMessage::Download.into()),
        Event::None
    ));
    state.update(SidebarMessage::OpenSheet.into());
    assert!(!state.sheet().is_open());
}

#[test]
fn drag_pans_and_mouse_up_stops() {
    let mut state = laid_out(1000, 1200);
    let pan = state.viewport().pan();
    state.update(CanvasMessage::MouseDown(Point::new(100.0, 100.0)).into());
    assert!(state.is_dragging());
    state.update(CanvasMessage::MouseMove(Point::new(130.0, 90.0)).into());
    state.update(CanvasMessage::MouseUp.into());

    assert!(!state.is_dragging());
    assert_abs_diff_eq!(state.viewport().pan().x, pan.x + 30.0, epsilon = 1e-4);
    assert_abs_diff_eq!(state.viewport().pan().y, pan.y - 10.0, epsilon = 1e-4);
    // Panning alone never records history.
    assert_eq!(state.history().len(), 1);
}

#[test]
fn dragging_a_crop_handle_resizes_instead_of_panning() {
    let mut state = laid_out(1000, 1200);
    state.update(SidebarMessage::ToggleCrop.into());
    let pan = state.viewport().pan();
    let rect = state.crop().mode.session().expect("cropping").rect;

    state.update(CanvasMessage::MouseDown(Point::new(rect.right(), rect.bottom())).into());
    state.update(CanvasMessage::MouseMove(Point::new(rect.right() - 70.0, rect.bottom())).into());
    state.update(CanvasMessage::MouseUp.into());

    let resized = state.crop().mode.session().expect("cropping").rect;
    assert_abs_diff_eq!(resized.width, rect.width - 70.0, epsilon = 1e-3);
    assert_abs_diff_eq!(resized.x, rect.x, epsilon = 1e-3);
    assert_eq!(state.viewport().pan(), pan);
}

#[test]
fn escape_cancels_crop_without_history() {
    let mut state = laid_out(100, 100);
    state.update(SidebarMessage::ToggleCrop.into());
    state.handle_shortcut(Key::Named(keyboard::key::Named::Escape), Modifiers::empty());
    assert!(!state.is_cropping());
    assert_eq!(state.history().len(), 1);
}

#[test]
fn escape_closes_sheet_before_crop() {
    let mut state = laid_out(100, 100);
    state.update(SidebarMessage::OpenSheet.into());
    assert!(state.sheet().is_open());
    state.handle_shortcut(Key::Named(keyboard::key::Named::Escape), Modifiers::empty());
    assert!(!state.sheet().is_open());
}

#[test]
fn history_shortcuts_undo_and_redo() {
    let mut state = laid_out(100, 100);
    release_filter(&mut state, FilterKind::Contrast, 50.0);

    state.handle_shortcut(Key::Character("z"), Modifiers::COMMAND);
    assert!(state.filters().is_neutral());

    state.handle_shortcut(Key::Character("y"), Modifiers::COMMAND);
    assert_abs_diff_eq!(state.filters().contrast.value(), 50.0);

    state.handle_shortcut(Key::Character("z"), Modifiers::COMMAND);
    state.handle_shortcut(Key::Character("Z"), Modifiers::COMMAND | Modifiers::SHIFT);
    assert_abs_diff_eq!(state.filters().contrast.value(), 50.0);
}

#[test]
fn plain_z_is_not_a_shortcut() {
    let mut state = laid_out(100, 100);
    release_filter(&mut state, FilterKind::Contrast, 50.0);
    state.handle_shortcut(Key::Character("z"), Modifiers::empty());
    assert_abs_diff_eq!(state.filters().contrast.value(), 50.0);
}

#[test]
fn history_shortcuts_are_inert_while_sheet_is_open() {
    let mut state = laid_out(100, 100);
    release_filter(&mut state, FilterKind::Contrast, 50.0);
    state.update(SidebarMessage::OpenSheet.into());
    state.handle_shortcut(Key::Character("z"), Modifiers::COMMAND);
    assert_abs_diff_eq!(state.filters().contrast.value(), 50.0);
}

#[test]
fn enhance_sends_unfiltered_upload_and_blocks_editing() {
    let mut state = laid_out(64, 64);
    release_filter(&mut state, FilterKind::Brightness, 130.0);

    let request = start_enhance(&mut state);
    assert_eq!(request.image.mime, ImageMime::Png);
    assert!(!request.image.bytes.is_empty());
    assert_eq!(request.intensity, AiIntensity::Medium);
    assert!(state.is_busy());

    // Everything mutating is rejected while busy.
    release_filter(&mut state, FilterKind::Brightness, 10.0);
    state.update(ToolbarMessage::Undo.into());
    state.update(SidebarMessage::ToggleCrop.into());
    assert!(matches!(
        state.update(ToolbarMessage::ChangeImage.into()),
        Event::None
    ));
    assert!(matches!(state.update(SidebarMessage::Enhance.into()), Event::None));
    assert_abs_diff_eq!(state.filters().brightness.value(), 130.0);
    assert!(!state.is_cropping());
}

#[test]
fn enhance_success_replaces_photo_and_resets_filters() {
    let mut state = laid_out(64, 48);
    release_filter(&mut state, FilterKind::Brightness, 130.0);
    start_enhance(&mut state);

    let retouched = RgbaImage::from_pixel(64, 48, Rgba([200, 10, 10, 255]));
    let encoded = encode_for_upload(&retouched, ImageMime::Png).expect("encode");
    state.update(Message::EnhanceFinished(Ok(encoded)));

    assert!(!state.is_busy());
    assert!(state.filters().is_neutral());
    assert_eq!(state.current_photo().pixels().get_pixel(0, 0).0, [200, 10, 10, 255]);
    assert_eq!(state.original_photo().pixels().get_pixel(0, 0).0, [200, 10, 10, 255]);
    assert_eq!(state.history().len(), 3);
    assert!(state.error().is_none());
}

#[test]
fn enhance_failure_keeps_state_and_shows_error() {
    let mut state = laid_out(64, 48);
    start_enhance(&mut state);

    state.update(Message::EnhanceFinished(Err(AIError::EmptyResponse)));

    assert!(!state.is_busy());
    assert_eq!(state.history().len(), 1);
    let error = state.error().expect("error shown");
    assert_eq!(error.key, "error-ai-empty-response");

    state.update(Message::DismissError);
    assert!(state.error().is_none());
}

#[test]
fn undecodable_enhance_result_is_an_error() {
    let mut state = laid_out(64, 48);
    start_enhance(&mut state);
    let garbage = EncodedImage {
        bytes: vec![1, 2, 3],
        mime: ImageMime::Png,
    };
    state.update(Message::EnhanceFinished(Ok(garbage)));
    assert!(state.error().is_some());
    assert_eq!(state.current_photo().width(), 64);
}

#[test]
fn download_exports_current_photo() {
    let mut state = laid_out(30, 40);
    release_filter(&mut state, FilterKind::Saturate, 0.0);
    match state.update(SidebarMessage::Download.into()) {
        Event::ExportRequested {
            kind,
            photo,
            filters,
        } => {
            assert_eq!(kind, ExportKind::Photo);
            assert_eq!(photo.width(), 30);
            assert_abs_diff_eq!(filters.saturate.value(), 0.0);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn change_image_is_forwarded_when_idle() {
    let mut state = laid_out(30, 40);
    assert!(matches!(
        state.update(ToolbarMessage::ChangeImage.into()),
        Event::ChangeImage
    ));
}

#[test]
fn resizing_while_cropping_rebuilds_the_rectangle() {
    let mut state = laid_out(1000, 1200);
    state.update(SidebarMessage::ToggleCrop.into());
    state.update(SidebarMessage::RotationChanged(4.0).into());
    state.update(CanvasMessage::SurfaceResized(Size::new(400.0, 600.0)).into());

    let session = state.crop().mode.session().expect("cropping");
    assert_abs_diff_eq!(session.rect.width, 360.0, epsilon = 1e-3);
    assert_abs_diff_eq!(session.rotation.value(), 4.0);
}
