// SPDX-License-Identifier: MPL-2.0
//! Preview renderer.
//!
//! [`render`] is a pure function of a [`Scene`]: it rasterizes the filtered
//! photo at the current pan and zoom, then the crop overlay when cropping.
//! Draw order: background, photo, dimming layer, photo again clipped to the
//! crop rectangle, border, corner handles, guide bands, biometric lines.
//! Text labels are returned separately by [`labels`] and drawn by the canvas.

use crate::config::CROP_HANDLE_SIZE;
use crate::domain::editing::{Point, Rect, RotationDegrees, Size};
use crate::ui::image_editor::state::crop::HandlePosition;
use crate::ui::image_editor::state::guides::{
    band_rect, biometric_lines, center_line_x, GuideToggles, GuideZone,
};
use crate::ui::state::Viewport;
use tiny_skia::{
    Color, FillRule, FilterQuality, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    StrokeDash, Transform,
};

const BACKGROUND: [u8; 4] = [17, 24, 39, 255];
const DIM: [u8; 4] = [0, 0, 0, 153];
const ACCENT: [u8; 4] = [14, 165, 233, 255];
const BAND_EDGE: [u8; 4] = [255, 255, 255, 230];
const CENTER_LINE: [u8; 4] = [255, 255, 255, 178];
const BIOMETRIC: [u8; 4] = [255, 100, 100, 230];
const BORDER_WIDTH: f32 = 2.0;

/// Crop overlay inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropLayer {
    pub rect: Rect,
    pub rotation: RotationDegrees,
    pub guides: GuideToggles,
}

/// Everything the renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub surface: Size,
    /// Photo with filters already applied.
    pub photo: &'a Pixmap,
    pub viewport: Viewport,
    pub crop: Option<CropLayer>,
}

impl Scene<'_> {
    /// Photo-to-surface transform. Rotation turns the photo about its own
    /// center, in image space, before pan and zoom.
    #[must_use]
    pub fn photo_transform(&self) -> Transform {
        let zoom = self.viewport.zoom().value();
        let pan = self.viewport.pan();
        let base = Transform::from_row(zoom, 0.0, 0.0, zoom, pan.x, pan.y);
        match self.crop {
            Some(layer) if !layer.rotation.is_zero() => base.pre_concat(Transform::from_rotate_at(
                layer.rotation.value(),
                self.photo.width() as f32 / 2.0,
                self.photo.height() as f32 / 2.0,
            )),
            _ => base,
        }
    }
}

fn paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = true;
    paint
}

fn sk_rect(rect: &Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn line(from: Point, to: Point) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    builder.move_to(from.x, from.y);
    builder.line_to(to.x, to.y);
    builder.finish()
}

fn dashed(width: f32, on: f32) -> Stroke {
    Stroke {
        width,
        dash: StrokeDash::new(vec![on, on], 0.0),
        ..Stroke::default()
    }
}

/// Screen-space square drawn for a corner handle.
#[must_use]
pub fn handle_square(rect: &Rect, handle: HandlePosition) -> Rect {
    let anchor = handle.anchor(rect);
    let half = CROP_HANDLE_SIZE / 2.0;
    Rect::new(anchor.x - half, anchor.y - half, CROP_HANDLE_SIZE, CROP_HANDLE_SIZE)
}

/// Rasterizes the scene. Returns `None` for an empty surface.
///
/// The result is fully opaque, so its premultiplied bytes are also valid
/// straight RGBA.
#[must_use]
pub fn render(scene: &Scene<'_>) -> Option<Pixmap> {
    let width = scene.surface.width.round() as u32;
    let height = scene.surface.height.round() as u32;
    let mut target = Pixmap::new(width, height)?;
    let [r, g, b, a] = BACKGROUND;
    target.fill(Color::from_rgba8(r, g, b, a));

    let transform = scene.photo_transform();
    let photo_paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    target.draw_pixmap(0, 0, scene.photo.as_ref(), &photo_paint, transform, None);

    if let Some(layer) = scene.crop {
        draw_crop_layer(&mut target, scene, &layer, transform, &photo_paint);
    }
    Some(target)
}

fn draw_crop_layer(
    target: &mut Pixmap,
    scene: &Scene<'_>,
    layer: &CropLayer,
    transform: Transform,
    photo_paint: &PixmapPaint,
) {
    let identity = Transform::identity();
    let (width, height) = (target.width(), target.height());
    let rect = layer.rect;

    if let Some(full) = tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32) {
        target.fill_rect(full, &paint(DIM), identity, None);
    }

    let Some(crop) = sk_rect(&rect) else {
        return;
    };

    if let Some(mut cutout) = Mask::new(width, height) {
        cutout.fill_path(&PathBuilder::from_rect(crop), FillRule::Winding, false, identity);
        let [r, g, b, a] = BACKGROUND;
        target.fill_rect(crop, &paint([r, g, b, a]), identity, Some(&cutout));
        target.draw_pixmap(0, 0, scene.photo.as_ref(), photo_paint, transform, Some(&cutout));
    }

    let border = Stroke {
        width: BORDER_WIDTH,
        ..Stroke::default()
    };
    target.stroke_path(&PathBuilder::from_rect(crop), &paint(ACCENT), &border, identity, None);

    for handle in HandlePosition::ALL {
        if let Some(square) = sk_rect(&handle_square(&rect, handle)) {
            target.fill_rect(square, &paint(ACCENT), identity, None);
        }
    }

    if layer.guides.crop_guides {
        let edge = dashed(1.0, 4.0);
        for zone in GuideZone::ALL {
            let band = band_rect(&rect, zone);
            if let Some(area) = sk_rect(&band) {
                target.fill_rect(area, &paint(zone.fill_rgba()), identity, None);
            }
            for y in [band.y, band.bottom()] {
                if let Some(path) = line(Point::new(rect.x, y), Point::new(rect.right(), y)) {
                    target.stroke_path(&path, &paint(BAND_EDGE), &edge, identity, None);
                }
            }
        }
        let x = center_line_x(&rect);
        if let Some(path) = line(Point::new(x, rect.y), Point::new(x, rect.bottom())) {
            target.stroke_path(&path, &paint(CENTER_LINE), &edge, identity, None);
        }
    }

    if layer.guides.biometric_guides {
        let stroke = dashed(1.0, 5.0);
        let lines = biometric_lines(&rect);
        for y in [lines.top_of_hair, lines.chin] {
            if let Some(path) = line(Point::new(rect.x, y), Point::new(rect.right(), y)) {
                target.stroke_path(&path, &paint(BIOMETRIC), &stroke, identity, None);
            }
        }
    }
}

/// Horizontal anchoring of a label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    Left,
    Right,
}

/// A guide caption. `key` is an i18n message id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub key: &'static str,
    pub position: Point,
    pub anchor: LabelAnchor,
    pub color: [u8; 4],
}

/// Captions for the visible guides, in surface coordinates.
#[must_use]
pub fn labels(layer: &CropLayer) -> Vec<Label> {
    let rect = layer.rect;
    let mut labels = Vec::new();

    if layer.guides.crop_guides {
        labels.extend(GuideZone::ALL.into_iter().map(|zone| {
            let band = band_rect(&rect, zone);
            Label {
                key: zone.i18n_key(),
                position: Point::new(rect.x + 10.0, band.y + band.height / 2.0 + 4.0),
                anchor: LabelAnchor::Left,
                color: [255, 255, 255, 255],
            }
        }));
    }

    if layer.guides.biometric_guides {
        let lines = biometric_lines(&rect);
        let color = [255, 100, 100, 255];
        labels.push(Label {
            key: "guide-top-of-hair",
            position: Point::new(rect.right() - 10.0, lines.top_of_hair - 5.0),
            anchor: LabelAnchor::Right,
            color,
        });
        labels.push(Label {
            key: "guide-biometric-chin",
            position: Point::new(rect.right() - 10.0, lines.chin + 15.0),
            anchor: LabelAnchor::Right,
            color,
        });
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ZoomFactor;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).expect("pixmap");
        pixmap.fill(Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]));
        pixmap
    }

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).expect("in bounds");
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    fn no_guides() -> GuideToggles {
        GuideToggles {
            crop_guides: false,
            biometric_guides: false,
        }
    }

    #[test]
    fn idle_scene_draws_photo_at_pan_and_zoom() {
        let photo = solid(100, 100, [200, 0, 0, 255]);
        let scene = Scene {
            surface: Size::new(200.0, 100.0),
            photo: &photo,
            viewport: Viewport::new(ZoomFactor::new(0.5), Point::new(20.0, 10.0)),
            crop: None,
        };
        let out = render(&scene).expect("rendered");
        assert_eq!((out.width(), out.height()), (200, 100));
        assert_eq!(pixel(&out, 40, 30), [200, 0, 0, 255]);
        assert_eq!(pixel(&out, 100, 30), BACKGROUND);
        assert_eq!(pixel(&out, 40, 80), BACKGROUND);
    }

    #[test]
    fn empty_surface_renders_nothing() {
        let photo = solid(4, 4, [0, 0, 0, 255]);
        let scene = Scene {
            surface: Size::new(0.0, 10.0),
            photo: &photo,
            viewport: Viewport::default(),
            crop: None,
        };
        assert!(render(&scene).is_none());
    }

    #[test]
    fn crop_layer_dims_outside_and_keeps_cutout() {
        let photo = solid(200, 200, [250, 250, 250, 255]);
        let scene = Scene {
            surface: Size::new(200.0, 200.0),
            photo: &photo,
            viewport: Viewport::new(ZoomFactor::new(1.0), Point::default()),
            crop: Some(CropLayer {
                rect: Rect::new(50.0, 50.0, 100.0, 100.0),
                rotation: RotationDegrees::default(),
                guides: no_guides(),
            }),
        };
        let out = render(&scene).expect("rendered");
        assert_eq!(pixel(&out, 100, 100), [250, 250, 250, 255]);
        let outside = pixel(&out, 10, 10);
        assert!(outside[0] < 120, "outside is dimmed: {outside:?}");
        // Handle square at the bottom-right corner.
        assert_eq!(pixel(&out, 153, 153), ACCENT);
    }

    #[test]
    fn crop_guides_tint_the_eye_band() {
        let photo = solid(200, 200, [0, 0, 0, 255]);
        let mut scene = Scene {
            surface: Size::new(200.0, 200.0),
            photo: &photo,
            viewport: Viewport::new(ZoomFactor::new(1.0), Point::default()),
            crop: Some(CropLayer {
                rect: Rect::new(0.0, 0.0, 200.0, 200.0),
                rotation: RotationDegrees::default(),
                guides: no_guides(),
            }),
        };
        let plain = render(&scene).expect("rendered");
        scene.crop = scene.crop.map(|layer| CropLayer {
            guides: GuideToggles::default(),
            ..layer
        });
        let guided = render(&scene).expect("rendered");
        // Eyes band spans 70..100; sample away from the center line.
        assert_eq!(pixel(&plain, 40, 85), [0, 0, 0, 255]);
        let tinted = pixel(&guided, 40, 85);
        assert!(tinted[1] > 20 && tinted[0] < 5, "green tint: {tinted:?}");
    }

    #[test]
    fn rotation_turns_about_the_photo_center() {
        let photo = solid(100, 100, [0, 0, 255, 255]);
        let mut scene = Scene {
            surface: Size::new(200.0, 200.0),
            photo: &photo,
            viewport: Viewport::new(ZoomFactor::new(1.0), Point::new(50.0, 50.0)),
            crop: Some(CropLayer {
                rect: Rect::new(20.0, 20.0, 160.0, 160.0),
                rotation: RotationDegrees::new(10.0),
                guides: no_guides(),
            }),
        };
        let mut points = [tiny_skia::Point::from_xy(50.0, 50.0)];
        scene.photo_transform().map_points(&mut points);
        assert!((points[0].x - 100.0).abs() < 1e-3);
        assert!((points[0].y - 100.0).abs() < 1e-3);

        let rotated = render(&scene).expect("rendered");
        assert_eq!(pixel(&rotated, 100, 100), [0, 0, 255, 255]);
        // The photo's top-left corner swings away.
        assert_eq!(pixel(&rotated, 52, 51), BACKGROUND);

        scene.crop = scene.crop.map(|layer| CropLayer {
            rotation: RotationDegrees::default(),
            ..layer
        });
        let straight = render(&scene).expect("rendered");
        assert_eq!(pixel(&straight, 52, 51), [0, 0, 255, 255]);
    }

    #[test]
    fn labels_follow_guide_toggles() {
        let layer = CropLayer {
            rect: Rect::new(0.0, 0.0, 350.0, 450.0),
            rotation: RotationDegrees::default(),
            guides: GuideToggles {
                crop_guides: true,
                biometric_guides: true,
            },
        };
        let all = labels(&layer);
        assert_eq!(all.len(), 5);
        let hair = all
            .iter()
            .find(|label| label.key == "guide-top-of-hair")
            .expect("hair label");
        assert_eq!(hair.anchor, LabelAnchor::Right);
        assert!((hair.position.y - 25.0).abs() < 1e-3);

        let none = labels(&CropLayer {
            guides: no_guides(),
            ..layer
        });
        assert!(none.is_empty());
    }
}
