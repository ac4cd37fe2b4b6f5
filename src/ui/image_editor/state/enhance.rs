// SPDX-License-Identifier: MPL-2.0
//! AI retouch request lifecycle.
//!
//! At most one request is in flight. While it is, the editor is busy and
//! every mutating action is rejected; there is no cancellation.

use crate::application::port::{AIError, AiIntensity, RetouchRequest};
use crate::domain::media::EncodedImage;
use crate::media::decode_photo;
use crate::media::image_transform::encode_for_upload;
use crate::ui::image_editor::{ErrorMessage, Event, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnhanceState {
    pub intensity: AiIntensity,
    busy: bool,
}

impl EnhanceState {
    #[must_use]
    pub fn new(intensity: AiIntensity) -> Self {
        Self {
            intensity,
            busy: false,
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

impl State {
    /// Encodes the unfiltered current image and asks the parent to send it.
    pub(crate) fn sidebar_enhance(&mut self) -> Event {
        if self.enhance.busy || self.is_cropping() {
            return Event::None;
        }

        match encode_for_upload(self.current.pixels(), self.mime) {
            Ok(image) => {
                self.enhance.busy = true;
                self.error = None;
                tracing::info!(
                    intensity = self.enhance.intensity.as_str(),
                    size = image.bytes.len(),
                    "AI retouch requested"
                );
                Event::EnhanceRequested(RetouchRequest {
                    image,
                    intensity: self.enhance.intensity,
                })
            }
            Err(err) => {
                tracing::warn!(%err, "could not encode photo for retouch");
                self.error = Some(ErrorMessage::from(&err));
                Event::None
            }
        }
    }

    /// Applies a retouch result, or shows why there is none.
    ///
    /// A failure leaves image, filters and history untouched.
    pub(crate) fn finish_enhance(&mut self, result: Result<EncodedImage, AIError>) {
        self.enhance.busy = false;

        let decoded = result
            .map_err(crate::error::Error::from)
            .and_then(|image| decode_photo(&image.bytes));

        match decoded {
            Ok(loaded) => {
                let photo = loaded.photo;
                if photo.width() != self.current.width() || photo.height() != self.current.height()
                {
                    tracing::warn!(
                        expected = ?(self.current.width(), self.current.height()),
                        received = ?(photo.width(), photo.height()),
                        "AI result size differs from the request"
                    );
                }
                tracing::info!("AI retouch applied");
                self.error = None;
                self.replace_photo(photo);
            }
            Err(err) => {
                tracing::warn!(%err, "AI retouch failed");
                self.error = Some(ErrorMessage::from(&err));
            }
        }
    }
}
