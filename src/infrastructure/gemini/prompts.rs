// SPDX-License-Identifier: MPL-2.0
//! Instruction texts sent alongside the photo.

use crate::application::port::AiIntensity;

const RETOUCH_BASE: &str = "You are a professional photo retoucher specializing in official identity documents. \
Your task is to enhance this photograph to meet international standards for clarity and quality. \
The final image must look natural.

Key Requirements:
- Adjust lighting to be even across the face, removing harsh shadows.
- Correct the color balance for natural and accurate skin tones.
- Enhance brightness and contrast for overall clarity, without overexposing highlights or losing detail in shadows.
- The subject's facial features must remain clear and their facial structure unaltered.
- CRITICAL: Do NOT crop the image. The output dimensions MUST EXACTLY match the input dimensions.
- CRITICAL: Do NOT replace the background. You can subtly clean up minor smudges or shadows in the background, but the original background must be preserved.
- Do not change the subject's hair style or eye color.
- Ensure the final image is sharp and in focus.";

const RETOUCH_LIGHT: &str = "Apply subtle adjustments:
- Gently balance the colors to achieve natural-looking skin tones.
- Make minor corrections to brightness and contrast to improve overall clarity.
- Avoid any noticeable skin smoothing or blemish removal.";

const RETOUCH_MEDIUM: &str = "Apply standard professional retouching:
- Correct color balance and ensure skin tones are accurate and natural.
- Optimize brightness and contrast for a clear, well-lit portrait.
- Carefully remove minor, temporary blemishes (e.g., pimples) while preserving permanent features like moles or scars.
- The result should be a clean, professional-looking official photo.";

const RETOUCH_STRONG: &str = "Apply advanced professional retouching for a flawless but natural result:
- Perform precise color correction for perfect skin tones and white balance.
- Masterfully balance lighting, highlights, and shadows to create a perfectly lit portrait.
- Delicately smooth skin texture to reduce minor imperfections and wrinkles, ensuring the result looks completely natural and not airbrushed.
- Remove distracting stray hairs if possible without altering the main hairstyle.
- The goal is the highest quality official photo, ready for printing.";

pub const LANDMARKS: &str = "Analyze the provided image. Your task is to identify the location of key facial features. \
Respond with a JSON object containing the pixel coordinates for the very top of the head (including hair) and the bottom of the chin. \
The origin (0,0) is the top-left corner of the image. The JSON object must match the provided schema.";

/// Full retouch instruction for `intensity`.
#[must_use]
pub fn retouch(intensity: AiIntensity) -> String {
    let extra = match intensity {
        AiIntensity::Light => RETOUCH_LIGHT,
        AiIntensity::Medium => RETOUCH_MEDIUM,
        AiIntensity::Strong => RETOUCH_STRONG,
    };
    format!("{RETOUCH_BASE}\n\n{extra}")
}
