// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for feedback that lives outside the editor panel.
//!
//! Successes auto-dismiss after 3s and warnings after 5s. Errors stay until
//! dismissed. At most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
