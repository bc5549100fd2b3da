//! User-visible message dialogs.

/// Shows a message dialog to the user.
///
/// Fire-and-forget: showing a dialog never fails from the caller's point
/// of view and never blocks.
pub trait DialogPort: Send + Sync {
    fn message(&self, text: &str, title: &str);
}
