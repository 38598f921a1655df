/// Mirrors an acknowledgement toast to the desktop.
///
/// Returns an error message to surface in the UI when the notification daemon
/// rejects it.
#[cfg(feature = "desktop-notify")]
pub fn send_desktop(message: &str) -> Option<String> {
    use notify_rust::{Notification, Timeout, Urgency};

    match Notification::new()
        .summary("Kursverwaltung")
        .body(message)
        .icon("dialog-information")
        .urgency(Urgency::Normal)
        .timeout(Timeout::Milliseconds(5000))
        .show()
    {
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("desktop notification failed: {e}");
            Some(format!("Desktop notification failed: {e}"))
        }
    }
}

#[cfg(not(feature = "desktop-notify"))]
pub fn send_desktop(message: &str) -> Option<String> {
    tracing::debug!("desktop notifications disabled at build time: {message}");
    None
}
