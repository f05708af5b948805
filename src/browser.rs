//! Best-effort launch of the host's default browser.

#![expect(
    clippy::print_stdout,
    reason = "intentional console output for launcher status"
)]

/// Open `url` in the default browser.
///
/// This is a convenience side action: on a headless host (or any other
/// launch failure) it logs a warning advising manual navigation and returns
/// normally. It must never prevent the server from coming up.
pub fn open_url(url: &str) {
    match open::that(url) {
        Ok(()) => println!("✅ Browser opened automatically!"),
        Err(err) => {
            tracing::warn!(%err, url, "could not launch a browser");
            println!("⚠️  Please open the URL manually in your browser");
        }
    }
}
