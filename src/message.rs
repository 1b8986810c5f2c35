use chrono::DateTime;
use chrono::Utc;

use crate::event::ReleaseContext;

/// Render the markdown comment body.
///
/// The timestamp is a parameter so tests can render deterministically;
/// callers pass `Utc::now()`.
pub fn render(
    heading: &str,
    context: &ReleaseContext,
    version: &str,
    note: Option<&str>,
    posted_at: DateTime<Utc>,
) -> String {
    // HTTP-date style, e.g. "Tue, 05 Sep 2023 12:34:56 GMT"
    let stamp = posted_at.format("%a, %d %b %Y %H:%M:%S GMT");

    let lead = match context {
        ReleaseContext::Canary => {
            format!("Your PR was successfully deployed on `{stamp}` with this version:")
        }
        ReleaseContext::Next => {
            format!("A new pre-release (next) version was published on `{stamp}`:")
        }
        ReleaseContext::Latest => {
            format!("A new stable version was released on `{stamp}`:")
        }
        ReleaseContext::Other(_) => {
            format!("A new version was released on `{stamp}`:")
        }
    };

    let mut message = format!("### {heading}\n\n{lead}\n\n```\n{version}\n```");
    if let Some(note) = note {
        message.push_str("\n\n");
        message.push_str(note);
    }
    message
}
