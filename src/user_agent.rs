//! User-Agent string sent to the image service.

/// Project URL carried in the User-Agent comment.
const PROJECT_UA_URL: &str = "https://picsum.photos";

/// Default User-Agent for image requests (identifies the tool and version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("picsum/{version} (+{PROJECT_UA_URL})")
}
