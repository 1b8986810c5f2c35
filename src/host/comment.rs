use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

// -----------------------------------------------------------------------------
// CommentRequest

/// A request to post a comment on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRequest {
    /// Rendered markdown body.
    pub message: String,
    /// Thread discriminator: the host replaces an earlier comment posted
    /// with the same context instead of adding a new one.
    pub context: String,
    /// Explicit PR target; `None` lets the host resolve the PR itself.
    pub pr: Option<u64>,
}

// -----------------------------------------------------------------------------
// CommentPoster trait

/// The host's comment-posting capability.
///
/// Best-effort by contract: callers must treat a rejection as a logged,
/// non-fatal event. The transport (source-hosting API, CLI, ...) is the
/// host's concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommentPoster: Send + Sync {
    async fn comment(&self, request: CommentRequest) -> Result<()>;
}
