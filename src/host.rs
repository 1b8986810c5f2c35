//! The slice of the release host's API this plugin is compiled against.
//!
//! The host orchestrator itself (plugin loading, PR discovery, the comment
//! transport) lives elsewhere; this module defines the seams it hands to
//! plugins:
//!
//! - [`comment`]: the optional comment-posting capability
//! - [`hooks`]: named-tap lifecycle hook registry
//! - [`logger`]: the two-channel logging surface
//!
//! Each seam is trait-based so tests can drive the plugin without a real
//! host.

pub mod comment;
pub mod hooks;
pub mod logger;

use std::sync::Arc;

use self::comment::CommentPoster;
use self::logger::Logger;

/// Environment variable carrying the originating pull request number.
pub const PR_NUMBER_VAR: &str = "PR_NUMBER";

/// Host services passed to every hook callback.
pub struct Host {
    pub logger: Arc<dyn Logger>,
    /// Absent when the host is not running in a pull-request context.
    pub comments: Option<Arc<dyn CommentPoster>>,
    /// Raw PR identifier, usually taken from the environment.
    pub pr_number: Option<String>,
}

impl Host {
    pub fn new(
        logger: Arc<dyn Logger>,
        comments: Option<Arc<dyn CommentPoster>>,
        pr_number: Option<String>,
    ) -> Self {
        Self {
            logger,
            comments,
            pr_number,
        }
    }

    /// Build a host that resolves the PR number from `PR_NUMBER`.
    pub fn from_env(logger: Arc<dyn Logger>, comments: Option<Arc<dyn CommentPoster>>) -> Self {
        Self::new(logger, comments, std::env::var(PR_NUMBER_VAR).ok())
    }
}
