use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use crate::config::HookKind;
use crate::config::LogChannel;
use crate::config::NotifierOptions;
use crate::event::CanaryEvent;
use crate::event::ReleaseContext;
use crate::event::ReleaseEvent;
use crate::host::Host;
use crate::host::comment::CommentRequest;
use crate::host::hooks::Hooks;
use crate::message;

/// Stable identifier the notifier registers under.
pub const PLUGIN_NAME: &str = "release-comment";

// -----------------------------------------------------------------------------
// Plugin trait

/// A release-automation plugin.
pub trait Plugin {
    fn name(&self) -> &'static str;

    /// Register callbacks against the host's lifecycle hooks. Applying a
    /// plugin twice registers two independent callbacks.
    fn apply(self: Arc<Self>, hooks: &mut Hooks);
}

// -----------------------------------------------------------------------------
// ReleaseCommentNotifier

/// Posts a markdown comment describing the new version on the originating
/// pull request when a canary build or a release ships.
///
/// Best-effort by contract: every failure path is logged and swallowed so
/// the release pipeline never fails because a comment could not be posted.
pub struct ReleaseCommentNotifier {
    options: NotifierOptions,
}

impl ReleaseCommentNotifier {
    pub fn new(options: NotifierOptions) -> Self {
        Self { options }
    }

    /// Build the notifier from the host's JSON plugin options.
    pub fn from_value(options: serde_json::Value) -> Result<Self> {
        Ok(Self::new(serde_json::from_value(options)?))
    }

    async fn on_canary(&self, host: &Host, event: CanaryEvent) {
        let Some(version) = event.version(self.options.canary_version_format) else {
            host.logger
                .verbose("No canary version produced, skipping comment");
            return;
        };

        let Some(pr_number) = host.pr_number.as_deref() else {
            host.logger
                .verbose("No PR_NUMBER environment variable found, skipping comment");
            return;
        };
        let pr = match pr_number.parse::<u64>() {
            Ok(pr) => pr,
            Err(_) => {
                host.logger.verbose(&format!(
                    "PR_NUMBER is not a number ({pr_number}), skipping comment"
                ));
                return;
            }
        };

        let Some(comments) = &host.comments else {
            host.logger
                .verbose("Not running in a pull request, skipping comment");
            return;
        };

        let message = message::render(
            self.options.heading(),
            &ReleaseContext::Canary,
            &version,
            self.options.note_for(&ReleaseContext::Canary),
            Utc::now(),
        );

        host.logger.verbose(&format!(
            "Posting comment to PR #{pr} with version {version}"
        ));

        let request = CommentRequest {
            message,
            context: self.options.heading().to_string(),
            pr: Some(pr),
        };
        match comments.comment(request).await {
            Ok(()) => host
                .logger
                .log(&format!("Successfully posted version comment to PR #{pr}")),
            Err(error) => self.log_post_failure(host, &error),
        }
    }

    async fn on_after_ship(&self, host: &Host, event: ReleaseEvent) {
        let Some(version) = event.version() else {
            host.logger.verbose("No version produced, skipping comment");
            return;
        };

        let Some(comments) = &host.comments else {
            host.logger
                .verbose("Not running in a pull request, skipping comment");
            return;
        };

        let message = message::render(
            self.options.heading(),
            &event.context,
            version,
            self.options.note_for(&event.context),
            Utc::now(),
        );

        let request = CommentRequest {
            message,
            context: self.options.heading().to_string(),
            pr: None,
        };
        match comments.comment(request).await {
            Ok(()) => host.logger.log("Posted release comment"),
            Err(error) => self.log_post_failure(host, &error),
        }
    }

    fn log_post_failure(&self, host: &Host, error: &anyhow::Error) {
        match self.options.failure_channel {
            LogChannel::Log => {
                host.logger.log("Failed to post comment");
                host.logger.log(&format!("{error:#}"));
            }
            LogChannel::Verbose => {
                host.logger.verbose("Failed to post comment");
                host.logger.verbose(&format!("{error:#}"));
            }
        }
    }
}

impl Plugin for ReleaseCommentNotifier {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn apply(self: Arc<Self>, hooks: &mut Hooks) {
        match self.options.hook {
            HookKind::Canary => {
                hooks.canary.tap(PLUGIN_NAME, move |host, event| {
                    let plugin = Arc::clone(&self);
                    Box::pin(async move { plugin.on_canary(&host, event).await })
                });
            }
            HookKind::AfterShip => {
                hooks.after_ship.tap(PLUGIN_NAME, move |host, event| {
                    let plugin = Arc::clone(&self);
                    Box::pin(async move { plugin.on_after_ship(&host, event).await })
                });
            }
        }
    }
}
