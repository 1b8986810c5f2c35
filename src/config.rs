use serde::Deserialize;

use crate::event::ReleaseContext;
use crate::event::SemverBump;

/// Options supplied by the host when the plugin is loaded, typically as a
/// JSON object next to the plugin name in the host's config file. Every field
/// is optional; missing fields take defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifierOptions {
    /// Which lifecycle hook the notifier taps.
    pub hook: HookKind,
    /// Comment heading, also the comment-thread discriminator. Defaults to
    /// "Build Info" for the canary hook and "Release Info" for after-ship.
    pub context: Option<String>,
    /// Single note appended to every comment.
    pub note: Option<String>,
    /// Notes keyed by release context; takes precedence over `note`.
    pub notes: Option<ContextNotes>,
    /// Format used when synthesizing a canary version from a bump level.
    pub canary_version_format: CanaryVersionFormat,
    /// Log channel used when posting a comment fails.
    pub failure_channel: LogChannel,
}

impl NotifierOptions {
    /// The comment heading / thread discriminator.
    pub fn heading(&self) -> &str {
        self.context.as_deref().unwrap_or(match self.hook {
            HookKind::Canary => "Build Info",
            HookKind::AfterShip => "Release Info",
        })
    }

    /// Select the note for a release context: per-context note, then the
    /// per-context default, then the global note.
    pub fn note_for(&self, context: &ReleaseContext) -> Option<&str> {
        if let Some(notes) = &self.notes {
            let keyed = match context {
                ReleaseContext::Canary => notes.canary.as_deref(),
                ReleaseContext::Next => notes.next.as_deref(),
                ReleaseContext::Latest => notes.latest.as_deref(),
                ReleaseContext::Other(_) => None,
            };
            if let Some(note) = keyed.or(notes.default.as_deref()) {
                return Some(note);
            }
        }
        self.note.as_deref()
    }
}

/// Free-text notes keyed by release context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContextNotes {
    pub canary: Option<String>,
    pub next: Option<String>,
    pub latest: Option<String>,
    pub default: Option<String>,
}

/// The lifecycle hook a notifier instance registers against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    /// Canary-build-completed; comments on the originating PR.
    #[default]
    Canary,
    /// Release-shipped; comments without explicit PR targeting.
    AfterShip,
}

/// Format used to synthesize a canary version from `{bump, identifier}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanaryVersionFormat {
    /// `<bump>-canary.<identifier>`
    #[default]
    Short,
    /// `<bump>--canary.<identifier>.0`
    Suffixed,
}

impl CanaryVersionFormat {
    pub fn synthesize(&self, bump: SemverBump, identifier: &str) -> String {
        match self {
            Self::Short => format!("{}-canary.{}", bump, identifier),
            Self::Suffixed => format!("{}--canary.{}.0", bump, identifier),
        }
    }
}

/// Which logger channel receives a failed comment post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogChannel {
    /// Plain log channel.
    #[default]
    Log,
    /// Verbose-info channel.
    Verbose,
}
