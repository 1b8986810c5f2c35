use std::fmt::Display;

use crate::config::CanaryVersionFormat;

// -----------------------------------------------------------------------------
// SemverBump

/// Semver level a canary build bumps from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemverBump {
    Major,
    Minor,
    Patch,
}

impl Display for SemverBump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => f.write_str("major"),
            Self::Minor => f.write_str("minor"),
            Self::Patch => f.write_str("patch"),
        }
    }
}

// -----------------------------------------------------------------------------
// CanaryEvent

/// Payload delivered by the canary-build-completed hook.
///
/// Earlier plugins in the host's chain may already have produced the full
/// version string; otherwise only the planned bump and canary identifier are
/// known and the version is synthesized here.
#[derive(Debug, Clone)]
pub enum CanaryEvent {
    /// A previous plugin produced the version (possibly absent or empty).
    Released { new_version: Option<String> },
    /// No version yet; synthesize one from the bump level and identifier.
    Planned {
        bump: SemverBump,
        canary_identifier: String,
    },
}

impl CanaryEvent {
    /// Derive the version string to post, or `None` when the event carries
    /// nothing usable. An empty string counts as absent.
    pub fn version(&self, format: CanaryVersionFormat) -> Option<String> {
        match self {
            Self::Released { new_version } => new_version
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_owned),
            Self::Planned {
                bump,
                canary_identifier,
            } => Some(format.synthesize(*bump, canary_identifier)),
        }
    }
}

// -----------------------------------------------------------------------------
// ReleaseEvent

/// Payload delivered by the release-shipped hook.
#[derive(Debug, Clone)]
pub struct ReleaseEvent {
    pub new_version: Option<String>,
    pub context: ReleaseContext,
}

impl ReleaseEvent {
    /// Derive the version string to post. An empty string counts as absent.
    pub fn version(&self) -> Option<&str> {
        self.new_version.as_deref().filter(|v| !v.is_empty())
    }
}

/// Classifies a release as canary, next (pre-release), latest (stable), or
/// anything else the host invents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseContext {
    Canary,
    Next,
    Latest,
    Other(String),
}

impl From<&str> for ReleaseContext {
    fn from(s: &str) -> Self {
        match s {
            "canary" => Self::Canary,
            "next" => Self::Next,
            "latest" => Self::Latest,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for ReleaseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canary => f.write_str("canary"),
            Self::Next => f.write_str("next"),
            Self::Latest => f.write_str("latest"),
            Self::Other(s) => f.write_str(s),
        }
    }
}
