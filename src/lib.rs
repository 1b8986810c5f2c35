pub mod config;
pub mod event;
pub mod host;
pub mod message;

mod plugin;

// Re-export the plugin surface from modules
pub use plugin::PLUGIN_NAME;
pub use plugin::Plugin;
pub use plugin::ReleaseCommentNotifier;
