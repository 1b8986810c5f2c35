/// Host logging surface: a verbose-info channel and a plain log channel.
pub trait Logger: Send + Sync {
    /// Verbose-info channel, shown only when the host runs verbosely.
    fn verbose(&self, message: &str);

    /// Plain log channel, always shown.
    fn log(&self, message: &str);
}

/// Logger backed by `tracing`: verbose maps to debug, log to info.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn verbose(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}
