use std::sync::Arc;

use futures_util::future::BoxFuture;

use super::Host;
use crate::event::CanaryEvent;
use crate::event::ReleaseEvent;

type Callback<P> = Box<dyn Fn(Arc<Host>, P) -> BoxFuture<'static, ()> + Send + Sync>;

struct Tap<P> {
    name: String,
    callback: Callback<P>,
}

// -----------------------------------------------------------------------------
// Hook

/// A named-tap extension point on the host.
///
/// Plugins register callbacks with [`Hook::tap`]; the host invokes them in
/// registration order with [`Hook::call`]. Tapping twice registers two
/// independent callbacks.
pub struct Hook<P> {
    taps: Vec<Tap<P>>,
}

impl<P: Clone> Hook<P> {
    /// Register a callback under a plugin name.
    pub fn tap<F>(&mut self, name: &str, callback: F)
    where
        F: Fn(Arc<Host>, P) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        self.taps.push(Tap {
            name: name.to_string(),
            callback: Box::new(callback),
        });
    }

    /// Invoke every registered callback in order, awaiting each.
    ///
    /// Callbacks cannot fail; anything that goes wrong inside one is its own
    /// responsibility to log.
    pub async fn call(&self, host: &Arc<Host>, payload: P) {
        for tap in &self.taps {
            (tap.callback)(Arc::clone(host), payload.clone()).await;
        }
    }

    /// Registered plugin names, in registration order.
    pub fn tap_names(&self) -> Vec<&str> {
        self.taps.iter().map(|tap| tap.name.as_str()).collect()
    }
}

impl<P> Default for Hook<P> {
    fn default() -> Self {
        Self { taps: Vec::new() }
    }
}

// -----------------------------------------------------------------------------
// Hooks

/// The release-lifecycle hooks the host exposes to plugins.
#[derive(Default)]
pub struct Hooks {
    /// Fires after a canary build completes.
    pub canary: Hook<CanaryEvent>,
    /// Fires after a release ships.
    pub after_ship: Hook<ReleaseEvent>,
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::host::logger::TracingLogger;

    fn test_host() -> Arc<Host> {
        Arc::new(Host::new(Arc::new(TracingLogger), None, None))
    }

    #[test]
    fn test_tap_records_names_in_order() {
        let mut hook: Hook<CanaryEvent> = Hook::default();
        hook.tap("first", |_, _| Box::pin(async {}));
        hook.tap("second", |_, _| Box::pin(async {}));
        assert_eq!(hook.tap_names(), vec!["first", "second"]);
    }

    #[test]
    fn test_tapping_twice_registers_two_callbacks() {
        let mut hook: Hook<CanaryEvent> = Hook::default();
        hook.tap("plugin", |_, _| Box::pin(async {}));
        hook.tap("plugin", |_, _| Box::pin(async {}));
        assert_eq!(hook.tap_names(), vec!["plugin", "plugin"]);
    }

    #[tokio::test]
    async fn test_call_invokes_every_tap() {
        let counter = Arc::new(AtomicUsize::new(0));

        let mut hook: Hook<CanaryEvent> = Hook::default();
        for _ in 0..2 {
            let counter = Arc::clone(&counter);
            hook.tap("counting", move |_, _| {
                let counter = Arc::clone(&counter);
                Box::pin(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
            });
        }

        hook.call(&test_host(), CanaryEvent::Released { new_version: None })
            .await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_call_with_no_taps_is_a_no_op() {
        let hook: Hook<ReleaseEvent> = Hook::default();
        hook.call(
            &test_host(),
            ReleaseEvent {
                new_version: Some("1.0.0".to_string()),
                context: crate::event::ReleaseContext::Latest,
            },
        )
        .await;
    }
}
