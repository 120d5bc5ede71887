//! Login redirection

use tracing::warn;

/// Receives client-side navigation requests
///
/// The response pipeline calls this when the session is no longer valid.
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn redirect(&self, route: &str) {
        self(route)
    }
}

/// Navigator for headless use: records the redirect in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, route: &str) {
        warn!("Session expired, sign in again (redirect to {})", route);
    }
}
