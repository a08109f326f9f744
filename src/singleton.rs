// Pattern 3: Singleton
// At most one instance per process, reachable only through `Singleton::instance`.

use std::sync::OnceLock;
use std::time::Instant;

use tracing::debug;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

#[derive(Debug)]
pub struct Singleton {
    // Private: nothing outside this module can build a `Singleton`.
    created_at: Instant,
}

impl Singleton {
    fn new() -> Self {
        debug!("constructing the singleton instance");
        Self {
            created_at: Instant::now(),
        }
    }

    /// Returns the process-wide instance, constructing it on first call.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(Singleton::new)
    }

    /// Reports whether the instance exists without creating it.
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
