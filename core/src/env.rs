use std::collections::HashMap;
use std::fmt::Debug;

/// Permits parameterizing environment lookups, so configuration can be
/// loaded from the process or from a fixed map in tests.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable, returns `None` if it is unset or not
    /// valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the current process.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Implements Env over a fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// Variables visible through this env.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}
