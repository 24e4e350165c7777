use crate::{
    config::myconfig::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::memory::MemoryStore,
};
use shared::{config::ConnectionPool, context::RequestContext};
use std::{fmt, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub request_timeout: Duration,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        Self {
            di_container: DependenciesInject::new(DependenciesInjectDeps::postgres(pool)),
            request_timeout: config.request_timeout,
        }
    }

    pub fn in_memory(store: &MemoryStore, request_timeout: Duration) -> Self {
        Self {
            di_container: DependenciesInject::new(DependenciesInjectDeps::in_memory(store)),
            request_timeout,
        }
    }

    /// Fresh context bounded by the configured request timeout.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::background().with_timeout(self.request_timeout)
    }
}
