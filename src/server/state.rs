//! Server state

use std::sync::Arc;

use crate::authn::service::AuthService;
use crate::catalog::store::DeviceStore;
use crate::dispatch::orchestrator::Dispatcher;

/// Server state shared across handlers
pub struct ServerState {
    pub store: Arc<DeviceStore>,
    pub dispatcher: Arc<Dispatcher>,
    pub auth: Arc<AuthService>,
}

impl ServerState {
    pub fn new(
        store: Arc<DeviceStore>,
        dispatcher: Arc<Dispatcher>,
        auth: Arc<AuthService>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            auth,
        }
    }
}
