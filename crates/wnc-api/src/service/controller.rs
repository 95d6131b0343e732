// Controller-level actions.

use std::sync::Arc;

use tracing::warn;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::controller::{ReloadInput, ReloadRequest};
use crate::routes::controller as routes;

pub struct ControllerService {
    client: Arc<Client>,
}

impl ControllerService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Reload the controller. The connection usually drops before a
    /// response arrives; callers should expect a transport error.
    pub async fn reload(&self, reason: Option<&str>, force: bool) -> Result<(), Error> {
        warn!(host = self.client.host(), ?reason, force, "reloading controller");
        let body = ReloadRequest {
            input: ReloadInput {
                reason: reason.map(str::to_owned),
                force: force.then_some(true),
            },
        };
        helpers::rpc_void(&*self.client, routes::RPC_RELOAD, &body).await
    }
}
