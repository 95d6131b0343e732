// Mobility group state.

use std::sync::Arc;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::mobility::{ApPeerListResponse, MmGlobalDataResponse, MobilityOperResponse};
use crate::routes::mobility as routes;

pub struct MobilityService {
    client: Arc<Client>,
}

impl MobilityService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn oper(&self) -> Result<MobilityOperResponse, Error> {
        helpers::get(&*self.client, routes::OPER).await
    }

    pub async fn global_data(&self) -> Result<MmGlobalDataResponse, Error> {
        helpers::get(&*self.client, routes::GLOBAL_DATA).await
    }

    pub async fn peers(&self) -> Result<ApPeerListResponse, Error> {
        helpers::get(&*self.client, routes::PEER_LIST).await
    }
}
