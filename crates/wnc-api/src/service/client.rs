// Wireless client endpoints.

use std::sync::Arc;

use crate::client::Client;
use crate::error::Error;
use crate::model::client::{
    ClientOperResponse, CommonOperData, CommonOperDataResponse, Dot11OperDataResponse,
    SisfDbMacResponse, TrafficStatsResponse,
};
use crate::restconf::build_query_url;
use crate::routes::client as routes;
use crate::validation::normalize_mac;
use crate::{helpers, quirks};

pub struct ClientService {
    client: Arc<Client>,
}

impl ClientService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn oper(&self) -> Result<ClientOperResponse, Error> {
        helpers::get(&*self.client, routes::OPER).await
    }

    pub async fn common(&self) -> Result<CommonOperDataResponse, Error> {
        helpers::get(&*self.client, routes::COMMON_OPER_DATA).await
    }

    /// Association summary for one client MAC.
    pub async fn common_by_mac(&self, mac: &str) -> Result<CommonOperData, Error> {
        let mac = normalize_mac(mac)?;
        let path = build_query_url(routes::COMMON_OPER_DATA, &mac);
        let resp: CommonOperDataResponse = helpers::get(&*self.client, &path).await?;
        resp.clients.into_iter().next().ok_or(Error::ResourceNotFound)
    }

    pub async fn dot11(&self) -> Result<Dot11OperDataResponse, Error> {
        helpers::get(&*self.client, routes::DOT11_OPER_DATA).await
    }

    pub async fn traffic_stats(&self) -> Result<TrafficStatsResponse, Error> {
        helpers::get(&*self.client, routes::TRAFFIC_STATS).await
    }

    /// Device-tracking IP bindings. Empty on firmware that fails the
    /// empty-table read.
    pub async fn sisf_db(&self) -> Result<SisfDbMacResponse, Error> {
        quirks::tolerate_empty_table(
            routes::SISF_DB_MAC,
            helpers::get(&*self.client, routes::SISF_DB_MAC).await,
        )
    }
}
