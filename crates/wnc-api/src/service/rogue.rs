// Rogue detection.

use std::sync::Arc;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::rogue::{
    RogueClientDataResponse, RogueData, RogueDataResponse, RogueOperResponse, RogueStatsResponse,
};
use crate::restconf::build_query_url;
use crate::routes::rogue as routes;
use crate::validation::normalize_mac;

pub struct RogueService {
    client: Arc<Client>,
}

impl RogueService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn oper(&self) -> Result<RogueOperResponse, Error> {
        helpers::get(&*self.client, routes::OPER).await
    }

    pub async fn stats(&self) -> Result<RogueStatsResponse, Error> {
        helpers::get(&*self.client, routes::STATS).await
    }

    pub async fn rogues(&self) -> Result<RogueDataResponse, Error> {
        helpers::get(&*self.client, routes::DATA).await
    }

    pub async fn rogue_by_mac(&self, mac: &str) -> Result<RogueData, Error> {
        let mac = normalize_mac(mac)?;
        let path = build_query_url(routes::DATA, &mac);
        let resp: RogueDataResponse = helpers::get(&*self.client, &path).await?;
        resp.rogues.into_iter().next().ok_or(Error::ResourceNotFound)
    }

    pub async fn rogue_clients(&self) -> Result<RogueClientDataResponse, Error> {
        helpers::get(&*self.client, routes::CLIENT_DATA).await
    }
}
