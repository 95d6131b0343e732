// RF tags and profiles.

use std::sync::Arc;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::rf::{RfCfgResponse, RfProfilesResponse, RfTagsResponse};
use crate::routes::rf as routes;

pub struct RfService {
    client: Arc<Client>,
}

impl RfService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn cfg(&self) -> Result<RfCfgResponse, Error> {
        helpers::get(&*self.client, routes::CFG).await
    }

    pub async fn rf_tags(&self) -> Result<RfTagsResponse, Error> {
        helpers::get(&*self.client, routes::RF_TAGS).await
    }

    pub async fn rf_profiles(&self) -> Result<RfProfilesResponse, Error> {
        helpers::get(&*self.client, routes::RF_PROFILES).await
    }
}
