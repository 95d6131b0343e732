// RFID tag tracking.

use std::sync::Arc;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::rfid::{
    RfidData, RfidDataResponse, RfidOperResponse, RfidRadioData, RfidRadioDataResponse,
};
use crate::restconf::{build_query_composite_url, build_query_url};
use crate::routes::rfid as routes;
use crate::validation::normalize_mac;

pub struct RfidService {
    client: Arc<Client>,
}

impl RfidService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn oper(&self) -> Result<RfidOperResponse, Error> {
        helpers::get(&*self.client, routes::OPER).await
    }

    pub async fn tags(&self) -> Result<RfidDataResponse, Error> {
        helpers::get(&*self.client, routes::RFID_DATA).await
    }

    pub async fn tag_by_mac(&self, mac: &str) -> Result<RfidData, Error> {
        let mac = normalize_mac(mac)?;
        let path = build_query_url(routes::RFID_DATA, &mac);
        let resp: RfidDataResponse = helpers::get(&*self.client, &path).await?;
        resp.tags.into_iter().next().ok_or(Error::ResourceNotFound)
    }

    /// How one AP radio hears one tag (list keyed by tag MAC, AP MAC, slot).
    pub async fn radio_data(
        &self,
        tag_mac: &str,
        ap_mac: &str,
        slot: u8,
    ) -> Result<RfidRadioData, Error> {
        let tag_mac = normalize_mac(tag_mac)?;
        let ap_mac = normalize_mac(ap_mac)?;
        let slot = slot.to_string();
        let path = build_query_composite_url(routes::RFID_RADIO_DATA, &[&tag_mac, &ap_mac, &slot]);
        let resp: RfidRadioDataResponse = helpers::get(&*self.client, &path).await?;
        resp.radios.into_iter().next().ok_or(Error::ResourceNotFound)
    }
}
