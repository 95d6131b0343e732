// WLAN profile, policy profile, and policy tag configuration.

use std::sync::Arc;

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::wlan::{
    PolicyListEntriesResponse, WlanCfgEntriesResponse, WlanCfgEntry, WlanCfgEntryResponse,
    WlanCfgResponse, WlanPoliciesResponse,
};
use crate::restconf::build_query_url;
use crate::routes::wlan as routes;
use crate::validation::ensure_not_empty;

pub struct WlanService {
    client: Arc<Client>,
}

impl WlanService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn cfg(&self) -> Result<WlanCfgResponse, Error> {
        helpers::get(&*self.client, routes::CFG).await
    }

    pub async fn entries(&self) -> Result<WlanCfgEntriesResponse, Error> {
        helpers::get(&*self.client, routes::ENTRIES).await
    }

    /// Look up one WLAN profile by name.
    pub async fn entry_by_name(&self, profile_name: &str) -> Result<WlanCfgEntry, Error> {
        ensure_not_empty("profile name", profile_name)?;
        let path = build_query_url(routes::ENTRY, profile_name);
        let resp: WlanCfgEntryResponse = helpers::get(&*self.client, &path).await?;
        resp.entries.into_iter().next().ok_or(Error::ResourceNotFound)
    }

    pub async fn policy_profiles(&self) -> Result<WlanPoliciesResponse, Error> {
        helpers::get(&*self.client, routes::POLICIES).await
    }

    pub async fn policy_tags(&self) -> Result<PolicyListEntriesResponse, Error> {
        helpers::get(&*self.client, routes::POLICY_LIST_ENTRIES).await
    }

    /// Create a WLAN profile. Fails with 409 if the name already exists.
    pub async fn create_entry(&self, entry: WlanCfgEntry) -> Result<(), Error> {
        ensure_not_empty("profile name", &entry.profile_name)?;
        debug!(profile = %entry.profile_name, "creating WLAN");
        let body = WlanCfgEntryResponse {
            entries: vec![entry],
        };
        helpers::post_void(&*self.client, routes::ENTRIES, &body).await
    }

    /// Replace a WLAN profile.
    pub async fn update_entry(&self, entry: WlanCfgEntry) -> Result<(), Error> {
        ensure_not_empty("profile name", &entry.profile_name)?;
        let path = build_query_url(routes::ENTRY, &entry.profile_name);
        debug!(profile = %entry.profile_name, "replacing WLAN");
        let body = WlanCfgEntryResponse {
            entries: vec![entry],
        };
        helpers::put_void(&*self.client, &path, &body).await
    }

    pub async fn delete_entry(&self, profile_name: &str) -> Result<(), Error> {
        ensure_not_empty("profile name", profile_name)?;
        debug!(profile = profile_name, "deleting WLAN");
        helpers::delete(&*self.client, &build_query_url(routes::ENTRY, profile_name)).await
    }
}
