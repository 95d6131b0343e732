// Access point endpoints: operational state, tag configuration, and the
// admin-state / reset RPCs.

use std::sync::Arc;

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::model::ap::{
    ApCfgResponse, ApNameMacMap, ApNameMacMapResponse, ApOperResponse, ApResetInput,
    ApRpcRequest, ApTag, ApTagList, ApTagsResponse, CapwapData, CapwapDataResponse,
    CdpCacheResponse, LldpNeighborResponse, RadioOperDataResponse, SetApAdminStateInput,
    SetApSlotAdminStateInput,
};
use crate::restconf::build_query_url;
use crate::routes::ap as routes;
use crate::validation::{ensure_not_empty, normalize_mac};
use crate::{helpers, quirks};

pub struct ApService {
    client: Arc<Client>,
}

impl ApService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ── Operational ──────────────────────────────────────────────────

    pub async fn oper(&self) -> Result<ApOperResponse, Error> {
        helpers::get(&*self.client, routes::OPER).await
    }

    pub async fn capwap_data(&self) -> Result<CapwapDataResponse, Error> {
        helpers::get(&*self.client, routes::CAPWAP_DATA).await
    }

    /// CAPWAP state of the AP with radio MAC `mac`.
    pub async fn capwap_by_mac(&self, mac: &str) -> Result<CapwapData, Error> {
        let mac = normalize_mac(mac)?;
        let path = build_query_url(routes::CAPWAP_DATA, &mac);
        let resp: CapwapDataResponse = helpers::get(&*self.client, &path).await?;
        resp.capwap_data
            .into_iter()
            .next()
            .ok_or(Error::ResourceNotFound)
    }

    pub async fn name_mac_map(&self) -> Result<ApNameMacMapResponse, Error> {
        helpers::get(&*self.client, routes::NAME_MAC_MAP).await
    }

    /// Resolve an AP name to its MAC mapping.
    ///
    /// Returns `Error::ResourceNotFound` when no AP has that name.
    pub async fn get_by_name(&self, name: &str) -> Result<ApNameMacMap, Error> {
        ensure_not_empty("name", name)?;
        let path = build_query_url(routes::NAME_MAC_MAP, name);
        let resp: ApNameMacMapResponse = helpers::get(&*self.client, &path).await?;
        resp.entries
            .into_iter()
            .find(|e| e.wtp_name == name)
            .ok_or(Error::ResourceNotFound)
    }

    pub async fn radio_status(&self) -> Result<RadioOperDataResponse, Error> {
        helpers::get(&*self.client, routes::RADIO_OPER_DATA).await
    }

    /// LLDP neighbours. Empty on firmware that fails the empty-table read.
    pub async fn lldp_neighbors(&self) -> Result<LldpNeighborResponse, Error> {
        quirks::tolerate_empty_table(
            routes::LLDP_NEIGH,
            helpers::get(&*self.client, routes::LLDP_NEIGH).await,
        )
    }

    /// CDP cache. Empty on firmware that fails the empty-table read.
    pub async fn cdp_cache(&self) -> Result<CdpCacheResponse, Error> {
        quirks::tolerate_empty_table(
            routes::CDP_CACHE_DATA,
            helpers::get(&*self.client, routes::CDP_CACHE_DATA).await,
        )
    }

    // ── Configuration ────────────────────────────────────────────────

    pub async fn cfg(&self) -> Result<ApCfgResponse, Error> {
        helpers::get(&*self.client, routes::CFG).await
    }

    pub async fn tags(&self) -> Result<ApTagsResponse, Error> {
        helpers::get(&*self.client, routes::TAGS).await
    }

    /// Merge a tag assignment for one AP (creates or updates it).
    pub async fn set_tags(&self, tag: ApTag) -> Result<(), Error> {
        let tag = ApTag {
            ap_mac: normalize_mac(&tag.ap_mac)?,
            ..tag
        };
        debug!(ap_mac = %tag.ap_mac, "assigning AP tags");
        let body = ApTagsResponse {
            ap_tags: ApTagList { ap_tag: vec![tag] },
        };
        helpers::patch_void(&*self.client, routes::TAGS, &body).await
    }

    /// Remove the tag assignment of one AP, reverting it to default tags.
    pub async fn delete_tags(&self, ap_mac: &str) -> Result<(), Error> {
        let mac = normalize_mac(ap_mac)?;
        debug!(ap_mac = %mac, "removing AP tags");
        helpers::delete(&*self.client, &build_query_url(routes::TAG, &mac)).await
    }

    // ── RPCs ─────────────────────────────────────────────────────────

    /// Enable or disable an AP.
    pub async fn set_admin_state(&self, wtp_mac: &str, enabled: bool) -> Result<(), Error> {
        let input = SetApAdminStateInput {
            mode: enabled,
            wtp_mac: normalize_mac(wtp_mac)?,
        };
        debug!(wtp_mac = %input.wtp_mac, enabled, "setting AP admin state");
        helpers::rpc_void(
            &*self.client,
            routes::RPC_SET_ADMIN_STATE,
            &ApRpcRequest { input },
        )
        .await
    }

    /// Enable or disable one radio slot of an AP.
    pub async fn set_radio_admin_state(
        &self,
        wtp_mac: &str,
        slot_id: u8,
        enabled: bool,
    ) -> Result<(), Error> {
        let input = SetApSlotAdminStateInput {
            mode: enabled,
            wtp_mac: normalize_mac(wtp_mac)?,
            slot_id,
        };
        debug!(wtp_mac = %input.wtp_mac, slot_id, enabled, "setting radio admin state");
        helpers::rpc_void(
            &*self.client,
            routes::RPC_SET_SLOT_ADMIN_STATE,
            &ApRpcRequest { input },
        )
        .await
    }

    /// Reboot an AP.
    pub async fn reset(&self, mac: &str) -> Result<(), Error> {
        let input = ApResetInput {
            mac_addr: normalize_mac(mac)?,
        };
        debug!(mac = %input.mac_addr, "resetting AP");
        helpers::rpc_void(&*self.client, routes::RPC_RESET, &ApRpcRequest { input }).await
    }
}
