// Controller-wide general data.

use std::sync::Arc;

use crate::client::Client;
use crate::error::Error;
use crate::helpers;
use crate::model::general::{GeneralCfgResponse, GeneralOperResponse, MgmtIntfDataResponse};
use crate::routes::general as routes;

pub struct GeneralService {
    client: Arc<Client>,
}

impl GeneralService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn oper(&self) -> Result<GeneralOperResponse, Error> {
        helpers::get(&*self.client, routes::OPER).await
    }

    pub async fn cfg(&self) -> Result<GeneralCfgResponse, Error> {
        helpers::get(&*self.client, routes::CFG).await
    }

    pub async fn management_interface(&self) -> Result<MgmtIntfDataResponse, Error> {
        helpers::get(&*self.client, routes::MGMT_INTF_DATA).await
    }
}
