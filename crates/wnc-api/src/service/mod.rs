// Per-domain endpoint services.
//
// Each service is a thin wrapper that pairs a route constant with a model
// type and calls one of the generic helpers. All of them share one
// `Arc<Client>` and therefore one connection pool.

pub mod ap;
pub mod client;
pub mod controller;
pub mod general;
pub mod mobility;
pub mod rf;
pub mod rfid;
pub mod rogue;
pub mod wlan;

use std::sync::Arc;

use crate::client::Client;

pub use ap::ApService;
pub use client::ClientService;
pub use controller::ControllerService;
pub use general::GeneralService;
pub use mobility::MobilityService;
pub use rf::RfService;
pub use rfid::RfidService;
pub use rogue::RogueService;
pub use wlan::WlanService;

/// Every service, bound to one client.
pub struct Services {
    pub ap: ApService,
    pub client: ClientService,
    pub controller: ControllerService,
    pub general: GeneralService,
    pub mobility: MobilityService,
    pub rf: RfService,
    pub rfid: RfidService,
    pub rogue: RogueService,
    pub wlan: WlanService,
}

impl Services {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            ap: ApService::new(Arc::clone(&client)),
            client: ClientService::new(Arc::clone(&client)),
            controller: ControllerService::new(Arc::clone(&client)),
            general: GeneralService::new(Arc::clone(&client)),
            mobility: MobilityService::new(Arc::clone(&client)),
            rf: RfService::new(Arc::clone(&client)),
            rfid: RfidService::new(Arc::clone(&client)),
            rogue: RogueService::new(Arc::clone(&client)),
            wlan: WlanService::new(client),
        }
    }
}
