//! Shared application state.

use booking_identity::IdentityClient;
use booking_inventory::InventoryClient;

/// State shared with every gateway handler: the clients for the two
/// downstream services. Both are cheap to clone (an `Arc` around a
/// connection pool inside reqwest).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the identity service.
    pub identity: IdentityClient,
    /// Client for the inventory service.
    pub inventory: InventoryClient,
}

impl AppState {
    /// Bundle the downstream clients.
    #[must_use]
    pub const fn new(identity: IdentityClient, inventory: InventoryClient) -> Self {
        Self {
            identity,
            inventory,
        }
    }
}
