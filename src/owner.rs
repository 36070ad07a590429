multiversx_sc::imports!();

use crate::errors::ERR_NOT_OWNER;

/// Owner guard. The owner is whatever the host records as contract owner,
/// so a host-level ownership change is picked up without extra storage.
#[multiversx_sc::module]
pub trait OwnerModule {
    fn require_caller_is_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_owner_address(), ERR_NOT_OWNER);
    }

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }
}
