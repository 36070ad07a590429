multiversx_sc::imports!();

use crate::errors::{ERR_BLACKLISTED_CALLER, ERR_TRANSFER_WHILE_PAUSED};

// ============================================================
// Compliance gate: blacklist membership and the global pause.
// Checks here run before any fee or balance arithmetic.
// ============================================================

#[multiversx_sc::module]
pub trait ComplianceModule:
    crate::owner::OwnerModule + crate::events::EventsModule
{
    #[endpoint(addBlackList)]
    fn add_black_list(&self, user: ManagedAddress) {
        self.require_caller_is_owner();

        if self.blacklist().insert(user.clone()) {
            self.added_black_list_event(&user);
        }
    }

    #[endpoint(removeBlackList)]
    fn remove_black_list(&self, user: ManagedAddress) {
        self.require_caller_is_owner();

        if self.blacklist().swap_remove(&user) {
            self.removed_black_list_event(&user);
        }
    }

    #[endpoint(pause)]
    fn pause(&self) {
        self.require_caller_is_owner();
        self.paused_flag().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_caller_is_owner();
        self.paused_flag().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    fn require_not_blacklisted(&self, user: &ManagedAddress) {
        require!(!self.blacklist().contains(user), ERR_BLACKLISTED_CALLER);
    }

    fn require_not_paused(&self) {
        require!(!self.paused_flag().get(), ERR_TRANSFER_WHILE_PAUSED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isBlackListUser)]
    fn is_black_list_user(&self, user: &ManagedAddress) -> bool {
        self.blacklist().contains(user)
    }

    #[view(paused)]
    fn paused(&self) -> bool {
        self.paused_flag().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("blacklist")]
    fn blacklist(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused_flag(&self) -> SingleValueMapper<bool>;
}
