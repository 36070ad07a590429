multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_DEPRECATED, ERR_DEPRECATED_USE_LEGACY_PATH, ERR_ZERO_ADDRESS};

// ============================================================
// Upgrade bridge.
//
// Deprecation is one-way. From then on every balance-mutating
// entry point is rejected, so the balance storage itself is the
// frozen legacy snapshot; `deprecatedAtNonce` tags its version.
// ============================================================

#[multiversx_sc::module]
pub trait UpgradeModule:
    crate::owner::OwnerModule + crate::events::EventsModule + crate::ledger::LedgerModule
{
    #[endpoint(deprecate)]
    fn deprecate(&self, successor: ManagedAddress) {
        self.require_caller_is_owner();
        require!(!self.deprecated_flag().get(), ERR_ALREADY_DEPRECATED);
        require!(!successor.is_zero(), ERR_ZERO_ADDRESS);

        let nonce = self.blockchain().get_block_nonce();
        self.deprecated_flag().set(true);
        self.successor().set(&successor);
        self.deprecated_at_nonce().set(nonce);

        self.deprecate_event(&successor, nonce);
    }

    fn require_not_deprecated(&self) {
        require!(!self.deprecated_flag().get(), ERR_DEPRECATED_USE_LEGACY_PATH);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(deprecated)]
    fn deprecated(&self) -> bool {
        self.deprecated_flag().get()
    }

    /// Balance as of the deprecation instant. Before deprecation this
    /// is simply the live balance.
    #[view(oldBalanceOf)]
    fn old_balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.balance(address).get()
    }

    #[view(getSuccessor)]
    fn get_successor(&self) -> OptionalValue<ManagedAddress> {
        if self.successor().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.successor().get())
        }
    }

    #[view(deprecatedAtNonce)]
    fn get_deprecated_at_nonce(&self) -> u64 {
        self.deprecated_at_nonce().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("deprecated")]
    fn deprecated_flag(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("successor")]
    fn successor(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("deprecatedAtNonce")]
    fn deprecated_at_nonce(&self) -> SingleValueMapper<u64>;
}
