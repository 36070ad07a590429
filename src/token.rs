multiversx_sc::imports!();

use crate::errors::{
    ERR_ALLOWANCE_UNDERFLOW, ERR_INSUFFICIENT_ALLOWANCE, ERR_NOT_BLACKLISTED, ERR_ZERO_ADDRESS,
};

// ============================================================
// Public token entry points.
//
// Gate order for every call: deprecation, blacklist, pause,
// then fee computation and balance/allowance arithmetic.
// ============================================================

#[multiversx_sc::module]
pub trait TokenModule:
    crate::owner::OwnerModule
    + crate::events::EventsModule
    + crate::ledger::LedgerModule
    + crate::compliance::ComplianceModule
    + crate::fee::FeeModule
    + crate::upgrade::UpgradeModule
{
    // ========================================================
    // ENDPOINT: transfer
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_not_deprecated();
        self.require_not_blacklisted(&caller);
        self.require_not_paused();
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let fee = self.fee_split(&amount);
        self.move_balance(&caller, &to, &amount, fee);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // Spends the caller's allowance on `from` by the pre-fee amount.
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_not_deprecated();
        self.require_not_blacklisted(&caller);
        self.require_not_blacklisted(&from);
        self.require_not_paused();
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let allowance = self.allowances(&from, &caller).get();
        require!(amount <= allowance, ERR_INSUFFICIENT_ALLOWANCE);

        let fee = self.fee_split(&amount);
        self.move_balance(&from, &to, &amount, fee);
        self.set_allowance(&from, &caller, &(&allowance - &amount));
    }

    // ========================================================
    // Allowances
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_not_deprecated();
        self.require_not_blacklisted(&caller);
        require!(!spender.is_zero(), ERR_ZERO_ADDRESS);

        self.set_allowance(&caller, &spender, &amount);
    }

    #[endpoint(increaseAllowance)]
    fn increase_allowance(&self, spender: ManagedAddress, delta: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_not_deprecated();
        self.require_not_blacklisted(&caller);
        require!(!spender.is_zero(), ERR_ZERO_ADDRESS);

        let current = self.allowances(&caller, &spender).get();
        self.set_allowance(&caller, &spender, &(current + delta));
    }

    #[endpoint(decreaseAllowance)]
    fn decrease_allowance(&self, spender: ManagedAddress, delta: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_not_deprecated();
        self.require_not_blacklisted(&caller);
        require!(!spender.is_zero(), ERR_ZERO_ADDRESS);

        let current = self.allowances(&caller, &spender).get();
        require!(delta <= current, ERR_ALLOWANCE_UNDERFLOW);
        self.set_allowance(&caller, &spender, &(current - delta));
    }

    // ========================================================
    // ENDPOINT: burn
    // ========================================================

    #[endpoint(burn)]
    fn burn(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_not_deprecated();
        self.require_not_paused();

        self.burn_from(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: destroyBlackFunds
    // Owner wipes a blacklisted balance; supply shrinks with it.
    // ========================================================

    #[endpoint(destroyBlackFunds)]
    fn destroy_black_funds(&self, user: ManagedAddress) {
        self.require_caller_is_owner();
        self.require_not_deprecated();
        require!(self.blacklist().contains(&user), ERR_NOT_BLACKLISTED);

        let dirty_funds = self.balance(&user).get();
        self.balance(&user).clear();
        self.total_supply().update(|s| *s -= &dirty_funds);

        self.destroyed_black_funds_event(&user, &dirty_funds);
    }
}
