multiversx_sc::imports!();

use crate::errors::ERR_INSUFFICIENT_BALANCE;

// ============================================================
// Ledger — balances, allowances, total supply.
//
// Invariant: sum of all balances == total supply. Every helper
// that touches a balance keeps it; gating lives one layer up.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: crate::events::EventsModule {
    fn credit(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.balance(to).update(|b| *b += amount);
    }

    fn debit(&self, from: &ManagedAddress, amount: &BigUint) {
        let balance = self.balance(from).get();
        require!(*amount <= balance, ERR_INSUFFICIENT_BALANCE);
        self.balance(from).set(&balance - amount);
    }

    /// Moves `amount` out of `from`. With a fee, `to` receives
    /// `amount - fee` and the fee receiver the rest, in the same call.
    fn move_balance(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
        fee: Option<(ManagedAddress, BigUint)>,
    ) {
        self.debit(from, amount);

        match fee {
            Some((fee_receiver, fee)) => {
                let net = amount - &fee;
                self.credit(to, &net);
                self.transfer_event(from, to, &net);

                self.credit(&fee_receiver, &fee);
                self.fee_charged_event(from, &fee_receiver, &fee);
            },
            None => {
                self.credit(to, amount);
                self.transfer_event(from, to, amount);
            },
        }
    }

    /// Supply expansion. Only reachable through an executed mint proposal.
    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        self.total_supply().update(|s| *s += amount);
        self.credit(to, amount);
        self.mint_event(to, amount);
    }

    fn burn_from(&self, from: &ManagedAddress, amount: &BigUint) {
        self.debit(from, amount);
        self.total_supply().update(|s| *s -= amount);
        self.burn_event(from, amount);
    }

    fn set_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        self.allowances(owner, spender).set(amount);
        self.approval_event(owner, spender, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.balance(address).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowances(owner, spender).get()
    }

    #[view(totalSupply)]
    fn total_supply_view(&self) -> BigUint {
        self.total_supply().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
