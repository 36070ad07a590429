multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_FEE_PARAMS, ERR_ZERO_ADDRESS};

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

#[multiversx_sc::module]
pub trait FeeModule: crate::owner::OwnerModule + crate::events::EventsModule {
    #[endpoint(setFeeParams)]
    fn set_fee_params(&self, basis_points: u64, fee_cap: BigUint) {
        self.require_caller_is_owner();
        require!(basis_points <= BPS_DENOMINATOR, ERR_INVALID_FEE_PARAMS);

        self.fee_basis_points().set(basis_points);
        self.fee_cap().set(&fee_cap);

        self.fee_params_set_event(basis_points, &fee_cap);
    }

    #[endpoint(updateReceivingFeeAddress)]
    fn update_receiving_fee_address(&self, receiver: ManagedAddress) {
        self.require_caller_is_owner();
        require!(!receiver.is_zero(), ERR_ZERO_ADDRESS);

        self.fee_receiver().set(&receiver);
        self.fee_receiver_updated_event(&receiver);
    }

    /// The fee owed on `amount` and where it goes, if any is owed.
    fn fee_split(&self, amount: &BigUint) -> Option<(ManagedAddress, BigUint)> {
        let fee = self.compute_fee(amount);
        if fee == 0u64 {
            return None;
        }
        Some((self.fee_receiver().get(), fee))
    }

    /// fee = min(amount * bps / 10000, cap), truncating.
    /// Zero while no receiver is set or the rate is zero.
    #[view(calculateFee)]
    fn compute_fee(&self, amount: &BigUint) -> BigUint {
        let basis_points = self.fee_basis_points().get();
        if basis_points == 0 || self.fee_receiver().is_empty() {
            return BigUint::zero();
        }

        let fee = (amount * basis_points) / BPS_DENOMINATOR;
        let cap = self.fee_cap().get();
        if fee > cap {
            cap
        } else {
            fee
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(feeParams)]
    fn fee_params(&self) -> MultiValue2<u64, BigUint> {
        (self.fee_basis_points().get(), self.fee_cap().get()).into()
    }

    #[view(feeReceiver)]
    fn fee_receiver_view(&self) -> OptionalValue<ManagedAddress> {
        if self.fee_receiver().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.fee_receiver().get())
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("feeBasisPoints")]
    fn fee_basis_points(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("feeCap")]
    fn fee_cap(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("feeReceiver")]
    fn fee_receiver(&self) -> SingleValueMapper<ManagedAddress>;
}
