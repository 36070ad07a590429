multiversx_sc::imports!();

use crate::types::ProposalAction;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Ledger ──

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("burn")]
    fn burn_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("feeCharged")]
    fn fee_charged_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        fee: &BigUint,
    );

    // ── Compliance ──

    #[event("addedBlackList")]
    fn added_black_list_event(&self, #[indexed] user: &ManagedAddress);

    #[event("removedBlackList")]
    fn removed_black_list_event(&self, #[indexed] user: &ManagedAddress);

    #[event("destroyedBlackFunds")]
    fn destroyed_black_funds_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("paused")]
    fn paused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] by: &ManagedAddress);

    // ── Fee ──

    #[event("feeParamsSet")]
    fn fee_params_set_event(&self, #[indexed] basis_points: u64, fee_cap: &BigUint);

    #[event("feeReceiverUpdated")]
    fn fee_receiver_updated_event(&self, #[indexed] receiver: &ManagedAddress);

    // ── Governance ──

    #[event("proposalOpened")]
    fn proposal_opened_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        action: &ProposalAction<Self::Api>,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote_count: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, executed_at: u64);

    #[event("voterAdded")]
    fn voter_added_event(&self, #[indexed] voter: &ManagedAddress, voter_count: usize);

    #[event("voterRemoved")]
    fn voter_removed_event(&self, #[indexed] voter: &ManagedAddress, voter_count: usize);

    // ── Upgrade ──

    #[event("deprecate")]
    fn deprecate_event(&self, #[indexed] successor: &ManagedAddress, deprecated_at: u64);
}
