multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Collecting votes. Stays here until a strict majority is reached.
    Open,
    /// Majority reached and the action applied. Terminal state.
    Executed,
}

// ============================================================
// Proposal Action — what a proposal does once it passes
// ============================================================

/// New governed operations are added as variants here; the quorum
/// engine in `governance` never inspects them beyond dispatching.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalAction<M: ManagedTypeApi> {
    AddVoter(ManagedAddress<M>),
    RemoveVoter(ManagedAddress<M>),
    Mint {
        to: ManagedAddress<M>,
        amount: BigUint<M>,
    },
}

// ============================================================
// Proposal — the governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub action: ProposalAction<M>,
    pub status: ProposalStatus,
    /// Distinct voters recorded so far
    pub vote_count: u64,
    /// Block nonce at creation
    pub created_at: u64,
    /// Block nonce of execution (0 while Open)
    pub executed_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_done(&self) -> bool {
        self.status == ProposalStatus::Executed
    }
}
