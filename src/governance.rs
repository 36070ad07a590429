multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_ALREADY_VOTER, ERR_DEPRECATED_USE_LEGACY_PATH, ERR_LAST_VOTER,
    ERR_NOT_A_VOTER, ERR_NOT_VOTER_TARGET, ERR_PROPOSAL_ACTION_FAILED,
    ERR_PROPOSAL_ALREADY_EXECUTED, ERR_PROPOSAL_NOT_FOUND, ERR_TRANSFER_WHILE_PAUSED,
    ERR_ZERO_ADDRESS, ERR_ZERO_AMOUNT,
};
use crate::types::{Proposal, ProposalAction, ProposalStatus};

/// First id handed out; later proposals count up from here.
pub const INITIAL_PROPOSAL_ID: u64 = 10_000;

// ============================================================
// Proposal system — voter registry plus majority-gated actions.
//
// Quorum is a strict majority of the current voter set:
// votes * 2 > voters. Reaching it executes the action in the
// same call as the deciding vote; if the action fails, the
// whole call (vote included) is rolled back.
// ============================================================

#[multiversx_sc::module]
pub trait GovernanceModule:
    crate::events::EventsModule
    + crate::ledger::LedgerModule
    + crate::compliance::ComplianceModule
    + crate::upgrade::UpgradeModule
    + crate::owner::OwnerModule
{
    // ========================================================
    // ENDPOINTS: open proposals
    // ========================================================

    #[endpoint(openAddVoterProposal)]
    fn open_add_voter_proposal(&self, target: ManagedAddress) -> u64 {
        require!(!target.is_zero(), ERR_ZERO_ADDRESS);
        require!(!self.voters().contains(&target), ERR_ALREADY_VOTER);

        self.open_proposal(ProposalAction::AddVoter(target))
    }

    #[endpoint(openRemoveVoterProposal)]
    fn open_remove_voter_proposal(&self, target: ManagedAddress) -> u64 {
        require!(self.voters().contains(&target), ERR_NOT_VOTER_TARGET);

        self.open_proposal(ProposalAction::RemoveVoter(target))
    }

    #[endpoint(openMintProposal)]
    fn open_mint_proposal(&self, to: ManagedAddress, amount: BigUint) -> u64 {
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.open_proposal(ProposalAction::Mint { to, amount })
    }

    fn open_proposal(&self, action: ProposalAction<Self::Api>) -> u64 {
        self.admit_owner_as_voter();

        let caller = self.blockchain().get_caller();
        require!(self.voters().contains(&caller), ERR_NOT_A_VOTER);

        let proposal_id = self.next_proposal_id().get();
        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            action,
            status: ProposalStatus::Open,
            vote_count: 0,
            created_at: self.blockchain().get_block_nonce(),
            executed_at: 0,
        };

        self.proposals(proposal_id).set(&proposal);
        self.next_proposal_id().set(proposal_id + 1);

        self.proposal_opened_event(proposal_id, &caller, &proposal.action);

        proposal_id
    }

    /// The current owner always sits in the voter set once a proposal is
    /// opened, including after an ownership change or a vote removing it.
    fn admit_owner_as_voter(&self) {
        let owner = self.blockchain().get_owner_address();
        if self.voters().insert(owner.clone()) {
            self.voter_added_event(&owner, self.voters().len());
        }
    }

    // ========================================================
    // ENDPOINT: voteProposal
    // ========================================================

    #[endpoint(voteProposal)]
    fn vote_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.voters().contains(&caller), ERR_NOT_A_VOTER);
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.is_done(), ERR_PROPOSAL_ALREADY_EXECUTED);
        require!(
            self.proposal_voters(proposal_id).insert(caller.clone()),
            ERR_ALREADY_VOTED
        );

        proposal.vote_count += 1;
        self.vote_event(proposal_id, &caller, proposal.vote_count);

        if self.has_quorum(proposal.vote_count) {
            if let Err(reason) = self.execute_action(&proposal.action) {
                self.fail_proposal_action(reason);
            }

            proposal.status = ProposalStatus::Executed;
            proposal.executed_at = self.blockchain().get_block_nonce();
            self.proposal_executed_event(proposal_id, proposal.executed_at);
        }

        self.proposals(proposal_id).set(&proposal);
    }

    fn has_quorum(&self, vote_count: u64) -> bool {
        vote_count * 2 > self.voters().len() as u64
    }

    /// Single dispatch point for every governed action. Returns the
    /// reason the action cannot apply instead of aborting, so the caller
    /// can report it as a failed proposal action.
    fn execute_action(&self, action: &ProposalAction<Self::Api>) -> Result<(), &'static str> {
        match action {
            ProposalAction::AddVoter(target) => {
                if !self.voters().insert(target.clone()) {
                    return Err(ERR_ALREADY_VOTER);
                }
                self.voter_added_event(target, self.voters().len());
            },
            ProposalAction::RemoveVoter(target) => {
                if !self.voters().contains(target) {
                    return Err(ERR_NOT_VOTER_TARGET);
                }
                if self.voters().len() == 1 {
                    return Err(ERR_LAST_VOTER);
                }
                self.voters().swap_remove(target);
                self.voter_removed_event(target, self.voters().len());
            },
            ProposalAction::Mint { to, amount } => {
                if self.deprecated_flag().get() {
                    return Err(ERR_DEPRECATED_USE_LEGACY_PATH);
                }
                if self.paused_flag().get() {
                    return Err(ERR_TRANSFER_WHILE_PAUSED);
                }
                self.mint(to, amount);
            },
        }
        Ok(())
    }

    fn fail_proposal_action(&self, reason: &str) {
        let mut message: ManagedBuffer<Self::Api> =
            ManagedBuffer::new_from_bytes(ERR_PROPOSAL_ACTION_FAILED.as_bytes());
        message.append_bytes(b": ");
        message.append_bytes(reason.as_bytes());
        sc_panic!(message);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(proposals)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    #[view(voters)]
    fn is_voter(&self, address: &ManagedAddress) -> bool {
        self.voters().contains(address)
    }

    #[view(votersCount)]
    fn voters_count(&self) -> usize {
        self.voters().len()
    }

    /// Whether `voter` (the caller when omitted) voted on the proposal.
    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: OptionalValue<ManagedAddress>) -> bool {
        let voter = match voter {
            OptionalValue::Some(voter) => voter,
            OptionalValue::None => self.blockchain().get_caller(),
        };
        self.proposal_voters(proposal_id).contains(&voter)
    }

    #[view(getProposalVoters)]
    fn get_proposal_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.proposal_voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getVoters)]
    fn get_voters(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters().iter() {
            result.push(voter);
        }
        result
    }

    #[view(lastProposalId)]
    fn last_proposal_id(&self) -> OptionalValue<u64> {
        let next = self.next_proposal_id().get();
        if next > INITIAL_PROPOSAL_ID {
            OptionalValue::Some(next - 1)
        } else {
            OptionalValue::None
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voters")]
    fn voters(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalVoters")]
    fn proposal_voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
