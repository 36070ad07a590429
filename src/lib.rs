#![no_std]

multiversx_sc::imports!();

pub mod compliance;
pub mod errors;
pub mod events;
pub mod fee;
pub mod governance;
pub mod ledger;
pub mod owner;
pub mod token;
pub mod types;
pub mod upgrade;

use governance::INITIAL_PROPOSAL_ID;

// ============================================================
// Constants
// ============================================================

pub const TOKEN_NAME: &[u8] = b"CNHC Token";
pub const TOKEN_SYMBOL: &[u8] = b"CNHC";

// ============================================================
// Contract
// ============================================================

/// Governed, upgradable fungible token ledger.
///
/// Transfers pass the compliance gate (blacklist, pause) and the fee
/// engine before touching balances. Supply expansion and voter
/// membership change only through majority-voted proposals. Once
/// deprecated, balances freeze and stay readable as the legacy view.
#[multiversx_sc::contract]
pub trait GovernedToken:
    owner::OwnerModule
    + events::EventsModule
    + ledger::LedgerModule
    + compliance::ComplianceModule
    + fee::FeeModule
    + upgrade::UpgradeModule
    + token::TokenModule
    + governance::GovernanceModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, initial_supply: BigUint, decimals: u32) {
        let owner = self.blockchain().get_caller();

        self.decimals().set(decimals);
        self.total_supply().set(&initial_supply);
        self.balance(&owner).set(&initial_supply);

        self.voters().insert(owner.clone());
        self.next_proposal_id().set(INITIAL_PROPOSAL_ID);

        self.mint_event(&owner, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS — token metadata
    // ========================================================

    #[view(name)]
    fn name(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(TOKEN_NAME)
    }

    #[view(symbol)]
    fn symbol(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(TOKEN_SYMBOL)
    }

    #[view(decimals)]
    fn get_decimals(&self) -> u32 {
        self.decimals().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u32>;
}
