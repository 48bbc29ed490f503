use anchor_lang::prelude::*;

/**
 * Value types shared by the distributor and the pool relay
 *
 * These are plain data: no account access, no sysvar reads (except in
 * `LedgerView::capture`). The state machine takes them as arguments so
 * the clock and balances can be injected in tests.
 */

/// The single pending-winner slot
///
/// `None` is the idle state. `Pending` records the most recent purchase
/// that cleared the threshold and the unix timestamp it was recorded at.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PendingWinner {
    #[default]
    None,
    Pending { purchaser: Pubkey, since: i64 },
}

impl PendingWinner {
    pub fn is_pending(&self) -> bool {
        matches!(self, PendingWinner::Pending { .. })
    }

    /// Recorded purchaser, or the default key when idle
    pub fn purchaser(&self) -> Pubkey {
        match self {
            PendingWinner::None => Pubkey::default(),
            PendingWinner::Pending { purchaser, .. } => *purchaser,
        }
    }

    /// Recorded purchase time, or 0 when idle
    pub fn since(&self) -> i64 {
        match self {
            PendingWinner::None => 0,
            PendingWinner::Pending { since, .. } => *since,
        }
    }
}

/// Settings the creator may change after initialization
///
/// Only these two fields are writable; the pool pairing and the pending
/// winner are not part of the update.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsUpdate {
    /// Minimum purchase amount (exclusive) in lamports
    pub threshold: u64,
    /// Cooldown in seconds before a pending winner can claim
    pub distribution_interval: u64,
}

/// Read-only snapshot of the ledger values a payout depends on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerView {
    /// Current unix timestamp
    pub now: i64,
    /// Lamports held by the paying account
    pub balance: u64,
    /// Lamports the account must keep to stay rent exempt
    pub min_balance: u64,
}

impl LedgerView {
    /// Reads the clock and rent sysvars for `account`
    pub fn capture(account: &AccountInfo) -> Result<Self> {
        let now = Clock::get()?.unix_timestamp;
        let min_balance = Rent::get()?.minimum_balance(account.data_len());

        Ok(Self {
            now,
            balance: account.lamports(),
            min_balance,
        })
    }

    pub fn spendable(&self) -> u64 {
        self.balance.saturating_sub(self.min_balance)
    }
}

/// Derives the canonical address of a party from its program id
///
/// Each party's state PDA (`[seed]`) doubles as its signing identity, so a
/// counterpart only needs the program id to know which signer to accept.
pub fn canonical_address(seed: &str, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[seed.as_bytes()], program_id).0
}
