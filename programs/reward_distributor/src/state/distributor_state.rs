use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::DistributorError;
use crate::types::*;

/**
 * Main distributor state account
 *
 * Holds the pool pairing, the reward settings and the single
 * pending-winner slot. The account is also the reward vault: its lamports
 * above the rent-exempt minimum are what a winner is paid from.
 *
 * Derivation: ["distributor"]
 *
 * Lifecycle:
 * 1. Created and paired with a pool during initialize
 * 2. Settings updated by the program upgrade authority
 * 3. Slot set by purchases relayed from the pool
 * 4. Slot cleared when the winner is paid
 *
 * Design Notes:
 * - All transitions live on this type and take the clock and balances as
 *   arguments, so handlers only read sysvars and move lamports
 * - Every transition validates before it mutates
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct DistributorState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Program id of the paired pool
    /// - Set once during initialize, never changed afterwards
    /// - Default key means the distributor is not initialized
    pub pool_program: Pubkey,

    /// Most recent qualifying purchase, if any
    pub pending_winner: PendingWinner,

    /// Purchases must be strictly above this amount to qualify
    pub threshold: u64,

    /// Seconds that must pass after a qualifying purchase before it pays out
    pub distribution_interval: u64,
}

impl DistributorState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + serialized struct size
    pub const LEN: usize = 8 + DistributorState::INIT_SPACE;

    /// Reads the record from its account
    ///
    /// A PDA that was never created (no data, or not owned by this program)
    /// is reported as NotInitialized instead of a deserialization error.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.data_is_empty() || info.owner != &crate::ID {
            return err!(DistributorError::NotInitialized);
        }

        let data = info.try_borrow_data()?;
        DistributorState::try_deserialize(&mut data.as_ref())
    }

    /// Writes the record back, discriminator included
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    pub fn is_initialized(&self) -> bool {
        self.pool_program != Pubkey::default()
    }

    /// Sentinel view of the pending purchaser (default key when idle)
    pub fn last_purchaser(&self) -> Pubkey {
        self.pending_winner.purchaser()
    }

    /// Sentinel view of the pending purchase time (0 when idle)
    pub fn last_purchase_time(&self) -> i64 {
        self.pending_winner.since()
    }

    /// Address the pool signs relayed purchases with
    pub fn pool_address(&self) -> Pubkey {
        canonical_address(POOL_SEED, &self.pool_program)
    }

    /// Pairs a fresh record with `pool_program`
    ///
    /// `upgrade_authority` is the creator identity read from the program's
    /// ProgramData account; `None` means the program is immutable and no one
    /// may initialize it.
    pub fn initialize(
        &mut self,
        caller: &Pubkey,
        upgrade_authority: Option<Pubkey>,
        pool_program: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), DistributorError::AlreadyInitialized);
        require_creator(caller, upgrade_authority)?;
        require!(
            pool_program != Pubkey::default(),
            DistributorError::InvalidPoolProgram
        );

        self.bump = bump;
        self.pool_program = pool_program;
        self.pending_winner = PendingWinner::None;
        self.threshold = DEFAULT_THRESHOLD;
        self.distribution_interval = DEFAULT_DISTRIBUTION_INTERVAL;

        Ok(())
    }

    /// Overwrites threshold and interval; nothing else is touched
    pub fn update_settings(
        &mut self,
        caller: &Pubkey,
        upgrade_authority: Option<Pubkey>,
        settings: SettingsUpdate,
    ) -> Result<()> {
        require!(self.is_initialized(), DistributorError::NotInitialized);
        require_creator(caller, upgrade_authority)?;
        // Cooldown is added to an i64 timestamp at claim time
        require!(
            i64::try_from(settings.distribution_interval).is_ok(),
            DistributorError::InvalidSettings
        );

        self.threshold = settings.threshold;
        self.distribution_interval = settings.distribution_interval;

        Ok(())
    }

    /**
     * Records a purchase relayed by the pool
     *
     * @param caller - Signer of the instruction, must be the pool's canonical address
     * @param purchaser - Buyer to record as the pending winner
     * @param amount - Purchase amount in lamports
     * @param now - Current unix timestamp
     *
     * @returns true if the purchase replaced the pending winner, false if it
     * was at or below the threshold and ignored
     */
    pub fn record_purchase(
        &mut self,
        caller: &Pubkey,
        purchaser: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<bool> {
        require!(self.is_initialized(), DistributorError::NotInitialized);
        require_keys_eq!(*caller, self.pool_address(), DistributorError::Unauthorized);

        if amount <= self.threshold {
            return Ok(false);
        }

        // Default key and zero time read as "no winner"
        require!(
            purchaser != Pubkey::default(),
            DistributorError::InvalidPurchaser
        );
        require!(now > 0, DistributorError::InvalidTimestamp);

        // Last qualifying purchase wins, no history is kept
        self.pending_winner = PendingWinner::Pending {
            purchaser,
            since: now,
        };

        Ok(true)
    }

    /// Earliest timestamp at which a purchase recorded at `since` can be claimed
    pub fn claimable_at(&self, since: i64) -> Result<i64> {
        let interval = i64::try_from(self.distribution_interval)
            .map_err(|_| DistributorError::ArithmeticOverflow)?;

        since
            .checked_add(interval)
            .ok_or_else(|| DistributorError::ArithmeticOverflow.into())
    }

    /**
     * Settles the pending winner's claim
     *
     * Validates the claim against the injected ledger snapshot, clears the
     * slot and returns the reward to transfer. The caller must move the
     * returned lamports; the slot is already empty by then, so a re-entrant
     * claim finds nothing to pay.
     *
     * @param purchaser - Account the reward would be paid to
     * @param ledger - Clock and balance snapshot of the distributor account
     *
     * @returns Reward in lamports, floor(spendable / 2)
     */
    pub fn settle_claim(&mut self, purchaser: &Pubkey, ledger: &LedgerView) -> Result<u64> {
        require!(self.is_initialized(), DistributorError::NotInitialized);

        let (winner, since) = match self.pending_winner {
            PendingWinner::None => return err!(DistributorError::NoPendingWinner),
            PendingWinner::Pending { purchaser, since } => (purchaser, since),
        };
        require_keys_eq!(*purchaser, winner, DistributorError::Unauthorized);
        require!(
            ledger.now >= self.claimable_at(since)?,
            DistributorError::CooldownNotElapsed
        );

        let reward = ledger.spendable() / REWARD_SHARE_DIVISOR;
        require!(reward > 0, DistributorError::InsufficientFunds);

        self.pending_winner = PendingWinner::None;

        Ok(reward)
    }
}

fn require_creator(caller: &Pubkey, upgrade_authority: Option<Pubkey>) -> Result<()> {
    require!(
        upgrade_authority == Some(*caller),
        DistributorError::Unauthorized
    );
    Ok(())
}
