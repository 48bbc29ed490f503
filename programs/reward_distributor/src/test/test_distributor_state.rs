use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::DistributorError;
use crate::state::DistributorState;
use crate::types::*;

const BUMP: u8 = 254;
const T0: i64 = 1_700_000_000;
const MIN_BALANCE: u64 = 1_586_880;

/// Distributor paired with a fresh pool program, plus the keys tests need
struct Fixture {
    state: DistributorState,
    creator: Pubkey,
    pool_program: Pubkey,
    pool_address: Pubkey,
}

impl Fixture {
    fn new() -> Self {
        let creator = Pubkey::new_unique();
        let pool_program = Pubkey::new_unique();
        let mut state = DistributorState::default();
        state
            .initialize(&creator, Some(creator), pool_program, BUMP)
            .unwrap();

        Fixture {
            state,
            creator,
            pool_program,
            pool_address: canonical_address(POOL_SEED, &pool_program),
        }
    }

    fn purchase(&mut self, purchaser: Pubkey, amount: u64, now: i64) -> Result<bool> {
        let pool_address = self.pool_address;
        self.state.record_purchase(&pool_address, purchaser, amount, now)
    }
}

type Snapshot = (u8, Pubkey, PendingWinner, u64, u64);

fn snapshot(state: &DistributorState) -> Snapshot {
    (
        state.bump,
        state.pool_program,
        state.pending_winner,
        state.threshold,
        state.distribution_interval,
    )
}

fn ledger(now: i64, balance: u64) -> LedgerView {
    LedgerView {
        now,
        balance,
        min_balance: MIN_BALANCE,
    }
}

fn assert_sentinels_paired(state: &DistributorState) {
    assert_eq!(
        state.last_purchaser() == Pubkey::default(),
        state.last_purchase_time() == 0,
        "purchaser and purchase time must be set or cleared together"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_sets_defaults() {
        let fixture = Fixture::new();
        let state = &fixture.state;

        assert!(state.is_initialized());
        assert_eq!(state.bump, BUMP);
        assert_eq!(state.pool_program, fixture.pool_program);
        assert_eq!(state.pending_winner, PendingWinner::None);
        assert_eq!(state.last_purchaser(), Pubkey::default());
        assert_eq!(state.last_purchase_time(), 0);
        assert_eq!(state.threshold, 1_000_000);
        assert_eq!(state.distribution_interval, 60);
    }

    #[test]
    fn test_initialize_only_once() {
        let mut fixture = Fixture::new();
        let before = snapshot(&fixture.state);

        let creator = fixture.creator;
        let result = fixture
            .state
            .initialize(&creator, Some(creator), Pubkey::new_unique(), 1);

        assert_eq!(result.unwrap_err(), DistributorError::AlreadyInitialized.into());
        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_initialize_requires_upgrade_authority() {
        let creator = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut state = DistributorState::default();

        let result = state.initialize(&stranger, Some(creator), Pubkey::new_unique(), BUMP);
        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());

        // Immutable program: nobody holds the authority
        let result = state.initialize(&creator, None, Pubkey::new_unique(), BUMP);
        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());

        assert!(!state.is_initialized());
    }

    #[test]
    fn test_initialize_rejects_default_pool() {
        let creator = Pubkey::new_unique();
        let mut state = DistributorState::default();

        let result = state.initialize(&creator, Some(creator), Pubkey::default(), BUMP);

        assert_eq!(result.unwrap_err(), DistributorError::InvalidPoolProgram.into());
        assert!(!state.is_initialized());
    }

    #[test]
    fn test_update_settings_only_touches_settings() {
        let mut fixture = Fixture::new();
        let purchaser = Pubkey::new_unique();
        fixture.purchase(purchaser, 1_500_000, T0).unwrap();

        let creator = fixture.creator;
        let settings = SettingsUpdate {
            threshold: 2_000_000,
            distribution_interval: 3_600,
        };
        fixture
            .state
            .update_settings(&creator, Some(creator), settings)
            .unwrap();

        assert_eq!(fixture.state.threshold, 2_000_000);
        assert_eq!(fixture.state.distribution_interval, 3_600);
        assert_eq!(fixture.state.pool_program, fixture.pool_program);
        assert_eq!(fixture.state.last_purchaser(), purchaser);
        assert_eq!(fixture.state.last_purchase_time(), T0);
    }

    #[test]
    fn test_update_settings_access_and_validation() {
        let settings = SettingsUpdate {
            threshold: 5,
            distribution_interval: 5,
        };

        let creator = Pubkey::new_unique();
        let mut uninitialized = DistributorState::default();
        let result = uninitialized.update_settings(&creator, Some(creator), settings);
        assert_eq!(result.unwrap_err(), DistributorError::NotInitialized.into());

        let mut fixture = Fixture::new();
        let before = snapshot(&fixture.state);
        let creator = fixture.creator;

        let result = fixture
            .state
            .update_settings(&Pubkey::new_unique(), Some(creator), settings);
        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());

        let too_long = SettingsUpdate {
            threshold: 5,
            distribution_interval: u64::MAX,
        };
        let result = fixture.state.update_settings(&creator, Some(creator), too_long);
        assert_eq!(result.unwrap_err(), DistributorError::InvalidSettings.into());

        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_purchase_above_threshold_becomes_winner() {
        let mut fixture = Fixture::new();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        assert!(fixture.purchase(first, 1_500_000, T0).unwrap());
        assert_eq!(
            fixture.state.pending_winner,
            PendingWinner::Pending {
                purchaser: first,
                since: T0
            }
        );

        // A later qualifying purchase replaces the winner, even if smaller
        assert!(fixture.purchase(second, 1_000_001, T0 + 30).unwrap());
        assert_eq!(fixture.state.last_purchaser(), second);
        assert_eq!(fixture.state.last_purchase_time(), T0 + 30);
    }

    #[test]
    fn test_purchase_at_or_below_threshold_is_ignored() {
        let mut fixture = Fixture::new();
        let winner = Pubkey::new_unique();
        fixture.purchase(winner, 1_500_000, T0).unwrap();
        let before = snapshot(&fixture.state);

        // Scenario C: 500_000 <= 1_000_000
        assert!(!fixture.purchase(Pubkey::new_unique(), 500_000, T0 + 1).unwrap());
        // The threshold itself does not qualify
        assert!(!fixture.purchase(Pubkey::new_unique(), 1_000_000, T0 + 2).unwrap());

        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_purchase_rejects_sentinel_values() {
        let mut fixture = Fixture::new();
        let winner = Pubkey::new_unique();
        fixture.purchase(winner, 1_500_000, T0).unwrap();
        let before = snapshot(&fixture.state);

        // The default key would read back as "no winner" with a non-zero time
        let result = fixture.purchase(Pubkey::default(), 1_500_000, T0 + 1);
        assert_eq!(result.unwrap_err(), DistributorError::InvalidPurchaser.into());

        let result = fixture.purchase(Pubkey::new_unique(), 1_500_000, 0);
        assert_eq!(result.unwrap_err(), DistributorError::InvalidTimestamp.into());

        assert_eq!(snapshot(&fixture.state), before);
        assert_sentinels_paired(&fixture.state);

        // Below the threshold nothing is recorded, so nothing is rejected
        assert!(!fixture.purchase(Pubkey::default(), 10, T0 + 2).unwrap());
        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_purchase_requires_pool_address() {
        let mut fixture = Fixture::new();
        let before = snapshot(&fixture.state);
        let purchaser = Pubkey::new_unique();

        // Scenario B: any signer other than the pool's canonical address
        let creator = fixture.creator;
        let result = fixture.state.record_purchase(&creator, purchaser, 1_500_000, T0);
        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());

        // The pool program id itself is not its signing address
        let pool_program = fixture.pool_program;
        let result = fixture
            .state
            .record_purchase(&pool_program, purchaser, 1_500_000, T0);
        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());

        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_purchase_requires_initialized() {
        let mut state = DistributorState::default();
        let result = state.record_purchase(
            &Pubkey::new_unique(),
            Pubkey::new_unique(),
            1_500_000,
            T0,
        );

        assert_eq!(result.unwrap_err(), DistributorError::NotInitialized.into());
    }

    #[test]
    fn test_scenario_a_claim_after_interval() {
        let mut fixture = Fixture::new();
        let purchaser = Pubkey::new_unique();
        let interval = fixture.state.distribution_interval as i64;
        let balance = MIN_BALANCE + 10_000_001;

        fixture.purchase(purchaser, 1_500_000, T0).unwrap();
        assert_eq!(fixture.state.last_purchaser(), purchaser);

        let early = fixture
            .state
            .settle_claim(&purchaser, &ledger(T0 + interval - 1, balance));
        assert_eq!(early.unwrap_err(), DistributorError::CooldownNotElapsed.into());
        assert!(fixture.state.pending_winner.is_pending());

        let reward = fixture
            .state
            .settle_claim(&purchaser, &ledger(T0 + interval, balance))
            .unwrap();

        assert_eq!(reward, 5_000_000);
        assert_eq!(fixture.state.pending_winner, PendingWinner::None);
        assert_sentinels_paired(&fixture.state);
    }

    #[test]
    fn test_second_claim_finds_no_winner() {
        let mut fixture = Fixture::new();
        let purchaser = Pubkey::new_unique();
        fixture.purchase(purchaser, 2_000_000, T0).unwrap();

        let view = ledger(T0 + 60, MIN_BALANCE + 1_000);
        assert_eq!(fixture.state.settle_claim(&purchaser, &view).unwrap(), 500);

        let again = fixture.state.settle_claim(&purchaser, &view);
        assert_eq!(again.unwrap_err(), DistributorError::NoPendingWinner.into());
    }

    #[test]
    fn test_claim_rejects_other_purchaser() {
        let mut fixture = Fixture::new();
        let purchaser = Pubkey::new_unique();
        fixture.purchase(purchaser, 2_000_000, T0).unwrap();
        let before = snapshot(&fixture.state);

        let result = fixture
            .state
            .settle_claim(&Pubkey::new_unique(), &ledger(T0 + 600, MIN_BALANCE + 1_000));

        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());
        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_claim_without_spendable_funds() {
        let mut fixture = Fixture::new();
        let purchaser = Pubkey::new_unique();
        fixture.purchase(purchaser, 2_000_000, T0).unwrap();
        let before = snapshot(&fixture.state);

        // floor(1 / 2) == 0
        let result = fixture
            .state
            .settle_claim(&purchaser, &ledger(T0 + 60, MIN_BALANCE + 1));
        assert_eq!(result.unwrap_err(), DistributorError::InsufficientFunds.into());

        // Below the rent-exempt minimum nothing is spendable
        let result = fixture
            .state
            .settle_claim(&purchaser, &ledger(T0 + 60, MIN_BALANCE - 1));
        assert_eq!(result.unwrap_err(), DistributorError::InsufficientFunds.into());

        assert_eq!(snapshot(&fixture.state), before);
    }

    #[test]
    fn test_claim_on_idle_and_uninitialized() {
        let mut fixture = Fixture::new();
        let view = ledger(T0, MIN_BALANCE + 1_000);

        let result = fixture.state.settle_claim(&Pubkey::new_unique(), &view);
        assert_eq!(result.unwrap_err(), DistributorError::NoPendingWinner.into());

        let mut state = DistributorState::default();
        let result = state.settle_claim(&Pubkey::new_unique(), &view);
        assert_eq!(result.unwrap_err(), DistributorError::NotInitialized.into());
    }

    #[test]
    fn test_claimable_at_overflow() {
        let fixture = Fixture::new();

        assert_eq!(fixture.state.claimable_at(T0).unwrap(), T0 + 60);
        assert_eq!(
            fixture.state.claimable_at(i64::MAX).unwrap_err(),
            DistributorError::ArithmeticOverflow.into()
        );
    }

    #[test]
    fn test_sentinels_stay_paired() {
        let mut fixture = Fixture::new();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let balance = MIN_BALANCE + 4_000_000;

        assert_sentinels_paired(&fixture.state);

        let steps: Vec<(Pubkey, u64, i64)> = vec![
            (alice, 10, T0),
            (alice, 1_000_001, T0 + 1),
            (bob, 999_999, T0 + 2),
            (bob, 3_000_000, T0 + 3),
        ];
        for (purchaser, amount, now) in steps {
            fixture.purchase(purchaser, amount, now).unwrap();
            assert_sentinels_paired(&fixture.state);
        }

        let result = fixture.state.settle_claim(&alice, &ledger(T0 + 100, balance));
        assert_eq!(result.unwrap_err(), DistributorError::Unauthorized.into());
        assert_sentinels_paired(&fixture.state);

        fixture
            .state
            .settle_claim(&bob, &ledger(T0 + 63, balance))
            .unwrap();
        assert_sentinels_paired(&fixture.state);
        assert_eq!(fixture.state.last_purchaser(), Pubkey::default());
    }
}
