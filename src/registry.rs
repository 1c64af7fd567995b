multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_FEE_SCHEDULE, ERR_INVALID_REBASE_RATE, ERR_NULL_RECIPIENT};
use crate::types::{FeeSchedule, TradingState, WalletRole};

/// Rebase rate cap, in parts per thousand (10 = 1%).
pub const MAX_REBASE_RATE: u64 = 10;

/// Rebase rate denominator (parts per thousand).
pub const REBASE_RATE_DENOMINATOR: u64 = 1_000;

// ============================================================
// Policy Registry
// Every mutator is owner-only and either fully applies or
// aborts the transaction.
// ============================================================

#[multiversx_sc::module]
pub trait PolicyRegistryModule: crate::events::EventsModule {
    // ========================================================
    // Fees
    // ========================================================

    #[only_owner]
    #[endpoint(setFeeSchedule)]
    fn set_fee_schedule(&self, liquidity: u64, reflection: u64, staking: u64, marketing: u64) {
        let schedule = FeeSchedule::new(liquidity, reflection, staking, marketing);
        require!(schedule.is_within_ceiling(), ERR_INVALID_FEE_SCHEDULE);

        self.fee_schedule().set(&schedule);
        self.fees_updated_event(liquidity, reflection, staking, marketing, schedule.total);
    }

    #[only_owner]
    #[endpoint(setFeeExempt)]
    fn set_fee_exempt(&self, account: ManagedAddress, exempt: bool) {
        if exempt {
            self.fee_exempt().insert(account.clone());
        } else {
            self.fee_exempt().swap_remove(&account);
        }
        self.fee_exemption_event(&account, exempt);
    }

    // ========================================================
    // Rebase
    // ========================================================

    #[only_owner]
    #[endpoint(setRebaseRate)]
    fn set_rebase_rate(&self, rate: u64) {
        require!(rate <= MAX_REBASE_RATE, ERR_INVALID_REBASE_RATE);

        self.rebase_rate().set(rate);
        self.rebase_schedule_event(self.rebase_frequency().get(), rate);
    }

    #[only_owner]
    #[endpoint(setRebaseFrequency)]
    fn set_rebase_frequency(&self, frequency: u64) {
        self.rebase_frequency().set(frequency);
        self.rebase_schedule_event(frequency, self.rebase_rate().get());
    }

    /// Recorded and queryable. The burn-based redistribution does not
    /// distinguish holders, so the flag has no effect on amounts.
    #[only_owner]
    #[endpoint(setRebaseExempt)]
    fn set_rebase_exempt(&self, account: ManagedAddress, exempt: bool) {
        if exempt {
            self.rebase_exempt().insert(account.clone());
        } else {
            self.rebase_exempt().swap_remove(&account);
        }
        self.rebase_exemption_event(&account, exempt);
    }

    // ========================================================
    // Anti-whale limits
    // ========================================================

    #[only_owner]
    #[endpoint(setMaxTransactionAmount)]
    fn set_max_transaction_amount(&self, amount: BigUint) {
        self.max_transaction_amount().set(&amount);
        self.limits_updated_event(&amount, &self.max_wallet_amount().get());
    }

    #[only_owner]
    #[endpoint(setMaxWalletAmount)]
    fn set_max_wallet_amount(&self, amount: BigUint) {
        self.max_wallet_amount().set(&amount);
        self.limits_updated_event(&self.max_transaction_amount().get(), &amount);
    }

    // ========================================================
    // Trading gate
    // ========================================================

    /// There is no way back to `Disabled`. Calling again is a no-op.
    #[only_owner]
    #[endpoint(enableTrading)]
    fn enable_trading(&self) {
        if self.trading_state().get().is_enabled() {
            return;
        }

        self.trading_state().set(TradingState::Enabled);
        self.trading_enabled_event(self.blockchain().get_block_timestamp());
    }

    // ========================================================
    // Wallet roles
    // ========================================================

    #[only_owner]
    #[endpoint(setMarketingWallet)]
    fn set_marketing_wallet(&self, wallet: ManagedAddress) {
        require!(!wallet.is_zero(), ERR_NULL_RECIPIENT);

        self.marketing_wallet().set(&wallet);
        self.wallet_updated_event(WalletRole::Marketing, &wallet);
    }

    #[only_owner]
    #[endpoint(setStakingWallet)]
    fn set_staking_wallet(&self, wallet: ManagedAddress) {
        require!(!wallet.is_zero(), ERR_NULL_RECIPIENT);

        self.staking_wallet().set(&wallet);
        self.wallet_updated_event(WalletRole::Staking, &wallet);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFeeSchedule)]
    fn get_fee_schedule(&self) -> FeeSchedule {
        self.fee_schedule().get()
    }

    /// (frequency, last rebase time, rate)
    #[view(getRebaseInfo)]
    fn get_rebase_info(&self) -> MultiValue3<u64, u64, u64> {
        (
            self.rebase_frequency().get(),
            self.last_rebase_time().get(),
            self.rebase_rate().get(),
        )
            .into()
    }

    /// (max transaction, max wallet)
    #[view(getLimits)]
    fn get_limits(&self) -> MultiValue2<BigUint, BigUint> {
        (
            self.max_transaction_amount().get(),
            self.max_wallet_amount().get(),
        )
            .into()
    }

    #[view(isTradingEnabled)]
    fn is_trading_enabled(&self) -> bool {
        self.trading_state().get().is_enabled()
    }

    #[view(isFeeExempt)]
    fn is_fee_exempt(&self, account: &ManagedAddress) -> bool {
        self.fee_exempt().contains(account)
    }

    #[view(isRebaseExempt)]
    fn is_rebase_exempt(&self, account: &ManagedAddress) -> bool {
        self.rebase_exempt().contains(account)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("feeSchedule")]
    fn fee_schedule(&self) -> SingleValueMapper<FeeSchedule>;

    #[storage_mapper("feeExempt")]
    fn fee_exempt(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("rebaseExempt")]
    fn rebase_exempt(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("rebaseRate")]
    fn rebase_rate(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("rebaseFrequency")]
    fn rebase_frequency(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("lastRebaseTime")]
    fn last_rebase_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxTransactionAmount")]
    fn max_transaction_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxWalletAmount")]
    fn max_wallet_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("tradingState")]
    fn trading_state(&self) -> SingleValueMapper<TradingState>;

    #[storage_mapper("marketingWallet")]
    fn marketing_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("stakingWallet")]
    fn staking_wallet(&self) -> SingleValueMapper<ManagedAddress>;
}
