#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod ledger;
pub mod liquidity;
pub mod rebase;
pub mod registry;
pub mod router_proxy;
pub mod types;

use errors::{
    ERR_ALLOWANCE_EXCEEDED, ERR_EXCEEDS_MAX_TRANSACTION, ERR_EXCEEDS_MAX_WALLET,
    ERR_NULL_RECIPIENT, ERR_TRADING_NOT_ENABLED, ERR_UNAUTHORIZED,
};
use types::{FeeSchedule, TradingState};

// ============================================================
// Constants
// ============================================================

/// Launch fee schedule: 3% liquidity, 2% reflection, 2% staking, 3% marketing
const DEFAULT_FEES: (u64, u64, u64, u64) = (3, 2, 2, 3);

/// Launch rebase rate: 0.1% per firing (parts per thousand)
const DEFAULT_REBASE_RATE: u64 = 1;

/// Launch rebase window: 24 hours in seconds
const DEFAULT_REBASE_FREQUENCY: u64 = 86_400;

/// Launch transaction ceiling: 1% of initial supply
const DEFAULT_MAX_TRANSACTION_PERCENT: u64 = 1;

/// Launch wallet ceiling: 2% of initial supply
const DEFAULT_MAX_WALLET_PERCENT: u64 = 2;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PolicyToken:
    events::EventsModule
    + ledger::LedgerModule
    + registry::PolicyRegistryModule
    + rebase::RebaseModule
    + liquidity::LiquidityModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        initial_supply: BigUint,
        marketing_wallet: ManagedAddress,
        staking_wallet: ManagedAddress,
        router_address: ManagedAddress,
        pair_address: ManagedAddress,
        base_asset_address: ManagedAddress,
    ) {
        let deployer = self.blockchain().get_caller();
        let sc_address = self.blockchain().get_sc_address();
        let sink = self.burn_sink();

        require!(
            !marketing_wallet.is_zero() && !staking_wallet.is_zero(),
            ERR_NULL_RECIPIENT
        );
        self.marketing_wallet().set(&marketing_wallet);
        self.staking_wallet().set(&staking_wallet);
        self.router_address().set(&router_address);
        self.pair_address().set(&pair_address);
        self.base_asset_address().set(&base_asset_address);

        let (liquidity, reflection, staking, marketing) = DEFAULT_FEES;
        self.fee_schedule()
            .set(FeeSchedule::new(liquidity, reflection, staking, marketing));
        self.rebase_rate().set(DEFAULT_REBASE_RATE);
        self.rebase_frequency().set(DEFAULT_REBASE_FREQUENCY);
        self.last_rebase_time()
            .set(self.blockchain().get_block_timestamp());
        self.max_transaction_amount()
            .set(&initial_supply * DEFAULT_MAX_TRANSACTION_PERCENT / 100u64);
        self.max_wallet_amount()
            .set(&initial_supply * DEFAULT_MAX_WALLET_PERCENT / 100u64);
        self.trading_state().set(TradingState::Disabled);

        for account in [&deployer, &sc_address, &sink] {
            self.fee_exempt().insert(account.clone());
        }
        for account in [&deployer, &sc_address, &pair_address, &sink] {
            self.rebase_exempt().insert(account.clone());
        }

        self.process_transfer(&ManagedAddress::zero(), &deployer, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: transfer
    // Returns what the recipient actually received.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.process_transfer(&caller, &to, &amount)
    }

    #[endpoint(burn)]
    fn burn(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.process_transfer(&caller, &self.burn_sink(), &amount);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // Router pulls the contract's own tokens against the
    // allowance granted for the current conversion leg.
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.router_address().get(), ERR_UNAUTHORIZED);
        require!(
            from == self.blockchain().get_sc_address(),
            ERR_UNAUTHORIZED
        );

        let allowance = self.router_allowance().get();
        require!(amount <= allowance, ERR_ALLOWANCE_EXCEEDED);
        self.router_allowance().set(allowance - &amount);

        self.process_transfer(&from, &to, &amount);
    }

    // ========================================================
    // INTERNAL: transfer policy engine
    // Every balance movement requested from outside goes through
    // here. All rejecting checks come before the first ledger write.
    // ========================================================

    fn process_transfer(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
    ) -> BigUint {
        // the zero address only ever appears as the mint origin
        require!(!to.is_zero(), ERR_NULL_RECIPIENT);

        let controller = self.blockchain().get_owner_address();
        let sink = self.burn_sink();
        let touches_controller = from == &controller || to == &controller;
        let is_mint_or_burn = from.is_zero() || to == &sink;

        // ── Step 1: trading gate ──
        if !self.trading_state().get().is_enabled() {
            require!(
                touches_controller || is_mint_or_burn,
                ERR_TRADING_NOT_ENABLED
            );
        }

        // ── Step 2: anti-whale limits ──
        if !touches_controller && !is_mint_or_burn {
            require!(
                amount <= &self.max_transaction_amount().get(),
                ERR_EXCEEDS_MAX_TRANSACTION
            );

            // the pool is expected to accumulate large balances
            if to != &self.pair_address().get() {
                let resulting = self.balance(to).get() + amount;
                require!(
                    resulting <= self.max_wallet_amount().get(),
                    ERR_EXCEEDS_MAX_WALLET
                );
            }
        }

        // ── Step 3: opportunistic rebase ──
        if self.is_rebase_due() {
            self.fire_rebase();
        }

        // ── Step 4: fee legs ──
        let mut net_amount = amount.clone();
        if !self.is_fee_exempt(from) && !self.is_fee_exempt(to) {
            let fees = self.fee_schedule().get().split(amount);

            let sc_address = self.blockchain().get_sc_address();
            self.debit_credit(from, &sc_address, &fees.liquidity);
            if fees.reflection > 0u64 {
                self.redistribute(from, &fees.reflection);
            }
            if fees.staking > 0u64 {
                self.debit_credit(from, &self.staking_wallet().get(), &fees.staking);
            }
            if fees.marketing > 0u64 {
                self.debit_credit(from, &self.marketing_wallet().get(), &fees.marketing);
            }

            net_amount -= &fees.total;
        }

        // ── Step 5: net transfer ──
        self.debit_credit(from, to, &net_amount);
        net_amount
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (contract, marketing, staking, burn sink)
    #[view(getWalletRoles)]
    fn get_wallet_roles(
        &self,
    ) -> MultiValue4<ManagedAddress, ManagedAddress, ManagedAddress, ManagedAddress> {
        (
            self.blockchain().get_sc_address(),
            self.marketing_wallet().get(),
            self.staking_wallet().get(),
            self.burn_sink(),
        )
            .into()
    }
}
