multiversx_sc::imports!();

use crate::errors::{ERR_BASE_BALANCE_DECREASED, ERR_CONVERSION_IN_PROGRESS};
use crate::router_proxy;

// ============================================================
// Liquidity Converter
// Swaps half of the contract's fee balance to the base asset and
// deposits it, together with the other half, as pool liquidity.
// ============================================================

#[multiversx_sc::module]
pub trait LiquidityModule: crate::ledger::LedgerModule + crate::events::EventsModule {
    /// Open to any caller. No-op while the held balance is below 2: a single
    /// leftover unit stays held until more fees arrive. A failing router call
    /// fails the transaction.
    #[endpoint(convertFees)]
    fn convert_fees(&self) {
        require!(!self.converting().get(), ERR_CONVERSION_IN_PROGRESS);

        let sc_address = self.blockchain().get_sc_address();
        let held = self.balance(&sc_address).get();
        let swap_half = &held / 2u64;
        if swap_half == 0u64 {
            return;
        }
        let liquidity_half = &held - &swap_half;

        self.converting().set(true);

        // ── Leg 1: tokens → base asset, observed as a balance delta ──
        let base_before = self.base_balance();
        self.swap_for_base(&sc_address, &swap_half);
        let base_after = self.base_balance();
        require!(base_after >= base_before, ERR_BASE_BALANCE_DECREASED);
        let base_received = base_after - base_before;

        // ── Leg 2: deposit both sides, pool tokens go to the owner ──
        self.deposit_liquidity(&sc_address, &liquidity_half, &base_received);

        self.converting().set(false);
        self.liquidity_converted_event(&swap_half, &base_received, &liquidity_half);
    }

    #[only_owner]
    #[endpoint(syncPoolAddresses)]
    fn sync_pool_addresses(&self) {
        let router = self.router_address().get();
        let sc_address = self.blockchain().get_sc_address();

        let pair: ManagedAddress = self
            .tx()
            .to(&router)
            .typed(router_proxy::RouterProxy)
            .get_pair(sc_address)
            .returns(ReturnsResult)
            .sync_call_readonly();
        let base_asset: ManagedAddress = self
            .tx()
            .to(&router)
            .typed(router_proxy::RouterProxy)
            .get_base_asset()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.pair_address().set(&pair);
        self.base_asset_address().set(&base_asset);
    }

    fn swap_for_base(&self, sc_address: &ManagedAddress, amount: &BigUint) {
        let mut path = ManagedVec::new();
        path.push(sc_address.clone());
        path.push(self.base_asset_address().get());

        let router = self.router_address().get();
        let deadline = self.blockchain().get_block_timestamp();

        self.router_allowance().set(amount);
        self.tx()
            .to(&router)
            .typed(router_proxy::RouterProxy)
            .swap_exact_tokens_for_base(
                amount.clone(),
                BigUint::zero(),
                path,
                sc_address.clone(),
                deadline,
            )
            .sync_call();
        self.router_allowance().clear();
    }

    fn deposit_liquidity(
        &self,
        sc_address: &ManagedAddress,
        token_amount: &BigUint,
        base_amount: &BigUint,
    ) {
        let router = self.router_address().get();
        let owner = self.blockchain().get_owner_address();
        let deadline = self.blockchain().get_block_timestamp();

        self.router_allowance().set(token_amount);
        self.tx()
            .to(&router)
            .typed(router_proxy::RouterProxy)
            .add_liquidity_base(
                sc_address.clone(),
                token_amount.clone(),
                BigUint::zero(),
                BigUint::zero(),
                owner,
                deadline,
            )
            .egld(base_amount)
            .sync_call();
        self.router_allowance().clear();
    }

    fn base_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (router, pair, base asset)
    #[view(getPoolConfig)]
    fn get_pool_config(&self) -> MultiValue3<ManagedAddress, ManagedAddress, ManagedAddress> {
        (
            self.router_address().get(),
            self.pair_address().get(),
            self.base_asset_address().get(),
        )
            .into()
    }

    #[view(getRouterAllowance)]
    fn get_router_allowance(&self) -> BigUint {
        self.router_allowance().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("routerAddress")]
    fn router_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pairAddress")]
    fn pair_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("baseAssetAddress")]
    fn base_asset_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// What the router may still pull through `transferFrom`. Set right
    /// before each router call and cleared right after.
    #[storage_mapper("routerAllowance")]
    fn router_allowance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("converting")]
    fn converting(&self) -> SingleValueMapper<bool>;
}
