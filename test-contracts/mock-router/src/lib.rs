#![no_std]

multiversx_sc::imports!();

pub mod token_proxy;

/// Deterministic stand-in for the external router: swaps at a fixed
/// price out of its own EGLD reserve and books deposits instead of
/// minting pool tokens.
#[multiversx_sc::contract]
pub trait MockRouter {
    #[init]
    fn init(
        &self,
        pair_address: ManagedAddress,
        base_asset_address: ManagedAddress,
        base_per_token: u64,
    ) {
        self.pair_address().set(&pair_address);
        self.base_asset_address().set(&base_asset_address);
        self.base_per_token().set(base_per_token);
    }

    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {}

    /// The calling token contract is the input side of the path.
    #[endpoint(swapExactTokensForBase)]
    fn swap_exact_tokens_for_base(
        &self,
        amount_in: BigUint,
        amount_out_min: BigUint,
        path: ManagedVec<ManagedAddress>,
        recipient: ManagedAddress,
        _deadline: u64,
    ) {
        require!(path.len() == 2, "Invalid path");
        let token = self.blockchain().get_caller();
        let own_address = self.blockchain().get_sc_address();

        self.tx()
            .to(&token)
            .typed(token_proxy::PolicyTokenProxy)
            .transfer_from(&token, &own_address, &amount_in)
            .sync_call();

        let amount_out = &amount_in * self.base_per_token().get();
        require!(amount_out >= amount_out_min, "Insufficient output");
        self.swapped_tokens().update(|total| *total += &amount_in);

        self.tx().to(&recipient).egld(&amount_out).transfer();
    }

    /// Pulls the token side straight into the pair and credits the
    /// recipient one pool unit per token deposited.
    #[payable("EGLD")]
    #[endpoint(addLiquidityBase)]
    fn add_liquidity_base(
        &self,
        token: ManagedAddress,
        token_amount: BigUint,
        min_token: BigUint,
        min_base: BigUint,
        recipient: ManagedAddress,
        _deadline: u64,
    ) {
        let base_amount = self.call_value().egld_value().clone_value();
        require!(token_amount >= min_token, "Insufficient token amount");
        require!(base_amount >= min_base, "Insufficient base amount");

        self.tx()
            .to(&token)
            .typed(token_proxy::PolicyTokenProxy)
            .transfer_from(&token, self.pair_address().get(), &token_amount)
            .sync_call();

        self.deposited_tokens().update(|total| *total += &token_amount);
        self.deposited_base().update(|total| *total += &base_amount);
        self.pool_units(&recipient)
            .update(|units| *units += &token_amount);
    }

    #[view(getPair)]
    fn get_pair(&self, _token: ManagedAddress) -> ManagedAddress {
        self.pair_address().get()
    }

    #[view(getBaseAsset)]
    fn get_base_asset(&self) -> ManagedAddress {
        self.base_asset_address().get()
    }

    #[storage_mapper("pairAddress")]
    fn pair_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("baseAssetAddress")]
    fn base_asset_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("basePerToken")]
    fn base_per_token(&self) -> SingleValueMapper<u64>;

    #[view(getSwappedTokens)]
    #[storage_mapper("swappedTokens")]
    fn swapped_tokens(&self) -> SingleValueMapper<BigUint>;

    #[view(getDepositedTokens)]
    #[storage_mapper("depositedTokens")]
    fn deposited_tokens(&self) -> SingleValueMapper<BigUint>;

    #[view(getDepositedBase)]
    #[storage_mapper("depositedBase")]
    fn deposited_base(&self) -> SingleValueMapper<BigUint>;

    #[view(getPoolUnits)]
    #[storage_mapper("poolUnits")]
    fn pool_units(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
