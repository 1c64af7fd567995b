use multiversx_sc::proxy_imports::*;

pub struct RouterProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for RouterProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = RouterProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        RouterProxyMethods { wrapped_tx: tx }
    }
}

pub struct RouterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> RouterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Pulls `amount_in` tokens through `transferFrom` and pays the base
    /// asset to `recipient` as EGLD.
    pub fn swap_exact_tokens_for_base<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        amount_in: Arg0,
        amount_out_min: Arg1,
        path: Arg2,
        recipient: Arg3,
        deadline: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("swapExactTokensForBase")
            .argument(&amount_in)
            .argument(&amount_out_min)
            .argument(&path)
            .argument(&recipient)
            .argument(&deadline)
            .original_result()
    }

    /// Payable in EGLD: the attached value is the base-asset side of the
    /// deposit.
    pub fn add_liquidity_base<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<u64>,
    >(
        self,
        token: Arg0,
        token_amount: Arg1,
        min_token: Arg2,
        min_base: Arg3,
        recipient: Arg4,
        deadline: Arg5,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("addLiquidityBase")
            .argument(&token)
            .argument(&token_amount)
            .argument(&min_token)
            .argument(&min_base)
            .argument(&recipient)
            .argument(&deadline)
            .original_result()
    }

    pub fn get_pair<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPair")
            .argument(&token)
            .original_result()
    }

    pub fn get_base_asset(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBaseAsset")
            .original_result()
    }
}
