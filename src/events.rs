multiversx_sc::imports!();

use crate::types::WalletRole;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("rebase")]
    fn rebase_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] rate: u64,
        total_supply: &BigUint,
    );

    #[event("feesUpdated")]
    fn fees_updated_event(
        &self,
        #[indexed] liquidity: u64,
        #[indexed] reflection: u64,
        #[indexed] staking: u64,
        #[indexed] marketing: u64,
        total: u64,
    );

    #[event("feeExemptionChanged")]
    fn fee_exemption_event(&self, #[indexed] account: &ManagedAddress, exempt: bool);

    #[event("rebaseExemptionChanged")]
    fn rebase_exemption_event(&self, #[indexed] account: &ManagedAddress, exempt: bool);

    #[event("tradingEnabled")]
    fn trading_enabled_event(&self, #[indexed] timestamp: u64);

    #[event("limitsUpdated")]
    fn limits_updated_event(
        &self,
        #[indexed] max_transaction: &BigUint,
        max_wallet: &BigUint,
    );

    #[event("rebaseScheduleUpdated")]
    fn rebase_schedule_event(&self, #[indexed] frequency: u64, rate: u64);

    #[event("walletUpdated")]
    fn wallet_updated_event(&self, #[indexed] role: WalletRole, address: &ManagedAddress);

    #[event("liquidityConverted")]
    fn liquidity_converted_event(
        &self,
        #[indexed] tokens_swapped: &BigUint,
        #[indexed] base_received: &BigUint,
        tokens_added: &BigUint,
    );
}
