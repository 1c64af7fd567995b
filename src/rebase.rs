multiversx_sc::imports!();

use crate::registry::REBASE_RATE_DENOMINATOR;

#[multiversx_sc::module]
pub trait RebaseModule:
    crate::ledger::LedgerModule
    + crate::registry::PolicyRegistryModule
    + crate::events::EventsModule
{
    fn is_rebase_due(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        let next = self
            .last_rebase_time()
            .get()
            .saturating_add(self.rebase_frequency().get());
        now >= next
    }

    /// Mints `supply * rate / 1000` to the contract and immediately sends it
    /// to the burn sink. Holders gain only through the supply increase; there
    /// is no per-holder credit.
    fn fire_rebase(&self) {
        let supply = self.total_supply().get();
        if supply == 0u64 {
            return;
        }

        let now = self.blockchain().get_block_timestamp();
        let rate = self.rebase_rate().get();
        let rebase_amount = (&supply * rate) / REBASE_RATE_DENOMINATOR;

        let sc_address = self.blockchain().get_sc_address();
        self.debit_credit(&ManagedAddress::zero(), &sc_address, &rebase_amount);
        self.redistribute(&sc_address, &rebase_amount);

        // advanced even when the minted amount truncates to zero
        self.last_rebase_time().set(now);
        self.rebase_event(now, rate, &self.total_supply().get());
    }

    /// Burn-based stand-in for pro-rata reflection: the amount goes to the
    /// burn sink, raising every remaining holder's share of circulation.
    fn redistribute(&self, holder: &ManagedAddress, amount: &BigUint) {
        self.debit_credit(holder, &self.burn_sink(), amount);
    }
}
