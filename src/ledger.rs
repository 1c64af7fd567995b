multiversx_sc::imports!();

use crate::errors::ERR_INSUFFICIENT_BALANCE;

/// Fixed burn sink: all zeroes except a trailing `0xdead`. Nothing can ever
/// be moved out of it because no key controls it.
const BURN_SINK: [u8; 32] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xde, 0xad,
];

/// Balance ledger. The zero address is the mint origin; crediting the burn
/// sink takes tokens out of circulation but leaves total supply untouched.
#[multiversx_sc::module]
pub trait LedgerModule: crate::events::EventsModule {
    /// The only primitive that moves balances.
    fn debit_credit(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }

        if from.is_zero() {
            self.total_supply().update(|supply| *supply += amount);
        } else {
            let balance = self.balance(from).get();
            require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);
            self.balance(from).set(balance - amount);
        }

        self.balance(to).update(|balance| *balance += amount);
        self.transfer_event(from, to, amount);
    }

    fn burn_sink(&self) -> ManagedAddress {
        ManagedAddress::new_from_bytes(&BURN_SINK)
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balance(account).get()
    }

    #[view(getTotalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    /// Total supply minus whatever has been parked in the burn sink.
    #[view(getCirculatingSupply)]
    fn get_circulating_supply(&self) -> BigUint {
        let burned = self.balance(&self.burn_sink()).get();
        self.total_supply().get() - burned
    }

    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;
}
