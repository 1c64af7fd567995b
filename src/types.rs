multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Hard ceiling on the sum of all fee components, in whole percent.
pub const MAX_TOTAL_FEES: u64 = 25;

/// Fee percentages are applied against this denominator.
pub const FEE_DENOMINATOR: u64 = 100;

// ============================================================
// Fee Schedule: four components plus their cached sum
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct FeeSchedule {
    pub liquidity: u64,
    pub reflection: u64,
    pub staking: u64,
    pub marketing: u64,
    /// Always equal to the sum of the four components.
    pub total: u64,
}

impl FeeSchedule {
    /// Builds a schedule and derives `total`. Saturates instead of wrapping so
    /// that absurd inputs still fail the ceiling check.
    pub fn new(liquidity: u64, reflection: u64, staking: u64, marketing: u64) -> Self {
        let total = liquidity
            .saturating_add(reflection)
            .saturating_add(staking)
            .saturating_add(marketing);
        FeeSchedule {
            liquidity,
            reflection,
            staking,
            marketing,
            total,
        }
    }

    pub fn is_within_ceiling(&self) -> bool {
        self.total <= MAX_TOTAL_FEES
    }

    /// Truncating per-leg split of `amount`. `total` is computed from the
    /// schedule's own `total`, not by adding the legs, so the net amount
    /// matches the schedule exactly.
    pub fn split<M: ManagedTypeApi>(&self, amount: &BigUint<M>) -> FeeBreakdown<M> {
        FeeBreakdown {
            liquidity: (amount * self.liquidity) / FEE_DENOMINATOR,
            reflection: (amount * self.reflection) / FEE_DENOMINATOR,
            staking: (amount * self.staking) / FEE_DENOMINATOR,
            marketing: (amount * self.marketing) / FEE_DENOMINATOR,
            total: (amount * self.total) / FEE_DENOMINATOR,
        }
    }
}

/// Per-transfer fee legs, in token units.
#[derive(Clone, Debug)]
pub struct FeeBreakdown<M: ManagedTypeApi> {
    pub liquidity: BigUint<M>,
    pub reflection: BigUint<M>,
    pub staking: BigUint<M>,
    pub marketing: BigUint<M>,
    pub total: BigUint<M>,
}

// ============================================================
// Trading Gate: one-way Disabled → Enabled
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TradingState {
    Disabled,
    Enabled,
}

impl TradingState {
    pub fn is_enabled(&self) -> bool {
        *self == TradingState::Enabled
    }
}

// ============================================================
// Wallet roles that the controller may repoint
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum WalletRole {
    Marketing,
    Staking,
}
