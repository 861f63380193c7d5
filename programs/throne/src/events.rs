use anchor_lang::prelude::*;

#[event]
pub struct ThroneClaimed {
    pub round: u64,
    pub holder: Pubkey,
    pub payment: u64,
    /// Fee the next claimant must pay.
    pub claim_fee: u64,
    pub pot: u64,
    pub timestamp: i64,
}

#[event]
pub struct RoundSettled {
    pub round: u64,
    pub winner: Pubkey,
    pub prize: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinningsWithdrawn {
    pub winner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PlatformFeesWithdrawn {
    pub treasury: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct RoundReset {
    /// Number of the round that just started.
    pub round: u64,
    pub claim_fee: u64,
    pub grace_period: i64,
    pub timestamp: i64,
}

#[event]
pub struct GracePeriodUpdated {
    pub grace_period: i64,
    pub timestamp: i64,
}

#[event]
pub struct FeeParametersUpdated {
    pub initial_claim_fee: u64,
    pub fee_increase_pct: u8,
    pub timestamp: i64,
}

#[event]
pub struct PlatformFeeUpdated {
    pub platform_fee_pct: u8,
    pub timestamp: i64,
}
