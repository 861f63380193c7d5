use anchor_lang::prelude::*;

use crate::errors::ThroneError;

#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    /// Admin who can update parameters, reset rounds and withdraw fees.
    pub authority: Pubkey,
    /// Wallet that receives platform fee withdrawals.
    pub treasury: Pubkey,
    /// Claim fee each round starts from, in lamports.
    pub initial_claim_fee: u64,
    /// Grace period each round starts from, in seconds.
    pub initial_grace_period: i64,
    /// Percentage added to the claim fee after every claim (0-100).
    pub fee_increase_pct: u8,
    /// Percentage of each payment retained for the platform (0-100).
    pub platform_fee_pct: u8,
    /// Platform fees accrued and not yet withdrawn, in lamports.
    pub fees_balance: u64,
    /// Lifetime lamports accepted through claims.
    pub total_volume: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GameConfig {
    pub const SEED: &'static [u8] = b"config";

    /// Move the accrued platform fees out of the ledger. The balance is
    /// zeroed before any lamports leave the vault.
    pub fn take_fees(&mut self) -> Result<u64> {
        require!(self.fees_balance > 0, ThroneError::NothingToWithdraw);
        let amount = self.fees_balance;
        self.fees_balance = 0;
        Ok(amount)
    }
}
