use anchor_lang::prelude::*;

/// Lifetime per-player counters. Never reset between rounds.
#[account]
#[derive(InitSpace)]
pub struct PlayerStats {
    /// Wallet these stats belong to.
    pub authority: Pubkey,
    /// Successful claims across all rounds.
    pub claim_count: u64,
    /// Rounds this player has won.
    pub rounds_won: u32,
    /// Cumulative lamports paid in claims.
    pub total_spent: u64,
    /// Cumulative lamports credited as prizes.
    pub total_won: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PlayerStats {
    pub const SEED: &'static [u8] = b"player";
}
