use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod tests;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod throne {
    use super::*;

    /// One-time game setup; validates every fee parameter and starts round 1.
    pub fn initialize(
        ctx: Context<Initialize>,
        initial_claim_fee: u64,
        grace_period: i64,
        fee_increase_pct: u8,
        platform_fee_pct: u8,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            initial_claim_fee,
            grace_period,
            fee_increase_pct,
            platform_fee_pct,
        )
    }

    /// Pay at least the current claim fee to seize the throne and restart
    /// the countdown. The sitting holder may not re-claim their own throne.
    pub fn claim_throne(ctx: Context<ClaimThrone>, payment: u64) -> Result<()> {
        instructions::claim_throne::handler(ctx, payment)
    }

    /// Settle a round whose grace period has expired: the sitting holder is
    /// credited the pot. Open to anyone.
    pub fn declare_winner(ctx: Context<DeclareWinner>) -> Result<()> {
        instructions::declare_winner::handler(ctx)
    }

    /// Winner withdraws their credited prize from the vault.
    pub fn withdraw_winnings(ctx: Context<WithdrawWinnings>) -> Result<()> {
        instructions::withdraw_winnings::handler(ctx)
    }

    /// Authority withdraws accrued platform fees to the treasury.
    pub fn withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>) -> Result<()> {
        instructions::withdraw_platform_fees::handler(ctx)
    }

    /// Authority starts the next round after settlement.
    pub fn reset_round(ctx: Context<ResetRound>) -> Result<()> {
        instructions::reset_round::handler(ctx)
    }

    /// Authority updates the inactivity window. Applies to the running
    /// round immediately.
    pub fn update_grace_period(ctx: Context<UpdateGracePeriod>, grace_period: i64) -> Result<()> {
        instructions::update_grace_period::handler(ctx, grace_period)
    }

    /// Authority updates the starting fee and escalation percentage for
    /// future rounds.
    pub fn update_fee_parameters(
        ctx: Context<UpdateFeeParameters>,
        initial_claim_fee: u64,
        fee_increase_pct: u8,
    ) -> Result<()> {
        instructions::update_fee_parameters::handler(ctx, initial_claim_fee, fee_increase_pct)
    }

    /// Authority updates the platform cut taken from each claim.
    pub fn update_platform_fee(ctx: Context<UpdatePlatformFee>, platform_fee_pct: u8) -> Result<()> {
        instructions::update_platform_fee::handler(ctx, platform_fee_pct)
    }
}
