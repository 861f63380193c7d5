use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::RoundSettled;
use crate::state::{PendingWinnings, PlayerStats, Round};

#[derive(Accounts)]
pub struct DeclareWinner<'info> {
    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    /// CHECK: The sitting holder; must match `round.holder`.
    #[account(
        constraint = round.holder == Some(winner.key()) @ ThroneError::NoHolderYet,
    )]
    pub winner: UncheckedAccount<'info>,

    /// Winner-side ledger entry, created on a player's first win. The crank
    /// pays the rent; settlement stays open to anyone.
    #[account(
        init_if_needed,
        payer = crank,
        space = 8 + PendingWinnings::INIT_SPACE,
        seeds = [PendingWinnings::SEED, winner.key().as_ref()],
        bump,
    )]
    pub winnings: Account<'info, PendingWinnings>,

    /// Stats exist for anyone who has ever claimed, so for any holder.
    #[account(
        mut,
        seeds = [PlayerStats::SEED, winner.key().as_ref()],
        bump = winner_stats.bump,
    )]
    pub winner_stats: Account<'info, PlayerStats>,

    #[account(mut)]
    pub crank: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DeclareWinner>) -> Result<()> {
    let clock = Clock::get()?;

    let round = &mut ctx.accounts.round;
    let (winner_key, prize) = round.settle(clock.unix_timestamp)?;

    let winnings = &mut ctx.accounts.winnings;
    winnings.authority = winner_key;
    winnings.bump = ctx.bumps.winnings;
    winnings.amount = winnings
        .amount
        .checked_add(prize)
        .ok_or(ThroneError::MathOverflow)?;

    let stats = &mut ctx.accounts.winner_stats;
    stats.rounds_won = stats
        .rounds_won
        .checked_add(1)
        .ok_or(ThroneError::MathOverflow)?;
    stats.total_won = stats
        .total_won
        .checked_add(prize)
        .ok_or(ThroneError::MathOverflow)?;

    emit!(RoundSettled {
        round: round.round,
        winner: winner_key,
        prize,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
