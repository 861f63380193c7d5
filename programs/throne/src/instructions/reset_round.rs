use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::RoundReset;
use crate::state::{GameConfig, Round};

#[derive(Accounts)]
pub struct ResetRound<'info> {
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
        has_one = authority @ ThroneError::Unauthorized,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<ResetRound>) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.config;

    let round = &mut ctx.accounts.round;
    round.reset(
        clock.unix_timestamp,
        config.initial_claim_fee,
        config.initial_grace_period,
    )?;

    emit!(RoundReset {
        round: round.round,
        claim_fee: round.claim_fee,
        grace_period: round.grace_period,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
