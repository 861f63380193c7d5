use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::GracePeriodUpdated;
use crate::state::{GameConfig, Round};

#[derive(Accounts)]
pub struct UpdateGracePeriod<'info> {
    #[account(
        mut,
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

pub fn handler(ctx: Context<UpdateGracePeriod>, grace_period: i64) -> Result<()> {
    require!(grace_period > 0, ThroneError::InvalidParameter);

    let clock = Clock::get()?;
    ctx.accounts.config.initial_grace_period = grace_period;
    // The running countdown picks up the new window immediately.
    ctx.accounts.round.grace_period = grace_period;

    emit!(GracePeriodUpdated {
        grace_period,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
