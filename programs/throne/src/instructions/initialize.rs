use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::state::{GameConfig, Round};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GameConfig::SEED],
        bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + Round::INIT_SPACE,
        seeds = [Round::SEED],
        bump,
    )]
    pub round: Account<'info, Round>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Treasury wallet that receives platform fees.
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    initial_claim_fee: u64,
    grace_period: i64,
    fee_increase_pct: u8,
    platform_fee_pct: u8,
) -> Result<()> {
    require!(initial_claim_fee > 0, ThroneError::InvalidParameter);
    require!(grace_period > 0, ThroneError::InvalidParameter);
    require!(fee_increase_pct <= 100, ThroneError::InvalidParameter);
    require!(platform_fee_pct <= 100, ThroneError::InvalidParameter);

    let clock = Clock::get()?;

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.treasury = ctx.accounts.treasury.key();
    config.initial_claim_fee = initial_claim_fee;
    config.initial_grace_period = grace_period;
    config.fee_increase_pct = fee_increase_pct;
    config.platform_fee_pct = platform_fee_pct;
    config.fees_balance = 0;
    config.total_volume = 0;
    config.bump = ctx.bumps.config;

    // Round 1 starts immediately; the countdown runs from initialization
    // until the first claim restarts it.
    let round = &mut ctx.accounts.round;
    round.holder = None;
    round.last_claim_time = clock.unix_timestamp;
    round.grace_period = grace_period;
    round.pot = 0;
    round.claim_fee = initial_claim_fee;
    round.ended = false;
    round.round = 1;
    round.total_claims = 0;
    round.locked = false;
    round.bump = ctx.bumps.round;

    msg!(
        "Game initialized! Claim fee: {} lamports, grace period: {}s",
        initial_claim_fee,
        grace_period
    );

    Ok(())
}
