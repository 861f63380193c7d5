use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::FeeParametersUpdated;
use crate::state::GameConfig;

#[derive(Accounts)]
pub struct UpdateFeeParameters<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
        has_one = authority @ ThroneError::Unauthorized,
    )]
    pub config: Account<'info, GameConfig>,

    pub authority: Signer<'info>,
}

/// The live claim fee of the running round is untouched: the new starting
/// fee takes effect at the next reset, the new escalation percentage at the
/// next claim.
pub fn handler(
    ctx: Context<UpdateFeeParameters>,
    initial_claim_fee: u64,
    fee_increase_pct: u8,
) -> Result<()> {
    require!(initial_claim_fee > 0, ThroneError::InvalidParameter);
    require!(fee_increase_pct <= 100, ThroneError::InvalidParameter);

    let clock = Clock::get()?;
    let config = &mut ctx.accounts.config;
    config.initial_claim_fee = initial_claim_fee;
    config.fee_increase_pct = fee_increase_pct;

    emit!(FeeParametersUpdated {
        initial_claim_fee,
        fee_increase_pct,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
