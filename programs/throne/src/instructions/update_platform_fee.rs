use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::PlatformFeeUpdated;
use crate::state::GameConfig;

#[derive(Accounts)]
pub struct UpdatePlatformFee<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
        has_one = authority @ ThroneError::Unauthorized,
    )]
    pub config: Account<'info, GameConfig>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdatePlatformFee>, platform_fee_pct: u8) -> Result<()> {
    require!(platform_fee_pct <= 100, ThroneError::InvalidParameter);

    let clock = Clock::get()?;
    ctx.accounts.config.platform_fee_pct = platform_fee_pct;

    emit!(PlatformFeeUpdated {
        platform_fee_pct,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
