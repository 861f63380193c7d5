use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::ThroneError;
use crate::events::PlatformFeesWithdrawn;
use crate::state::{GameConfig, Round, VAULT_SEED};

#[derive(Accounts)]
pub struct WithdrawPlatformFees<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
        has_one = authority @ ThroneError::Unauthorized,
        has_one = treasury @ ThroneError::Unauthorized,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub authority: Signer<'info>,

    /// CHECK: Treasury wallet configured at initialization.
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawPlatformFees>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.round.lock()?;

    // Zeroed before the transfer, same ordering as winner withdrawals.
    let amount = ctx.accounts.config.take_fees()?;

    require!(
        ctx.accounts.vault.lamports() >= amount,
        ThroneError::TransferFailed
    );

    let vault_bump = ctx.bumps.vault;
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &[vault_bump]];
    let signer_seeds = [vault_seeds];
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
        },
        &signer_seeds,
    );
    system_program::transfer(transfer_ctx, amount)
        .map_err(|_| error!(ThroneError::TransferFailed))?;

    emit!(PlatformFeesWithdrawn {
        treasury: ctx.accounts.treasury.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    ctx.accounts.round.unlock();
    Ok(())
}
