use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::ThroneError;
use crate::events::WinningsWithdrawn;
use crate::state::{PendingWinnings, Round, VAULT_SEED};

#[derive(Accounts)]
pub struct WithdrawWinnings<'info> {
    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [PendingWinnings::SEED, winner.key().as_ref()],
        bump = winnings.bump,
    )]
    pub winnings: Account<'info, PendingWinnings>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub winner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawWinnings>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.round.lock()?;

    // The ledger entry is zeroed strictly before lamports move; a failed
    // transfer aborts the instruction and the runtime rolls the entry back.
    let amount = ctx.accounts.winnings.take()?;

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
            to: ctx.accounts.winner.to_account_info(),
        },
        &signer_seeds,
    );
    system_program::transfer(transfer_ctx, amount)
        .map_err(|_| error!(ThroneError::TransferFailed))?;

    emit!(WinningsWithdrawn {
        winner: ctx.accounts.winner.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    ctx.accounts.round.unlock();
    Ok(())
}
