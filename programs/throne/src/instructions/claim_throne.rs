use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::ThroneError;
use crate::events::ThroneClaimed;
use crate::state::{GameConfig, PlayerStats, Round, VAULT_SEED};

#[derive(Accounts)]
pub struct ClaimThrone<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerStats::INIT_SPACE,
        seeds = [PlayerStats::SEED, player.key().as_ref()],
        bump,
    )]
    pub stats: Account<'info, PlayerStats>,

    /// Vault PDA holding the pot and accrued fees.
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimThrone>, payment: u64) -> Result<()> {
    let clock = Clock::get()?;
    let player_key = ctx.accounts.player.key();

    let round = &mut ctx.accounts.round;
    let config = &mut ctx.accounts.config;

    let split = round.claim(
        player_key,
        payment,
        clock.unix_timestamp,
        config.fee_increase_pct,
        config.platform_fee_pct,
    )?;

    // Collect the payment only after every precondition has passed.
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.player.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, payment)?;

    config.fees_balance = config
        .fees_balance
        .checked_add(split.platform_cut)
        .ok_or(ThroneError::MathOverflow)?;
    config.total_volume = config
        .total_volume
        .checked_add(payment)
        .ok_or(ThroneError::MathOverflow)?;

    let stats = &mut ctx.accounts.stats;
    stats.authority = player_key;
    stats.bump = ctx.bumps.stats;
    stats.claim_count = stats
        .claim_count
        .checked_add(1)
        .ok_or(ThroneError::MathOverflow)?;
    stats.total_spent = stats
        .total_spent
        .checked_add(payment)
        .ok_or(ThroneError::MathOverflow)?;

    emit!(ThroneClaimed {
        round: round.round,
        holder: player_key,
        payment,
        claim_fee: round.claim_fee,
        pot: round.pot,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
