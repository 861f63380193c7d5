use anchor_lang::prelude::*;

use crate::errors::ThroneError;

#[account]
#[derive(InitSpace)]
pub struct Round {
    /// Current throne holder (None until the first claim of the round).
    pub holder: Option<Pubkey>,
    /// Unix timestamp of the last successful claim (round start if none yet).
    pub last_claim_time: i64,
    /// Inactivity window in seconds after which the round can be settled.
    pub grace_period: i64,
    /// Prize accrued this round, in lamports.
    pub pot: u64,
    /// Minimum payment for the next claim, in lamports.
    pub claim_fee: u64,
    /// True once a winner has been declared for this round.
    pub ended: bool,
    /// Round counter, starts at 1.
    pub round: u64,
    /// Lifetime claim counter across all rounds.
    pub total_claims: u64,
    /// Reentrancy guard held across vault payouts.
    pub locked: bool,
    /// PDA bump seed.
    pub bump: u8,
}

/// Lamport split produced by a successful claim.
#[derive(Debug)]
pub struct ClaimSplit {
    pub platform_cut: u64,
    pub pot_contribution: u64,
}

impl Round {
    pub const SEED: &'static [u8] = b"round";

    /// Seconds until the round becomes settleable. Zero once the round has
    /// ended or the grace period has fully elapsed.
    pub fn remaining_time(&self, now: i64) -> i64 {
        if self.ended {
            return 0;
        }
        let deadline = self.last_claim_time.saturating_add(self.grace_period);
        if now >= deadline {
            0
        } else {
            deadline - now
        }
    }

    /// Seat a new holder: split the payment, restart the countdown and
    /// escalate the fee for the next claimant. Percentage math rounds down,
    /// so the platform cut never exceeds the payment and rounding favours
    /// the pot.
    pub fn claim(
        &mut self,
        caller: Pubkey,
        payment: u64,
        now: i64,
        fee_increase_pct: u8,
        platform_fee_pct: u8,
    ) -> Result<ClaimSplit> {
        require!(!self.ended, ThroneError::RoundEnded);
        require!(payment >= self.claim_fee, ThroneError::InsufficientPayment);
        // Strict inequality: the sitting holder may not re-claim their own
        // throne, anyone else may.
        require!(self.holder != Some(caller), ThroneError::AlreadyHolder);

        let platform_cut = payment
            .checked_mul(platform_fee_pct as u64)
            .ok_or(ThroneError::MathOverflow)?
            .checked_div(100)
            .ok_or(ThroneError::MathOverflow)?
            .min(payment);
        let pot_contribution = payment - platform_cut;

        self.pot = self
            .pot
            .checked_add(pot_contribution)
            .ok_or(ThroneError::MathOverflow)?;
        self.holder = Some(caller);
        self.last_claim_time = now;
        self.total_claims = self
            .total_claims
            .checked_add(1)
            .ok_or(ThroneError::MathOverflow)?;

        // Fee for the *next* claimant. Floor division keeps the fee flat
        // whenever the increase rounds to zero.
        let increase = self
            .claim_fee
            .checked_mul(fee_increase_pct as u64)
            .ok_or(ThroneError::MathOverflow)?
            .checked_div(100)
            .ok_or(ThroneError::MathOverflow)?;
        self.claim_fee = self
            .claim_fee
            .checked_add(increase)
            .ok_or(ThroneError::MathOverflow)?;

        Ok(ClaimSplit {
            platform_cut,
            pot_contribution,
        })
    }

    /// Settle the round: the sitting holder becomes the winner and the pot
    /// is returned for crediting. Sole transition into `ended`. The grace
    /// period must be strictly exceeded.
    pub fn settle(&mut self, now: i64) -> Result<(Pubkey, u64)> {
        require!(!self.ended, ThroneError::RoundEnded);
        let winner = self.holder.ok_or(ThroneError::NoHolderYet)?;
        let elapsed = now.saturating_sub(self.last_claim_time);
        require!(
            elapsed > self.grace_period,
            ThroneError::GracePeriodNotExpired
        );

        self.ended = true;
        let prize = self.pot;
        self.pot = 0;
        Ok((winner, prize))
    }

    /// Start the next round from the configured initial parameters.
    /// Lifetime counters are untouched.
    pub fn reset(
        &mut self,
        now: i64,
        initial_claim_fee: u64,
        initial_grace_period: i64,
    ) -> Result<()> {
        require!(self.ended, ThroneError::RoundNotEnded);

        self.holder = None;
        self.last_claim_time = now;
        self.pot = 0;
        self.claim_fee = initial_claim_fee;
        self.grace_period = initial_grace_period;
        self.ended = false;
        self.round = self
            .round
            .checked_add(1)
            .ok_or(ThroneError::MathOverflow)?;
        Ok(())
    }

    /// Acquire the reentrancy guard for a vault payout. Released on the
    /// success path via [`Round::unlock`]; a failed instruction rolls the
    /// flag back with the rest of the account.
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, ThroneError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }
}
