use anchor_lang::prelude::*;

use crate::errors::ThroneError;

/// Winner-side ledger entry: lamports a player may withdraw from the vault.
/// Credited at settlement, debited to zero on withdrawal.
#[account]
#[derive(InitSpace)]
pub struct PendingWinnings {
    /// Wallet entitled to this balance.
    pub authority: Pubkey,
    /// Withdrawable lamports.
    pub amount: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PendingWinnings {
    pub const SEED: &'static [u8] = b"winnings";

    /// Move the full balance out of the ledger. The entry is zeroed before
    /// any lamports leave the vault, so a reentrant observer can never see a
    /// stale nonzero balance.
    pub fn take(&mut self) -> Result<u64> {
        require!(self.amount > 0, ThroneError::NothingToWithdraw);
        let amount = self.amount;
        self.amount = 0;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_is_single_shot() {
        let mut winnings = PendingWinnings {
            authority: Pubkey::new_unique(),
            amount: 199_500_000,
            bump: 254,
        };

        assert_eq!(winnings.take().unwrap(), 199_500_000);
        assert_eq!(winnings.amount, 0);
        let err = winnings.take().unwrap_err();
        assert_eq!(err, ThroneError::NothingToWithdraw.into());
    }
}
