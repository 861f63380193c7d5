use anchor_lang::prelude::*;

#[error_code]
pub enum ThroneError {
    #[msg("Caller already holds the throne.")]
    AlreadyHolder,
    #[msg("Round has already ended.")]
    RoundEnded,
    #[msg("Round has not ended yet.")]
    RoundNotEnded,
    #[msg("Payment is below the current claim fee.")]
    InsufficientPayment,
    #[msg("No claim has occurred this round.")]
    NoHolderYet,
    #[msg("Grace period has not expired.")]
    GracePeriodNotExpired,
    #[msg("Only the game authority can perform this action.")]
    Unauthorized,
    #[msg("Parameter is zero or out of range.")]
    InvalidParameter,
    #[msg("Nothing to withdraw.")]
    NothingToWithdraw,
    #[msg("Vault transfer failed.")]
    TransferFailed,
    #[msg("Reentrant call rejected.")]
    ReentrantCall,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
