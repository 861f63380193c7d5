pub mod claim_throne;
pub mod declare_winner;
pub mod initialize;
pub mod reset_round;
pub mod update_fee_parameters;
pub mod update_grace_period;
pub mod update_platform_fee;
pub mod withdraw_platform_fees;
pub mod withdraw_winnings;

pub use claim_throne::*;
pub use declare_winner::*;
pub use initialize::*;
pub use reset_round::*;
pub use update_fee_parameters::*;
pub use update_grace_period::*;
pub use update_platform_fee::*;
pub use withdraw_platform_fees::*;
pub use withdraw_winnings::*;
