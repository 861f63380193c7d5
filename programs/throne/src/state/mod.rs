pub mod config;
pub mod player;
pub mod round;
pub mod winnings;

pub use config::*;
pub use player::*;
pub use round::*;
pub use winnings::*;

/// Seed of the system-owned vault PDA that custodies every lamport the game
/// holds. Bare transfers to it are accepted by the runtime without touching
/// game state.
pub const VAULT_SEED: &[u8] = b"vault";
