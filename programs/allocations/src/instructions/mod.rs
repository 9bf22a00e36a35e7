pub mod initialize;
pub mod deposit_tokens;
pub mod set_wallet;
pub mod set_start_time;
pub mod transfer_ownership;
pub mod grant;
pub mod emit_release_quote;

pub use initialize::*;
pub use deposit_tokens::*;
pub use set_wallet::*;
pub use set_start_time::*;
pub use transfer_ownership::*;
pub use grant::*;
pub use emit_release_quote::*;
