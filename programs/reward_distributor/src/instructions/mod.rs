pub mod initialize;
pub mod update_settings;
pub mod add_purchase;
pub mod claim_winner;
pub mod fund;

pub use initialize::*;
pub use update_settings::*;
pub use add_purchase::*;
pub use claim_winner::*;
pub use fund::*;
