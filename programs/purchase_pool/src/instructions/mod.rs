pub mod initialize;
pub mod call_add_purchase;

pub use initialize::*;
pub use call_add_purchase::*;
