/// Seed for the pool state PDA ["pool"]
/// - Defined by the distributor crate, which derives the pool's signing
///   address from the same value
pub use reward_distributor::constants::POOL_SEED;
