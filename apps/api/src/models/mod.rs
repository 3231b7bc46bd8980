pub mod analysis;
pub mod stats;
pub mod user;
