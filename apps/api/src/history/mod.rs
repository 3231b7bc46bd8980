// Analysis history: locally recorded results merged with seeded samples.

pub mod filter;
pub mod handlers;
pub mod merge;
pub mod store;
