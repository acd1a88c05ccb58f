mod accumulator;
mod generator;
mod reconstruct;
mod scheme;
mod share;

pub use generator::generate_shares;
pub use reconstruct::reconstruct_secret;
pub use scheme::ShamirScheme;
pub use share::Share;
