pub mod client;
mod labour;
pub mod types;

pub use client::*;
pub use labour::monthly_summary_path;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
