pub mod config;
pub mod constants;
pub mod logging;
pub mod watchlist;

pub use config::{Config, node_url};
pub use watchlist::{ContractWatch, token_lists, watched_contracts};
