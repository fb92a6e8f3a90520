use crate::constants::{
    MINTABLE_TOKEN_LIST, STANDARD_TOKEN_LIST, TOKEN_CASHIER, TOKEN_CASHIER_START_BLOCK, TOKEN_SAFE,
    TOKEN_SAFE_START_BLOCK,
};
use alloy_primitives::Address;

/// A contract the host indexer scans, with the block height to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractWatch {
    pub address: Address,
    pub start_block: u64,
}

/// The contracts whose events the host indexer scans, paired with their
/// deployment heights.
pub fn watched_contracts() -> [ContractWatch; 2] {
    [
        ContractWatch {
            address: TOKEN_CASHIER,
            start_block: TOKEN_CASHIER_START_BLOCK,
        },
        ContractWatch {
            address: TOKEN_SAFE,
            start_block: TOKEN_SAFE_START_BLOCK,
        },
    ]
}

/// Token registries the host consults. These are lookup contracts, not scan
/// targets, so no start block is attached.
pub fn token_lists() -> [Address; 2] {
    [STANDARD_TOKEN_LIST, MINTABLE_TOKEN_LIST]
}
