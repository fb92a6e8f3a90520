use alloy_primitives::{Address, address};

/// Component name used in logs and metrics of the host indexer.
pub const COMPONENT_NAME: &str = "bsciotex";

/// Env var expected to hold the BSC RPC endpoint URL.
pub const NODE_URL_KEY: &str = "BSC_NODE_URL";

/// TokenCashier contract on BSC, emits deposit events for the bridge.
pub const TOKEN_CASHIER: Address = address!("0x797f1465796fd89ea7135e76dbc7cdb2d9613fd1");

/// TokenSafe contract on BSC, holds bridged assets.
pub const TOKEN_SAFE: Address = address!("0xc2e0f31d739cb3153ba5760a203b3bd7c27f0d7a");

/// Registry of standard (lock/unlock) tokens.
pub const STANDARD_TOKEN_LIST: Address = address!("0x0d793f4d4287265b9bda86b7a4083193e8743b34");

/// Registry of mintable (mint/burn) tokens.
pub const MINTABLE_TOKEN_LIST: Address = address!("0xa6ae9312d0aa3cc74d969fcd4806d7729a321ee3");

/// Block the TokenCashier contract was deployed at; scanning starts here.
pub const TOKEN_CASHIER_START_BLOCK: u64 = 5_179_731;

/// Block the TokenSafe contract was deployed at; scanning starts here.
pub const TOKEN_SAFE_START_BLOCK: u64 = 5_179_717;

/// Maximum blocks of collected transaction data buffered before committing to the tsdb.
pub const BLOCK_LIMIT_BEFORE_COMMIT: u64 = 4999;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn component_identity() {
        assert_eq!(COMPONENT_NAME, "bsciotex");
        assert_eq!(NODE_URL_KEY, "BSC_NODE_URL");
    }

    #[test]
    fn start_blocks() {
        assert_eq!(TOKEN_CASHIER_START_BLOCK, 5_179_731);
        assert_eq!(TOKEN_SAFE_START_BLOCK, 5_179_717);
        assert_eq!(BLOCK_LIMIT_BEFORE_COMMIT, 4999);
    }

    #[test]
    fn addresses_round_trip() {
        for addr in [
            TOKEN_CASHIER,
            TOKEN_SAFE,
            STANDARD_TOKEN_LIST,
            MINTABLE_TOKEN_LIST,
        ] {
            let canonical = addr.to_checksum(None);
            assert_eq!(Address::from_str(&canonical).unwrap(), addr);
        }
    }

    #[test]
    fn addresses_are_distinct() {
        let addrs = [
            TOKEN_CASHIER,
            TOKEN_SAFE,
            STANDARD_TOKEN_LIST,
            MINTABLE_TOKEN_LIST,
        ];
        for (i, a) in addrs.iter().enumerate() {
            for b in &addrs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
