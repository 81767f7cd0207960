/// Number of tokens granted by one faucet airdrop.
pub static AIRDROP_AMOUNT: u64 = 1000;

/// Balance at (and above) which clients should stop offering airdrops.
/// Advisory only: the faucet itself is the final arbiter.
pub static AIRDROP_BALANCE_CEILING: u64 = 1000;

/// Length of a base58-encoded public key string.
pub static PUBLIC_KEY_LENGTH: usize = 44;

/// Length of a base58-encoded transaction signature string.
pub static SIGNATURE_LENGTH: usize = 88;
