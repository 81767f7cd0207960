use ed25519_dalek::{Signer as _, SigningKey};

use lamport_protected::Protected;

/// Result type for account-related operations that can fail.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// The wallet account: one keypair, identified on-chain by the base58
/// encoding of its public key.
pub struct Account {
    /// Base58-encoded public key.
    pub public_key: String,
    signing_key: SigningKey,
}

impl Account {
    /// Sign a payload with the account key, returning the base58
    /// signature string.
    pub fn sign(&self, payload: &[u8]) -> String {
        let signature = self.signing_key.sign(payload);

        bs58::encode(signature.to_bytes()).into_string()
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "Account({})", self.public_key)
    }
}

/// Build an account from the configured secret material.
///
/// The secret is the 32-byte signing key seed; anything else is rejected
/// so a truncated or mistyped key can never silently produce a different
/// identity.
pub fn gen_account(secret: &Protected) -> Result<Account> {
    let seed: [u8; 32] = secret.as_ref().try_into().map_err(|_| {
        anyhow::anyhow!("account secret key must be 32 bytes, got {}", secret.len())
    })?;
    let signing_key = SigningKey::from_bytes(&seed);
    let public_key = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();

    Ok(Account {
        public_key,
        signing_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_deterministic_for_a_seed() {
        let secret = Protected::from(vec![42u8; 32]);
        let one = gen_account(&secret).unwrap();
        let two = gen_account(&secret).unwrap();

        assert_eq!(one.public_key, two.public_key);
        assert_eq!(one.sign(b"payload"), two.sign(b"payload"));
    }

    #[test]
    fn short_secret_is_rejected() {
        let secret = Protected::from(vec![42u8; 31]);

        assert!(gen_account(&secret).is_err());
    }

    #[test]
    fn debug_output_shows_only_the_public_key() {
        let secret = Protected::from(vec![42u8; 32]);
        let account = gen_account(&secret).unwrap();

        assert_eq!(format!("{:?}", account), format!("Account({})", account.public_key));
    }
}
