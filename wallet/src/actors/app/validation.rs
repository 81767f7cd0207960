//! Validation of the free-text fields a wallet client can submit.
//!
//! The field validators are pure: they map the raw input (plus, for the
//! amount, the current balance ceiling) to a verdict and, on success, the
//! typed value. Surfacing the verdict is entirely up to the caller.

use crate::constants;
use crate::model::Verdict;

/// A list of errors. An error is a pair of (field, error msg).
pub type ValidationErrors = Vec<(String, String)>;

/// Create an error message associated to a field name.
pub fn field_error<F: ToString, M: ToString>(field: F, msg: M) -> ValidationErrors {
    vec![(field.to_string(), msg.to_string())]
}

/// Combine two Results but accumulate their errors.
pub fn combine_field_errors<A, B, C, F>(
    res1: std::result::Result<A, ValidationErrors>,
    res2: std::result::Result<B, ValidationErrors>,
    combinator: F,
) -> std::result::Result<C, ValidationErrors>
where
    F: FnOnce(A, B) -> C,
{
    match (res1, res2) {
        (Err(mut err1), Err(err2)) => {
            err1.extend(err2);
            Err(err1)
        }
        (Err(err1), _) => Err(err1),
        (_, Err(err2)) => Err(err2),
        (Ok(a), Ok(b)) => Ok(combinator(a, b)),
    }
}

/// Outcome of validating one input field. `value` is present only when
/// the verdict is `Success`.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    pub status: Verdict,
    pub message: Option<String>,
    pub value: Option<T>,
}

impl<T> Validated<T> {
    fn status(status: Verdict) -> Self {
        Validated {
            status,
            message: None,
            value: None,
        }
    }

    fn error_with(message: &str) -> Self {
        Validated {
            status: Verdict::Error,
            message: Some(message.to_string()),
            value: None,
        }
    }

    fn success(value: T) -> Self {
        Validated {
            status: Verdict::Success,
            message: None,
            value: Some(value),
        }
    }
}

/// Validate a recipient public key: exactly 44 base58 characters.
pub fn validate_public_key(value: &str) -> Validated<String> {
    let length = value.len();

    if length == constants::PUBLIC_KEY_LENGTH {
        if value.chars().all(|c| c.is_ascii_alphanumeric()) {
            Validated::success(value.to_string())
        } else {
            Validated::status(Verdict::Error)
        }
    } else if length > constants::PUBLIC_KEY_LENGTH {
        Validated::status(Verdict::Error)
    } else if length > 0 {
        Validated::status(Verdict::Warning)
    } else {
        Validated::status(Verdict::Unset)
    }
}

/// Validate a transfer amount against the current balance ceiling.
///
/// The leading digit run is compared against the ceiling before the rest
/// of the input is even looked at, so `"999x"` with a balance of 10 reads
/// as insufficient funds rather than as a malformed number.
pub fn validate_amount(value: &str, ceiling: u64) -> Validated<u64> {
    if value.is_empty() {
        return Validated::status(Verdict::Unset);
    }

    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    let parsed = if digits.is_empty() {
        None
    } else {
        match digits.parse::<u64>() {
            Ok(amount) => Some(amount),
            // A digit run too long for u64 is past any possible balance.
            Err(_) => return Validated::error_with("Insufficient funds"),
        }
    };

    if let Some(amount) = parsed {
        if amount > ceiling {
            return Validated::error_with("Insufficient funds");
        }
        if digits.len() == value.len() {
            return Validated::success(amount);
        }
    }

    Validated::error_with("Not a valid number")
}

/// Validate a transaction signature: exactly 88 base58 characters. The
/// warning/error boundary sits at the public key length, like the key
/// field it usually gets pasted next to.
pub fn validate_signature(value: &str) -> Validated<String> {
    let length = value.len();

    if length == constants::SIGNATURE_LENGTH {
        if value.chars().all(|c| c.is_ascii_alphanumeric()) {
            Validated::success(value.to_string())
        } else {
            Validated::status(Verdict::Error)
        }
    } else if length > constants::PUBLIC_KEY_LENGTH {
        Validated::status(Verdict::Error)
    } else if length > 0 {
        Validated::status(Verdict::Warning)
    } else {
        Validated::status(Verdict::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_is_only_valid_at_exactly_44_characters() {
        for length in 0..100 {
            let value = "A".repeat(length);
            let validated = validate_public_key(&value);

            if length == 44 {
                assert_eq!(validated.status, Verdict::Success);
                assert_eq!(validated.value.as_deref(), Some(value.as_str()));
            } else {
                assert_ne!(validated.status, Verdict::Success);
                assert_eq!(validated.value, None);
            }
        }
    }

    #[test]
    fn public_key_verdicts_by_length() {
        assert_eq!(validate_public_key("").status, Verdict::Unset);
        assert_eq!(validate_public_key("abc").status, Verdict::Warning);
        assert_eq!(validate_public_key(&"A".repeat(45)).status, Verdict::Error);
        // Right length, wrong alphabet.
        let mixed = format!("{}!", "A".repeat(43));
        assert_eq!(validate_public_key(&mixed).status, Verdict::Error);
    }

    #[test]
    fn amount_empty_is_unset() {
        assert_eq!(validate_amount("", 100).status, Verdict::Unset);
    }

    #[test]
    fn amount_over_ceiling_is_insufficient_funds() {
        let validated = validate_amount("101", 100);

        assert_eq!(validated.status, Verdict::Error);
        assert_eq!(validated.message.as_deref(), Some("Insufficient funds"));
        assert_eq!(validated.value, None);
    }

    #[test]
    fn amount_digit_prefix_is_checked_before_the_format() {
        // "999x" parses as 999 for the ceiling check first.
        let validated = validate_amount("999x", 10);

        assert_eq!(validated.message.as_deref(), Some("Insufficient funds"));

        // Within the ceiling the format error wins.
        let validated = validate_amount("9x", 10);

        assert_eq!(validated.message.as_deref(), Some("Not a valid number"));
    }

    #[test]
    fn amount_non_numeric_is_not_a_valid_number() {
        let validated = validate_amount("one hundred", 1000);

        assert_eq!(validated.status, Verdict::Error);
        assert_eq!(validated.message.as_deref(), Some("Not a valid number"));
    }

    #[test]
    fn amount_huge_digit_run_is_insufficient_funds() {
        let validated = validate_amount(&"9".repeat(40), u64::MAX);

        assert_eq!(validated.message.as_deref(), Some("Insufficient funds"));
    }

    #[test]
    fn amount_within_ceiling_is_success() {
        let validated = validate_amount("100", 100);

        assert_eq!(validated.status, Verdict::Success);
        assert_eq!(validated.value, Some(100));
    }

    #[test]
    fn signature_is_only_valid_at_exactly_88_characters() {
        for length in 0..200 {
            let value = "b".repeat(length);
            let validated = validate_signature(&value);

            match length {
                88 => assert_eq!(validated.status, Verdict::Success),
                0 => assert_eq!(validated.status, Verdict::Unset),
                1..=44 => assert_eq!(validated.status, Verdict::Warning),
                _ => assert_eq!(validated.status, Verdict::Error),
            }
        }
    }

    #[test]
    fn combine_field_errors_accumulates_both_sides() {
        let missing_key: Result<(), _> = Err(field_error("pubkey", "missing"));
        let missing_net: Result<(), _> = Err(field_error("network", "missing"));

        let combined = combine_field_errors(missing_key, missing_net, |_, _| ());

        assert_eq!(combined.unwrap_err().len(), 2);
    }
}
