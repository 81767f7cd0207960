//! Load the configuration from a file or a `String` written in
//! [Toml format](https://en.wikipedia.org/wiki/TOML).

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use crate::config::partial;

/// Error type denoting the different errors this module can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an error when trying to load configuration from a file.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// There was an error when trying to build a partial configuration
    /// out of the Toml string given.
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be serialized back to Toml.
    #[error("{0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Just like `std::result::Result` but with the error param fixed to
/// this module's [`Error`](Error) type.
pub type Result<T> = std::result::Result<T, Error>;

/// Load a partial configuration from a file written in Toml format.
pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<partial::Config> {
    let mut contents = String::new();
    read_file_contents(filename.as_ref(), &mut contents)?;
    from_str(&contents)
}

#[cfg(not(test))]
fn read_file_contents(filename: &Path, contents: &mut String) -> io::Result<usize> {
    let mut file = File::open(filename)?;
    file.read_to_string(contents)
}

#[cfg(test)]
fn read_file_contents(_filename: &Path, _contents: &mut String) -> io::Result<usize> {
    Ok(0)
}

/// Load a partial configuration from a string written in Toml format.
pub fn from_str(contents: &str) -> Result<partial::Config> {
    toml::from_str(contents).map_err(Error::from)
}

/// Serialize a configuration section back to a Toml string.
pub fn to_string<T: serde::Serialize>(section: &T) -> Result<String> {
    toml::to_string(section).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn test_load_empty_config() {
        let partial = super::from_str("").unwrap();

        assert_eq!(Config::from_partial(&partial), Config::default());
    }

    #[test]
    fn test_load_empty_config_from_file() {
        let partial = super::from_file("some file name").unwrap();

        assert_eq!(Config::from_partial(&partial), Config::default());
    }

    #[test]
    fn test_load_non_empty_config() {
        let partial = super::from_str(
            r#"
environment = "mainnet"

[wallet]
node_url = "tcp://10.1.1.1:8899"
requests_timeout = 5000
"#,
        )
        .unwrap();
        let config = Config::from_partial(&partial);

        assert_eq!(config.wallet.node_url, "tcp://10.1.1.1:8899");
        assert_eq!(config.wallet.requests_timeout, 5000);
    }

    #[test]
    fn test_load_incorrect_config() {
        let partial = super::from_str(
            r#"
[wallet]
requests_timeout = "not a number"
"#,
        );

        assert!(partial.is_err());
    }
}
