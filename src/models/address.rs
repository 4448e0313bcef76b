use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hex account address, `0x` followed by 1 to 64 hex digits.
///
/// Short forms such as `0x1` are kept as written; the fullnode accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid account address `{0}`")]
pub struct InvalidAddress(pub String);

impl AccountAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First and last four digits, the way wallets label accounts.
    pub fn short(&self) -> String {
        let digits = &self.0[2..];
        if digits.len() <= 8 {
            return self.0.clone();
        }
        format!("0x{}...{}", &digits[..4], &digits[digits.len() - 4..])
    }
}

impl FromStr for AccountAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| InvalidAddress(s.to_string()))?;

        if digits.is_empty()
            || digits.len() > 64
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(InvalidAddress(s.to_string()));
        }

        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = InvalidAddress;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
