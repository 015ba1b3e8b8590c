use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Per-player per-event honor tag. These carry bonus points when the
/// event's scoring rule declares a value for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
pub enum Special {
    #[serde(rename = "MVP")]
    #[strum(serialize = "MVP")]
    Mvp,
    #[serde(rename = "EVP")]
    #[strum(serialize = "EVP")]
    Evp
}

#[cfg(test)]
mod tests {
    use super::Special;
    use std::str::FromStr;

    #[test]
    fn test_deserialize() {
        let specials: Vec<Special> = serde_json::from_str("[\"MVP\", \"EVP\"]").unwrap();
        assert_eq!(specials, vec![Special::Mvp, Special::Evp]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Special::from_str("MVP"), Ok(Special::Mvp));
        assert!(Special::from_str("GOAT").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Special::Evp.to_string(), "EVP");
    }
}
