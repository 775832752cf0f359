// Derives inside the nutype macro are not recognized by the compiler so to suppress the warnings,
// allow "unused" imports
#![allow(unused_imports)]

use nutype::nutype;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::utils;

/// OAuth token sent as `Authorization: OAuth <token>`
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Clone, Debug, Deserialize, Serialize, AsRef, PartialEq)
)]
pub struct Token(String);

impl Token {
    /// The token with everything but the last four characters hidden
    pub fn masked(&self) -> String {
        utils::mask_secret(self.as_ref())
    }
}

/// Who can see a playlist
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumString, PartialEq, Eq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl From<bool> for Visibility {
    fn from(is_public: bool) -> Self {
        if is_public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}


#[cfg(test)]
mod visibility_tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_visibility_from_bool() {
        assert_eq!(Visibility::Public, Visibility::from(true));
        assert_eq!(Visibility::Private, Visibility::from(false));
    }

    #[test]
    fn test_visibility_strings() {
        assert_eq!("public", Visibility::Public.to_string());
        assert_eq!("private", Visibility::Private.to_string());
        assert_eq!(Visibility::Public, Visibility::from_str("public").unwrap());
        assert!(Visibility::from_str("internal").is_err());
    }
}
