// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use std::fmt::Debug;

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";
pub const POOL_NAME_VAR: &str = "poolName";
pub const PHONE_NUMBER_VAR: &str = "phoneNumber";

/// Everything the purge needs, read once at startup.
///
/// All five values are required. A value which is set but empty is treated
/// the same as one which is not set at all.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    /// Display name of the user pool, matched exactly.
    pub pool_name: String,
    /// Phone number in the form stored by the pool, e.g. `+15551234567`.
    pub phone_number: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// Variables are checked in a fixed order (credentials, region, then the
    /// purge inputs) and the first absent one is reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &'static str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::MissingVariable { name }),
            }
        };

        Ok(Self {
            access_key_id: required(ACCESS_KEY_ID_VAR)?,
            secret_access_key: required(SECRET_ACCESS_KEY_VAR)?,
            region: required(REGION_VAR)?,
            pool_name: required(POOL_NAME_VAR)?,
            phone_number: required(PHONE_NUMBER_VAR)?,
        })
    }
}

impl Debug for Config {
    // the secret key must never end up in logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("region", &self.region)
            .field("pool_name", &self.pool_name)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}
