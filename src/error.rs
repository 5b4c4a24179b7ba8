// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure is fatal to the purge. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("required environment variable {name} is not set")]
    MissingVariable { name: &'static str },

    #[error("unable to find user pool {pool_name}")]
    PoolNotFound { pool_name: String },

    #[error("unable to find {phone_number} in {pool_name}")]
    UserNotFound {
        phone_number: String,
        pool_name: String,
    },

    /// The SDK models most response fields as optional. This is returned when
    /// one we can't proceed without is absent.
    #[error("identity provider response is missing {what}")]
    IncompleteResponse { what: &'static str },

    /// Failures from the identity provider itself, passed through untouched.
    #[error(transparent)]
    Provider(#[from] aws_sdk_cognitoidentityprovider::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PoolNotFound { .. } | Error::UserNotFound { .. })
    }
}
