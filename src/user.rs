// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::{Error, Result},
    pool::UserPool,
};
use aws_sdk_cognitoidentityprovider::{types::UserType, Client};

/// The standard Cognito attribute holding a user's phone number.
pub const PHONE_NUMBER_ATTRIBUTE: &str = "phone_number";

/// A user account returned by the filtered lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub phone_number: Option<String>,
}

impl TryFrom<&UserType> for UserRecord {
    type Error = Error;

    fn try_from(user: &UserType) -> Result<Self> {
        let username = user.username().ok_or(Error::IncompleteResponse {
            what: "username",
        })?;
        let phone_number = user
            .attributes()
            .iter()
            .find(|attribute| attribute.name() == PHONE_NUMBER_ATTRIBUTE)
            .and_then(|attribute| attribute.value())
            .map(str::to_owned);

        Ok(Self {
            username: username.to_owned(),
            phone_number,
        })
    }
}

/// Build the `ListUsers` filter for an exact phone number match.
///
/// Quotes and backslashes are escaped so that the value stays inside the
/// string literal.
pub fn phone_number_filter(phone_number: &str) -> String {
    let mut escaped = String::with_capacity(phone_number.len());
    for c in phone_number.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("{PHONE_NUMBER_ATTRIBUTE} = \"{escaped}\"")
}

/// Return the first user in `pool` whose phone number is `phone_number`.
///
/// Only the first page of the filtered listing is inspected.
pub async fn find_user_by_phone_number(
    client: &Client,
    pool: &UserPool,
    phone_number: &str,
) -> Result<Option<UserRecord>> {
    let output = client
        .list_users()
        .user_pool_id(&pool.id)
        .filter(phone_number_filter(phone_number))
        .send()
        .await
        .map_err(aws_sdk_cognitoidentityprovider::Error::from)?;

    let user = match output.users().first() {
        Some(user) => UserRecord::try_from(user)?,
        None => return Ok(None),
    };
    tracing::info!(
        pool_id = pool.id.as_str(),
        username = user.username.as_str(),
        "resolved user by phone number"
    );
    Ok(Some(user))
}
