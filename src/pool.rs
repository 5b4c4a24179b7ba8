// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use aws_sdk_cognitoidentityprovider::Client;

/// The maximum number of pool descriptors requested per `ListUserPools` page.
pub const POOL_PAGE_SIZE: i32 = 25;

/// A user pool, as identified by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPool {
    pub id: String,
    pub name: String,
}

/// Find the first user pool whose display name is exactly `pool_name`.
///
/// Pages are requested one at a time, following the continuation token until
/// either a match is found or the service stops returning a token. Returns
/// `Ok(None)` if no page contains the pool.
pub async fn find_user_pool(client: &Client, pool_name: &str) -> Result<Option<UserPool>> {
    let mut next_token: Option<String> = None;
    let mut page: usize = 1;

    loop {
        tracing::debug!(
            page,
            continued = next_token.is_some(),
            "requesting user pool page"
        );
        let output = client
            .list_user_pools()
            .max_results(POOL_PAGE_SIZE)
            .set_next_token(next_token.take())
            .send()
            .await
            .map_err(aws_sdk_cognitoidentityprovider::Error::from)?;

        // exact match only, no case folding
        let matched = output
            .user_pools()
            .iter()
            .find(|descriptor| descriptor.name() == Some(pool_name));

        if let Some(descriptor) = matched {
            let id = descriptor.id().ok_or(Error::IncompleteResponse {
                what: "user pool id",
            })?;
            tracing::info!(page, pool_id = id, pool_name, "resolved user pool");
            return Ok(Some(UserPool {
                id: id.to_owned(),
                name: pool_name.to_owned(),
            }));
        }

        match output.next_token {
            Some(token) => next_token = Some(token),
            None => {
                tracing::debug!(pages = page, pool_name, "user pool search exhausted");
                return Ok(None);
            }
        }
        page += 1;
    }
}
