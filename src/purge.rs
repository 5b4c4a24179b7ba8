// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::{Error, Result},
    pool::{find_user_pool, UserPool},
    user::{find_user_by_phone_number, UserRecord},
};
use aws_sdk_cognitoidentityprovider::{
    operation::admin_delete_user::AdminDeleteUserOutput, Client,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PurgeMode {
    #[default]
    Delete,
    /// Resolve the pool and the user, but don't send the delete.
    DryRun,
}

#[derive(Debug)]
pub enum PurgeOutcome {
    /// The raw `AdminDeleteUser` response.
    Deleted(AdminDeleteUserOutput),
    Skipped,
}

/// What a purge resolved, and what it did about it.
#[derive(Debug)]
pub struct PurgeReport {
    pub pool: UserPool,
    pub user: UserRecord,
    pub outcome: PurgeOutcome,
}

/// Delete `user` from `pool` by username.
///
/// A failure from the service is returned unchanged; there is no retry.
pub async fn delete_user(
    client: &Client,
    pool: &UserPool,
    user: &UserRecord,
) -> Result<AdminDeleteUserOutput> {
    tracing::info!(
        pool_id = pool.id.as_str(),
        username = user.username.as_str(),
        "deleting user"
    );
    let output = client
        .admin_delete_user()
        .user_pool_id(&pool.id)
        .username(&user.username)
        .send()
        .await
        .map_err(aws_sdk_cognitoidentityprovider::Error::from)?;
    Ok(output)
}

/// Resolve the pool named `pool_name`, find the user with `phone_number` in
/// it, and delete that user.
///
/// Each step runs only if the previous one succeeded, so nothing is deleted
/// unless both the pool and the user were found.
pub async fn purge_user(
    client: &Client,
    pool_name: &str,
    phone_number: &str,
    mode: PurgeMode,
) -> Result<PurgeReport> {
    let pool = find_user_pool(client, pool_name)
        .await?
        .ok_or_else(|| Error::PoolNotFound {
            pool_name: pool_name.to_owned(),
        })?;

    let user = find_user_by_phone_number(client, &pool, phone_number)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            phone_number: phone_number.to_owned(),
            pool_name: pool.name.clone(),
        })?;

    let outcome = match mode {
        PurgeMode::Delete => PurgeOutcome::Deleted(delete_user(client, &pool, &user).await?),
        PurgeMode::DryRun => {
            tracing::info!(
                username = user.username.as_str(),
                "dry run, skipping delete"
            );
            PurgeOutcome::Skipped
        }
    };

    Ok(PurgeReport {
        pool,
        user,
        outcome,
    })
}
