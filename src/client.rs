// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::{config::Credentials, Client};

const CREDENTIALS_PROVIDER_NAME: &str = "cognito-user-purge-environment";

/// Build a Cognito Identity Provider client from `config`.
///
/// Only the static credentials in `config` are used; the default provider
/// chain (profiles, IMDS, ...) is bypassed.
pub async fn cognito_client(config: &Config) -> Client {
    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );

    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    Client::new(&shared_config)
}
