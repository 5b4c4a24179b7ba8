// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::user::PHONE_NUMBER_ATTRIBUTE;
use aws_sdk_cognitoidentityprovider::{
    operation::{
        admin_delete_user::AdminDeleteUserOutput, list_user_pools::ListUserPoolsOutput,
        list_users::ListUsersOutput,
    },
    types::{AttributeType, UserPoolDescriptionType, UserType},
    Client,
};
use aws_smithy_mocks::{mock, Rule};

////////////////////////////////////////////////////////////////////////////////
//////////////////////////    test constants   /////////////////////////////////
////////////////////////////////////////////////////////////////////////////////

pub const PROD_POOL_ID: &str = "us-west-2_Pr0dP00l1";
pub const PROD_POOL_NAME: &str = "Prod";
pub const ALICE_USERNAME: &str = "alice";
pub const ALICE_PHONE: &str = "+15551234567";
pub const ALICE_FILTER: &str = "phone_number = \"+15551234567\"";

pub const PAGE_2_TOKEN: &str = "page-2-token";
pub const PAGE_3_TOKEN: &str = "page-3-token";

////////////////////////////////////////////////////////////////////////////////
/////////////////////////    mocks & fixtures   ////////////////////////////////
////////////////////////////////////////////////////////////////////////////////

pub fn pool_descriptor(id: &str, name: &str) -> UserPoolDescriptionType {
    UserPoolDescriptionType::builder().id(id).name(name).build()
}

pub fn user(username: &str, phone_number: &str) -> UserType {
    let phone = AttributeType::builder()
        .name(PHONE_NUMBER_ATTRIBUTE)
        .value(phone_number)
        .build()
        .unwrap();
    UserType::builder()
        .username(username)
        .attributes(phone)
        .build()
}

/// Mock one page of `ListUserPools`.
///
/// The rule only answers requests carrying `token`, so a request for the
/// wrong page will not be served.
pub fn pool_page(
    token: Option<&'static str>,
    pools: Vec<UserPoolDescriptionType>,
    next_token: Option<&'static str>,
) -> Rule {
    mock!(Client::list_user_pools)
        .match_requests(move |req| {
            req.next_token() == token && req.max_results() == Some(crate::POOL_PAGE_SIZE)
        })
        .then_output(move || {
            ListUserPoolsOutput::builder()
                .set_user_pools(Some(pools.clone()))
                .set_next_token(next_token.map(str::to_owned))
                .build()
        })
}

/// Three pages, with "Prod" on the second one.
pub fn three_pages_prod_on_second() -> [Rule; 3] {
    [
        pool_page(
            None,
            vec![
                pool_descriptor("us-west-2_Dev000001", "Dev"),
                pool_descriptor("us-west-2_Stage0001", "Staging"),
            ],
            Some(PAGE_2_TOKEN),
        ),
        pool_page(
            Some(PAGE_2_TOKEN),
            vec![
                pool_descriptor("us-west-2_Sandbox01", "Sandbox"),
                pool_descriptor(PROD_POOL_ID, PROD_POOL_NAME),
            ],
            Some(PAGE_3_TOKEN),
        ),
        pool_page(
            Some(PAGE_3_TOKEN),
            vec![pool_descriptor("us-west-2_Legacy001", "Legacy")],
            None,
        ),
    ]
}

/// Mock `ListUsers` for `pool_id` with `filter`, answering with `users`.
pub fn users_lookup(pool_id: &'static str, filter: &'static str, users: Vec<UserType>) -> Rule {
    mock!(Client::list_users)
        .match_requests(move |req| {
            req.user_pool_id() == Some(pool_id) && req.filter() == Some(filter)
        })
        .then_output(move || {
            ListUsersOutput::builder()
                .set_users(Some(users.clone()))
                .build()
        })
}

/// Mock a successful `AdminDeleteUser` for exactly `username` in `pool_id`.
pub fn delete_user_mock(pool_id: &'static str, username: &'static str) -> Rule {
    mock!(Client::admin_delete_user)
        .match_requests(move |req| {
            req.user_pool_id() == Some(pool_id) && req.username() == Some(username)
        })
        .then_output(|| AdminDeleteUserOutput::builder().build())
}
