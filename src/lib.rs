// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Delete a single Cognito user, identified by the display name of its user
//! pool and its phone number.
//!
//! # Design
//!
//! A purge is three calls against the Cognito Identity Provider API, issued one
//! after the other:
//!
//! 1. `ListUserPools`, page by page (25 pools per page), until a pool whose
//!    name is exactly the requested name shows up. See [`find_user_pool`].
//! 2. `ListUsers` on that pool with the filter `phone_number = "<phone>"`. The
//!    first record of the first page is taken. See [`find_user_by_phone_number`].
//! 3. `AdminDeleteUser` for that record's username. See [`delete_user`].
//!
//! Both matches are "first wins". The service does not guarantee that pool
//! names or phone numbers are unique, and neither does this crate.
//!
//! [`purge_user`] chains the three steps and turns an empty lookup into
//! [`Error::PoolNotFound`] or [`Error::UserNotFound`]. Every error is fatal;
//! there is no retry.

mod client;
mod config;
mod error;
mod pool;
mod purge;
mod user;
#[cfg(test)]
pub(crate) mod test_utils;

pub use client::cognito_client;
pub use config::{
    Config, ACCESS_KEY_ID_VAR, PHONE_NUMBER_VAR, POOL_NAME_VAR, REGION_VAR, SECRET_ACCESS_KEY_VAR,
};
pub use error::{Error, Result};
pub use pool::{find_user_pool, UserPool, POOL_PAGE_SIZE};
pub use purge::{delete_user, purge_user, PurgeMode, PurgeOutcome, PurgeReport};
pub use user::{find_user_by_phone_number, phone_number_filter, UserRecord, PHONE_NUMBER_ATTRIBUTE};
