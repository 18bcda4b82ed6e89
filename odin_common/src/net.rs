/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

///! common utility functions for network operations

use std::time::Duration;
use reqwest::{Client, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::define_error;

define_error!{ pub OdinNetError =
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    StatusError(StatusCode) : "request failed with status {0}",
    Timeout(Duration) : "request timed out after {0:?}",
    Cancelled() : "request cancelled"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// retrieve the response body of a HTTP GET request as text.
/// The whole request (including reading the body) is bounded by `timeout` and can be aborted
/// through the provided `cancel` token. Non-success status codes are reported as `StatusError`
pub async fn get_text (client: &Client, url: &str, timeout: Duration, cancel: &CancellationToken) -> Result<String> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err( OdinNetError::Cancelled() ),
        res = tokio::time::timeout( timeout, get_text_unbounded( client, url)) => {
            match res {
                Ok(res) => res,
                Err(_) => Err( OdinNetError::Timeout(timeout) )
            }
        }
    }
}

async fn get_text_unbounded (client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if status.is_success() {
        Ok( response.text().await? )
    } else {
        Err( OdinNetError::StatusError(status) )
    }
}
