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

//! retrieval of raw three-line element set text

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug,info};

use odin_common::net::get_text;
use crate::errors::Result;

/// abstraction of where element set text comes from. The pipeline only needs one (async) GET-like
/// operation, which makes it easy to substitute local or recorded data
#[async_trait]
pub trait ElementSource: Send + Sync {
    async fn fetch (&self, url: &str, cancel: &CancellationToken) -> Result<String>;
}

/// single GET request per url, no retries. Each request is bounded by `timeout`
pub struct HttpElementSource {
    client: Client,
    timeout: Duration,
}

impl HttpElementSource {
    pub fn new (timeout: Duration) -> Self {
        HttpElementSource { client: Client::new(), timeout }
    }
}

#[async_trait]
impl ElementSource for HttpElementSource {
    async fn fetch (&self, url: &str, cancel: &CancellationToken) -> Result<String> {
        debug!("requesting {}", url);
        let text = get_text( &self.client, url, self.timeout, cancel).await?;
        info!("received {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
