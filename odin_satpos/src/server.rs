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

//! read-only HTTP access to the output files
//! ```text
//!   GET /<prefix>/satellites    -> satellite records (JSON array)
//!   GET /<prefix>/spacestations -> space station records (JSON array)
//! ```
//! Responses are the stored file bytes, we don't parse or re-serialize them

use std::{io::ErrorKind, path::PathBuf};
use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info,warn};

use crate::{errors::Result, Population, SatPosConfig};

pub fn route_name (population: Population) -> &'static str {
    match population {
        Population::Satellites => "satellites",
        Population::Stations => "spacestations"
    }
}

pub fn route_path (route_prefix: &str, population: Population) -> String {
    let prefix = route_prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("/{}", route_name(population))
    } else {
        format!("/{}/{}", prefix, route_name(population))
    }
}

pub fn build_router (config: &SatPosConfig) -> Router {
    let mut router = Router::new();

    for population in Population::ALL {
        let path = config.output_path(population);
        router = router.route( &route_path( &config.server.route_prefix, population), get( move || {
            let path = path.clone();
            async move { json_file_response( path).await }
        }));
    }

    router
}

async fn json_file_response (path: PathBuf) -> Response {
    match tokio::fs::read( &path).await {
        Ok(data) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], data).into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => (StatusCode::NOT_FOUND, "no data yet").into_response(),
        Err(e) => {
            warn!("failed to read {:?}: {}", path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "data not readable").into_response()
        }
    }
}

/// serve the output files until `cancel` is triggered
pub async fn serve (config: &SatPosConfig, cancel: CancellationToken) -> Result<()> {
    let router = build_router( config);
    let listener = TcpListener::bind( config.server.sock_addr).await?;

    for population in Population::ALL {
        info!("serving {} on {}{}", population, config.server.url(), route_path( &config.server.route_prefix, population));
    }

    axum::serve( listener, router)
        .with_graceful_shutdown( async move { cancel.cancelled().await })
        .await?;

    Ok(())
}
