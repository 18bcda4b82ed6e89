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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use odin_satpos::{load_satpos_config, server::serve};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "serve satellite and space station position records as JSON")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main () -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_satpos_config( args.config.as_deref())?;

    let cancel = CancellationToken::new();
    tokio::spawn( {
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutting down server");
                cancel.cancel();
            }
        }
    });

    serve( &config, cancel).await?;
    Ok(())
}
