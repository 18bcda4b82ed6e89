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

use std::{path::PathBuf, time::Duration};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error,info};
use tracing_subscriber::EnvFilter;

use odin_common::{datetime::{parse_duration_arg, parse_utc_date}, fs::ensure_writable_dir};
use odin_satpos::{
    errors::OdinSatPosError,
    fetch::HttpElementSource,
    load_satpos_config,
    pipeline::{RunOptions, RunOutcome, SatPosPipeline},
    propagator::SatkitPropagator
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "refresh cached satellite and space station element sets and compute their positions")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// recompute positions even if no element set changed
    #[arg(short,long)]
    pub force: bool,

    /// evaluation date as YYYY-MM-DD (00:00:00 UTC), defaults to today
    #[arg(short,long, value_parser = parse_date_arg)]
    pub date: Option<DateTime<Utc>>,

    /// repeat update passes with this interval (e.g. "6h") until terminated
    #[arg(short,long, value_parser = parse_duration_arg)]
    pub interval: Option<Duration>,
}

fn parse_date_arg (s: &str) -> std::result::Result<DateTime<Utc>,String> {
    parse_utc_date(s).ok_or_else( || format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

#[tokio::main(flavor = "current_thread")]
async fn main () -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_satpos_config( args.config.as_deref())?;
    ensure_writable_dir( &config.data_dir)?;

    let source = HttpElementSource::new( config.request_timeout);
    let pipeline = SatPosPipeline::new( config, source, SatkitPropagator::new());

    let cancel = CancellationToken::new();
    tokio::spawn( {
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("received Ctrl-C, terminating");
                cancel.cancel();
            }
        }
    });

    let mut opts = RunOptions { force: args.force, date: args.date };
    loop {
        match pipeline.run( &opts, &cancel).await {
            Ok(outcome) => report( &outcome),
            Err(OdinSatPosError::Cancelled) => break,
            Err(e) => {
                if args.interval.is_none() { return Err(e.into()) }
                error!("update failed: {}", e); // try again next interval
            }
        }

        let Some(interval) = args.interval else { break };
        opts.force = false;

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep( interval) => {}
        }
    }

    Ok(())
}

fn report (outcome: &RunOutcome) {
    for po in &outcome.populations {
        let source = if po.used_stale_cache { "stale cache" } else if po.changed { "changed" } else { "unchanged" };
        match po.n_records {
            Some(n) => info!("{}: {}, {} records", po.population, source, n),
            None => info!("{}: {}", po.population, source)
        }
    }
    if let Some(instant) = &outcome.instant {
        info!("positions computed for {}", instant);
    }
}
