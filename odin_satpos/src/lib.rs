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

//! odin_satpos maintains locally cached orbital element sets (TLEs) for general satellites and
//! crewed space stations, only recomputes when the upstream element sets changed, and derives
//! geocentric (ECEF) and geodetic positions for each object at the evaluation instant.
//! Results are stored as JSON arrays that are served read-only by [`server`].
//!
//! The pipeline (see [`pipeline::SatPosPipeline`]) is
//! ```text
//!   ElementSource ─▶ reconcile (per population) ─▶ [any changed?]
//!      ─▶ parse_element_groups ─▶ Propagator ─▶ GeocentricPosition ─▶ build_records ─▶ write_records
//! ```
//! where recomputation always covers *both* populations.

use std::{fmt, net::SocketAddr, path::{Path,PathBuf}, time::Duration};
use serde::{Deserialize,Serialize};
use odin_common::{datetime::{deserialize_duration, serialize_duration, secs}, fs::filepath_contents_as_string};

pub mod errors;
use errors::{config_error, Result};

pub mod fetch;
pub mod cache;
pub mod elements;
pub mod propagator;
pub mod transform;
pub mod record;
pub mod persist;
pub mod pipeline;
pub mod server;

use record::{ObjectType, PropagationErrorPolicy};

pub const SATELLITES_URL: &str = "https://celestrak.org/NORAD/elements/gp.php?GROUP=active&FORMAT=tle";
pub const STATIONS_URL: &str = "https://celestrak.org/NORAD/elements/gp.php?GROUP=stations&FORMAT=tle";

/// the two object populations we keep element sets for. Processing order is the order of [`Population::ALL`]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Population {
    Satellites,
    Stations
}

impl Population {
    pub const ALL: [Population; 2] = [Population::Satellites, Population::Stations];

    pub fn object_type (&self) -> ObjectType {
        match self {
            Population::Satellites => ObjectType::Satellite,
            Population::Stations => ObjectType::Station
        }
    }
}

impl fmt::Display for Population {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Population::Satellites => write!(f, "satellites"),
            Population::Stations => write!(f, "stations")
        }
    }
}

/// where to get the element sets of a population from, and where to keep the cached text and JSON output
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
pub struct PopulationConfig {
    pub url: String,
    pub cache_file: String,   // verbatim copy of the last accepted response
    pub output_file: String,  // JSON array of CelestialObjectRecords
}

/// configuration of the read-only HTTP layer that serves the output files
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,
    pub route_prefix: String, // e.g. "python" -> GET /python/satellites, /python/spacestations
}

impl ServerConfig {
    pub fn url (&self) -> String {
        format!("http://{}", self.sock_addr)
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SatPosConfig {
    /// directory for cache and output files (relative paths are resolved against the current dir)
    pub data_dir: PathBuf,

    /// upper bound for each element set request
    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub request_timeout: Duration,

    /// propagate to 00:00:00 UTC of the current date (true) or to the exact current time (false)
    pub day_granularity: bool,

    pub on_propagation_error: PropagationErrorPolicy,

    pub satellites: PopulationConfig,
    pub stations: PopulationConfig,

    pub server: ServerConfig,
}

impl Default for SatPosConfig {
    fn default () -> Self {
        SatPosConfig {
            data_dir: PathBuf::from("."),
            request_timeout: secs(60),
            day_granularity: true,
            on_propagation_error: PropagationErrorPolicy::Abort,
            satellites: PopulationConfig {
                url: SATELLITES_URL.to_string(),
                cache_file: "sat-tle.txt".to_string(),
                output_file: "finalsatdata.json".to_string()
            },
            stations: PopulationConfig {
                url: STATIONS_URL.to_string(),
                cache_file: "space-tle.txt".to_string(),
                output_file: "finalspacedata.json".to_string()
            },
            server: ServerConfig {
                sock_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
                route_prefix: "python".to_string()
            }
        }
    }
}

impl SatPosConfig {
    pub fn population (&self, population: Population) -> &PopulationConfig {
        match population {
            Population::Satellites => &self.satellites,
            Population::Stations => &self.stations
        }
    }

    pub fn cache_path (&self, population: Population) -> PathBuf {
        self.data_dir.join( &self.population(population).cache_file)
    }

    pub fn output_path (&self, population: Population) -> PathBuf {
        self.data_dir.join( &self.population(population).output_file)
    }

    /// make sure we don't have two populations writing to the same files
    pub fn check (&self) -> Result<()> {
        if self.satellites.cache_file == self.stations.cache_file {
            return Err( config_error!("satellites and stations share cache file {}", self.satellites.cache_file))
        }
        if self.satellites.output_file == self.stations.output_file {
            return Err( config_error!("satellites and stations share output file {}", self.satellites.output_file))
        }
        if self.request_timeout.is_zero() {
            return Err( config_error!("request_timeout has to be > 0"))
        }
        Ok(())
    }
}

/// load a RON config file. This is not restricted to [`SatPosConfig`] so that binaries can define their own configs
pub fn load_config<C> (path: impl AsRef<Path>) -> Result<C> where C: for <'a> Deserialize<'a> {
    let path = path.as_ref();
    let data = filepath_contents_as_string( &path)
        .map_err(|e| config_error!("failed to read config {:?}: {}", path, e))?;

    ron::from_str( &data).map_err(|e| config_error!("invalid config {:?}: {}", path, e))
}

/// load and check a [`SatPosConfig`], falling back to the built-in defaults if no path is given
pub fn load_satpos_config (path: Option<&Path>) -> Result<SatPosConfig> {
    let config = match path {
        Some(path) => load_config::<SatPosConfig>(path)?,
        None => SatPosConfig::default()
    };
    config.check()?;
    Ok(config)
}
