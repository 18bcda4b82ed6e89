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

//! the update pass: refresh both element set caches, and if anything changed (or we are forced)
//! recompute and store the records of both populations

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{info,warn};

use odin_common::datetime::utc_now;
use crate::{
    cache::{cache_exists, is_current, load_cache, reconcile},
    elements::parse_element_groups,
    errors::{network_error, OdinSatPosError, Result},
    fetch::ElementSource,
    persist::write_records,
    propagator::{evaluation_instant, Propagator},
    record::{build_records, CelestialObjectRecord},
    Population, SatPosConfig
};

#[derive(Debug,Clone,Default)]
pub struct RunOptions {
    /// recompute records even if no element set changed
    pub force: bool,
    /// fixed evaluation date/time. If not set we use the current time (subject to `day_granularity`)
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug,Clone,PartialEq)]
pub struct PopulationOutcome {
    pub population: Population,
    pub changed: bool,
    pub used_stale_cache: bool,
    pub n_records: Option<usize>, // only set if we recomputed
}

#[derive(Debug,Clone,PartialEq)]
pub struct RunOutcome {
    pub populations: Vec<PopulationOutcome>,
    pub recomputed: bool,
    pub instant: Option<DateTime<Utc>>,
}

impl RunOutcome {
    pub fn population (&self, population: Population) -> Option<&PopulationOutcome> {
        self.populations.iter().find( |p| p.population == population)
    }

    pub fn any_changed (&self) -> bool {
        self.populations.iter().any( |p| p.changed)
    }
}

/// element set text of one population for this pass
struct Refreshed {
    text: String,
    changed: bool,
    used_stale_cache: bool,
}

pub struct SatPosPipeline<S,P> where S: ElementSource, P: Propagator {
    config: SatPosConfig,
    source: S,
    propagator: P,
}

impl<S,P> SatPosPipeline<S,P> where S: ElementSource, P: Propagator {
    pub fn new (config: SatPosConfig, source: S, propagator: P) -> Self {
        SatPosPipeline { config, source, propagator }
    }

    pub fn config (&self) -> &SatPosConfig { &self.config }

    /// execute one update pass. Populations are refreshed strictly one after the other in the order
    /// of [`Population::ALL`]. Changed element set texts are only staged in memory. Output files
    /// are written after the records of all populations have been computed, and the caches are
    /// only replaced after both outputs were written. Any error before that leaves previous outputs
    /// and caches untouched, i.e. the next pass still sees the change
    pub async fn run (&self, opts: &RunOptions, cancel: &CancellationToken) -> Result<RunOutcome> {
        let mut refreshed: Vec<(Population,Refreshed)> = Vec::with_capacity( Population::ALL.len());
        for population in Population::ALL {
            refreshed.push( (population, self.refresh( population, cancel).await?));
        }

        let mut populations: Vec<PopulationOutcome> = refreshed.iter().map( |(population,r)| {
            PopulationOutcome { population: *population, changed: r.changed, used_stale_cache: r.used_stale_cache, n_records: None }
        }).collect();

        let any_changed = populations.iter().any( |p| p.changed);
        if !any_changed && !opts.force {
            info!("no element set changes, skipping recomputation");
            return Ok( RunOutcome { populations, recomputed: false, instant: None })
        }

        let now = opts.date.unwrap_or_else( utc_now);
        let instant = evaluation_instant( &now, self.config.day_granularity && opts.date.is_none());
        info!("computing positions for {}", instant);

        let mut records: Vec<Vec<CelestialObjectRecord>> = Vec::with_capacity( refreshed.len());
        for (population, r) in &refreshed {
            records.push( self.compute( *population, &r.text, &instant)?);
        }

        for (po, recs) in populations.iter_mut().zip( records.iter()) {
            write_records( &self.config.output_path( po.population), recs)?;
            po.n_records = Some( recs.len());
        }

        // only now the outputs match the new element sets
        for (population, r) in refreshed.iter().filter( |(_,r)| r.changed) {
            reconcile( &r.text, &self.config.cache_path( *population))?;
        }

        Ok( RunOutcome { populations, recomputed: true, instant: Some(instant) })
    }

    /// fetch the element set text of one population and compare it with its cache, falling back to
    /// the cache if the source is not available. Nothing is written here
    async fn refresh (&self, population: Population, cancel: &CancellationToken) -> Result<Refreshed> {
        let url = &self.config.population(population).url;
        let cache_path = self.config.cache_path(population);

        match self.source.fetch( url, cancel).await {
            Ok(text) => {
                let changed = !is_current( &text, &cache_path)?;
                if changed { info!("{} element sets changed", population) }
                Ok( Refreshed { text, changed, used_stale_cache: false } )
            }
            Err(OdinSatPosError::Cancelled) => Err(OdinSatPosError::Cancelled),
            Err(e) => {
                if cache_exists( &cache_path) {
                    warn!("failed to retrieve {} ({}), using cached {:?}", population, e, cache_path);
                    let text = load_cache( &cache_path)?;
                    Ok( Refreshed { text, changed: false, used_stale_cache: true } )
                } else {
                    Err( network_error!("no {} element sets: {} and no cache file {:?}", population, e, cache_path))
                }
            }
        }
    }

    fn compute (&self, population: Population, text: &str, instant: &DateTime<Utc>) -> Result<Vec<CelestialObjectRecord>> {
        let groups = parse_element_groups( text)?;
        let records = build_records( &groups, population.object_type(), &self.propagator, instant, self.config.on_propagation_error)?;
        info!("computed {} of {} {} records", records.len(), groups.len(), population);
        Ok(records)
    }
}
