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

//! assembly of the per-object output records

use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize,Serialize};
use tracing::warn;

use odin_common::angle::dms_to_degrees;
use crate::{
    elements::{Classification, ElementGroup},
    errors::{propagation_error, Result},
    propagator::{Propagator, SubPoint},
    transform::GeocentricPosition
};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum ObjectType {
    Satellite,
    Station
}

impl fmt::Display for ObjectType {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Satellite => write!(f, "Satellite"),
            ObjectType::Station => write!(f, "Station")
        }
    }
}

/// what to do if a single element set can't be propagated
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum PropagationErrorPolicy {
    /// fail the whole run, leaving previous outputs in place
    #[default]
    Abort,
    /// log a warning and leave the object out
    Skip
}

/// the published record for one orbiting object. Field order is the serialization order
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CelestialObjectRecord {
    #[serde(rename="NAME")] pub name: String,
    #[serde(rename="CATALOGNUMBER")] pub catalog_number: String,
    #[serde(rename="CLASS")] pub class: Classification,
    #[serde(rename="LAUNCHYEAR")] pub launch_year: String,
    #[serde(rename="LAUNCHNUMBER")] pub launch_number: String,
    #[serde(rename="LAUNCHPIECE")] pub launch_piece: String,

    #[serde(rename="X")] pub x: f64,
    #[serde(rename="Y")] pub y: f64,
    #[serde(rename="Z")] pub z: f64,
    #[serde(rename="XS")] pub xs: f64,
    #[serde(rename="YS")] pub ys: f64,
    #[serde(rename="ZS")] pub zs: f64,
    #[serde(rename="DIST")] pub dist: f64,

    #[serde(rename="LONG")] pub longitude: f64,
    #[serde(rename="LAT")] pub latitude: f64,
    #[serde(rename="ELEVATION")] pub elevation: f64,

    #[serde(rename="TYPE")] pub object_type: ObjectType,
}

/// combine identity fields of `group` with the position derived from `subpoint`
pub fn build_record (group: &ElementGroup, object_type: ObjectType, subpoint: &SubPoint) -> Result<CelestialObjectRecord> {
    let longitude = dms_to_degrees( &subpoint.longitude)
        .ok_or_else( || propagation_error!( group.name(), "invalid sub-point longitude '{}'", subpoint.longitude))?;
    let latitude = dms_to_degrees( &subpoint.latitude)
        .ok_or_else( || propagation_error!( group.name(), "invalid sub-point latitude '{}'", subpoint.latitude))?;
    let elevation = subpoint.elevation;
    if !elevation.is_finite() {
        return Err( propagation_error!( group.name(), "invalid sub-point elevation {}", elevation))
    }

    let pos = GeocentricPosition::from_geodetic( longitude, latitude, elevation);

    Ok( CelestialObjectRecord {
        name: group.name().to_string(),
        catalog_number: group.catalog_number().to_string(),
        class: group.classification(),
        launch_year: group.launch_year().to_string(),
        launch_number: group.launch_number().to_string(),
        launch_piece: group.launch_piece().to_string(),
        x: pos.position.x,
        y: pos.position.y,
        z: pos.position.z,
        xs: pos.scaled.x,
        ys: pos.scaled.y,
        zs: pos.scaled.z,
        dist: pos.distance,
        longitude,
        latitude,
        elevation,
        object_type
    })
}

/// propagate all `groups` to `instant` and build their records, in input order
pub fn build_records<P> (groups: &[ElementGroup], object_type: ObjectType, propagator: &P, instant: &DateTime<Utc>,
                         policy: PropagationErrorPolicy) -> Result<Vec<CelestialObjectRecord>>
    where P: Propagator + ?Sized
{
    let mut records = Vec::with_capacity( groups.len());

    for group in groups {
        let res = propagator.propagate( group, instant).and_then( |sp| build_record( group, object_type, &sp));
        match res {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                PropagationErrorPolicy::Abort => return Err(e),
                PropagationErrorPolicy::Skip => warn!("skipping {} '{}': {}", object_type, group.name(), e)
            }
        }
    }

    Ok(records)
}
