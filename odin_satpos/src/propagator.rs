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

//! orbital propagation of element sets to the sub-point (ground track point) at a given instant.
//! The propagation itself is done by the [satkit](https://docs.rs/satkit) SGP4 implementation, we only
//! rotate the TEME result into ITRF (ECEF) and convert that into geodetic coordinates

use chrono::{DateTime, TimeZone, Utc};
use satkit::{Instant, TLE, frametransform::qteme2itrf, sgp4::sgp4};
use tracing::debug;

use odin_common::{angle::{degrees_to_dms, normalize_180}, cartesian3::Cartesian3, cartographic::Cartographic, datetime::start_of_utc_day};
use crate::{elements::ElementGroup, errors::{propagation_error, Result}};

/// geodetic location directly below an orbiting object. Angles use sexagesimal "d:m:s" notation
/// (see [`odin_common::angle::dms_to_degrees`]), elevation is in meters above the WGS84 ellipsoid
#[derive(Debug,Clone,PartialEq)]
pub struct SubPoint {
    pub longitude: String,
    pub latitude: String,
    pub elevation: f64,
}

impl SubPoint {
    pub fn from_degrees (longitude: f64, latitude: f64, elevation: f64) -> Self {
        SubPoint { longitude: degrees_to_dms(longitude), latitude: degrees_to_dms(latitude), elevation }
    }
}

impl From<&Cartographic> for SubPoint {
    fn from (c: &Cartographic) -> Self {
        SubPoint::from_degrees( normalize_180( c.longitude_deg()), c.latitude_deg(), c.height)
    }
}

/// the capability to compute where an object described by an element set is at a given instant
pub trait Propagator {
    fn propagate (&self, group: &ElementGroup, instant: &DateTime<Utc>) -> Result<SubPoint>;
}

/// SGP4 propagator. Element sets are re-imported for each call since sgp4 mutates its TLE argument
#[derive(Debug,Default,Clone)]
pub struct SatkitPropagator {}

impl SatkitPropagator {
    pub fn new () -> Self { SatkitPropagator {} }

    /// the ECEF position in meters of the object at `instant`
    pub fn ecef_position (&self, group: &ElementGroup, instant: &DateTime<Utc>) -> Result<Cartesian3> {
        let mut tle = TLE::load_3line( group.name(), group.line1(), group.line2())
            .map_err( |e| propagation_error!( group.name(), "3 line satkit TLE import failed {:?}", e))?;

        let t = instant_from_datetime( instant);
        let tvec = vec![t];
        let (pteme, _vteme, errs) = sgp4( &mut tle, &tvec);

        let itrf = qteme2itrf( &t).to_rotation_matrix() * pteme.column(0);
        let p = Cartesian3::new( itrf[0], itrf[1], itrf[2]);

        if p.is_finite() && p.length() > 0.0 {
            Ok(p)
        } else {
            Err( propagation_error!( group.name(), "sgp4 failed at {}: {:?}", instant, errs))
        }
    }
}

impl Propagator for SatkitPropagator {
    fn propagate (&self, group: &ElementGroup, instant: &DateTime<Utc>) -> Result<SubPoint> {
        let p = self.ecef_position( group, instant)?;
        let c = Cartographic::from( &p);
        if c.height == 0.0 && c.longitude == 0.0 && c.latitude == 0.0 {
            return Err( propagation_error!( group.name(), "position {} is inside the earth", p))
        }

        debug!("{} at {}: {}", group.name(), instant, c);
        Ok( SubPoint::from( &c) )
    }
}

pub fn instant_from_datetime<Z> (dt: &DateTime<Z>) -> Instant where Z: TimeZone {
    Instant::from_unixtime( dt.timestamp_millis() as f64 / 1000.0)
}

/// the instant we propagate to. With `day_granularity` this is 00:00:00 UTC of the current calendar day,
/// which makes all runs of the same day comparable
pub fn evaluation_instant (now: &DateTime<Utc>, day_granularity: bool) -> DateTime<Utc> {
    if day_granularity { start_of_utc_day( now) } else { *now }
}
