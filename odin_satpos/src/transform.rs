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

//! conversion of geodetic sub-point coordinates into the geocentric representations we publish

use odin_common::{cartesian3::Cartesian3, cartographic::Cartographic, METERS_PER_MEGAMETER};

/// earth-centered, earth-fixed (ECEF / WGS84 ellipsoid) position of an object, together with
/// the same position in megameters and its distance from the earth center in megameters
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeocentricPosition {
    pub position: Cartesian3, // meters
    pub scaled: Cartesian3,   // megameters
    pub distance: f64,        // megameters
}

impl GeocentricPosition {
    pub fn from_cartesian (position: Cartesian3) -> Self {
        let scaled = position / METERS_PER_MEGAMETER;
        let distance = (scaled.x*scaled.x + scaled.y*scaled.y + scaled.z*scaled.z).sqrt();
        GeocentricPosition { position, scaled, distance }
    }

    /// angles in decimal degrees, elevation in meters above the ellipsoid
    pub fn from_geodetic (longitude_deg: f64, latitude_deg: f64, elevation: f64) -> Self {
        let c = Cartographic::from_degrees( longitude_deg, latitude_deg, elevation);
        GeocentricPosition::from_cartesian( Cartesian3::from( &c))
    }

    pub fn to_geodetic (&self) -> Cartographic {
        Cartographic::from( &self.position)
    }
}
