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

use std::ops::Div;
use serde::{Serialize,Deserialize};
use crate::geo_constants::{EARTH_RADIUS_RATIO_SQUARED, EQUATORIAL_EARTH_RADIUS, E_EARTH_SQUARED};
use crate::cartographic::Cartographic;

/// geocentric (ECEF) cartesian coordinates. We do not use uom here since this is mostly
/// used to interface with unit-less propagation libraries (values are in meters unless scaled)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn length (&self) -> f64 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt()
    }

    pub fn is_finite (&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl Div<f64> for Cartesian3 {
    type Output = Self;

    fn div (self, rhs: f64) -> Self {
        Cartesian3 { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

/// convert WGS84 geodetic into ECEF coordinates
///   N(φ) = a / sqrt(1 - e²sin²φ)
///   x = (N + h) cosφ cosλ
///   y = (N + h) cosφ sinλ
///   z = (b²/a² N + h) sinφ
impl From<&Cartographic> for Cartesian3 {
    fn from (p: &Cartographic) -> Self {
        let φ = p.latitude;
        let λ = p.longitude;
        let h = p.height;

        let sin_φ = φ.sin();
        let cos_φ = φ.cos();

        let n = EQUATORIAL_EARTH_RADIUS / (1.0 - E_EARTH_SQUARED * (sin_φ * sin_φ)).sqrt();
        let c = (n + h) * cos_φ;

        let x = c * λ.cos();
        let y = c * λ.sin();
        let z = (EARTH_RADIUS_RATIO_SQUARED * n + h) * sin_φ;

        Cartesian3::new( x, y, z)
    }
}

impl From<Cartographic> for Cartesian3 {
    fn from (p: Cartographic) -> Self {
        Cartesian3::from(&p)
    }
}
