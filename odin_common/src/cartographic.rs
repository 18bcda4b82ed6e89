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

/// geodetic (WGS84) coordinates in radians and meters above the ellipsoid.
/// This is an internal format to efficiently interface with unit-less 3rd party libraries

use crate::{cartesian3::Cartesian3, geo_constants::{EQUATORIAL_EARTH_RADIUS, E_EARTH_SQUARED, EARTH_RADIUS_RATIO_SQUARED}};

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cartographic {
    pub longitude: f64, // radians
    pub latitude: f64,  // radians
    pub height: f64     // meters above ellipsoid
}

impl Cartographic {
    pub fn new (longitude:f64, latitude: f64, height: f64)->Self {
        Cartographic { longitude, latitude, height }
    }

    pub fn from_degrees (lon: f64, lat: f64, height: f64)->Self {
        Cartographic::new( lon.to_radians(), lat.to_radians(), height)
    }

    pub fn longitude_deg (&self)-> f64 { self.longitude.to_degrees() }
    pub fn latitude_deg (&self)-> f64 { self.latitude.to_degrees() }
}

// Olson's algorithm coefficients, all derived from the WGS84 a and e²
const A1: f64 = EQUATORIAL_EARTH_RADIUS * E_EARTH_SQUARED;
const A2: f64 = A1 * A1;
const A3: f64 = A1 * E_EARTH_SQUARED / 2.0;
const A4: f64 = 2.5 * A2;
const A5: f64 = A1 + A3;
const A6: f64 = EARTH_RADIUS_RATIO_SQUARED;

/// points closer than this to the earth center have no meaningful geodetic representation
const MIN_RADIUS: f64 = 100_000.0;

impl From<&Cartesian3> for Cartographic {

    /// convert cartesian ECEF coordinates to Cartographic
    /// see
    ///    Olson, D. K. (1996).
    ///    Converting Earth-Centered, Earth-Fixed Coordinates to Geodetic Coordinates.
    ///    IEEE Transactions on Aerospace and Electronic Systems, 32(1), 473–476. https://doi.org/10.1109/7.481290
    ///
    /// closed form (no iteration), roundtrip errors are below 1e-10 rad / sub-millimeter in height
    fn from (p: &Cartesian3) -> Self {
        let x = p.x;
        let y = p.y;
        let z = p.z;

        let zp = z.abs();
        let w2 = x*x + y*y;
        let w = w2.sqrt();
        let z2 = z*z;
        let r2 = w2 + z2;
        let r = r2.sqrt();

        if r < MIN_RADIUS {
            return Cartographic::new( 0.0, 0.0, 0.0)
        }

        let lon = y.atan2(x);
        let s2 = z2 / r2;
        let c2 = w2 / r2;
        let mut u = A2 / r;
        let mut v = A3 - A4 / r;

        let (mut lat, s, c, ss) = if c2 > 0.3 {
            let s = (zp/r)*(1.0 + c2*(A1 + u + s2*v)/r);
            let ss = s*s;
            (s.asin(), s, (1.0 - ss).sqrt(), ss)
        } else {
            let c = (w/r)*(1.0 - s2*(A5 - u - c2*v)/r);
            let ss = 1.0 - c*c;
            (c.acos(), ss.sqrt(), c, ss)
        };

        let g = 1.0 - E_EARTH_SQUARED*ss;
        let rg = EQUATORIAL_EARTH_RADIUS / g.sqrt();
        let rf = A6 * rg;
        u = w - rg * c;
        v = zp - rf * s;
        let f = c * u + s * v;
        let m = c * v - s * u;
        let dp = m / (rf / g + f);

        lat += dp;
        let height = f + m*dp/2.0;
        if z < 0.0 { lat = -lat; }

        Cartographic::new( lon, lat, height)
    }
}

impl From<Cartesian3> for Cartographic {
    fn from (p: Cartesian3) -> Self {
        Cartographic::from(&p)
    }
}

impl std::fmt::Display for Cartographic {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ longitude: {}, latitude: {}, height: {} }}",
            self.longitude.to_degrees(), self.latitude.to_degrees(), self.height)
    }
}
