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

//! WGS84 reference ellipsoid (EPSG:4326 / 4978 / 4979) constants.
//! All derived values are computed from the two defining parameters (semi-major axis and
//! inverse flattening) so that forward and inverse conversions use the exact same ellipsoid

/// semi major axis in meters
pub const EQUATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// defining inverse flattening 1/f
pub const INVERSE_F_EARTH: f64 = 298.257223563;
pub const F_EARTH: f64 = 1.0 / INVERSE_F_EARTH;

/// semi minor axis in meters (≈ 6356752.314245)
pub const POLAR_EARTH_RADIUS: f64 = EQUATORIAL_EARTH_RADIUS * (1.0 - F_EARTH);

/// first eccentricity squared e² = f(2-f)
pub const E_EARTH_SQUARED: f64 = F_EARTH * (2.0 - F_EARTH);

/// b²/a² - squared ratio of minor/major axis (= 1 - e²)
pub const EARTH_RADIUS_RATIO_SQUARED: f64 = 1.0 - E_EARTH_SQUARED;
