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
#![allow(uncommon_codepoints)]

//! general utilities shared by ODIN satellite position crates: geodetic constants and coordinate
//! conversions, sexagesimal angles, atomic file updates, bounded HTTP text retrieval and
//! date/duration helpers

pub mod macros;
pub mod fs;
pub mod net;
pub mod datetime;
pub mod angle;
pub mod geo_constants;
pub mod cartesian3;
pub mod cartographic;

/// scale factor between meters and the megameter units we use for scaled positions
pub const METERS_PER_MEGAMETER: f64 = 1_000_000.0;
