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

//! angle normalization and sexagesimal (degrees:minutes:seconds) conversion

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// number of fractional second digits we produce in `degrees_to_dms` (1e-6 arcsec ≈ 0.03 mm on the equator)
pub const DMS_SECOND_DIGITS: usize = 6;
const DMS_SECOND_SCALE: f64 = 1_000_000.0;

/// convert a "d:m:s" string into decimal degrees: `d + m/60 + s/3600`.
///
/// A leading '-' negates the whole angle, i.e. "-1:30:00" is -1.5 and "-0:30:00" is -0.5.
/// Minutes and seconds have to be non-negative. Surrounding whitespace is ignored.
/// Returns `None` if the input does not have exactly three numeric fields.
pub fn dms_to_degrees (dms: &str) -> Option<f64> {
    let s = dms.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s))
    };

    let mut fields = s.split(':');
    let d: f64 = fields.next()?.trim().parse().ok()?;
    let m: f64 = fields.next()?.trim().parse().ok()?;
    let sec: f64 = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() { return None }

    if d < 0.0 || m < 0.0 || sec < 0.0 || !(d.is_finite() && m.is_finite() && sec.is_finite()) {
        return None
    }

    let deg = d + m / 60.0 + sec / 3600.0;
    Some( if negative { -deg } else { deg } )
}

/// format decimal degrees as "d:mm:ss.ssssss", the inverse of [`dms_to_degrees`].
/// Rounding is done on the total number of micro-arcseconds so that we never produce 60 seconds or minutes
pub fn degrees_to_dms (deg: f64) -> String {
    let negative = deg < 0.0;
    let total = (deg.abs() * 3600.0 * DMS_SECOND_SCALE).round() as u128;

    let usec_per_min = 60 * DMS_SECOND_SCALE as u128;
    let usec_per_deg = 60 * usec_per_min;

    let d = total / usec_per_deg;
    let m = (total % usec_per_deg) / usec_per_min;
    let us = total % usec_per_min;
    let s = us as f64 / DMS_SECOND_SCALE;

    let sign = if negative && total > 0 { "-" } else { "" };
    format!("{}{}:{:02}:{:0width$.prec$}", sign, d, m, s, width = DMS_SECOND_DIGITS + 3, prec = DMS_SECOND_DIGITS)
}
