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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;

#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    let nt = NaiveTime::from_hms_opt(0, 0, 0).unwrap(); // 00:00:00 can't fail
    let ndt = NaiveDateTime::new(nd,nt);
    DateTime::from_naive_utc_and_offset(ndt,Utc)
}

/// truncate to 00:00:00 UTC of the same calendar day
pub fn start_of_utc_day (dt: &DateTime<Utc>) -> DateTime<Utc> {
    naive_utc_date_to_utc_datetime( dt.date_naive())
}

/// parse a "YYYY-MM-DD" date spec into 00:00:00 UTC of that day
pub fn parse_utc_date (s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str( s.trim(), "%Y-%m-%d").ok().map( naive_utc_date_to_utc_datetime)
}

//--- support for serde

/// deserialize human readable duration specs such as "30s" or "5min"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{}s", dur.as_secs_f64());
    s.serialize_str(&dfm)
}

/// clap value parser for duration specs
pub fn parse_duration_arg (s: &str) -> Result<Duration,String> {
    parse(s).map_err( |e| format!("invalid duration '{s}': {e:?}"))
}
