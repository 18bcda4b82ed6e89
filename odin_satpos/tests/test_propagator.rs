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

use chrono::{TimeZone, Utc};
use odin_common::angle::dms_to_degrees;
use odin_satpos::{
    elements::parse_element_groups,
    propagator::{evaluation_instant, Propagator, SatkitPropagator, SubPoint},
    record::{build_records, ObjectType, PropagationErrorPolicy},
    transform::GeocentricPosition,
};

const ISS: &str = "ISS (ZARYA)
1 25544U 98067A   25076.51782528  .00016717  00000-0  30099-3 0  9991
2 25544  51.6393 186.0515 0004962 120.0420 240.1090 15.49815361500779
";

const NOAA_21: &str = "NOAA 21
1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994
2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811
";

// ISS sub-point at 2025-03-18T00:00:00Z ("-176:56:46.047202", "6:04:05.521310")
const ISS_LON: f64 = -176.94612422277777;
const ISS_LAT: f64 = 6.068200363888889;
const ISS_ELEVATION: f64 = 415224.3967982842;

#[test]
fn test_evaluation_instant () {
    let now = Utc.with_ymd_and_hms( 2025, 3, 18, 17, 42, 13).unwrap();

    let t = evaluation_instant( &now, true);
    assert_eq!( t, Utc.with_ymd_and_hms( 2025, 3, 18, 0, 0, 0).unwrap());
    assert_eq!( evaluation_instant( &t, true), t);

    assert_eq!( evaluation_instant( &now, false), now);
}

#[test]
fn test_subpoint_from_degrees () {
    let sp = SubPoint::from_degrees( -122.5, 37.25, 420_000.0);
    println!("{sp:?}");
    assert_eq!( sp.longitude, "-122:30:00.000000");
    assert_eq!( sp.latitude, "37:15:00.000000");
    assert_eq!( dms_to_degrees( &sp.longitude), Some(-122.5));
}

#[test]
fn test_iss_subpoint () {
    let group = parse_element_groups( ISS).unwrap().remove(0);
    let propagator = SatkitPropagator::new();
    let t = Utc.with_ymd_and_hms( 2025, 3, 18, 0, 0, 0).unwrap();

    let sp = propagator.propagate( &group, &t).unwrap();
    println!("ISS at {t}: {sp:?}");

    let lon = dms_to_degrees( &sp.longitude).unwrap();
    let lat = dms_to_degrees( &sp.latitude).unwrap();
    assert!( (lon - ISS_LON).abs() < 1e-6, "longitude {lon}");
    assert!( (lat - ISS_LAT).abs() < 1e-6, "latitude {lat}");
    assert!( (sp.elevation - ISS_ELEVATION).abs() < 1.0, "elevation {}", sp.elevation);
}

#[test]
fn test_satkit_records () {
    let propagator = SatkitPropagator::new();
    let t = Utc.with_ymd_and_hms( 2025, 3, 18, 0, 0, 0).unwrap();

    let sats = parse_element_groups( NOAA_21).unwrap();
    let recs = build_records( &sats, ObjectType::Satellite, &propagator, &t, PropagationErrorPolicy::Abort).unwrap();
    assert_eq!( recs.len(), 1);
    let noaa = &recs[0];
    println!("{noaa:?}");

    let sp = propagator.propagate( &sats[0], &t).unwrap();
    assert_eq!( noaa.name, "NOAA 21");
    assert_eq!( noaa.catalog_number, "54234");
    assert_eq!( noaa.object_type, ObjectType::Satellite);
    assert_eq!( Some(noaa.longitude), dms_to_degrees( &sp.longitude));
    assert_eq!( Some(noaa.latitude), dms_to_degrees( &sp.latitude));
    assert_eq!( noaa.elevation, sp.elevation);
    assert!( noaa.latitude.abs() <= 82.0); // 98.7° inclination
    assert!( noaa.elevation > 780_000.0 && noaa.elevation < 870_000.0);

    let stations = parse_element_groups( ISS).unwrap();
    let recs = build_records( &stations, ObjectType::Station, &propagator, &t, PropagationErrorPolicy::Abort).unwrap();
    let iss = &recs[0];
    println!("{iss:?}");

    assert_eq!( iss.name, "ISS (ZARYA)");
    assert_eq!( iss.object_type, ObjectType::Station);
    assert!( (iss.longitude - ISS_LON).abs() < 1e-6);
    assert!( (iss.latitude - ISS_LAT).abs() < 1e-6);
    assert!( (iss.elevation - ISS_ELEVATION).abs() < 1.0);

    let pos = GeocentricPosition::from_geodetic( ISS_LON, ISS_LAT, ISS_ELEVATION);
    assert!( (iss.x - pos.position.x).abs() < 2.0);
    assert!( (iss.y - pos.position.y).abs() < 2.0);
    assert!( (iss.z - pos.position.z).abs() < 2.0);
    assert!( (iss.dist - pos.distance).abs() < 2e-6);
}
