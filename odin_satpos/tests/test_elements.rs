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

use odin_satpos::{elements::{parse_element_groups, Classification, ElementGroup}, errors::OdinSatPosError};

const TLES: &str = "ISS (ZARYA)
1 25544U 98067A   25076.51782528  .00016717  00000-0  30099-3 0  9991
2 25544  51.6393 186.0515 0004962 120.0420 240.1090 15.49815361500779
NOAA 21
1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994
2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811
CSS (TIANHE)
1 48274C 21035AB  25076.50000000  .00020000  00000-0  22000-3 0  9990
2 48274  41.4700 100.0000 0005000 300.0000  60.0000 15.60000000220000
";

#[test]
fn test_parse_groups_in_order () {
    let groups = parse_element_groups( TLES).unwrap();
    for g in &groups { println!("{} -> {}", g.name(), g.catalog_number()) }

    assert_eq!( groups.len(), 3);
    assert_eq!( groups[0].name(), "ISS (ZARYA)");
    assert_eq!( groups[1].name(), "NOAA 21");
    assert_eq!( groups[2].name(), "CSS (TIANHE)");
    assert!( groups[1].line2().starts_with("2 54234"));
}

#[test]
fn test_fixed_width_fields () {
    let groups = parse_element_groups( TLES).unwrap();

    let iss = &groups[0];
    assert_eq!( iss.catalog_number(), "25544");
    assert_eq!( iss.classification(), Classification::Unclassified);
    assert_eq!( iss.launch_year(), "98");
    assert_eq!( iss.launch_number(), "067");
    assert_eq!( iss.launch_piece(), "A  "); // padding is preserved

    let css = &groups[2];
    assert_eq!( css.classification(), Classification::Classified);
    assert_eq!( css.launch_piece(), "AB ");
}

#[test]
fn test_blank_lines_and_whitespace () {
    let text = format!("\n\n   {}\r\n\n", TLES.replace('\n', "  \r\n\n"));
    let groups = parse_element_groups( &text).unwrap();
    assert_eq!( groups.len(), 3);
    assert_eq!( groups[0].name(), "ISS (ZARYA)");
    assert!( groups[0].line1().ends_with("9991"));
}

#[test]
fn test_incomplete_group_is_rejected () {
    let text = format!("{}DANGLING OBJECT\n", TLES);
    match parse_element_groups( &text) {
        Err(OdinSatPosError::MalformedInput(msg)) => {
            println!("expected error: {msg}");
            assert!( msg.contains("DANGLING OBJECT"));
        }
        other => panic!("expected MalformedInput, got {:?}", other)
    }
}

#[test]
fn test_misaligned_lines_are_rejected () {
    let mut lines: Vec<&str> = TLES.lines().collect();
    lines.swap( 3, 4); // NOAA 21 name and line 1
    let text = lines.join("\n");
    assert!( matches!( parse_element_groups( &text), Err(OdinSatPosError::MalformedInput(_))));
}

#[test]
fn test_empty_input () {
    assert!( parse_element_groups("").unwrap().is_empty());
    assert!( parse_element_groups("\n  \n").unwrap().is_empty());
}

#[test]
fn test_group_validation () {
    let l1 = "1 25544U 98067A   25076.51782528  .00016717  00000-0  30099-3 0  9991";
    let l2 = "2 25544  51.6393 186.0515 0004962 120.0420 240.1090 15.49815361500779";

    assert!( ElementGroup::new( "ISS", l1, l2).is_ok());
    assert!( ElementGroup::new( "ISS", l2, l1).is_err());
    assert!( ElementGroup::new( "ISS", "1 25544U", l2).is_err()); // too short for launch piece
    assert!( ElementGroup::new( "ISS", l1.replace("25544U", "25544X"), l2).is_err());
    assert!( ElementGroup::new( "", l1, l2).is_err());
}
