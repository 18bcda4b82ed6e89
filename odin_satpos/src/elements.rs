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

//! parsing of three-line element set (TLE) text into name/line1/line2 groups.
//!
//! ```text
//! ISS (ZARYA)
//! 1 25544U 98067A   25076.51782528  .00016717  00000-0  30099-3 0  9991
//! 2 25544  51.6393 186.0515 0004962 120.0420 240.1090 15.49815361500779
//! ```
//! Line 1 fields we extract (0-based char offsets, end exclusive):
//!   [2,7)  catalog number, [7] classification, [9,11) launch year (last two digits),
//!   [11,14) launch number of that year, [14,17) launch piece

use std::fmt;
use serde::{Deserialize,Serialize};

use crate::errors::{malformed_input, OdinSatPosError, Result};

const MIN_LINE1_LEN: usize = 17;
const MIN_LINE2_LEN: usize = 2;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum Classification {
    #[serde(rename="U")] Unclassified,
    #[serde(rename="C")] Classified,
    #[serde(rename="S")] Secret,
}

impl Classification {
    pub fn from_char (c: char) -> Option<Classification> {
        match c {
            'U' => Some(Classification::Unclassified),
            'C' => Some(Classification::Classified),
            'S' => Some(Classification::Secret),
            _ => None
        }
    }

    pub fn as_str (&self) -> &'static str {
        match self {
            Classification::Unclassified => "U",
            Classification::Classified => "C",
            Classification::Secret => "S",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// one validated element set. Lines are stored trimmed. Fixed-width field accessors
/// can't fail since line1 is checked to be ASCII and long enough
#[derive(Debug,Clone,PartialEq)]
pub struct ElementGroup {
    name: String,
    line1: String,
    line2: String,
}

impl ElementGroup {
    pub fn new (name: impl ToString, line1: impl ToString, line2: impl ToString) -> Result<Self> {
        let name = name.to_string();
        let line1 = line1.to_string();
        let line2 = line2.to_string();

        if name.is_empty() {
            return Err( malformed_input!("empty object name"))
        }
        if !line1.is_ascii() || line1.len() < MIN_LINE1_LEN || !line1.starts_with("1 ") {
            return Err( malformed_input!("not a valid TLE line 1 for '{}': '{}'", name, line1))
        }
        if Classification::from_char( line1.as_bytes()[7] as char).is_none() {
            return Err( malformed_input!("unknown classification in TLE line 1 for '{}': '{}'", name, line1))
        }
        if !line2.is_ascii() || line2.len() < MIN_LINE2_LEN || !line2.starts_with("2 ") {
            return Err( malformed_input!("not a valid TLE line 2 for '{}': '{}'", name, line2))
        }

        Ok( ElementGroup { name, line1, line2 } )
    }

    pub fn name (&self) -> &str { &self.name }
    pub fn line1 (&self) -> &str { &self.line1 }
    pub fn line2 (&self) -> &str { &self.line2 }

    /// NORAD catalog number, verbatim (including leading zeros or padding)
    pub fn catalog_number (&self) -> &str { &self.line1[2..7] }

    pub fn classification (&self) -> Classification {
        // validated in new()
        Classification::from_char( self.line1.as_bytes()[7] as char).unwrap_or( Classification::Unclassified)
    }

    pub fn launch_year (&self) -> &str { &self.line1[9..11] }
    pub fn launch_number (&self) -> &str { &self.line1[11..14] }
    pub fn launch_piece (&self) -> &str { &self.line1[14..17] }
}

impl fmt::Display for ElementGroup {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.name, self.line1, self.line2)
    }
}

/// split element set text into consecutive [`ElementGroup`]s, in input order.
/// Each line is trimmed and blank lines are ignored. A remaining line count that is not a multiple
/// of three is rejected as a whole - we don't guess which object is incomplete
pub fn parse_element_groups (text: &str) -> Result<Vec<ElementGroup>> {
    let lines: Vec<(usize,&str)> = text.lines()
        .enumerate()
        .map( |(i,line)| (i+1, line.trim()))
        .filter( |(_,line)| !line.is_empty())
        .collect();

    if lines.len() % 3 != 0 {
        let (last_lineno, last_line) = lines.last().copied().unwrap_or((0,""));
        return Err( malformed_input!("{} non-blank lines is not a multiple of 3 (last line {}: '{}')", lines.len(), last_lineno, last_line))
    }

    let mut groups = Vec::with_capacity( lines.len() / 3);
    for chunk in lines.chunks_exact(3) {
        let group = ElementGroup::new( chunk[0].1, chunk[1].1, chunk[2].1)
            .map_err( |e| match e {
                OdinSatPosError::MalformedInput(msg) => malformed_input!("line {}: {}", chunk[0].0, msg),
                other => other
            })?;
        groups.push( group);
    }

    Ok(groups)
}
