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

use std::path::Path;
use tracing::info;

use odin_common::fs::write_atomically;
use crate::{errors::Result, record::CelestialObjectRecord};

/// replace the output file at `path` with a JSON array of `records`. Readers see either the previous
/// or the new array, never a partially written file
pub fn write_records (path: &Path, records: &[CelestialObjectRecord]) -> Result<()> {
    let data = serde_json::to_vec( records)?;
    write_atomically( path, &data)?;
    info!("wrote {} records to {:?}", records.len(), path);
    Ok(())
}

pub fn read_records (path: &Path) -> Result<Vec<CelestialObjectRecord>> {
    let data = std::fs::read( path)?;
    Ok( serde_json::from_slice( &data)? )
}
