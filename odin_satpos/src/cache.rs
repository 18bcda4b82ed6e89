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

//! the on-disk element set cache. Each population has exactly one cache file that holds the
//! verbatim source text the current output files were computed from

use std::{fs, io::ErrorKind, path::Path};
use tracing::{debug,info};

use odin_common::fs::{filepath_contents_as_string, write_atomically};
use crate::errors::Result;

/// true if `cache_path` holds exactly the bytes of `fresh`. A missing cache file is not current
pub fn is_current (fresh: &str, cache_path: &Path) -> Result<bool> {
    match fs::read( cache_path) {
        Ok(cached) => Ok( cached == fresh.as_bytes() ),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into())
    }
}

/// compare `fresh` with the cached text at `cache_path` and replace the cache if it differs.
/// Returns `true` if the cache was created or replaced, `false` if it already had identical bytes
/// (in which case the file is not touched at all)
pub fn reconcile (fresh: &str, cache_path: &Path) -> Result<bool> {
    if is_current( fresh, cache_path)? {
        debug!("{:?} unchanged", cache_path);
        Ok(false)
    } else {
        write_atomically( cache_path, fresh.as_bytes())?;
        info!("{:?} updated ({} bytes)", cache_path, fresh.len());
        Ok(true)
    }
}

pub fn cache_exists (cache_path: &Path) -> bool {
    cache_path.is_file()
}

pub fn load_cache (cache_path: &Path) -> Result<String> {
    Ok( filepath_contents_as_string( &cache_path)? )
}
