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

use std::fs::{self,File};
use std::io::{self,Read,Write,ErrorKind};
use std::path::{Path,PathBuf};
use tempfile::NamedTempFile;

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// check if dir pathname exists and is writable, try to create dir otherwise
pub fn ensure_writable_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        let md = fs::metadata(path)?;
        if md.permissions().readonly() {
            Err(io_error!(ErrorKind::PermissionDenied, "directory {:?} not writable", path))
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path)
    }
}

/// the directory in which a file path is located ("." for bare filenames)
pub fn parent_dir (path: impl AsRef<Path>) -> PathBuf {
    match path.as_ref().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from(".")
    }
}

pub fn file_contents_as_string (file: &mut fs::File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = File::open(path)?;
    file_contents_as_string( &mut file)
}

/// replace the contents of `path` so that readers either see the complete old or the complete new contents.
/// We write into a temporary file within the same directory (rename is only atomic within a file system),
/// sync it and then rename it over the target. The temp file is removed if anything fails before the rename
pub fn write_atomically (path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = parent_dir(path);
    ensure_dir(&dir)?;

    let mut file = NamedTempFile::new_in(&dir)?; // don't use path yet as that would expose partial writes
    file.write_all(contents)?;
    file.flush()?;
    file.as_file().sync_all()?;

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
