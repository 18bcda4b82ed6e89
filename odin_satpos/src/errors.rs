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

use thiserror::Error;
use odin_common::net::OdinNetError;

pub type Result<T> = std::result::Result<T, OdinSatPosError>;

#[derive(Error,Debug)]
pub enum OdinSatPosError {

    /// element set source did not return a successful response (includes timeouts)
    #[error("network error {0}")]
    NetworkError( String ),

    #[error("operation cancelled")]
    Cancelled,

    /// element set text that does not decompose into valid name/line1/line2 triples
    #[error("malformed input {0}")]
    MalformedInput( String ),

    #[error("propagation of '{name}' failed: {msg}")]
    Propagation { name: String, msg: String },

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config error {0}")]
    ConfigError( String ),
}

impl From<OdinNetError> for OdinSatPosError {
    fn from (e: OdinNetError) -> Self {
        match e {
            OdinNetError::Cancelled() => OdinSatPosError::Cancelled,
            other => OdinSatPosError::NetworkError( other.to_string())
        }
    }
}

macro_rules! network_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinSatPosError::NetworkError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use network_error;

macro_rules! malformed_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinSatPosError::MalformedInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use malformed_input;

macro_rules! propagation_error {
    ($name:expr, $fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinSatPosError::Propagation{ name: $name.to_string(), msg: format!( $fmt $(, $arg)* ) }
    };
}
pub (crate) use propagation_error;

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinSatPosError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
