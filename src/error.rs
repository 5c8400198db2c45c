// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for `tascli`.
//!
//! Every failure of a single invocation falls into one of four families:
//! the caller asked for something contradictory ([`UsageError`]), the device
//! could not be reached or answered with a non-200 status
//! ([`TransportError`]), the device answered but the payload could not be
//! decoded ([`DecodeError`]), or the configuration file could not be loaded
//! ([`ConfigError`]).

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Conflicting or missing inputs, detected before any network call.
    #[error("usage error: {0}")]
    Usage(#[from] UsageError),

    /// The device did not respond successfully.
    #[error("could not reach device: {0}")]
    Transport(#[from] TransportError),

    /// The device responded but the payload could not be decoded.
    #[error("could not decode device response: {0}")]
    Decode(#[from] DecodeError),

    /// The configuration file could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors caused by the caller's choice of inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Both a custom command and a command mnemonic were supplied.
    #[error("--custom or --cmd cannot be used at the same time")]
    CommandConflict,

    /// Neither a custom command nor a command mnemonic was supplied.
    #[error("either --custom or --cmd must be set")]
    MissingCommand,

    /// Both an explicit host and a named device were supplied.
    #[error("--device and --host cannot be used at the same time")]
    TargetConflict,

    /// Neither an explicit host nor a named device was supplied.
    #[error("either --device or --host must be set")]
    MissingTarget,

    /// The command mnemonic is not one of the known commands.
    #[error("command \"{0}\" is invalid")]
    UnknownCommand(String),

    /// The named device is not present in the device table.
    #[error("device \"{0}\" not found")]
    UnknownDevice(String),
}

/// Errors raised while talking to the device.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed before a status was received (DNS, refused
    /// connection, timeout) or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The device answered with something other than `200 OK`.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },
}

/// Errors raised while decoding or rendering a device payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded value could not be rendered.
    #[error("render failed: {0}")]
    Render(String),
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory could be determined for the default config path.
    #[error("could not locate the home directory for the default configuration file")]
    MissingHomeDir,

    /// The configuration file could not be read.
    #[error("reading {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected shape.
    #[error("parsing {}: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML failure.
        #[source]
        source: serde_yaml::Error,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
