#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use redoubt_core::GameMode;
use redoubt_rules::Ruleset;

const TRANSFER_DOMAIN: &str = "rules";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded ruleset payload.
pub(crate) const TRANSFER_HEADER: &str = "rules:v1";
/// Delimiter used to separate the prefix, mode hint and payload.
const FIELD_DELIMITER: char = ':';

/// Encodes the ruleset into a single-line string suitable for clipboard
/// transfer.
///
/// The mode segment is a human-readable hint recomputed from the ruleset;
/// the payload is the full structural encoding.
pub(crate) fn encode(rules: &Ruleset) -> Result<String, TransferError> {
    let json = serde_json::to_vec(rules).map_err(TransferError::UnencodableRuleset)?;
    let payload = STANDARD_NO_PAD.encode(json);
    Ok(format!("{TRANSFER_HEADER}:{}:{payload}", rules.mode()))
}

/// Decodes a ruleset from the provided transfer string.
pub(crate) fn decode(value: &str) -> Result<Ruleset, TransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TransferError::EmptyPayload);
    }

    let mut parts = trimmed.split(FIELD_DELIMITER);
    let domain = parts.next().ok_or(TransferError::MissingPrefix)?;
    let version = parts.next().ok_or(TransferError::MissingVersion)?;
    let mode = parts.next().ok_or(TransferError::MissingMode)?;
    let payload = parts.next().ok_or(TransferError::MissingPayload)?;

    if domain != TRANSFER_DOMAIN {
        return Err(TransferError::InvalidPrefix(domain.to_owned()));
    }
    if version != TRANSFER_VERSION {
        return Err(TransferError::UnsupportedVersion(version.to_owned()));
    }
    // The hint must name a known mode, but classification always comes
    // from the decoded payload.
    if mode.parse::<GameMode>().is_err() {
        return Err(TransferError::UnknownMode(mode.to_owned()));
    }

    let bytes = STANDARD_NO_PAD
        .decode(payload.as_bytes())
        .map_err(TransferError::InvalidEncoding)?;
    serde_json::from_slice(&bytes).map_err(TransferError::InvalidPayload)
}

/// Errors that can occur while encoding or decoding transfer strings.
#[derive(Debug)]
pub(crate) enum TransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the transfer string.
    MissingPrefix,
    /// The transfer string did not contain a version segment.
    MissingVersion,
    /// The transfer string did not contain a mode hint segment.
    MissingMode,
    /// The transfer string did not include the payload segment.
    MissingPayload,
    /// The transfer string used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The transfer string used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The mode hint did not name a known game mode.
    UnknownMode(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
    /// The ruleset could not be serialised for transfer.
    UnencodableRuleset(serde_json::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "transfer string was empty"),
            Self::MissingPrefix => write!(f, "transfer string is missing the prefix"),
            Self::MissingVersion => write!(f, "transfer string is missing the version"),
            Self::MissingMode => write!(f, "transfer string is missing the mode hint"),
            Self::MissingPayload => write!(f, "transfer string is missing the payload"),
            Self::InvalidPrefix(prefix) => {
                write!(f, "transfer prefix '{prefix}' is not supported")
            }
            Self::UnsupportedVersion(version) => {
                write!(f, "transfer version '{version}' is not supported")
            }
            Self::UnknownMode(mode) => {
                write!(f, "mode hint '{mode}' does not name a game mode")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode transfer payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse transfer payload: {error}")
            }
            Self::UnencodableRuleset(error) => {
                write!(f, "could not serialise ruleset for transfer: {error}")
            }
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) | Self::UnencodableRuleset(error) => Some(error),
            _ => None,
        }
    }
}
