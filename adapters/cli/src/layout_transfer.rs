#![allow(clippy::missing_errors_doc)]

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use tank_arena_core::MapData;
use thiserror::Error;

/// Identifier prefix emitted before the encoded map payload.
pub(crate) const SNAPSHOT_HEADER: &str = "arena:v1";
/// Delimiter used to separate the prefix, layout dimensions and payload.
const FIELD_DELIMITER: char = ':';
/// Domain, version, dimensions and payload.
const FIELD_COUNT: usize = 4;

/// Encodes a map into a single-line string suitable for clipboard transfer.
///
/// The header carries the layout dimensions so a reader can reject a
/// truncated payload without decoding it first.
pub(crate) fn encode(map: &MapData) -> Result<String, LayoutTransferError> {
    let (columns, rows) = layout_dimensions(map);
    let json = serde_json::to_vec(map)?;
    let encoded = STANDARD_NO_PAD.encode(json);
    Ok(format!("{SNAPSHOT_HEADER}:{columns}x{rows}:{encoded}"))
}

/// Decodes a map from the provided string representation.
///
/// The decoded map is not validated; callers decide whether to run the
/// validator or hand the layout straight to the parser.
pub(crate) fn decode(value: &str) -> Result<MapData, LayoutTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LayoutTransferError::EmptyPayload);
    }

    let fields: Vec<&str> = trimmed.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    let &[domain, version, dimensions, payload] = fields.as_slice() else {
        return Err(LayoutTransferError::MissingFields {
            found: fields.len(),
        });
    };

    let header = format!("{domain}{FIELD_DELIMITER}{version}");
    if header != SNAPSHOT_HEADER {
        return Err(LayoutTransferError::UnsupportedHeader(header));
    }

    let (columns, rows) = parse_dimensions(dimensions)?;
    let bytes = STANDARD_NO_PAD.decode(payload.as_bytes())?;
    let map: MapData = serde_json::from_slice(&bytes)?;

    let ragged = map
        .layout()
        .iter()
        .any(|row| row.chars().count() != columns as usize);
    if map.layout().len() != rows as usize || ragged {
        return Err(LayoutTransferError::DimensionMismatch {
            header: dimensions.to_owned(),
            map: map.name().to_owned(),
        });
    }

    Ok(map)
}

/// Errors that can occur while encoding or decoding layout transfer strings.
#[derive(Debug, Error)]
pub(crate) enum LayoutTransferError {
    /// The provided string was empty or contained only whitespace.
    #[error("transfer payload was empty")]
    EmptyPayload,
    /// Fewer than four `:`-separated fields were present.
    #[error("transfer string has {found} of 4 fields (domain:version:WxH:payload)")]
    MissingFields {
        /// Number of fields actually present.
        found: usize,
    },
    /// The domain and version pair is not `arena:v1`.
    #[error("transfer header '{0}' is not supported, expected 'arena:v1'")]
    UnsupportedHeader(String),
    /// The layout dimensions could not be parsed from the header.
    #[error("could not parse layout dimensions '{0}'")]
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    #[error("could not decode layout payload")]
    InvalidEncoding(#[from] base64::DecodeError),
    /// The payload could not be serialised or deserialised.
    #[error("could not parse layout payload")]
    InvalidPayload(#[from] serde_json::Error),
    /// The decoded layout disagrees with the dimensions in the header.
    #[error("layout of '{map}' does not match header dimensions '{header}'")]
    DimensionMismatch {
        /// Dimensions announced by the header.
        header: String,
        /// Name of the decoded map.
        map: String,
    },
}

fn layout_dimensions(map: &MapData) -> (usize, usize) {
    let columns = map
        .layout()
        .first()
        .map_or(0, |row| row.chars().count());
    (columns, map.layout().len())
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), LayoutTransferError> {
    let invalid = || LayoutTransferError::InvalidDimensions(dimensions.to_owned());
    let (columns, rows) = dimensions.split_once(['x', 'X']).ok_or_else(invalid)?;

    let columns = columns.trim().parse::<u32>().map_err(|_| invalid())?;
    let rows = rows.trim().parse::<u32>().map_err(|_| invalid())?;

    if columns == 0 || rows == 0 {
        return Err(invalid());
    }

    Ok((columns, rows))
}
