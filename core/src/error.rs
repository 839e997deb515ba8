//! Failures raised while authoring arenas.
//!
//! Both error families surface only while the catalog is assembled. The
//! parser never fails and has no error type.

use thiserror::Error;

/// Reasons the grid builder may refuse to allocate a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one interior cell inside its wall border.
    #[error("grid dimensions {columns}x{rows} are below the {minimum}x{minimum} minimum")]
    InvalidDimensions {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
        /// Smallest accepted edge length.
        minimum: u32,
    },
}

/// Rule broken by a finished layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    /// The layout does not contain the expected number of rows.
    #[error("row count={observed} expected={expected}")]
    RowCount {
        /// Number of rows found.
        observed: usize,
        /// Number of rows required.
        expected: usize,
    },
    /// A row does not contain the expected number of cells.
    #[error("row {row} length={observed} expected={expected}")]
    RowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells found in the row.
        observed: usize,
        /// Number of cells required.
        expected: usize,
    },
    /// A border cell holds something other than the wall glyph.
    #[error("border cell ({column},{row}) holds '{found}' expected='#'")]
    BorderBreach {
        /// Column of the offending cell.
        column: usize,
        /// Row of the offending cell.
        row: usize,
        /// Character found in the cell.
        found: char,
    },
    /// The layout does not contain exactly one player spawn.
    #[error("player spawn count={observed} expected=1")]
    PlayerSpawnCount {
        /// Number of player spawn markers found.
        observed: usize,
    },
    /// The layout contains too few checkpoints.
    #[error("checkpoint count={observed} expected>={minimum}")]
    CheckpointCount {
        /// Number of checkpoint markers found.
        observed: usize,
        /// Minimum number of checkpoints required.
        minimum: usize,
    },
}

/// Coarse classification of a [`Violation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Row count or row length mismatch.
    Dimension,
    /// Spawn, checkpoint or border rule broken.
    Integrity,
}

impl Violation {
    /// Classifies the violation as a dimension or an integrity failure.
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        match self {
            Self::RowCount { .. } | Self::RowLength { .. } => ViolationKind::Dimension,
            Self::BorderBreach { .. }
            | Self::PlayerSpawnCount { .. }
            | Self::CheckpointCount { .. } => ViolationKind::Integrity,
        }
    }
}

/// Fatal validation failure for a named map.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("map '{map}' failed validation: {violation}")]
pub struct MapIntegrityError {
    /// Name of the map that failed validation.
    pub map: String,
    /// Rule that was broken.
    pub violation: Violation,
}

impl MapIntegrityError {
    /// Creates a new error for the named map.
    #[must_use]
    pub fn new(map: impl Into<String>, violation: Violation) -> Self {
        Self {
            map: map.into(),
            violation,
        }
    }

    /// Classification of the broken rule.
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.violation.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::{MapIntegrityError, Violation, ViolationKind};

    #[test]
    fn row_length_message_reports_observed_and_expected() {
        let error = MapIntegrityError::new(
            "River Trap",
            Violation::RowLength {
                row: 7,
                observed: 58,
                expected: 60,
            },
        );
        assert_eq!(
            error.to_string(),
            "map 'River Trap' failed validation: row 7 length=58 expected=60"
        );
        assert_eq!(error.kind(), ViolationKind::Dimension);
    }

    #[test]
    fn marker_rules_are_integrity_violations() {
        assert_eq!(
            Violation::PlayerSpawnCount { observed: 2 }.kind(),
            ViolationKind::Integrity
        );
        assert_eq!(
            Violation::CheckpointCount {
                observed: 1,
                minimum: 3
            }
            .kind(),
            ViolationKind::Integrity
        );
        assert_eq!(
            Violation::RowCount {
                observed: 39,
                expected: 40
            }
            .kind(),
            ViolationKind::Dimension
        );
    }
}
