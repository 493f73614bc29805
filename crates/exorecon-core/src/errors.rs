use exorecon_core_types::PassId;
use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using ReconcileError
pub type Result<T> = std::result::Result<T, ReconcileError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Comparison
    /// Two entities of different kinds were paired for comparison
    KindMismatch,
    /// A star-only comparison was requested on non-star entities
    KindIncompatible,

    // Review
    /// A 1-based change number does not address a pending change
    OutOfRange,
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    /// An applied migration no longer matches its embedded SQL
    ChecksumMismatch,
    WriteBack,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::KindMismatch => "ERR_KIND_MISMATCH",
            ExErrorKind::KindIncompatible => "ERR_KIND_INCOMPATIBLE",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ChecksumMismatch => "ERR_CHECKSUM_MISMATCH",
            ExErrorKind::WriteBack => "ERR_WRITE_BACK",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, field, pass) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    field: Option<String>,
    pass_id: Option<PassId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            field: None,
            pass_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity name context
    pub fn with_entity(mut self, name: impl Into<String>) -> Self {
        self.entity = Some(name.into());
        self
    }

    /// Add field name context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add reconciliation pass context
    pub fn with_pass_id(mut self, pass_id: PassId) -> Self {
        self.pass_id = Some(pass_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity name context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the field name context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the pass context, if any
    pub fn pass_id(&self) -> Option<&PassId> {
        self.pass_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for reconciliation and review operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconcileError {
    // ===== Comparison Errors =====
    /// The two sides of a comparison pair are not the same kind
    #[error("Cannot compare {left_kind} '{left_name}' with {right_kind} '{right_name}'")]
    KindMismatch {
        left_kind: EntityKind,
        left_name: String,
        right_kind: EntityKind,
        right_name: String,
    },

    /// A star comparison was requested on entities that are not stars
    #[error("Star comparison requires stars, got {kind} '{name}'")]
    KindIncompatible { kind: EntityKind, name: String },

    // ===== Review Errors =====
    /// Change number outside 1..=len
    #[error("Change number {number} is out of range (1..={len})")]
    ChangeOutOfRange { number: usize, len: usize },

    /// Malformed range specification
    #[error("Invalid range '{spec}': {reason}")]
    InvalidRange { spec: String, reason: String },

    /// Origin label outside the closed catalog set
    #[error("Unknown origin catalog: {label}")]
    UnknownOrigin { label: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from ReconcileError to ExError
impl From<ReconcileError> for ExError {
    fn from(err: ReconcileError) -> Self {
        let message = err.to_string();
        match err {
            ReconcileError::KindMismatch { left_name, .. } => {
                ExError::new(ExErrorKind::KindMismatch)
                    .with_op("compare")
                    .with_entity(left_name)
                    .with_message(message)
            }
            ReconcileError::KindIncompatible { name, .. } => {
                ExError::new(ExErrorKind::KindIncompatible)
                    .with_op("star_diff")
                    .with_entity(name)
                    .with_message(message)
            }
            ReconcileError::ChangeOutOfRange { .. } => {
                ExError::new(ExErrorKind::OutOfRange).with_message(message)
            }
            ReconcileError::InvalidRange { .. } | ReconcileError::UnknownOrigin { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            ReconcileError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            ReconcileError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for ReconcileError {
    fn from(err: serde_json::Error) -> Self {
        ReconcileError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::KindMismatch, "ERR_KIND_MISMATCH"),
            (ExErrorKind::KindIncompatible, "ERR_KIND_INCOMPATIBLE"),
            (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
            (ExErrorKind::ChecksumMismatch, "ERR_CHECKSUM_MISMATCH"),
            (ExErrorKind::WriteBack, "ERR_WRITE_BACK"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_kind_mismatch_converts_with_entity_context() {
        let err = ReconcileError::KindMismatch {
            left_kind: EntityKind::Star,
            left_name: "11 Com".to_string(),
            right_kind: EntityKind::Planet,
            right_name: "11 Com b".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::KindMismatch);
        assert_eq!(ex.entity(), Some("11 Com"));
        assert!(ex.message().contains("Planet '11 Com b'"));
    }

    #[test]
    fn test_display_includes_code_op_and_source() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk full");
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("save_pending")
            .with_message("write failed")
            .with_source(inner);
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PERSISTENCE] in operation 'save_pending'"));
        assert!(rendered.contains("caused by [ERR_IO]: disk full"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ReconcileError::ChangeOutOfRange { number: 7, len: 3 };
        assert_eq!(err.to_string(), "Change number 7 is out of range (1..=3)");
    }
}
