//! Write-back port for accepted changes.

use crate::change::{Addition, Modification, ProposedChange};
use crate::errors::{ExError, ExErrorKind};

/// Applies accepted changes to the reference catalog.
///
/// A modification is located by `system_name()`, `object_name()` and
/// `field_modified()` and overwritten with `value_in_origin()`. An addition
/// inserts `entity()`.
#[allow(clippy::result_large_err)]
pub trait WriteBack {
    /// # Errors
    ///
    /// `ExErrorKind::WriteBack` when the record cannot be written
    fn apply_modification(&self, change: &Modification) -> Result<(), ExError>;

    /// # Errors
    ///
    /// `ExErrorKind::WriteBack` when the entity cannot be inserted
    fn apply_addition(&self, change: &Addition) -> Result<(), ExError>;
}

/// Route one change to the matching `WriteBack` method
#[allow(clippy::result_large_err)]
pub fn apply_change(target: &dyn WriteBack, change: &ProposedChange) -> Result<(), ExError> {
    match change {
        ProposedChange::Modification(m) => target.apply_modification(m),
        ProposedChange::Addition(a) => target.apply_addition(a),
    }
}

/// Write-back with no catalog behind it; every call fails.
pub struct NoopWriteBack;

impl WriteBack for NoopWriteBack {
    fn apply_modification(&self, change: &Modification) -> Result<(), ExError> {
        Err(ExError::new(ExErrorKind::WriteBack)
            .with_op("apply_modification")
            .with_entity(change.object_name())
            .with_field(change.field_modified())
            .with_message("No write-back target configured"))
    }

    fn apply_addition(&self, change: &Addition) -> Result<(), ExError> {
        Err(ExError::new(ExErrorKind::WriteBack)
            .with_op("apply_addition")
            .with_entity(change.object_name())
            .with_message("No write-back target configured"))
    }
}
