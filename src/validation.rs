use mongodb::bson::{self, Document};
use serde::Serialize;

use crate::error::{Result, ShelterError};

/// Serialize `value` into a BSON document, rejecting anything that is not a non-empty mapping.
///
/// `what` names the argument in the error message ("document", "query").
pub fn into_document<T>(value: &T, what: &str) -> Result<Document>
where
    T: Serialize + ?Sized,
{
    let document = match bson::to_document(value) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Rejected {} that is not a mapping: {}", what, e);
            return Err(invalid(what));
        }
    };

    if document.is_empty() {
        tracing::warn!("Rejected empty {}", what);
        return Err(invalid(what));
    }

    Ok(document)
}

fn invalid(what: &str) -> ShelterError {
    ShelterError::InvalidArgument(format!(
        "Invalid or empty {} provided. Must be a non-empty mapping.",
        what
    ))
}
