//! HTTP handlers: five operations per resource, Rails naming.
//!
//! GET    /            -> index
//! POST   /            -> create
//! GET    /:id         -> show
//! PUT    /:id         -> update
//! DELETE /:id         -> destroy

pub mod chat;
pub mod todo;

use crate::error::AppError;
use uuid::Uuid;

/// An unparseable identifier is an operation failure, not a 404: the contract
/// reserves 404 for a well-formed identifier with no matching document.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_identifier_parses() {
        assert!(parse_id("1e3c2b34-58cf-4b2c-9c7a-0a1c6d9f1a00").is_ok());
    }

    #[test]
    fn garbage_identifier_is_invalid_id() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::InvalidId(raw) if raw == "not-a-uuid"));
    }
}
