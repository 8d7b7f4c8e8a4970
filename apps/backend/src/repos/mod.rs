//! Store access per collection. Free functions over `&dyn DocumentStore`;
//! every store failure leaves here as a `DomainError`.

pub mod players;
pub mod practice_teams;
pub mod rounds;

use crate::errors::domain::DomainError;
use crate::infra::store_errors::map_store_err;
use crate::store::StorePath;

/// Path of a child under a collection root, rejecting keys the store would.
pub(crate) fn child_path(collection: &str, key: &str) -> Result<StorePath, DomainError> {
    StorePath::parse(collection)
        .and_then(|root| root.child(key))
        .map_err(map_store_err)
}

pub(crate) fn collection_path(collection: &str) -> Result<StorePath, DomainError> {
    StorePath::parse(collection).map_err(map_store_err)
}
