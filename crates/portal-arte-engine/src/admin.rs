//! Authenticated content writes for the admin panel.

use uuid::Uuid;

use crate::auth::{AdminGate, AuthError, AuthenticationPolicy, SessionToken};
use crate::store::{Record, StoreError, TableStore};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AdminError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Saves a record: insert when its id is new, whole-record update otherwise.
pub fn publish<P, S, R>(
    gate: &AdminGate<P>,
    token: &SessionToken,
    store: &mut S,
    record: R,
) -> Result<Uuid, AdminError>
where
    P: AuthenticationPolicy,
    S: TableStore<R>,
    R: Record,
{
    gate.authorize(token)?;
    let id = record.id();
    if store.contains(id) {
        store.update(record)?;
    } else {
        store.insert(record)?;
    }
    Ok(id)
}

pub fn remove<P, S, R>(
    gate: &AdminGate<P>,
    token: &SessionToken,
    store: &mut S,
    id: Uuid,
) -> Result<(), AdminError>
where
    P: AuthenticationPolicy,
    S: TableStore<R>,
    R: Record,
{
    gate.authorize(token)?;
    store.delete(id)?;
    Ok(())
}
