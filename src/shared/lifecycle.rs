//! Soft-delete lifecycle shared by every removable entity.
//!
//! An entity is `Active` or `Removed`; `remove` and `restore` flip between the
//! two and a hard delete drops the row from either state. Transitions are
//! executed by the store as conditional updates, so a request that loses a race
//! gets the error describing the state it actually found.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// An entity with a soft-delete flag and its own not-found/removed errors
pub trait SoftDelete {
    fn is_removed(&self) -> bool;

    fn not_found(id: Uuid) -> AppError;
    fn removed(id: Uuid) -> AppError;
    fn not_removed(id: Uuid) -> AppError;
}

/// Store primitives the lifecycle needs
#[async_trait]
pub trait SoftDeleteStore<T>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>>;

    /// Set the removed flag only if it currently differs from `removed`.
    /// Returns `None` when no row matched.
    async fn set_removed(&self, id: Uuid, removed: bool) -> Result<Option<T>>;

    /// Delete the row whatever its state, returning it as it was.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<T>>;
}

/// Fail with `NotFound` or `Removed` unless the entity is active
pub fn ensure_active<T: SoftDelete>(id: Uuid, entity: Option<T>) -> Result<T> {
    let entity = entity.ok_or_else(|| T::not_found(id))?;
    if entity.is_removed() {
        return Err(T::removed(id));
    }
    Ok(entity)
}

/// Fail with `NotFound` or `NotRemoved` unless the entity is removed
pub fn ensure_removed<T: SoftDelete>(id: Uuid, entity: Option<T>) -> Result<T> {
    let entity = entity.ok_or_else(|| T::not_found(id))?;
    if !entity.is_removed() {
        return Err(T::not_removed(id));
    }
    Ok(entity)
}

pub async fn get_active<T, S>(store: &S, id: Uuid) -> Result<T>
where
    T: SoftDelete + Send,
    S: SoftDeleteStore<T> + ?Sized,
{
    ensure_active(id, store.find_by_id(id).await?)
}

/// Active -> Removed
pub async fn remove<T, S>(store: &S, id: Uuid) -> Result<T>
where
    T: SoftDelete + Send,
    S: SoftDeleteStore<T> + ?Sized,
{
    ensure_active(id, store.find_by_id(id).await?)?;

    match store.set_removed(id, true).await? {
        Some(entity) => Ok(entity),
        None => Err(explain_lost_update::<T, S>(store, id, true).await),
    }
}

/// Removed -> Active
pub async fn restore<T, S>(store: &S, id: Uuid) -> Result<T>
where
    T: SoftDelete + Send,
    S: SoftDeleteStore<T> + ?Sized,
{
    ensure_removed(id, store.find_by_id(id).await?)?;

    match store.set_removed(id, false).await? {
        Some(entity) => Ok(entity),
        None => Err(explain_lost_update::<T, S>(store, id, false).await),
    }
}

/// Active | Removed -> Deleted
pub async fn hard_delete<T, S>(store: &S, id: Uuid) -> Result<T>
where
    T: SoftDelete + Send,
    S: SoftDeleteStore<T> + ?Sized,
{
    store
        .delete_by_id(id)
        .await?
        .ok_or_else(|| T::not_found(id))
}

/// Work out why a conditional edit of an active entity matched no row
pub async fn explain_failed_edit<T, S>(store: &S, id: Uuid) -> AppError
where
    T: SoftDelete + Send,
    S: SoftDeleteStore<T> + ?Sized,
{
    match get_active::<T, S>(store, id).await {
        Err(e) => e,
        Ok(_) => AppError::Conflict(format!(
            "Record with ID = {} was modified concurrently, retry the request",
            id
        )),
    }
}

/// Work out why a conditional update on `id` matched no row.
///
/// `wanted_removed` is the flag value the caller tried to set.
pub async fn explain_lost_update<T, S>(store: &S, id: Uuid, wanted_removed: bool) -> AppError
where
    T: SoftDelete + Send,
    S: SoftDeleteStore<T> + ?Sized,
{
    match store.find_by_id(id).await {
        Err(e) => e,
        Ok(None) => T::not_found(id),
        Ok(Some(entity)) if entity.is_removed() == wanted_removed => {
            if wanted_removed {
                T::removed(id)
            } else {
                T::not_removed(id)
            }
        }
        Ok(Some(_)) => AppError::Conflict(format!(
            "Record with ID = {} was modified concurrently, retry the request",
            id
        )),
    }
}
