//! Database repository layer.
//!
//! [`Repository`] is the storage interface used by the rest of the application; it knows
//! nothing about the engine behind it. Implementations use SeaORM entity models internally
//! and return domain models.

pub mod fridge_item;

/// Generic persistence operations over a domain type keyed by a unique identifier.
#[allow(async_fn_in_trait)]
pub trait Repository<T> {
    /// Identifier type of `T`.
    type Id;
    /// Error signalled by the underlying storage engine.
    type Error;

    /// Inserts the item, or replaces the stored item with the same id.
    async fn save(&self, item: T) -> Result<T, Self::Error>;

    /// Looks up an item; a missing id yields `Ok(None)`.
    async fn find_by_id(&self, id: Self::Id) -> Result<Option<T>, Self::Error>;

    /// Deletes an item; deleting a missing id succeeds.
    async fn delete_by_id(&self, id: Self::Id) -> Result<(), Self::Error>;

    /// Returns every stored item.
    async fn find_all(&self) -> Result<Vec<T>, Self::Error>;

    /// Returns the number of stored items.
    async fn count(&self) -> Result<u64, Self::Error>;
}

#[cfg(test)]
mod test;
