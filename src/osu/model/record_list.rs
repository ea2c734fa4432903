//! Growth-tracked storage for records whose count is unknown up front.

use std::collections::TryReserveError;

/// A list of records growing by 1.5 times whenever it runs out of room.
///
/// Capacity is tracked explicitly instead of leaving it to [`Vec`], so total copying stays linear
/// in the record count and a failed allocation is reported instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordList<T> {
    /// Creates an empty list without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Capacity the list grows to once `len` records fill it up.
    #[must_use]
    pub const fn grown_capacity(len: usize) -> usize {
        (len + 1) * 3 / 2
    }

    /// Appends a record, growing the storage if needed.
    ///
    /// # Errors
    ///
    /// Returns the allocation failure if the storage cannot grow. The list is left unchanged.
    pub fn push(&mut self, record: T) -> Result<(), TryReserveError> {
        let len = self.records.len();
        if len >= self.records.capacity() {
            self.records
                .try_reserve_exact(Self::grown_capacity(len) - len)?;
        }
        self.records.push(record);
        Ok(())
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there is no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Iterates over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    /// Takes the records out.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<T> std::ops::Deref for RecordList<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<T> IntoIterator for RecordList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
