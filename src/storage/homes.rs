//! In-memory home store
//!
//! Holds the inventory for the lifetime of the process. Records keep their
//! insertion order, and lookups scan linearly for the first record matching
//! an (address, ZIP code) pair.

use crate::error::{Action, InventoryError, InventoryResult};
use crate::models::HomeRecord;

/// A sale status change applied by [`HomeStore::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub before: HomeRecord,
    pub after: HomeRecord,
}

/// Ordered, in-memory collection of homes
#[derive(Debug, Default)]
pub struct HomeStore {
    homes: Vec<HomeRecord>,
}

impl HomeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a home
    pub fn add(&mut self, home: HomeRecord) -> InventoryResult<&HomeRecord> {
        home.validate()?;
        self.homes.push(home);
        Ok(&self.homes[self.homes.len() - 1])
    }

    /// Remove the first home matching the address and ZIP code
    pub fn remove(&mut self, address: &str, zip_code: i64) -> InventoryResult<HomeRecord> {
        let index = self
            .position(address, zip_code)
            .ok_or_else(|| InventoryError::home_not_found(Action::Remove, address, zip_code))?;

        Ok(self.homes.remove(index))
    }

    /// Overwrite the sale status of the first matching home.
    ///
    /// The new status is stored as given.
    pub fn update(
        &mut self,
        address: &str,
        zip_code: i64,
        new_sale_status: &str,
    ) -> InventoryResult<StatusChange> {
        let index = self
            .position(address, zip_code)
            .ok_or_else(|| InventoryError::home_not_found(Action::Update, address, zip_code))?;

        let home = &mut self.homes[index];
        let before = home.clone();
        home.sale_status = new_sale_status.to_string();

        Ok(StatusChange {
            before,
            after: home.clone(),
        })
    }

    /// Render every home, one line each, in insertion order
    pub fn list(&self) -> InventoryResult<String> {
        if self.homes.is_empty() {
            return Err(InventoryError::Empty);
        }

        let mut output = String::new();
        for home in &self.homes {
            output.push_str(&home.to_string());
            output.push('\n');
        }
        Ok(output)
    }

    /// Find the first home matching the address and ZIP code
    pub fn find(&self, address: &str, zip_code: i64) -> Option<&HomeRecord> {
        self.homes.iter().find(|h| h.matches(address, zip_code))
    }

    /// Iterate homes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &HomeRecord> {
        self.homes.iter()
    }

    pub fn len(&self) -> usize {
        self.homes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homes.is_empty()
    }

    fn position(&self, address: &str, zip_code: i64) -> Option<usize> {
        self.homes.iter().position(|h| h.matches(address, zip_code))
    }
}
