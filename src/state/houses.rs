//! House-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Local edits are applied only from server response bodies, so the list
//! mirrors what the backend stored instead of what the form submitted.

#[cfg(test)]
#[path = "houses_test.rs"]
mod houses_test;

use crate::net::types::House;

/// Dashboard list of the user's houses.
#[derive(Clone, Debug, Default)]
pub struct HousesState {
    pub items: Vec<House>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HousesState {
    /// Replace the list with a fresh fetch.
    pub fn replace_all(&mut self, items: Vec<House>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_created(&mut self, house: House) {
        self.apply_updated(house);
    }

    /// Replace the house with a matching id, appending it if unknown.
    pub fn apply_updated(&mut self, house: House) {
        match self.items.iter_mut().find(|h| h.id == house.id) {
            Some(existing) => *existing = house,
            None => self.items.push(house),
        }
        self.error = None;
    }

    pub fn apply_removed(&mut self, id: i64) {
        self.items.retain(|h| h.id != id);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn find(&self, id: i64) -> Option<&House> {
        self.items.iter().find(|h| h.id == id)
    }

    /// Combined floor area of every listed house.
    pub fn total_area(&self) -> f64 {
        self.items.iter().map(House::area).sum()
    }
}
