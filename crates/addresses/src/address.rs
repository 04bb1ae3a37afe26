use serde::{Deserialize, Serialize};

use shopfront_core::{AddressId, StoreError, StoreResult};

/// A delivery address as the backend stores it: identifier plus free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub text: String,
}

impl Address {
    pub fn new(id: AddressId, text: impl Into<String>) -> StoreResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(StoreError::validation("address text cannot be blank"));
        }
        Ok(Self { id, text })
    }
}

/// The user's addresses plus the one currently chosen for delivery.
///
/// The list itself is backend-owned; the client only mirrors it and tracks
/// which entry checkout should use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    addresses: Vec<Address>,
    selected: Option<AddressId>,
}

impl AddressBook {
    /// Mirror the backend's list and selection.
    ///
    /// A selected id that does not appear in the list is a dangling selection
    /// and is rejected outright.
    pub fn from_remote(addresses: Vec<Address>, selected: Option<AddressId>) -> StoreResult<Self> {
        if let Some(id) = &selected {
            if !addresses.iter().any(|a| &a.id == id) {
                return Err(StoreError::not_found());
            }
        }
        Ok(Self {
            addresses,
            selected,
        })
    }

    /// Choose the delivery address for checkout.
    pub fn select(&mut self, id: AddressId) -> StoreResult<()> {
        if !self.addresses.iter().any(|a| a.id == id) {
            return Err(StoreError::not_found());
        }
        tracing::debug!(address_id = %id, "delivery address selected");
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Address> {
        let id = self.selected.as_ref()?;
        self.addresses.iter().find(|a| &a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
