//! The in-progress cart of a conversation and its text rendering.

use indexmap::IndexMap;
use std::fmt::{self, Display};

/// Item name to requested quantity.
///
/// Keys are case-sensitive and kept in first-insertion order: overwriting an
/// item keeps its position, removing one keeps the order of the rest. The
/// rendering shown to the customer follows that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: IndexMap<String, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from `(item, quantity)` pairs. A repeated item keeps its
    /// first position and its last quantity.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut cart = Self::new();
        for (item, quantity) in pairs {
            cart.set(item, quantity);
        }
        cart
    }

    pub fn set(&mut self, item: impl Into<String>, quantity: u32) {
        self.items.insert(item.into(), quantity);
    }

    /// Overwrites matching items with the quantities from `other` and appends
    /// the new ones. Items `other` does not mention are left alone.
    pub fn merge(&mut self, other: Cart) {
        self.items.extend(other.items);
    }

    /// Removes `item`, returning its quantity if it was present.
    pub fn remove(&mut self, item: &str) -> Option<u32> {
        self.items.shift_remove(item)
    }

    /// Removes each requested item in turn and reports what happened to it.
    ///
    /// A name requested twice is removed the first time and reported missing
    /// the second.
    pub fn remove_items<S: AsRef<str>>(&mut self, items: &[S]) -> Removal {
        let mut removal = Removal::default();
        for item in items {
            let item = item.as_ref();
            match self.remove(item) {
                Some(_) => removal.removed.push(item.to_string()),
                None => removal.not_found.push(item.to_string()),
            }
        }
        removal.remaining = self.clone();
        removal
    }

    pub fn get(&self, item: &str) -> Option<u32> {
        self.items.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(item, quantity)| (item.as_str(), *quantity))
    }
}

/// Renders `"<qty> <item>, <qty> <item>, ..."`; an empty cart renders as `""`.
impl Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (item, quantity)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{quantity} {item}")?;
        }
        Ok(())
    }
}

/// Outcome of [`Cart::remove_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    /// Requested items that were in the cart, in request order.
    pub removed: Vec<String>,
    /// Requested items that were not in the cart, in request order.
    pub not_found: Vec<String>,
    /// The cart after the removals.
    pub remaining: Cart,
}
