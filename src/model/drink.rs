//! Drink definitions and the catalog they are looked up in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A drink the bar serves and the share of the bar's capacity it occupies while served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkDefinition {
    pub name: String,
    #[serde(rename = "value", alias = "capacityCost")]
    pub capacity_cost: u32,
}

impl DrinkDefinition {
    pub fn new(name: impl Into<String>, capacity_cost: u32) -> Self {
        Self {
            name: name.into(),
            capacity_cost,
        }
    }
}

/// Reasons a list of drink definitions cannot become a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Drink name must not be empty")]
    EmptyName,

    #[error("Drink {0} must have a capacity cost greater than zero")]
    ZeroCost(String),

    #[error("Drink {0} is defined more than once")]
    DuplicateName(String),
}

/// Immutable lookup from drink name to definition. Names match case-insensitively.
#[derive(Debug, Clone)]
pub struct Catalog {
    drinks: HashMap<String, DrinkDefinition>,
}

impl Catalog {
    pub fn new(definitions: impl IntoIterator<Item = DrinkDefinition>) -> Result<Self, CatalogError> {
        let mut drinks = HashMap::new();
        for drink in definitions {
            if drink.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if drink.capacity_cost == 0 {
                return Err(CatalogError::ZeroCost(drink.name));
            }
            let key = drink.name.to_lowercase();
            if drinks.contains_key(&key) {
                return Err(CatalogError::DuplicateName(drink.name));
            }
            drinks.insert(key, drink);
        }
        Ok(Self { drinks })
    }

    pub fn lookup(&self, name: &str) -> Option<&DrinkDefinition> {
        self.drinks.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}
