//! Insurable risks and the company's risk catalog
//!
//! A risk is identified by its [`RiskId`], not by its name or price. Two
//! risks created separately are different catalog options even when they
//! look identical; a clone of a risk is the same option.

use serde::Serialize;

use core_kernel::{CoreError, Money, RiskId};

/// A named insurable hazard with a yearly price
///
/// Risks are minted only by [`Risk::new`], which enforces a non-negative
/// price and a fresh identity, so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Risk {
    id: RiskId,
    name: String,
    yearly_price: Money,
}

impl Risk {
    /// Creates a new catalog option with a fresh identity
    ///
    /// # Errors
    ///
    /// Returns a validation error if the yearly price is negative
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let fire = Risk::new("Fire", Money::new(dec!(140)))?;
    /// ```
    pub fn new(name: impl Into<String>, yearly_price: Money) -> Result<Self, CoreError> {
        if yearly_price.is_negative() {
            return Err(CoreError::validation(format!(
                "Yearly price can't be negative: {}",
                yearly_price
            )));
        }
        Ok(Self {
            id: RiskId::new_v7(),
            name: name.into(),
            yearly_price,
        })
    }

    /// Returns the catalog identity
    pub fn id(&self) -> RiskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn yearly_price(&self) -> Money {
        self.yearly_price
    }

    /// Returns true if both values refer to the same catalog option
    pub fn is_same_option(&self, other: &Risk) -> bool {
        self.id == other.id
    }
}

/// Ordered collection of the risks a company can sell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskCatalog {
    risks: Vec<Risk>,
}

impl RiskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, keeping only the first entry for each identity
    pub fn from_risks<I>(risks: I) -> Self
    where
        I: IntoIterator<Item = Risk>,
    {
        let mut catalog = Self::new();
        for risk in risks {
            catalog.insert(risk);
        }
        catalog
    }

    /// Returns true if this exact option is in the catalog
    pub fn contains(&self, risk: &Risk) -> bool {
        self.risks.iter().any(|r| r.is_same_option(risk))
    }

    pub fn get(&self, id: RiskId) -> Option<&Risk> {
        self.risks.iter().find(|r| r.id == id)
    }

    /// Appends a risk; returns false if the option is already listed
    pub fn insert(&mut self, risk: Risk) -> bool {
        if self.contains(&risk) {
            return false;
        }
        self.risks.push(risk);
        true
    }

    pub fn remove(&mut self, id: RiskId) -> Option<Risk> {
        let index = self.risks.iter().position(|r| r.id == id)?;
        Some(self.risks.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Risk> {
        self.risks.iter()
    }

    pub fn len(&self) -> usize {
        self.risks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    /// Returns the entries as a slice, in insertion order
    pub fn as_slice(&self) -> &[Risk] {
        &self.risks
    }
}

impl FromIterator<Risk> for RiskCatalog {
    fn from_iter<I: IntoIterator<Item = Risk>>(iter: I) -> Self {
        Self::from_risks(iter)
    }
}
