//! # Unit System
//!
//! Unit categories, base-unit conversion and admissibility rules.
//!
//! ## Unit Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Unit Categories                                 │
//! │                                                                         │
//! │  Weight:   kg ──×1000──► g (base)       decimals allowed               │
//! │  Volume:   l  ──×1000──► ml (base)      decimals allowed               │
//! │  Count:    pcs / box / dozen / …        whole numbers only             │
//! │                                                                         │
//! │  Anything the parser does not recognize is COUNT with factor 1.        │
//! │  A misrecorded unit must never block a sale, so parsing is infallible. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All engine arithmetic happens in base units (g, ml, or the count unit
//! itself); display units are converted back at the edges.

use std::fmt;

// =============================================================================
// Unit Class
// =============================================================================

/// The physical category a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// Mass-based units; base unit is the gram.
    Weight,
    /// Volume-based units; base unit is the millilitre.
    Volume,
    /// Indivisible piece-counted units; each unit is its own base.
    Count,
}

// =============================================================================
// Unit
// =============================================================================

/// A recognized transaction unit.
///
/// The four weight/volume units are the only ones with non-identity
/// conversion factors. Every other unit string (pcs, box, dozen, a typo)
/// degrades to [`Unit::Count`], which converts with factor 1 and only
/// admits whole-number quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Kilogram,
    Gram,
    Litre,
    Millilitre,
    /// Any count-like or unrecognized unit, keeping its original label.
    Count(String),
}

impl Unit {
    /// Parses a unit string. Infallible: unknown strings become count units.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::units::Unit;
    ///
    /// assert_eq!(Unit::parse("KG"), Unit::Kilogram);
    /// assert_eq!(Unit::parse("ml"), Unit::Millilitre);
    /// assert_eq!(Unit::parse("dozen"), Unit::Count("dozen".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Unit {
        match raw.trim().to_ascii_lowercase().as_str() {
            "kg" => Unit::Kilogram,
            "g" => Unit::Gram,
            "l" => Unit::Litre,
            "ml" => Unit::Millilitre,
            _ => Unit::Count(raw.trim().to_string()),
        }
    }

    /// Returns the unit's category.
    pub fn class(&self) -> UnitClass {
        match self {
            Unit::Kilogram | Unit::Gram => UnitClass::Weight,
            Unit::Litre | Unit::Millilitre => UnitClass::Volume,
            Unit::Count(_) => UnitClass::Count,
        }
    }

    /// Returns the base unit of this unit's category.
    ///
    /// `kg` → `g`, `l` → `ml`; base and count units map to themselves.
    pub fn base_unit(&self) -> Unit {
        match self {
            Unit::Kilogram | Unit::Gram => Unit::Gram,
            Unit::Litre | Unit::Millilitre => Unit::Millilitre,
            Unit::Count(label) => Unit::Count(label.clone()),
        }
    }

    /// Multiplication factor from this unit to its base unit.
    pub fn base_factor(&self) -> f64 {
        match self {
            Unit::Kilogram | Unit::Litre => 1000.0,
            Unit::Gram | Unit::Millilitre | Unit::Count(_) => 1.0,
        }
    }

    /// Converts a value in this unit to base units.
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.base_factor()
    }

    /// Converts a value in base units back to this unit.
    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.base_factor()
    }

    /// True for any unit that is not a recognized weight/volume unit.
    pub fn is_count_based(&self) -> bool {
        self.class() == UnitClass::Count
    }

    /// Whether fractional quantities are admissible in this unit.
    ///
    /// Weight and volume units always permit decimals, even when the
    /// displayed unit is already the base (plain `g` or `ml`). Count units
    /// never do: 2.5 packets is not a sellable quantity.
    pub fn is_decimal_allowed(&self) -> bool {
        !self.is_count_based()
    }

    /// The units the UI may offer for a product stocked in this unit.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::units::Unit;
    ///
    /// assert_eq!(Unit::parse("kg").allowed_display_units(), vec!["kg", "g"]);
    /// assert_eq!(Unit::parse("pcs").allowed_display_units(), vec!["pcs"]);
    /// ```
    pub fn allowed_display_units(&self) -> Vec<String> {
        match self.class() {
            UnitClass::Weight => vec!["kg".to_string(), "g".to_string()],
            UnitClass::Volume => vec!["l".to_string(), "ml".to_string()],
            UnitClass::Count => vec![self.to_string()],
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kilogram => write!(f, "kg"),
            Unit::Gram => write!(f, "g"),
            Unit::Litre => write!(f, "l"),
            Unit::Millilitre => write!(f, "ml"),
            Unit::Count(label) => write!(f, "{}", label),
        }
    }
}

// =============================================================================
// String-Keyed Convenience API
// =============================================================================
// The billing UI works with raw unit strings; these wrappers parse and
// convert in one call and can never fail.

/// Converts `value` from `unit` to the category's base unit.
pub fn to_base_unit(value: f64, unit: &str) -> f64 {
    Unit::parse(unit).to_base(value)
}

/// Converts `value` from the category's base unit back to `unit`.
pub fn from_base_unit(value: f64, unit: &str) -> f64 {
    Unit::parse(unit).from_base(value)
}

/// The units the UI may offer for a product stocked in `product_unit`.
pub fn allowed_display_units(product_unit: &str) -> Vec<String> {
    Unit::parse(product_unit).allowed_display_units()
}

// =============================================================================
// Unit Tests
// =============================================================================
