//! The four optional constraints of a property search.

use rust_decimal::Decimal;

/// Hard upper bound on the number of properties a single search returns.
/// Matches beyond it are dropped, no continuation is offered.
pub const PROPERTY_RESULT_CAP: usize = 100;

/// Conjunctive filters for a property search. `None` places no constraint.
///
/// Values are passed to the store as-is: a `price_min` above `price_max`
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Substring the property name must contain.
    pub name: Option<String>,
    /// Substring the property address must contain.
    pub address: Option<String>,
    /// Inclusive lower bound on price.
    pub price_min: Option<Decimal>,
    /// Inclusive upper bound on price.
    pub price_max: Option<Decimal>,
}

impl PropertyFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }
}
