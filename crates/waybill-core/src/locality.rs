//! # Locality Classifier
//!
//! Turns an origin/destination pair into a [`LocalityTier`].
//!
//! ```text
//! origin.country == destination.country ?
//!      │
//!      ├── no  → International
//!      │
//!      └── yes → origin.city == destination.city ?
//!                     ├── yes → SameCity
//!                     └── no  → SameCountry
//! ```
//!
//! Comparison is exact and case-sensitive. `street` never participates.

use crate::types::{Address, LocalityTier};

/// Classifies the distance between two addresses.
///
/// ## Example
/// ```rust
/// use waybill_core::locality::classify;
/// use waybill_core::types::{Address, LocalityTier};
///
/// let dallas = Address::new("USA", "Dallas", "1234 left lane.");
/// let seattle = Address::new("USA", "Seatle", "1234 left lane.");
/// assert_eq!(classify(&dallas, &seattle), LocalityTier::SameCountry);
/// ```
pub fn classify(origin: &Address, destination: &Address) -> LocalityTier {
    if origin.country != destination.country {
        LocalityTier::International
    } else if origin.city == destination.city {
        LocalityTier::SameCity
    } else {
        LocalityTier::SameCountry
    }
}
