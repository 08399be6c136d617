//! Distance-based fare policy.
//!
//! A base fare covers trips up to `base_distance`. Past that, each tier
//! charges a fixed amount per `band` of distance (a partial band counts as
//! a whole one) until the next tier takes over.
//!
//! The default table is the policy the network currently charges. It is
//! configuration, not law: deployments override it through the snapshot
//! file.

use serde::Deserialize;

/// Error returned when a fare table would not be monotonic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare table: {reason}")]
pub struct InvalidFareTable {
    reason: &'static str,
}

/// One surcharge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FareTier {
    /// Distance beyond which this tier applies.
    pub above: u64,

    /// Size of one charged distance band.
    pub band: u64,

    /// Charge per band.
    pub charge: u64,
}

impl FareTier {
    pub const fn new(above: u64, band: u64, charge: u64) -> Self {
        Self {
            above,
            band,
            charge,
        }
    }
}

/// Raw fare table as written in configuration.
#[derive(Debug, Deserialize)]
struct FareTableConfig {
    base_fare: u64,
    base_distance: u64,
    #[serde(default)]
    tiers: Vec<FareTier>,
}

/// Tiered fare table. Fares never decrease as distance grows.
///
/// # Examples
///
/// ```
/// use subway_server::path::FareTable;
///
/// let fares = FareTable::default();
/// assert_eq!(fares.fare_for(10), 1250);
/// assert_eq!(fares.fare_for(11), 1350);
/// assert_eq!(fares.fare_for(58), 2150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FareTableConfig")]
pub struct FareTable {
    base_fare: u64,
    base_distance: u64,
    tiers: Vec<FareTier>,
}

impl FareTable {
    /// Base fare.
    pub const BASE_FARE: u64 = 1250;

    /// Distance covered by the base fare.
    pub const BASE_DISTANCE: u64 = 10;

    /// +100 per 5 beyond 10, then +100 per 8 beyond 50.
    pub const DEFAULT_TIERS: [FareTier; 2] = [FareTier::new(10, 5, 100), FareTier::new(50, 8, 100)];

    /// Create a fare table.
    ///
    /// The first tier must start exactly at `base_distance`, and a table
    /// without tiers must have a base distance of 0. Tiers must be in
    /// strictly increasing order of `above`, and every band must be
    /// non-empty.
    pub fn new(
        base_fare: u64,
        base_distance: u64,
        tiers: Vec<FareTier>,
    ) -> Result<Self, InvalidFareTable> {
        if tiers.iter().any(|t| t.band == 0) {
            return Err(InvalidFareTable {
                reason: "tier band must be greater than zero",
            });
        }

        match tiers.first() {
            Some(first) if first.above != base_distance => {
                return Err(InvalidFareTable {
                    reason: "first tier must start at the base distance",
                });
            }
            None if base_distance != 0 => {
                return Err(InvalidFareTable {
                    reason: "a flat fare table must have base distance 0",
                });
            }
            _ => {}
        }

        if tiers.windows(2).any(|w| w[0].above >= w[1].above) {
            return Err(InvalidFareTable {
                reason: "tiers must be in strictly increasing order",
            });
        }

        Ok(Self {
            base_fare,
            base_distance,
            tiers,
        })
    }

    /// Fare for a trip of the given total distance.
    pub fn fare_for(&self, distance: u64) -> u64 {
        let mut fare = self.base_fare;

        for (i, tier) in self.tiers.iter().enumerate() {
            if distance <= tier.above {
                break;
            }
            let until = self
                .tiers
                .get(i + 1)
                .map_or(distance, |next| distance.min(next.above));
            let bands = (until - tier.above).div_ceil(tier.band);
            fare = fare.saturating_add(bands.saturating_mul(tier.charge));
        }

        fare
    }

    pub fn base_fare(&self) -> u64 {
        self.base_fare
    }

    pub fn base_distance(&self) -> u64 {
        self.base_distance
    }

    pub fn tiers(&self) -> &[FareTier] {
        &self.tiers
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            base_fare: Self::BASE_FARE,
            base_distance: Self::BASE_DISTANCE,
            tiers: Self::DEFAULT_TIERS.to_vec(),
        }
    }
}

impl TryFrom<FareTableConfig> for FareTable {
    type Error = InvalidFareTable;

    fn try_from(config: FareTableConfig) -> Result<Self, Self::Error> {
        Self::new(config.base_fare, config.base_distance, config.tiers)
    }
}
