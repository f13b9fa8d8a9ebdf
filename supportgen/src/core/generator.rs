use chrono::Utc;
use fake::{
    faker::{
        address::en::{BuildingNumber, CityName, StreetName},
        internet::en::FreeEmail,
        name::en::Name,
        phone_number::en::PhoneNumber,
    },
    Fake,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    config::Settings,
    error::{Error, Result},
};
use crate::domain::{prelude::*, states::format_zip};

/// Every record expires on this date.
pub const EXPIRATION_DATE: &str = "2023-06-01";

/// ISO-8601 without offset, microsecond precision.
const PURCHASE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Decides whether a nullable field is filled in or left `null`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullPolicy {
    null_probability: f64,
}

impl NullPolicy {
    pub fn new(null_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&null_probability) {
            return Err(Error::InvalidConfig {
                var: super::config::NULL_PROBABILITY_VAR,
                reason: format!("{null_probability} is not within 0.0..=1.0"),
            });
        }
        Ok(Self { null_probability })
    }

    pub fn null_probability(&self) -> f64 {
        self.null_probability
    }

    /// Returns `None` with the configured probability, otherwise builds the
    /// value with `make`. The value is only generated when it is kept.
    ///
    pub fn apply<R, T>(&self, rng: &mut R, make: impl FnOnce(&mut R) -> T) -> Option<T>
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(self.null_probability) {
            None
        } else {
            Some(make(rng))
        }
    }
}

/// Produces synthetic client-support records.
///
/// The generator owns its random source, so a seeded RNG gives a
/// reproducible stream (apart from `purchase_time`, which is the wall clock).
///
pub struct RecordGenerator<R = StdRng> {
    rng: R,
    nulls: NullPolicy,
}

impl RecordGenerator<StdRng> {
    /// Creates a generator seeded from `settings.seed`, or from the OS when
    /// no seed is configured.
    ///
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, settings)
    }
}

impl<R: Rng> RecordGenerator<R> {
    pub fn new(rng: R, settings: &Settings) -> Result<Self> {
        Ok(Self {
            rng,
            nulls: NullPolicy::new(settings.null_probability)?,
        })
    }

    pub fn null_policy(&self) -> NullPolicy {
        self.nulls
    }

    /// Generates one record. Each nullable field gets its own draw.
    ///
    pub fn generate_record(&mut self) -> Record {
        let rng = &mut self.rng;
        let nulls = self.nulls;

        Record {
            txid: random_txid(rng),
            rfid: random_rfid(rng),
            item: INVENTORY[rng.random_range(0..INVENTORY.len())].to_string(),
            purchase_time: Utc::now().format(PURCHASE_TIME_FORMAT).to_string(),
            expiration_time: EXPIRATION_DATE.to_string(),
            days: rng.random_range(1..=7),
            name: Name().fake_with_rng(rng),
            address: nulls.apply(rng, random_address),
            phone: nulls.apply(rng, |rng| PhoneNumber().fake_with_rng(rng)),
            email: nulls.apply(rng, |rng| FreeEmail().fake_with_rng(rng)),
            emergency_contact: nulls.apply(rng, |rng| EmergencyContact {
                name: Name().fake_with_rng(rng),
                phone: PhoneNumber().fake_with_rng(rng),
            }),
        }
    }
}

/// A version 4 UUID built from the generator's RNG.
fn random_txid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

/// A 96-bit value as `0x`-prefixed lowercase hex, without zero padding.
fn random_rfid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bits = rng.random::<u128>() >> 32;
    format!("{bits:#x}")
}

/// Picks a state first so the ZIP can be drawn from that state's range.
fn random_address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    let state = STATE_ZIP_RANGES[rng.random_range(0..STATE_ZIP_RANGES.len())];
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);

    Address {
        street_address: format!("{building} {street}"),
        city: CityName().fake_with_rng(rng),
        state: state.abbr.to_string(),
        postalcode: format_zip(rng.random_range(state.min..=state.max)),
    }
}
