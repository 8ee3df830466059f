//! Generate synthetic person records (name, address, email, creation time).
//!
//! Records come from the `fake` crate's English locale; timestamps are drawn uniformly
//! from the start of the current decade up to now. Nothing is seeded, so two runs never
//! produce the same batch.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Default number of records per run.
pub const DEFAULT_PEOPLE_COUNT: usize = 1000;

/// ISO-8601 layout for `created_at`: naive, second precision.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One person document. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    /// Street line and city/state/zip line separated by `\n`.
    pub address: String,
    pub email: String,
    /// Formatted with [`CREATED_AT_FORMAT`].
    pub created_at: String,
}

/// Generates `count` records using the thread-local RNG and the current UTC time.
pub fn generate_people(count: usize) -> Vec<PersonRecord> {
    let mut rng = rand::thread_rng();
    generate_people_with(&mut rng, count, Utc::now().naive_utc())
}

/// Generates `count` records from the given RNG, with timestamps bounded by `now`.
pub fn generate_people_with<R: Rng>(
    rng: &mut R,
    count: usize,
    now: NaiveDateTime,
) -> Vec<PersonRecord> {
    let start = decade_start(now);
    let span_secs = (now - start).num_seconds().max(0);

    let mut people = Vec::with_capacity(count);
    for _ in 0..count {
        let offset = rng.gen_range(0..=span_secs);
        let created_at = start + chrono::Duration::seconds(offset);
        people.push(PersonRecord {
            name: Name().fake_with_rng(rng),
            address: fake_address(rng),
            email: SafeEmail().fake_with_rng(rng),
            created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
        });
    }

    debug!(count = people.len(), since = %start, "generated person records");
    people
}

/// Midnight on Jan 1 of the decade containing `now` (e.g. 2020-01-01 for 2026).
pub fn decade_start(now: NaiveDateTime) -> NaiveDateTime {
    let year = now.year() - now.year().rem_euclid(10);
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(now)
}

fn fake_address<R: Rng>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{} {}\n{}, {} {}", number, street, city, state, zip)
}
