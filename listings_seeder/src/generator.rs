//! Random listings rows shaped like the production data.

use chrono::{Days, Months, NaiveDate};
use models_listings::db::{Owner, Property, PropertyImage, PropertyTrace};
use rand::Rng;
use rust_decimal::Decimal;
use std::fmt::Write;

const ID_BYTES: usize = 12;
const CODE_HEX_CHARS: usize = 10;

/// Produces owners, properties, images and traces from a random source.
///
/// `today` anchors the birthdays and sale dates so output only depends on the rng.
pub struct SeedGenerator<R> {
    rng: R,
    today: NaiveDate,
}

impl<R: Rng> SeedGenerator<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    /// 24 lowercase hex characters
    pub fn id(&mut self) -> String {
        let bytes: [u8; ID_BYTES] = self.rng.r#gen();
        hex(&bytes)
    }

    pub fn owner(&mut self) -> Owner {
        let years = self.rng.gen_range(20..=70);
        Owner {
            id: self.id(),
            name: format!("Owner {}", self.rng.gen_range(1..=1_000_000)),
            address: format!("Calle {}", self.rng.gen_range(1..=9999)),
            photo: format!(
                "https://picsum.photos/200?random={}",
                self.rng.gen_range(1..=1000)
            ),
            birthday: self
                .today
                .checked_sub_months(Months::new(years * 12))
                .unwrap_or(self.today),
        }
    }

    pub fn property(&mut self, owner_id: &str) -> Property {
        let uuid = uuid::Builder::from_random_bytes(self.rng.r#gen()).into_uuid();
        let code = uuid.simple().to_string();
        Property {
            id: self.id(),
            name: format!("Propiedad {}", self.rng.gen_range(1..=1_000_000)),
            address: format!("Avenida {}", self.rng.gen_range(1..=9999)),
            price: Decimal::from(self.rng.gen_range(10_000_i64..500_000)),
            code_internal: format!("INT-{}", &code[..CODE_HEX_CHARS]),
            year: self.rng.gen_range(1950..2024),
            owner_id: owner_id.to_string(),
        }
    }

    pub fn image(&mut self, property_id: &str) -> PropertyImage {
        PropertyImage {
            id: self.id(),
            property_id: property_id.to_string(),
            file: format!(
                "https://picsum.photos/300?random={}",
                self.rng.gen_range(1..=1000)
            ),
            enabled: self.rng.gen_bool(0.5),
        }
    }

    pub fn trace(&mut self, property_id: &str) -> PropertyTrace {
        let days_ago = self.rng.gen_range(1..=1000);
        let value = Decimal::from(self.rng.gen_range(20_000_i64..100_000));
        PropertyTrace {
            id: self.id(),
            property_id: property_id.to_string(),
            date_sale: self
                .today
                .checked_sub_days(Days::new(days_ago))
                .unwrap_or(self.today),
            name: format!("Venta {}", self.rng.gen_range(1..=10_000)),
            value,
            tax: (value * Decimal::new(19, 2)).round_dp(2),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}
