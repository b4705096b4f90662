pub mod booking;
pub mod cart;
pub mod field;

pub use booking::{Booking, BookingDetail, BookingStatus, PaymentStatus};
pub use cart::{BookingCart, BookingSlot};
pub use field::{Field, OperatingHours, Venue};

use serde::{Deserialize, Deserializer};

/// GraphQL `ID` values arrive as either numbers or strings depending on
/// the resolver; normalize both to i64.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Str(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => Ok(n),
        IdRepr::Str(s) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {s}"))),
    }
}

pub(crate) fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "de_id")] i64);

    Option::<Wrapper>::deserialize(deserializer).map(|opt| opt.map(|w| w.0))
}
