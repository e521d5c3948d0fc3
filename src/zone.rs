use chrono::FixedOffset;
use strum::{Display, EnumIter};

/// Time zones served by the API.  Both have a fixed offset with no daylight saving.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Zone {
    Jst,
    Utc,
}

impl Zone {
    pub const fn offset_seconds(self) -> i32 {
        match self {
            Zone::Jst => 9 * 60 * 60,
            Zone::Utc => 0,
        }
    }

    pub fn offset(self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_seconds()).unwrap()
    }

    /// Route the zone is served at, e.g. `/jst`.
    pub fn path(self) -> String {
        format!("/{self}")
    }
}
