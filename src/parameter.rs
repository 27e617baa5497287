use std::fmt;

use crate::entity::readings;

/// The four water-quality measurements a reading carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Temperature,
    DissolvedOxygen,
    Ph,
    Ammonia,
}

impl Parameter {
    /// Wire order used by the latest-values endpoint.
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::DissolvedOxygen,
        Self::Ph,
        Self::Ammonia,
    ];

    /// Query-string / JSON key, which is also the `ras_data` column name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temp",
            Self::DissolvedOxygen => "do",
            Self::Ph => "ph",
            Self::Ammonia => "ammonia",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Alert title recorded in `ras_history`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::DissolvedOxygen => "Dissolved Oxygen",
            Self::Ph => "pH Level",
            Self::Ammonia => "Ammonia",
        }
    }

    #[must_use]
    pub const fn column(self) -> readings::Column {
        match self {
            Self::Temperature => readings::Column::Temp,
            Self::DissolvedOxygen => readings::Column::DissolvedOxygen,
            Self::Ph => readings::Column::Ph,
            Self::Ammonia => readings::Column::Ammonia,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
