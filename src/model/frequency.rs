use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::CategoryBand;

/// Lowest value accepted as a kilohertz frequency; anything below is a band token.
const MIN_KILOHERTZ: u64 = 1800;

// Upper bounds (exclusive, kHz) and the band below each, checked in order.
static BAND_CUTOFFS: &[(u64, CategoryBand)] = &[
    (3_500, CategoryBand::M160),
    (7_000, CategoryBand::M80),
    (14_000, CategoryBand::M40),
    (21_000, CategoryBand::M20),
    (28_000, CategoryBand::M15),
    (50_000_000, CategoryBand::M10),
    (70_000_000, CategoryBand::M6),
    (144_000_000, CategoryBand::M4),
    (222_000_000, CategoryBand::M2),
    (430_000_000, CategoryBand::Mhz222),
    (900_000_000, CategoryBand::Mhz432),
    (1_200_000_000, CategoryBand::Mhz902),
    (2_300_000_000, CategoryBand::Ghz1_2),
];

/// The frequency column of a QSO line: either kilohertz (`14042`) or a
/// band token for VHF and up (`50`, `144`, `1.2G`, `LIGHT`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency(String);

impl Frequency {
    pub const MHZ_50: &'static str = "50";
    pub const MHZ_70: &'static str = "70";
    pub const MHZ_144: &'static str = "144";
    pub const MHZ_222: &'static str = "222";
    pub const MHZ_432: &'static str = "432";
    pub const MHZ_902: &'static str = "902";
    pub const GHZ_1_2: &'static str = "1.2G";
    pub const GHZ_2_3: &'static str = "2.3G";
    pub const GHZ_3_4: &'static str = "3.4G";
    pub const GHZ_5_7: &'static str = "5.7G";
    pub const GHZ_10: &'static str = "10G";
    pub const GHZ_24: &'static str = "24G";
    pub const GHZ_47: &'static str = "47G";
    pub const GHZ_75: &'static str = "75G";
    pub const GHZ_122: &'static str = "122G";
    pub const GHZ_134: &'static str = "134G";
    pub const GHZ_241: &'static str = "241G";
    pub const LIGHT: &'static str = "LIGHT";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the value is a kilohertz frequency rather than a band token.
    pub fn is_frequency(&self) -> bool {
        self.to_kilohertz() != 0
    }

    /// Returns the frequency in kHz, or 0 if the value is not an integer ≥ 1800.
    pub fn to_kilohertz(&self) -> u64 {
        match self.0.parse::<u64>() {
            Ok(khz) if khz >= MIN_KILOHERTZ => khz,
            _ => 0,
        }
    }

    /// Maps the frequency to the band it falls in.
    ///
    /// Band tokens map directly: `50`, `70` and `144` to their meter bands,
    /// anything else is taken as the band name itself.
    pub fn to_band(&self) -> CategoryBand {
        if self.is_frequency() {
            let khz = self.to_kilohertz();
            return BAND_CUTOFFS
                .iter()
                .find(|(limit, _)| khz < *limit)
                .map_or(CategoryBand::Ghz2_3, |(_, band)| band.clone());
        }
        match self.0.as_str() {
            Self::MHZ_50 => CategoryBand::M6,
            Self::MHZ_70 => CategoryBand::M4,
            Self::MHZ_144 => CategoryBand::M2,
            other => CategoryBand::parse(other),
        }
    }
}

impl From<&str> for Frequency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[mutants::skip]
impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
