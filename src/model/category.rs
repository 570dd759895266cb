use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Declares an enumeration of Cabrillo tokens.
///
/// Every generated type parses case-insensitively via `parse`, never fails,
/// and keeps unrecognised input uppercased in `Other` so that tokens added to
/// the format later survive a round-trip.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A token outside the known set, stored uppercased.
            Other(String),
        }

        impl $name {
            /// Parses a token, case-insensitively.
            pub fn parse(token: &str) -> Self {
                let token = token.trim().to_ascii_uppercase();
                match token.as_str() {
                    $( $token => Self::$variant, )+
                    _ => Self::Other(token),
                }
            }

            /// Returns the canonical Cabrillo token.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $token, )+
                    Self::Other(token) => token.as_str(),
                }
            }

            /// Returns all known variants.
            pub fn all() -> &'static [$name] {
                static ALL: &[$name] = &[$( $name::$variant, )+];
                ALL
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self::parse(&token)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        #[mutants::skip]
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use token_enum;

token_enum! {
    /// `CATEGORY-ASSISTED`
    CategoryAssisted {
        Assisted => "ASSISTED",
        NonAssisted => "NON-ASSISTED",
    }
}

impl CategoryAssisted {
    pub fn is_assisted(&self) -> bool {
        *self == Self::Assisted
    }
}

token_enum! {
    /// `CATEGORY-BAND`, also the result of [`Frequency::to_band`](super::Frequency::to_band).
    CategoryBand {
        All => "ALL",
        M160 => "160M",
        M80 => "80M",
        M40 => "40M",
        M20 => "20M",
        M15 => "15M",
        M10 => "10M",
        M6 => "6M",
        M4 => "4M",
        M2 => "2M",
        Mhz222 => "222",
        Mhz432 => "432",
        Mhz902 => "902",
        Ghz1_2 => "1.2G",
        Ghz2_3 => "2.3G",
        Ghz3_4 => "3.4G",
        Ghz5_7 => "5.7G",
        Ghz10 => "10G",
        Ghz24 => "24G",
        Ghz47 => "47G",
        Ghz75 => "75G",
        Ghz122 => "122G",
        Ghz134 => "134G",
        Ghz241 => "241G",
        Light => "LIGHT",
        Vhf3Band => "VHF-3-BAND",
        VhfFmOnly => "VHF-FM-ONLY",
    }
}

token_enum! {
    /// `CATEGORY-MODE`
    CategoryMode {
        Cw => "CW",
        Digi => "DIGI",
        Fm => "FM",
        Rtty => "RTTY",
        Ssb => "SSB",
        Mixed => "MIXED",
    }
}

token_enum! {
    /// `CATEGORY-OPERATOR`
    CategoryOperator {
        SingleOp => "SINGLE-OP",
        MultiOp => "MULTI-OP",
        Checklog => "CHECKLOG",
    }
}

token_enum! {
    /// `CATEGORY-POWER`
    CategoryPower {
        High => "HIGH",
        Low => "LOW",
        Qrp => "QRP",
    }
}

token_enum! {
    /// `CATEGORY-STATION`
    CategoryStation {
        Distributed => "DISTRIBUTED",
        Fixed => "FIXED",
        Mobile => "MOBILE",
        Portable => "PORTABLE",
        Rover => "ROVER",
        RoverLimited => "ROVER-LIMITED",
        RoverUnlimited => "ROVER-UNLIMITED",
        Expedition => "EXPEDITION",
        Hq => "HQ",
        School => "SCHOOL",
        Explorer => "EXPLORER",
    }
}

token_enum! {
    /// `CATEGORY-TIME`
    CategoryTime {
        Hours6 => "6-HOURS",
        Hours8 => "8-HOURS",
        Hours12 => "12-HOURS",
        Hours24 => "24-HOURS",
    }
}

impl CategoryTime {
    /// Returns the operating time limit, or `None` for unknown tokens.
    pub fn duration(&self) -> Option<Duration> {
        let hours = match self {
            Self::Hours6 => 6,
            Self::Hours8 => 8,
            Self::Hours12 => 12,
            Self::Hours24 => 24,
            Self::Other(_) => return None,
        };
        Some(Duration::from_secs(hours * 3600))
    }
}

token_enum! {
    /// `CATEGORY-TRANSMITTER`
    CategoryTransmitter {
        One => "ONE",
        Two => "TWO",
        Limited => "LIMITED",
        Unlimited => "UNLIMITED",
        Swl => "SWL",
    }
}

token_enum! {
    /// `CATEGORY-OVERLAY`
    CategoryOverlay {
        Classic => "CLASSIC",
        Rookie => "ROOKIE",
        TbWires => "TB-WIRES",
        Youth => "YOUTH",
        NoviceTech => "NOVICE-TECH",
        Over50 => "OVER-50",
    }
}

/// The nine `CATEGORY-*` fields of a log. `None` means the tag was absent
/// or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub assisted: Option<CategoryAssisted>,
    pub band: Option<CategoryBand>,
    pub mode: Option<CategoryMode>,
    pub operator: Option<CategoryOperator>,
    pub power: Option<CategoryPower>,
    pub station: Option<CategoryStation>,
    pub time: Option<CategoryTime>,
    pub transmitter: Option<CategoryTransmitter>,
    pub overlay: Option<CategoryOverlay>,
}
