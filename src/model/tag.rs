use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix marking extension tags.
pub const X_PREFIX: &str = "X-";

/// A Cabrillo line tag in canonical uppercase form (`CALLSIGN`, `X-QSO`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const START_OF_LOG: Tag = Tag::from_static("START-OF-LOG");
    pub const END_OF_LOG: Tag = Tag::from_static("END-OF-LOG");
    pub const CALLSIGN: Tag = Tag::from_static("CALLSIGN");
    pub const CONTEST: Tag = Tag::from_static("CONTEST");
    pub const CATEGORY_ASSISTED: Tag = Tag::from_static("CATEGORY-ASSISTED");
    pub const CATEGORY_BAND: Tag = Tag::from_static("CATEGORY-BAND");
    pub const CATEGORY_MODE: Tag = Tag::from_static("CATEGORY-MODE");
    pub const CATEGORY_OPERATOR: Tag = Tag::from_static("CATEGORY-OPERATOR");
    pub const CATEGORY_POWER: Tag = Tag::from_static("CATEGORY-POWER");
    pub const CATEGORY_STATION: Tag = Tag::from_static("CATEGORY-STATION");
    pub const CATEGORY_TIME: Tag = Tag::from_static("CATEGORY-TIME");
    pub const CATEGORY_TRANSMITTER: Tag = Tag::from_static("CATEGORY-TRANSMITTER");
    pub const CATEGORY_OVERLAY: Tag = Tag::from_static("CATEGORY-OVERLAY");
    pub const CERTIFICATE: Tag = Tag::from_static("CERTIFICATE");
    pub const CLAIMED_SCORE: Tag = Tag::from_static("CLAIMED-SCORE");
    pub const CLUB: Tag = Tag::from_static("CLUB");
    pub const CREATED_BY: Tag = Tag::from_static("CREATED-BY");
    pub const EMAIL: Tag = Tag::from_static("EMAIL");
    pub const GRID_LOCATOR: Tag = Tag::from_static("GRID-LOCATOR");
    pub const LOCATION: Tag = Tag::from_static("LOCATION");
    pub const NAME: Tag = Tag::from_static("NAME");
    pub const ADDRESS: Tag = Tag::from_static("ADDRESS");
    pub const ADDRESS_CITY: Tag = Tag::from_static("ADDRESS-CITY");
    pub const ADDRESS_STATE_PROVINCE: Tag = Tag::from_static("ADDRESS-STATE-PROVINCE");
    pub const ADDRESS_POSTALCODE: Tag = Tag::from_static("ADDRESS-POSTALCODE");
    pub const ADDRESS_COUNTRY: Tag = Tag::from_static("ADDRESS-COUNTRY");
    pub const OPERATORS: Tag = Tag::from_static("OPERATORS");
    pub const OFFTIME: Tag = Tag::from_static("OFFTIME");
    pub const SOAPBOX: Tag = Tag::from_static("SOAPBOX");
    pub const DEBUG: Tag = Tag::from_static("DEBUG");
    pub const QSO: Tag = Tag::from_static("QSO");
    pub const X_QSO: Tag = Tag::from_static("X-QSO");

    const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a tag from raw input, trimming and uppercasing it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Cow::Owned(name.as_ref().trim().to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for extension tags: `X-` prefixed, except `X-QSO`.
    pub fn is_custom(&self) -> bool {
        *self != Self::X_QSO && self.0.starts_with(X_PREFIX)
    }

    /// Returns `true` if this is one of the header tags the model has a
    /// dedicated field for.
    pub fn is_known(&self) -> bool {
        KNOWN_TAGS.contains(self)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[mutants::skip]
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Header tags in canonical emission order.
pub static CANONICAL_TAGS: &[Tag] = &[
    Tag::CREATED_BY,
    Tag::CONTEST,
    Tag::CALLSIGN,
    Tag::OPERATORS,
    Tag::GRID_LOCATOR,
    Tag::LOCATION,
    Tag::CLAIMED_SCORE,
    Tag::OFFTIME,
    Tag::CATEGORY_ASSISTED,
    Tag::CATEGORY_BAND,
    Tag::CATEGORY_MODE,
    Tag::CATEGORY_OPERATOR,
    Tag::CATEGORY_POWER,
    Tag::CATEGORY_STATION,
    Tag::CATEGORY_TIME,
    Tag::CATEGORY_TRANSMITTER,
    Tag::CATEGORY_OVERLAY,
    Tag::CERTIFICATE,
    Tag::CLUB,
    Tag::NAME,
    Tag::EMAIL,
    Tag::ADDRESS,
    Tag::ADDRESS_CITY,
    Tag::ADDRESS_STATE_PROVINCE,
    Tag::ADDRESS_POSTALCODE,
    Tag::ADDRESS_COUNTRY,
    Tag::SOAPBOX,
    Tag::DEBUG,
];

// Every tag with a meaning of its own; anything else lands in `Log::custom`.
static KNOWN_TAGS: &[Tag] = &[
    Tag::START_OF_LOG,
    Tag::END_OF_LOG,
    Tag::CREATED_BY,
    Tag::CONTEST,
    Tag::CALLSIGN,
    Tag::OPERATORS,
    Tag::GRID_LOCATOR,
    Tag::LOCATION,
    Tag::CLAIMED_SCORE,
    Tag::OFFTIME,
    Tag::CATEGORY_ASSISTED,
    Tag::CATEGORY_BAND,
    Tag::CATEGORY_MODE,
    Tag::CATEGORY_OPERATOR,
    Tag::CATEGORY_POWER,
    Tag::CATEGORY_STATION,
    Tag::CATEGORY_TIME,
    Tag::CATEGORY_TRANSMITTER,
    Tag::CATEGORY_OVERLAY,
    Tag::CERTIFICATE,
    Tag::CLUB,
    Tag::NAME,
    Tag::EMAIL,
    Tag::ADDRESS,
    Tag::ADDRESS_CITY,
    Tag::ADDRESS_STATE_PROVINCE,
    Tag::ADDRESS_POSTALCODE,
    Tag::ADDRESS_COUNTRY,
    Tag::SOAPBOX,
    Tag::DEBUG,
    Tag::QSO,
    Tag::X_QSO,
];
