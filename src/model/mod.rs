mod callsign;
mod category;
mod frequency;
mod log;
mod qso;
mod tag;
mod validation;

pub use callsign::{Callsign, Locator};
pub use category::{
    Category, CategoryAssisted, CategoryBand, CategoryMode, CategoryOperator, CategoryOverlay,
    CategoryPower, CategoryStation, CategoryTime, CategoryTransmitter,
};
pub use frequency::Frequency;
pub use log::{Address, Log, Offtime, VERSION_2, VERSION_3};
pub use qso::{Qso, QsoInfo, QsoMode};
pub use tag::{CANONICAL_TAGS, Tag, X_PREFIX};
pub use validation::{ValidationError, validate_callsign, validate_locator};
