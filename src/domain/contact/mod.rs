//! Contact domain module.
//!
//! Personal details, contact preferences and the pure validators that
//! judge them.

mod details;
mod preferences;
mod validators;

pub use details::{
    earliest_date_of_birth, validate_date_of_birth, ContactDetails, Title,
    MAX_FURTHER_INFORMATION_LENGTH,
};
pub use preferences::{
    Answer, ContactDay, ContactMethod, ContactPreferences, ContactSchedule, ContactTiming,
    CONTACT_MINUTES, FIRST_CONTACT_HOUR, LAST_CONTACT_HOUR,
};
pub use validators::{format_uk_phone, is_valid_email, is_valid_uk_phone, is_weekend};
