//! Header model and by-name field access.

mod fields;
mod header;

pub use fields::{CONTACT_EMAIL, CONTACT_NAME, FACILITY_ID, FieldMap, NEEDS_REVIEW};
pub use header::Header;
