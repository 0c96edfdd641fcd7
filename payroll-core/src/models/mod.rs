mod form_input;
mod month;

pub use form_input::{FormInput, ValidatedInput};
pub use month::{FALLBACK_MAX_DAYS, Month};
