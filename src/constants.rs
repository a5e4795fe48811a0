//! Collection names in the backing document store.

pub const USERS: &str = "users";
pub const SUPPLIES: &str = "supplies";
pub const TESTIMONIALS: &str = "testimonials";
pub const VOLUNTEERS: &str = "volunteers";
// Capitalized in the deployed database; kept as-is.
pub const COMMENTS: &str = "Comments";
