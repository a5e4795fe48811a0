pub mod ack;
pub mod supply;
pub mod testimonial;
pub mod user;

pub use ack::{DeleteAck, InsertAck};
pub use supply::Supply;
pub use testimonial::Testimonial;
pub use user::User;
