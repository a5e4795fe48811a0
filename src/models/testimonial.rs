use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub title: String,
    pub description: String,
}
