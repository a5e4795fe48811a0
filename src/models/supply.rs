use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Supply {
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
}
