use serde::{Deserialize, Serialize};

/// Input for the creation path, where storage assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: f64,
    pub age: i32,
    #[serde(default)]
    pub profile_image: String,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, salary: f64, age: i32) -> Self {
        Self {
            name: name.into(),
            salary,
            age,
            profile_image: String::new(),
        }
    }

    pub fn with_profile_image(mut self, profile_image: impl Into<String>) -> Self {
        self.profile_image = profile_image.into();
        self
    }
}
