use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Projects,
    Experience,
    Skills,
    Contact,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Projects => "projects",
            Category::Experience => "experience",
            Category::Skills => "skills",
            Category::Contact => "contact",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
