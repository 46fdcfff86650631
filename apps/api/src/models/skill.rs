use serde::{Deserialize, Serialize};

/// Autocomplete reference entry for a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
}

impl SkillSuggestion {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.map(str::to_string),
        }
    }
}
