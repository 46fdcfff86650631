use serde::{Deserialize, Serialize};

/// The profile a user submits. Replaced wholesale on every submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    /// Insertion order is kept for display.
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub preferred_location: String,
}

impl UserProfile {
    /// Trims fields and drops blank or repeated skills, keeping first occurrence order.
    pub fn normalized(mut self) -> Self {
        self.full_name = self.full_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.preferred_location = self.preferred_location.trim().to_string();

        let mut skills: Vec<String> = Vec::with_capacity(self.skills.len());
        for skill in self.skills {
            let skill = skill.trim();
            if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }
        self.skills = skills;
        self
    }

    /// A profile is complete once it names a person, an email, and at least one skill.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.skills.is_empty()
    }

    /// Returns every problem that would block a submit. Empty means valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.full_name.trim().is_empty() {
            errors.push("full_name cannot be empty".to_string());
        }
        if !is_valid_email(&self.email) {
            errors.push(format!("'{}' is not a valid email address", self.email));
        }
        if self.skills.iter().all(|s| s.trim().is_empty()) {
            errors.push("at least one skill is required".to_string());
        }
        errors
    }

    /// The location filter to apply, if the user gave one.
    pub fn location_filter(&self) -> Option<&str> {
        let location = self.preferred_location.trim();
        (!location.is_empty()).then_some(location)
    }
}

/// Accepts `local@domain.tld`: one `@`, no whitespace, a dot after the `@`
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_of_experience: 4,
            preferred_location: String::new(),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b@sub.example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("ada lovelace@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_normalized_dedups_and_keeps_order() {
        let p = profile(&["Rust", " Go ", "Rust", "", "SQL"]).normalized();
        assert_eq!(p.skills, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_valid_profile_has_no_errors() {
        assert!(profile(&["React"]).validation_errors().is_empty());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let p = UserProfile {
            full_name: "  ".to_string(),
            email: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(p.validation_errors().len(), 3);
    }

    #[test]
    fn test_is_complete_requires_skills() {
        assert!(profile(&["React"]).is_complete());
        assert!(!profile(&[]).is_complete());
        assert!(!UserProfile::default().is_complete());
    }

    #[test]
    fn test_location_filter_ignores_blank() {
        let mut p = profile(&["React"]);
        assert_eq!(p.location_filter(), None);
        p.preferred_location = " Remote ".to_string();
        assert_eq!(p.location_filter(), Some("Remote"));
    }

    #[test]
    fn test_profile_deserializes_without_optional_fields() {
        let json = r#"{"full_name":"Ada","email":"ada@example.com","skills":["Rust"]}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.years_of_experience, 0);
        assert!(p.preferred_location.is_empty());
    }
}
