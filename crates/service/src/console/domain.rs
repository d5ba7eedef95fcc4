use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Body of `POST /consoles`. Fields are optional so that presence is checked by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateConsoleInput {
    #[serde(default)]
    pub name: Option<String>,
}

/// A console that passed validation and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsole {
    pub name: String,
}

impl CreateConsoleInput {
    pub fn validate(self) -> Result<NewConsole, ServiceError> {
        match self.name {
            None => Err(ServiceError::Validation("name is required".into())),
            Some(name) if name.trim().is_empty() => Err(ServiceError::Validation("name must not be empty".into())),
            Some(name) => Ok(NewConsole { name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_missing_name() {
        let input: CreateConsoleInput = serde_json::from_str("{}").unwrap();
        assert!(matches!(input.validate(), Err(ServiceError::Validation(m)) if m.contains("required")));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let input = CreateConsoleInput { name: Some("  ".into()) };
        assert!(matches!(input.validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn name_is_kept_verbatim() {
        let input = CreateConsoleInput { name: Some("Sega Saturn".into()) };
        assert_eq!(input.validate().unwrap(), NewConsole { name: "Sega Saturn".into() });
    }
}
