use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Body of `POST /games`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub console_id: Option<i64>,
}

/// A game that passed validation; its console has not been checked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub title: String,
    pub console_id: i32,
}

impl CreateGameInput {
    pub fn validate(self) -> Result<NewGame, ServiceError> {
        let title = match self.title {
            None => return Err(ServiceError::Validation("title is required".into())),
            Some(t) if t.trim().is_empty() => return Err(ServiceError::Validation("title must not be empty".into())),
            Some(t) => t,
        };
        let console_id = self.console_id.ok_or_else(|| ServiceError::Validation("consoleId is required".into()))?;
        // console ids are 32-bit; anything wider names no console
        let console_id =
            i32::try_from(console_id).map_err(|_| ServiceError::Conflict(format!("console {} does not exist", console_id)))?;
        Ok(NewGame { title, console_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_console_id_is_rejected() {
        let input: CreateGameInput = serde_json::from_str(r#"{"title": "MasterGame, Super Fun"}"#).unwrap();
        assert!(matches!(input.validate(), Err(ServiceError::Validation(m)) if m.contains("consoleId")));
    }

    #[test]
    fn non_integer_console_id_does_not_deserialize() {
        assert!(serde_json::from_str::<CreateGameInput>(r#"{"title": "X", "consoleId": "1"}"#).is_err());
        assert!(serde_json::from_str::<CreateGameInput>(r#"{"title": "X", "consoleId": 1.5}"#).is_err());
    }

    #[test]
    fn camel_case_body_validates() {
        let input: CreateGameInput = serde_json::from_str(r#"{"title": "Chrono Trigger", "consoleId": 4}"#).unwrap();
        assert_eq!(input.validate().unwrap(), NewGame { title: "Chrono Trigger".into(), console_id: 4 });
    }

    #[test]
    fn out_of_range_console_id_is_unknown_console() {
        let input: CreateGameInput = serde_json::from_str(r#"{"title": "X", "consoleId": 4294967296}"#).unwrap();
        assert!(matches!(input.validate(), Err(ServiceError::Conflict(m)) if m.contains("4294967296")));
        let input = CreateGameInput { title: Some("Y".into()), console_id: Some(i64::from(i32::MIN) - 1) };
        assert!(matches!(input.validate(), Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn empty_title_is_rejected() {
        let input = CreateGameInput { title: Some(String::new()), console_id: Some(1) };
        assert!(matches!(input.validate(), Err(ServiceError::Validation(_))));
    }
}
