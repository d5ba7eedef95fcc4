use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{console, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub console_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Console }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Console => Entity::belongs_to(console::Entity)
                .from(Column::ConsoleId)
                .to(console::Column::Id)
                .into(),
        }
    }
}

impl Related<console::Entity> for Entity {
    fn to() -> RelationDef { Relation::Console.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() { return Err(errors::ModelError::Validation("title required".into())); }
    Ok(())
}

/// Insert a game. A dangling `console_id` is rejected by the foreign key and surfaces as `Conflict`.
pub async fn create<C: ConnectionTrait>(db: &C, title: &str, console_id: i32) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    let am = ActiveModel {
        title: Set(title.to_string()),
        console_id: Set(console_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from)
}

pub async fn find_by_title<C: ConnectionTrait>(db: &C, title: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Title.eq(title))
        .one(db)
        .await
        .map_err(errors::ModelError::from)
}

pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(errors::ModelError::from)?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_console_id_as_camel_case() {
        let m = Model { id: 3, title: "Metroid".into(), console_id: 7 };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"id": 3, "title": "Metroid", "consoleId": 7}));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(matches!(validate_title("   "), Err(errors::ModelError::Validation(_))));
        assert!(validate_title("Zelda").is_ok());
    }
}
