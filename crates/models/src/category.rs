use sea_orm::{entity::prelude::*, Condition, ConnectionTrait, NotSet, Order, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, db_err};
use crate::search::{contains_literal, page_offset};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub category_code: String,
    pub category_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows whose code or name contains `keyword`, one page of them plus the total match count.
pub async fn search<C: ConnectionTrait>(
    db: &C,
    keyword: &str,
    order_by: Column,
    order: Order,
    page: u64,
    size: u64,
) -> Result<(Vec<Model>, u64), errors::ModelError> {
    let paginator = Entity::find()
        .filter(
            Condition::any()
                .add(contains_literal(Column::CategoryCode, keyword))
                .add(contains_literal(Column::CategoryName, keyword)),
        )
        .order_by(order_by, order)
        .paginate(db, size.max(1));
    let total = paginator.num_items().await.map_err(db_err)?;
    if page_offset(page, size).is_none() {
        return Ok((Vec::new(), total));
    }
    let rows = paginator.fetch_page(page).await.map_err(db_err)?;
    Ok((rows, total))
}

pub async fn find_by_code<C: ConnectionTrait>(db: &C, code: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::CategoryCode.eq(code))
        .one(db)
        .await
        .map_err(db_err)
}

pub async fn find_many<C: ConnectionTrait>(db: &C, ids: Vec<i64>) -> Result<Vec<Model>, errors::ModelError> {
    if ids.is_empty() { return Ok(Vec::new()); }
    Entity::find()
        .filter(Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(db_err)
}

/// Update in place when `id` names a row, otherwise insert under a generated id.
pub async fn save<C: ConnectionTrait>(
    db: &C,
    id: Option<i64>,
    code: &str,
    name: &str,
    description: Option<String>,
) -> Result<Model, errors::ModelError> {
    if code.trim().is_empty() { return Err(errors::ModelError::Validation("category_code required".into())); }
    let mut am = ActiveModel {
        id: NotSet,
        category_code: Set(code.to_string()),
        category_name: Set(name.to_string()),
        description: Set(description),
    };
    let existing = match id {
        Some(id) => Entity::find_by_id(id).one(db).await.map_err(db_err)?,
        None => None,
    };
    if let Some(row) = existing {
        am.id = Set(row.id);
        am.update(db).await.map_err(db_err)
    } else {
        am.insert(db).await.map_err(db_err)
    }
}

pub async fn delete_many<C: ConnectionTrait>(db: &C, ids: Vec<i64>) -> Result<u64, errors::ModelError> {
    if ids.is_empty() { return Ok(0); }
    let res = Entity::delete_many()
        .filter(Column::Id.is_in(ids))
        .exec(db)
        .await
        .map_err(db_err)?;
    Ok(res.rows_affected)
}
