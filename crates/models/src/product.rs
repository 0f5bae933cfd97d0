use sea_orm::{entity::prelude::*, Condition, ConnectionTrait, NotSet, Order, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{self, db_err};
use crate::search::{contains_literal, page_offset};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub description: String,
    pub quantity: i32,
    pub buying_price: f64,
    pub selling_price: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Scalar columns written by `save`.
#[derive(Clone, Debug)]
pub struct ProductFields {
    pub code: String,
    pub description: String,
    pub quantity: i32,
    pub buying_price: f64,
    pub selling_price: f64,
}

pub fn validate_quantity(q: i32) -> Result<(), errors::ModelError> {
    if q < 0 {
        return Err(errors::ModelError::Validation("quantity must be >= 0".into()));
    }
    Ok(())
}

/// Rows whose code or description contains `keyword`, one page of them plus the total match count.
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
                .add(contains_literal(Column::Code, keyword))
                .add(contains_literal(Column::Description, keyword)),
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
        .filter(Column::Code.eq(code))
        .one(db)
        .await
        .map_err(db_err)
}

/// Update in place when `id` names a row, otherwise insert under a generated id.
/// `created_at` is stamped on insert and preserved on update.
pub async fn save<C: ConnectionTrait>(db: &C, id: Option<i64>, fields: ProductFields) -> Result<Model, errors::ModelError> {
    validate_quantity(fields.quantity)?;
    let mut am = ActiveModel {
        id: NotSet,
        code: Set(fields.code),
        description: Set(fields.description),
        quantity: Set(fields.quantity),
        buying_price: Set(fields.buying_price),
        selling_price: Set(fields.selling_price),
        created_at: NotSet,
    };
    let existing = match id {
        Some(id) => Entity::find_by_id(id).one(db).await.map_err(db_err)?,
        None => None,
    };
    if let Some(row) = existing {
        am.id = Set(row.id);
        am.update(db).await.map_err(db_err)
    } else {
        am.created_at = Set(Utc::now().into());
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
