use std::collections::HashMap;

use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, db_err};
use crate::{category, product};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product, Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
            Relation::Category => Entity::belongs_to(category::Entity).from(Column::CategoryId).to(category::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Categories linked to each of `product_ids`, keyed by product id.
/// Products without links are absent from the map.
pub async fn categories_for<C: ConnectionTrait>(
    db: &C,
    product_ids: Vec<i64>,
) -> Result<HashMap<i64, Vec<category::Model>>, errors::ModelError> {
    if product_ids.is_empty() { return Ok(HashMap::new()); }
    let links = Entity::find()
        .filter(Column::ProductId.is_in(product_ids))
        .all(db)
        .await
        .map_err(db_err)?;
    let mut category_ids: Vec<i64> = links.iter().map(|l| l.category_id).collect();
    category_ids.sort_unstable();
    category_ids.dedup();
    let by_id: HashMap<i64, category::Model> = category::find_many(db, category_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let mut out: HashMap<i64, Vec<category::Model>> = HashMap::new();
    for link in links {
        if let Some(c) = by_id.get(&link.category_id) {
            out.entry(link.product_id).or_default().push(c.clone());
        }
    }
    for cats in out.values_mut() {
        cats.sort_by_key(|c| c.id);
    }
    Ok(out)
}

/// Make the links of `product_id` exactly `category_ids`.
pub async fn replace_links<C: ConnectionTrait>(
    db: &C,
    product_id: i64,
    category_ids: Vec<i64>,
) -> Result<(), errors::ModelError> {
    Entity::delete_many()
        .filter(Column::ProductId.eq(product_id))
        .exec(db)
        .await
        .map_err(db_err)?;
    if category_ids.is_empty() { return Ok(()); }
    let rows = category_ids.into_iter().map(|category_id| ActiveModel {
        product_id: Set(product_id),
        category_id: Set(category_id),
    });
    Entity::insert_many(rows).exec(db).await.map_err(db_err)?;
    Ok(())
}
