pub mod errors;
pub mod db;
pub mod category;
pub mod product;
pub mod product_category;
pub mod search;

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;
    use sea_orm::{DatabaseConnection, Order};

    use crate::{category, db, product, product_category};

    /// Connect and migrate, or `None` when no database is configured for this run.
    async fn test_db() -> Option<DatabaseConnection> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return None;
        }
        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return None;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return None;
        }
        Some(db)
    }

    fn unique(prefix: &str) -> String {
        format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert!(product::validate_quantity(-1).is_err());
        assert!(product::validate_quantity(0).is_ok());
    }

    #[tokio::test]
    async fn category_save_search_and_delete() -> anyhow::Result<()> {
        let Some(db) = test_db().await else { return Ok(()) };

        let code = unique("mt-cat");
        let created = category::save(&db, None, &code, "Model Test", None).await?;
        assert!(created.id > 0);

        let found = category::find_by_code(&db, &code).await?.expect("by code");
        assert_eq!(found.id, created.id);

        let updated = category::save(&db, Some(created.id), &code, "Model Test Renamed", Some("d".into())).await?;
        assert_eq!(updated.category_name, "Model Test Renamed");

        let (rows, total) = category::search(&db, &code, category::Column::Id, Order::Desc, 0, 10).await?;
        assert_eq!(total, 1);
        assert_eq!(rows[0].id, created.id);

        let removed = category::delete_many(&db, vec![created.id, i64::MAX]).await?;
        assert_eq!(removed, 1);
        assert!(category::find_by_code(&db, &code).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn product_links_are_replaced() -> anyhow::Result<()> {
        let Some(db) = test_db().await else { return Ok(()) };

        let a = category::save(&db, None, &unique("mt-a"), "A", None).await?;
        let b = category::save(&db, None, &unique("mt-b"), "B", None).await?;
        let p = product::save(&db, None, product::ProductFields {
            code: unique("mt-p"),
            description: "Widget".into(),
            quantity: 3,
            buying_price: 1.5,
            selling_price: 2.5,
        }).await?;

        product_category::replace_links(&db, p.id, vec![a.id, b.id]).await?;
        let linked = product_category::categories_for(&db, vec![p.id]).await?;
        assert_eq!(linked[&p.id].len(), 2);

        product_category::replace_links(&db, p.id, vec![b.id]).await?;
        let linked = product_category::categories_for(&db, vec![p.id]).await?;
        assert_eq!(linked[&p.id].iter().map(|c| c.id).collect::<Vec<_>>(), vec![b.id]);

        product::delete_many(&db, vec![p.id]).await?;
        category::delete_many(&db, vec![a.id, b.id]).await?;
        Ok(())
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_under_generated_id() -> anyhow::Result<()> {
        let Some(db) = test_db().await else { return Ok(()) };

        let far = i64::MAX - 3;
        let inserted = category::save(&db, Some(far), &unique("mt-far"), "Far", None).await?;
        assert_ne!(inserted.id, far);
        let next = category::save(&db, None, &unique("mt-next"), "Next", None).await?;
        assert!(next.id > inserted.id);

        let (rows, total) = category::search(&db, "", category::Column::Id, Order::Desc, u64::MAX / 10, 20).await?;
        assert!(rows.is_empty());
        assert!(total >= 2);

        category::delete_many(&db, vec![inserted.id, next.id]).await?;
        Ok(())
    }
}
