use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CategoryRequestDoc {
    pub id: Option<i64>,
    pub category_code: String,
    pub category_name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoryResponseDoc {
    pub id: Option<i64>,
    pub category_code: String,
    pub category_name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoryRefDoc { pub id: i64 }

#[derive(ToSchema)]
pub struct ProductRequestDoc {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
    pub quantity: Option<i32>,
    pub buying_price: Option<f64>,
    pub selling_price: Option<f64>,
    /// Referenced by id; other fields are ignored
    pub categories: Option<Vec<CategoryRefDoc>>,
}

#[derive(ToSchema)]
pub struct ProductResponseDoc {
    pub id: Option<i64>,
    pub product_code: String,
    /// The product description
    pub product_name: String,
    pub quantity: Option<i32>,
    pub buying_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub created_at: Option<String>,
    pub categories: Vec<CategoryResponseDoc>,
}

#[derive(ToSchema)]
pub struct DeleteResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    /// NULL_ID, CATEGORY_NOT_VALID, CATEGORY_ALREADY_IN_USE, CATEGORY_NOT_FOUND, PRODUCT_*, PERSISTENCE_FAILURE
    pub code: String,
    pub message: String,
    pub errors: Option<Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::get_all,
        crate::routes::categories::create,
        crate::routes::categories::get,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::categories::delete_all,
        crate::routes::products::list,
        crate::routes::products::get_all,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::products::delete_all,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryRequestDoc,
            CategoryResponseDoc,
            CategoryRefDoc,
            ProductRequestDoc,
            ProductResponseDoc,
            DeleteResponseDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "products")
    )
)]
pub struct ApiDoc;
