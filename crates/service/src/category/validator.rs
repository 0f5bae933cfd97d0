use super::domain::Category;

/// Field rules for a category; an empty result means valid.
pub fn validate(category: &Category) -> Vec<String> {
    let mut errors = Vec::new();
    if category.code.trim().is_empty() {
        errors.push("Category code is required".to_string());
    }
    if category.name.trim().is_empty() {
        errors.push("Category name is required".to_string());
    }
    errors
}
