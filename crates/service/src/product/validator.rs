use super::domain::Product;

fn check_price(label: &str, value: Option<f64>, errors: &mut Vec<String>) {
    match value {
        None => errors.push(format!("Product {label} is required")),
        Some(v) if !v.is_finite() || v < 0.0 => errors.push(format!("Product {label} must not be negative")),
        Some(_) => {}
    }
}

/// Field rules for a product; an empty result means valid.
pub fn validate(product: &Product) -> Vec<String> {
    let mut errors = Vec::new();
    if product.code.trim().is_empty() {
        errors.push("Product code is required".to_string());
    }
    if product.description.trim().is_empty() {
        errors.push("Product description is required".to_string());
    }
    match product.quantity {
        None => errors.push("Product quantity is required".to_string()),
        Some(q) if q < 0 => errors.push("Product quantity must not be negative".to_string()),
        Some(_) => {}
    }
    check_price("buying price", product.buying_price, &mut errors);
    check_price("selling price", product.selling_price, &mut errors);
    if product.categories.iter().flatten().any(|c| c.id.is_none()) {
        errors.push("Product categories must reference existing category ids".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn valid() -> Product {
        Product {
            code: "P1".into(),
            description: "Hammer".into(),
            quantity: Some(0),
            buying_price: Some(0.0),
            selling_price: Some(4.5),
            ..Default::default()
        }
    }

    #[test]
    fn valid_product_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn empty_product_reports_every_required_field() {
        let errors = validate(&Product::default());
        assert_eq!(
            errors,
            vec![
                "Product code is required",
                "Product description is required",
                "Product quantity is required",
                "Product buying price is required",
                "Product selling price is required",
            ]
        );
    }

    #[test]
    fn negative_values_are_rejected() {
        let p = Product { quantity: Some(-1), selling_price: Some(-0.5), ..valid() };
        assert_eq!(
            validate(&p),
            vec!["Product quantity must not be negative", "Product selling price must not be negative"]
        );
    }

    #[test]
    fn category_reference_without_id_is_rejected() {
        let c = Category { code: "C1".into(), name: "One".into(), ..Default::default() };
        let p = Product { categories: Some([c].into_iter().collect()), ..valid() };
        assert_eq!(validate(&p).len(), 1);
    }
}
