//! Pure operations over the in-memory product catalog.

use crate::types::Product;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product name is required")]
    EmptyName,
    #[error("{field} must be a non-negative number")]
    InvalidPrice { field: &'static str },
    #[error("Stock must be a whole number")]
    InvalidStock,
    #[error("Minimum stock level must be a whole number")]
    InvalidMinStock,
}

/// Case-insensitive filter over name, barcode and category. An empty or
/// whitespace query returns the whole catalog.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.barcode.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Products at or below their minimum stock level.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Replace the product with the same id, or append it.
pub fn upsert(products: &mut Vec<Product>, product: Product) {
    match products.iter_mut().find(|p| p.id == product.id) {
        Some(slot) => *slot = product,
        None => products.push(product),
    }
}

/// Remove a product by id. Removing an unknown id is a no-op.
pub fn remove(products: &mut Vec<Product>, id: &str) {
    products.retain(|p| p.id != id);
}

/// Pretty JSON of the catalog, for the export download.
pub fn export_json(products: &[Product]) -> String {
    serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
}

/// Form-shaped product data as entered in the products view. Everything
/// is a string until validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: String,
    pub barcode: String,
    pub category: String,
    pub supplier_id: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub stock: String,
    pub min_stock_level: String,
    pub description: String,
}

impl ProductDraft {
    /// Pre-fill the form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            barcode: product.barcode.clone(),
            category: product.category.clone(),
            supplier_id: product.supplier_id.clone(),
            purchase_price: format!("{:.2}", product.purchase_price),
            selling_price: format!("{:.2}", product.selling_price),
            stock: product.stock.to_string(),
            min_stock_level: product.min_stock_level.to_string(),
            description: product.description.clone(),
        }
    }

    /// Parse and validate into a catalog-ready product. A draft without
    /// an id gets a fresh one assigned.
    pub fn validate(&self) -> Result<Product, CatalogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let purchase_price = parse_price(&self.purchase_price, "Purchase price")?;
        let selling_price = parse_price(&self.selling_price, "Selling price")?;

        let stock = parse_quantity(&self.stock).ok_or(CatalogError::InvalidStock)?;
        let min_stock_level =
            parse_quantity(&self.min_stock_level).ok_or(CatalogError::InvalidMinStock)?;

        Ok(Product {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: name.to_string(),
            barcode: self.barcode.trim().to_string(),
            category: self.category.trim().to_string(),
            supplier_id: self.supplier_id.trim().to_string(),
            purchase_price,
            selling_price,
            stock,
            min_stock_level,
            description: self.description.trim().to_string(),
        })
    }
}

fn parse_price(raw: &str, field: &'static str) -> Result<f64, CatalogError> {
    let trimmed = raw.trim();
    let value: f64 = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse()
            .map_err(|_| CatalogError::InvalidPrice { field })?
    };

    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CatalogError::InvalidPrice { field })
    }
}

fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, barcode: &str, category: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            barcode: barcode.into(),
            category: category.into(),
            supplier_id: "1".into(),
            purchase_price: 1.0,
            selling_price: 2.0,
            stock: 20,
            min_stock_level: 5,
            description: String::new(),
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("1", "Organic Apples", "1234567890123", "Fruits"),
            product("2", "Whole Milk", "0987654321098", "Dairy"),
            product("3", "Apple Juice", "5551112223334", "Beverages"),
        ]
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let hits = search(&catalog, "apple");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("apple")));
    }

    #[test]
    fn test_search_matches_barcode_and_category() {
        let catalog = sample_catalog();
        assert_eq!(search(&catalog, "0987654321098").len(), 1);
        assert_eq!(search(&catalog, "dairy").len(), 1);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = sample_catalog();
        assert_eq!(search(&catalog, "").len(), catalog.len());
        assert_eq!(search(&catalog, "   ").len(), catalog.len());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut catalog = sample_catalog();
        let mut updated = catalog[1].clone();
        updated.selling_price = 9.99;

        upsert(&mut catalog, updated);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[1].selling_price, 9.99);
    }

    #[test]
    fn test_upsert_appends_new_product() {
        let mut catalog = sample_catalog();
        upsert(&mut catalog, product("4", "Brown Bread", "42", "Bakery"));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_remove_by_id() {
        let mut catalog = sample_catalog();
        remove(&mut catalog, "2");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.iter().all(|p| p.id != "2"));

        remove(&mut catalog, "missing");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_draft_round_trip() {
        let original = product("7", "Basmati Rice", "11", "Grains");
        let validated = ProductDraft::from_product(&original)
            .validate()
            .expect("draft from a valid product validates");
        assert_eq!(validated, original);
    }

    #[test]
    fn test_draft_rejects_empty_name() {
        let draft = ProductDraft {
            name: "   ".into(),
            ..ProductDraft::default()
        };
        assert_eq!(draft.validate(), Err(CatalogError::EmptyName));
    }

    #[test]
    fn test_draft_rejects_bad_prices() {
        let mut draft = ProductDraft {
            name: "Eggs".into(),
            selling_price: "-1".into(),
            ..ProductDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(CatalogError::InvalidPrice {
                field: "Selling price"
            })
        ));

        draft.selling_price = "abc".into();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_assigns_id_when_missing() {
        let draft = ProductDraft {
            name: "Eggs".into(),
            ..ProductDraft::default()
        };
        let created = draft.validate().expect("valid draft");
        assert!(!created.id.is_empty());
        assert_eq!(created.stock, 0, "blank stock parses as zero");
    }

    #[test]
    fn test_export_is_valid_json() {
        let catalog = sample_catalog();
        let json = export_json(&catalog);
        let parsed: Vec<Product> = serde_json::from_str(&json).expect("parses back");
        assert_eq!(parsed, catalog);
    }
}
