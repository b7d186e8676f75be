//! Sample catalog and sales seeded at startup. In-memory only; the
//! session starts from this data every reload.

use chrono::{TimeZone, Utc};

use crate::types::{PaymentMethod, Product, Sale, SaleItem};

fn product(
    id: &str,
    name: &str,
    barcode: &str,
    category: &str,
    supplier_id: &str,
    purchase_price: f64,
    selling_price: f64,
    stock: u32,
    min_stock_level: u32,
    description: &str,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        barcode: barcode.into(),
        category: category.into(),
        supplier_id: supplier_id.into(),
        purchase_price,
        selling_price,
        stock,
        min_stock_level,
        description: description.into(),
    }
}

/// The demo shop's shelf.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Organic Apples",
            "1234567890123",
            "Fruits",
            "1",
            2.00,
            3.50,
            50,
            10,
            "Fresh organic red apples",
        ),
        product(
            "2",
            "Whole Milk",
            "0987654321098",
            "Dairy",
            "2",
            0.90,
            1.25,
            30,
            8,
            "Full-fat milk, 1 liter",
        ),
        product(
            "3",
            "Brown Bread",
            "4006381333931",
            "Bakery",
            "3",
            1.10,
            1.80,
            24,
            6,
            "Whole-grain loaf, baked daily",
        ),
        product(
            "4",
            "Free-Range Eggs",
            "5012345678900",
            "Dairy",
            "2",
            2.40,
            3.20,
            18,
            12,
            "Box of 12 free-range eggs",
        ),
        product(
            "5",
            "Basmati Rice",
            "8901030510397",
            "Grains",
            "4",
            3.80,
            5.50,
            40,
            5,
            "Long-grain basmati rice, 5 kg",
        ),
        product(
            "6",
            "Orange Juice",
            "3068320114453",
            "Beverages",
            "5",
            1.60,
            2.40,
            9,
            10,
            "Freshly squeezed orange juice, 1 liter",
        ),
        product(
            "7",
            "Cheddar Cheese",
            "7622210100405",
            "Dairy",
            "2",
            3.10,
            4.75,
            15,
            4,
            "Mature cheddar, 400 g block",
        ),
        product(
            "8",
            "Bananas",
            "4011200296906",
            "Fruits",
            "1",
            0.80,
            1.40,
            60,
            15,
            "Fairtrade bananas, per kg",
        ),
    ]
}

/// A few historical sales so the dashboard has something to show.
pub fn sample_sales() -> Vec<Sale> {
    let item = |product_id: &str, product_name: &str, quantity: u32, price: f64| SaleItem {
        product_id: product_id.into(),
        product_name: product_name.into(),
        quantity,
        price,
        total: quantity as f64 * price,
    };

    vec![
        Sale {
            id: "s1".into(),
            items: vec![
                item("1", "Organic Apples", 2, 3.50),
                item("2", "Whole Milk", 1, 1.25),
            ],
            total_amount: 8.25,
            payment_method: PaymentMethod::Cash,
            date: Utc.with_ymd_and_hms(2024, 3, 14, 9, 12, 0).unwrap(),
            receipt_number: "RCP-20240314-0001".into(),
        },
        Sale {
            id: "s2".into(),
            items: vec![item("5", "Basmati Rice", 1, 5.50)],
            total_amount: 5.50,
            payment_method: PaymentMethod::Card,
            date: Utc.with_ymd_and_hms(2024, 3, 14, 16, 45, 0).unwrap(),
            receipt_number: "RCP-20240314-0002".into(),
        },
        Sale {
            id: "s3".into(),
            items: vec![
                item("3", "Brown Bread", 2, 1.80),
                item("7", "Cheddar Cheese", 1, 4.75),
                item("8", "Bananas", 3, 1.40),
            ],
            total_amount: 12.55,
            payment_method: PaymentMethod::MobileMoney,
            date: Utc.with_ymd_and_hms(2024, 3, 15, 11, 3, 0).unwrap(),
            receipt_number: "RCP-20240315-0001".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let products = sample_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_prices_are_positive_and_marked_up() {
        for p in sample_products() {
            assert!(p.purchase_price > 0.0, "{} has no purchase price", p.name);
            assert!(
                p.selling_price >= p.purchase_price,
                "{} sells below cost",
                p.name
            );
        }
    }

    #[test]
    fn test_seed_includes_a_low_stock_product() {
        // The dashboard's low-stock panel should not start empty.
        assert!(sample_products().iter().any(|p| p.is_low_stock()));
    }

    #[test]
    fn test_sale_totals_match_items() {
        for sale in sample_sales() {
            let sum: f64 = sale.items.iter().map(|i| i.total).sum();
            assert!((sale.total_amount - sum).abs() < 1e-9, "{}", sale.id);
            for item in &sale.items {
                assert!((item.total - item.quantity as f64 * item.price).abs() < 1e-9);
            }
        }
    }
}
