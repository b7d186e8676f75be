//! Core data model for the shop: products, sales, views, notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub barcode: String,
    pub category: String,
    pub supplier_id: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub stock: u32,
    pub min_stock_level: u32,
    pub description: String,
}

impl Product {
    /// Stock at or below the minimum threshold. Used for warnings only,
    /// never enforced when selling.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock_level
    }
}

/// One line of a sale: a snapshot of the product name and unit price at
/// the time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

/// A completed sale. Created atomically at checkout and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub items: Vec<SaleItem>,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub date: DateTime<Utc>,
    pub receipt_number: String,
}

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    MobileMoney,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::MobileMoney => "Mobile Money",
        }
    }

    pub fn all() -> [PaymentMethod; 3] {
        [
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::MobileMoney,
        ]
    }
}

/// The authenticated views of the app. Switching views only re-renders;
/// it never touches the product or sale collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Products,
    Pos,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Products => "Products",
            View::Pos => "POS",
        }
    }

    pub fn all() -> [View; 3] {
        [View::Dashboard, View::Products, View::Pos]
    }
}

/// Severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A transient banner message. The whole error surface of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_boundary() {
        let mut product = Product {
            id: "1".into(),
            name: "Organic Apples".into(),
            barcode: "1234567890123".into(),
            category: "Fruits".into(),
            supplier_id: "1".into(),
            purchase_price: 2.0,
            selling_price: 3.5,
            stock: 11,
            min_stock_level: 10,
            description: String::new(),
        };

        assert!(!product.is_low_stock(), "above threshold is not low");

        product.stock = 10;
        assert!(product.is_low_stock(), "at threshold counts as low");

        product.stock = 0;
        assert!(product.is_low_stock(), "out of stock counts as low");
    }

    #[test]
    fn test_view_labels_are_distinct() {
        let labels: Vec<_> = View::all().iter().map(|v| v.label()).collect();
        assert_eq!(labels.len(), 3);
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
