//! Cart handling and sale creation for the POS view.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::{PaymentMethod, Product, Sale, SaleItem};

#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
}

/// The in-progress sale. Lines snapshot the product name and selling
/// price at the moment they are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<SaleItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[SaleItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.total).sum()
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of a product, merging into an existing line.
    pub fn add(&mut self, product: &Product) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(line) => {
                line.quantity += 1;
                line.total = line.quantity as f64 * line.price;
            }
            None => self.items.push(SaleItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: 1,
                price: product.selling_price,
                total: product.selling_price,
            }),
        }
    }

    pub fn increase(&mut self, product_id: &str) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            line.quantity += 1;
            line.total = line.quantity as f64 * line.price;
        }
    }

    /// Drop one unit; a line at quantity one disappears.
    pub fn decrease(&mut self, product_id: &str) {
        if let Some(pos) = self
            .items
            .iter()
            .position(|item| item.product_id == product_id)
        {
            let line = &mut self.items[pos];
            if line.quantity <= 1 {
                self.items.remove(pos);
            } else {
                line.quantity -= 1;
                line.total = line.quantity as f64 * line.price;
            }
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Human-readable receipt identifier, date-stamped and sequential.
pub fn receipt_number(date: DateTime<Utc>, seq: usize) -> String {
    format!("RCP-{}-{:04}", date.format("%Y%m%d"), seq)
}

/// Turn the cart into a Sale: validate every line against current stock,
/// deduct the sold quantities and snapshot the items. On any error the
/// catalog is left untouched.
pub fn checkout(
    products: &mut [Product],
    cart: &Cart,
    payment_method: PaymentMethod,
    date: DateTime<Utc>,
    seq: usize,
) -> Result<Sale, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    // Validate everything before mutating anything.
    for line in cart.items() {
        let available = products
            .iter()
            .find(|p| p.id == line.product_id)
            .map(|p| p.stock)
            .unwrap_or(0);

        if available < line.quantity {
            return Err(CheckoutError::InsufficientStock {
                name: line.product_name.clone(),
                requested: line.quantity,
                available,
            });
        }
    }

    for line in cart.items() {
        if let Some(product) = products.iter_mut().find(|p| p.id == line.product_id) {
            product.stock -= line.quantity;
        }
    }

    Ok(Sale {
        id: uuid::Uuid::new_v4().to_string(),
        items: cart.items().to_vec(),
        total_amount: cart.total(),
        payment_method,
        date,
        receipt_number: receipt_number(date, seq),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(id: &str, name: &str, price: f64, stock: u32) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            barcode: format!("barcode-{id}"),
            category: "Test".into(),
            supplier_id: "1".into(),
            purchase_price: price / 2.0,
            selling_price: price,
            stock,
            min_stock_level: 2,
            description: String::new(),
        }
    }

    fn test_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_cart_merges_repeated_products() {
        let apples = product("1", "Apples", 3.5, 50);
        let mut cart = Cart::new();

        cart.add(&apples);
        cart.add(&apples);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
        assert_eq!(cart.total(), 7.0);
        assert_eq!(cart.items()[0].total, 7.0, "line total tracks quantity");
    }

    #[test]
    fn test_cart_increase_and_decrease_round_trip() {
        let milk = product("2", "Milk", 1.25, 30);
        let mut cart = Cart::new();
        cart.add(&milk);

        let before = cart.clone();
        cart.increase("2");
        cart.decrease("2");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decreasing_last_unit_removes_line() {
        let milk = product("2", "Milk", 1.25, 30);
        let mut cart = Cart::new();
        cart.add(&milk);

        cart.decrease("2");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let mut catalog = vec![product("1", "Apples", 3.5, 50)];
        let result = checkout(
            &mut catalog,
            &Cart::new(),
            PaymentMethod::Cash,
            test_date(),
            1,
        );
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_checkout_rejects_overselling_without_touching_stock() {
        let mut catalog = vec![product("1", "Apples", 3.5, 1), product("2", "Milk", 1.25, 9)];
        let mut cart = Cart::new();
        cart.add(&catalog[1]);
        cart.add(&catalog[0]);
        cart.increase("1");

        let result = checkout(&mut catalog, &cart, PaymentMethod::Card, test_date(), 1);

        assert_eq!(
            result,
            Err(CheckoutError::InsufficientStock {
                name: "Apples".into(),
                requested: 2,
                available: 1,
            })
        );
        // Nothing was deducted, not even for the valid milk line.
        assert_eq!(catalog[0].stock, 1);
        assert_eq!(catalog[1].stock, 9);
    }

    #[test]
    fn test_checkout_deducts_stock_and_snapshots_items() {
        let mut catalog = vec![product("1", "Apples", 3.5, 50), product("2", "Milk", 1.25, 30)];
        let mut cart = Cart::new();
        cart.add(&catalog[0]);
        cart.add(&catalog[0]);
        cart.add(&catalog[1]);

        let sale = checkout(&mut catalog, &cart, PaymentMethod::Cash, test_date(), 3)
            .expect("stock is sufficient");

        assert_eq!(catalog[0].stock, 48);
        assert_eq!(catalog[1].stock, 29);
        assert_eq!(sale.items.len(), 2);
        assert_eq!(sale.total_amount, 2.0 * 3.5 + 1.25);
        assert_eq!(sale.payment_method, PaymentMethod::Cash);
        assert_eq!(sale.receipt_number, "RCP-20240315-0003");

        // The sale keeps its own snapshot; later price changes don't leak in.
        catalog[0].selling_price = 99.0;
        assert_eq!(sale.items[0].price, 3.5);
    }

    #[test]
    fn test_receipt_numbers_are_date_stamped_and_sequential() {
        let date = test_date();
        assert_eq!(receipt_number(date, 1), "RCP-20240315-0001");
        assert_eq!(receipt_number(date, 42), "RCP-20240315-0042");
    }
}
