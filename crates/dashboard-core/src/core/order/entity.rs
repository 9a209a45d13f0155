use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    Paid,
    #[default]
    Pending,
    Failed,
    Refunded,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Paid,
        OrderStatus::Pending,
        OrderStatus::Failed,
        OrderStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "Paid",
            OrderStatus::Pending => "Pending",
            OrderStatus::Failed => "Failed",
            OrderStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown order status '{}': expected Paid, Pending, Failed or Refunded",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: String,
    pub qty: i64,
    pub price: f64,
}

impl OrderItem {
    pub fn new(product: impl Into<String>, qty: i64, price: f64) -> Self {
        Self {
            product: product.into(),
            qty,
            price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.qty as f64 * self.price
    }
}

/// Σ(qty × price) over all items.
pub fn total_amount(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::subtotal).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub customer_name: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub payment_method: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderPayload {
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Partial update. `status` stays a raw string so an unknown value can be
/// rejected with a validation failure instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderPayload {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

impl UpdateOrderPayload {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
