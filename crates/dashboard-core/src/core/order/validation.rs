use super::entity::{CreateOrderPayload, OrderItem, OrderStatus, UpdateOrderPayload};
use crate::core::common::pagination::PaginationParams;
use crate::core::common::result::{ApiResult, Failure};
use crate::utils::validation::require;

pub const ID_REQUIRED: &str = "Order ID is required";
pub const PAGE_MESSAGE: &str = "Page must be at least 1";

pub fn validate_list(params: &PaginationParams) -> ApiResult<()> {
    params.validate(PAGE_MESSAGE)
}

pub fn validate_id(id: &str) -> ApiResult<()> {
    require(id, ID_REQUIRED)
}

/// Items are checked in order; within an item product, then qty, then price.
fn validate_items(items: &[OrderItem]) -> ApiResult<()> {
    for item in items {
        require(&item.product, "Product name is required for all items")?;
        if item.qty < 1 {
            return Err(Failure::validation("Quantity must be at least 1"));
        }
        if item.price < 0.0 {
            return Err(Failure::validation("Price cannot be negative"));
        }
    }
    Ok(())
}

pub fn validate_create(payload: &CreateOrderPayload) -> ApiResult<()> {
    require(&payload.customer_id, "Customer ID is required")?;
    require(&payload.customer_name, "Customer name is required")?;
    if payload.items.is_empty() {
        return Err(Failure::validation("At least one item is required"));
    }
    validate_items(&payload.items)?;
    require(&payload.payment_method, "Payment method is required")?;
    Ok(())
}

pub fn validate_update(payload: &UpdateOrderPayload) -> ApiResult<()> {
    validate_id(&payload.id)?;
    if let Some(items) = &payload.items {
        if items.is_empty() {
            return Err(Failure::validation("Order must have at least one item"));
        }
        validate_items(items)?;
    }
    if let Some(status) = &payload.status {
        if status.parse::<OrderStatus>().is_err() {
            return Err(Failure::validation("Invalid order status"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateOrderPayload {
        CreateOrderPayload {
            customer_id: "C-001".to_string(),
            customer_name: "Budi Santoso".to_string(),
            items: vec![
                OrderItem::new("Kopi Susu", 2, 25000.0),
                OrderItem::new("Sandwich", 1, 35000.0),
            ],
            payment_method: "QRIS".to_string(),
            status: None,
        }
    }

    fn create_message(payload: CreateOrderPayload) -> Option<String> {
        validate_create(&payload).err().map(|f| f.message)
    }

    #[test]
    fn test_create_rules_in_order() {
        assert_eq!(create_message(valid_create()), None);
        assert_eq!(
            create_message(CreateOrderPayload::default()).as_deref(),
            Some("Customer ID is required")
        );
        assert_eq!(
            create_message(CreateOrderPayload {
                customer_name: " ".to_string(),
                ..valid_create()
            })
            .as_deref(),
            Some("Customer name is required")
        );
        assert_eq!(
            create_message(CreateOrderPayload {
                items: Vec::new(),
                payment_method: String::new(),
                ..valid_create()
            })
            .as_deref(),
            Some("At least one item is required")
        );
        assert_eq!(
            create_message(CreateOrderPayload {
                payment_method: String::new(),
                ..valid_create()
            })
            .as_deref(),
            Some("Payment method is required")
        );
    }

    #[test]
    fn test_item_rules_in_order() {
        let with_items = |items: Vec<OrderItem>| {
            create_message(CreateOrderPayload {
                items,
                ..valid_create()
            })
        };

        assert_eq!(
            with_items(vec![OrderItem::new("", 0, -1.0)]).as_deref(),
            Some("Product name is required for all items")
        );
        assert_eq!(
            with_items(vec![OrderItem::new("Teh", 0, -1.0)]).as_deref(),
            Some("Quantity must be at least 1")
        );
        assert_eq!(
            with_items(vec![OrderItem::new("Teh", 1, -0.5)]).as_deref(),
            Some("Price cannot be negative")
        );
        // first offending item decides
        assert_eq!(
            with_items(vec![
                OrderItem::new("Teh", 1, 0.0),
                OrderItem::new("Kopi", 0, 1000.0),
                OrderItem::new("", 1, 1000.0),
            ])
            .as_deref(),
            Some("Quantity must be at least 1")
        );
    }

    #[test]
    fn test_update_rules_in_order() {
        let message = |payload: UpdateOrderPayload| validate_update(&payload).err().map(|f| f.message);

        assert_eq!(
            message(UpdateOrderPayload::new("")).as_deref(),
            Some("Order ID is required")
        );
        assert_eq!(message(UpdateOrderPayload::new("TRX-1")), None);
        assert_eq!(
            message(UpdateOrderPayload {
                items: Some(Vec::new()),
                status: Some("Nope".to_string()),
                ..UpdateOrderPayload::new("TRX-1")
            })
            .as_deref(),
            Some("Order must have at least one item")
        );
        assert_eq!(
            message(UpdateOrderPayload {
                items: Some(vec![OrderItem::new("Teh", 1, -5.0)]),
                ..UpdateOrderPayload::new("TRX-1")
            })
            .as_deref(),
            Some("Price cannot be negative")
        );
        assert_eq!(
            message(UpdateOrderPayload {
                status: Some("InvalidStatus".to_string()),
                ..UpdateOrderPayload::new("X")
            })
            .as_deref(),
            Some("Invalid order status")
        );
        assert_eq!(
            message(UpdateOrderPayload {
                status: Some("Refunded".to_string()),
                ..UpdateOrderPayload::new("X")
            }),
            None
        );
    }
}
