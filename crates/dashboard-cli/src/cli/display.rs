//! Table rendering for dashboard records

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use dashboard_core::prelude::{
    AccountStatus, ApiResult, Customer, Order, OrderStatus, PaginatedResponse, Supplier,
    to_envelope,
};
use serde::Serialize;

pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn colored_cell(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let cells: Vec<Cell> = headers
            .iter()
            .map(|h| self.bold_header(h, Color::Cyan))
            .collect();
        table.set_header(cells);
        table
    }

    fn account_status_cell(&self, status: AccountStatus) -> Cell {
        let color = match status {
            AccountStatus::Active => Color::Green,
            AccountStatus::Inactive => Color::DarkGrey,
        };
        self.colored_cell(status.as_str(), color)
    }

    fn order_status_cell(&self, status: OrderStatus) -> Cell {
        let color = match status {
            OrderStatus::Paid => Color::Green,
            OrderStatus::Pending => Color::Yellow,
            OrderStatus::Failed => Color::Red,
            OrderStatus::Refunded => Color::Magenta,
        };
        self.colored_cell(status.as_str(), color)
    }

    pub fn render_customers(&self, customers: &[Customer]) -> String {
        let mut table = self.new_table(&["ID", "Name", "Email", "Phone", "Status", "Joined"]);
        for customer in customers {
            table.add_row(vec![
                self.colored_cell(&customer.id, Color::Cyan),
                Cell::new(&customer.full_name),
                Cell::new(&customer.email),
                Cell::new(&customer.phone),
                self.account_status_cell(customer.status),
                Cell::new(&customer.join_date),
            ]);
        }
        table.to_string()
    }

    pub fn render_suppliers(&self, suppliers: &[Supplier]) -> String {
        let mut table =
            self.new_table(&["ID", "Company", "Contact", "Email", "Phone", "Status"]);
        for supplier in suppliers {
            table.add_row(vec![
                self.colored_cell(&supplier.id, Color::Cyan),
                Cell::new(&supplier.company_name),
                Cell::new(&supplier.contact_name),
                Cell::new(&supplier.email),
                Cell::new(&supplier.phone),
                self.account_status_cell(supplier.status),
            ]);
        }
        table.to_string()
    }

    pub fn render_orders(&self, orders: &[Order]) -> String {
        let mut table =
            self.new_table(&["ID", "Customer", "Items", "Total", "Status", "Payment", "Created"]);
        for order in orders {
            table.add_row(vec![
                self.colored_cell(&order.id, Color::Cyan),
                Cell::new(&order.customer_name),
                Cell::new(order.items.len()),
                Cell::new(format_amount(order.total_amount)),
                self.order_status_cell(order.status),
                Cell::new(&order.payment_method),
                Cell::new(&order.created_at),
            ]);
        }
        table.to_string()
    }

    pub fn render_customer(&self, customer: &Customer) -> String {
        self.render_detail(&[
            ("ID", customer.id.clone()),
            ("Name", customer.full_name.clone()),
            ("Email", customer.email.clone()),
            ("Phone", customer.phone.clone()),
            ("Address", customer.address.clone()),
            ("Status", customer.status.to_string()),
            ("Joined", customer.join_date.clone()),
        ])
    }

    pub fn render_supplier(&self, supplier: &Supplier) -> String {
        self.render_detail(&[
            ("ID", supplier.id.clone()),
            ("Company", supplier.company_name.clone()),
            ("Contact", supplier.contact_name.clone()),
            ("Email", supplier.email.clone()),
            ("Phone", supplier.phone.clone()),
            ("Address", supplier.address.clone()),
            ("Status", supplier.status.to_string()),
            ("Joined", supplier.join_date.clone()),
        ])
    }

    /// Order summary followed by its line items.
    pub fn render_order(&self, order: &Order) -> String {
        let summary = self.render_detail(&[
            ("ID", order.id.clone()),
            ("Customer", format!("{} ({})", order.customer_name, order.customer_id)),
            ("Status", order.status.to_string()),
            ("Payment", order.payment_method.clone()),
            ("Total", format_amount(order.total_amount)),
            ("Created", order.created_at.clone()),
        ]);

        let mut items = self.new_table(&["Product", "Qty", "Price", "Subtotal"]);
        for item in &order.items {
            items.add_row(vec![
                Cell::new(&item.product),
                Cell::new(item.qty),
                Cell::new(format_amount(item.price)),
                Cell::new(format_amount(item.subtotal())),
            ]);
        }

        format!("{}\n{}", summary, items)
    }

    fn render_detail(&self, rows: &[(&str, String)]) -> String {
        let mut table = self.new_table(&["Field", "Value"]);
        for (field, value) in rows {
            table.add_row(vec![self.colored_cell(field, Color::Cyan), Cell::new(value)]);
        }
        table.to_string()
    }
}

pub fn page_footer<T>(page: &PaginatedResponse<T>) -> String {
    format!(
        "Page {}/{} (total {})",
        page.page,
        page.total_pages().max(1),
        page.total
    )
}

/// Whole amounts print without decimals, e.g. `85000`.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Pretty-printed `{success, data | error}` JSON.
pub fn render_envelope<T: Serialize>(result: &ApiResult<T>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_envelope(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::prelude::{ErrorCode, Failure, OrderItem, PaginationParams};

    fn customer() -> Customer {
        Customer {
            id: "C-001".to_string(),
            full_name: "Budi Santoso".to_string(),
            email: "budi@example.com".to_string(),
            phone: "08123456789".to_string(),
            address: "Jakarta".to_string(),
            status: AccountStatus::Active,
            join_date: "2024-01-20".to_string(),
        }
    }

    #[test]
    fn test_render_customers_plain() {
        let output = TableDisplay::new()
            .with_colors(false)
            .render_customers(&[customer()]);
        assert!(output.contains("C-001"));
        assert!(output.contains("Budi Santoso"));
        assert!(output.contains("Active"));
    }

    #[test]
    fn test_render_order_lists_items() {
        let order = Order {
            id: "TRX-2024-1".to_string(),
            customer_id: "C-001".to_string(),
            customer_name: "Budi Santoso".to_string(),
            total_amount: 85000.0,
            status: OrderStatus::Paid,
            items: vec![
                OrderItem::new("Kopi Susu", 2, 25000.0),
                OrderItem::new("Sandwich", 1, 35000.0),
            ],
            payment_method: "QRIS".to_string(),
            created_at: "2024-01-20T10:00:00.000Z".to_string(),
        };
        let output = TableDisplay::new().with_colors(false).render_order(&order);
        assert!(output.contains("Kopi Susu"));
        assert!(output.contains("50000"));
        assert!(output.contains("85000"));
        assert!(output.contains("Budi Santoso (C-001)"));
    }

    #[test]
    fn test_page_footer() {
        let page = PaginatedResponse::paginate((0..23).collect::<Vec<_>>(), PaginationParams::new(2, 10));
        assert_eq!(page_footer(&page), "Page 2/3 (total 23)");

        let empty = PaginatedResponse::paginate(Vec::<u8>::new(), PaginationParams::default());
        assert_eq!(page_footer(&empty), "Page 1/1 (total 0)");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(85000.0), "85000");
        assert_eq!(format_amount(12.5), "12.50");
    }

    #[test]
    fn test_render_envelope() {
        let ok: ApiResult<Vec<u8>> = Ok(vec![1]);
        let value: serde_json::Value =
            serde_json::from_str(&render_envelope(&ok).unwrap()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"][0], 1);

        let err: ApiResult<()> = Err(Failure::new(ErrorCode::NotFound, "Order not found"));
        let value: serde_json::Value =
            serde_json::from_str(&render_envelope(&err).unwrap()).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "NOT_FOUND");
        assert_eq!(value["error"]["message"], "Order not found");
    }
}
