use clap::{Args, Parser, Subcommand};
use dashboard_core::core::common::pagination::DEFAULT_PAGE_SIZE;
use dashboard_core::prelude::{AccountStatus, OrderItem, OrderStatus, PaginationParams};

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(about = "Command line interface for the admin dashboard API")]
#[command(version)]
#[command(after_help = "Examples:
  dashboard-cli auth login --username admin       # Sign in (password is prompted)
  dashboard-cli customer list --page 2            # Second page of customers
  dashboard-cli order show TRX-2024-1718000000000 # Order details
  dashboard-cli supplier delete S-001 --refresh   # Delete, then list again
  dashboard-cli --json customer list              # Print the result envelope
  dashboard-cli config set --session-store file   # Keep the session in a file

Environment Variables:
  DASHBOARD_API_BASE   API base URL (default http://localhost:4200)
  RUST_LOG             Log filter, e.g. dashboard_core=debug")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// API base URL for this invocation
    #[arg(long, global = true, env = "DASHBOARD_API_BASE")]
    pub api_base: Option<String>,

    /// Print results as the JSON result envelope
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and out (login, logout, status)
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Manage customers
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },
    /// Manage orders
    Order {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// Manage suppliers
    Supplier {
        #[command(subcommand)]
        command: SupplierCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        username: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  dashboard-cli config set --url https://dashboard.example.com/api
  dashboard-cli config set --timeout 30 --session-store file
  dashboard-cli config set --synthesize-fields false")]
    Set {
        /// API base URL
        #[arg(long)]
        url: Option<String>,
        /// Request timeout in seconds (1-300)
        #[arg(long)]
        timeout: Option<String>,
        /// Session store: keyring or file
        #[arg(long)]
        session_store: Option<String>,
        /// Assign ids and dates on create (true or false)
        #[arg(long)]
        synthesize_fields: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Records per page (1-100)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

impl From<PageArgs> for PaginationParams {
    fn from(args: PageArgs) -> Self {
        PaginationParams::new(args.page, args.page_size)
    }
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List customers
    List(PageArgs),
    /// Show one customer
    Show { id: String },
    /// Create a customer
    Create {
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        /// Active or Inactive (default Active)
        #[arg(long)]
        status: Option<AccountStatus>,
        /// List customers again afterwards
        #[arg(long)]
        refresh: bool,
    },
    /// Change selected fields of a customer
    Update {
        id: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        status: Option<AccountStatus>,
        #[arg(long)]
        refresh: bool,
    },
    /// Delete a customer
    Delete {
        id: String,
        #[arg(long)]
        refresh: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// List orders
    List(PageArgs),
    /// Show one order with its items
    Show { id: String },
    /// Create an order
    #[command(after_help = "Examples:
  dashboard-cli order create --customer-id C-001 --customer-name \"Budi Santoso\" \\
      --item \"Kopi Susu:2:25000\" --item \"Sandwich:1:35000\" --payment-method QRIS")]
    Create {
        #[arg(long, default_value = "")]
        customer_id: String,
        #[arg(long, default_value = "")]
        customer_name: String,
        /// PRODUCT:QTY:PRICE, repeat for more items
        #[arg(long = "item", value_parser = parse_item)]
        items: Vec<OrderItem>,
        #[arg(long, default_value = "")]
        payment_method: String,
        /// Paid, Pending, Failed or Refunded (default Pending)
        #[arg(long)]
        status: Option<OrderStatus>,
        #[arg(long)]
        refresh: bool,
    },
    /// Change status, payment method or items of an order
    Update {
        id: String,
        /// Paid, Pending, Failed or Refunded
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        payment_method: Option<String>,
        /// Replaces all items; PRODUCT:QTY:PRICE, repeatable
        #[arg(long = "item", value_parser = parse_item)]
        items: Vec<OrderItem>,
        #[arg(long)]
        refresh: bool,
    },
    /// Delete an order
    Delete {
        id: String,
        #[arg(long)]
        refresh: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SupplierCommands {
    /// List suppliers
    List(PageArgs),
    /// Show one supplier
    Show { id: String },
    /// Create a supplier
    Create {
        #[arg(long, default_value = "")]
        company_name: String,
        #[arg(long, default_value = "")]
        contact_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long)]
        status: Option<AccountStatus>,
        #[arg(long)]
        refresh: bool,
    },
    /// Change selected fields of a supplier
    Update {
        id: String,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        contact_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        status: Option<AccountStatus>,
        #[arg(long)]
        refresh: bool,
    },
    /// Delete a supplier
    Delete {
        id: String,
        #[arg(long)]
        refresh: bool,
    },
}

/// Parse `PRODUCT:QTY:PRICE`. The product name may itself contain colons.
pub fn parse_item(raw: &str) -> Result<OrderItem, String> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(price), Some(qty), Some(product)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected PRODUCT:QTY:PRICE, got '{}'", raw));
    };

    let qty = qty
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity '{}': {}", qty, e))?;
    let price = price
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid price '{}': {}", price, e))?;

    Ok(OrderItem::new(product, qty, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_item() {
        let item = parse_item("Kopi Susu:2:25000").unwrap();
        assert_eq!(item, OrderItem::new("Kopi Susu", 2, 25000.0));

        let item = parse_item("Combo: Nasi + Teh:1:30000.5").unwrap();
        assert_eq!(item.product, "Combo: Nasi + Teh");
        assert_eq!(item.price, 30000.5);

        // Range checks belong to order validation, not to parsing
        assert_eq!(parse_item("Teh:0:-1").unwrap().qty, 0);

        assert!(parse_item("Teh:2").is_err());
        assert!(parse_item("Teh:two:5000").is_err());
        assert!(parse_item("Teh:2:free").is_err());
    }

    #[test]
    fn test_parse_order_create() {
        let cli = Cli::try_parse_from([
            "dashboard-cli",
            "order",
            "create",
            "--customer-id",
            "C-001",
            "--item",
            "Kopi Susu:2:25000",
            "--item",
            "Sandwich:1:35000",
            "--status",
            "Paid",
        ])
        .unwrap();

        match cli.command {
            Commands::Order {
                command:
                    OrderCommands::Create {
                        customer_id,
                        customer_name,
                        items,
                        status,
                        ..
                    },
            } => {
                assert_eq!(customer_id, "C-001");
                assert!(customer_name.is_empty());
                assert_eq!(items.len(), 2);
                assert_eq!(status, Some(OrderStatus::Paid));
            }
            _ => panic!("Expected order create"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dashboard-cli",
            "customer",
            "list",
            "--page",
            "0",
            "--json",
            "--config-dir",
            "/tmp/x",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config_dir.as_deref(), Some("/tmp/x"));
        match cli.command {
            Commands::Customer {
                command: CustomerCommands::List(page),
            } => assert_eq!(PaginationParams::from(page), PaginationParams::new(0, 10)),
            _ => panic!("Expected customer list"),
        }
    }

    #[test]
    fn test_invalid_account_status_is_rejected() {
        assert!(
            Cli::try_parse_from(["dashboard-cli", "customer", "update", "C-001", "--status", "Gone"])
                .is_err()
        );
    }
}
