use crate::cli::display::{TableDisplay, page_footer, render_envelope};
use crate::cli::main_types::{
    AuthCommands, ConfigCommands, CustomerCommands, OrderCommands, SupplierCommands,
};
use dashboard_core::error::{AppError, CliError};
use dashboard_core::prelude::{
    ApiResult, AuthPayload, AuthService, ConfigService, CreateCustomerPayload, CreateOrderPayload,
    CreateSupplierPayload, CustomerService, OrderService, PaginationParams, SupplierService,
    UpdateCustomerPayload, UpdateOrderPayload, UpdateSupplierPayload,
};
use log::debug;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

/// Where results go: tables on stdout, or the JSON envelope with `--json`.
pub struct Output {
    json: bool,
    table: TableDisplay,
}

impl Output {
    pub fn new(json: bool, use_colors: bool) -> Self {
        Self {
            json,
            table: TableDisplay::new().with_colors(use_colors),
        }
    }

    pub fn table(&self) -> &TableDisplay {
        &self.table
    }

    fn print_envelope<T: Serialize>(&self, result: &ApiResult<T>) -> Result<(), AppError> {
        let rendered =
            render_envelope(result).map_err(|e| AppError::Cli(CliError::Output(e.to_string())))?;
        println!("{}", rendered);
        Ok(())
    }

    /// Print a result and hand the failure back so the process exits non-zero.
    pub fn emit<T: Serialize>(
        &self,
        result: Result<T, AppError>,
        render: impl FnOnce(&T) -> String,
    ) -> Result<(), AppError> {
        match result {
            Ok(data) => {
                if self.json {
                    self.print_envelope::<&T>(&Ok(&data))
                } else {
                    println!("{}", render(&data));
                    Ok(())
                }
            }
            Err(AppError::Api(failure)) => {
                if self.json {
                    self.print_envelope::<()>(&Err(failure.clone()))?;
                }
                Err(AppError::Api(failure))
            }
            Err(e) => Err(e),
        }
    }
}

fn api<T>(result: ApiResult<T>) -> Result<T, AppError> {
    result.map_err(AppError::from)
}

#[derive(Default)]
pub struct AuthHandler;

impl AuthHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: AuthCommands,
        service: &mut AuthService,
        output: &Output,
    ) -> Result<(), AppError> {
        match command {
            AuthCommands::Login { username, password } => {
                let username = username.unwrap_or_default();
                let password = match password {
                    Some(p) => p,
                    None => rpassword::prompt_password("Password: ")
                        .map_err(|e| AppError::Cli(CliError::Input(e.to_string())))?,
                };
                debug!("signing in as '{}'", username);

                let result = service.login(AuthPayload::new(username, password)).await;
                output.emit(result, |user| {
                    format!("✅ Signed in as {} <{}> ({})", user.name, user.email, user.role)
                })
            }
            AuthCommands::Logout => {
                service.logout()?;
                output.emit(Ok(json!({ "authenticated": false })), |_| {
                    "✅ Signed out".to_string()
                })
            }
            AuthCommands::Status => {
                let session = service.session();
                let status = json!({
                    "authenticated": session.is_authenticated(),
                    "user": session.user,
                });
                output.emit(Ok(status), |_| match &session.user {
                    Some(user) if session.is_authenticated() => format!(
                        "Signed in as {} <{}> ({})",
                        user.name, user.email, user.role
                    ),
                    _ if session.is_authenticated() => "Signed in".to_string(),
                    _ => "Not signed in. Use 'dashboard-cli auth login'.".to_string(),
                })
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        service: &mut ConfigService,
        config_path: Option<PathBuf>,
        output: &Output,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                let config = service.config();
                let effective = json!({
                    "api_base": config.get_api_base(),
                    "timeout_seconds": config.timeout(),
                    "session_store": config.session_backend(),
                    "synthesize_fields": config.synthesize_fields(),
                });
                output.emit(Ok(effective), |_| {
                    format!(
                        "Current Configuration:\n=====================\n\
                         API base:          {}\n\
                         Timeout:           {}s\n\
                         Session store:     {}\n\
                         Synthesize fields: {}",
                        config.get_api_base(),
                        config.timeout(),
                        config.session_backend(),
                        config.synthesize_fields()
                    )
                })
            }
            ConfigCommands::Set {
                url,
                timeout,
                session_store,
                synthesize_fields,
            } => {
                let changes = [
                    ("api-base", url),
                    ("timeout", timeout),
                    ("session-store", session_store),
                    ("synthesize-fields", synthesize_fields),
                ];

                let mut updated_fields = Vec::new();
                for (field, value) in changes {
                    if let Some(value) = value {
                        service.set_field(field, &value)?;
                        updated_fields.push(format!("{} to: {}", field, value));
                    }
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --url, --timeout, --session-store or --synthesize-fields".to_string(),
                    )));
                }

                service.save_config(config_path)?;
                output.emit(Ok(json!({ "updated": updated_fields })), |_| {
                    format!(
                        "✅ Set {}\nConfiguration saved successfully.",
                        updated_fields.join(", ")
                    )
                })
            }
        }
    }
}

#[derive(Default)]
pub struct CustomerHandler;

impl CustomerHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: CustomerCommands,
        service: &CustomerService,
        output: &Output,
    ) -> Result<(), AppError> {
        let refresh = match command {
            CustomerCommands::List(page) => {
                return self.list(service, page.into(), output).await;
            }
            CustomerCommands::Show { id } => {
                let result = api(service.detail(&id).await);
                return output.emit(result, |c| output.table().render_customer(c));
            }
            CustomerCommands::Create {
                full_name,
                email,
                phone,
                address,
                status,
                refresh,
            } => {
                let payload = CreateCustomerPayload {
                    full_name,
                    email,
                    phone,
                    address,
                    status,
                };
                let result = api(service.create(payload).await);
                output.emit(result, |c| {
                    format!("✅ Created customer {}\n{}", c.id, output.table().render_customer(c))
                })?;
                refresh
            }
            CustomerCommands::Update {
                id,
                full_name,
                email,
                phone,
                address,
                status,
                refresh,
            } => {
                let payload = UpdateCustomerPayload {
                    full_name,
                    email,
                    phone,
                    address,
                    status,
                    ..UpdateCustomerPayload::new(id)
                };
                let result = api(service.update(payload).await);
                output.emit(result, |c| {
                    format!("✅ Updated customer {}\n{}", c.id, output.table().render_customer(c))
                })?;
                refresh
            }
            CustomerCommands::Delete { id, refresh } => {
                let result = api(service.delete(&id).await);
                output.emit(result, |_| format!("✅ Deleted customer {}", id))?;
                refresh
            }
        };

        if refresh {
            debug!("refreshing customer list");
            self.list(service, PaginationParams::default(), output).await?;
        }
        Ok(())
    }

    async fn list(
        &self,
        service: &CustomerService,
        params: PaginationParams,
        output: &Output,
    ) -> Result<(), AppError> {
        let result = api(service.list(params).await);
        output.emit(result, |page| {
            format!(
                "{}\n{}",
                output.table().render_customers(&page.data),
                page_footer(page)
            )
        })
    }
}

#[derive(Default)]
pub struct OrderHandler;

impl OrderHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: OrderCommands,
        service: &OrderService,
        output: &Output,
    ) -> Result<(), AppError> {
        let refresh = match command {
            OrderCommands::List(page) => {
                return self.list(service, page.into(), output).await;
            }
            OrderCommands::Show { id } => {
                let result = api(service.detail(&id).await);
                return output.emit(result, |o| output.table().render_order(o));
            }
            OrderCommands::Create {
                customer_id,
                customer_name,
                items,
                payment_method,
                status,
                refresh,
            } => {
                let payload = CreateOrderPayload {
                    customer_id,
                    customer_name,
                    items,
                    payment_method,
                    status,
                };
                let result = api(service.create(payload).await);
                output.emit(result, |o| {
                    format!("✅ Created order {}\n{}", o.id, output.table().render_order(o))
                })?;
                refresh
            }
            OrderCommands::Update {
                id,
                status,
                payment_method,
                items,
                refresh,
            } => {
                // No --item flags means the items are left alone
                let payload = UpdateOrderPayload {
                    status,
                    payment_method,
                    items: (!items.is_empty()).then_some(items),
                    ..UpdateOrderPayload::new(id)
                };
                let result = api(service.update(payload).await);
                output.emit(result, |o| {
                    format!("✅ Updated order {}\n{}", o.id, output.table().render_order(o))
                })?;
                refresh
            }
            OrderCommands::Delete { id, refresh } => {
                let result = api(service.delete(&id).await);
                output.emit(result, |_| format!("✅ Deleted order {}", id))?;
                refresh
            }
        };

        if refresh {
            debug!("refreshing order list");
            self.list(service, PaginationParams::default(), output).await?;
        }
        Ok(())
    }

    async fn list(
        &self,
        service: &OrderService,
        params: PaginationParams,
        output: &Output,
    ) -> Result<(), AppError> {
        let result = api(service.list(params).await);
        output.emit(result, |page| {
            format!(
                "{}\n{}",
                output.table().render_orders(&page.data),
                page_footer(page)
            )
        })
    }
}

#[derive(Default)]
pub struct SupplierHandler;

impl SupplierHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: SupplierCommands,
        service: &SupplierService,
        output: &Output,
    ) -> Result<(), AppError> {
        let refresh = match command {
            SupplierCommands::List(page) => {
                return self.list(service, page.into(), output).await;
            }
            SupplierCommands::Show { id } => {
                let result = api(service.detail(&id).await);
                return output.emit(result, |s| output.table().render_supplier(s));
            }
            SupplierCommands::Create {
                company_name,
                contact_name,
                email,
                phone,
                address,
                status,
                refresh,
            } => {
                let payload = CreateSupplierPayload {
                    company_name,
                    contact_name,
                    email,
                    phone,
                    address,
                    status,
                };
                let result = api(service.create(payload).await);
                output.emit(result, |s| {
                    format!("✅ Created supplier {}\n{}", s.id, output.table().render_supplier(s))
                })?;
                refresh
            }
            SupplierCommands::Update {
                id,
                company_name,
                contact_name,
                email,
                phone,
                address,
                status,
                refresh,
            } => {
                let payload = UpdateSupplierPayload {
                    company_name,
                    contact_name,
                    email,
                    phone,
                    address,
                    status,
                    ..UpdateSupplierPayload::new(id)
                };
                let result = api(service.update(payload).await);
                output.emit(result, |s| {
                    format!("✅ Updated supplier {}\n{}", s.id, output.table().render_supplier(s))
                })?;
                refresh
            }
            SupplierCommands::Delete { id, refresh } => {
                let result = api(service.delete(&id).await);
                output.emit(result, |_| format!("✅ Deleted supplier {}", id))?;
                refresh
            }
        };

        if refresh {
            debug!("refreshing supplier list");
            self.list(service, PaginationParams::default(), output).await?;
        }
        Ok(())
    }

    async fn list(
        &self,
        service: &SupplierService,
        params: PaginationParams,
        output: &Output,
    ) -> Result<(), AppError> {
        let result = api(service.list(params).await);
        output.emit(result, |page| {
            format!(
                "{}\n{}",
                output.table().render_suppliers(&page.data),
                page_footer(page)
            )
        })
    }
}
