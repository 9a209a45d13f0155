use crate::cli::command_handlers::{
    AuthHandler, ConfigHandler, CustomerHandler, Output, OrderHandler, SupplierHandler,
};
use crate::cli::main_types::Commands;
use dashboard_core::error::AppError;
use dashboard_core::prelude::{
    AuthService, Config, ConfigService, CustomerService, DashboardClient, FileSessionStore,
    KeyringSessionStore, OrderService, SessionBackend, SessionStore, SupplierService,
};
use log::{debug, warn};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Dispatcher {
    config: Config,
    config_dir: Option<PathBuf>,
    api_base: Option<String>,
    json: bool,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_dir: Option<PathBuf>,
        api_base: Option<String>,
        json: bool,
    ) -> Self {
        Self {
            config,
            config_dir,
            api_base,
            json,
        }
    }

    // Get effective API base (CLI arg / env > config file > default)
    fn get_effective_api_base(&self) -> String {
        match self.api_base.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => self.config.get_api_base(),
        }
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config_dir.as_deref().map(Config::file_in)
    }

    fn create_session_store(&self) -> Result<Arc<dyn SessionStore>, AppError> {
        match self.config.session_backend() {
            SessionBackend::Keyring => {
                debug!("using keyring session store");
                Ok(Arc::new(KeyringSessionStore::default()))
            }
            SessionBackend::File => {
                let dir = match &self.config_dir {
                    Some(dir) => dir.clone(),
                    None => Config::default_dir()?,
                };
                let store = FileSessionStore::in_dir(&dir);
                debug!("using session file {}", store.path().display());
                Ok(Arc::new(store))
            }
        }
    }

    // Build the HTTP client, attaching the stored bearer token if there is one
    fn create_client(&self, store: &dyn SessionStore) -> Result<DashboardClient, AppError> {
        let api_base = self.get_effective_api_base();
        debug!(
            "creating client for {} (timeout {}s)",
            api_base,
            self.config.timeout()
        );

        let mut client = DashboardClient::with_timeout(api_base, self.config.timeout())?;
        match store.load() {
            Ok(session) => {
                if let Some(token) = session.token {
                    debug!("attaching stored session token");
                    client.set_session_token(token);
                }
            }
            // Requests still go out; the server answers 401 if it needs the token
            Err(e) => warn!("could not read stored session: {}", e),
        }
        Ok(client)
    }

    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    fn create_remote(
        &self,
    ) -> Result<(Arc<dyn SessionStore>, Arc<DashboardClient>), AppError> {
        let store = self.create_session_store()?;
        let client = self.create_client(store.as_ref())?;
        Ok((store, Arc::new(client)))
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        let use_colors = !self.json && std::io::stdout().is_terminal();
        let output = Output::new(self.json, use_colors);
        let synthesize_fields = self.config.synthesize_fields();

        match command {
            Commands::Config { command } => {
                let mut config_service = self.create_config_service();
                ConfigHandler::new().handle(
                    command,
                    &mut config_service,
                    self.config_path(),
                    &output,
                )
            }
            Commands::Auth { command } => {
                let (store, client) = self.create_remote()?;
                let mut service = AuthService::remote(client, store);
                // An unreadable store must not block logout, which clears it
                if let Err(e) = service.restore() {
                    warn!("ignoring unreadable stored session: {}", e);
                }
                AuthHandler::new()
                    .handle(command, &mut service, &output)
                    .await
            }
            Commands::Customer { command } => {
                let (_, client) = self.create_remote()?;
                let service = CustomerService::remote(client, synthesize_fields);
                CustomerHandler::new()
                    .handle(command, &service, &output)
                    .await
            }
            Commands::Order { command } => {
                let (_, client) = self.create_remote()?;
                let service = OrderService::remote(client, synthesize_fields);
                OrderHandler::new().handle(command, &service, &output).await
            }
            Commands::Supplier { command } => {
                let (_, client) = self.create_remote()?;
                let service = SupplierService::remote(client, synthesize_fields);
                SupplierHandler::new()
                    .handle(command, &service, &output)
                    .await
            }
        }
    }
}
