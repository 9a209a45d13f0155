use crate::AppError;
use crate::api::transport::HttpTransport;
use crate::core::auth::datasource::HttpAuthDataSource;
use crate::core::auth::repository::{AuthRepository, RemoteAuthRepository};
use crate::core::auth::usecase::LoginUseCase;
use crate::core::auth::{AuthPayload, User};
use crate::core::session::Session;
use crate::storage::session_store::SessionStore;
use log::info;
use std::sync::Arc;

/// Authentication service owning the session context
pub struct AuthService {
    login: LoginUseCase,
    store: Arc<dyn SessionStore>,
    session: Session,
}

impl AuthService {
    /// Create new AuthService with an empty session; call [`restore`](Self::restore) to hydrate it.
    pub fn new(repository: Arc<dyn AuthRepository>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            login: LoginUseCase::new(repository),
            store,
            session: Session::default(),
        }
    }

    pub fn remote(http: Arc<dyn HttpTransport>, store: Arc<dyn SessionStore>) -> Self {
        let datasource = HttpAuthDataSource::new(http);
        Self::new(
            Arc::new(RemoteAuthRepository::new(Arc::new(datasource))),
            store,
        )
    }

    /// Load the persisted session, replacing whatever is held in memory
    pub fn restore(&mut self) -> Result<&Session, AppError> {
        self.session = self.store.load()?;
        if self.session.is_authenticated() {
            info!("restored session");
        }
        Ok(&self.session)
    }

    /// Validate, authenticate and persist the new session
    pub async fn login(&mut self, payload: AuthPayload) -> Result<User, AppError> {
        let response = self.login.execute(payload).await?;
        let user = response.user.clone();

        // Commit to memory only once the store holds the new session
        let mut session = Session::default();
        session.establish(response);
        self.store.save(&session)?;
        self.session = session;
        info!("signed in as {}", user.email);

        Ok(user)
    }

    /// Drop the session from memory and from the store
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.session.clear();
        self.store.clear()?;
        info!("signed out");
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
