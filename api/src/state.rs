//! Shared application state
//!
//! Services are built once at startup from the repositories and the email
//! sender, then shared across workers through `web::Data<AppState>`.

use std::sync::Arc;

use sf_core::repositories::{
    CartRepository, OrderRepository, OtpRepository, ProductRepository, UserRepository,
    WishlistRepository,
};
use sf_core::services::{
    AuthService, AuthServiceConfig, CartService, CatalogService, DeliveryMode, EmailSender,
    Notifier, NotifierConfig, OrderService, PasswordHasher, TokenService, TokenServiceConfig,
    VerificationService, VerificationServiceConfig, WishlistService,
};
use sf_infra::database::{
    DatabasePool, MySqlCartRepository, MySqlOrderRepository, MySqlOtpRepository,
    MySqlProductRepository, MySqlUserRepository, MySqlWishlistRepository,
};
use sf_shared::{AppConfig, Environment};

/// The persistence ports every service is built from
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub otps: Arc<dyn OtpRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub wishlists: Arc<dyn WishlistRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Repositories {
    /// MySQL-backed repositories sharing one pool
    pub fn mysql(pool: &DatabasePool) -> Self {
        let pool = pool.get_pool();
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            otps: Arc::new(MySqlOtpRepository::new(pool.clone())),
            carts: Arc::new(MySqlCartRepository::new(pool.clone())),
            wishlists: Arc::new(MySqlWishlistRepository::new(pool.clone())),
            orders: Arc::new(MySqlOrderRepository::new(pool.clone())),
            products: Arc::new(MySqlProductRepository::new(pool.clone())),
        }
    }
}

pub struct AppState {
    pub auth: AuthService,
    pub carts: CartService,
    pub wishlists: WishlistService,
    pub orders: OrderService,
    pub catalog: CatalogService,
    pub tokens: Arc<TokenService>,
    pub verification: Arc<VerificationService>,
    pub environment: Environment,
    /// Probed by `/health` when present
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn build(
        repos: Repositories,
        sender: Arc<dyn EmailSender>,
        config: &AppConfig,
        delivery: DeliveryMode,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        let verification = Arc::new(VerificationService::new(
            repos.otps.clone(),
            VerificationServiceConfig::from(&config.auth.otp),
        ));
        let notifier = Arc::new(Notifier::new(
            sender,
            NotifierConfig {
                frontend_url: config.server.frontend_url.clone(),
                delivery,
                ..NotifierConfig::default()
            },
        ));

        let auth = AuthService::new(
            repos.users.clone(),
            repos.carts.clone(),
            repos.wishlists.clone(),
            repos.orders.clone(),
            verification.clone(),
            tokens.clone(),
            notifier.clone(),
            PasswordHasher::new(config.auth.bcrypt_cost),
            AuthServiceConfig::from(config),
        );

        Self {
            auth,
            carts: CartService::new(repos.carts.clone()),
            wishlists: WishlistService::new(repos.wishlists.clone()),
            orders: OrderService::new(repos.users.clone(), repos.orders.clone(), notifier),
            catalog: CatalogService::new(repos.products),
            tokens,
            verification,
            environment: config.environment,
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}
