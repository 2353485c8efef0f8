use std::sync::Arc;

use backend::cart::CartBackendHttp;
use backend::client::BackendClient;
use backend::orders::OrderBackendHttp;
use logger::TracingLogger;
use persistence::local_storage::repository::LocalStorageSqlite;

use business::application::cart::add_line::AddCartLineUseCaseImpl;
use business::application::cart::change_format::ChangeCartLineFormatUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::reconcile::ReconcileCartUseCaseImpl;
use business::application::cart::remove_line::RemoveCartLineUseCaseImpl;
use business::application::cart::resync::CartResync;
use business::application::cart::update_quantity::UpdateCartLineQuantityUseCaseImpl;
use business::application::checkout::confirm_payment::ConfirmPaymentUseCaseImpl;
use business::application::checkout::create_order::CreateOrderUseCaseImpl;
use business::application::checkout::report_payment_failure::ReportPaymentFailureUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::checkout::pending::PendingOrderStore;
use business::domain::logger::Logger;
use business::domain::machinery::store::MachineryBasketStore;
use business::domain::notifier::Notifier;
use business::domain::session::store::SessionStore;
use business::domain::storage::LocalStorage;
use business::domain::wishlist::store::WishlistStore;

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::machinery::routes::MachineryApi;
use crate::api::notifications::center::NotificationCenter;
use crate::api::notifications::routes::NotificationApi;
use crate::api::session::routes::SessionApi;
use crate::api::wishlist::routes::WishlistApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub wishlist_api: WishlistApi,
    pub machinery_api: MachineryApi,
    pub session_api: SessionApi,
    pub checkout_api: CheckoutApi,
    pub notification_api: NotificationApi,
}

fn logger(component: &'static str) -> Arc<dyn Logger> {
    Arc::new(TracingLogger::new(component))
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::SqlitePool, config: &AppConfig) -> anyhow::Result<Self> {
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let storage: Arc<dyn LocalStorage> = Arc::new(LocalStorageSqlite::new(pool));
        let cart_backend = Arc::new(CartBackendHttp::new(BackendClient::new(
            &config.backend.base_url,
            config.backend.timeout,
        )?));
        let order_backend = Arc::new(OrderBackendHttp::new(BackendClient::new(
            &config.backend.base_url,
            config.backend.timeout,
        )?));
        let center = Arc::new(NotificationCenter::default());
        let notifier: Arc<dyn Notifier> = center.clone();

        // Stores, rehydrated from local storage
        let cart_store = Arc::new(CartStore::load(storage.clone(), logger("cart")).await);
        let session = Arc::new(SessionStore::load(storage.clone(), logger("session")).await);
        let wishlist = Arc::new(WishlistStore::load(storage.clone(), logger("wishlist")).await);
        let machinery =
            Arc::new(MachineryBasketStore::load(storage.clone(), logger("machinery")).await);
        let pending = Arc::new(PendingOrderStore::new(storage, logger("checkout")));

        // Cart use cases
        let resync = Arc::new(CartResync {
            backend: cart_backend.clone(),
            store: cart_store.clone(),
            logger: logger("cart"),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger("cart"),
        });
        let add_line_use_case = Arc::new(AddCartLineUseCaseImpl {
            store: cart_store.clone(),
            logger: logger("cart"),
        });
        let remove_line_use_case = Arc::new(RemoveCartLineUseCaseImpl {
            store: cart_store.clone(),
            session: session.clone(),
            backend: cart_backend.clone(),
            resync: resync.clone(),
            notifier: notifier.clone(),
            logger: logger("cart"),
        });
        let change_format_use_case = Arc::new(ChangeCartLineFormatUseCaseImpl {
            store: cart_store.clone(),
            session: session.clone(),
            backend: cart_backend.clone(),
            resync: resync.clone(),
            notifier: notifier.clone(),
            logger: logger("cart"),
        });
        let update_quantity_use_case = Arc::new(UpdateCartLineQuantityUseCaseImpl {
            store: cart_store.clone(),
            remove: remove_line_use_case.clone(),
            logger: logger("cart"),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger("cart"),
        });
        let reconcile_use_case = Arc::new(ReconcileCartUseCaseImpl {
            store: cart_store.clone(),
            backend: cart_backend,
            resync,
            notifier: notifier.clone(),
            logger: logger("cart"),
        });

        // Session use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            session: session.clone(),
            reconcile: reconcile_use_case,
            notifier: notifier.clone(),
            logger: logger("session"),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            session: session.clone(),
            cart: cart_store.clone(),
            logger: logger("session"),
        });

        // Checkout use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            cart: cart_store.clone(),
            session: session.clone(),
            backend: order_backend.clone(),
            pending: pending.clone(),
            notifier: notifier.clone(),
            logger: logger("checkout"),
            currency: config.storefront.currency.clone(),
        });
        let confirm_payment_use_case = Arc::new(ConfirmPaymentUseCaseImpl {
            cart: cart_store,
            pending,
            backend: order_backend,
            notifier: notifier.clone(),
            logger: logger("checkout"),
        });
        let report_failure_use_case = Arc::new(ReportPaymentFailureUseCaseImpl {
            notifier: notifier.clone(),
            logger: logger("checkout"),
        });

        let cart_api = CartApi::new(
            get_cart_use_case,
            add_line_use_case,
            remove_line_use_case,
            change_format_use_case,
            update_quantity_use_case,
            clear_cart_use_case,
        );
        let wishlist_api = WishlistApi::new(wishlist);
        let machinery_api = MachineryApi::new(
            machinery,
            notifier,
            config.storefront.store_name.clone(),
            config.storefront.whatsapp_number.clone(),
        );
        let session_api = SessionApi::new(login_use_case, logout_use_case, session);
        let checkout_api = CheckoutApi::new(
            create_order_use_case,
            confirm_payment_use_case,
            report_failure_use_case,
        );
        let notification_api = NotificationApi::new(center);

        Ok(Self {
            health_api,
            cart_api,
            wishlist_api,
            machinery_api,
            session_api,
            checkout_api,
            notification_api,
        })
    }
}
