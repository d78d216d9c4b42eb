use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::actors::LedgerHandle;
use crate::config::Config;
use crate::rpc::handlers;

/// Path prefix shared by every RPC method.
pub const SERVICE_PATH: &str = "/banking.CreateBankingService";

pub fn router(ledger: LedgerHandle) -> Router {
    let method = |name: &str| format!("{SERVICE_PATH}/{name}");

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(&method("CreateUser"), post(handlers::create_user))
        .route(&method("Deposit"), post(handlers::deposit))
        .route(&method("Withdraw"), post(handlers::withdraw))
        .route(&method("GetBalance"), post(handlers::get_balance))
        .route(&method("SendMoney"), post(handlers::send_money))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

/// Serves the RPC routes until Ctrl+C (or SIGTERM on unix) is received.
///
/// The router, and with it the ledger handle, is dropped when this returns.
pub async fn serve(config: &Config, ledger: LedgerHandle) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;

    info!("Banking RPC server started on {}", listener.local_addr()?);
    info!("Available services: CreateUser, Deposit, Withdraw, GetBalance, SendMoney");

    axum::serve(listener, router(ledger))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Banking RPC server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                error!("Failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {}
    }
}
