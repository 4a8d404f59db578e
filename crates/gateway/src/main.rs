use gateway::{
    config::{BackendKind, Config, get_configuration},
    logging::setup_logging,
    routes::router,
    state::AppState,
};
use inference::{Controller, ControllerHandle, IdentityBackend, StyleBackend, StylingConfig};
use tokio::task::JoinHandle;

#[cfg(feature = "ort-backend")]
use inference::backend::ort::OrtBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration()?;
    setup_logging(&config);

    tracing::info!(
        config = ?config,
        "Loaded configuration"
    );

    let styling = config.styling()?;
    let (controller, controller_task) = spawn_controller(&config, styling)?;

    let app = router(AppState::new(controller), config.max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    controller_task.abort();
    tracing::info!("Gateway stopped");
    Ok(())
}

fn spawn_controller(
    config: &Config,
    styling: StylingConfig,
) -> anyhow::Result<(ControllerHandle, JoinHandle<()>)> {
    match config.backend {
        BackendKind::Identity => Ok(Controller::spawn(styling, IdentityBackend::load_model)),
        #[cfg(feature = "ort-backend")]
        BackendKind::Onnx => {
            let provider = config.execution_provider;
            Ok(Controller::spawn(styling, move |location: &str| {
                OrtBackend::load_model_with_provider(location, provider)
            }))
        }
        #[cfg(not(feature = "ort-backend"))]
        BackendKind::Onnx => {
            anyhow::bail!("ONNX backend requested but the `ort-backend` feature is disabled")
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
