use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_tool_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use relocation_tools::config::AppConfig;
use relocation_tools::error::AppError;
use relocation_tools::telemetry;
use relocation_tools::tools::ToolsSettings;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let settings = ToolsSettings {
        evaluation_delay: config.tools.evaluation_delay(),
        default_country: config.tools.default_country.clone(),
    };

    let app = with_tool_routes(settings)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_country = %config.tools.default_country,
        "relocation tools service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
