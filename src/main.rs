use kahin::config::Config;
use kahin::error::EngineError;
use kahin::services::ComputeWorker;
use kahin::types::{WorkerMessage, WorkerReply};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Stdout carries replies, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kahin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Starting kahin compute host with {} workers",
        config.worker.workers
    );

    let (worker, mut replies) = ComputeWorker::spawn(&config.worker);

    // Write replies as they complete, in completion order
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(response) = replies.recv().await {
            let request_id = response.request_id;
            let line = WorkerReply::ComputeIndicatorsResult(response).to_line()?;
            stdout.write_all(&line).await?;
            stdout.flush().await?;
            debug!("Replied to request {}", request_id);
        }
        Ok::<_, EngineError>(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(EngineError::from)? {
        if line.trim().is_empty() {
            continue;
        }
        match WorkerMessage::from_line(&line) {
            Ok(WorkerMessage::ComputeIndicators(request)) => worker.submit(request).await?,
            Err(e) => warn!("Skipping malformed message: {}", e),
        }
    }

    info!("Input closed, draining pending requests");
    worker.shutdown().await;
    writer.await??;

    Ok(())
}
