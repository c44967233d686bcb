//! Simulates the host-application side of the bridge: receives the
//! "how should this notification be presented?" events, answers two of them
//! and lets a third one time out.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{Notify, mpsc};
use tracing::info;

use pushbridge_core::{EventEmitter, Responder, ResponseTask, TaskConfig, TaskDelegate};
use pushbridge_model::{MessageNotification, NotificationBehavior, RemoteMessage};
use pushbridge_observe::{LoggerConfig, TracingEmitter, logger_init};

/// Stand-in for the host runtime's event bus.
struct HostBus {
    tx: mpsc::UnboundedSender<(String, Value)>,
}

impl EventEmitter for HostBus {
    fn emit(&self, event: &str, payload: Value) {
        let _ = self.tx.send((event.to_string(), payload));
    }
}

/// Stand-in for the owner tracking in-flight tasks.
#[derive(Default)]
struct Owner {
    done: Notify,
}

impl TaskDelegate for Owner {
    fn on_task_finished(&self, identifier: &str) {
        info!(id = identifier, "task finished");
        self.done.notify_one();
    }
}

fn sample_message(id: Option<&str>, title: &str) -> RemoteMessage {
    RemoteMessage {
        message_id: id.map(str::to_string),
        from: Some("/topics/demo".to_string()),
        data: BTreeMap::from([("source".to_string(), "host-sim".to_string())]),
        notification: Some(MessageNotification {
            title: Some(title.to_string()),
            body: Some("hello from host-sim".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = LoggerConfig {
        level: "debug".to_string(),
        ..Default::default()
    };
    logger_init(&cfg)?;
    info!("logger initialized");

    let (tx, mut events) = mpsc::unbounded_channel();
    let bus: Arc<dyn EventEmitter> = Arc::new(HostBus { tx });
    let owner = Arc::new(Owner::default());

    // 1) The app answers in time with a behavior that changes nothing.
    let mut task = ResponseTask::new(
        Arc::clone(&bus),
        sample_message(Some("demo-1"), "silent"),
        Arc::clone(&owner) as Arc<dyn TaskDelegate>,
    );
    task.start()?;

    let (event, payload) = events.recv().await.expect("request event");
    info!(event, id = %payload["id"], "host received request");

    let (responder, outcome) = Responder::channel();
    task.handle_response(NotificationBehavior::default(), responder);
    let outcome = outcome.await?;
    info!(?outcome, "no-effect behavior applied");
    owner.done.notified().await;

    // 2) The app asks for a visible alert, which this layer cannot present.
    let mut task = ResponseTask::new(
        Arc::clone(&bus),
        sample_message(Some("demo-2"), "alert"),
        Arc::clone(&owner) as Arc<dyn TaskDelegate>,
    );
    task.start()?;
    let _ = events.recv().await;

    let behavior = NotificationBehavior {
        should_show_alert: true,
        ..Default::default()
    };
    let (responder, outcome) = Responder::channel();
    task.handle_response(behavior, responder);
    if let Err(e) = outcome.await? {
        info!(code = e.code(), error = %e, "effectful behavior rejected");
    }
    owner.done.notified().await;

    // 3) The app never answers; a short deadline stands in for the 3 s
    //    production default. Events go straight to the log this time.
    let mut task = ResponseTask::with_config(
        Arc::new(TracingEmitter::new()),
        sample_message(None, "ignored"),
        Arc::clone(&owner) as Arc<dyn TaskDelegate>,
        TaskConfig {
            response_timeout_ms: 300,
        },
    );
    task.start()?;
    info!(id = task.identifier(), "host ignores this one on purpose");

    tokio::time::timeout(Duration::from_secs(2), owner.done.notified()).await?;

    info!("all scenarios done");
    Ok(())
}
