use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use pushbridge_model::{NotificationBehavior, RemoteMessage};

use crate::config::TaskConfig;
use crate::emit::{EventEmitter, HANDLE_NOTIFICATION_EVENT, HANDLE_NOTIFICATION_TIMEOUT_EVENT};
use crate::error::{HandlingError, TaskError};

/// Owner of one or more in-flight tasks.
///
/// `on_task_finished` is called from the task's serial context exactly once
/// per task, whichever way the task terminates. Owners typically use it to
/// drop the task from their in-flight map, so it must be safe to call while
/// other tasks are running.
pub trait TaskDelegate: Send + Sync {
    fn on_task_finished(&self, identifier: &str);
}

/// Completion handle for one call to [`ResponseTask::handle_response`].
///
/// Exactly one of [`resolve`](Responder::resolve) or
/// [`reject`](Responder::reject) is invoked once the behavior has been
/// applied. If the task had already finished when the response arrived, the
/// responder is dropped unresolved and the receiving half observes a closed
/// channel.
pub struct Responder(oneshot::Sender<Result<(), HandlingError>>);

impl Responder {
    /// Creates a responder together with the receiving half the caller
    /// awaits for the outcome.
    pub fn channel() -> (Self, oneshot::Receiver<Result<(), HandlingError>>) {
        let (tx, rx) = oneshot::channel();
        (Self(tx), rx)
    }

    pub fn resolve(self) {
        let _ = self.0.send(Ok(()));
    }

    pub fn reject(self, error: HandlingError) {
        let _ = self.0.send(Err(error));
    }
}

enum Command {
    Respond {
        behavior: NotificationBehavior,
        responder: Responder,
    },
}

/// One in-flight "how should this notification be presented?" request.
///
/// On [`start`](ResponseTask::start) the task emits an
/// `onHandleNotification` event to the host application and arms a response
/// deadline. It then terminates through exactly one of three paths:
/// a response via [`handle_response`](ResponseTask::handle_response), the
/// deadline expiring (which emits `onHandleNotificationTimeout`), or
/// [`stop`](ResponseTask::stop). Every path ends with the delegate being
/// told the task is finished, exactly once; afterwards the task is inert
/// and late responses are ignored.
///
/// All lifecycle work after `start` runs on one spawned loop, so response
/// handling, the deadline and stopping never race each other.
pub struct ResponseTask {
    identifier: String,
    message: Arc<RemoteMessage>,
    emitter: Arc<dyn EventEmitter>,
    delegate: Arc<dyn TaskDelegate>,
    config: TaskConfig,
    commands: mpsc::UnboundedSender<Command>,
    inbox: Option<mpsc::UnboundedReceiver<Command>>,
    cancel: CancellationToken,
}

impl ResponseTask {
    /// Creates a task for `message` with the default 3-second deadline.
    ///
    /// The identifier is the message's own id when present, otherwise a
    /// freshly generated UUID. Construction has no other side effects.
    pub fn new(
        emitter: Arc<dyn EventEmitter>,
        message: RemoteMessage,
        delegate: Arc<dyn TaskDelegate>,
    ) -> Self {
        Self::with_config(emitter, message, delegate, TaskConfig::default())
    }

    pub fn with_config(
        emitter: Arc<dyn EventEmitter>,
        message: RemoteMessage,
        delegate: Arc<dyn TaskDelegate>,
        config: TaskConfig,
    ) -> Self {
        let identifier = message
            .message_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let (commands, inbox) = mpsc::unbounded_channel();

        Self {
            identifier,
            message: Arc::new(message),
            emitter,
            delegate,
            config,
            commands,
            inbox: Some(inbox),
            cancel: CancellationToken::new(),
        }
    }

    /// Identifier of the task: the message id, or a random UUID when the
    /// message carried none. Fixed for the task's whole lifetime.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Emits the `onHandleNotification` request event and arms the response
    /// deadline, then returns without blocking.
    ///
    /// Must be called from within a tokio runtime; the task's serial loop is
    /// spawned onto it. Calling `start` a second time, or after the task was
    /// stopped, fails with [`TaskError::AlreadyStarted`].
    pub fn start(&mut self) -> Result<(), TaskError> {
        let inbox = self.inbox.take().ok_or(TaskError::AlreadyStarted)?;

        self.emitter
            .emit(HANDLE_NOTIFICATION_EVENT, self.event_body());

        let task_loop = TaskLoop {
            identifier: self.identifier.clone(),
            message: Arc::clone(&self.message),
            emitter: Arc::clone(&self.emitter),
            delegate: Arc::clone(&self.delegate),
            cancel: self.cancel.clone(),
            deadline: Duration::from_millis(self.config.response_timeout_ms),
        };
        tokio::spawn(task_loop.run(inbox));

        Ok(())
    }

    /// Delivers the host application's behavior decision.
    ///
    /// The behavior is applied on the task's serial loop, not inline: a
    /// behavior with any observable effect is rejected with
    /// [`HandlingError::PresentationNotImplemented`] (presenting is the
    /// native layer's job), a no-effect behavior resolves successfully.
    /// Either way the task terminates. If the task has already finished,
    /// the responder is dropped and nothing else happens.
    pub fn handle_response(&self, behavior: NotificationBehavior, responder: Responder) {
        if self
            .commands
            .send(Command::Respond {
                behavior,
                responder,
            })
            .is_err()
        {
            debug!(
                id = %self.identifier,
                "response arrived after the task finished; ignoring"
            );
        }
    }

    /// Terminates the task immediately without applying any behavior.
    ///
    /// Meant for teardown, when waiting for a response is pointless. The
    /// delegate is notified like on any other completion path, even when the
    /// task was never started. A no-op if the task has already finished.
    pub fn stop(&mut self) {
        // Not started yet: there is no loop to notify the delegate, so
        // finish here. Taking the inbox keeps a later `start` from reviving
        // the task.
        if self.inbox.take().is_some() {
            self.cancel.cancel();
            self.delegate.on_task_finished(&self.identifier);
            return;
        }
        self.cancel.cancel();
    }

    fn event_body(&self) -> Value {
        event_body(&self.identifier, &self.message)
    }
}

fn event_body(identifier: &str, message: &RemoteMessage) -> Value {
    json!({
        "id": identifier,
        "notification": message.to_payload(),
    })
}

/// The task's serial execution context: one spawned loop that owns the
/// response inbox, the stop signal and the deadline, so at most one
/// completion path ever runs.
struct TaskLoop {
    identifier: String,
    message: Arc<RemoteMessage>,
    emitter: Arc<dyn EventEmitter>,
    delegate: Arc<dyn TaskDelegate>,
    cancel: CancellationToken,
    deadline: Duration,
}

impl TaskLoop {
    async fn run(self, mut inbox: mpsc::UnboundedReceiver<Command>) {
        let deadline = tokio::time::sleep(self.deadline);
        tokio::pin!(deadline);

        // Biased so an already-queued response beats a deadline expiring in
        // the same instant: first scheduled, first run.
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!(id = %self.identifier, "task stopped before a response arrived");
            }
            command = inbox.recv() => match command {
                Some(Command::Respond { behavior, responder }) => {
                    self.present(behavior, responder);
                }
                // The owning handle was dropped, so no response can arrive
                // anymore; same outcome as an explicit stop.
                None => {
                    debug!(id = %self.identifier, "task handle dropped; giving up on a response");
                }
            },
            _ = &mut deadline => self.report_timeout(),
        }

        // Single termination chokepoint. Dropping the select cancels the
        // pending deadline; the delegate hears about this task exactly once.
        self.delegate.on_task_finished(&self.identifier);
    }

    fn present(&self, behavior: NotificationBehavior, responder: Responder) {
        debug!(
            id = %self.identifier,
            ?behavior,
            "applying requested behavior to notification"
        );
        if behavior.has_any_effect() {
            responder.reject(HandlingError::PresentationNotImplemented);
        } else {
            responder.resolve();
        }
    }

    fn report_timeout(&self) {
        debug!(
            id = %self.identifier,
            "no response within the deadline; notifying the host application"
        );
        self.emitter.emit(
            HANDLE_NOTIFICATION_TIMEOUT_EVENT,
            event_body(&self.identifier, &self.message),
        );
    }
}
