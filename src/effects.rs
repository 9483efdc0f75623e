use std::sync::Arc;

use arboard::Clipboard;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::network::{ChatService, FormIntake, InspirationSource};
use crate::prompts::fallback_inspiration;
use crate::state::{Effect, Event};
use crate::tasks::Outcome;

/// Carries out effects on the tokio runtime and reports completions as events.
pub struct EffectRunner {
    handle: Handle,
    events: UnboundedSender<Event>,
    inspiration: Arc<dyn InspirationSource>,
    chat: Arc<dyn ChatService>,
    form: Arc<dyn FormIntake>,
    shutdown: CancellationToken,
}

impl EffectRunner {
    pub fn new(
        handle: Handle,
        events: UnboundedSender<Event>,
        inspiration: Arc<dyn InspirationSource>,
        chat: Arc<dyn ChatService>,
        form: Arc<dyn FormIntake>,
    ) -> Self {
        Self {
            handle,
            events,
            inspiration,
            chat,
            form,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_one(effect);
        }
    }

    fn run_one(&self, effect: Effect) {
        match effect {
            Effect::FetchInspiration { request } => {
                let source = Arc::clone(&self.inspiration);
                self.spawn(async move {
                    let result = source.inspire().await;
                    Event::InspirationReady {
                        request,
                        outcome: Outcome::recover_with(result, fallback_inspiration),
                    }
                });
            }
            Effect::SendChat { message } => {
                let chat = Arc::clone(&self.chat);
                self.spawn(async move { Event::ChatReplied(Outcome::from_result(chat.send(message).await)) });
            }
            Effect::SubmitContact(submission) => {
                let form = Arc::clone(&self.form);
                self.spawn(async move {
                    Event::ContactSubmitted(Outcome::from_result(form.submit(submission).await))
                });
            }
            Effect::ScheduleSubmittedReset { ticket, after } => {
                self.spawn(async move {
                    tokio::time::sleep(after).await;
                    Event::SubmittedWindowElapsed(ticket)
                });
            }
            Effect::CopyToClipboard(text) => copy_to_clipboard(&text),
        }
    }

    /// Runs `task` until it yields an event or the runner shuts down.
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Event> + Send + 'static,
    {
        let events = self.events.clone();
        let token = self.shutdown.clone();
        self.handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => debug!("task cancelled on shutdown"),
                event = task => {
                    if events.send(event).is_err() {
                        debug!("event loop gone, dropping completion");
                    }
                }
            }
        });
    }

    pub fn shutdown(&self) {
        info!("cancelling in-flight requests");
        self.shutdown.cancel();
    }
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => info!(chars = text.len(), "copied to clipboard"),
        Err(err) => warn!(error = %err, "clipboard unavailable"),
    }
}
