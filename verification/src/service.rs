//! Event-driven driver for a [`VerificationController`].
//!
//! All transitions happen on one tokio task. Commands from the presentation
//! layer and settlements of the external call are handled strictly one at a
//! time, and every handled event publishes a fresh [`DisplayState`] on a
//! `watch` channel.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::controller::{AttemptId, PendingAttempt, VerificationController};
use crate::error::{ServiceClosed, VerificationFailure};
use crate::provider::{VerificationProvider, VerificationResult};
use crate::state::DisplayState;

/// Capacity of the command queue.
const COMMAND_QUEUE: usize = 32;

enum Command {
    SetInput(String, oneshot::Sender<()>),
    Submit(oneshot::Sender<bool>),
    Clear(oneshot::Sender<()>),
}

/// Runs a controller against a provider.
pub struct VerificationService<P> {
    controller: VerificationController,
    provider: Arc<P>,
    commands: mpsc::Receiver<Command>,
    settled_tx: mpsc::UnboundedSender<(AttemptId, VerificationResult)>,
    settled_rx: mpsc::UnboundedReceiver<(AttemptId, VerificationResult)>,
    display_tx: watch::Sender<DisplayState>,
}

impl<P: VerificationProvider + 'static> VerificationService<P> {
    /// Start the service task.
    ///
    /// The task stops once every [`ServiceHandle`] has been dropped.
    pub fn spawn(
        controller: VerificationController,
        provider: Arc<P>,
    ) -> (ServiceHandle, JoinHandle<()>) {
        let (command_tx, commands) = mpsc::channel(COMMAND_QUEUE);
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let (display_tx, display_rx) = watch::channel(controller.display().clone());

        let service = Self {
            controller,
            provider,
            commands,
            settled_tx,
            settled_rx,
            display_tx,
        };
        let task = tokio::spawn(service.run());

        let handle = ServiceHandle {
            commands: command_tx,
            display: display_rx,
        };
        (handle, task)
    }

    async fn run(mut self) {
        tracing::debug!(provider = self.provider.name(), "verification service started");
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some((id, outcome)) = self.settled_rx.recv() => {
                    self.controller.settle(id, outcome);
                    self.publish();
                }
            }
        }
        tracing::debug!("verification service stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::SetInput(text, reply) => {
                self.controller.set_input(text);
                let _ = reply.send(());
            }
            Command::Submit(reply) => {
                let pending = self.controller.submit();
                let accepted = pending.is_some();
                if let Some(pending) = pending {
                    self.dispatch(pending);
                }
                self.publish();
                let _ = reply.send(accepted);
            }
            Command::Clear(reply) => {
                self.controller.clear();
                self.publish();
                let _ = reply.send(());
            }
        }
    }

    /// Run the external call off the service task and queue its settlement.
    fn dispatch(&self, pending: PendingAttempt) {
        let provider = Arc::clone(&self.provider);
        let settled_tx = self.settled_tx.clone();
        let PendingAttempt { id, request } = pending;

        tokio::spawn(async move {
            let call = tokio::spawn(async move { provider.start_verification(request).await });
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => Err(VerificationFailure::Generic(format!(
                    "verification task failed: {e}"
                ))),
            };
            // The service may already be gone; nothing left to update then.
            let _ = settled_tx.send((id, outcome));
        });
    }

    fn publish(&self) {
        self.display_tx.send_replace(self.controller.display().clone());
    }
}

/// Presentation-side handle to a running [`VerificationService`].
#[derive(Clone)]
pub struct ServiceHandle {
    commands: mpsc::Sender<Command>,
    display: watch::Receiver<DisplayState>,
}

impl ServiceHandle {
    /// Replace the provider identifier text.
    pub async fn set_input(&self, text: impl Into<String>) -> Result<(), ServiceClosed> {
        let (reply, ack) = oneshot::channel();
        self.send(Command::SetInput(text.into(), reply)).await?;
        ack.await.map_err(|_| ServiceClosed)
    }

    /// Submit the current input. Returns whether the attempt was accepted.
    ///
    /// Once this returns, the published display already reflects the submit.
    pub async fn submit(&self) -> Result<bool, ServiceClosed> {
        let (reply, ack) = oneshot::channel();
        self.send(Command::Submit(reply)).await?;
        ack.await.map_err(|_| ServiceClosed)
    }

    /// Reset the input and the visible result.
    pub async fn clear(&self) -> Result<(), ServiceClosed> {
        let (reply, ack) = oneshot::channel();
        self.send(Command::Clear(reply)).await?;
        ack.await.map_err(|_| ServiceClosed)
    }

    /// The most recently published display state.
    pub fn display(&self) -> DisplayState {
        self.display.borrow().clone()
    }

    /// A receiver notified on every published display state.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.display.clone()
    }

    /// Wait until no attempt is outstanding and return the display state.
    pub async fn wait_settled(&self) -> Result<DisplayState, ServiceClosed> {
        let mut rx = self.display.clone();
        let display = rx.wait_for(|d| !d.busy).await.map_err(|_| ServiceClosed)?;
        Ok(display.clone())
    }

    async fn send(&self, command: Command) -> Result<(), ServiceClosed> {
        self.commands.send(command).await.map_err(|_| ServiceClosed)
    }
}
