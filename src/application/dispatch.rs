//! Notification dispatch use case

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::config::AppConfig;
use crate::domain::notification::{NotificationRequest, PresentOptions};

use super::ports::{DndProbe, Interaction, NotificationPresenter, ShellCommand, WindowShell};
use super::registry::{ActiveNotification, NotificationRegistry};

/// How a dispatch resolved.
///
/// Dispatch never returns an error: a failed OS call is logged and
/// reported as `Failed`, and the worst observable effect is that the
/// notification silently did not appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Do-not-disturb was active (or unprobeable); nothing was presented
    Suppressed,
    /// The notification was presented and resolved with this interaction
    Presented(Interaction),
    /// The OS presentation call failed; the error was logged and swallowed
    Failed,
}

/// One-shot interaction callbacks consumed by a single dispatch.
///
/// Each callback fires at most once and is dropped afterwards; nothing
/// stays registered between dispatches.
#[derive(Default)]
pub struct InteractionCallbacks {
    /// Called when the user clicks the notification
    pub on_click: Option<Box<dyn FnOnce() + Send>>,
    /// Called when the notification expires without interaction
    pub on_timeout: Option<Box<dyn FnOnce() + Send>>,
}

/// Dispatches notifications to the OS and relays interaction back to the shell.
///
/// Per dispatch: query DND fresh, suppress or present, relay the user
/// interaction, then ask the shell to play the sound and flash the frame.
pub struct NotificationDispatcher<D, P, W>
where
    D: DndProbe,
    P: NotificationPresenter,
    W: WindowShell,
{
    probe: D,
    presenter: P,
    shell: W,
    registry: Arc<NotificationRegistry>,
    config: AppConfig,
}

impl<D, P, W> NotificationDispatcher<D, P, W>
where
    D: DndProbe,
    P: NotificationPresenter,
    W: WindowShell,
{
    /// Create a new dispatcher instance
    pub fn new(
        probe: D,
        presenter: P,
        shell: W,
        registry: Arc<NotificationRegistry>,
        config: AppConfig,
    ) -> Self {
        Self {
            probe,
            presenter,
            shell,
            registry,
            config,
        }
    }

    /// The shared in-flight registry
    pub fn registry(&self) -> Arc<NotificationRegistry> {
        Arc::clone(&self.registry)
    }

    /// Dispatch one notification.
    ///
    /// Never returns an error and never panics; every failure path is
    /// logged and collapsed into the outcome enum.
    pub async fn dispatch(
        &self,
        request: NotificationRequest,
        callbacks: InteractionCallbacks,
    ) -> DispatchOutcome {
        // A failed probe behaves like suppression: no notification, no
        // window side effects.
        let state = match self.probe.state().await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "DND probe failed, suppressing notification");
                return DispatchOutcome::Suppressed;
            }
        };

        if state.is_active() {
            debug!(title = %request.title, "do-not-disturb active, notification suppressed");
            return DispatchOutcome::Suppressed;
        }

        let options = PresentOptions::merge(&self.config, &request);

        let id = self.registry.allocate_id(request.tag);
        self.registry.insert(ActiveNotification {
            id,
            title: request.title.clone(),
            tag: request.tag,
        });

        let interaction = match self.presenter.present(options).await {
            Ok(interaction) => interaction,
            Err(e) => {
                error!(error = %e, title = %request.title, "notification presentation failed");
                self.registry.remove(id);
                return DispatchOutcome::Failed;
            }
        };

        self.registry.remove(id);
        debug!(?interaction, notification = %id, "notification resolved");

        let InteractionCallbacks {
            on_click,
            on_timeout,
        } = callbacks;

        match interaction {
            Interaction::Activated => {
                if let Some(callback) = on_click {
                    callback();
                }
                self.shell.restore_main();
            }
            Interaction::TimedOut => {
                if let Some(callback) = on_timeout {
                    callback();
                }
            }
            Interaction::Dismissed | Interaction::Shown => {}
        }

        if !request.silent {
            if let Some(sound) = request.sound.or_else(|| self.config.sound_or_default()) {
                self.shell.send_to_renderer(ShellCommand::PlaySound(sound));
            }
        }

        self.shell.flash_frame(true);

        DispatchOutcome::Presented(interaction)
    }
}
