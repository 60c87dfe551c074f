use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;
use tower::ServiceExt;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::app::notifications::Notification;
use crate::classification::{ClassificationResult, ClassificationService};
use crate::error::ClassifyError;
use crate::media::{ImageHandle, SelectedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Analyzing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Started(Uuid),
    NotAnImage,
    Busy,
}

struct ScanCompletion {
    scan_id: Uuid,
    outcome: Result<ClassificationResult, ClassifyError>,
}

struct PendingScan {
    id: Uuid,
    started_at: Instant,
    task: JoinHandle<()>,
}

/// Owns the welcome → analyzing → results flow and the one request that
/// drives it. Lives on the UI thread; the request runs on `runtime` and
/// reports back through a channel drained by [`ScreenController::poll`].
pub struct ScreenController {
    screen: Screen,
    image: Option<ImageHandle>,
    result: Option<ClassificationResult>,
    pending: Option<PendingScan>,
    service: ClassificationService,
    runtime: Handle,
    completion_tx: Sender<ScanCompletion>,
    completion_rx: Receiver<ScanCompletion>,
    notifications: Vec<Notification>,
}

impl ScreenController {
    pub fn new(service: ClassificationService, runtime: Handle) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel(8);
        Self {
            screen: Screen::Welcome,
            image: None,
            result: None,
            pending: None,
            service,
            runtime,
            completion_tx,
            completion_rx,
            notifications: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// How long the in-flight scan has been running.
    pub fn scan_elapsed(&self) -> Option<Duration> {
        self.pending.as_ref().map(|scan| scan.started_at.elapsed())
    }

    pub fn select_image(&mut self, file: SelectedFile) -> SelectOutcome {
        if !file.is_image() {
            debug!("Ignoring {} ({}): not an image", file.name, file.mime);
            return SelectOutcome::NotAnImage;
        }
        if let Some(scan) = &self.pending {
            warn!("Ignoring {}: scan {} still in flight", file.name, scan.id);
            return SelectOutcome::Busy;
        }

        self.result = None;
        self.image = None;
        let handle = ImageHandle::acquire(file);
        let upload = handle.upload();
        self.image = Some(handle);
        self.screen = Screen::Analyzing;

        let scan_id = Uuid::new_v4();
        let service = self.service.clone();
        let completion_tx = self.completion_tx.clone();
        let task = self.runtime.spawn(async move {
            let outcome = service.oneshot(upload).await;
            if completion_tx
                .send(ScanCompletion { scan_id, outcome })
                .await
                .is_err()
            {
                debug!("Controller dropped before scan {} finished", scan_id);
            }
        });

        info!("Started scan {}", scan_id);
        self.pending = Some(PendingScan {
            id: scan_id,
            started_at: Instant::now(),
            task,
        });
        SelectOutcome::Started(scan_id)
    }

    pub fn start_new_scan(&mut self) {
        self.cancel_pending();
        self.screen = Screen::Welcome;
        self.image = None;
        self.result = None;
    }

    /// Returns to the welcome screen, keeping the image and result around.
    pub fn go_back(&mut self) {
        self.cancel_pending();
        self.screen = Screen::Welcome;
    }

    pub fn save_to_history(&mut self) {
        self.notifications.push(Notification::saved_to_history());
    }

    pub fn view_history(&mut self) {
        self.notifications.push(Notification::history_coming_soon());
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Applies every finished scan without blocking. Returns true when the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completion_rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Waits until no scan is in flight.
    pub async fn settle(&mut self) {
        while self.pending.is_some() {
            match self.completion_rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(scan) = self.pending.take() {
            scan.task.abort();
            info!("Cancelled scan {}", scan.id);
        }
    }

    fn apply(&mut self, completion: ScanCompletion) -> bool {
        match &self.pending {
            Some(scan) if scan.id == completion.scan_id => {}
            _ => {
                debug!("Dropping stale completion for scan {}", completion.scan_id);
                return false;
            }
        }
        self.pending = None;

        match completion.outcome {
            Ok(result) => {
                info!(
                    "Scan {} classified as {} ({:.3})",
                    completion.scan_id, result.prediction, result.confidence
                );
                self.result = Some(result);
                self.screen = Screen::Results;
            }
            Err(err) => {
                error!("Error classifying image: {}", err);
                self.result = None;
                self.image = None;
                self.screen = Screen::Welcome;
                self.notifications.push(if err.is_timeout() {
                    Notification::classification_timed_out()
                } else {
                    Notification::classification_failed()
                });
            }
        }
        true
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
