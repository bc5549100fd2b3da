//! In-process window factory.
//!
//! Each created window is a [`PingOptions`] controller living on the
//! shared [`EventHub`], so the main window and the ping window talk exactly
//! as they would across real webviews.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use toolfetch_core::{
    CommandInvoker, DialogPort, EventHub, PingOptions, WindowError, WindowFactory, WindowSpec,
};
use tracing::{debug, info};

/// `WindowFactory` that runs windows inside this process.
pub struct InProcessWindows {
    hub: EventHub,
    invoker: Arc<dyn CommandInvoker>,
    dialogs: Arc<dyn DialogPort>,
    internet_target: String,
    open: Mutex<HashMap<String, Arc<PingOptions>>>,
    fail_next: Mutex<Option<String>>,
}

impl InProcessWindows {
    pub fn new(
        hub: EventHub,
        invoker: Arc<dyn CommandInvoker>,
        dialogs: Arc<dyn DialogPort>,
        internet_target: impl Into<String>,
    ) -> Self {
        Self {
            hub,
            invoker,
            dialogs,
            internet_target: internet_target.into(),
            open: Mutex::new(HashMap::new()),
            fail_next: Mutex::new(None),
        }
    }

    fn windows(&self) -> MutexGuard<'_, HashMap<String, Arc<PingOptions>>> {
        self.open.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The live window labelled `label`.
    pub fn window(&self, label: &str) -> Option<Arc<PingOptions>> {
        self.windows().get(label).cloned()
    }

    /// Destroy the window labelled `label`. Returns whether it existed.
    pub fn close(&self, label: &str) -> bool {
        let closed = self.windows().remove(label).is_some();
        if closed {
            info!(window = label, "Window closed");
        }
        closed
    }

    /// Make the next creation fail with `reason`.
    pub fn fail_next_with(&self, reason: impl Into<String>) {
        *self.fail_next.lock().unwrap_or_else(PoisonError::into_inner) = Some(reason.into());
    }
}

#[async_trait]
impl WindowFactory for InProcessWindows {
    async fn create_window(&self, spec: &WindowSpec) -> Result<(), WindowError> {
        if let Some(reason) = self
            .fail_next
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            return Err(WindowError::Creation(reason));
        }

        let mut windows = self.windows();
        if windows.contains_key(&spec.label) {
            return Err(WindowError::LabelInUse(spec.label.clone()));
        }

        debug!(window = %spec.label, title = %spec.title, url = %spec.url, "Creating window");
        let window = PingOptions::open(
            spec.label.clone(),
            &self.hub,
            Arc::clone(&self.invoker),
            Arc::clone(&self.dialogs),
            self.internet_target.clone(),
        );
        windows.insert(spec.label.clone(), Arc::new(window));
        Ok(())
    }
}

impl std::fmt::Debug for InProcessWindows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InProcessWindows")
            .field("open", &self.windows().keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
