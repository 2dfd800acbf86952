//! Bookkeeping for hot-plugged game controllers.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::event::DeviceId;

/// A controller the dialog currently knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDevice {
    pub id: DeviceId,
    pub name: String,
}

/// Controllers attached during the dialog, keyed by device id.
///
/// Every tracked controller is released when the registry is dropped.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: HashMap<DeviceId, ControllerDevice>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly attached controller. Re-adding an id replaces the old entry.
    pub fn add(&mut self, id: DeviceId, name: impl Into<String>) {
        let device = ControllerDevice {
            id,
            name: name.into(),
        };
        info!(id, name = %device.name, "game controller added");
        if let Some(previous) = self.devices.insert(id, device) {
            warn!(id, name = %previous.name, "replaced controller with the same id");
        }
    }

    /// Stop tracking a detached controller.
    pub fn remove(&mut self, id: DeviceId) -> Option<ControllerDevice> {
        let removed = self.devices.remove(&id);
        match &removed {
            Some(device) => info!(id, name = %device.name, "game controller removed"),
            None => warn!(id, "attempted to remove untracked controller"),
        }
        removed
    }

    pub fn get(&self, id: DeviceId) -> Option<&ControllerDevice> {
        self.devices.get(&id)
    }

    pub fn contains(&self, id: DeviceId) -> bool {
        self.devices.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Release every tracked controller, returning how many there were.
    pub fn release_all(&mut self) -> usize {
        let count = self.devices.len();
        for (id, device) in self.devices.drain() {
            info!(id, name = %device.name, "releasing game controller");
        }
        count
    }
}

impl Drop for DeviceRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}
