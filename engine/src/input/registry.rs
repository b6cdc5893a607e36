//! Device Registry Module
//!
//! Tracks the currently connected input devices, one set per device kind.
//! Add/remove notifications may arrive asynchronously from the platform
//! layer; those are posted through a [`DeviceChangeSender`] and applied at
//! the start of the next tick, so the kind-sets only ever mutate between
//! polls (single writer per tick).

use std::sync::mpsc::{Receiver, Sender, channel};

use log::debug;

use super::device::{DeviceHandle, DeviceId, DeviceKind};

/// A queued device add/remove notification.
#[derive(Debug, Clone)]
pub struct DeviceEvent {
    pub device: DeviceHandle,
    pub added: bool,
}

/// Cloneable, thread-safe entry point for device-change notifications.
///
/// The platform layer keeps one of these and calls
/// [`DeviceChangeSender::on_device_change`] from whatever thread its device
/// callbacks run on. Events are buffered until the registry drains them.
#[derive(Debug, Clone)]
pub struct DeviceChangeSender {
    tx: Sender<DeviceEvent>,
}

impl DeviceChangeSender {
    /// Queue a device add (`added = true`) or removal (`added = false`).
    pub fn on_device_change(&self, device: DeviceHandle, added: bool) {
        // A closed channel means the registry is gone; nothing to notify.
        let _ = self.tx.send(DeviceEvent { device, added });
    }
}

/// Connected devices, partitioned by kind.
///
/// Invariants: a device id appears at most once per kind-set, and removing
/// a device that is not registered is a no-op, never an error.
#[derive(Debug)]
pub struct DeviceRegistry {
    keyboards: Vec<DeviceHandle>,
    mice: Vec<DeviceHandle>,
    gamepads: Vec<DeviceHandle>,
    gyroscopes: Vec<DeviceHandle>,
    trackers: Vec<DeviceHandle>,
    touchscreens: Vec<DeviceHandle>,
    events: Receiver<DeviceEvent>,
    tx: Sender<DeviceEvent>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    /// Create an empty registry with its own change queue.
    pub fn new() -> Self {
        let (tx, events) = channel();
        Self {
            keyboards: Vec::new(),
            mice: Vec::new(),
            gamepads: Vec::new(),
            gyroscopes: Vec::new(),
            trackers: Vec::new(),
            touchscreens: Vec::new(),
            events,
            tx,
        }
    }

    /// A sender the platform layer can use from any thread.
    pub fn sender(&self) -> DeviceChangeSender {
        DeviceChangeSender {
            tx: self.tx.clone(),
        }
    }

    /// Apply all queued device-change events.
    ///
    /// Called once at the start of every tick, before any device iteration.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.on_device_change(event.device, event.added);
        }
    }

    /// Same-thread device-change entry point.
    ///
    /// Dispatches to [`DeviceRegistry::add_device`] or
    /// [`DeviceRegistry::remove_device`] based on `added`.
    pub fn on_device_change(&mut self, device: DeviceHandle, added: bool) {
        debug!(
            "device change: {:?} {:?} {}",
            device.kind(),
            device.id(),
            if added { "added" } else { "removed" }
        );
        if added {
            self.add_device(device);
        } else {
            self.remove_device(&device);
        }
    }

    /// Insert a device into its kind-set.
    ///
    /// A second add of an already-registered id is ignored.
    pub fn add_device(&mut self, device: DeviceHandle) {
        let id = device.id();
        let set = self.kind_set_mut(device.kind());
        if set.iter().any(|existing| existing.id() == id) {
            debug!("device {:?} already registered, ignoring add", id);
            return;
        }
        set.push(device);
    }

    /// Remove a device from its kind-set if present; otherwise do nothing.
    pub fn remove_device(&mut self, device: &DeviceHandle) {
        let id = device.id();
        let set = self.kind_set_mut(device.kind());
        if let Some(index) = set.iter().position(|existing| existing.id() == id) {
            // Vec::remove keeps registration order for the survivors.
            set.remove(index);
        }
    }

    fn kind_set_mut(&mut self, kind: DeviceKind) -> &mut Vec<DeviceHandle> {
        match kind {
            DeviceKind::Keyboard => &mut self.keyboards,
            DeviceKind::Mouse => &mut self.mice,
            DeviceKind::Gamepad => &mut self.gamepads,
            DeviceKind::Gyroscope => &mut self.gyroscopes,
            DeviceKind::Tracker => &mut self.trackers,
            DeviceKind::Touchscreen => &mut self.touchscreens,
        }
    }

    fn kind_set(&self, kind: DeviceKind) -> &[DeviceHandle] {
        match kind {
            DeviceKind::Keyboard => &self.keyboards,
            DeviceKind::Mouse => &self.mice,
            DeviceKind::Gamepad => &self.gamepads,
            DeviceKind::Gyroscope => &self.gyroscopes,
            DeviceKind::Tracker => &self.trackers,
            DeviceKind::Touchscreen => &self.touchscreens,
        }
    }

    /// Registered keyboards, in registration order.
    pub fn keyboards(&self) -> &[DeviceHandle] {
        &self.keyboards
    }

    /// Registered mice, in registration order.
    pub fn mice(&self) -> &[DeviceHandle] {
        &self.mice
    }

    /// Registered gamepads, in registration order.
    pub fn gamepads(&self) -> &[DeviceHandle] {
        &self.gamepads
    }

    /// Registered gyroscopes, in registration order.
    pub fn gyroscopes(&self) -> &[DeviceHandle] {
        &self.gyroscopes
    }

    /// Registered spatial trackers, in registration order.
    pub fn trackers(&self) -> &[DeviceHandle] {
        &self.trackers
    }

    /// Registered touchscreens, in registration order.
    pub fn touchscreens(&self) -> &[DeviceHandle] {
        &self.touchscreens
    }

    /// Number of registered devices of one kind.
    pub fn count(&self, kind: DeviceKind) -> usize {
        self.kind_set(kind).len()
    }

    /// Total number of registered devices across every kind.
    pub fn len(&self) -> usize {
        self.keyboards.len()
            + self.mice.len()
            + self.gamepads.len()
            + self.gyroscopes.len()
            + self.trackers.len()
            + self.touchscreens.len()
    }

    /// Check whether no devices are registered at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a registered device by id within one kind.
    pub fn find(&self, kind: DeviceKind, id: DeviceId) -> Option<&DeviceHandle> {
        self.kind_set(kind).iter().find(|device| device.id() == id)
    }
}
