//! In-memory device store
//!
//! Keyed store for [`Device`] records. Updates are whole-record replacements
//! (last writer wins); there is no partial-field merge. The store is the
//! only shared mutable state in the gateway and is safe under concurrent
//! callers. Replaceable by a persistent store without changing the
//! dispatcher's contract.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{info, warn};

use crate::models::device::Device;
use crate::utils::generate_uuid;

/// In-memory device store
pub struct DeviceStore {
    inner: RwLock<Inner>,
}

struct Inner {
    devices: HashMap<String, Device>,
    /// Insertion order of identifiers, for stable enumeration
    order: Vec<String>,
}

impl DeviceStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                devices: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// List all device identifiers in insertion order
    pub fn list(&self) -> Vec<String> {
        let inner = self.inner.read().expect("device store lock poisoned");
        inner.order.clone()
    }

    /// Look up a device by identifier
    pub fn get(&self, id: &str) -> Option<Device> {
        let inner = self.inner.read().expect("device store lock poisoned");
        inner.devices.get(id).cloned()
    }

    /// Register a device, generating an identifier when the caller did not
    /// supply one. An existing record with the same identifier is replaced.
    pub fn create(&self, mut device: Device) -> Device {
        if device.identifier.trim().is_empty() {
            device.identifier = generate_uuid();
        }

        let mut inner = self.inner.write().expect("device store lock poisoned");
        if inner.devices.insert(device.identifier.clone(), device.clone()).is_none() {
            inner.order.push(device.identifier.clone());
        }

        info!("Device registered: {}", device.identifier);
        device
    }

    /// Replace a device wholesale. The stored identifier is pinned to `id`
    /// regardless of what the caller supplied, preventing identity drift.
    /// Returns `None` when `id` is absent.
    pub fn update(&self, id: &str, mut device: Device) -> Option<Device> {
        let mut inner = self.inner.write().expect("device store lock poisoned");
        if !inner.devices.contains_key(id) {
            warn!("Device not found for update: {}", id);
            return None;
        }

        device.identifier = id.to_string();
        inner.devices.insert(id.to_string(), device.clone());

        info!("Device updated: {}", id);
        Some(device)
    }

    /// Remove a device. Returns true iff an entry existed and was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write().expect("device store lock poisoned");
        let removed = inner.devices.remove(id).is_some();
        if removed {
            inner.order.retain(|existing| existing != id);
            info!("Device removed: {}", id);
        } else {
            warn!("Attempt to remove unknown device: {}", id);
        }
        removed
    }

    /// Number of registered devices
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("device store lock poisoned");
        inner.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DeviceStore {
    fn default() -> Self {
        Self::new()
    }
}
