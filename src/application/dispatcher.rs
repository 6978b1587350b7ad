//! Instance dispatcher
//!
//! One registry for every live dropdown. Host-wide input (pointer presses
//! outside a widget, keys, window resizes) enters here and is routed to the
//! instances that care, so no instance listens on shared global state.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::domain::value_objects::{InstanceId, Resize, Values};
use crate::error::{DropmenuError, DropmenuResult};

use super::dropdown::{Command, Dropdown, Key};

/// Registry of live instances keyed by id.
#[derive(Debug, Default)]
pub struct Dispatcher {
    instances: BTreeMap<InstanceId, Dropdown>,
    /// Pending debounced resizes
    resize_due: BTreeMap<InstanceId, Instant>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance, replacing any previous one with the same id
    pub fn register(&mut self, dropdown: Dropdown) -> InstanceId {
        let uid = dropdown.uid().clone();
        if self.instances.insert(uid.clone(), dropdown).is_some() {
            tracing::warn!(uid = %uid, "replaced an instance registered under the same id");
        }
        uid
    }

    /// Tear an instance down
    pub fn unregister(&mut self, uid: &InstanceId) -> Option<Dropdown> {
        self.resize_due.remove(uid);
        self.instances.remove(uid)
    }

    pub fn get(&self, uid: &InstanceId) -> Option<&Dropdown> {
        self.instances.get(uid)
    }

    pub fn get_mut(&mut self, uid: &InstanceId) -> Option<&mut Dropdown> {
        self.instances.get_mut(uid)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &InstanceId> {
        self.instances.keys()
    }

    /// A pointer press landed inside `inside`, or outside every widget.
    ///
    /// Closes each auto-closing instance the press was not inside and
    /// returns the ids that started closing.
    pub fn pointer_down(&mut self, inside: Option<&InstanceId>) -> Vec<InstanceId> {
        self.instances
            .iter_mut()
            .filter(|(uid, dropdown)| Some(*uid) != inside && dropdown.options().auto_close)
            .filter_map(|(uid, dropdown)| dropdown.close().then(|| uid.clone()))
            .collect()
    }

    /// Offer a key to every instance; true when any consumed it
    pub fn key(&mut self, key: Key) -> bool {
        self.instances
            .values_mut()
            .fold(false, |handled, dropdown| dropdown.handle_key(key) || handled)
    }

    /// The host window changed size; (re)arm each instance's debounce
    pub fn window_resized(&mut self, now: Instant) {
        for (uid, dropdown) in &self.instances {
            if let Some(delay) = dropdown.options().auto_resize {
                self.resize_due
                    .insert(uid.clone(), now + Duration::from_millis(delay));
            }
        }
    }

    /// Run the debounced resizes that are due at `now`
    pub fn poll(&mut self, now: Instant) -> Vec<(InstanceId, Resize)> {
        let due: Vec<InstanceId> = self
            .resize_due
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(uid, _)| uid.clone())
            .collect();

        due.into_iter()
            .filter_map(|uid| {
                self.resize_due.remove(&uid);
                let resize = self.instances.get_mut(&uid)?.auto_resize()?;
                Some((uid, resize))
            })
            .collect()
    }

    /// Earliest pending debounce deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize_due.values().min().copied()
    }

    /// Route a native control change to its instance
    pub fn control_changed(
        &mut self,
        uid: &InstanceId,
        values: impl Into<Values>,
    ) -> DropmenuResult<bool> {
        let dropdown = self
            .instances
            .get_mut(uid)
            .ok_or_else(|| DropmenuError::UnknownInstance(uid.to_string()))?;
        Ok(dropdown.control_changed(values))
    }

    /// Query mode: run a command by name on an existing instance.
    ///
    /// `destroy` unregisters the instance and returns `true`.
    pub fn query(&mut self, uid: &InstanceId, name: &str, args: &[Value]) -> DropmenuResult<Value> {
        let command = name.parse::<Command>()?;
        if command == Command::Destroy {
            return match self.unregister(uid) {
                Some(_) => Ok(Value::Bool(true)),
                None => Err(DropmenuError::UnknownInstance(uid.to_string())),
            };
        }

        let dropdown = self
            .instances
            .get_mut(uid)
            .ok_or_else(|| DropmenuError::UnknownInstance(uid.to_string()))?;
        dropdown.execute(command, args)
    }
}
