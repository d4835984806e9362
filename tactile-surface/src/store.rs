use crate::error::TactileSurfaceError;

/// One addressable control element with change tracking.
///
/// `previous_value` equals `value` exactly when no unread change is pending.
#[derive(Debug, Clone)]
pub struct ControlElement<V> {
    pub value: V,
    pub previous_value: V,
}

/// Arena of control elements for one surface, indexed by stable integer id.
///
/// All value mutation goes through [`ControlStore::write`], which skips
/// writes that would not change the value, so repeated events that map to the
/// identical value never produce a change notification.
#[derive(Debug, Clone)]
pub struct ControlStore<V: Clone + PartialEq> {
    elements: Vec<ControlElement<V>>,
}

impl<V: Clone + PartialEq> ControlStore<V> {
    pub fn new(count: usize, default: V) -> Self {
        Self {
            elements: vec![
                ControlElement {
                    value: default.clone(),
                    previous_value: default,
                };
                count
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn value(&self, index: usize) -> &V {
        &self.elements[index].value
    }

    /// Write a value, skipping the write when it equals the current value
    pub fn write(&mut self, index: usize, value: V) {
        let element = &mut self.elements[index];
        if element.value != value {
            element.value = value;
        }
    }

    /// Indices whose value changed since the last call, snapshotting
    /// `previous_value = value` for each
    pub fn take_changed(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (index, element) in self.elements.iter_mut().enumerate() {
            if element.value != element.previous_value {
                element.previous_value = element.value.clone();
                changed.push(index);
            }
        }
        changed
    }

    /// Overwrite every element's current and previous value in lockstep.
    ///
    /// No change notification follows from this call. The value slice must
    /// match the element count exactly; the store never truncates or pads.
    pub fn set_values(&mut self, values: &[V]) -> Result<(), TactileSurfaceError> {
        if values.len() != self.elements.len() {
            return Err(TactileSurfaceError::ValueCountMismatch {
                expected: self.elements.len(),
                provided: values.len(),
            });
        }
        for (element, value) in self.elements.iter_mut().zip(values) {
            element.value = value.clone();
            element.previous_value = value.clone();
        }
        Ok(())
    }

    /// Full current-state snapshot
    pub fn values(&self) -> Vec<V> {
        self.elements.iter().map(|e| e.value.clone()).collect()
    }
}
