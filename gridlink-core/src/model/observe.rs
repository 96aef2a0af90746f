/// Explicit subscribe/unsubscribe lifecycle of a collaborator's properties.
pub trait Observable {
    fn enable_observers(&mut self, enable: bool);
}

/// A property value the surface has declared interest in.
///
/// While unsubscribed the host stops pushing updates, so `set` from the host
/// side is dropped and getters keep returning the last known value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedValue<T> {
    value: T,
    subscribed: bool,
}

impl<T: Clone> ObservedValue<T> {
    /// Mark the property as interesting; it starts subscribed.
    pub fn interested(value: T) -> Self {
        Self {
            value,
            subscribed: true,
        }
    }

    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Host-side update. Returns whether the update was applied.
    pub fn set(&mut self, value: T) -> bool {
        if !self.subscribed {
            return false;
        }
        self.value = value;
        true
    }

    pub fn set_subscribed(&mut self, subscribed: bool) {
        self.subscribed = subscribed;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribed_value_keeps_last_known() {
        let mut value = ObservedValue::interested(3);
        assert!(value.set(4));
        value.set_subscribed(false);
        assert!(!value.set(5));
        assert_eq!(value.get(), 4);
        value.set_subscribed(true);
        assert!(value.set(6));
        assert_eq!(value.get(), 6);
    }
}
