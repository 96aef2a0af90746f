use std::collections::BTreeMap;

use gridlink_types::{ButtonEvent, ButtonId};

#[derive(Debug, Clone, Copy)]
struct Held {
    since_ms: u64,
    long_sent: bool,
}

/// Turns raw button values into Down/Up events and detects long presses.
#[derive(Debug)]
pub struct ButtonClassifier {
    long_press_ms: u64,
    held: BTreeMap<ButtonId, Held>,
}

impl ButtonClassifier {
    pub fn new(long_press_ms: u64) -> Self {
        Self {
            long_press_ms,
            held: BTreeMap::new(),
        }
    }

    /// Classify a raw value: non-zero presses, zero releases. A repeated
    /// non-zero value while held (pressure updates) yields nothing.
    pub fn classify(&mut self, button: ButtonId, value: u8, now_ms: u64) -> Option<ButtonEvent> {
        if value > 0 {
            if self.held.contains_key(&button) {
                return None;
            }
            self.held.insert(
                button,
                Held {
                    since_ms: now_ms,
                    long_sent: false,
                },
            );
            Some(ButtonEvent::Down)
        } else {
            self.held.remove(&button);
            Some(ButtonEvent::Up)
        }
    }

    /// Buttons that crossed the long-press threshold since the last poll.
    /// Each press reports at most once.
    pub fn poll_long(&mut self, now_ms: u64) -> Vec<ButtonId> {
        let threshold = self.long_press_ms;
        self.held
            .iter_mut()
            .filter(|(_, held)| !held.long_sent && now_ms.saturating_sub(held.since_ms) >= threshold)
            .map(|(button, held)| {
                held.long_sent = true;
                *button
            })
            .collect()
    }

    pub fn is_held(&self, button: ButtonId) -> bool {
        self.held.contains_key(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: ButtonId = ButtonId::new(104);

    #[test]
    fn press_and_release() {
        let mut classifier = ButtonClassifier::new(400);
        assert_eq!(classifier.classify(PAD, 127, 0), Some(ButtonEvent::Down));
        assert!(classifier.is_held(PAD));
        assert_eq!(classifier.classify(PAD, 0, 10), Some(ButtonEvent::Up));
        assert!(!classifier.is_held(PAD));
    }

    #[test]
    fn pressure_updates_are_swallowed() {
        let mut classifier = ButtonClassifier::new(400);
        classifier.classify(PAD, 100, 0);
        assert_eq!(classifier.classify(PAD, 90, 5), None);
    }

    #[test]
    fn long_press_reported_once() {
        let mut classifier = ButtonClassifier::new(400);
        classifier.classify(PAD, 127, 100);
        assert!(classifier.poll_long(499).is_empty());
        assert_eq!(classifier.poll_long(500), vec![PAD]);
        assert!(classifier.poll_long(900).is_empty());
        classifier.classify(PAD, 0, 950);
        classifier.classify(PAD, 127, 1000);
        assert_eq!(classifier.poll_long(1400), vec![PAD]);
    }

    #[test]
    fn released_before_threshold_is_not_long() {
        let mut classifier = ButtonClassifier::new(400);
        classifier.classify(PAD, 127, 0);
        classifier.classify(PAD, 0, 200);
        assert!(classifier.poll_long(1000).is_empty());
    }
}
