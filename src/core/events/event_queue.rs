//=========================================================================
// Event Queue
//=========================================================================
//
// Bounded FIFO mailbox for application events.
//
// Architecture:
//   EventSender::post() → crossbeam channel → drain_frame() → Vec<AppEvent>
//
// Draining is bounded per frame so a runaway producer cannot starve the
// update and render phases; the remainder is picked up next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::AppEvent;

//=== Constants ===========================================================

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== EventSender =========================================================

/// Cloneable producer handle given to widgets and game states.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<AppEvent>,
}

impl EventSender {
    /// Posts an event for the next dispatch.
    ///
    /// Events posted while the queue is full are dropped with a warning.
    pub fn post(&self, event: AppEvent) {
        match self.sender.try_send(event) {
            Ok(()) => trace!(target: "game::events", "Posted {:?}", event),
            Err(TrySendError::Full(event)) => {
                warn!(target: "game::events", "Event queue full, dropping {:?}", event)
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "game::events", "Event queue closed, dropping {:?}", event)
            }
        }
    }
}

//=== EventQueue ==========================================================

/// Owner side of the application event channel.
pub struct EventQueue {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventQueue {
    /// Creates a queue holding at most `capacity` undispatched events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Event queue capacity must be positive");
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Returns a new producer handle.
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Takes the events pending for this frame, oldest first.
    pub fn drain_frame(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();

        while events.len() < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if events.len() >= MAX_EVENTS_PER_FRAME {
            warn!(target: "game::events", "Event queue backlog: drained {} events this frame", events.len());
        }

        events
    }

    /// Number of events waiting for dispatch.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empty_queue() {
        let queue = EventQueue::new(8);
        assert!(queue.drain_frame().is_empty());
    }

    #[test]
    fn drain_preserves_fifo_order() {
        let queue = EventQueue::new(8);
        let sender = queue.sender();

        sender.post(AppEvent::MainMenuOptions);
        sender.post(AppEvent::OptionsMenuGoBack);
        sender.post(AppEvent::MainMenuPlay);

        assert_eq!(
            queue.drain_frame(),
            vec![
                AppEvent::MainMenuOptions,
                AppEvent::OptionsMenuGoBack,
                AppEvent::MainMenuPlay
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn full_queue_drops_new_events() {
        let queue = EventQueue::new(2);
        let sender = queue.sender();

        sender.post(AppEvent::GameplayPause);
        sender.post(AppEvent::PauseMenuResume);
        sender.post(AppEvent::Quit);

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.drain_frame(),
            vec![AppEvent::GameplayPause, AppEvent::PauseMenuResume]
        );
    }

    #[test]
    fn drain_is_bounded_per_frame() {
        let queue = EventQueue::new(MAX_EVENTS_PER_FRAME + 10);
        let sender = queue.sender();
        for _ in 0..MAX_EVENTS_PER_FRAME + 10 {
            sender.post(AppEvent::MainMenuPlay);
        }

        assert_eq!(queue.drain_frame().len(), MAX_EVENTS_PER_FRAME);
        assert_eq!(queue.drain_frame().len(), 10, "Backlog is picked up next frame");
    }

    #[test]
    fn senders_are_independent_clones() {
        let queue = EventQueue::new(4);
        let a = queue.sender();
        let b = a.clone();

        a.post(AppEvent::MainMenuPlay);
        b.post(AppEvent::Quit);

        assert_eq!(queue.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Event queue capacity must be positive")]
    fn zero_capacity_panics() {
        EventQueue::new(0);
    }
}
