//=========================================================================
// Event Queue
//
// Transport between platform/device producer threads and the single
// pump consumer. Built on two bounded channels:
//
// ```text
//   EventProducer ── events ──────────► EventConsumer
//        ▲                                   │
//        └────────── recycled ◄──────────────┘
// ```
//
// Event storage is boxed and flows back to producers once released, so
// a steady-state loop reuses the same allocations frame after frame.
// `poll()` hands the consumer a scoped guard; dropping the guard *is*
// the release, which guarantees exactly-once reclamation on every exit
// path of the handling scope, including early returns.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::Deref;

//=== External Crates =====================================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{trace, warn};

//=== Internal Imports ====================================================

use crate::core::event::Event;

//=== Construction ========================================================

/// Creates a connected producer/consumer pair with the given capacity.
///
/// Producers may push from platform callback threads concurrently; the
/// consumer side is single-threaded and non-blocking.
///
/// # Panics
///
/// Panics if `capacity == 0`.
pub fn event_queue(capacity: usize) -> (EventProducer, EventConsumer) {
    assert!(capacity > 0, "Queue capacity must be positive");

    let (event_tx, event_rx) = bounded(capacity);
    let (recycle_tx, recycle_rx) = bounded(capacity);

    (
        EventProducer {
            events: event_tx,
            recycled: recycle_rx,
        },
        EventConsumer {
            events: event_rx,
            recycle: recycle_tx,
        },
    )
}

//=== EventProducer =======================================================

/// Producer half of the event queue.
///
/// Cloneable so several platform/device threads can push concurrently.
#[derive(Clone)]
pub struct EventProducer {
    events: Sender<Box<Event>>,
    recycled: Receiver<Box<Event>>,
}

impl EventProducer {
    /// Pushes an event, reusing released storage when available.
    ///
    /// Returns `false` if the event was dropped because the queue is
    /// full or the consumer is gone. Dropping is deliberate: a stalled
    /// consumer must not block platform callbacks.
    pub fn push(&self, event: Event) -> bool {
        let boxed = match self.recycled.try_recv() {
            Ok(mut slot) => {
                *slot = event;
                slot
            }
            Err(_) => Box::new(event),
        };

        match self.events.try_send(boxed) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(target: "queue", "Event queue full, dropping {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                trace!(target: "queue", "Consumer gone, dropping {:?}", event);
                false
            }
        }
    }
}

//=== EventConsumer =======================================================

/// Consumer half of the event queue. Exactly one exists per queue.
pub struct EventConsumer {
    events: Receiver<Box<Event>>,
    recycle: Sender<Box<Event>>,
}

impl EventConsumer {
    /// Polls the next event without blocking.
    ///
    /// The returned guard owns the event until dropped; the drop
    /// releases its storage back to the producer side. At most one
    /// guard is live at a time in the single-consumer discipline.
    pub fn poll(&self) -> Option<PolledEvent<'_>> {
        match self.events.try_recv() {
            Ok(event) => Some(PolledEvent {
                event: Some(event),
                recycle: &self.recycle,
            }),
            Err(_) => None,
        }
    }

    /// Number of events currently waiting.
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

//=== PolledEvent =========================================================

/// Scoped ownership of one polled event.
///
/// Dereferences to [`Event`]; releases storage on drop.
pub struct PolledEvent<'q> {
    event: Option<Box<Event>>,
    recycle: &'q Sender<Box<Event>>,
}

impl Deref for PolledEvent<'_> {
    type Target = Event;

    fn deref(&self) -> &Event {
        // Invariant: `event` is only vacated by Drop.
        self.event.as_deref().unwrap()
    }
}

impl Drop for PolledEvent<'_> {
    fn drop(&mut self) {
        if let Some(slot) = self.event.take() {
            // A full recycle channel just deallocates the box.
            let _ = self.recycle.try_send(slot);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::WindowHandle;

    #[test]
    fn poll_empty_queue_returns_none() {
        let (_producer, consumer) = event_queue(8);
        assert!(consumer.poll().is_none());
        assert_eq!(consumer.pending(), 0);
    }

    #[test]
    fn events_arrive_in_push_order() {
        let (producer, consumer) = event_queue(8);
        producer.push(Event::Window { handle: WindowHandle(1) });
        producer.push(Event::Window { handle: WindowHandle(2) });
        producer.push(Event::Exit);

        assert!(matches!(*consumer.poll().unwrap(), Event::Window { handle: WindowHandle(1) }));
        assert!(matches!(*consumer.poll().unwrap(), Event::Window { handle: WindowHandle(2) }));
        assert!(matches!(*consumer.poll().unwrap(), Event::Exit));
        assert!(consumer.poll().is_none());
    }

    #[test]
    fn released_storage_is_reused() {
        let (producer, consumer) = event_queue(8);

        producer.push(Event::Exit);
        let first = consumer.poll().unwrap();
        let first_ptr = &*first as *const Event;
        drop(first); // release

        producer.push(Event::Exit);
        let second = consumer.poll().unwrap();
        assert_eq!(
            &*second as *const Event, first_ptr,
            "Push after release should reuse the recycled allocation"
        );
    }

    #[test]
    fn early_drop_still_releases() {
        let (producer, consumer) = event_queue(2);

        producer.push(Event::Exit);
        {
            let _guard = consumer.poll().unwrap();
            // Guard dropped at scope exit without explicit handling.
        }

        // Capacity 2 queue stays usable indefinitely only if storage
        // keeps flowing back.
        for _ in 0..16 {
            assert!(producer.push(Event::Exit));
            assert!(consumer.poll().is_some());
        }
    }

    #[test]
    fn push_to_full_queue_reports_drop() {
        let (producer, _consumer) = event_queue(1);
        assert!(producer.push(Event::Exit));
        assert!(!producer.push(Event::Exit), "Second push exceeds capacity");
    }

    #[test]
    fn push_after_consumer_drop_reports_failure() {
        let (producer, consumer) = event_queue(4);
        drop(consumer);
        assert!(!producer.push(Event::Exit));
    }

    #[test]
    fn producers_can_push_concurrently() {
        let (producer, consumer) = event_queue(64);
        let clone = producer.clone();

        let handle = std::thread::spawn(move || {
            for _ in 0..16 {
                clone.push(Event::Window { handle: WindowHandle(7) });
            }
        });
        for _ in 0..16 {
            producer.push(Event::Window { handle: WindowHandle(9) });
        }
        handle.join().unwrap();

        let mut drained = 0;
        while let Some(_event) = consumer.poll() {
            drained += 1;
        }
        assert_eq!(drained, 32, "All concurrently pushed events must arrive");
    }
}
