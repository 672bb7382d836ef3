//! Event stream for the watch.
//!
//! Runs the blocking crossterm poll on its own task and hands events to the
//! application loop through a channel.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::{Event, EventDispatcher};

/// Event source for the application loop.
pub struct EventHandler {
    /// Receiver for polled events
    event_rx: mpsc::UnboundedReceiver<Event>,
    /// Stops the polling task
    shutdown: CancellationToken,
}

impl EventHandler {
    /// Start polling the terminal at the given tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        // crossterm's poll blocks, so keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let mut dispatcher = EventDispatcher::with_tick_rate(tick_rate);
            while !token.is_cancelled() {
                match dispatcher.next() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "failed to poll terminal events");
                        std::thread::sleep(Duration::from_millis(10));
                    }
                }
            }
        });

        Self { event_rx: rx, shutdown }
    }

    /// Build a handler fed from an existing channel instead of the terminal.
    pub fn from_channel(event_rx: mpsc::UnboundedReceiver<Event>) -> Self {
        Self {
            event_rx,
            shutdown: CancellationToken::new(),
        }
    }

    fn poll_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<Event>> {
        Pin::new(&mut self.event_rx).poll_recv(cx)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// Stream for EventHandler
impl Stream for EventHandler {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.poll_event(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn forwards_channel_events_in_order() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handler = EventHandler::from_channel(rx);

        tx.send(Event::Tick).unwrap();
        tx.send(Event::Resize(80, 24)).unwrap();
        drop(tx);

        assert!(matches!(handler.next().await, Some(Event::Tick)));
        assert!(matches!(handler.next().await, Some(Event::Resize(80, 24))));
        assert!(handler.next().await.is_none());
    }
}
