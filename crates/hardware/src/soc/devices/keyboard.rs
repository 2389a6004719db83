//! Keyboard Interrupt Source.
//!
//! Key presses are produced concurrently with the machine. A listener thread
//! (or any other producer holding a [`KeySender`]) pushes [`KeyEvent`]s into a
//! bounded channel; the CPU drains the channel once per cycle and applies the
//! interrupt-status and payload updates itself, so machine state only ever has
//! one writer.
//!
//! A [`KeySource`] owns one listener thread for the life of its reader and
//! routes bytes to whichever [`Keyboard`] is currently attached. Detaching a
//! keyboard only clears the route, so a listener blocked on input never
//! swallows a byte meant for the next run. Standard input gets one shared
//! source per process.
//!
//! When the queue is full new events are dropped with a warning rather than
//! blocking the producer.

use std::io::{self, Read};
use std::sync::mpsc::{Receiver, SyncSender, TryRecvError, TrySendError, sync_channel};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use crate::common::constants::ESCAPE_KEY;

/// One event delivered by the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    /// A key was pressed; the payload is its byte.
    Press(u8),
    /// The cancel (escape) key was pressed; the run stops.
    Cancel,
}

impl KeyEvent {
    /// Classifies a raw key byte.
    pub const fn from_byte(byte: u8) -> Self {
        if byte == ESCAPE_KEY {
            Self::Cancel
        } else {
            Self::Press(byte)
        }
    }
}

/// Producer half of the keyboard channel.
#[derive(Clone, Debug)]
pub struct KeySender {
    tx: SyncSender<KeyEvent>,
}

impl KeySender {
    /// Queues an event without blocking.
    ///
    /// Returns `false` if the queue is full or the keyboard was shut down.
    pub fn send(&self, event: KeyEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!(?event, "key queue full; dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Queues the event for a raw key byte.
    pub fn send_byte(&self, byte: u8) -> bool {
        self.send(KeyEvent::from_byte(byte))
    }
}

/// Where a listener currently delivers bytes.
#[derive(Debug, Default)]
struct Route {
    /// Bumped on every attach, so a stale keyboard cannot clear a newer route.
    generation: u64,
    target: Option<KeySender>,
}

fn lock_route(route: &Mutex<Route>) -> MutexGuard<'_, Route> {
    route.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A keyboard's claim on a [`KeySource`] route.
#[derive(Debug)]
struct Attachment {
    route: Arc<Mutex<Route>>,
    generation: u64,
}

impl Attachment {
    fn release(self) {
        let mut route = lock_route(&self.route);
        if route.generation == self.generation {
            route.target = None;
        }
    }
}

/// Long-lived listener over one reader, feeding the attached keyboard.
#[derive(Debug)]
pub struct KeySource {
    route: Arc<Mutex<Route>>,
    listener: JoinHandle<()>,
}

impl KeySource {
    /// Spawns a listener thread that turns every byte read from `reader` into an event.
    ///
    /// The thread runs until end of input or a read error. Bytes read while
    /// no keyboard is attached are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn<R>(reader: R) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let route = Arc::new(Mutex::new(Route::default()));
        let listener = start_listener(reader, Arc::clone(&route))?;
        Ok(Self { route, listener })
    }

    /// Creates a keyboard and routes all further input to it.
    ///
    /// Any previously attached keyboard stops receiving events.
    pub fn attach(&self, depth: usize) -> Keyboard {
        attach_to(&self.route, depth)
    }

    /// Whether the listener thread is still reading.
    pub fn is_listening(&self) -> bool {
        !self.listener.is_finished()
    }
}

fn start_listener<R>(reader: R, route: Arc<Mutex<Route>>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("ls8-keyboard".into())
        .spawn(move || listen(reader, &route))
}

fn attach_to(route: &Arc<Mutex<Route>>, depth: usize) -> Keyboard {
    let (sender, mut keyboard) = Keyboard::channel(depth);
    let generation = {
        let mut current = lock_route(route);
        current.generation = current.generation.wrapping_add(1);
        current.target = Some(sender);
        current.generation
    };
    keyboard.attachment = Some(Attachment {
        route: Arc::clone(route),
        generation,
    });
    keyboard
}

/// The process-wide standard input source, spawned on first use.
static STDIN_SOURCE: Mutex<Option<KeySource>> = Mutex::new(None);

/// Consumer half of the keyboard channel, plus its route from a [`KeySource`] if any.
#[derive(Debug)]
pub struct Keyboard {
    rx: Receiver<KeyEvent>,
    attachment: Option<Attachment>,
}

impl Keyboard {
    /// Creates a keyboard fed by the returned sender.
    ///
    /// # Arguments
    ///
    /// * `depth` - Queue capacity (at least 1).
    pub fn channel(depth: usize) -> (KeySender, Self) {
        let (tx, rx) = sync_channel(depth.max(1));
        let keyboard = Self {
            rx,
            attachment: None,
        };
        (KeySender { tx }, keyboard)
    }

    /// Creates a keyboard with its own listener over `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn<R>(reader: R, depth: usize) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        // Routed before the thread starts so no early byte is dropped.
        let route = Arc::new(Mutex::new(Route::default()));
        let keyboard = attach_to(&route, depth);
        start_listener(reader, route).map(|_| keyboard)
    }

    /// Attaches a keyboard to the shared standard input listener.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener thread has to be spawned and cannot be.
    pub fn stdin(depth: usize) -> io::Result<Self> {
        let mut slot = STDIN_SOURCE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(source) = slot.as_ref() {
            return Ok(source.attach(depth));
        }
        let source = KeySource::spawn(io::stdin())?;
        let keyboard = source.attach(depth);
        *slot = Some(source);
        drop(slot);
        Ok(keyboard)
    }

    /// Takes the next pending event, if any. Never blocks.
    pub fn try_next(&self) -> Option<KeyEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Detaches from the listener and discards every pending event.
    ///
    /// Returns the number of discarded events. The listener itself keeps
    /// running; later input goes to the next attached keyboard.
    pub fn shutdown(&mut self) -> usize {
        if let Some(attachment) = self.attachment.take() {
            attachment.release();
        }
        let discarded = self.rx.try_iter().count();
        if discarded > 0 {
            debug!(discarded, "discarded pending key events");
        }
        discarded
    }
}

impl Drop for Keyboard {
    fn drop(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.release();
        }
    }
}

/// Listener thread body.
fn listen<R: Read>(mut reader: R, route: &Mutex<Route>) {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!(error = %e, "keyboard read failed; listener exiting");
                break;
            }
        }
        // Held across the send so a detached keyboard never receives late input.
        let current = lock_route(route);
        if let Some(sender) = &current.target {
            let _ = sender.send_byte(byte[0]);
        } else {
            trace!(byte = byte[0], "no keyboard attached; key dropped");
        }
        drop(current);
    }
    debug!("keyboard listener exited");
}
