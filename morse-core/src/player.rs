//! Async playback of key event sequences
//!
//! The codec itself is synchronous and pure; these helpers are one way
//! to consume its output. A blocking delay loop over the same events
//! is equally valid.

use embassy_time::Timer;
use heapless::spsc::Consumer;

use crate::hal::{Duration, KeyOutput};
use crate::timing::KeyEvent;

/// Play one finite event sequence through a key output
///
/// The key line is released when the sequence ends, whatever the last
/// event was.
pub async fn play_events<K: KeyOutput>(events: &[KeyEvent], key: &mut K) -> Result<(), K::Error> {
    for event in events {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "key {} for {}ms",
            if event.on { "down" } else { "up" },
            event.duration.as_millis()
        );

        key.set_state(event.on)?;
        Timer::after(event.duration).await;
    }

    key.set_state(false)?;
    Ok(())
}

/// Drain a key event queue forever
///
/// Keeps the line released and polls at `idle_poll` intervals while
/// the queue is empty. Producers abort a transmission by simply not
/// enqueueing the rest of it.
pub async fn sender_task<const N: usize, K: KeyOutput>(
    mut events: Consumer<'_, KeyEvent, N>,
    key: &mut K,
    idle_poll: Duration,
) -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("key sender started");

    loop {
        if let Some(event) = events.dequeue() {
            key.set_state(event.on).ok();
            Timer::after(event.duration).await;
        } else {
            key.set_state(false).ok();
            Timer::after(idle_poll).await;
        }
    }
}
