use std::time::{Duration, Instant};

/// A countdown tick armed for one round. The state machine drops ticks whose
/// generation is not the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick
{
    pub generation: u64,
}

#[derive(Clone, Copy, Debug)]
struct Pending
{
    generation: u64,
    due: Instant,
}

/// One-shot scheduler for the countdown. At most one tick is pending; arming
/// a new one replaces it.
#[derive(Debug)]
pub struct Countdown
{
    interval: Duration,
    pending: Option<Pending>,
}

impl Countdown
{
    pub fn new(interval: Duration) -> Self
    {
        Self {
            interval,
            pending: None,
        }
    }

    pub fn schedule(&mut self, generation: u64, now: Instant)
    {
        self.pending = Some(Pending {
            generation,
            due: now + self.interval,
        });
    }

    pub fn cancel(&mut self)
    {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool
    {
        self.pending.is_some()
    }

    /// Keeps the pending tick in line with the game: nothing pending once the
    /// game is over, and exactly one tick for the current generation otherwise.
    pub fn sync(&mut self, generation: u64, active: bool, now: Instant)
    {
        if !active {
            self.cancel();
            return;
        }
        match self.pending {
            Some(pending) if pending.generation == generation => {}
            _ => self.schedule(generation, now),
        }
    }

    /// Takes the pending tick if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<Tick>
    {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;
        Some(Tick {
            generation: pending.generation,
        })
    }

    #[cfg(test)]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration>
    {
        self.pending
            .map(|pending| pending.due.saturating_duration_since(now))
    }
}
