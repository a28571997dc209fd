// src/application/controllers/cooldown_timer.rs
use std::time::Duration;
use tokio::{sync::watch, task::JoinHandle};

/// Counts down once per second until zero. Dropping the timer stops it.
#[derive(Debug)]
pub struct CooldownTimer {
    rx: watch::Receiver<u32>,
    task: Option<JoinHandle<()>>,
}

impl Default for CooldownTimer {
    fn default() -> Self {
        Self::idle()
    }
}

impl CooldownTimer {
    pub fn idle() -> Self {
        let (_tx, rx) = watch::channel(0);
        Self { rx, task: None }
    }

    /// Must be called from within a tokio runtime when `secs > 0`.
    pub fn start(secs: u32) -> Self {
        if secs == 0 {
            return Self::idle();
        }
        let (tx, rx) = watch::channel(secs);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await;
            let mut left = secs;
            while left > 0 {
                interval.tick().await;
                left -= 1;
                if tx.send(left).is_err() {
                    break;
                }
            }
        });
        Self {
            rx,
            task: Some(task),
        }
    }

    pub fn remaining(&self) -> u32 {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for CooldownTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn counts_down_once_per_second() {
        let started = Instant::now();
        let timer = CooldownTimer::start(3);
        let mut rx = timer.subscribe();
        assert_eq!(timer.remaining(), 3);

        let mut seen = Vec::new();
        while *rx.borrow() > 0 {
            rx.changed().await.unwrap();
            seen.push(*rx.borrow_and_update());
        }

        assert_eq!(seen, vec![2, 1, 0]);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert_eq!(timer.remaining(), 0);
    }

    #[tokio::test]
    async fn zero_never_starts_a_task() {
        let timer = CooldownTimer::start(0);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_stops_the_countdown() {
        let timer = CooldownTimer::start(60);
        let mut rx = timer.subscribe();
        drop(timer);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow_and_update(), 60);
    }
}
