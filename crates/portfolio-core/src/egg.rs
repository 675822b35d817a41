//! Animated "location hash" easter egg.
//!
//! A worker thread rewrites a shared hash string on a fixed interval. The
//! caller owns the returned [`EggHandle`]; stopping or dropping it cancels the
//! worker, joins it, and clears the hash.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

pub const DEFAULT_EGG_INTERVAL: Duration = Duration::from_millis(66);

const MOON_PHASES: [&str; 8] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
const WAVE_GLYPHS: [&str; 5] = ["🐟", "🐠", "🐡", "🐬", "🐳"];
const WAVE_SEPARATOR: &str = "🌊";
const WAVE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EggPattern {
    MoonPhases,
    #[default]
    Wave,
}

impl std::fmt::Display for EggPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EggPattern::MoonPhases => "moon-phases",
            EggPattern::Wave => "wave",
        };
        write!(f, "{}", label)
    }
}

/// Frame shown at `millis` since the epoch.
pub fn egg_frame(pattern: EggPattern, millis: u128) -> String {
    let ticks = millis / 100;
    match pattern {
        EggPattern::MoonPhases => {
            MOON_PHASES[(ticks % MOON_PHASES.len() as u128) as usize].to_string()
        }
        EggPattern::Wave => {
            let phase = millis as f64 / 100.0;
            let len = WAVE_GLYPHS.len();
            let mut frame = String::new();
            for i in 0..WAVE_WIDTH {
                let level = ((phase + i as f64).sin() + 1.0) / 2.0;
                let idx = ((len as f64 * level).floor() as usize).min(len - 1);
                frame.push_str(WAVE_SEPARATOR);
                frame.push_str(WAVE_GLYPHS[idx]);
            }
            frame
        }
    }
}

/// Shared stand-in for the browser location hash.
#[derive(Clone, Debug, Default)]
pub struct LocationHash {
    value: Arc<Mutex<String>>,
}

impl LocationHash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> String {
        match self.value.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn replace(&self, hash: &str) {
        let mut guard = match self.value.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clear();
        guard.push_str(hash);
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }
}

/// Owner of a running egg. The timer never outlives this value.
#[derive(Debug)]
pub struct EggHandle {
    pattern: EggPattern,
    token: CancellationToken,
    worker: Option<JoinHandle<()>>,
    hash: LocationHash,
}

/// Spawn the egg worker writing into `hash` every `interval`.
pub fn start_egg(pattern: EggPattern, interval: Duration, hash: LocationHash) -> Result<EggHandle> {
    let token = CancellationToken::new();
    let worker_token = token.clone();
    let worker_hash = hash.clone();
    let interval = interval.max(Duration::from_millis(1));

    let worker = thread::Builder::new()
        .name("url-egg".to_string())
        .spawn(move || run_egg(pattern, interval, worker_hash, worker_token))
        .context("Failed to spawn url egg worker")?;

    info!(%pattern, interval_ms = interval.as_millis() as u64, "Started url egg");
    Ok(EggHandle {
        pattern,
        token,
        worker: Some(worker),
        hash,
    })
}

fn run_egg(pattern: EggPattern, interval: Duration, hash: LocationHash, token: CancellationToken) {
    loop {
        if let Err(err) = token.check_cancelled("egg-frame") {
            debug!(%pattern, "Url egg worker exiting: {err}");
            return;
        }
        hash.replace(&egg_frame(pattern, now_millis()));
        if token.wait_timeout(interval) {
            debug!(%pattern, "Url egg worker woken for shutdown");
            return;
        }
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0)
}

impl EggHandle {
    pub fn pattern(&self) -> EggPattern {
        self.pattern
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some() && !self.token.is_cancelled()
    }

    /// Cancel the worker, wait for it, and clear the hash.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.token.cancel();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Url egg worker panicked");
            }
            info!(pattern = %self.pattern, "Stopped url egg");
        }
        // Cleared after the join so no late frame can land.
        self.hash.replace("");
    }
}

impl Drop for EggHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_phase_cycles_every_hundred_millis() {
        assert_eq!(egg_frame(EggPattern::MoonPhases, 0), "🌑");
        assert_eq!(egg_frame(EggPattern::MoonPhases, 150), "🌒");
        assert_eq!(egg_frame(EggPattern::MoonPhases, 800), "🌑");
    }

    #[test]
    fn wave_frame_has_fixed_width() {
        for millis in [0u128, 57, 1_000, 123_456_789] {
            let frame = egg_frame(EggPattern::Wave, millis);
            assert_eq!(frame.matches(WAVE_SEPARATOR).count(), WAVE_WIDTH);
            let glyphs = WAVE_GLYPHS
                .iter()
                .map(|glyph| frame.matches(glyph).count())
                .sum::<usize>();
            assert_eq!(glyphs, WAVE_WIDTH);
        }
    }

    #[test]
    fn stop_cancels_worker_and_clears_hash() {
        let hash = LocationHash::new();
        let handle = start_egg(EggPattern::MoonPhases, Duration::from_millis(2), hash.clone())
            .expect("spawn egg");
        assert!(handle.is_running());

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while hash.is_empty() && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(!hash.is_empty(), "worker should write a frame");

        handle.stop();
        assert!(hash.is_empty());
        thread::sleep(Duration::from_millis(10));
        assert!(hash.is_empty(), "no frames after stop");
    }

    #[test]
    fn dropping_handle_stops_worker() {
        let hash = LocationHash::new();
        {
            let _handle = start_egg(EggPattern::Wave, Duration::from_millis(2), hash.clone())
                .expect("spawn egg");
            thread::sleep(Duration::from_millis(10));
        }
        assert!(hash.is_empty());
        thread::sleep(Duration::from_millis(10));
        assert!(hash.is_empty());
    }
}
