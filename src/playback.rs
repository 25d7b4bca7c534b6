/// Tracks how long playback has been running, in the app's clock.
///
/// Kept outside the store: elapsed time is presentation, not document state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    started_at: Option<f64>,
}

impl PlaybackClock {
    /// Advances the clock and returns seconds since playback started (0 when stopped).
    pub fn update(&mut self, playing: bool, now: f64) -> f64 {
        if !playing {
            self.started_at = None;
            return 0.0;
        }
        let started_at = *self.started_at.get_or_insert(now);
        (now - started_at).max(0.0)
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

/// How many elements are revealed `elapsed` seconds into playback.
///
/// Elements appear one per `step`, the full collage holds for two steps,
/// then the cycle restarts from an empty canvas.
pub fn visible_element_count(total: usize, elapsed: f64, step: f64) -> usize {
    if total == 0 {
        return 0;
    }
    if step.is_nan() || step <= 0.0 || !elapsed.is_finite() {
        return total;
    }
    let index = (elapsed / step).floor() as usize;
    (index % (total + 2)).min(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_cycle() {
        let counts: Vec<_> = [0.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.2]
            .into_iter()
            .map(|t| visible_element_count(3, t, 1.0))
            .collect();
        assert_eq!(counts, vec![0, 1, 2, 3, 3, 0, 1]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(visible_element_count(0, 10.0, 1.0), 0);
        assert_eq!(visible_element_count(4, 10.0, 0.0), 4);
        assert_eq!(visible_element_count(4, f64::NAN, 1.0), 4);
        assert_eq!(visible_element_count(4, -3.0, 1.0), 0);
    }

    #[test]
    fn test_clock_restarts_when_stopped() {
        let mut clock = PlaybackClock::default();
        assert_eq!(clock.update(true, 10.0), 0.0);
        assert_eq!(clock.update(true, 12.5), 2.5);
        assert_eq!(clock.update(false, 13.0), 0.0);
        assert!(!clock.is_running());
        assert_eq!(clock.update(true, 20.0), 0.0);
    }
}
