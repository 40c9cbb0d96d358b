/// Skips frames whose content cannot have changed.
///
/// Callers pass a fingerprint of everything the frame depends on. A new
/// fingerprint renders immediately; an unchanged one renders at most once per
/// `min_interval_ms` so a resized or scribbled terminal still gets repaired.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_interval_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Make the next call render regardless of fingerprint.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_renders() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
    }

    #[test]
    fn unchanged_frames_are_throttled() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
        assert!(!t.should_render(10, 1));
        assert!(!t.should_render(249, 1));
        assert!(t.should_render(250, 1));
    }

    #[test]
    fn change_renders_immediately() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
        assert!(t.should_render(1, 2));
        t.reset();
        assert!(t.should_render(2, 2));
    }
}
