//! Scroll-linked interpolation and the spring behind the custom cursor.

/// Linear map from `input` onto `output`, clamped to the output endpoints.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_start == in_end {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Page scroll progress in `[0, 1]`.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Progress of an element through the viewport: 0 while its top edge is at
/// the viewport bottom, 1 once its bottom edge passes the viewport top.
pub fn element_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

pub const CURSOR_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 25.0,
    mass: 0.2,
};

// Semi-implicit Euler goes unstable for this stiffness/mass near 16ms frames.
const MAX_SUBSTEP_SECS: f64 = 0.001;
/// Longer gaps (a backgrounded tab) are integrated as one frame of this length.
const MAX_FRAME_SECS: f64 = 0.1;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(position: f64, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            config,
        }
    }

    /// Advances `dt_secs` toward `target` and returns the new position.
    pub fn step(&mut self, target: f64, dt_secs: f64) -> f64 {
        if !dt_secs.is_finite() || dt_secs <= 0.0 || !target.is_finite() {
            return self.position;
        }
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let dt_secs = dt_secs.min(MAX_FRAME_SECS);
        let steps = (dt_secs / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
        let h = dt_secs / f64::from(steps);
        for _ in 0..steps {
            let force = -stiffness * (self.position - target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
        }
        if self.is_settled(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_interpolates_and_clamps() {
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, -100.0)), -50.0);
        assert_eq!(map_range(0.1, (0.0, 0.2), (1.0, 0.0)), 0.5);
        assert_eq!(map_range(0.9, (0.0, 0.2), (1.0, 0.0)), 0.0);
        assert_eq!(map_range(-3.0, (0.0, 1.0), (50.0, -50.0)), 50.0);
        assert_eq!(map_range(3.0, (0.0, 1.0), (-30.0, 30.0)), 30.0);
    }

    #[test]
    fn map_range_with_empty_input_steps() {
        assert_eq!(map_range(0.9, (1.0, 1.0), (0.0, 10.0)), 0.0);
        assert_eq!(map_range(1.0, (1.0, 1.0), (0.0, 10.0)), 10.0);
    }

    #[test]
    fn page_progress_handles_short_pages() {
        assert_eq!(page_progress(500.0, 2_000.0, 1_000.0), 0.5);
        assert_eq!(page_progress(5_000.0, 2_000.0, 1_000.0), 1.0);
        assert_eq!(page_progress(0.0, 800.0, 1_000.0), 0.0);
    }

    #[test]
    fn element_progress_spans_enter_to_exit() {
        // Top edge touching the viewport bottom.
        assert_eq!(element_progress(800.0, 400.0, 800.0), 0.0);
        // Bottom edge leaving the viewport top.
        assert_eq!(element_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(element_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(element_progress(2_000.0, 400.0, 800.0), 0.0);
    }

    #[test]
    fn spring_converges_on_target() {
        let mut spring = Spring::new(-100.0, CURSOR_SPRING);
        for _ in 0..120 {
            spring.step(640.0, 0.016);
            assert!(spring.position.is_finite());
            assert!(spring.velocity.is_finite());
        }
        assert!(spring.is_settled(640.0));
        assert_eq!(spring.position, 640.0);
    }

    #[test]
    fn spring_survives_long_frames() {
        let mut spring = Spring::new(0.0, CURSOR_SPRING);
        spring.step(1_000.0, 0.5);
        assert!(spring.position.is_finite());
        assert!(spring.position <= 1_000.0 + 1.0);
    }

    #[test]
    fn spring_ignores_bogus_inputs() {
        let mut spring = Spring::new(10.0, CURSOR_SPRING);
        assert_eq!(spring.step(f64::NAN, 0.016), 10.0);
        assert_eq!(spring.step(20.0, 0.0), 10.0);
        assert_eq!(spring.step(20.0, f64::INFINITY), 10.0);
    }

    #[test]
    fn huge_gaps_advance_like_a_single_capped_frame() {
        let mut capped = Spring::new(0.0, CURSOR_SPRING);
        let mut huge = Spring::new(0.0, CURSOR_SPRING);
        capped.step(500.0, MAX_FRAME_SECS);
        huge.step(500.0, 1.0e9);
        assert_eq!(huge, capped);
    }
}
