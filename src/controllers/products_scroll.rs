use super::super::prelude::*;

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

const ANIMATION_DURATION: Duration = Duration::from_millis(300);
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

struct State {
    scrolled_window: gtk::ScrolledWindow,
    animation_timeout: Cell<Option<glib::SourceId>>,
}

struct WeakProductsScroll {
    state: Weak<State>,
}

impl WeakProductsScroll {
    fn upgrade(&self) -> Option<ProductsScroll> {
        self.state.upgrade().map(|state| ProductsScroll { state })
    }
}

/// Smoothly moves the storefront page to a vertical offset.
pub struct ProductsScroll {
    state: Rc<State>,
}

impl ProductsScroll {
    pub fn new(scrolled_window: gtk::ScrolledWindow) -> Self {
        let state = Rc::new(State {
            scrolled_window,
            animation_timeout: Cell::new(None),
        });

        Self { state }
    }

    /// Returns `false` when the page is already at `position` (after
    /// clamping to the scrollable range).
    pub fn scroll_to(&self, position: f64) -> bool {
        let adjustment = self.state.scrolled_window.vadjustment();
        let lower = adjustment.lower();
        let upper = (adjustment.upper() - adjustment.page_size()).max(lower);
        let target_position = position.clamp(lower, upper);

        self.animate_scroll_to_position(target_position)
    }

    fn animate_scroll_to_position(&self, target_position: f64) -> bool {
        if let Some(timeout_id) = self.state.animation_timeout.take() {
            timeout_id.remove();
        }

        let adjustment = self.state.scrolled_window.vadjustment();
        let start_position = adjustment.value();
        let distance = target_position - start_position;

        if distance.abs() < 1.0 {
            return false;
        }

        let animation_start_time = Instant::now();
        let this_weak = self.downgrade();

        let animation_callback = move || {
            this_weak.upgrade().map_or(glib::ControlFlow::Break, |this| {
                this.execute_animation_frame(animation_start_time, start_position, distance)
            })
        };

        let timeout_id = glib::timeout_add_local(ANIMATION_FRAME_INTERVAL, animation_callback);
        self.state.animation_timeout.set(Some(timeout_id));
        true
    }

    fn execute_animation_frame(&self, start_time: Instant, start_position: f64, distance: f64) -> glib::ControlFlow {
        let progress = (start_time.elapsed().as_secs_f64() / ANIMATION_DURATION.as_secs_f64()).min(1.0);
        let current_position = distance.mul_add(ease_out_cubic(progress), start_position);
        self.state.scrolled_window.vadjustment().set_value(current_position);

        if progress >= 1.0 {
            self.state.animation_timeout.set(None);
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    }

    fn downgrade(&self) -> WeakProductsScroll {
        let state = Rc::downgrade(&self.state);
        WeakProductsScroll { state }
    }
}

#[cfg(test)]
mod tests {
    use super::ease_out_cubic;

    #[test]
    fn easing_starts_at_zero_and_ends_at_one() {
        assert!(ease_out_cubic(0.0).abs() < f64::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn easing_front_loads_movement() {
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.5));
    }
}
