//! The carousel state machine.
//!
//! Owns the item ring, the selected/previous indices, and the eased angle
//! interpolation that swings the ring when the selection changes. The
//! machine is either *settled* (`progress == 1`) or *transitioning*
//! (`progress < 1`); selection changes are only accepted while settled, so
//! an in-flight transition always runs to completion and a command arriving
//! mid-swing is silently dropped.

use crate::carousel::item::Item;
use crate::options::CarouselOptions;
use crate::util::angle::shortest_angle_between;
use crate::util::easing::EasingFunction;

/// Carousel ring state and transition bookkeeping.
pub struct Carousel {
    items: Vec<Item>,
    selected: usize,
    previous: usize,
    start_angle: f32,
    target_angle: f32,
    current_angle: f32,
    progress: f32,
    transition_speed: f32,
    scale_boost: f32,
    idle_spin_speed: f32,
    easing: EasingFunction,
}

impl Carousel {
    /// Build a carousel from pre-placed items.
    ///
    /// Item 0 starts selected with the ring already settled on it.
    #[must_use]
    pub fn new(items: Vec<Item>, options: &CarouselOptions) -> Self {
        let start_angle = items.first().map_or(0.0, |item| item.angle);
        Self {
            items,
            selected: 0,
            previous: 0,
            start_angle,
            target_angle: start_angle,
            current_angle: start_angle,
            progress: 1.0,
            transition_speed: options.transition_speed,
            scale_boost: options.scale_boost,
            idle_spin_speed: options.idle_spin_speed,
            easing: EasingFunction::default(),
        }
    }

    /// All items in ring order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Index of the currently selected item.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Index of the previously selected item (meaningful while
    /// transitioning).
    #[must_use]
    pub fn previous_index(&self) -> usize {
        self.previous
    }

    /// The currently selected item.
    #[must_use]
    pub fn selected_item(&self) -> &Item {
        &self.items[self.selected]
    }

    /// Current eased ring angle, in radians.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Transition progress in `[0, 1]`; `1` means settled.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether no index transition is in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }

    /// Begin a transition to the neighboring item in `direction` (+1 or
    /// -1 steps along the ring).
    ///
    /// Gated: rejected (returning `false`, state untouched) unless the
    /// carousel is settled. The outgoing item's facing rotation is
    /// snapshotted so it can settle back toward the ring center, and the
    /// swing starts from the *live* current angle, so the interpolation is
    /// correct even immediately after a previous transition finished.
    pub fn select_next(&mut self, direction: i32) -> bool {
        if !self.is_settled() || self.items.is_empty() {
            return false;
        }

        let count = self.items.len();
        self.previous = self.selected;
        self.items[self.previous].rotation_y_start = self.items[self.previous].rotation_y;

        let step = direction.rem_euclid(count as i32) as usize;
        self.selected = (self.selected + step) % count;

        self.start_angle = self.current_angle;
        self.target_angle = self.items[self.selected].angle;
        self.progress = 0.0;
        true
    }

    /// Advance the transition by one fixed step.
    ///
    /// While transitioning, progress grows by the configured speed (clamped
    /// to 1) and the ring angle follows the eased shortest arc from
    /// `start_angle` to `target_angle`. Once settled the angle is pinned to
    /// the target exactly, with no residual drift.
    pub fn advance(&mut self) {
        if self.progress >= 1.0 {
            self.current_angle = self.target_angle;
            return;
        }

        self.progress = (self.progress + self.transition_speed).min(1.0);
        if self.progress >= 1.0 {
            self.current_angle = self.target_angle;
        } else {
            let arc = shortest_angle_between(self.start_angle, self.target_angle);
            self.current_angle =
                self.start_angle + arc * self.easing.evaluate(self.progress);
        }
    }

    /// Per-frame scale and facing update for every item.
    ///
    /// The incoming selection grows toward `1 + boost`, the outgoing one
    /// shrinks back to 1 while its facing settles toward the ring center,
    /// and a settled selection idles with a slow spin. Untouched items keep
    /// scale 1 and their resting rotation.
    pub fn update_item_visuals(&mut self) {
        let eased = self.easing.evaluate(self.progress);
        let transitioning = self.progress < 1.0;
        let (selected, previous) = (self.selected, self.previous);
        let boost = self.scale_boost;

        for (index, item) in self.items.iter_mut().enumerate() {
            if index == selected && transitioning {
                item.scale_factor = 1.0 + boost * eased;
            } else if index == previous && transitioning {
                item.scale_factor = (1.0 + boost) - boost * eased;
                let arc =
                    shortest_angle_between(item.rotation_y_start, item.look_at_angle_y);
                item.rotation_y = item.rotation_y_start + arc * eased;
            } else if index == selected {
                item.scale_factor = 1.0 + boost;
                item.rotation_y += self.idle_spin_speed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::item::Appearance;
    use crate::util::angle::wrap_angle;

    fn test_options() -> CarouselOptions {
        CarouselOptions::default()
    }

    fn ring(count: usize) -> Carousel {
        let options = test_options();
        let items = (0..count)
            .map(|i| Item::on_ring(i, count, options.radius, 0, Appearance::FlatColor([1.0; 3])))
            .collect();
        Carousel::new(items, &options)
    }

    fn settle(carousel: &mut Carousel) {
        while !carousel.is_settled() {
            carousel.advance();
            carousel.update_item_visuals();
        }
        // one more frame so the settled branch runs
        carousel.advance();
        carousel.update_item_visuals();
    }

    #[test]
    fn starts_settled_on_item_zero() {
        let carousel = ring(10);
        assert!(carousel.is_settled());
        assert_eq!(carousel.selected_index(), 0);
        assert_eq!(carousel.current_angle(), carousel.items()[0].angle);
    }

    #[test]
    fn select_next_seeds_transition() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(1));
        assert_eq!(carousel.selected_index(), 1);
        assert_eq!(carousel.previous_index(), 0);
        assert_eq!(carousel.progress(), 0.0);
        assert_eq!(carousel.current_angle(), carousel.items()[0].angle);
    }

    #[test]
    fn select_previous_wraps_below_zero() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(-1));
        assert_eq!(carousel.selected_index(), 9);
    }

    #[test]
    fn commands_rejected_while_transitioning() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(1));
        carousel.advance();

        let (selected, previous, progress) = (
            carousel.selected_index(),
            carousel.previous_index(),
            carousel.progress(),
        );
        assert!(!carousel.select_next(1));
        assert!(!carousel.select_next(-1));
        assert_eq!(carousel.selected_index(), selected);
        assert_eq!(carousel.previous_index(), previous);
        assert_eq!(carousel.progress(), progress);
    }

    #[test]
    fn first_advance_step_matches_eased_arc() {
        let options = test_options();
        let mut carousel = ring(10);
        assert!(carousel.select_next(1));
        carousel.advance();

        assert_eq!(carousel.progress(), options.transition_speed);
        let start = carousel.items()[0].angle;
        let target = carousel.items()[1].angle;
        let expected = start
            + shortest_angle_between(start, target)
                * EasingFunction::default().evaluate(options.transition_speed);
        assert_eq!(carousel.current_angle(), expected);
        assert!(carousel.current_angle() > start);
        assert!(carousel.current_angle() < target);
    }

    #[test]
    fn transition_settles_exactly_on_target() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(1));
        settle(&mut carousel);

        assert!(carousel.is_settled());
        assert_eq!(carousel.current_angle(), carousel.items()[1].angle);
    }

    #[test]
    fn reselect_after_settle_starts_from_live_angle() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(1));
        settle(&mut carousel);

        let live = carousel.current_angle();
        assert!(carousel.select_next(1));
        assert_eq!(carousel.selected_index(), 2);
        // start angle is read from the live current angle, not a stale
        // target: the first step moves away from exactly `live`
        carousel.advance();
        let arc = shortest_angle_between(live, carousel.items()[2].angle);
        let expected = live
            + arc * EasingFunction::default().evaluate(carousel.progress());
        assert_eq!(carousel.current_angle(), expected);
    }

    #[test]
    fn wrap_transition_takes_shortest_arc() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(-1));

        // item 9 sits at angle 9/10 * TAU; the short way from 0 is backward
        let arc = shortest_angle_between(0.0, carousel.items()[9].angle);
        assert!(arc < 0.0);
        assert!(arc.abs() < std::f32::consts::PI);

        settle(&mut carousel);
        assert_eq!(
            wrap_angle(carousel.current_angle()),
            wrap_angle(carousel.items()[9].angle)
        );
    }

    #[test]
    fn selected_item_grows_and_previous_shrinks() {
        let mut carousel = ring(10);
        assert!(carousel.select_next(1));

        for _ in 0..40 {
            carousel.advance();
            carousel.update_item_visuals();
        }
        let eased = EasingFunction::default().evaluate(carousel.progress());
        let incoming = carousel.items()[1].scale_factor;
        let outgoing = carousel.items()[0].scale_factor;
        assert_eq!(incoming, 1.0 + 0.4 * eased);
        assert_eq!(outgoing, 1.4 - 0.4 * eased);
        // bystanders stay at rest
        assert_eq!(carousel.items()[5].scale_factor, 1.0);
    }

    #[test]
    fn previous_item_settles_back_toward_center_facing() {
        let mut carousel = ring(10);
        // give item 0 some accumulated idle spin first
        for _ in 0..200 {
            carousel.advance();
            carousel.update_item_visuals();
        }
        let spun = carousel.items()[0].rotation_y;
        assert!(spun != carousel.items()[0].look_at_angle_y);

        assert!(carousel.select_next(1));
        assert_eq!(carousel.items()[0].rotation_y_start, spun);
        settle(&mut carousel);

        let rest = carousel.items()[0].rotation_y;
        assert!((rest - carousel.items()[0].look_at_angle_y).abs() < 1e-4);
    }

    #[test]
    fn settled_selection_idles_with_spin() {
        let mut carousel = ring(10);
        let before = carousel.items()[0].rotation_y;
        carousel.advance();
        carousel.update_item_visuals();
        carousel.advance();
        carousel.update_item_visuals();

        let options = test_options();
        let after = carousel.items()[0].rotation_y;
        assert!((after - before - 2.0 * options.idle_spin_speed).abs() < 1e-6);
        assert_eq!(carousel.items()[0].scale_factor, 1.0 + options.scale_boost);
    }
}
