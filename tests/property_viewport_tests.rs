use chart_viewport::core::{
    CarouselRole, LabelCarousel, SampleRange, Series, TimeAxis, Window, compute_scale,
    resolve_sample_range,
};
use chart_viewport::interaction::{DragHandle, RangeSelector};
use proptest::prelude::*;

fn axis_strategy() -> impl Strategy<Value = TimeAxis> {
    prop::collection::vec(1i64..10_000, 1..200).prop_map(|increments| {
        let mut timestamps = Vec::with_capacity(increments.len() + 1);
        let mut time = 1_546_300_800_000i64;
        timestamps.push(time);
        for increment in increments {
            time += increment;
            timestamps.push(time);
        }
        TimeAxis::new(timestamps).expect("strictly increasing axis")
    })
}

fn series_strategy() -> impl Strategy<Value = Series> {
    prop::collection::vec(-1_000_000.0f64..1_000_000_000.0, 2..120).prop_map(|values| Series {
        key: "y".to_owned(),
        name: "y".to_owned(),
        color: None,
        values,
    })
}

fn handle_strategy() -> impl Strategy<Value = DragHandle> {
    prop_oneof![
        Just(DragHandle::Left),
        Just(DragHandle::Right),
        Just(DragHandle::Area),
    ]
}

proptest! {
    #[test]
    fn resolved_range_is_ordered_and_in_bounds(
        axis in axis_strategy(),
        left in -0.5f64..1.5,
        width in -0.5f64..1.5,
    ) {
        let window = Window::new(left, width);
        let range = resolve_sample_range(window, &axis);

        prop_assert!(range.start_index <= range.end_index);
        prop_assert!(range.end_index < axis.len());
        prop_assert_eq!(range, resolve_sample_range(window, &axis));
    }

    #[test]
    fn window_construction_always_satisfies_bounds(
        left in prop::num::f64::ANY,
        width in prop::num::f64::ANY,
    ) {
        let window = Window::new(left, width);

        prop_assert!(window.left_fraction() >= 0.0);
        prop_assert!(window.width_fraction() > 0.0);
        prop_assert!(window.width_fraction() <= 1.0);
        prop_assert!(window.right_fraction() <= 1.0 + 1e-12);
    }

    #[test]
    fn scale_always_has_headroom(
        series in series_strategy(),
        a in 0usize..120,
        b in 0usize..120,
    ) {
        let last = series.values.len() - 1;
        let range = SampleRange::new(a.min(last), b.min(last));
        let scale = compute_scale(range, [&series]);

        prop_assert!(scale.steps[5] + scale.step >= scale.max_value);
        for (i, step) in scale.steps.iter().enumerate() {
            prop_assert_eq!(*step, scale.step * i as f64);
        }
    }

    #[test]
    fn widening_the_range_never_lowers_the_maximum(
        series in series_strategy(),
        a in 0usize..120,
        b in 0usize..120,
        extra_left in 0usize..20,
        extra_right in 0usize..20,
    ) {
        let last = series.values.len() - 1;
        let inner = SampleRange::new(a.min(last), b.min(last));
        let outer = SampleRange::new(
            inner.start_index.saturating_sub(extra_left),
            (inner.end_index + extra_right).min(last),
        );

        let inner_scale = compute_scale(inner, [&series]);
        let outer_scale = compute_scale(outer, [&series]);
        prop_assert!(outer_scale.max_value >= inner_scale.max_value);
    }

    #[test]
    fn carousel_roles_stay_a_permutation(shifts in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut carousel = LabelCarousel::new(Default::default());
        for (i, up) in shifts.into_iter().enumerate() {
            let labels: [String; 6] = std::array::from_fn(|j| format!("{i}-{j}"));
            if up {
                carousel.shift_up(labels);
            } else {
                carousel.shift_down(labels);
            }
        }

        let roles: Vec<CarouselRole> = carousel.slots().iter().map(|slot| slot.role).collect();
        for role in [CarouselRole::Down, CarouselRole::Current, CarouselRole::Up] {
            prop_assert_eq!(roles.iter().filter(|r| **r == role).count(), 1);
        }
    }

    #[test]
    fn selector_windows_stay_valid(
        moves in prop::collection::vec((handle_strategy(), -2_000.0f64..2_000.0, -2_000.0f64..2_000.0), 1..20),
    ) {
        let mut selector = RangeSelector::new(1_000.0, 80.0);
        for (handle, start, end) in moves {
            selector.begin_drag(handle, start);
            let window = selector.drag_to(end).expect("active session");
            selector.end_drag();

            prop_assert!(window.left_fraction() >= 0.0);
            prop_assert!(window.width_fraction() > 0.0);
            prop_assert!(window.right_fraction() <= 1.0 + 1e-12);
            let (left, right) = selector.bounds_px();
            prop_assert!(left >= 0.0 && right >= 0.0);
            prop_assert!(1_000.0 - left - right >= 80.0 - 1e-9);
        }
    }
}
