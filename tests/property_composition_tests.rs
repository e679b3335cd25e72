use ecotype_chart::{Category, ChartError, CompositionModel, Group, StackedProportionRenderer};
use proptest::prelude::*;

fn out_of_range_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10_000.0f64..-0.000_1,
        100.000_1f64..10_000.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
    ]
}

proptest! {
    #[test]
    fn get_after_set_returns_exactly_the_stored_value(
        group_index in 0usize..3,
        category_index in 0usize..6,
        value in 0.0f64..=100.0
    ) {
        let group = Group::ALL[group_index];
        let category = Category::ALL[category_index];

        let mut model = CompositionModel::new();
        model.set(group, category, value).expect("in-range set");
        prop_assert_eq!(model.get(group, category), value);
    }

    #[test]
    fn group_total_equals_the_sum_over_all_categories(
        values in prop::collection::vec(0.0f64..=100.0, 6)
    ) {
        let mut model = CompositionModel::new();
        for (category, value) in Category::ALL.into_iter().zip(values.iter()) {
            model.set(Group::Migratory, category, *value).expect("in-range set");
        }

        let manual: f64 = Category::ALL
            .into_iter()
            .map(|category| model.get(Group::Migratory, category))
            .sum();
        prop_assert_eq!(model.group_total(Group::Migratory), manual);
    }

    #[test]
    fn out_of_range_set_fails_and_preserves_state(
        prior in 0.0f64..=100.0,
        invalid in out_of_range_value()
    ) {
        let mut model = CompositionModel::new();
        model.set(Group::Resident, Category::FemaleResident, prior).expect("in-range set");

        let err = model
            .set(Group::Resident, Category::FemaleResident, invalid)
            .expect_err("out-of-range set must fail");
        let is_out_of_range = matches!(err, ChartError::OutOfRange { .. });
        prop_assert!(is_out_of_range, "expected OutOfRange, got: {err}");
        prop_assert_eq!(model.get(Group::Resident, Category::FemaleResident), prior);
    }

    #[test]
    fn rendered_stack_tops_match_group_totals(
        values in prop::collection::vec(0.0f64..=100.0, 18)
    ) {
        let mut model = CompositionModel::new();
        let mut inputs = values.into_iter();
        for group in Group::ALL {
            for category in Category::ALL {
                let value = inputs.next().expect("18 inputs");
                model.set(group, category, value).expect("in-range set");
            }
        }

        let snapshot = model.snapshot();
        let artifact = StackedProportionRenderer::new().render(&snapshot);

        for stack in &artifact.stacks {
            prop_assert_eq!(stack.total, snapshot.group_total(stack.group));

            let mut previous = 0.0;
            prop_assert_eq!(stack.segments[0].baseline, 0.0);
            for segment in &stack.segments {
                prop_assert!(segment.baseline >= previous);
                previous = segment.baseline;
            }
            prop_assert_eq!(stack.segments.last().expect("segments").top(), stack.total);
        }
    }

    #[test]
    fn is_balanced_agrees_with_exact_total_comparison(
        values in prop::collection::vec(0.0f64..=100.0, 6)
    ) {
        let mut model = CompositionModel::new();
        for (category, value) in Category::ALL.into_iter().zip(values.iter()) {
            model.set(Group::Juvenile, category, *value).expect("in-range set");
        }
        prop_assert_eq!(
            model.is_balanced(Group::Juvenile),
            model.group_total(Group::Juvenile) == 100.0
        );
    }
}
