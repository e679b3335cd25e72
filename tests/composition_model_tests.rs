use ecotype_chart::{Category, ChartError, CompositionModel, Group};

#[test]
fn get_defaults_to_zero_before_input() {
    let model = CompositionModel::new();
    for group in Group::ALL {
        for category in Category::ALL {
            assert_eq!(model.get(group, category), 0.0);
        }
        assert_eq!(model.group_total(group), 0.0);
        assert!(!model.is_balanced(group));
    }
}

#[test]
fn set_then_get_returns_exact_value() {
    let mut model = CompositionModel::new();
    model
        .set(Group::Juvenile, Category::FemaleMigratory, 37.5)
        .expect("valid set");
    assert_eq!(model.get(Group::Juvenile, Category::FemaleMigratory), 37.5);
    // Other cells stay untouched.
    assert_eq!(model.get(Group::Juvenile, Category::MaleResident), 0.0);
    assert_eq!(model.get(Group::Resident, Category::FemaleMigratory), 0.0);
}

#[test]
fn set_overwrites_prior_value_and_is_idempotent() {
    let mut model = CompositionModel::new();
    model
        .set(Group::Migratory, Category::MaleMigratory, 10.0)
        .expect("valid set");
    model
        .set(Group::Migratory, Category::MaleMigratory, 25.0)
        .expect("valid overwrite");
    assert_eq!(model.get(Group::Migratory, Category::MaleMigratory), 25.0);

    let before = model.clone();
    model
        .set(Group::Migratory, Category::MaleMigratory, 25.0)
        .expect("idempotent set");
    assert_eq!(model, before);
}

#[test]
fn set_rejects_out_of_range_and_preserves_prior_value() {
    let mut model = CompositionModel::new();
    model
        .set(Group::Resident, Category::FemaleResident, 40.0)
        .expect("valid set");

    for invalid in [-1.0, 101.0, -0.001, 100.001] {
        let err = model
            .set(Group::Resident, Category::FemaleResident, invalid)
            .expect_err("must reject out-of-range value");
        assert!(matches!(err, ChartError::OutOfRange { value } if value == invalid));
        assert_eq!(model.get(Group::Resident, Category::FemaleResident), 40.0);
    }
}

#[test]
fn set_rejects_non_finite_values() {
    let mut model = CompositionModel::new();
    for invalid in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = model
            .set(Group::Juvenile, Category::FemaleMigratory, invalid)
            .expect_err("must reject non-finite value");
        assert!(matches!(err, ChartError::OutOfRange { .. }));
    }
    assert_eq!(model.get(Group::Juvenile, Category::FemaleMigratory), 0.0);
}

#[test]
fn range_boundaries_are_inclusive() {
    let mut model = CompositionModel::new();
    model
        .set(Group::Juvenile, Category::FemaleMigratory, 0.0)
        .expect("0 is in range");
    model
        .set(Group::Juvenile, Category::FemaleHeterozygote, 100.0)
        .expect("100 is in range");
    assert_eq!(model.get(Group::Juvenile, Category::FemaleHeterozygote), 100.0);
}

#[test]
fn group_total_sums_category_values() {
    let mut model = CompositionModel::new();
    let values = [12.0, 8.0, 30.0, 15.0, 20.0, 5.0];
    for (category, value) in Category::ALL.into_iter().zip(values) {
        model
            .set(Group::Migratory, category, value)
            .expect("valid set");
    }
    assert_eq!(model.group_total(Group::Migratory), 90.0);
    // Other groups are unaffected.
    assert_eq!(model.group_total(Group::Juvenile), 0.0);
}

#[test]
fn is_balanced_requires_exactly_100() {
    let mut model = CompositionModel::new();
    model
        .set(Group::Juvenile, Category::FemaleMigratory, 50.0)
        .expect("valid set");
    model
        .set(Group::Juvenile, Category::FemaleHeterozygote, 50.0)
        .expect("valid set");
    assert!(model.is_balanced(Group::Juvenile));

    model
        .set(Group::Juvenile, Category::FemaleHeterozygote, 49.0)
        .expect("valid set");
    assert!(!model.is_balanced(Group::Juvenile));
    assert_eq!(model.group_total(Group::Juvenile), 99.0);
}

#[test]
fn unbalanced_input_is_never_rejected() {
    let mut model = CompositionModel::new();
    for category in Category::ALL {
        model
            .set(Group::Resident, category, 100.0)
            .expect("oversubscribed group still accepts input");
    }
    assert_eq!(model.group_total(Group::Resident), 600.0);
    assert!(!model.is_balanced(Group::Resident));
}

#[test]
fn set_by_key_accepts_known_keys() {
    let mut model = CompositionModel::new();
    model
        .set_by_key("juvenile", "female_migratory", 33.0)
        .expect("known keys");
    model
        .set_by_key("Resident", "MALE_RESIDENT", 12.0)
        .expect("keys are case-insensitive");
    assert_eq!(model.get(Group::Juvenile, Category::FemaleMigratory), 33.0);
    assert_eq!(model.get(Group::Resident, Category::MaleResident), 12.0);
}

#[test]
fn set_by_key_rejects_unknown_keys_without_mutation() {
    let mut model = CompositionModel::new();
    let before = model.clone();

    let err = model
        .set_by_key("larval", "female_migratory", 10.0)
        .expect_err("unknown group must fail");
    assert!(matches!(err, ChartError::UnknownKey { ref key } if key == "larval"));

    let err = model
        .set_by_key("juvenile", "female_albino", 10.0)
        .expect_err("unknown category must fail");
    assert!(matches!(err, ChartError::UnknownKey { ref key } if key == "female_albino"));

    assert_eq!(model, before);
}

#[test]
fn get_by_key_resolves_known_keys() {
    let mut model = CompositionModel::new();
    model
        .set(Group::Migratory, Category::FemaleResident, 18.0)
        .expect("valid set");
    let value = model
        .get_by_key("migratory", "female_resident")
        .expect("known keys");
    assert_eq!(value, 18.0);

    let err = model
        .get_by_key("migratory", "male_unknown")
        .expect_err("unknown category must fail");
    assert!(matches!(err, ChartError::UnknownKey { .. }));
}

#[test]
fn reset_restores_the_all_zero_state() {
    let mut model = CompositionModel::new();
    for group in Group::ALL {
        for category in Category::ALL {
            model.set(group, category, 11.0).expect("valid set");
        }
    }
    model.reset();
    assert_eq!(model, CompositionModel::new());
}

#[test]
fn one_invalid_write_does_not_abort_a_batch() {
    let mut model = CompositionModel::new();
    let inputs = [(Category::FemaleMigratory, 30.0), (Category::FemaleHeterozygote, 170.0), (Category::FemaleResident, 70.0)];

    let mut rejected = 0;
    for (category, value) in inputs {
        if model.set(Group::Juvenile, category, value).is_err() {
            rejected += 1;
        }
    }

    assert_eq!(rejected, 1);
    assert_eq!(model.get(Group::Juvenile, Category::FemaleMigratory), 30.0);
    assert_eq!(model.get(Group::Juvenile, Category::FemaleHeterozygote), 0.0);
    assert_eq!(model.get(Group::Juvenile, Category::FemaleResident), 70.0);
    assert!(model.is_balanced(Group::Juvenile));
}
