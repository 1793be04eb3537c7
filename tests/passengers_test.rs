use skyvoyage::passengers::{PassengerCategory, PassengerCounts, PassengerSelector, MAX_PER_CATEGORY};

#[test]
fn starts_with_one_adult() {
    let selector = PassengerSelector::default();
    assert_eq!(selector.counts(), PassengerCounts::default());
    assert_eq!(selector.names(PassengerCategory::Adults).len(), 1);
    assert!(selector.names(PassengerCategory::Children).is_empty());
    assert_eq!(selector.label(), "1 Passenger");
}

#[test]
fn children_up_three_down_one_keeps_first_name() {
    let mut selector = PassengerSelector::default();
    for _ in 0..3 {
        selector.increment(PassengerCategory::Children);
    }
    selector
        .set_name(PassengerCategory::Children, 0, "Sam Doe")
        .unwrap();
    selector
        .set_name(PassengerCategory::Children, 2, "Alex Doe")
        .unwrap();

    selector.decrement(PassengerCategory::Children);

    assert_eq!(selector.count(PassengerCategory::Children), 2);
    assert_eq!(
        selector.names(PassengerCategory::Children),
        &["Sam Doe".to_string(), String::new()]
    );
}

#[test]
fn adults_never_drop_below_one() {
    let mut selector = PassengerSelector::default();
    assert!(!selector.can_decrement(PassengerCategory::Adults));
    assert_eq!(selector.decrement(PassengerCategory::Adults), 1);
    assert_eq!(selector.names(PassengerCategory::Adults).len(), 1);
}

#[test]
fn other_categories_floor_at_zero() {
    let mut selector = PassengerSelector::default();
    for category in [
        PassengerCategory::Children,
        PassengerCategory::Infants,
        PassengerCategory::Seniors,
    ] {
        assert_eq!(selector.decrement(category), 0);
        assert!(selector.names(category).is_empty());
    }
}

#[test]
fn counts_cap_at_nine() {
    let mut selector = PassengerSelector::default();
    assert_eq!(selector.adjust(PassengerCategory::Seniors, 20), MAX_PER_CATEGORY);
    assert_eq!(selector.names(PassengerCategory::Seniors).len(), 9);
    assert!(!selector.can_increment(PassengerCategory::Seniors));
    assert_eq!(selector.increment(PassengerCategory::Seniors), 9);
}

#[test]
fn large_negative_adjust_clamps_to_minimum() {
    let mut selector = PassengerSelector::new(PassengerCounts {
        adults: 4,
        ..PassengerCounts::default()
    });
    assert_eq!(selector.adjust(PassengerCategory::Adults, -100), 1);
    assert_eq!(selector.names(PassengerCategory::Adults).len(), 1);
}

#[test]
fn new_clamps_out_of_range_counts() {
    let selector = PassengerSelector::new(PassengerCounts {
        adults: 0,
        children: 12,
        infants: 0,
        seniors: 0,
    });
    assert_eq!(selector.count(PassengerCategory::Adults), 1);
    assert_eq!(selector.count(PassengerCategory::Children), 9);
}

#[test]
fn set_name_out_of_range_is_error() {
    let mut selector = PassengerSelector::default();
    let err = selector
        .set_name(PassengerCategory::Infants, 0, "Baby")
        .unwrap_err();
    assert!(err.to_string().contains("no infants name slot"));
}

#[test]
fn total_and_label() {
    let mut selector = PassengerSelector::default();
    selector.increment(PassengerCategory::Adults);
    selector.increment(PassengerCategory::Infants);
    assert_eq!(selector.total(), 3);
    assert_eq!(selector.label(), "3 Passengers");
}

#[test]
fn counts_validate_bounds() {
    assert!(PassengerCounts::default().validate().is_ok());
    let no_adults = PassengerCounts {
        adults: 0,
        ..PassengerCounts::default()
    };
    assert!(no_adults.validate().is_err());
    let too_many = PassengerCounts {
        children: 10,
        ..PassengerCounts::default()
    };
    assert!(too_many.validate().is_err());
}

#[test]
fn category_tokens_parse() {
    assert_eq!(
        PassengerCategory::from_str_loose("Child").unwrap(),
        PassengerCategory::Children
    );
    assert!(PassengerCategory::from_str_loose("pets").is_err());
}
