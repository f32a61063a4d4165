//! Editing flows: every mutation leaves quantities and amounts fresh.

use computo_estimate::{
    Article, Estimate, EstimateError, Link, Measurement, MeasurementKind, RecalcStatus,
};

fn excavation() -> Article {
    Article::new("exc")
        .with_code("E.01.040.a")
        .with_description("Scavo a sezione obbligata")
        .with_unit("m³")
        .with_unit_price(7.5)
        .with_measurements(vec![
            Measurement::new("exc-m1").with_length(3.0).with_width(2.0),
            Measurement::subtotal("exc-sub"),
            Measurement::new("exc-m2")
                .with_kind(MeasurementKind::Deduction)
                .with_length(1.0)
                .with_width(1.0),
        ])
}

#[test]
fn quantities_follow_every_edit() {
    let mut estimate = Estimate::new();
    estimate.add_article(excavation()).unwrap();
    assert_eq!(estimate.quantity(&"exc".into()), Some(5.0));
    assert_eq!(estimate.amount(&"exc".into()), Some(37.5));

    // Widen the first row: 3×2 → 3×4.
    estimate
        .edit_measurement(&"exc".into(), &"exc-m1".into(), |row| {
            row.width = Some(4.0);
        })
        .unwrap();
    assert_eq!(estimate.quantity(&"exc".into()), Some(11.0));

    // Drop the deduction row.
    let removed = estimate
        .remove_measurement(&"exc".into(), &"exc-m2".into())
        .unwrap();
    assert_eq!(removed.kind, MeasurementKind::Deduction);
    assert_eq!(estimate.quantity(&"exc".into()), Some(12.0));

    // A flat repetition row: three more units.
    estimate
        .push_measurement(
            &"exc".into(),
            Measurement::new("exc-m3").with_multiplier(3.0),
        )
        .unwrap();
    assert_eq!(estimate.quantity(&"exc".into()), Some(15.0));
}

#[test]
fn display_rows_show_running_subtotals() {
    let estimate = Estimate::from_articles(vec![excavation()]).unwrap();

    let rows = estimate.display_rows(&"exc".into()).unwrap();
    let displays: Vec<f64> = rows.iter().map(|r| r.display).collect();
    assert_eq!(displays, vec![6.0, 6.0, -1.0]);

    let total: f64 = rows.iter().map(|r| r.raw).sum();
    assert_eq!(Some(total), estimate.quantity(&"exc".into()));
}

#[test]
fn amount_link_follows_price_changes() {
    let mut estimate = Estimate::from_articles(vec![
        Article::new("z")
            .with_unit_price(10.0)
            .with_measurements(vec![Measurement::new("z-m1").with_length(4.0)]),
        Article::new("y").with_measurements(vec![
            Measurement::new("y-m1")
                .with_multiplier(2.0)
                .with_link(Link::amount("z")),
        ]),
    ])
    .unwrap();
    assert_eq!(estimate.quantity(&"y".into()), Some(80.0));

    // Repricing the source must flow through the amount link.
    estimate.set_unit_price(&"z".into(), 20.0).unwrap();
    assert_eq!(estimate.quantity(&"y".into()), Some(160.0));

    // A quantity change in the source flows through as well.
    estimate
        .edit_measurement(&"z".into(), &"z-m1".into(), |row| {
            row.length = Some(1.0);
        })
        .unwrap();
    assert_eq!(estimate.quantity(&"y".into()), Some(40.0));
}

#[test]
fn reordering_rows_regroups_subtotals() {
    let mut estimate = Estimate::from_articles(vec![Article::new("a").with_measurements(vec![
        Measurement::new("m1").with_multiplier(2.0),
        Measurement::subtotal("sub"),
        Measurement::new("m2").with_multiplier(10.0),
    ])])
    .unwrap();

    let displays = |estimate: &Estimate| -> Vec<f64> {
        estimate
            .display_rows(&"a".into())
            .unwrap()
            .iter()
            .map(|r| r.display)
            .collect()
    };
    assert_eq!(displays(&estimate), vec![2.0, 2.0, 10.0]);

    // Put the subtotal last: it now covers both rows.
    estimate
        .move_measurement(&"a".into(), &"sub".into(), 2)
        .unwrap();
    assert_eq!(displays(&estimate), vec![2.0, 10.0, 12.0]);

    // The total itself never moves.
    assert_eq!(estimate.quantity(&"a".into()), Some(12.0));
}

#[test]
fn total_amount_sums_the_document() {
    let estimate = Estimate::from_articles(vec![
        Article::new("a")
            .with_unit_price(2.0)
            .with_measurements(vec![Measurement::new("m1").with_length(5.0)]),
        Article::new("b")
            .with_unit_price(100.0)
            .with_measurements(vec![Measurement::new("m1").with_multiplier(3.0)]),
    ])
    .unwrap();

    assert_eq!(estimate.total_amount(), 310.0);
    assert_eq!(estimate.report().status, RecalcStatus::Clean);
}

#[test]
fn api_misuse_is_rejected() {
    let mut estimate = Estimate::from_articles(vec![excavation()]).unwrap();

    assert_eq!(
        estimate.add_article(Article::new("exc")),
        Err(EstimateError::DuplicateArticle("exc".into()))
    );
    assert_eq!(
        estimate.set_unit_price(&"ghost".into(), 1.0),
        Err(EstimateError::UnknownArticle("ghost".into()))
    );
    assert_eq!(
        estimate.remove_measurement(&"exc".into(), &"nope".into()),
        Err(EstimateError::UnknownMeasurement {
            article: "exc".into(),
            measurement: "nope".into(),
        })
    );
    assert_eq!(
        estimate.push_measurement(&"exc".into(), Measurement::new("exc-m1")),
        Err(EstimateError::DuplicateMeasurement {
            article: "exc".into(),
            measurement: "exc-m1".into(),
        })
    );
    assert_eq!(
        estimate.insert_measurement(&"exc".into(), 99, Measurement::new("exc-m9")),
        Err(EstimateError::RowIndexOutOfBounds {
            article: "exc".into(),
            index: 99,
            len: 3,
        })
    );

    // Nothing was mutated along the way.
    assert_eq!(estimate.quantity(&"exc".into()), Some(5.0));
}
