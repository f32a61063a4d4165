//! Display projection: running subtotals and resolver consistency.

use computo_common::{Article, Link, LinkMode, Measurement, MeasurementKind};

use super::common::{fixed_article, linked_article};
use crate::engine::projection::project_display;
use crate::engine::resolver::{AncestorPath, resolve_quantity};
use crate::traits::ArticleSet;

#[test]
fn subtotal_displays_the_running_partial_and_resets() {
    let article = Article::new("x").with_measurements(vec![
        Measurement::new("m1").with_length(3.0).with_width(2.0),
        Measurement::subtotal("m2"),
        Measurement::new("m3")
            .with_kind(MeasurementKind::Deduction)
            .with_length(1.0)
            .with_width(1.0),
    ]);
    let articles = vec![article];
    let set = ArticleSet::new(&articles);

    let rows = project_display(&articles[0], &set);
    let displays: Vec<f64> = rows.iter().map(|r| r.display).collect();
    let raws: Vec<f64> = rows.iter().map(|r| r.raw).collect();

    assert_eq!(displays, vec![6.0, 6.0, -1.0]);
    assert_eq!(raws, vec![6.0, 0.0, -1.0]);
    assert_eq!(
        resolve_quantity(&"x".into(), &set, &AncestorPath::new()),
        5.0
    );
}

#[test]
fn each_subtotal_group_accumulates_separately() {
    let article = Article::new("x").with_measurements(vec![
        Measurement::new("m1").with_multiplier(2.0),
        Measurement::new("m2").with_multiplier(3.0),
        Measurement::subtotal("m3"),
        Measurement::new("m4").with_multiplier(10.0),
        Measurement::subtotal("m5"),
    ]);
    let articles = vec![article];
    let set = ArticleSet::new(&articles);

    let rows = project_display(&articles[0], &set);
    let displays: Vec<f64> = rows.iter().map(|r| r.display).collect();
    assert_eq!(displays, vec![2.0, 3.0, 5.0, 10.0, 10.0]);
}

#[test]
fn trailing_rows_after_the_last_subtotal_still_count() {
    let article = Article::new("x").with_measurements(vec![
        Measurement::new("m1").with_multiplier(4.0),
        Measurement::subtotal("m2"),
        Measurement::new("m3").with_multiplier(1.5),
    ]);
    let articles = vec![article];
    let set = ArticleSet::new(&articles);

    let rows = project_display(&articles[0], &set);
    let total: f64 = rows.iter().map(|r| r.raw).sum();
    assert_eq!(total, 5.5);
    assert_eq!(
        resolve_quantity(&"x".into(), &set, &AncestorPath::new()),
        5.5
    );
}

#[test]
fn linked_rows_project_their_resolved_value() {
    let articles = vec![
        Article::new("y").with_measurements(vec![
            Measurement::new("y-m1").with_link(Link::quantity("z")),
            Measurement::subtotal("y-m2"),
        ]),
        fixed_article("z", 7.0),
    ];
    let set = ArticleSet::new(&articles);

    let rows = project_display(&articles[0], &set);
    assert_eq!(rows[0].raw, 7.0);
    assert_eq!(rows[1].display, 7.0);
}

#[test]
fn self_link_projects_the_same_zero_it_resolves_to() {
    let articles = vec![linked_article("a", "a", LinkMode::Quantity)];
    let set = ArticleSet::new(&articles);

    let rows = project_display(&articles[0], &set);
    assert_eq!(rows[0].raw, 0.0);
    assert_eq!(
        resolve_quantity(&"a".into(), &set, &AncestorPath::new()),
        0.0
    );
}

#[test]
fn projection_of_an_empty_article_is_empty() {
    let articles = vec![Article::new("a")];
    let set = ArticleSet::new(&articles);
    assert!(project_display(&articles[0], &set).is_empty());
}
