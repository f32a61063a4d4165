//! Shared builders for engine tests.

use computo_common::{Article, Link, LinkMode, Measurement};

/// Article whose single row is a plain length measurement resolving to `len`.
pub fn fixed_article(id: &str, len: f64) -> Article {
    Article::new(id).with_measurements(vec![Measurement::new(format!("{id}-m1")).with_length(len)])
}

/// Article whose single row links to `target`.
pub fn linked_article(id: &str, target: &str, mode: LinkMode) -> Article {
    let link = match mode {
        LinkMode::Quantity => Link::quantity(target),
        LinkMode::Amount => Link::amount(target),
    };
    Article::new(id).with_measurements(vec![Measurement::new(format!("{id}-m1")).with_link(link)])
}
