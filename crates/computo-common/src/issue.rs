//! Link problems modelled as data, not as errors.
//!
//! A broken reference must never abort computation of an estimate: the
//! engine degrades the offending contribution to `0` and keeps going, and
//! the audit pass reports what was degraded so a UI can flag the row. There
//! is deliberately no `Error` type here.

use std::fmt::{self, Display};

use crate::{ArticleId, MeasurementId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a linked row's contribution degraded to zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkIssueKind {
    /// The link's target id is absent from the collection.
    DanglingTarget,
    /// The target's link chain reaches back to the owning article, so
    /// resolution short-circuits the edge.
    CycleGuard,
}

impl Display for LinkIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DanglingTarget => "dangling link target",
            Self::CycleGuard => "circular reference",
        })
    }
}

/// One audited link edge.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkIssue {
    /// Article owning the offending row.
    pub article: ArticleId,
    pub measurement: MeasurementId,
    pub target: ArticleId,
    pub kind: LinkIssueKind,
}

impl Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "article `{}`, row `{}`: {} `{}`",
            self.article, self.measurement, self.kind, self.target
        )
    }
}
