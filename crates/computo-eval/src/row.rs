//! Row evaluation: one measurement row → one signed contribution.

use computo_common::{Measurement, MeasurementKind};

/// Evaluate a single measurement row.
///
/// - `Subtotal` rows contribute `0` no matter what else they carry; they are
///   display checkpoints only.
/// - For a linked row, `linked_value` is the target article's resolved value
///   already adjusted for the link mode by the caller (raw quantity, or
///   quantity × unit price for amount links). The dimensional fields are
///   display-only in this case and are not read. A missing `linked_value`
///   counts as `0`, matching how broken references degrade everywhere else.
/// - Otherwise the row multiplies the subset of length/width/height that is
///   present and non-zero. An absent multiplier defaults to `1` as soon as
///   any dimension is present; an explicit multiplier is used verbatim, even
///   `0`. A row with no dimensions at all but a non-zero multiplier is a
///   flat repetition count ("3 parti uguali" = 3 units).
///
/// `Deduction` flips the sign of the result. A negative multiplier is
/// multiplied as given, so a deduction row with a negative multiplier
/// double-negates; the engine does not second-guess its input.
///
/// Total for any finite numeric input: an all-empty row evaluates to `0`.
pub fn evaluate_row(row: &Measurement, linked_value: Option<f64>) -> f64 {
    if row.kind == MeasurementKind::Subtotal {
        return 0.0;
    }

    let sign = match row.kind {
        MeasurementKind::Deduction => -1.0,
        _ => 1.0,
    };

    if row.link.is_some() {
        let linked = linked_value.unwrap_or(0.0);
        return linked * row.multiplier.unwrap_or(1.0) * sign;
    }

    let mut base = 1.0;
    let mut has_factor = false;
    for dim in [row.length, row.width, row.height].into_iter().flatten() {
        if dim != 0.0 {
            base *= dim;
            has_factor = true;
        }
    }

    let multiplier = match row.multiplier {
        Some(m) => m,
        None if has_factor => 1.0,
        None => 0.0,
    };

    if !has_factor {
        // Pure repetition row; a zero multiplier (implicit or explicit)
        // means the row is empty and contributes nothing.
        if multiplier == 0.0 {
            return 0.0;
        }
        return multiplier * sign;
    }

    base * multiplier * sign
}
