//! "Nice" tick generation for linear axes.
//!
//! Steps are 1, 2 or 5 times a power of ten, chosen so that roughly `count`
//! ticks cover `[start, stop]`. Ticks are computed from integer indices
//! (`i * step` or `i / inv_step`) so labels never pick up float noise such as
//! `0.30000000000000004`.

use crate::core::format;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick indices plus the increment. A negative increment encodes
/// `1 / -inc` to keep sub-unit steps exact.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: i64,
    last: i64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        first = (start * inv).round() as i64;
        last = (stop * inv).round() as i64;
        if (first as f64) / inv < start {
            first += 1;
        }
        if (last as f64) / inv > stop {
            last -= 1;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        first = (start / step).round() as i64;
        last = (stop / step).round() as i64;
        if (first as f64) * step < start {
            first += 1;
        }
        if (last as f64) * step > stop {
            last -= 1;
        }
        inc = step;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec { first, last, inc }
}

/// Tick values over an ascending or descending domain.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(lo, hi, count as f64);
    if spec.last < spec.first {
        return Vec::new();
    }

    let mut values: Vec<f64> = (spec.first..=spec.last)
        .map(|i| {
            if spec.inc < 0.0 {
                i as f64 / -spec.inc
            } else {
                i as f64 * spec.inc
            }
        })
        .collect();
    if reverse {
        values.reverse();
    }
    values
}

/// Distance between adjacent ticks for the same arguments as [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let spec = tick_spec(lo, hi, count as f64);
    if spec.inc < 0.0 {
        1.0 / -spec.inc
    } else {
        spec.inc
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.abs().log10().floor() as i32;
    (-exponent).max(0) as usize
}

/// Label for one tick, with enough precision for the step and an optional
/// unit suffix. `grouped` inserts thousands separators (`1,000`).
pub fn format_tick(value: f64, step: f64, suffix: &str, grouped: bool) -> String {
    let fixed = format::to_fixed(value, precision_for_step(step));
    if grouped {
        format!("{}{suffix}", format::group_thousands(&fixed))
    } else {
        format!("{fixed}{suffix}")
    }
}
