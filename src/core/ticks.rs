use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Number of major ticks the default policy aims for.
pub const SUGGESTED_TICKS: f64 = 3.0;

/// Upper bound on the multiples of one step generated for a range.
const MAX_STEP_COUNT: i64 = 1000;

/// A labelled (major) or unlabelled (minor) position along an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn minor(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }

    /// Minor ticks carry no label; their mark starts at half length.
    #[must_use]
    pub fn is_minor(&self) -> bool {
        self.label.is_empty()
    }

    /// Offset from the outer end of the tick mark at which painting starts.
    #[must_use]
    pub fn length_offset(&self, length: f64) -> f64 {
        if self.is_minor() { length / 2.0 } else { 0.0 }
    }
}

/// User-supplied tick generation.
pub trait Ticker {
    /// Ticks for the sanitized range `min < max`.
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick>;
}

/// Tick generation policy of an axis.
#[derive(Clone, Default)]
pub enum TickMarker {
    /// Nice-number major ticks with minor subdivisions.
    #[default]
    Default,
    /// Powers of ten with minor ticks at 2..9 × 10ⁿ.
    Log,
    /// A fixed list, used verbatim.
    Constant(Vec<Tick>),
    Custom(Arc<dyn Ticker + Send + Sync>),
}

impl TickMarker {
    #[must_use]
    pub fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        match self {
            Self::Default => default_ticks(min, max),
            Self::Log => log_ticks(min, max),
            Self::Constant(ticks) => ticks.clone(),
            Self::Custom(ticker) => ticker.ticks(min, max),
        }
    }
}

impl fmt::Debug for TickMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Log => f.write_str("Log"),
            Self::Constant(ticks) => f.debug_tuple("Constant").field(ticks).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Major ticks at multiples of a nice step plus unlabelled minor ticks.
///
/// The step is `k × 10ᵖ`, chosen so roughly [`SUGGESTED_TICKS`] majors fall
/// in range. Minors split a major step in halves, thirds (k = 3, 6) or
/// fifths (k = 5). Values are generated as integer multiples of the step so
/// they do not accumulate rounding drift. The result is sorted by value.
///
/// Empty when the span is too small for a representable step.
#[must_use]
pub fn default_ticks(min: f64, max: f64) -> Vec<Tick> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let mut power = span.log10().floor() as i32;
    while span / 10f64.powi(power) < SUGGESTED_TICKS {
        power -= 1;
    }
    let tens = 10f64.powi(power);
    if !is_usable_step(tens) {
        return Vec::new();
    }
    let major_mult = match (span / tens / SUGGESTED_TICKS) as i64 {
        7 => 6,
        9 => 8,
        mult => mult.max(1),
    };
    let major_step = major_mult as f64 * tens;
    if !is_usable_step(major_step) {
        return Vec::new();
    }
    let decimals = usize::try_from(-power).unwrap_or(0);

    let mut ticks: Vec<Tick> = multiples_in_range(min, max, major_step)
        .map(|value| Tick::major(value, format_tick_label(value, decimals)))
        .collect();

    let minor_step = match major_mult {
        3 | 6 => major_step / 3.0,
        5 => major_step / 5.0,
        _ => major_step / 2.0,
    };
    if !is_usable_step(minor_step) {
        return ticks;
    }
    let tolerance = minor_step * 1e-6;
    let minors: Vec<Tick> = multiples_in_range(min, max, minor_step)
        .filter(|value| {
            !ticks
                .iter()
                .any(|tick| (tick.value - value).abs() <= tolerance)
        })
        .map(Tick::minor)
        .collect();
    ticks.extend(minors);
    ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
    ticks
}

/// Major ticks at powers of ten, minor ticks at the integer multiples between.
///
/// Empty when the range is not strictly positive.
#[must_use]
pub fn log_ticks(min: f64, max: f64) -> Vec<Tick> {
    if !(min > 0.0 && max > min && max.is_finite()) {
        return Vec::new();
    }

    let low = min.log10().floor() as i32;
    let high = max.log10().ceil() as i32;
    let mut ticks = Vec::new();
    for power in low..=high {
        let base = 10f64.powi(power);
        if (min..=max).contains(&base) {
            ticks.push(Tick::major(base, format_power_of_ten(power)));
        }
        for mult in 2..10 {
            let value = base * f64::from(mult);
            if (min..=max).contains(&value) {
                ticks.push(Tick::minor(value));
            }
        }
    }
    ticks
}

fn is_usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

fn multiples_in_range(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let indices = match last.checked_sub(first) {
        Some(count) if count <= MAX_STEP_COUNT => first..=last,
        _ => 1..=0,
    };
    indices
        .map(move |index| index as f64 * step)
        .filter(move |value| (min..=max).contains(value))
}

fn format_tick_label(value: f64, decimals: usize) -> String {
    let label = format!("{value:.decimals$}");
    if label.trim_start_matches('-').chars().all(|ch| ch == '0' || ch == '.') {
        // Avoid "-0" and "-0.0" for values that rounded to zero.
        return label.trim_start_matches('-').to_owned();
    }
    label
}

fn format_power_of_ten(power: i32) -> String {
    if (-4..=5).contains(&power) {
        let decimals = usize::try_from(-power).unwrap_or(0);
        format!("{:.decimals$}", 10f64.powi(power))
    } else {
        format!("1e{power}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Tick, TickMarker, default_ticks, log_ticks};

    fn majors(ticks: &[Tick]) -> Vec<(f64, String)> {
        ticks
            .iter()
            .filter(|tick| !tick.is_minor())
            .map(|tick| (tick.value, tick.label.clone()))
            .collect()
    }

    #[test]
    fn default_ticks_use_nice_steps() {
        let ticks = default_ticks(0.0, 10.0);
        let labels: Vec<String> = majors(&ticks).into_iter().map(|(_, label)| label).collect();
        assert_eq!(labels, vec!["0", "3", "6", "9"]);
        assert!(ticks.iter().any(Tick::is_minor));
    }

    #[test]
    fn default_ticks_stay_in_range_and_never_duplicate_majors() {
        let ticks = default_ticks(-1.0, 1.0);
        assert!(ticks.iter().all(|tick| (-1.0..=1.0).contains(&tick.value)));
        let major_values: Vec<f64> = majors(&ticks).into_iter().map(|(value, _)| value).collect();
        for tick in ticks.iter().filter(|tick| tick.is_minor()) {
            assert!(
                major_values
                    .iter()
                    .all(|major| (major - tick.value).abs() > 1e-9),
                "minor tick {} duplicates a major",
                tick.value
            );
        }
    }

    #[test]
    fn fractional_steps_get_decimal_labels() {
        let labels: Vec<String> = majors(&default_ticks(0.0, 1.0))
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(labels, vec!["0.0", "0.3", "0.6", "0.9"]);
    }

    #[test]
    fn zero_never_prints_negative() {
        let ticks = default_ticks(-0.9, 0.9);
        assert!(ticks.iter().all(|tick| tick.label != "-0.0" && tick.label != "-0"));
    }

    #[test]
    fn default_ticks_are_sorted_by_value() {
        let ticks = default_ticks(-7.0, 23.0);
        assert!(ticks.iter().any(Tick::is_minor));
        assert!(ticks.windows(2).all(|pair| pair[0].value < pair[1].value));
    }

    #[test]
    fn subnormal_span_yields_no_ticks() {
        assert!(default_ticks(-1e-320, 1e-320).is_empty());
    }

    #[test]
    fn huge_spans_stay_bounded() {
        let ticks = default_ticks(-8e307, 8e307);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 2 * (super::MAX_STEP_COUNT as usize + 1));
        assert!(ticks.iter().all(|tick| tick.value.is_finite()));
    }

    #[test]
    fn log_ticks_mark_powers_of_ten() {
        let ticks = log_ticks(1.0, 1000.0);
        let labels: Vec<String> = majors(&ticks).into_iter().map(|(_, label)| label).collect();
        assert_eq!(labels, vec!["1", "10", "100", "1000"]);
        assert_eq!(ticks.iter().filter(|tick| tick.is_minor()).count(), 24);
    }

    #[test]
    fn log_ticks_need_a_positive_range() {
        assert!(log_ticks(0.0, 10.0).is_empty());
        assert!(log_ticks(-5.0, 10.0).is_empty());
    }

    #[test]
    fn minor_ticks_start_at_half_length() {
        assert_eq!(Tick::minor(1.0).length_offset(8.0), 4.0);
        assert_eq!(Tick::major(1.0, "1").length_offset(8.0), 0.0);
    }

    #[test]
    fn constant_marker_returns_ticks_verbatim() {
        let marker = TickMarker::Constant(vec![Tick::major(0.0, "a"), Tick::major(1.0, "b")]);
        let ticks = marker.ticks(-100.0, 100.0);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1].label, "b");
    }
}
