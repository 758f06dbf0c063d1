use smallvec::SmallVec;

use crate::core::LinearScale;

pub type AxisTicks = SmallVec<[f64; 8]>;

/// Step between "nice" ticks (1, 2 or 5 times a power of ten) so that roughly
/// `count` ticks cover `span`.
#[must_use]
pub fn nice_tick_step(span: f64, count: usize) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return None;
    }

    let count = count as f64;
    let mut step = 10f64.powf((span / count).log10().floor());
    let err = count / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Tick values covering the scale domain at a nice step.
///
/// A degenerate domain yields its single value.
#[must_use]
pub fn linear_ticks(scale: LinearScale, count: usize) -> AxisTicks {
    let (start, end) = scale.domain();
    let (low, high) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let mut ticks = AxisTicks::new();
    let Some(step) = nice_tick_step(high - low, count) else {
        if count > 0 {
            ticks.push(low);
        }
        return ticks;
    };

    let first = (low / step - 1e-9).ceil() as i64;
    let last = (high / step + 1e-9).floor() as i64;
    ticks.extend((first..=last).map(|index| index as f64 * step));
    ticks
}

/// Integer tick format: whole numbers print without decimals, anything with a
/// fractional part formats to nothing.
#[must_use]
pub fn format_integer_tick(value: f64) -> Option<String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value == 0.0 {
        return Some("0".to_owned());
    }
    Some(format!("{value:.0}"))
}

#[cfg(test)]
mod tests {
    use super::{format_integer_tick, linear_ticks, nice_tick_step};
    use crate::core::LinearScale;

    #[test]
    fn four_ticks_over_eight_hundred_step_by_two_hundred() {
        assert_eq!(nice_tick_step(800.0, 4), Some(200.0));
        let scale = LinearScale::new(0.0, 800.0).expect("scale");
        assert_eq!(
            linear_ticks(scale, 4).as_slice(),
            &[0.0, 200.0, 400.0, 600.0, 800.0]
        );
    }

    #[test]
    fn user_max_of_2100_steps_by_five_hundred() {
        let scale = LinearScale::new(0.0, 2100.0).expect("scale");
        assert_eq!(
            linear_ticks(scale, 4).as_slice(),
            &[0.0, 500.0, 1000.0, 1500.0, 2000.0]
        );
    }

    #[test]
    fn fractional_ticks_have_no_integer_label() {
        assert_eq!(format_integer_tick(0.5), None);
        assert_eq!(format_integer_tick(1500.0).as_deref(), Some("1500"));
        assert_eq!(format_integer_tick(-0.0).as_deref(), Some("0"));
    }
}
