use std::collections::HashSet;

use crate::core::{ChartMargins, DataPoint};
use crate::error::{ChartError, ChartResult};

use super::{BarChartConfig, BarChartStyle, MAX_Y_TICK_COUNT};

/// Rejects data that would break keyed reconciliation or the `[0, max]`
/// value axis.
pub(super) fn validate_points(points: &[DataPoint]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if point.name.is_empty() {
            return Err(ChartError::InvalidData(
                "data point name must not be empty".to_owned(),
            ));
        }
        if !point.value.is_finite() {
            return Err(ChartError::NonFiniteValue {
                name: point.name.clone(),
            });
        }
        if point.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "value for `{}` must be >= 0",
                point.name
            )));
        }
        if !seen.insert(point.name.as_str()) {
            return Err(ChartError::DuplicateKey {
                name: point.name.clone(),
            });
        }
    }
    Ok(())
}

pub(super) fn validate_user_max(user_max: Option<f64>) -> ChartResult<Option<f64>> {
    if let Some(max) = user_max {
        if !max.is_finite() || max <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart max must be finite and > 0".to_owned(),
            ));
        }
    }
    Ok(user_max)
}

pub(super) fn validate_style(style: BarChartStyle) -> ChartResult<BarChartStyle> {
    for color in [
        style.bar_color,
        style.highlight_color,
        style.label_color,
        style.under_target_color,
        style.axis_color,
    ] {
        color.validate()?;
    }
    for (name, value) in [
        ("font size", style.font_size_px),
        ("axis line width", style.axis_line_width_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("axis tick size", style.axis_tick_size_px),
        ("axis tick padding", style.axis_tick_padding_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(style)
}

pub(super) fn validate_config(
    config: BarChartConfig,
    margins: ChartMargins,
) -> ChartResult<BarChartConfig> {
    margins.validate_viewport(config.viewport)?;
    validate_user_max(config.user_max)?;
    if !(1..=MAX_Y_TICK_COUNT).contains(&config.y_tick_count) {
        return Err(ChartError::InvalidData(format!(
            "y tick count must be in [1, {MAX_Y_TICK_COUNT}]"
        )));
    }
    if !config.under_target_threshold.is_finite() {
        return Err(ChartError::InvalidData(
            "under-target threshold must be finite".to_owned(),
        ));
    }
    validate_style(config.style)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{validate_points, validate_user_max};
    use crate::core::DataPoint;
    use crate::error::ChartError;

    #[test]
    fn duplicate_names_are_reported_by_key() {
        let points = vec![DataPoint::new("07-Dec", 1.0), DataPoint::new("07-Dec", 2.0)];
        match validate_points(&points) {
            Err(ChartError::DuplicateKey { name }) => assert_eq!(name, "07-Dec"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_positive_max_is_rejected() {
        assert!(validate_user_max(Some(0.0)).is_err());
        assert!(validate_user_max(Some(f64::NAN)).is_err());
        assert!(validate_user_max(None).is_ok());
    }
}
