use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a data domain to a pixel range.
///
/// A zero-span domain is allowed and maps every input to the range start,
/// so degenerate charts never produce NaN or infinite coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
            range_start: 0.0,
            range_end: 1.0,
        }
    }
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        Self::default().with_domain(domain_start, domain_end)
    }

    pub fn with_domain(mut self, start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        self.domain_start = start;
        self.domain_end = end;
        Ok(self)
    }

    pub fn with_range(mut self, start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = start;
        self.range_end = end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_end == self.domain_start
    }

    /// Maps a domain value into the range. Values outside the domain
    /// extrapolate linearly.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.0
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a range value back into the domain.
    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a scale with an empty range".to_owned(),
            ));
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn inverted_range_maps_larger_values_to_smaller_pixels() {
        let scale = LinearScale::new(0.0, 800.0)
            .and_then(|scale| scale.with_range(175.0, 0.0))
            .expect("valid scale");
        assert_eq!(scale.map(0.0), 175.0);
        assert_eq!(scale.map(800.0), 0.0);
        assert!(scale.map(100.0) > scale.map(700.0));
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new(0.0, 0.0)
            .and_then(|scale| scale.with_range(175.0, 0.0))
            .expect("valid scale");
        assert!(scale.is_degenerate());
        assert_eq!(scale.map(0.0), 175.0);
        assert_eq!(scale.map(42.0), 175.0);
    }
}
