use crate::error::{PlotError, PlotResult};

pub(super) fn validate_positive(value: f64, name: &str) -> PlotResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_non_negative(value: f64, name: &str) -> PlotResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlotError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_finite(value: f64, name: &str) -> PlotResult<()> {
    if !value.is_finite() {
        return Err(PlotError::InvalidData(format!("{name} must be finite")));
    }
    Ok(())
}
