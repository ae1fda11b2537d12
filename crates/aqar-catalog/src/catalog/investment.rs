use serde::{Deserialize, Serialize};

/// Bounds of the storefront return calculator.
pub const PRINCIPAL_RANGE: (u64, u64) = (100_000, 5_000_000);
pub const ROI_PERCENT_RANGE: (f64, f64) = (5.0, 20.0);
pub const YEARS_RANGE: (u32, u32) = (1, 20);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub principal: u64,
    pub annual_roi_percent: f64,
    pub years: u32,
}

/// Projected value of an investment compounding annually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentProjection {
    pub principal: u64,
    pub total_return: u64,
    pub profit: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvestmentError {
    #[error("principal {value} SAR is outside {min}..={max}")]
    Principal { value: u64, min: u64, max: u64 },
    #[error("annual return {value}% is outside {min}..={max}")]
    Roi { value: f64, min: f64, max: f64 },
    #[error("holding period {value} years is outside {min}..={max}")]
    Years { value: u32, min: u32, max: u32 },
}

impl InvestmentInput {
    pub fn validate(&self) -> Result<(), InvestmentError> {
        let (min, max) = PRINCIPAL_RANGE;
        if !(min..=max).contains(&self.principal) {
            return Err(InvestmentError::Principal {
                value: self.principal,
                min,
                max,
            });
        }

        let (min, max) = ROI_PERCENT_RANGE;
        if !(min..=max).contains(&self.annual_roi_percent) {
            return Err(InvestmentError::Roi {
                value: self.annual_roi_percent,
                min,
                max,
            });
        }

        let (min, max) = YEARS_RANGE;
        if !(min..=max).contains(&self.years) {
            return Err(InvestmentError::Years {
                value: self.years,
                min,
                max,
            });
        }

        Ok(())
    }

    /// `principal * (1 + roi/100)^years`, rounded to whole riyals.
    pub fn project(&self) -> Result<InvestmentProjection, InvestmentError> {
        self.validate()?;

        let growth = (1.0 + self.annual_roi_percent / 100.0).powi(self.years as i32);
        let total_return = (self.principal as f64 * growth).round() as u64;

        Ok(InvestmentProjection {
            principal: self.principal,
            total_return,
            profit: total_return.saturating_sub(self.principal),
        })
    }
}
