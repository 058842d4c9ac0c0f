//! Bankroll, bonus turnover and RTP calculators.
//!
//! Each calculator validates its whole input before doing any arithmetic, so
//! a rejected input never produces a partial, zero or infinite result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a calculator refused to compute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// The field text is not a finite number.
    #[error("{field} must be a number")]
    NotANumber {
        /// Field label.
        field: &'static str,
    },
    /// The field must be strictly positive.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Field label.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The field is outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field label.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// Parse a form field into a finite number.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, CalculatorError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CalculatorError::NotANumber {
            field,
        })
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), CalculatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::NotPositive {
            field,
            value,
        })
    }
}

/// Input of the bankroll planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankrollInput {
    /// Money set aside for gambling.
    pub total_bankroll: f64,
    /// Share of the bankroll per session, in `(0, 100]`.
    pub session_percentage: f64,
}

/// Result of the bankroll planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankrollResult {
    /// Amount to bring to one session.
    pub session_budget: f64,
    /// Whole sessions the bankroll covers.
    pub sessions_available: u64,
}

impl BankrollInput {
    /// Parse raw form values.
    pub fn parse(total_bankroll: &str, session_percentage: &str) -> Result<Self, CalculatorError> {
        Ok(Self {
            total_bankroll: parse_amount("Total bankroll", total_bankroll)?,
            session_percentage: parse_amount("Session percentage", session_percentage)?,
        })
    }

    /// Check every constraint without computing.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        ensure_positive("Total bankroll", self.total_bankroll)?;
        let pct = self.session_percentage;
        if !(pct.is_finite() && pct > 0.0 && pct <= 100.0) {
            return Err(CalculatorError::OutOfRange {
                field: "Session percentage",
                value: pct,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(())
    }

    /// Session budget and the number of sessions it allows.
    pub fn compute(&self) -> Result<BankrollResult, CalculatorError> {
        self.validate()?;
        Ok(BankrollResult {
            session_budget: self.total_bankroll * self.session_percentage / 100.0,
            sessions_available: (100.0 / self.session_percentage).floor() as u64,
        })
    }
}

/// Input of the bonus turnover calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoverInput {
    /// Bonus credited.
    pub bonus_amount: f64,
    /// Wagering requirement, e.g. `30` for 30x.
    pub wagering_multiplier: f64,
}

/// Result of the bonus turnover calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoverResult {
    /// Total stake required before withdrawal.
    pub required_turnover: f64,
}

impl TurnoverInput {
    /// Parse raw form values.
    pub fn parse(bonus_amount: &str, wagering_multiplier: &str) -> Result<Self, CalculatorError> {
        Ok(Self {
            bonus_amount: parse_amount("Bonus amount", bonus_amount)?,
            wagering_multiplier: parse_amount("Wagering requirement", wagering_multiplier)?,
        })
    }

    /// Check every constraint without computing.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        ensure_positive("Bonus amount", self.bonus_amount)?;
        ensure_positive("Wagering requirement", self.wagering_multiplier)
    }

    /// Required turnover.
    pub fn compute(&self) -> Result<TurnoverResult, CalculatorError> {
        self.validate()?;
        Ok(TurnoverResult {
            required_turnover: self.bonus_amount * self.wagering_multiplier,
        })
    }
}

/// Input of the RTP calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RtpInput {
    /// Advertised return to player, in `[0, 100]`.
    pub rtp_percent: f64,
    /// Total amount staked.
    pub total_wagered: f64,
    /// Number of spins the stake was spread over.
    pub spins_played: f64,
}

/// Result of the RTP calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RtpResult {
    /// Long-run amount paid back.
    pub expected_return: f64,
    /// Long-run amount lost.
    pub expected_loss: f64,
    /// Expected return of one spin.
    pub return_per_spin: f64,
}

impl RtpInput {
    /// Parse raw form values.
    pub fn parse(
        rtp_percent: &str,
        total_wagered: &str,
        spins_played: &str,
    ) -> Result<Self, CalculatorError> {
        Ok(Self {
            rtp_percent: parse_amount("RTP", rtp_percent)?,
            total_wagered: parse_amount("Total wagered", total_wagered)?,
            spins_played: parse_amount("Spins played", spins_played)?,
        })
    }

    /// Check every constraint without computing.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        let rtp = self.rtp_percent;
        if !(rtp.is_finite() && (0.0..=100.0).contains(&rtp)) {
            return Err(CalculatorError::OutOfRange {
                field: "RTP",
                value: rtp,
                min: 0.0,
                max: 100.0,
            });
        }
        ensure_positive("Total wagered", self.total_wagered)?;
        ensure_positive("Spins played", self.spins_played)
    }

    /// Expected return, loss and per-spin return.
    pub fn compute(&self) -> Result<RtpResult, CalculatorError> {
        self.validate()?;
        let expected_return = self.total_wagered * self.rtp_percent / 100.0;
        Ok(RtpResult {
            expected_return,
            expected_loss: self.total_wagered - expected_return,
            return_per_spin: expected_return / self.spins_played,
        })
    }
}

/// Last successful result of one calculator plus the latest error.
///
/// A failed submission records its error but keeps the previous result.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState<T> {
    result: Option<T>,
    error: Option<CalculatorError>,
}

impl<T> Default for CalculatorState<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
        }
    }
}

impl<T> CalculatorState<T> {
    /// Fresh state with nothing computed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a calculation.
    pub fn submit(&mut self, outcome: Result<T, CalculatorError>) {
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.error = None;
            },
            Err(err) => {
                tracing::debug!("calculator input rejected: {err}");
                self.error = Some(err);
            },
        }
    }

    /// Last successful result.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Error from the latest submission, cleared by the next success.
    pub fn error(&self) -> Option<&CalculatorError> {
        self.error.as_ref()
    }
}

/// `$1,234.50` style amount with two decimals.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bankroll_scenario() {
        let result = BankrollInput {
            total_bankroll: 1000.0,
            session_percentage: 10.0,
        }
        .compute()
        .expect("valid input");
        assert!(close(result.session_budget, 100.0));
        assert_eq!(result.sessions_available, 10);
    }

    #[test]
    fn bankroll_floors_session_count() {
        let result = BankrollInput {
            total_bankroll: 500.0,
            session_percentage: 15.0,
        }
        .compute()
        .expect("valid input");
        assert!(close(result.session_budget, 75.0));
        assert_eq!(result.sessions_available, 6);

        let whole = BankrollInput {
            total_bankroll: 50.0,
            session_percentage: 100.0,
        }
        .compute()
        .expect("upper bound is inclusive");
        assert_eq!(whole.sessions_available, 1);
    }

    #[test]
    fn bankroll_tiny_percentage_counts_every_session() {
        let result = BankrollInput {
            total_bankroll: 1000.0,
            session_percentage: 1e-8,
        }
        .compute()
        .expect("tiny percentages are in range");
        assert_eq!(result.sessions_available, 10_000_000_000);
        assert!(close(result.session_budget, 1e-7));
    }

    #[test]
    fn bankroll_rejects_out_of_range() {
        for (total, pct) in [(0.0, 10.0), (-5.0, 10.0), (1000.0, 0.0), (1000.0, 100.5)] {
            let input = BankrollInput {
                total_bankroll: total,
                session_percentage: pct,
            };
            assert!(input.compute().is_err(), "{total} / {pct} should be rejected");
        }
    }

    #[test]
    fn turnover_scenario() {
        let result = TurnoverInput {
            bonus_amount: 100.0,
            wagering_multiplier: 30.0,
        }
        .compute()
        .expect("valid input");
        assert!(close(result.required_turnover, 3000.0));
    }

    #[test]
    fn turnover_rejects_non_positive() {
        let err = TurnoverInput {
            bonus_amount: 100.0,
            wagering_multiplier: 0.0,
        }
        .compute()
        .unwrap_err();
        assert_eq!(
            err,
            CalculatorError::NotPositive {
                field: "Wagering requirement",
                value: 0.0,
            }
        );
    }

    #[test]
    fn rtp_scenario() {
        let result = RtpInput {
            rtp_percent: 96.0,
            total_wagered: 1000.0,
            spins_played: 100.0,
        }
        .compute()
        .expect("valid input");
        assert!(close(result.expected_return, 960.0));
        assert!(close(result.expected_loss, 40.0));
        assert!(close(result.return_per_spin, 9.6));
    }

    #[test]
    fn rtp_zero_spins_is_rejected_not_infinite() {
        let outcome = RtpInput {
            rtp_percent: 96.0,
            total_wagered: 1000.0,
            spins_played: 0.0,
        }
        .compute();
        assert!(matches!(
            outcome,
            Err(CalculatorError::NotPositive {
                field: "Spins played",
                ..
            })
        ));
    }

    #[test]
    fn rtp_bounds_are_inclusive() {
        for rtp in [0.0, 100.0] {
            assert!(RtpInput {
                rtp_percent: rtp,
                total_wagered: 10.0,
                spins_played: 1.0,
            }
            .compute()
            .is_ok());
        }
        assert!(RtpInput {
            rtp_percent: 100.1,
            total_wagered: 10.0,
            spins_played: 1.0,
        }
        .compute()
        .is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_amount("x", " 12.5 "), Ok(12.5));
        assert!(parse_amount("x", "").is_err());
        assert!(parse_amount("x", "abc").is_err());
        assert!(parse_amount("x", "inf").is_err());
        assert!(parse_amount("x", "NaN").is_err());
        assert!(RtpInput::parse("96", "1000", "ten").is_err());
        assert_eq!(
            TurnoverInput::parse("100", "30").map(|input| input.wagering_multiplier),
            Ok(30.0)
        );
    }

    #[test]
    fn invalid_submission_keeps_previous_result() {
        let mut state = CalculatorState::new();
        assert!(state.result().is_none());

        state.submit(
            RtpInput {
                rtp_percent: 96.0,
                total_wagered: 1000.0,
                spins_played: 100.0,
            }
            .compute(),
        );
        let first = *state.result().expect("computed");

        state.submit(RtpInput::parse("96", "1000", "0").and_then(|input| input.compute()));
        assert_eq!(state.result(), Some(&first));
        assert!(state.error().is_some());

        state.submit(
            RtpInput {
                rtp_percent: 90.0,
                total_wagered: 100.0,
                spins_played: 10.0,
            }
            .compute(),
        );
        assert!(state.error().is_none());
        assert!(close(state.result().expect("computed").expected_return, 90.0));
    }

    #[test]
    fn invalid_first_submission_leaves_nothing_computed() {
        let mut state: CalculatorState<BankrollResult> = CalculatorState::new();
        state.submit(BankrollInput::parse("1000", "abc").and_then(|input| input.compute()));
        assert!(state.result().is_none());
        assert!(state.error().is_some());
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(3000.0), "$3,000.00");
        assert_eq!(format_currency(9.6), "$9.60");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-40.0), "-$40.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }
}
