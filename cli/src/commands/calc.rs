use anyhow::{Context, Result};
use ee9_shared::calculators::{format_currency, BankrollInput, RtpInput, TurnoverInput};

use crate::cli::CalcCommands;

/// Validate the raw inputs and print the calculator's result.
pub fn render(command: &CalcCommands) -> Result<String> {
    match command {
        CalcCommands::Bankroll {
            total,
            percentage,
        } => {
            let result = BankrollInput::parse(total, percentage)
                .and_then(|input| input.compute())
                .context("bankroll planner rejected the input")?;
            Ok(format!(
                "Session budget: {}\nSessions available: {}\n",
                format_currency(result.session_budget),
                result.sessions_available
            ))
        },
        CalcCommands::Turnover {
            bonus,
            multiplier,
        } => {
            let result = TurnoverInput::parse(bonus, multiplier)
                .and_then(|input| input.compute())
                .context("turnover calculator rejected the input")?;
            Ok(format!("Required turnover: {}\n", format_currency(result.required_turnover)))
        },
        CalcCommands::Rtp {
            rtp,
            wagered,
            spins,
        } => {
            let result = RtpInput::parse(rtp, wagered, spins)
                .and_then(|input| input.compute())
                .context("RTP calculator rejected the input")?;
            Ok(format!(
                "Expected return: {}\nExpected loss: {}\nReturn per spin: {}\n",
                format_currency(result.expected_return),
                format_currency(result.expected_loss),
                format_currency(result.return_per_spin)
            ))
        },
    }
}
