use tabled::{Table, Tabled};

use crate::analysis::TickerLeadLag;
use crate::config::{Alpha, AnalysisConfig};
use crate::models::{LeadLagBias, LeadLagProfile};
use crate::report::significance::{RowStatus, SignificanceReport};
use crate::utils::format_date_range;

#[derive(Tabled)]
struct BaselineLine {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "r")]
    r: String,
    #[tabled(rename = "p")]
    p_value: String,
    #[tabled(rename = "n")]
    n: String,
    #[tabled(rename = "Significant")]
    flag: String,
}

#[derive(Tabled)]
struct OffsetLine {
    #[tabled(rename = "Offset")]
    offset: String,
    #[tabled(rename = "r")]
    r: String,
    #[tabled(rename = "p")]
    p_value: String,
    #[tabled(rename = "n")]
    n: String,
    #[tabled(rename = "Significant")]
    flag: String,
}

fn fmt_value(v: f64) -> String {
    if v.is_finite() {
        format!("{:.4}", v)
    } else {
        "undefined".to_string()
    }
}

/// Collects the study's text output. Nothing is printed; callers decide where it goes.
#[derive(Default)]
pub struct StudyReporter {
    buffer: Vec<String>,
}

impl StudyReporter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn add_baseline(&mut self, report: &SignificanceReport) {
        self.buffer.push(format!(
            "Baseline correlations: {} tests, alpha {} (Bonferroni-corrected {})",
            report.tests, report.alpha, report.corrected_alpha
        ));

        let lines: Vec<BaselineLine> = report
            .rows
            .iter()
            .map(|row| {
                let (r, p_value, n, flag) = match &row.status {
                    RowStatus::Tested {
                        result,
                        significant,
                    } => (
                        fmt_value(result.r),
                        fmt_value(result.p_value),
                        result.n.to_string(),
                        (if *significant { "yes" } else { "no" }).to_string(),
                    ),
                    RowStatus::Undefined { n } => (
                        "undefined".to_string(),
                        "-".to_string(),
                        n.to_string(),
                        "zero variance".to_string(),
                    ),
                    RowStatus::Failed(reason) => {
                        ("-".to_string(), "-".to_string(), "-".to_string(), reason.clone())
                    }
                };
                BaselineLine {
                    ticker: row.ticker.clone(),
                    pair: row.pair.to_string(),
                    r,
                    p_value,
                    n,
                    flag,
                }
            })
            .collect();

        self.buffer.push(Table::new(lines).to_string());
    }

    /// Per-ticker profiles. Offsets are flagged against `config.alpha` split
    /// over that ticker's defined offsets.
    pub fn add_lead_lag(&mut self, config: &AnalysisConfig, results: &[TickerLeadLag]) {
        for item in results {
            let outcome = match &item.outcome {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.buffer.push(format!("== {} | {} ==", item.ticker, item.pair));
                    self.buffer.push(format!("Not analyzed: {:#}", e));
                    continue;
                }
            };

            self.buffer.push(format!(
                "== {} | {} | {} ==",
                item.ticker,
                item.pair,
                format_date_range(outcome.period)
            ));

            self.add_profile(&outcome.scan.profile, config.alpha);

            // Skips are listed, never silently dropped
            for skip in &outcome.scan.skipped {
                self.buffer
                    .push(format!("Skipped offset {:+}: {}", skip.offset, skip.reason));
            }

            match &outcome.indicator {
                Ok(value) => self.buffer.push(format!(
                    "Asymmetry indicator: {:+.4} ({})",
                    value,
                    LeadLagBias::from_indicator(*value)
                )),
                Err(e) => self.buffer.push(format!("Asymmetry indicator: missing ({})", e)),
            }
        }
    }

    fn add_profile(&mut self, profile: &LeadLagProfile, alpha: Alpha) {
        if profile.is_empty() {
            self.buffer.push("No offsets could be computed".to_string());
            return;
        }

        let tests = profile.iter().filter(|res| res.is_defined()).count();
        let corrected = alpha.bonferroni(tests);
        self.buffer.push(format!(
            "Offsets: {} tests, alpha {} (Bonferroni-corrected {})",
            tests, alpha, corrected
        ));

        let lines: Vec<OffsetLine> = profile
            .iter()
            .map(|res| OffsetLine {
                offset: format!("{:+}", res.offset),
                r: fmt_value(res.r),
                p_value: fmt_value(res.p_value),
                n: res.n.to_string(),
                flag: match (res.is_defined(), res.is_significant(corrected)) {
                    (false, _) => "zero variance".to_string(),
                    (true, true) => "yes".to_string(),
                    (true, false) => "no".to_string(),
                },
            })
            .collect();

        self.buffer.push(Table::new(lines).to_string());
    }

    pub fn render(&self) -> String {
        self.buffer.join("\n")
    }
}
