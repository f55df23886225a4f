use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use billiards::algebra::{product, Equation, LinXYEta};
use billiards::cover::{check_square, verify_cover, CoverReport, Diagnostic};
use billiards::division::{divide_once, strip_line_factors};
use billiards::region::clip_polygon;
use billiards::CoverCfg;

mod job;
mod provenance;

use job::Job;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Certified cover verification runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Verify a proof tree from a job file and write a JSON report
    Verify {
        #[arg(long)]
        job: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Overrides the job's digits
        #[arg(long)]
        digits: Option<u32>,
    },
    /// Check one square against a single region of a job
    Check {
        #[arg(long)]
        job: PathBuf,
        #[arg(long)]
        index: usize,
        #[arg(long, allow_hyphen_values = true)]
        cx: i64,
        #[arg(long, allow_hyphen_values = true)]
        cy: i64,
        #[arg(long)]
        denom: i64,
        #[arg(long)]
        digits: Option<u32>,
    },
    /// Divide an equation by a factor
    Divide {
        #[arg(long, allow_hyphen_values = true)]
        equation: String,
        #[arg(long, allow_hyphen_values = true)]
        factor: String,
    },
    /// Divide repeated triangle-angle sines out of an equation
    Strip {
        #[arg(long, allow_hyphen_values = true)]
        equation: String,
        #[arg(long, default_value = "x")]
        first: String,
        #[arg(long, default_value = "y")]
        second: String,
    },
    /// Expand the product of two equations into a sum
    Product {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Clip the seed triangle by inequality lines
    Clip {
        #[arg(long = "line", allow_hyphen_values = true)]
        lines: Vec<String>,
    },
    /// Print a provenance block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Verify { job, out, digits } => {
            let report = verify(&job, &out, digits)?;
            println!("Covered = {}", report.covered);
            Ok(())
        }
        Action::Check {
            job,
            index,
            cx,
            cy,
            denom,
            digits,
        } => check(&job, index, cx, cy, denom, digits),
        Action::Divide { equation, factor } => {
            println!("{}", divide(&equation, &factor)?);
            Ok(())
        }
        Action::Strip {
            equation,
            first,
            second,
        } => {
            println!("{}", strip(&equation, &first, &second)?);
            Ok(())
        }
        Action::Product { a, b } => {
            println!("{}", multiply(&a, &b)?);
            Ok(())
        }
        Action::Clip { lines } => {
            println!("{}", clip(&lines)?);
            Ok(())
        }
        Action::Report => {
            let doc = provenance::block(Payload::new(json!({})), &[]);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DiagnosticJson {
    kind: String,
    square: String,
    detail: Vec<String>,
}

impl From<&Diagnostic> for DiagnosticJson {
    fn from(d: &Diagnostic) -> Self {
        Self {
            kind: d.kind.to_string(),
            square: d.square.to_string(),
            detail: d.detail.clone(),
        }
    }
}

#[derive(Serialize)]
struct ReportJson {
    covered: bool,
    leaves: u64,
    digits: u32,
    diagnostics: Vec<DiagnosticJson>,
}

fn job_cfg(job: &Job, digits: Option<u32>) -> CoverCfg {
    let cfg = CoverCfg::default();
    cfg.with_digits(digits.or(job.digits).unwrap_or(cfg.digits))
}

fn verify(job_path: &Path, out: &Path, digits: Option<u32>) -> Result<CoverReport> {
    let job = Job::load(job_path)?;
    let cfg = job_cfg(&job, digits);
    tracing::info!(job = %job_path.display(), out = %out.display(), digits = cfg.digits, "verify");
    let report = verify_cover(&job.square()?, &job.polygon()?, &job.infos()?, &job.tree()?, &cfg)
        .context("cover verification aborted")?;

    let doc = ReportJson {
        covered: report.covered,
        leaves: report.leaves,
        digits: cfg.digits,
        diagnostics: report.diagnostics.iter().map(DiagnosticJson::from).collect(),
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(json!({ "digits": cfg.digits, "corner_guard": cfg.corner_guard }))
        .with_input(job_path);
    provenance::write_sidecar(out, payload)?;
    Ok(report)
}

fn check(job_path: &Path, index: usize, cx: i64, cy: i64, denom: i64, digits: Option<u32>) -> Result<()> {
    let job = Job::load(job_path)?;
    let cfg = job_cfg(&job, digits);
    let info = job.single(index)?;
    let result = check_square(cx, cy, denom, &info, cfg.digits).context("square check aborted")?;
    println!("{result}");
    for d in &result.diagnostics {
        print!("{d}");
    }
    Ok(())
}

fn divide(equation: &str, factor: &str) -> Result<String> {
    let eq: Equation = equation.parse().with_context(|| format!("parsing equation {equation:?}"))?;
    let factor: Equation = factor.parse().with_context(|| format!("parsing factor {factor:?}"))?;
    Ok(match divide_once(&eq, &factor)? {
        Some(q) => q.to_string(),
        None => "does not divide".to_string(),
    })
}

fn parse_equation(s: &str) -> Result<Equation> {
    s.parse().with_context(|| format!("parsing equation {s:?}"))
}

fn strip(equation: &str, first: &str, second: &str) -> Result<String> {
    let eq = parse_equation(equation)?;
    let stripped = strip_line_factors(&eq, job::angle(first)?, job::angle(second)?)?;
    Ok(stripped.to_string())
}

fn multiply(a: &str, b: &str) -> Result<String> {
    Ok(product(&parse_equation(a)?, &parse_equation(b)?)?.to_string())
}

fn clip(lines: &[String]) -> Result<String> {
    let lines = lines
        .iter()
        .map(|s| s.parse::<LinXYEta>().with_context(|| format!("parsing line {s:?}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(match clip_polygon(&lines)? {
        Some(region) => region.to_string(),
        None => "empty".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn verify_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let job_path = dir.path().join("job.json");
        fs::write(&job_path, job::tests::CORNER_JOB).unwrap();
        let out = dir.path().join("out").join("report.json");
        let report = verify(&job_path, &out, Some(12)).unwrap();
        assert!(report.covered);

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["covered"], true);
        assert_eq!(parsed["leaves"], 4);
        assert_eq!(parsed["digits"], 12);
        assert!(dir.path().join("out").join("report.provenance.json").exists());
    }

    #[test]
    fn failing_cover_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        let job_path = dir.path().join("job.json");
        let text = job::tests::CORNER_JOB.replace("D S 0 S 0 S 0 S 0", "D E S 0 S 0 S 0");
        fs::write(&job_path, text).unwrap();
        let out = dir.path().join("report.json");
        let report = verify(&job_path, &out, None).unwrap();
        assert!(!report.covered);
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["diagnostics"][0]["kind"], "empty-intersects");
    }

    #[test]
    fn missing_job_has_context() {
        let dir = tempdir().unwrap();
        let err = verify(&dir.path().join("nope.json"), &dir.path().join("r.json"), None).unwrap_err();
        assert!(format!("{err:#}").contains("reading job"));
    }

    #[test]
    fn divide_and_clip_print_results() {
        assert_eq!(divide("sin(14x+y)+sin(22x-y)", "sin(18x)").unwrap(), "cos(4x-y)");
        assert_eq!(divide("cos(x)", "cos(2x)").unwrap(), "does not divide");
        let lines = ["-x+eta", "-y+eta", "x+y-eta"].map(String::from);
        assert_eq!(clip(&lines).unwrap(), "[(1, 0), (1, 1), (0, 1)]");
        assert_eq!(clip(&["-x".to_string()]).unwrap(), "empty");
    }

    #[test]
    fn strip_and_product_print_equations() {
        assert_eq!(strip("sin(2x)", "x", "y").unwrap(), "cos(x)");
        assert_eq!(strip("cos(x)", "y", "z").unwrap(), "cos(x)");
        let err = format!("{:#}", strip("sin(2x)", "x", "x").unwrap_err());
        assert!(err.contains("must differ"), "{err}");
        assert!(strip("sin(2x)", "x", "q").is_err());
        assert_eq!(multiply("cos(x)", "sin(y)").unwrap(), "-sin(x-y)+sin(x+y)");
        assert_eq!(multiply("sin(x)", "-sin(x)").unwrap(), "-cos(0)+cos(2x)");
        assert!(multiply("cos(x", "sin(y)").is_err());
    }
}
