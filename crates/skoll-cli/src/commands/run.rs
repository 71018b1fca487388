//! Run command implementation.

use anyhow::{Context, Result, bail};
use console::style;
use std::path::Path;
use std::time::Duration;

use skoll_adapter_python::PythonSessionFactory;
use skoll_nb::TextCheck;
use skoll_run::Runner;

/// Execute the run command.
pub async fn execute(
    notebook: &str,
    timeout: u64,
    retries: u32,
    asserts: &[String],
    python: &str,
    save: Option<&str>,
) -> Result<()> {
    let checks: Vec<(usize, TextCheck)> = asserts
        .iter()
        .map(|spec| parse_assert_spec(spec))
        .collect::<Result<_>>()?;

    println!(
        "{} Running {} ({}s limit, up to {} passes)",
        style("→").cyan().bold(),
        style(notebook).green(),
        timeout,
        retries
    );

    let factory = PythonSessionFactory::new().with_python(python);
    let runner = Runner::new(factory)
        .with_timeout(Duration::from_secs(timeout))
        .with_max_attempts(retries);

    let verification = runner.run_with_retry(Path::new(notebook)).await?;
    println!(
        "  Executed in {} pass{}",
        verification.attempts,
        if verification.attempts == 1 { "" } else { "es" }
    );

    if let Some(path) = save {
        verification.notebook.save(path)?;
        println!("  Saved executed notebook to {}", style(path).green());
    }

    if !verification.is_clean() {
        for error in &verification.errors {
            println!("  {} {}", style("✗").red().bold(), error);
        }
        bail!(
            "{notebook}: {} cell error(s) after {} attempt(s)",
            verification.errors.len(),
            verification.attempts
        );
    }

    for (cell, check) in &checks {
        verification.assert_contains(*cell, check)?;
        println!("  {} cell {cell} output check", style("✓").green().bold());
    }

    println!("{} {notebook} verified", style("✓").green().bold());
    Ok(())
}

/// Parse `CELL:TEXT` (substring) or `CELL:/RE/` (pattern).
fn parse_assert_spec(spec: &str) -> Result<(usize, TextCheck)> {
    let (cell, rest) = spec
        .split_once(':')
        .with_context(|| format!("assertion '{spec}' is not CELL:PATTERN"))?;
    let cell: usize = cell
        .parse()
        .with_context(|| format!("assertion '{spec}' has a non-numeric cell index"))?;

    let check = match rest.strip_prefix('/').and_then(|r| r.strip_suffix('/')) {
        Some(re) if !re.is_empty() => {
            TextCheck::pattern(re).with_context(|| format!("assertion '{spec}' has a bad pattern"))?
        }
        _ => TextCheck::substring(rest),
    };
    Ok((cell, check))
}
