use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exprdiff::binding::validate_symbol_name;
use exprdiff::catalog::{self, Sample};
use exprdiff::{
    Binding, DEFAULT_VARIABLE, Evaluation, Expression, ExpressionError, SweepRange,
    parse_assignment, sweep,
};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Exprdiff - Evaluate and differentiate sample expressions
#[derive(Parser, Debug)]
#[command(name = "exprdiff")]
#[command(about = "Evaluate sample expressions and their derivatives at a binding")]
#[command(version)]
pub struct CliArgs {
    /// Bind a symbol to a value, e.g. `--bind x=2` (repeatable)
    #[arg(short, long = "bind", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub bindings: Vec<(String, f64)>,

    /// Symbol to differentiate with respect to
    #[arg(short, long, default_value = DEFAULT_VARIABLE)]
    pub wrt: String,

    /// Only evaluate the named sample
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Render expressions as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Sweep the differentiation variable over evenly spaced points
    #[arg(long, value_name = "FROM:TO:STEPS")]
    pub sweep: Option<SweepRange>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub binding: Binding,
    pub variable: String,
    pub sample: Option<String>,
    pub latex: bool,
    pub sweep: Option<SweepRange>,
    pub log_level: LogLevel,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        validate_symbol_name(&args.wrt).context("Invalid differentiation variable")?;

        let mut binding = Binding::new();
        binding.extend(args.bindings);

        Ok(CliConfig {
            binding,
            variable: args.wrt,
            sample: args.sample,
            latex: args.latex,
            sweep: args.sweep,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn select_samples(name: Option<&str>) -> Result<Vec<Sample>> {
    match name {
        Some(name) => catalog::find(name)
            .map(|sample| vec![sample])
            .with_context(|| format!("Unknown sample '{}'", name)),
        None => Ok(catalog::samples()),
    }
}

fn render(expr: &Expression, latex: bool) -> String {
    if latex {
        expr.to_latex()
    } else {
        expr.to_string()
    }
}

fn format_result(var: &str, result: &Result<Evaluation, ExpressionError>) -> String {
    match result {
        Ok(eval) => format!("{}, d/d{} = {}", eval.value, var, eval.derivative),
        Err(e) => {
            warn!("{}", e);
            format!("error: {}", e)
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let samples = select_samples(config.sample.as_deref())?;

    info!(
        "Evaluating {} sample(s) with respect to '{}', bound symbols: [{}]",
        samples.len(),
        config.variable,
        config.binding.names().join(", ")
    );

    for sample in &samples {
        let unbound: Vec<&str> = sample
            .expression
            .symbols()
            .into_iter()
            .filter(|name| !config.binding.contains(name))
            .collect();
        if !unbound.is_empty() {
            info!("{} has unbound symbols: {}", sample.name, unbound.join(", "));
        }

        let rendered = render(&sample.expression, config.latex);
        match &config.sweep {
            Some(range) => {
                println!("{}: {}", sample.name, rendered);
                let var = config.variable.as_str();
                for (point, result) in sweep(&sample.expression, var, &config.binding, range) {
                    println!("  {} = {}: {}", var, point, format_result(var, &result));
                }
            }
            None => {
                let result = sample
                    .expression
                    .evaluate_with_derivative(&config.variable, &config.binding);
                println!(
                    "{}: {} = {}",
                    sample.name,
                    rendered,
                    format_result(&config.variable, &result)
                );
            }
        }
    }

    Ok(())
}
