//! dmrs-labels CLI - Inspect, normalise and compare node labels.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dmrs_labels::{Advisory, Checked, LabelError, Pred, Relation, Sortinfo, relation};
use serde_json::{Value, json};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dmrs-labels")]
#[command(about = "Inspect, normalise and compare predicate and sortinfo labels")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a predicate and show its canonical form
    Pred {
        /// Predicate literal (e.g. _cat_n_1_rel, udef_q_rel)
        text: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Parse a sortinfo string and show its features
    Sortinfo {
        /// Sortinfo literal (e.g. x[pers=3, num=sg])
        text: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Compare two labels of the same family by subsumption
    Compare {
        /// Which lattice the labels belong to
        #[arg(value_enum)]
        kind: LabelKind,

        /// Left-hand label
        left: String,

        /// Right-hand label
        right: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LabelKind {
    Pred,
    Sortinfo,
}

fn is_json(format: &str) -> bool {
    format == "json"
}

fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}

fn emit_error(format: &str, code: &str, err: &LabelError) -> ! {
    let detail = err.to_string();
    if is_json(format) {
        eprintln!("{}", json!({"error": code, "kind": format!("{:?}", err.kind()), "detail": detail}));
    } else {
        eprintln!("{}", format!("Error: {}", detail).red());
    }
    process::exit(1);
}

fn emit_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        eprintln!("{}", format!("warning: {}", advisory).yellow());
    }
}

fn advisories_json(advisories: &[Advisory]) -> Vec<Value> {
    advisories
        .iter()
        .map(|a| json!({"kind": a.kind().to_string(), "message": a.to_string()}))
        .collect()
}

fn parse_pred(format: &str, text: &str) -> Checked<Pred> {
    Pred::from_str_checked(text).unwrap_or_else(|e| emit_error(format, "invalid_predicate", &e))
}

fn parse_sortinfo(format: &str, text: &str) -> Checked<Sortinfo> {
    Sortinfo::from_str_checked(text)
        .unwrap_or_else(|e| emit_error(format, "invalid_sortinfo", &e))
}

fn show_pred(format: &str, text: &str) {
    let checked = parse_pred(format, text);
    let pred = &checked.value;

    let (lemma, pos, sense, name) = match pred {
        Pred::Unspecified => (None, None, None, None),
        Pred::Real(real) => (Some(real.lemma()), Some(real.pos()), real.sense(), None),
        Pred::Grammar(grammar) => (None, None, None, Some(grammar.name())),
    };

    if is_json(format) {
        print_json(&json!({
            "canonical": pred.to_string(),
            "family": pred.family(),
            "lemma": lemma,
            "pos": pos,
            "sense": sense,
            "name": name,
            "underspecified": pred.is_underspecified(),
            "advisories": advisories_json(&checked.advisories),
        }));
        return;
    }

    emit_advisories(&checked.advisories);
    println!("{}", pred.to_string().bold());
    println!("  {} {}", "family:".dimmed(), pred.family());
    let fields = [("lemma", lemma), ("pos", pos), ("sense", sense), ("name", name)];
    for (field, value) in fields {
        if let Some(value) = value {
            println!("  {} {}", format!("{}:", field).dimmed(), value);
        }
    }
    if pred.is_underspecified() {
        println!("  {}", "underspecified".yellow());
    }
}

fn show_sortinfo(format: &str, text: &str) {
    let checked = parse_sortinfo(format, text);
    let sortinfo = &checked.value;

    if is_json(format) {
        print_json(&json!({
            "canonical": sortinfo.to_string(),
            "cvarsort": sortinfo.cvarsort().as_str(),
            "features": sortinfo,
            "advisories": advisories_json(&checked.advisories),
        }));
        return;
    }

    emit_advisories(&checked.advisories);
    println!("{}", sortinfo.to_string().bold());
    for (feature, value) in sortinfo.iter() {
        println!("  {} {}", format!("{}:", feature).dimmed(), value.unwrap_or("-"));
    }
}

fn compare<T, F>(format: &str, left: &str, right: &str, parse: F)
where
    T: dmrs_labels::Subsumption + std::fmt::Display,
    F: Fn(&str, &str) -> Checked<T>,
{
    let left = parse(format, left);
    let right = parse(format, right);
    let rel = relation(&left.value, &right.value);

    if is_json(format) {
        let mut advisories = advisories_json(&left.advisories);
        advisories.extend(advisories_json(&right.advisories));
        print_json(&json!({
            "left": left.value.to_string(),
            "right": right.value.to_string(),
            "relation": rel.as_str(),
            "advisories": advisories,
        }));
        return;
    }

    emit_advisories(&left.advisories);
    emit_advisories(&right.advisories);
    let rel_display = match rel {
        Relation::Equal => rel.as_str().green(),
        Relation::Incomparable => rel.as_str().red(),
        _ => rel.as_str().cyan(),
    };
    println!("{} {} {}", left.value, rel_display, right.value);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pred { text, format } => show_pred(&format, &text),
        Commands::Sortinfo { text, format } => show_sortinfo(&format, &text),
        Commands::Compare {
            kind,
            left,
            right,
            format,
        } => match kind {
            LabelKind::Pred => compare(&format, &left, &right, parse_pred),
            LabelKind::Sortinfo => compare(&format, &left, &right, parse_sortinfo),
        },
    }
}
