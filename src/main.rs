use std::io;
use std::process;

use clap::Parser;
use serde::Serialize;

use sarq::{Fixture, RangeQuery, ReferenceEngine, NAIVE_MAX_TEXT_LEN};

mod cli;
use cli::{Cli, Commands};

/// Machine-readable outcome of one `verify` run.
#[derive(Serialize)]
struct VerifyReport<'a> {
    fixture: &'a str,
    text_len: usize,
    expected_len: usize,
    candidate_len: usize,
    exact: bool,
    naive: Option<bool>,
    pass: bool,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Author {
            text,
            lower,
            upper,
            output,
        } => run_author(&text, &lower, &upper, &output),
        Commands::Verify { file, naive, json } => run_verify(&file, naive, json),
        Commands::Inspect { file } => run_inspect(&file),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run_author(text: &str, lower: &str, upper: &str, output: &str) -> io::Result<bool> {
    let engine = ReferenceEngine::new(text);
    let fixture = Fixture::from_engine(&engine, text, lower, upper);
    fixture.save(output)?;
    println!(
        "wrote {} with {} expected positions",
        output,
        fixture.expected().len()
    );
    Ok(true)
}

fn run_verify(file: &str, naive: bool, json: bool) -> io::Result<bool> {
    let fixture = Fixture::load(file)?;

    let engine = ReferenceEngine::new(fixture.data());
    let candidate = engine.range_query(fixture.lower_bound(), fixture.upper_bound());

    let exact = fixture.check_exact(&candidate);
    let naive_verdict = if naive {
        if fixture.data().len() > NAIVE_MAX_TEXT_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "naive oracle is limited to texts of {} symbols (fixture has {})",
                    NAIVE_MAX_TEXT_LEN,
                    fixture.data().len()
                ),
            ));
        }
        Some(fixture.check_naive(&candidate))
    } else {
        None
    };
    let pass = exact && naive_verdict.unwrap_or(true);

    if json {
        let report = VerifyReport {
            fixture: file,
            text_len: fixture.data().len(),
            expected_len: fixture.expected().len(),
            candidate_len: candidate.len(),
            exact,
            naive: naive_verdict,
            pass,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        println!("{}", rendered);
    } else {
        println!("fixture:    {}", file);
        println!("candidate:  {} positions", candidate.len());
        println!("exact:      {}", verdict(exact));
        match naive_verdict {
            Some(v) => println!("naive:      {}", verdict(v)),
            None => println!("naive:      skipped"),
        }
        println!("result:     {}", verdict(pass));
    }

    Ok(pass)
}

fn run_inspect(file: &str) -> io::Result<bool> {
    let fixture = Fixture::load(file)?;
    println!("data ({} symbols):  {:?}", fixture.data().len(), fixture.data());
    println!("lower bound:        {:?}", fixture.lower_bound());
    println!("upper bound:        {:?}", fixture.upper_bound());
    println!(
        "expected ({}):       {:?}",
        fixture.expected().len(),
        fixture.expected()
    );
    Ok(true)
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "FAIL"
    }
}
