//! `jwtlens` CLI entry point.
//!
//! Parses args, decodes the token from the argument or stdin, and emits the
//! header/payload panels on stdout. Diagnostics go to stderr; stdout carries
//! only panel or JSON output. Exit codes: 0 success or idle, 1 decode
//! failure, 2 usage error.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use jwtlens::{decode, DecodedToken, RegisteredClaims, TreeState, render_tree};

#[derive(Parser)]
#[command(
    name = "jwtlens",
    version,
    about = "Decode JSON Web Tokens locally and render them as collapsible JSON trees",
    after_help = r#"EXAMPLES
  $ jwtlens eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.sig
  $ pbpaste | jwtlens
  $ jwtlens --depth 1 --color never "$TOKEN"
  $ jwtlens --collapse /roles --json "$TOKEN"

Nothing is verified: jwtlens shows what a token claims, not whether to
believe it."#
)]
struct Cli {
    /// Token to decode; read from stdin when omitted
    token: Option<String>,

    /// Colorize output: auto|always|never
    #[arg(long, default_value = "auto", value_enum)]
    color: ColorMode,

    /// Collapse containers nested deeper than this many levels
    #[arg(long, value_name = "N")]
    depth: Option<usize>,

    /// Collapse the node at a JSON Pointer path (repeatable), e.g. /roles/0
    #[arg(long, value_name = "POINTER")]
    collapse: Vec<String>,

    /// Emit plain JSON ({"header":…,"payload":…,"signature":…}) instead of panels
    #[arg(long)]
    json: bool,

    /// Suppress the header and claims summary lines
    #[arg(long)]
    no_summary: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("jwtlens: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let input = match &cli.token {
        Some(token) => token.clone(),
        None => {
            if io::stdin().is_terminal() {
                eprintln!("jwtlens: no token given and stdin is a terminal (try: jwtlens <TOKEN>)");
                return Ok(ExitCode::from(2));
            }
            read_token_from_stdin()?
        }
    };

    let decoded = match decode(&input)? {
        Some(decoded) => decoded,
        // Blank input is the idle state: no output, no error
        None => return Ok(ExitCode::SUCCESS),
    };

    if cli.json {
        print_json(&decoded)?;
        return Ok(ExitCode::SUCCESS);
    }

    let use_color = cli.color.enabled();
    let base_state = collapse_state(&cli.collapse);

    print_panel("Header", decoded.header(), &cli, &base_state, use_color);
    println!();
    print_panel("Payload", decoded.payload(), &cli, &base_state, use_color);
    println!();
    print_signature(&decoded);

    if !cli.no_summary {
        print_summary(&decoded);
    }

    Ok(ExitCode::SUCCESS)
}

fn read_token_from_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    // Strip the line transport's trailing newline, nothing else
    let trimmed = input
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&input);
    Ok(trimmed.to_string())
}

fn collapse_state(pointers: &[String]) -> TreeState {
    let mut state = TreeState::new();
    for pointer in pointers {
        state.collapse(pointer);
    }
    state
}

fn print_panel(
    title: &str,
    value: &serde_json::Value,
    cli: &Cli,
    base_state: &TreeState,
    use_color: bool,
) {
    let mut state = base_state.clone();
    if let Some(depth) = cli.depth {
        state.collapse_deeper_than(value, depth);
    }

    if use_color {
        println!("\u{1b}[1m{title}\u{1b}[0m");
    } else {
        println!("{title}");
    }
    println!("{}", render_tree(value, &state, use_color));
}

fn print_signature(decoded: &DecodedToken) {
    match decoded.signature() {
        Some(sig) if !sig.is_empty() => {
            println!("Signature  present ({} bytes, not verified)", sig.len());
        }
        Some(_) => println!("Signature  empty"),
        None => println!("Signature  none (unsigned token)"),
    }
}

fn print_summary(decoded: &DecodedToken) {
    let header = decoded.header_info();
    let mut fields = Vec::new();
    if let Some(alg) = header.algorithm_str() {
        fields.push(format!("alg {alg}"));
    }
    if let Some(typ) = &header.token_type {
        fields.push(format!("typ {typ}"));
    }
    if let Some(kid) = header.key_id() {
        fields.push(format!("kid {kid}"));
    }
    if !fields.is_empty() {
        println!();
        println!("{}", fields.join("  "));
    }

    let claims = RegisteredClaims::from_value(decoded.payload());
    if !claims.is_empty() {
        println!();
        for line in claims.summary_lines() {
            println!("{line}");
        }
    }
}

fn print_json(decoded: &DecodedToken) -> serde_json::Result<()> {
    let doc = json!({
        "header": decoded.header(),
        "payload": decoded.payload(),
        "signature": decoded.signature(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
