use crate::fetch::FeedClient;
use crate::incident::{format_disruption, format_maintenance, sort_by_date, IncidentRecord};
use serde::Serialize;

mod clock;
mod errors;
mod fetch;
mod incident;

#[cfg(test)]
mod tests;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let mut show_version = false;
    let mut as_json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--version" => show_version = true,
            "--json" => as_json = true,
            other => {
                eprintln!("unknown flag: {other}");
                eprintln!("usage: driftboom [--version] [--json]");
                std::process::exit(2);
            }
        }
    }

    if show_version {
        let commit = option_env!("DRIFTBOOM_COMMIT").unwrap_or("unknown");
        let date = option_env!("DRIFTBOOM_BUILD_DATE").unwrap_or("unknown");
        println!("{{\"version\": \"{VERSION}\", \"commit\": \"{commit}\", \"date\": \"{date}\"}}");
        return;
    }

    let client = FeedClient::new().unwrap_or_else(|e| fatal(&e));
    let tokens = client.bootstrap_tokens().unwrap_or_else(|e| fatal(&e));
    let mut incidents = client.open_incidents(&tokens).unwrap_or_else(|e| fatal(&e));

    sort_by_date(&mut incidents);

    if as_json {
        match render_json(&incidents) {
            Ok(json) => println!("{json}"),
            Err(e) => fatal(&e),
        }
        return;
    }

    for entry in &incidents {
        if entry.planned {
            println!("{}", format_maintenance(entry));
        } else {
            println!("{}", format_disruption(entry));
        }
    }
}

/// Serializes the record list with 4-space indentation (serde_json's
/// default pretty printer uses 2).
fn render_json(incidents: &[IncidentRecord]) -> Result<String, serde_json::Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    incidents.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    eprintln!("❌ {err}");
    std::process::exit(1);
}
