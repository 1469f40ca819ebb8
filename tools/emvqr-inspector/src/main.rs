use std::process::ExitCode;

use clap::Parser;
use emvqr::{check_crc, decode_tree, records, Node};
use tracing_subscriber::EnvFilter;

/// Print the record tree of an EMVCo QR payload and its checksum status.
#[derive(Parser, Debug)]
#[command(name = "emvqr-inspector", version, about)]
struct Args {
    /// Raw payload text as scanned from the code.
    payload: String,

    /// Only list top-level records, without expanding nested templates.
    #[arg(long)]
    flat: bool,

    /// Log debug events to stderr (RUST_LOG overrides this).
    #[arg(short, long)]
    verbose: bool,
}

fn render_nodes(nodes: &[Node<'_>], depth: usize, out: &mut String) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        match node {
            Node::Literal { tag, value } => {
                out.push_str(&format!("{}{} [{:02}] {}\n", indent, tag, value.len(), value));
            }
            Node::Nested { tag, raw, children } => {
                out.push_str(&format!("{}{} [{:02}]\n", indent, tag, raw.len()));
                render_nodes(children, depth + 1, out);
            }
        }
    }
}

/// Renders the payload report; returns `None` when the payload is malformed.
fn inspect(payload: &str, flat: bool) -> Option<String> {
    let mut out = String::new();

    if flat {
        let mut iter = records(payload);
        for record in iter.by_ref() {
            out.push_str(&format!("{} [{:02}] {}\n", record.tag, record.value.len(), record.value));
        }
        if iter.is_malformed() {
            return None;
        }
    } else {
        let nodes = decode_tree(payload)?;
        render_nodes(&nodes, 0, &mut out);
    }

    let status = if check_crc(payload) { "valid" } else { "invalid" };
    out.push_str(&format!("checksum: {}\n", status));
    Some(out)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match inspect(&args.payload, args.flat) {
        Some(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: payload is not a well-formed record sequence");
            ExitCode::from(1)
        }
    }
}
