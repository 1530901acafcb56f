//! Custom panic hook for structured crash reports.
//!
//! A crash report names the pricefilter version, the phase that was
//! running and the input being processed, followed by the panic message
//! and location.

use super::context::{get_current_context, RunContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in main().
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    eprintln!("════════════════════ PRICEFILTER CRASH REPORT ════════════════════");
    eprintln!("  Version: {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!(
        "  Time: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    eprintln!("  PANIC: {}", truncate(&extract_panic_message(info), 200));

    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }

    for line in context_lines(&context) {
        eprintln!("  {line}");
    }

    let current_span = Span::current();
    if let Some(metadata) = current_span.metadata() {
        eprintln!("  Span: {}", metadata.name());
    }

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("══════════════════════════════════════════════════════════════════");
}

fn context_lines(context: &RunContext) -> Vec<String> {
    let phase = context
        .phase
        .map(|p| p.to_string())
        .unwrap_or_else(|| "(not set - crash occurred before any phase started)".to_string());

    let mut lines = vec![format!("Phase: {phase}")];
    if let Some(input) = &context.input {
        lines.push(format!("Input: {}", input.display()));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
