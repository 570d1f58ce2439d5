//! Aligned-column rendering for risk tables.

use qbdrisk_core::{RiskRecord, RiskTier};

const CPP_WIDTH: usize = 22;
const CQA_WIDTH: usize = 24;

/// Print a risk table with a header row and per-tier summary.
pub fn print_table(title: &str, table: &[RiskRecord]) {
    println!("=== {} ===", title);
    println!(
        "{:<CPP_WIDTH$} {:<CQA_WIDTH$} {:>3} {:>3} {:>3} {:>5}  Risk",
        "CPP", "CQA", "S", "O", "D", "RPN"
    );

    for record in table {
        println!(
            "{:<CPP_WIDTH$} {:<CQA_WIDTH$} {:>3} {:>3} {:>3} {:>5}  {}",
            record.cpp,
            record.cqa,
            record.severity,
            record.occurrence,
            record.detectability,
            record.rpn,
            record.tier.label(),
        );
    }

    println!();
    print_summary(table);
}

fn print_summary(table: &[RiskRecord]) {
    let count = |tier: RiskTier| table.iter().filter(|r| r.tier == tier).count();
    println!(
        "{} pairs: {} high, {} medium, {} low",
        table.len(),
        count(RiskTier::High),
        count(RiskTier::Medium),
        count(RiskTier::Low),
    );
}
