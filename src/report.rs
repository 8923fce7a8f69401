use std::collections::HashSet;

use crate::records::DnsHistory;

/// Render the history report for `domain` as output lines.
///
/// An empty history renders the single "no history" line. Record and value
/// order from the API is preserved as-is; the closing summary lists each IP
/// once, in first-occurrence order.
pub fn render_history(history: &DnsHistory, domain: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if history.records.is_empty() {
        lines.push(format!("No history found for {}", domain));
        return lines;
    }

    lines.push(format!("DNS A Record History for {}:", domain));
    lines.push("-----------------------------------".to_string());

    let mut seen = HashSet::new();
    let mut unique_ips = Vec::new();

    for record in &history.records {
        for value in &record.values {
            if seen.insert(value.ip.clone()) {
                unique_ips.push(value.ip.clone());
            }
            lines.push(format!(
                "IP: {:<15} | First Seen: {} | Last Seen: {}",
                value.ip, record.first_seen, record.last_seen
            ));
        }
    }

    // Records can carry empty value lists; no summary in that case.
    if !unique_ips.is_empty() {
        lines.push(String::new());
        lines.push("Summary of unique IP addresses:".to_string());
        for ip in &unique_ips {
            lines.push(format!("- {}", ip));
        }
    }

    lines
}

pub fn print_history(history: &DnsHistory, domain: &str) {
    for line in render_history(history, domain) {
        println!("{}", line);
    }
}
