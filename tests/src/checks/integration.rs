#![cfg(test)]
use std::sync::{Arc, Mutex};

use hostcheck_common::network::target::Identity;
use hostcheck_common::outcome::CheckReport;
use hostcheck_common::report::LineRecorder;
use hostcheck_core::checks::CheckService;

use crate::fakes::{FakeProber, FakeResolver};

const SEPARATOR: &str = "==================================================";
const SAME_HOST_LINE: &str = "FQDN is the same as hostname: host.local";

struct Run {
    report: CheckReport,
    lines: Vec<String>,
    calls: Vec<String>,
}

async fn run(identity: Identity, resolver: FakeResolver, prober: FakeProber) -> Run {
    let calls: Arc<Mutex<Vec<String>>> = prober.calls.clone();
    let service = CheckService::new(Box::new(resolver), Box::new(prober));
    let mut out = LineRecorder::new();

    let report = service.run(&identity, &mut out).await;

    let calls = calls.lock().unwrap().clone();
    Run {
        report,
        lines: out.lines,
        calls,
    }
}

#[tokio::test]
async fn single_name_all_reachable() {
    let run = run(
        Identity::new("host.local", "host.local"),
        FakeResolver::default().with("host.local", &["192.168.1.5"]),
        FakeProber::default(),
    )
    .await;

    assert_eq!(
        run.lines,
        vec![
            "Hostname: host.local",
            "Ping to hostname host.local: successful",
            "",
            "IP addresses for host.local:",
            "  192.168.1.5",
            "",
            "Pinging IP addresses for host.local:",
            "  Ping to 192.168.1.5: successful",
            "",
            SEPARATOR,
            "",
            SAME_HOST_LINE,
            "",
            "All checks passed.",
        ]
    );
    assert_eq!(run.report.exit_status(), 0);
}

#[tokio::test]
async fn identical_fqdn_skips_second_pass() {
    let run = run(
        Identity::new("host.local", "host.local"),
        FakeResolver::default().with("host.local", &["192.168.1.5", "fe80::1"]),
        FakeProber::default(),
    )
    .await;

    assert_eq!(run.lines.iter().filter(|l| *l == SAME_HOST_LINE).count(), 1);
    assert_eq!(run.report.outcomes.len(), 1);
    assert_eq!(run.calls, vec!["host.local", "192.168.1.5", "fe80::1"]);
    assert!(!run.lines.iter().any(|l| l.starts_with("FQDN: ")));
}

#[tokio::test]
async fn distinct_fqdn_gets_its_own_block() {
    let run = run(
        Identity::new("host", "host.example.com"),
        FakeResolver::default()
            .with("host", &["127.0.1.1"])
            .with("host.example.com", &["203.0.113.7", "2001:db8::7"]),
        FakeProber::default(),
    )
    .await;

    let tail: Vec<&str> = run
        .lines
        .iter()
        .skip_while(|l| *l != SEPARATOR)
        .map(String::as_str)
        .collect();
    assert_eq!(
        tail,
        vec![
            SEPARATOR,
            "",
            "FQDN: host.example.com",
            "Ping to fqdn host.example.com: successful",
            "",
            "IP addresses for host.example.com:",
            "  203.0.113.7",
            "  2001:db8::7",
            "",
            "Pinging IP addresses for host.example.com:",
            "  Ping to 203.0.113.7: successful",
            "  Ping to 2001:db8::7: successful",
            "",
            "All checks passed.",
        ]
    );
    assert_eq!(
        run.calls,
        vec!["host", "127.0.1.1", "host.example.com", "203.0.113.7", "2001:db8::7"]
    );
    assert_eq!(run.report.outcomes.len(), 2);
    assert_eq!(run.report.exit_status(), 0);
}

#[tokio::test]
async fn unresolvable_fqdn_fails_without_address_probes() {
    let run = run(
        Identity::new("host", "host.example.com"),
        FakeResolver::default().with("host", &["127.0.1.1"]),
        FakeProber::default(),
    )
    .await;

    let fqdn_block: Vec<&String> = run.lines.iter().skip_while(|l| *l != SEPARATOR).collect();
    assert!(fqdn_block.iter().any(|l| *l == "No IP addresses found for host.example.com"));
    assert!(!fqdn_block.iter().any(|l| l.starts_with("  Ping to")));
    assert!(!fqdn_block.iter().any(|l| l.starts_with("IP addresses for")));
    assert_eq!(run.calls, vec!["host", "127.0.1.1", "host.example.com"]);

    assert!(run.report.outcomes[0].passed());
    assert!(!run.report.outcomes[1].passed());
    assert_eq!(run.report.exit_status(), 1);
    assert_eq!(
        run.lines.last().unwrap(),
        "Some checks failed. Exiting with status code 1."
    );
}

#[tokio::test]
async fn one_failed_address_fails_the_run() {
    let run = run(
        Identity::new("host", "host.example.com"),
        FakeResolver::default()
            .with("host", &["127.0.1.1"])
            .with("host.example.com", &["203.0.113.7", "203.0.113.8"]),
        FakeProber::default().unreachable("203.0.113.8"),
    )
    .await;

    assert!(run.lines.contains(&"  Ping to 203.0.113.8: failed".to_string()));
    assert!(run.report.outcomes[0].passed());
    assert!(!run.report.outcomes[1].passed());
    assert_eq!(run.report.exit_status(), 1);
}

#[tokio::test]
async fn failed_name_probe_still_probes_addresses() {
    let run = run(
        Identity::new("host.local", "host.local"),
        FakeResolver::default().with("host.local", &["192.168.1.5"]),
        FakeProber::default().unreachable("host.local"),
    )
    .await;

    assert_eq!(run.lines[1], "Ping to hostname host.local: failed");
    assert!(run.lines.contains(&"  Ping to 192.168.1.5: successful".to_string()));
    assert_eq!(run.calls, vec!["host.local", "192.168.1.5"]);
    assert_eq!(run.report.exit_status(), 1);
}

#[tokio::test]
async fn duplicate_records_are_probed_once() {
    let run = run(
        Identity::new("host.local", "host.local"),
        FakeResolver::default().with(
            "host.local",
            &["192.168.1.5", "192.168.1.5", "::1", "192.168.1.5", "::1"],
        ),
        FakeProber::default(),
    )
    .await;

    assert_eq!(run.calls, vec!["host.local", "192.168.1.5", "::1"]);
    assert_eq!(run.report.outcomes[0].addresses.len(), 2);
    assert_eq!(run.lines.iter().filter(|l| *l == "  192.168.1.5").count(), 1);
}

#[tokio::test]
async fn unresolvable_hostname_still_checks_fqdn() {
    let run = run(
        Identity::new("host", "host.example.com"),
        FakeResolver::default().with("host.example.com", &["203.0.113.7"]),
        FakeProber::default(),
    )
    .await;

    assert!(run.lines.contains(&"No IP addresses found for host".to_string()));
    assert!(run.lines.contains(&"  Ping to 203.0.113.7: successful".to_string()));
    assert_eq!(run.report.outcomes.len(), 2);
    assert_eq!(run.report.exit_status(), 1);
}
