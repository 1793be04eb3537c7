use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("skyvoyage"));
    cmd.env("SKYVOYAGE_PREFS", "/nonexistent/skyvoyage/prefs.json")
        .env_remove("RUST_LOG");
    cmd
}

fn search() -> Command {
    let mut c = cmd();
    c.args(["search", "-f", "JFK", "-t", "LAX", "-d", "2026-04-01", "--delay-ms", "0"]);
    c
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("valid JSON")
}

#[test]
fn top_level_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SkyVoyage flight deals"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("offers"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn search_help_shows_filters_and_defaults() {
    cmd()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-f, --from <PLACE>"))
        .stdout(predicate::str::contains("--min-price <N>"))
        .stdout(predicate::str::contains("--stops <nonstop,1stop,2stops>"))
        .stdout(predicate::str::contains("--traveler <CATEGORY:NAME>"))
        .stdout(predicate::str::contains("[default: economy]"))
        .stdout(predicate::str::contains("[default: 1500]"));
}

#[test]
fn no_subcommand_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn missing_origin_fails() {
    cmd()
        .args(["search", "-t", "LAX", "-d", "2026-04-01", "--delay-ms", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("origin is required"));
}

#[test]
fn invalid_date_has_example() {
    cmd()
        .args(["search", "-f", "JFK", "-t", "LAX", "-d", "01-04-2026"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn zero_adults_rejected() {
    search()
        .args(["--adults", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("adults must be between 1 and 9"));
}

#[test]
fn invalid_cabin_class() {
    search()
        .args(["--cabin", "luxury"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cabin class"));
}

#[test]
fn search_lists_all_offers() {
    search()
        .assert()
        .success()
        .stdout(predicate::str::contains("5 of 5 flights"))
        .stdout(predicate::str::contains("Delta Airlines"))
        .stdout(predicate::str::contains("Only 2 seats left"))
        .stderr(predicate::str::contains("Flight search completed!"));
}

#[test]
fn compact_price_band() {
    let output = search()
        .args(["--min-price", "270", "--max-price", "360", "--compact"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let prices: Vec<&str> = stdout
        .lines()
        .map(|l| l.split(" | ").next().unwrap_or(""))
        .collect();
    assert_eq!(prices, vec!["$320", "$280", "$350"]);
}

#[test]
fn json_nonstop_filter() {
    let output = search()
        .args(["--stops", "nonstop", "--json"])
        .assert()
        .success();
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed["total"], 5);
    assert_eq!(parsed["shown"], 3);
    let ids: Vec<&str> = parsed["offers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["fl-001", "fl-003", "fl-004"]);
}

#[test]
fn json_mode_is_quiet_on_stderr() {
    search()
        .arg("--json")
        .assert()
        .success()
        .stderr(predicate::str::contains("Flight search completed!").not());
}

#[test]
fn top_sorts_by_price() {
    let output = search().args(["--top", "2", "--json"]).assert().success();
    let parsed = stdout_json(output.get_output());
    let prices: Vec<&str> = parsed["offers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["price"].as_str().unwrap())
        .collect();
    assert_eq!(prices, vec!["$260", "$280"]);
}

#[test]
fn travelers_fill_name_slots() {
    let output = search()
        .args([
            "--adults",
            "2",
            "--children",
            "1",
            "--traveler",
            "adult:Jane Doe",
            "--traveler",
            "child:Sam Doe",
            "--json",
        ])
        .assert()
        .success();
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed["passengers"]["adults"][0], "Jane Doe");
    assert_eq!(parsed["passengers"]["adults"][1], "");
    assert_eq!(parsed["passengers"]["children"][0], "Sam Doe");
}

#[test]
fn too_many_travelers_rejected() {
    search()
        .args(["--traveler", "adult:A", "--traveler", "adult:B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no adults name slot at position 1"));
}

#[test]
fn filter_with_no_matches() {
    search()
        .args(["--airlines", "qantas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No flights found"))
        .stdout(predicate::str::contains("Known airlines: delta (Delta Airlines)"))
        .stderr(predicate::str::contains("No flights match the selected filters."));
}

#[test]
fn json_mode_error_is_structured() {
    let output = cmd()
        .args(["search", "-f", "JFK", "-t", "LAX", "-d", "2026-02-30", "--json"])
        .assert()
        .code(2);
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed["error"]["kind"], "invalid_date");
}

#[test]
fn unknown_stop_token_is_structured_error() {
    let output = search().args(["--stops", "3stops", "--json"]).assert().code(2);
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed["error"]["kind"], "invalid_token");
}

#[test]
fn offers_active_and_expired() {
    cmd()
        .arg("offers")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMER15"))
        .stdout(predicate::str::contains("SPRING18").not());
    cmd()
        .args(["offers", "--expired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SPRING18"));
}

#[test]
fn destinations_json() {
    let output = cmd().args(["destinations", "--json"]).assert().success();
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed.as_array().unwrap().len(), 4);
    assert_eq!(parsed[2]["name"], "Tokyo");
}

#[test]
fn booking_lookup_by_reference() {
    cmd()
        .args(["booking", "--reference", "B-1001", "--last-name", "doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York → Paris"));
}

#[test]
fn booking_lookup_without_match() {
    cmd()
        .args(["booking", "--email", "nobody@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No booking found"));
}

#[test]
fn booking_requires_a_key() {
    cmd()
        .arg("booking")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--reference with --last-name"));
}

#[test]
fn subscribe_confirms() {
    cmd()
        .args(["subscribe", "--email", "jane@example.com", "--delay-ms", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("subscribed to our newsletter"));
}

#[test]
fn subscribe_rejects_bad_email() {
    cmd()
        .args(["subscribe", "--email", "jane", "--delay-ms", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid email address"));
}

#[test]
fn lang_set_persists() {
    let dir = tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");
    let prefs = prefs.to_str().unwrap();

    cmd()
        .args(["--prefs", prefs, "lang", "set", "ur"])
        .assert()
        .success();
    cmd()
        .args(["--prefs", prefs, "lang", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ur"));
}

#[test]
fn lang_set_rejects_unknown() {
    let dir = tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");
    cmd()
        .args(["--prefs", prefs.to_str().unwrap(), "lang", "set", "fr"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported language"));
    assert!(!prefs.exists());
}

#[test]
fn saved_language_translates_headers() {
    let dir = tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");
    std::fs::write(&prefs, r#"{"language":"hi"}"#).unwrap();

    cmd()
        .args(["--prefs", prefs.to_str().unwrap()])
        .args(["search", "-f", "JFK", "-t", "LAX", "-d", "2026-04-01", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("से"));
}

#[test]
fn admin_dashboard_json() {
    let output = cmd().args(["admin", "--json"]).assert().success();
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed["total_users"], 5);
    assert_eq!(parsed["revenue"], 1750);
}

#[test]
fn support_ask_routes_by_keyword() {
    cmd()
        .args(["support", "ask", "How much LUGGAGE can I bring?", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Baggage allowance varies"));
}

#[test]
fn support_ask_falls_back() {
    cmd()
        .args(["support", "ask", "hello there", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contact our customer support team"));
}

#[test]
fn support_ask_rejects_blank() {
    cmd()
        .args(["support", "ask", "  ", "--delay-ms", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("message is required"));
}

#[test]
fn support_faq_json() {
    let output = cmd().args(["support", "faq", "--json"]).assert().success();
    let parsed = stdout_json(output.get_output());
    assert_eq!(parsed.as_array().unwrap().len(), 4);
    assert_eq!(parsed[1]["question"], "What is the baggage allowance?");
}

#[test]
fn support_greets_in_saved_language() {
    let dir = tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");
    std::fs::write(&prefs, r#"{"language":"hi"}"#).unwrap();

    cmd()
        .args(["--prefs", prefs.to_str().unwrap(), "support"])
        .assert()
        .success()
        .stdout(predicate::str::contains("नमस्ते"));
}

#[test]
fn admin_add_offer_confirms() {
    cmd()
        .args([
            "admin",
            "add-offer",
            "--title",
            "Autumn Sale",
            "--description",
            "Fares to Europe",
            "--discount",
            "20%",
            "--code",
            "AUTUMN20",
            "--expiry",
            "2026-11-30",
            "--delay-ms",
            "0",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "New offer \"Autumn Sale\" has been added successfully.",
        ));
}

#[test]
fn admin_add_offer_rejects_bad_expiry() {
    cmd()
        .args([
            "admin",
            "add-offer",
            "--title",
            "Autumn Sale",
            "--description",
            "Fares to Europe",
            "--discount",
            "20%",
            "--code",
            "AUTUMN20",
            "--expiry",
            "30-11-2026",
            "--delay-ms",
            "0",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn admin_add_destination_confirms() {
    cmd()
        .args([
            "admin",
            "add-destination",
            "--name",
            "Rome",
            "--country",
            "Italy",
            "--price",
            "$399",
            "--image-url",
            "https://img.skyvoyage.example/rome.jpg",
            "--delay-ms",
            "0",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("New destination \"Rome, Italy\""));
}
