#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SITE_URL: &str = "https://econified.com";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub tools: PathBuf,
    pub dist: PathBuf,
    pub state: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let tools = root.join("tools");
        let dist = root.join("dist");
        let state = root.join("state");
        fs::create_dir_all(tools.join("definitions")).expect("create tools dir");
        fs::create_dir_all(&dist).expect("create dist dir");

        Self {
            _tmp: tmp,
            root,
            tools,
            dist,
            state,
        }
    }

    /// Command isolated from the caller's `.env` and `ECONIFIED_*` variables.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("econified");
        cmd.current_dir(&self.root)
            .env("ECONIFIED_TOOLS_DIR", &self.tools)
            .env("ECONIFIED_DIST_DIR", &self.dist)
            .env("ECONIFIED_STATE_DIR", &self.state)
            .env("ECONIFIED_SITE_URL", SITE_URL)
            .env("ECONIFIED_RATES_URL", "http://127.0.0.1:9/unreachable")
            .env("ECONIFIED_LOCALE", "en-US")
            .env_remove("ECONIFIED_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_registry(&self, entries: &[(&str, &str)]) {
        let registry: Vec<Value> = entries
            .iter()
            .map(|(slug, status)| json!({ "slug": slug, "status": status, "category": "pay" }))
            .collect();
        write_json(&self.tools.join("registry.json"), &Value::Array(registry));
    }

    pub fn write_definition(&self, slug: &str, definition: &Value) {
        write_json(
            &self.tools.join("definitions").join(format!("{slug}.json")),
            definition,
        );
    }

    pub fn write_dist(&self, name: &str, contents: &str) {
        fs::write(self.dist.join(name), contents).expect("write dist file");
    }

    pub fn read_dist(&self, name: &str) -> String {
        fs::read_to_string(self.dist.join(name)).expect("read dist file")
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).expect("serialize")).expect("write json");
}

pub fn definition() -> Value {
    json!({
        "title": "Hourly to Salary Calculator",
        "description": "Convert an hourly wage into yearly and monthly pay.",
        "inputs": [
            { "name": "hourlyRate", "type": "number", "label": "Hourly rate", "unit": "USD" },
            { "name": "hoursPerWeek", "type": "number", "label": "Hours per week" },
            { "name": "weeksPerYear", "type": "number", "label": "Weeks per year" }
        ],
        "outputs": [
            { "name": "annualSalary", "label": "Annual salary", "unit": "USD" },
            { "name": "monthlySalary", "label": "Monthly salary", "unit": "USD" }
        ],
        "methodSummary": ["Multiply the hourly rate by hours per week and weeks per year"],
        "assumptions": ["Every week is paid"],
        "insights": ["2,080 hours is a full-time year", "Overtime is excluded"],
        "faqs": [
            { "q": "Q1", "a": "A1" }, { "q": "Q2", "a": "A2" }, { "q": "Q3", "a": "A3" },
            { "q": "Q4", "a": "A4" }, { "q": "Q5", "a": "A5" }, { "q": "Q6", "a": "A6" }
        ],
        "clusters": ["pay-conversion"],
        "useCases": ["Compare job offers", "Plan a budget", "Prepare a raise request"]
    })
}

pub fn urlset(locs: &[&str]) -> String {
    let urls: String = locs
        .iter()
        .map(|loc| format!("<url><loc>{loc}</loc><changefreq>weekly</changefreq></url>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{urls}</urlset>"#
    )
}
