//! Output filename construction
//!
//! Every export writes into the current directory with a name that
//! embeds the sanitized organization name and a UTC timestamp. Formats
//! are fixed per command so repeated runs sort chronologically.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::client::models::AlertStatus;

const DATE: &str = "%Y-%m-%d";
const DATE_MINUTE: &str = "%Y-%m-%d-%H-%M";

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern"));

/// Strip an organization name down to characters safe in a filename.
pub fn sanitize_org_name(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name, "").into_owned()
}

/// `agents-{org}-{date}.csv`
pub fn agents_csv(org: &str, now: DateTime<Utc>) -> String {
    format!("agents-{}-{}.csv", org, now.format(DATE))
}

/// `{org}[-{rule}]-{status}-{stamp}.csv`
pub fn alerts_csv(
    org: &str,
    status: AlertStatus,
    rule_id: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    let stamp = now.format(DATE_MINUTE);
    match rule_id {
        Some(rule_id) => format!("{}-{}-{}-{}.csv", org, rule_id, status.as_str(), stamp),
        None => format!("{}-{}-{}.csv", org, status.as_str(), stamp),
    }
}

/// `EC2Instances-{org}-{monitored|unmonitored}-{stamp}.csv`
pub fn ec2_csv(org: &str, monitored: bool, now: DateTime<Utc>) -> String {
    let kind = if monitored { "monitored" } else { "unmonitored" };
    format!("EC2Instances-{}-{}-{}.csv", org, kind, now.format(DATE_MINUTE))
}

/// `{org}-All-Rules-{stamp}.csv`
pub fn rules_csv(org: &str, now: DateTime<Utc>) -> String {
    format!("{}-All-Rules-{}.csv", org, now.format(DATE_MINUTE))
}

/// `Vulns-{org}[-SecurityNotices]-{date}.csv`
pub fn vulns_csv(org: &str, notices_only: bool, now: DateTime<Utc>) -> String {
    if notices_only {
        format!("Vulns-{}-SecurityNotices-{}.csv", org, now.format(DATE))
    } else {
        format!("Vulns-{}-{}.csv", org, now.format(DATE))
    }
}

/// `{org}-All-Users-{stamp}.csv`
pub fn users_csv(org: &str, now: DateTime<Utc>) -> String {
    format!("{}-All-Users-{}.csv", org, now.format(DATE_MINUTE))
}
