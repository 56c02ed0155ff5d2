#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{NaiveDate, NaiveDateTime};

pub fn notekeeper_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notekeeper").unwrap();
    cmd.env_remove("NOTEKEEPER_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn at(day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}
