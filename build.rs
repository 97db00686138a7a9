//! Stamps the CLI version string with the build date and time (UTC).
//! `SOURCE_DATE_EPOCH` pins the stamp for reproducible builds.

use time::macros::format_description;
use time::OffsetDateTime;

fn main() {
    let stamp = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .unwrap_or_else(OffsetDateTime::now_utc);

    let date = stamp
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "unknown".into());
    let time = stamp
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "unknown".into());

    println!("cargo:rustc-env=PARTICLE_EXPORT_BUILD_DATE={date}");
    println!("cargo:rustc-env=PARTICLE_EXPORT_BUILD_TIME={time}");
}
