use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde_json::json;
use tokio::runtime::Runtime;

use crate::config::AppConfig;
use crate::models::location::find_country;
use crate::models::{AdjustTarget, COUNTRIES};
use crate::prayer_times::{AladhanClient, FetchDisposition, LocationSession, TimingsSource};
use crate::utils::format::{format_signed_minutes, format_time_cell};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub struct TimesOptions<'a> {
    pub country: Option<&'a str>,
    pub city: Option<&'a str>,
    pub adjust: i64,
    pub target: AdjustTarget,
    pub json: bool,
}

pub fn handle_times(config: &AppConfig, runtime: &Runtime, opts: TimesOptions<'_>) -> Result<()> {
    let mut session = LocationSession::new(
        COUNTRIES,
        &config.location.country,
        &config.location.city,
        config.api.method,
    );
    if let Some(country) = opts.country {
        session.select_country(&country.to_uppercase());
    }
    if let Some(city) = opts.city {
        session.select_city(city);
    }

    let tz = config.display.tz()?;
    let now = Utc::now().with_timezone(&tz).naive_local();
    let client = AladhanClient::new(&config.api).context("Building HTTP client")?;

    let ticket = session.begin_fetch(now.date());
    let outcome = runtime.block_on(client.timings(&ticket.request));
    match session.complete_fetch(ticket.token, outcome, now) {
        FetchDisposition::Applied | FetchDisposition::Superseded => {}
        FetchDisposition::Failed(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Fetching prayer times for {}, {}",
                    session.selected_city(),
                    session.selected_country()
                )
            });
        }
    }

    session.apply_bulk_adjustment(opts.adjust, opts.target);

    if opts.json {
        let doc = json!({
            "country": session.selected_country(),
            "city": session.selected_city(),
            "date": now.date().format("%Y-%m-%d").to_string(),
            "adjust": opts.adjust,
            "times": session.table(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!();
    println_colored!(
        GOLD,
        "  Prayer Times · {}, {} ({})",
        session.selected_city(),
        session.selected_country(),
        now.date().format("%d-%m-%Y")
    );
    if opts.adjust != 0 {
        println_colored!(
            DIM,
            "  Adjusted {} ({})",
            format_signed_minutes(opts.adjust),
            opts.target.label()
        );
    }
    println!();
    println_colored!(DIM, "  {:<10}  {:<10}  {}", "", "Adhan", "Iqama");

    for (prayer, entry) in session.table().iter() {
        print!("  {:<10}  ", prayer.display_name());
        print!("{}{:<10}\x1b[0m  ", GREEN, format_time_cell(entry.adhan));
        println_colored!(BLUE, "{}", format_time_cell(entry.iqama));
    }

    if let Some(label) = session.last_fetched() {
        println!();
        println_colored!(DIM, "  Last updated: {}", label);
    }
    println!();
    Ok(())
}

// ─── Locations ───────────────────────────────────────────────────────────────

pub fn handle_locations(country: Option<&str>) -> Result<()> {
    println!();
    match country {
        None => {
            println_colored!(GOLD, "  Countries");
            println!();
            for c in COUNTRIES {
                println!("  {}  {}", c.code, c.name);
            }
        }
        Some(code) => {
            let c = find_country(COUNTRIES, code).ok_or_else(|| {
                anyhow!("Unknown country '{}'. Run `iqama locations` for the list", code)
            })?;
            println_colored!(GOLD, "  {} ({})", c.name, c.code);
            println!();
            for city in c.cities {
                println!("  {}", city);
            }
        }
    }
    println!();
    Ok(())
}

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init(force: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if path.exists() && !force {
        println_colored!(AMBER, "  Config already exists at {:?}. Use --force to overwrite.", path);
        return Ok(());
    }
    AppConfig::default().save_to(&path)?;
    println_colored!(GREEN, "  ✓ Wrote default config to {:?}", path);
    Ok(())
}
