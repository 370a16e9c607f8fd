use clap::{Parser, Subcommand};
use surya_core::{
    angular_diameter_deg, approximate_position_of_sun, distance_au, distance_km,
    precise_position_of_sun, LocalTime, TimeZone,
};
use surya_frames::{
    decimal_degrees_to_dms, decimal_hours_to_hms, mean_obliquity_deg,
};
use surya_time::{calendar_to_jd, jd_to_calendar, local_to_greenwich};

#[derive(Parser)]
#[command(name = "surya", about = "Solar position CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apparent RA/Dec of the Sun for a local civil date/time
    Position {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (hh:mm:ss), default midnight
        #[arg(long, default_value = "00:00:00")]
        time: String,
        /// Zone correction in whole hours (west positive)
        #[arg(long, default_value = "0")]
        zone: i32,
        /// Daylight saving in effect (+1h)
        #[arg(long)]
        dst: bool,
        /// Use the precise longitude series
        #[arg(long)]
        precise: bool,
    },
    /// Julian Date for a civil date/time
    Julian {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time of day (hh:mm:ss), default midnight
        #[arg(long, default_value = "00:00:00")]
        time: String,
    },
    /// Civil calendar date for a Julian Date
    Calendar {
        /// Julian Date
        jd: f64,
    },
    /// Mean obliquity of the ecliptic at a Julian Date
    Obliquity {
        /// Julian Date
        jd: f64,
    },
    /// Earth-Sun distance and solar angular diameter
    Distance {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time of day (hh:mm:ss), default midnight
        #[arg(long, default_value = "00:00:00")]
        time: String,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Convert decimal hours to HMS
    Hms {
        /// Time in decimal hours
        hours: f64,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("expected hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute, second))
}

fn parse_local(date: &str, time: &str) -> LocalTime {
    let parsed = parse_date(date).and_then(|(year, month, day)| {
        parse_time(time).map(|(hour, minute, second)| {
            LocalTime::new(year, month, day, hour, minute, second)
        })
    });
    match parsed {
        Ok(local) => local,
        Err(e) => {
            eprintln!("Invalid date/time: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Position {
            date,
            time,
            zone,
            dst,
            precise,
        } => {
            let local = parse_local(&date, &time);
            let tz = TimeZone::new(zone, if dst { 1 } else { 0 });
            let pos = if precise {
                precise_position_of_sun(&local, &tz)
            } else {
                approximate_position_of_sun(&local, &tz)
            };
            let greenwich = local_to_greenwich(&local, &tz);
            println!(
                "UT {:04}-{:02}-{:02} {:.4}h  JD {:.5}",
                greenwich.year,
                greenwich.month,
                greenwich.day,
                greenwich.ut_hours,
                greenwich.julian_date()
            );
            println!("{pos}");
        }
        Commands::Julian { date, time } => {
            let local = parse_local(&date, &time);
            let jd = calendar_to_jd(
                local.year,
                local.month,
                local.day as f64 + local.decimal_hours() / 24.0,
            );
            println!("{jd:.5}");
        }
        Commands::Calendar { jd } => {
            let (year, month, day) = jd_to_calendar(jd);
            println!("{year:04}-{month:02}-{day:.5}");
        }
        Commands::Obliquity { jd } => {
            let eps = mean_obliquity_deg(jd);
            println!("{eps:.6}°  ({})", decimal_degrees_to_dms(eps));
        }
        Commands::Distance { date, time } => {
            let local = parse_local(&date, &time);
            let jd = local_to_greenwich(&local, &TimeZone::utc()).julian_date();
            println!("distance: {:.6} AU  ({:.0} km)", distance_au(jd), distance_km(jd));
            println!("angular diameter: {:.4}°", angular_diameter_deg(jd));
        }
        Commands::Dms { deg } => {
            println!("{}", decimal_degrees_to_dms(deg));
        }
        Commands::Hms { hours } => {
            println!("{}", decimal_hours_to_hms(hours));
        }
    }
}
