use crate::errors::SiteError;
use crate::models::{BookingRecord, BookingStatus, DashboardStats};
use askama::Template;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// How often the admin dashboard re-reads the booking log.
pub const REFRESH_INTERVAL_MS: u32 = 5000;

pub const NO_BOOKINGS_HTML: &str = r#"<div class="no-bookings">
  <div class="no-bookings-icon">📅</div>
  <div>No booking requests yet</div>
  <div class="no-bookings-hint">Bookings will appear here automatically</div>
</div>"#;

pub fn compute_stats(records: &[BookingRecord], business: &str) -> DashboardStats {
    compute_stats_at(records, business, &Local::now())
}

/// `today` compares calendar dates in `now`'s time zone; `this_week` is the
/// rolling seven days ending at `now`.
pub fn compute_stats_at<Tz: TimeZone>(
    records: &[BookingRecord],
    business: &str,
    now: &DateTime<Tz>,
) -> DashboardStats {
    let today = now.date_naive();
    let week_ago = now.with_timezone(&Utc) - Duration::days(7);

    let mut stats = DashboardStats::default();
    for record in for_business(records, business) {
        stats.total += 1;
        if record.created_at.with_timezone(&now.timezone()).date_naive() == today {
            stats.today += 1;
        }
        if record.created_at >= week_ago {
            stats.this_week += 1;
        }
        match record.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Completed => stats.completed += 1,
        }
    }
    stats
}

#[derive(Template)]
#[template(path = "booking_list.html")]
struct BookingListTemplate<'a> {
    items: Vec<ListItem<'a>>,
}

struct ListItem<'a> {
    record: &'a BookingRecord,
    status: &'static str,
    label: String,
    requested: String,
}

/// Renders the admin booking list, newest first. "Requested" is shown in
/// the local time zone, like `toLocaleString()` in the dashboard script.
pub fn render_list(records: &[BookingRecord], business: &str) -> Result<String, SiteError> {
    let mut bookings: Vec<&BookingRecord> = for_business(records, business).collect();
    if bookings.is_empty() {
        return Ok(NO_BOOKINGS_HTML.to_string());
    }
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let items = bookings
        .into_iter()
        .map(|record| ListItem {
            record,
            status: record.status.as_str(),
            label: record.status.as_str().to_uppercase(),
            requested: requested_at(record, &Local),
        })
        .collect();
    Ok(BookingListTemplate { items }.render()?)
}

fn requested_at<Tz: TimeZone>(record: &BookingRecord, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    record
        .created_at
        .with_timezone(zone)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn for_business<'a>(
    records: &'a [BookingRecord],
    business: &'a str,
) -> impl Iterator<Item = &'a BookingRecord> {
    records.iter().filter(move |record| record.business == business)
}
