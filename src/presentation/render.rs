use crate::domain::model::{
    ClickListResponse, HealthResponse, ServiceInfo, ShortenResponse, StatsResponse,
};
use crate::infrastructure::config::ClientSettings;
use crate::presentation::theme::Theme;
use std::fmt::Write;

const TOP_N: usize = 5;

pub fn format_shorten(result: &ShortenResponse, theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(output, "{}", (theme.link)(&result.short_url)).ok();
    writeln!(
        output,
        "  {} {}",
        (theme.label)("original:"),
        result.original_url
    )
    .ok();
    writeln!(output, "  {} {}", (theme.label)("code:"), result.short_code).ok();
    writeln!(
        output,
        "  {} {}",
        (theme.label)("created:"),
        result.created_at.format("%Y-%m-%d %H:%M:%S %:z")
    )
    .ok();
    output
}

fn section<'a>(
    output: &mut String,
    theme: &Theme,
    title: &str,
    rows: impl Iterator<Item = (&'a str, i64)>,
) {
    let rows: Vec<_> = rows.take(TOP_N).collect();
    if rows.is_empty() {
        return;
    }

    writeln!(output).ok();
    writeln!(output, "  {}", (theme.title)(title)).ok();
    for (i, (key, count)) in rows.into_iter().enumerate() {
        let key = if key.is_empty() { "-" } else { key };
        writeln!(
            output,
            "  {}. {}  {}",
            (theme.idx)(&(i + 1).to_string()),
            key,
            (theme.count)(&count.to_string())
        )
        .ok();
    }
}

pub fn format_stats(stats: &StatsResponse, theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(output, "{}", (theme.title)(&stats.short_code)).ok();
    writeln!(output, "  {} {}", (theme.label)("original:"), stats.original_url).ok();
    writeln!(
        output,
        "  {} {}",
        (theme.label)("created:"),
        stats.created_at.format("%Y-%m-%d %H:%M:%S %:z")
    )
    .ok();
    writeln!(
        output,
        "  {} {}",
        (theme.label)("clicks:"),
        (theme.count)(&stats.total_clicks.to_string())
    )
    .ok();

    let cutoff = "─".repeat(40);
    writeln!(output, "  {}", (theme.line)(&cutoff)).ok();

    section(
        &mut output,
        theme,
        "Devices",
        stats
            .device_type_stats
            .iter()
            .map(|s| (s.device_type.as_str(), s.count)),
    );
    section(
        &mut output,
        theme,
        "Operating systems",
        stats.os_stats.iter().map(|s| (s.os.as_str(), s.count)),
    );
    section(
        &mut output,
        theme,
        "Locations",
        stats
            .location_stats
            .iter()
            .map(|s| (s.location.as_str(), s.count)),
    );
    section(
        &mut output,
        theme,
        "Referrers",
        stats
            .referrer_stats
            .iter()
            .map(|s| (s.referrer.as_str(), s.count)),
    );
    section(
        &mut output,
        theme,
        "User agents",
        stats
            .device_stats
            .iter()
            .map(|s| (s.user_agent.as_str(), s.count)),
    );
    section(
        &mut output,
        theme,
        "IP addresses",
        stats.ip_stats.iter().map(|s| (s.ip_address.as_str(), s.count)),
    );

    if !stats.time_distribution.is_empty() {
        writeln!(output).ok();
        writeln!(output, "  {}", (theme.title)("Timeline")).ok();
        for bucket in &stats.time_distribution {
            writeln!(
                output,
                "  {:>16}  {}",
                bucket.time,
                (theme.count)(&bucket.count.to_string())
            )
            .ok();
        }
    }

    output
}

pub fn format_clicks(list: &ClickListResponse, theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{} ({} clicks)",
        (theme.title)(&list.short_code),
        (theme.count)(&list.total.to_string())
    )
    .ok();

    for (i, click) in list.clicks.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}  {}  {}  {}",
            (theme.idx)(&(i + 1).to_string()),
            click.clicked_at,
            click.ip_address,
            click.location,
            click.device_type
        )
        .ok();
    }
    output
}

pub fn format_health(health: &HealthResponse, theme: &Theme) -> String {
    let status = if health.is_ok() {
        (theme.ok)(&health.status)
    } else {
        (theme.bad)(&health.status)
    };
    if health.message.is_empty() {
        format!("{}\n", status)
    } else {
        format!("{} {}\n", status, health.message)
    }
}

pub fn format_info(info: &ServiceInfo, theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(output, "{} {}", (theme.title)(&info.message), info.version).ok();
    for (endpoint, description) in &info.endpoints {
        writeln!(output, "  {}  {}", (theme.label)(endpoint), description).ok();
    }
    output
}

pub fn format_settings(settings: &ClientSettings, theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(output, "  {} {}", (theme.label)("base url:"), settings.base_url).ok();
    writeln!(
        output,
        "  {} {}ms",
        (theme.label)("timeout:"),
        settings.timeout.as_millis()
    )
    .ok();
    for (name, value) in &settings.default_headers {
        writeln!(
            output,
            "  {} {}: {}",
            (theme.label)("header:"),
            name,
            value.to_str().unwrap_or("<binary>")
        )
        .ok();
    }
    output
}
