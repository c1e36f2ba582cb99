//! Server-side HTML and plain-text renderings of a [`HomePage`].

use chrono::{DateTime, Utc};

use super::features::{FeatureCard, FEATURES};
use super::time::format_created_at;
use super::HomePage;
use crate::stats::{Applicant, StatItem};

const PAGE_TITLE: &str = "CrimeDB-The Criminal Database";
const PAGE_TAGLINE: &str = "Secure. Efficient. Reliable.";

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
.page { min-height: 100vh; background: #f9fafb; }
.header { background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.05); }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 1.5rem; }
.header .container { display: flex; align-items: center; justify-content: space-between; }
h1 { font-size: 1.875rem; color: #111827; margin: 0; }
h2 { font-size: 1.5rem; color: #111827; margin: 0 0 2rem; }
.muted { color: #4b5563; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.card { background: #fff; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 1.5rem; }
.stat-label { font-size: .875rem; color: #4b5563; margin: 0; }
.stat-value { font-size: 1.875rem; font-weight: 700; color: #111827; margin: .5rem 0 0; }
a.feature { text-decoration: none; color: inherit; }
a.feature .card { height: 100%; text-align: center; transition: box-shadow .3s; }
a.feature .card:hover { box-shadow: 0 10px 15px rgba(0,0,0,.1); }
.icon { display: inline-flex; padding: .75rem; border-radius: 9999px; background: #f9fafb; margin-bottom: 1rem; }
.icon svg { width: 2rem; height: 2rem; fill: none; stroke-width: 2; stroke-linecap: round; stroke-linejoin: round; }
.icon-blue svg { stroke: #3b82f6; } .icon-green svg { stroke: #22c55e; }
.icon-purple svg { stroke: #a855f7; } .icon-orange svg { stroke: #f97316; }
.complaint { display: flex; align-items: center; justify-content: space-between; padding: .75rem 0; border-bottom: 1px solid #e5e7eb; }
.complaint:last-child { border-bottom: 0; }
.badge { font-size: .75rem; padding: .25rem .5rem; border-radius: .25rem; }
.badge-pending { background: #fef9c3; color: #854d0e; }
.badge-resolved { background: #dcfce7; color: #166534; }
.meta { display: flex; align-items: center; gap: 1rem; margin-top: .25rem; font-size: .75rem; color: #6b7280; }
"#;

/// Renders the full landing page, or the empty placeholder while loading.
pub fn render_html(page: &HomePage, now: DateTime<Utc>) -> String {
    if page.is_loading() {
        return document(r#"<div class="page"></div>"#);
    }

    let stats_html: String = page.stats().iter().map(stat_card).collect();
    let features_html: String = FEATURES.iter().map(feature_card).collect();
    let complaints_html: String = page
        .recent_applicants()
        .iter()
        .map(|applicant| complaint_row(applicant, now))
        .collect();

    let body = format!(
        r##"<div class="page">
<div class="header"><div class="container">
  <div>
    <h1>{title}</h1>
    <p class="muted">{tagline}</p>
  </div>
  <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="#2563eb" stroke-width="2"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/></svg>
</div></div>
<div class="container"><div class="grid">{stats_html}</div></div>
<div class="container">
  <h2>Quick Actions</h2>
  <div class="grid">{features_html}</div>
</div>
<div class="container"><div class="card">
  <h2>Recent Complaints</h2>
  <div>{complaints_html}</div>
</div></div>
</div>"##,
        title = PAGE_TITLE,
        tagline = PAGE_TAGLINE,
    );

    document(&body)
}

fn document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>CrimeDB</title>
    <style>{STYLES}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

fn stat_card(stat: &StatItem) -> String {
    format!(
        r#"<div class="card"><p class="stat-label">{}</p><p class="stat-value">{}</p></div>"#,
        escape_html(&stat.label),
        escape_html(&stat.value.to_string()),
    )
}

// Plain anchors: following a card is a full page load.
fn feature_card(card: &FeatureCard) -> String {
    format!(
        r#"<a class="feature" href="{link}"><div class="card">
  <div class="icon icon-{accent}"><svg viewBox="0 0 24 24">{svg}</svg></div>
  <h3>{title}</h3>
  <p class="muted">{description}</p>
</div></a>"#,
        link = card.link,
        accent = card.icon.accent(),
        svg = card.icon.svg_path(),
        title = card.title,
        description = card.description,
    )
}

fn complaint_row(applicant: &Applicant, now: DateTime<Utc>) -> String {
    let badge = if applicant.is_pending() {
        "badge-pending"
    } else {
        "badge-resolved"
    };

    format!(
        r#"<div class="complaint">
  <div>
    <p><strong>Case #{id} - {name}</strong></p>
    <p class="muted">{details}</p>
    <div class="meta"><span class="badge {badge}">{status}</span><span>{phone}</span></div>
  </div>
  <span class="muted">{when}</span>
</div>"#,
        id = applicant.id,
        name = escape_html(&applicant.name),
        details = escape_html(&applicant.complaint_details),
        status = escape_html(&applicant.status),
        phone = escape_html(&applicant.phone),
        when = escape_html(&format_created_at(&applicant.created_at, now)),
    )
}

/// Plain-text snapshot of the page for terminals.
pub fn render_text(page: &HomePage, now: DateTime<Utc>) -> String {
    if page.is_loading() {
        return String::new();
    }

    let mut out = format!("{PAGE_TITLE}\n{PAGE_TAGLINE}\n");

    out.push_str("\nStatistics\n");
    for stat in page.stats() {
        out.push_str(&format!("- {}: {}\n", stat.label, stat.value));
    }

    out.push_str("\nQuick Actions\n");
    for card in &FEATURES {
        out.push_str(&format!(
            "- {} ({}): {}\n",
            card.title, card.link, card.description
        ));
    }

    if page.recent_applicants().is_empty() {
        out.push_str("\nRecent Complaints: none\n");
    } else {
        out.push_str("\nRecent Complaints\n");
        for applicant in page.recent_applicants() {
            out.push_str(&format!(
                "- Case #{} - {} [{}] {} | {} | {}\n",
                applicant.id,
                applicant.name,
                applicant.status,
                applicant.complaint_details,
                applicant.phone,
                format_created_at(&applicant.created_at, now)
            ));
        }
    }

    out
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
