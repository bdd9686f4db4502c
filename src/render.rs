use chrono::Datelike;

use crate::config::SiteConfig;
use crate::designs;
use crate::document::Document;
use crate::models::profile::{About, Experience, Profile, SkillCategory};

/// Separator between a timeline entry's start and end dates, as the live
/// site has always shown it.
const DATE_SEPARATOR: &str = " â€” ";

const DEFAULT_SKILL_ICON: &str = "&#9733;";

/// Renders the full page. Without a profile the design's static markup is
/// served as-is; interactions are wired either way.
pub fn render_page(profile: Option<&Profile>, config: &SiteConfig) -> String {
    let mut doc = designs::portfolio::default_document();
    if let Some(profile) = profile {
        render_site(profile, &mut doc, chrono::Local::now().year());
    }
    designs::portfolio::page_shell(&doc, config)
}

/// Write every profile field into its element. Missing fields and missing
/// elements are skipped; running it twice gives the same document.
pub fn render_site(data: &Profile, doc: &mut Document, year: i32) {
    // Hero
    let hero = data.hero.as_ref();
    doc.set_text("hero-name", data.name.as_deref());
    doc.set_text("hero-headline", hero.and_then(|h| h.headline.as_deref()));
    doc.set_text("hero-subheadline", hero.and_then(|h| h.subheadline.as_deref()));

    // About
    if let Some(about) = &data.about {
        doc.set_inner_html("about-text", about_html(about));
    }

    // Experience
    if let Some(jobs) = &data.experience {
        doc.set_inner_html("timeline", jobs.iter().map(timeline_item).collect());
    }

    // Skills
    if let Some(skills) = &data.skills {
        doc.set_inner_html("skills-grid", skills.iter().map(skill_category).collect());
    }

    // Contact
    doc.set_text("contact-email-text", data.email.as_deref());
    let mailto = data.email.as_ref().map(|e| format!("mailto:{}", e));
    doc.set_attr("contact-email-link", "href", mailto.as_deref());
    doc.set_attr("contact-linkedin-link", "href", data.linkedin.as_deref());

    // Footer
    doc.set_text("footer-year", Some(year.to_string().as_str()));
    doc.set_text("footer-name", data.name.as_deref());
}

fn about_html(about: &About) -> String {
    let mut html = String::new();
    if let Some(summary) = &about.summary {
        html.push_str(&format!("<p>{}</p>", html_escape(summary)));
    }
    for h in &about.highlights {
        html.push_str(&format!("<p>{}</p>", html_escape(h)));
    }
    html
}

fn timeline_item(job: &Experience) -> String {
    format!(
        r#"
      <div class="timeline-item fade-in">
        <div class="timeline-dot"></div>
        <div class="timeline-card">
          <div class="timeline-header">
            <div class="timeline-role">
              <h3>{title}</h3>
              <span class="timeline-company">{company}</span>
            </div>
            <div class="timeline-meta">
              <div class="timeline-date">{start}{sep}{end}</div>
              <div class="timeline-location">{location}</div>
              <span class="timeline-badge">{work_type}</span>
            </div>
          </div>
          <p class="timeline-desc">{description}</p>
        </div>
      </div>
    "#,
        title = html_escape(&job.title),
        company = html_escape(&job.company),
        start = html_escape(&job.start_date),
        sep = DATE_SEPARATOR,
        end = html_escape(&job.end_date),
        location = html_escape(&job.location),
        work_type = html_escape(&job.work_type),
        description = html_escape(&job.description),
    )
}

fn skill_category(cat: &SkillCategory) -> String {
    let tags: String = cat
        .skills
        .iter()
        .map(|s| format!("<span class=\"skill-tag\">{}</span>", html_escape(s)))
        .collect();
    let label = match skill_label(&cat.key) {
        Some(l) => l.to_string(),
        None => html_escape(&cat.key),
    };
    format!(
        r#"
      <div class="skill-category fade-in">
        <div class="skill-icon">{icon}</div>
        <h3>{label}</h3>
        <div class="skill-tags">
          {tags}
        </div>
      </div>
    "#,
        icon = skill_icon(&cat.key),
        label = label,
        tags = tags,
    )
}

/// Icon entity for a known category, or the generic star.
pub fn skill_icon(key: &str) -> &'static str {
    match key {
        "infrastructure" => "&#9881;",
        "security" => "&#128274;",
        "management" => "&#128200;",
        "platforms" => "&#9729;",
        _ => DEFAULT_SKILL_ICON,
    }
}

/// Display label for a known category (already HTML-encoded).
pub fn skill_label(key: &str) -> Option<&'static str> {
    match key {
        "infrastructure" => Some("Infrastructure &amp; Cloud"),
        "security" => Some("Security &amp; Compliance"),
        "management" => Some("Leadership &amp; Strategy"),
        "platforms" => Some("Platforms &amp; Tools"),
        _ => None,
    }
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
