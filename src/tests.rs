#![cfg(test)]

use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

use crate::config::SiteConfig;
use crate::designs::portfolio::default_document;
use crate::document::Document;
use crate::loader;
use crate::models::profile::Profile;
use crate::render::render_site;

const JANE_MAILTO: &str = "mailto:chad@chadtwilson.com?subject=Website%20Contact%20from%20Jane&body=From%3A%20Jane%20(jane%40x.com)%0A%0AHi";

fn sample_profile() -> Profile {
    Profile::from_json(
        r#"{
            "name": "Chad T. Wilson",
            "hero": {
                "headline": "Technology Executive",
                "subheadline": "Building secure platforms"
            },
            "about": {
                "summary": "Twenty years in infrastructure.",
                "highlights": ["Led cloud migrations", "Built security programs"]
            },
            "experience": [
                {
                    "title": "CTO",
                    "company": "Acme",
                    "startDate": "2019",
                    "endDate": "Present",
                    "location": "Austin, TX",
                    "workType": "Remote",
                    "description": "Runs engineering."
                },
                {
                    "title": "Director",
                    "company": "Globex",
                    "startDate": "2012",
                    "endDate": "2019",
                    "location": "Dallas, TX",
                    "workType": "On-site",
                    "description": "Ran operations."
                }
            ],
            "skills": {
                "infrastructure": ["AWS", "Kubernetes"],
                "security": ["SOC 2"],
                "cooking": ["Brisket"]
            },
            "email": "chad@chadtwilson.com",
            "linkedin": "https://www.linkedin.com/in/chadtwilson"
        }"#,
    )
    .expect("sample profile parses")
}

fn rendered(profile: &Profile) -> Document {
    let mut doc = default_document();
    render_site(profile, &mut doc, 2026);
    doc
}

fn test_config() -> SiteConfig {
    SiteConfig::default()
}

fn client(profile: Option<Profile>) -> Client {
    Client::tracked(crate::app(profile, test_config())).expect("valid rocket instance")
}

// ═══════════════════════════════════════════════════════════
// Renderer
// ═══════════════════════════════════════════════════════════

#[test]
fn render_maps_every_scalar_field() {
    let doc = rendered(&sample_profile());
    assert_eq!(doc.text_of("hero-name"), Some("Chad T. Wilson"));
    assert_eq!(doc.text_of("hero-headline"), Some("Technology Executive"));
    assert_eq!(doc.text_of("hero-subheadline"), Some("Building secure platforms"));
    assert_eq!(doc.text_of("contact-email-text"), Some("chad@chadtwilson.com"));
    assert_eq!(
        doc.attr_of("contact-email-link", "href"),
        Some("mailto:chad@chadtwilson.com")
    );
    assert_eq!(
        doc.attr_of("contact-linkedin-link", "href"),
        Some("https://www.linkedin.com/in/chadtwilson")
    );
    assert_eq!(doc.text_of("footer-year"), Some("2026"));
    assert_eq!(doc.text_of("footer-name"), Some("Chad T. Wilson"));
}

#[test]
fn render_about_paragraphs() {
    let doc = rendered(&sample_profile());
    assert_eq!(
        doc.text_of("about-text"),
        Some("<p>Twenty years in infrastructure.</p><p>Led cloud migrations</p><p>Built security programs</p>")
    );
}

#[test]
fn render_timeline_entries_in_order() {
    let doc = rendered(&sample_profile());
    let timeline = doc.text_of("timeline").unwrap();
    assert_eq!(timeline.matches("class=\"timeline-item fade-in\"").count(), 2);
    let cto = timeline.find("<h3>CTO</h3>").unwrap();
    let director = timeline.find("<h3>Director</h3>").unwrap();
    assert!(cto < director);
    assert!(timeline.contains("<span class=\"timeline-company\">Acme</span>"));
    assert!(timeline.contains("<div class=\"timeline-date\">2019 â€” Present</div>"));
    assert!(timeline.contains("<div class=\"timeline-location\">Austin, TX</div>"));
    assert!(timeline.contains("<span class=\"timeline-badge\">Remote</span>"));
    assert!(timeline.contains("<p class=\"timeline-desc\">Runs engineering.</p>"));
}

#[test]
fn render_skills_with_known_and_unknown_keys() {
    let doc = rendered(&sample_profile());
    let grid = doc.text_of("skills-grid").unwrap();
    assert_eq!(grid.matches("class=\"skill-category fade-in\"").count(), 3);
    assert!(grid.contains("<div class=\"skill-icon\">&#9881;</div>"));
    assert!(grid.contains("<h3>Infrastructure &amp; Cloud</h3>"));
    assert!(grid.contains("<h3>Security &amp; Compliance</h3>"));
    assert!(grid.contains("<div class=\"skill-icon\">&#9733;</div>"));
    assert!(grid.contains("<h3>cooking</h3>"));
    assert!(grid.contains("<span class=\"skill-tag\">Kubernetes</span>"));
    let infra = grid.find("Infrastructure").unwrap();
    let cooking = grid.find("<h3>cooking</h3>").unwrap();
    assert!(infra < cooking);
}

#[test]
fn render_without_about_leaves_container_alone() {
    let mut profile = sample_profile();
    profile.about = None;
    let before = default_document();
    let doc = rendered(&profile);
    assert_eq!(doc.text_of("about-text"), before.text_of("about-text"));
    assert_eq!(doc.text_of("hero-name"), Some("Chad T. Wilson"));
}

#[test]
fn render_empty_profile_only_touches_footer_year() {
    let before = default_document();
    let doc = rendered(&Profile::default());
    for id in [
        "hero-name",
        "hero-headline",
        "hero-subheadline",
        "about-text",
        "timeline",
        "skills-grid",
        "contact-email-text",
        "footer-name",
    ] {
        assert_eq!(doc.text_of(id), before.text_of(id), "{} changed", id);
    }
    assert_eq!(
        doc.attr_of("contact-email-link", "href"),
        before.attr_of("contact-email-link", "href")
    );
    assert_eq!(doc.text_of("footer-year"), Some("2026"));
}

#[test]
fn render_is_idempotent() {
    let profile = sample_profile();
    let mut doc = rendered(&profile);
    let once = crate::designs::portfolio::page_shell(&doc, &test_config());
    render_site(&profile, &mut doc, 2026);
    let twice = crate::designs::portfolio::page_shell(&doc, &test_config());
    assert_eq!(once, twice);
}

#[test]
fn render_skips_elements_the_design_lacks() {
    let mut doc = default_document();
    doc.remove("timeline");
    doc.remove("contact-linkedin-link");
    render_site(&sample_profile(), &mut doc, 2026);
    assert!(!doc.contains("timeline"));
    assert!(!doc.contains("contact-linkedin-link"));
    assert_eq!(doc.text_of("hero-name"), Some("Chad T. Wilson"));
}

#[test]
fn render_escapes_profile_text() {
    let profile = Profile {
        name: Some("<script>alert(1)</script>".into()),
        ..Default::default()
    };
    let doc = rendered(&profile);
    assert_eq!(
        doc.text_of("hero-name"),
        Some("&lt;script&gt;alert(1)&lt;/script&gt;")
    );
}

#[test]
fn render_survives_loose_experience_fields() {
    let profile = Profile::from_json(
        r#"{
            "name": "Chad T. Wilson",
            "about": { "summary": "Hi", "highlights": null },
            "experience": [
                { "title": "CTO", "company": "Acme", "startDate": 2019, "endDate": null }
            ],
            "skills": { "security": ["SOC 2"] },
            "email": "chad@chadtwilson.com"
        }"#,
    )
    .expect("loose profile parses");
    let doc = rendered(&profile);
    assert_eq!(doc.text_of("hero-name"), Some("Chad T. Wilson"));
    assert_eq!(doc.text_of("about-text"), Some("<p>Hi</p>"));
    let timeline = doc.text_of("timeline").unwrap();
    assert!(timeline.contains("<div class=\"timeline-date\">2019 â€” </div>"));
    assert!(doc.text_of("skills-grid").unwrap().contains("<span class=\"skill-tag\">SOC 2</span>"));
    assert_eq!(
        doc.attr_of("contact-email-link", "href"),
        Some("mailto:chad@chadtwilson.com")
    );
}

#[test]
fn page_footer_shows_current_local_year() {
    use chrono::Datelike;
    let year = chrono::Local::now().year();
    let page = crate::render::render_page(Some(&sample_profile()), &test_config());
    assert!(page.contains(&format!("<span id=\"footer-year\">{}</span>", year)));
}

#[test]
fn bundled_profile_parses() {
    let raw = include_str!("../website/data/profile.json");
    let profile = Profile::from_json(raw).expect("bundled profile is valid");
    assert!(profile.name.is_some());
    assert!(profile.skills.map(|s| !s.is_empty()).unwrap_or(false));
}

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

#[test]
fn homepage_renders_profile() {
    let client = client(Some(sample_profile()));
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::HTML));
    let body = res.into_string().unwrap();
    assert!(body.contains("<h1 id=\"hero-name\" class=\"hero-name\">Chad T. Wilson</h1>"));
    assert!(body.contains("<title>Chad T. Wilson</title>"));
    assert!(body.contains("href=\"mailto:chad@chadtwilson.com\""));
    assert!(body.contains("<span class=\"skill-tag\">SOC 2</span>"));
}

#[test]
fn homepage_without_profile_still_wires_interactions() {
    let client = client(None);
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    // static fallback content
    assert!(body.contains("<h1 id=\"hero-name\" class=\"hero-name\">Welcome</h1>"));
    assert!(body.contains("<p>More about me is on the way.</p>"));
    // interactions
    assert!(body.contains("<button class=\"nav-toggle\""));
    assert!(body.contains("<div class=\"nav-links\">"));
    assert!(body.contains("<section id=\"about\""));
    assert!(body.contains("data-scroll-threshold=\"40\""));
    assert!(body.contains("data-spy-offset=\"100\""));
    assert!(body.contains("data-contact-recipient=\"chad@chadtwilson.com\""));
    assert!(body.contains("document.querySelectorAll('section[id]')"));
    assert!(body.contains("new IntersectionObserver"));
    assert!(body.contains("<form id=\"contact-form\""));
}

#[test]
fn failed_load_falls_back_to_static_page() {
    let profile = rocket::execute(loader::load_or_log("/nonexistent/folio/profile.json"));
    assert!(profile.is_none());
    let client = client(profile);
    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("Welcome"));
    assert!(body.contains("nav-toggle"));
}

#[test]
fn profile_json_served_when_loaded() {
    let client = client(Some(sample_profile()));
    let res = client.get("/data/profile.json").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::JSON));
    let value: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(value["name"], "Chad T. Wilson");
    assert_eq!(value["experience"][0]["startDate"], "2019");
    assert_eq!(value["skills"]["security"][0], "SOC 2");
}

#[test]
fn profile_json_missing_when_load_failed() {
    let client = client(None);
    let res = client.get("/data/profile.json").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn contact_fallback_redirects_to_mailto() {
    let client = client(None);
    let res = client
        .post("/contact")
        .header(ContentType::Form)
        .body("name=Jane&email=jane%40x.com&message=Hi")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some(JANE_MAILTO));
}

#[test]
fn contact_fallback_uses_configured_recipient() {
    let config = SiteConfig {
        contact_recipient: "hello@example.com".into(),
        ..SiteConfig::default()
    };
    let client = Client::tracked(crate::app(None, config)).unwrap();
    let res = client
        .post("/contact")
        .header(ContentType::Form)
        .body("name=Jane&email=jane%40x.com&message=Hi")
        .dispatch();
    let location = res.headers().get_one("Location").unwrap();
    assert!(location.starts_with("mailto:hello@example.com?subject="));
}

#[test]
fn unknown_path_is_404_page() {
    let client = client(None);
    let res = client.get("/nope").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    assert!(res.into_string().unwrap().contains("Page not found."));
}
