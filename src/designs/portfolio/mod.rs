//! The single-page portfolio design.
//! `default_document` is the static markup a visitor sees when no profile
//! could be loaded; `page_shell` lays the elements out into the full page.

use crate::config::SiteConfig;
use crate::designs::contact;
use crate::document::{Document, Element};
use crate::interactions::INTERACTIONS_JS;
use crate::render::html_escape;

/// Sections in page order, as `(id, nav label)`.
pub const SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub fn default_document() -> Document {
    let mut doc = Document::new();

    doc.insert(Element::new("h1", "hero-name").class("hero-name").text("Welcome"));
    doc.insert(
        Element::new("p", "hero-headline")
            .class("hero-headline")
            .text("Technology leadership"),
    );
    doc.insert(Element::new("p", "hero-subheadline").class("hero-subheadline"));

    doc.insert(
        Element::new("div", "about-text")
            .class("about-text fade-in")
            .html("<p>More about me is on the way.</p>"),
    );
    doc.insert(Element::new("div", "timeline").class("timeline"));
    doc.insert(Element::new("div", "skills-grid").class("skills-grid"));

    for el in contact::default_elements() {
        doc.insert(el);
    }

    doc.insert(Element::new("span", "footer-year"));
    doc.insert(Element::new("span", "footer-name"));

    doc
}

fn nav_links() -> String {
    SECTIONS
        .iter()
        .filter(|(id, _)| *id != "hero")
        .map(|(id, label)| format!("<a href=\"#{}\">{}</a>", id, label))
        .collect::<Vec<_>>()
        .join("\n            ")
}

/// Full page around the document's elements.
pub fn page_shell(doc: &Document, config: &SiteConfig) -> String {
    let title = doc.text_of("hero-name").unwrap_or("Portfolio");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        {base_css}
        {contact_css}
    </style>
</head>
<body data-scroll-threshold="{threshold}" data-spy-offset="{spy_offset}" data-contact-recipient="{recipient}">
    <nav class="nav">
        <div class="nav-inner">
            <a href="#hero" class="nav-brand">{title}</a>
            <button class="nav-toggle" aria-label="Toggle navigation">&#9776;</button>
            <div class="nav-links">
            {nav_links}
            </div>
        </div>
    </nav>
    <section id="hero" class="hero">
        <div class="container">
            {hero_name}
            {hero_headline}
            {hero_subheadline}
            <a href="#contact" class="btn">Get in touch</a>
        </div>
    </section>
    <section id="about" class="section">
        <div class="container">
            <h2 class="section-title fade-in">About</h2>
            {about_text}
        </div>
    </section>
    <section id="experience" class="section">
        <div class="container">
            <h2 class="section-title fade-in">Experience</h2>
            {timeline}
        </div>
    </section>
    <section id="skills" class="section">
        <div class="container">
            <h2 class="section-title fade-in">Skills</h2>
            {skills_grid}
        </div>
    </section>
    <section id="contact" class="section">
        <div class="container">
            <h2 class="section-title fade-in">Contact</h2>
            {contact}
        </div>
    </section>
    <footer class="footer">
        <p>&copy; {footer_year} {footer_name}</p>
    </footer>
    <script>{interactions_js}</script>
</body>
</html>"##,
        title = title,
        base_css = DEFAULT_CSS,
        contact_css = contact::css(),
        threshold = config.nav_scroll_threshold,
        spy_offset = config.scroll_spy_offset,
        recipient = html_escape(&config.contact_recipient),
        nav_links = nav_links(),
        hero_name = doc.outer_html("hero-name"),
        hero_headline = doc.outer_html("hero-headline"),
        hero_subheadline = doc.outer_html("hero-subheadline"),
        about_text = doc.outer_html("about-text"),
        timeline = doc.outer_html("timeline"),
        skills_grid = doc.outer_html("skills-grid"),
        contact = contact::render_section(doc),
        footer_year = doc.outer_html("footer-year"),
        footer_name = doc.outer_html("footer-name"),
        interactions_js = INTERACTIONS_JS,
    )
}

const DEFAULT_CSS: &str = r#"
:root { --bg:#0f1115; --surface:#171a21; --text:#e6e8ee; --muted:#9aa3b2; --accent:#4f8cff; }
* { margin:0; padding:0; box-sizing:border-box; }
html { scroll-behavior:smooth; }
body { font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif; background:var(--bg); color:var(--text); line-height:1.6; }
a { color:var(--accent); text-decoration:none; }
.container { max-width:1000px; margin:0 auto; padding:0 24px; }

.nav { position:fixed; top:0; left:0; right:0; z-index:100; padding:20px 0; transition:background .2s, padding .2s, box-shadow .2s; }
.nav.scrolled { background:rgba(15,17,21,.95); padding:12px 0; box-shadow:0 2px 12px rgba(0,0,0,.3); }
.nav-inner { max-width:1000px; margin:0 auto; padding:0 24px; display:flex; align-items:center; justify-content:space-between; }
.nav-brand { color:var(--text); font-weight:700; }
.nav-links { display:flex; gap:28px; }
.nav-links a { color:var(--muted); font-size:.95em; transition:color .15s; }
.nav-links a:hover, .nav-links a.active { color:var(--text); }
.nav-toggle { display:none; background:none; border:none; color:var(--text); font-size:1.5em; cursor:pointer; }

.hero { min-height:100vh; display:flex; align-items:center; }
.hero-name { font-size:3.2em; line-height:1.1; margin-bottom:16px; }
.hero-headline { font-size:1.4em; color:var(--accent); margin-bottom:8px; }
.hero-subheadline { color:var(--muted); max-width:640px; margin-bottom:32px; }
.btn { display:inline-block; padding:12px 28px; border:1px solid var(--accent); border-radius:4px; }
.btn:hover { background:var(--accent); color:#fff; }

.section { padding:100px 0; }
.section-title { font-size:2em; margin-bottom:40px; }
.about-text p { margin-bottom:16px; color:var(--muted); }

.timeline { position:relative; padding-left:28px; border-left:2px solid var(--surface); }
.timeline-item { position:relative; margin-bottom:32px; }
.timeline-dot { position:absolute; left:-36px; top:24px; width:14px; height:14px; border-radius:50%; background:var(--accent); }
.timeline-card { background:var(--surface); border-radius:8px; padding:24px; }
.timeline-header { display:flex; justify-content:space-between; gap:16px; flex-wrap:wrap; margin-bottom:12px; }
.timeline-company { color:var(--accent); }
.timeline-meta { text-align:right; color:var(--muted); font-size:.9em; }
.timeline-badge { display:inline-block; margin-top:4px; padding:2px 10px; border-radius:12px; background:rgba(79,140,255,.15); color:var(--accent); font-size:.85em; }
.timeline-desc { color:var(--muted); }

.skills-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(220px,1fr)); gap:24px; }
.skill-category { background:var(--surface); border-radius:8px; padding:24px; }
.skill-icon { font-size:1.8em; margin-bottom:8px; }
.skill-category h3 { margin-bottom:12px; }
.skill-tags { display:flex; flex-wrap:wrap; gap:8px; }
.skill-tag { padding:4px 12px; border-radius:12px; background:rgba(255,255,255,.06); font-size:.85em; }

.footer { padding:32px 0; text-align:center; color:var(--muted); font-size:.9em; }

.fade-in { opacity:0; transform:translateY(20px); transition:opacity .6s ease, transform .6s ease; }
.fade-in.visible { opacity:1; transform:none; }

@media (max-width:768px) {
    .nav-toggle { display:block; }
    .nav-links { display:none; position:absolute; top:100%; left:0; right:0; flex-direction:column; gap:0; background:var(--bg); }
    .nav-links.open { display:flex; }
    .nav-links a { padding:14px 24px; }
    .hero-name { font-size:2.4em; }
    .timeline-meta { text-align:left; }
}
"#;
