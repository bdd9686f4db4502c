//! Browser-side behaviour of the page.
//!
//! `INTERACTIONS_JS` is what actually runs in the visitor's browser. The Rust
//! functions below make the same decisions and are what the no-script
//! contact fallback and the tests go through; keep the two in step.

use rocket::FromForm;
use std::collections::BTreeSet;

use crate::render::encode_uri_component;

/// Scroll offset past which the nav bar gets the `scrolled` class.
pub const NAV_SCROLL_THRESHOLD: f64 = 40.0;

/// Added to `scrollY` before testing which section spans the position.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

pub fn nav_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Open/closed state of the mobile nav menu (the `open` class on `.nav-links`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    /// `.nav-toggle` click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click on any link inside `.nav-links`.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }
}

/// Vertical span of a `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// Active flag for each section's nav link, in document order.
/// Every link is decided independently, so overlapping spans may light up
/// more than one link.
pub fn scroll_spy<'a>(sections: &'a [SectionSpan], scroll_y: f64, offset: f64) -> Vec<(&'a str, bool)> {
    let pos = scroll_y + offset;
    sections
        .iter()
        .map(|s| (s.id.as_str(), s.contains(pos)))
        .collect()
}

/// The section whose link ends up active; the last match wins.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&str> {
    scroll_spy(sections, scroll_y, offset)
        .into_iter()
        .filter(|(_, active)| *active)
        .map(|(id, _)| id)
        .last()
}

/// Elements that have picked up the `visible` class. Once in, never out.
#[derive(Debug, Clone, Default)]
pub struct FadeInTracker {
    visible: BTreeSet<String>,
}

impl FadeInTracker {
    pub fn new() -> Self {
        FadeInTracker::default()
    }

    /// Handle one IntersectionObserver entry.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) {
        if is_intersecting {
            self.visible.insert(id.to_string());
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }
}

/// Fields of `#contact-form`.
#[derive(Debug, Clone, Default, PartialEq, FromForm)]
pub struct ContactForm {
    #[field(default = String::new())]
    pub name: String,
    #[field(default = String::new())]
    pub email: String,
    #[field(default = String::new())]
    pub message: String,
}

impl ContactForm {
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }

    /// The `mailto:` URI a submission navigates to.
    pub fn mailto_uri(&self, recipient: &str) -> String {
        let subject = encode_uri_component(&format!("Website Contact from {}", self.name));
        let body = encode_uri_component(&format!(
            "From: {} ({})\n\n{}",
            self.name, self.email, self.message
        ));
        format!("mailto:{}?subject={}&body={}", recipient, subject, body)
    }

    /// Build the URI, then clear the fields the way the page resets the form.
    pub fn submit(&mut self, recipient: &str) -> String {
        let uri = self.mailto_uri(recipient);
        self.reset();
        uri
    }
}

pub const INTERACTIONS_JS: &str = r##"
(function() {
    const b = document.body.dataset;
    const threshold = parseFloat(b.scrollThreshold || '40');
    const spyOffset = parseFloat(b.spyOffset || '100');
    const recipient = b.contactRecipient || '';

    // Navbar scroll state
    const nav = document.querySelector('.nav');
    if (nav) {
        window.addEventListener('scroll', function() {
            if (window.scrollY > threshold) {
                nav.classList.add('scrolled');
            } else {
                nav.classList.remove('scrolled');
            }
        });
    }

    // Mobile nav
    const toggle = document.querySelector('.nav-toggle');
    const navLinks = document.querySelector('.nav-links');
    if (toggle && navLinks) {
        toggle.addEventListener('click', function() {
            navLinks.classList.toggle('open');
        });
    }
    document.querySelectorAll('.nav-links a').forEach(function(link) {
        link.addEventListener('click', function() {
            if (navLinks) navLinks.classList.remove('open');
        });
    });

    // Scroll-spy
    const sections = document.querySelectorAll('section[id]');
    window.addEventListener('scroll', function() {
        const pos = window.scrollY + spyOffset;
        sections.forEach(function(section) {
            const top = section.offsetTop;
            const height = section.offsetHeight;
            const id = section.getAttribute('id');
            const link = document.querySelector('.nav-links a[href="#' + id + '"]');
            if (!link) return;
            if (pos >= top && pos < top + height) {
                link.classList.add('active');
            } else {
                link.classList.remove('active');
            }
        });
    });

    // Fade-in on scroll
    if ('IntersectionObserver' in window) {
        const observer = new IntersectionObserver(function(entries) {
            entries.forEach(function(entry) {
                if (entry.isIntersecting) entry.target.classList.add('visible');
            });
        }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
        document.querySelectorAll('.fade-in').forEach(function(el) { observer.observe(el); });
    } else {
        document.querySelectorAll('.fade-in').forEach(function(el) { el.classList.add('visible'); });
    }

    // Contact form
    const form = document.getElementById('contact-form');
    if (form) {
        form.addEventListener('submit', function(e) {
            e.preventDefault();
            const field = function(n) {
                const el = form.querySelector('[name="' + n + '"]');
                return el ? el.value : '';
            };
            const name = field('name');
            const email = field('email');
            const message = field('message');
            const subject = encodeURIComponent('Website Contact from ' + name);
            const body = encodeURIComponent('From: ' + name + ' (' + email + ')\n\n' + message);
            window.location.href = 'mailto:' + recipient + '?subject=' + subject + '&body=' + body;
            form.reset();
        });
    }
})();
"##;
