use crate::document::{Document, Element};

/// Default contact elements. The renderer fills in the address and links.
pub fn default_elements() -> Vec<Element> {
    vec![
        Element::new("span", "contact-email-text").text("Get in touch"),
        Element::new("a", "contact-email-link")
            .class("contact-link")
            .attr("href", "#contact"),
        Element::new("a", "contact-linkedin-link")
            .class("contact-link")
            .attr("href", "#contact")
            .attr("target", "_blank")
            .attr("rel", "noopener")
            .text("LinkedIn"),
    ]
}

/// Build the contact section body: the info column and the form.
/// The form posts to `/contact` so it still works with scripts disabled;
/// the page script intercepts the submit and opens the mail client directly.
pub fn render_section(doc: &Document) -> String {
    // The email link wraps the visible address
    let email_link = match doc.get("contact-email-link") {
        Some(link) => {
            let mut link = link.clone();
            link.inner = doc.outer_html("contact-email-text");
            link.outer_html()
        }
        None => doc.outer_html("contact-email-text"),
    };

    let info_html = format!(
        "<div class=\"contact-details\">\
        <div class=\"contact-detail\"><strong>Email:</strong> {email}</div>\
        <div class=\"contact-detail\"><strong>LinkedIn:</strong> {linkedin}</div>\
        </div>",
        email = email_link,
        linkedin = doc.outer_html("contact-linkedin-link"),
    );

    let form_html = r#"<form id="contact-form" method="post" action="/contact" class="contact-form">
<div class="contact-form-group"><label for="cf-name">Name</label><input type="text" id="cf-name" name="name" required placeholder="Your name"></div>
<div class="contact-form-group"><label for="cf-email">Email</label><input type="email" id="cf-email" name="email" required placeholder="your@email.com"></div>
<div class="contact-form-group"><label for="cf-message">Message</label><textarea id="cf-message" name="message" rows="6" required placeholder="Your message…"></textarea></div>
<button type="submit" class="contact-submit">Send Message</button>
</form>"#;

    format!(
        "<div class=\"contact-columns fade-in\">\
        <div class=\"contact-col-left\">{info}</div>\
        <div class=\"contact-col-right\">{form}</div>\
        </div>",
        info = info_html,
        form = form_html,
    )
}

pub fn css() -> &'static str {
    r#"
.contact-columns { display:flex; gap:40px; margin-top:24px; flex-wrap:wrap; }
.contact-col-left, .contact-col-right { flex:1; min-width:280px; }
.contact-details { margin-bottom:16px; }
.contact-detail { font-size:.95em; line-height:1.8; }
.contact-detail a { color:inherit; text-decoration:underline; }
.contact-form-group { margin-bottom:16px; }
.contact-form-group label { display:block; font-size:.9em; font-weight:600; margin-bottom:6px; }
.contact-form-group input,
.contact-form-group textarea {
    width:100%; padding:10px 12px; font-size:.95em; border:1px solid rgba(128,128,128,.3);
    background:transparent; color:inherit; border-radius:4px; font-family:inherit;
    box-sizing:border-box;
}
.contact-form-group textarea { resize:vertical; }
.contact-submit {
    display:inline-block; padding:12px 28px; font-size:.95em; font-weight:600;
    background:var(--accent); color:#fff; border:none; border-radius:4px; cursor:pointer;
    font-family:inherit; transition:opacity .15s;
}
.contact-submit:hover { opacity:.85; }
@media (max-width:640px) {
    .contact-columns { flex-direction:column; }
}
"#
}
