use log::debug;
use rocket::form::Form;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;

use crate::config::SiteConfig;
use crate::interactions::ContactForm;
use crate::models::profile::Profile;
use crate::render;
use crate::LoadedProfile;

// ── Homepage ───────────────────────────────────────────

#[get("/")]
pub fn homepage(profile: &State<LoadedProfile>, config: &State<SiteConfig>) -> RawHtml<String> {
    RawHtml(render::render_page(profile.0.as_ref(), config))
}

// ── Profile data ───────────────────────────────────────

#[get("/data/profile.json")]
pub fn profile_json(profile: &State<LoadedProfile>) -> Option<Json<Profile>> {
    profile.0.clone().map(Json)
}

// ── Contact (no-script fallback) ───────────────────────

/// `303 See Other` pointing the browser at a `mailto:` URI.
#[derive(Responder)]
#[response(status = 303)]
pub struct MailtoRedirect {
    body: String,
    location: Header<'static>,
}

impl MailtoRedirect {
    pub fn to(uri: String) -> Self {
        MailtoRedirect {
            body: String::new(),
            location: Header::new("Location", uri),
        }
    }
}

#[post("/contact", data = "<form>")]
pub fn contact_submit(form: Form<ContactForm>, config: &State<SiteConfig>) -> MailtoRedirect {
    let mut form = form.into_inner();
    debug!("Contact form submitted");
    MailtoRedirect::to(form.submit(&config.contact_recipient))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, profile_json, contact_submit]
}
