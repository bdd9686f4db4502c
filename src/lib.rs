#[macro_use]
extern crate rocket;

use rocket::fs::{FileServer, Options};
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};

pub mod boot;
pub mod config;
pub mod designs;
pub mod document;
pub mod error;
pub mod interactions;
pub mod loader;
pub mod models;
pub mod render;
pub mod routes;

#[cfg(test)]
mod tests;

use config::SiteConfig;
use models::profile::Profile;

/// The profile read at startup, or `None` when loading failed.
/// Shared via Rocket managed state; never changes after launch.
pub struct LoadedProfile(pub Option<Profile>);

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the server around an already-loaded profile.
pub fn app(profile: Option<Profile>, config: SiteConfig) -> Rocket<Build> {
    let static_dir = config.static_dir.clone();

    rocket::build()
        .manage(LoadedProfile(profile))
        .manage(config)
        .mount("/static", FileServer::new(static_dir, Options::Index | Options::Missing))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
