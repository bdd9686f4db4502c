use folio::config::SiteConfig;
use folio::{app, boot, loader};

#[rocket::launch]
async fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::from_figment(&rocket::Config::figment());

    // Boot check — verify/create directories, look for the profile
    boot::run(&config);

    // A failed load is logged inside; the page then serves its static markup
    let profile = loader::load_or_log(&config.profile_source).await;

    app(profile, config)
}
