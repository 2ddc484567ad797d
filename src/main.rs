#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::logging::log;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use prodvote::config::ServerConfig;
    use prodvote::db::Database;

    let config = ServerConfig::from_env();

    // Initialize the database
    let db = Database::new(&config.db_path).map_err(std::io::Error::other)?;
    db.create_schema().await.map_err(std::io::Error::other)?;
    if config.seed_demo {
        db.seed_demo().await.map_err(std::io::Error::other)?;
    }
    let db = web::Data::new(db);
    log!("[SERVER] Database ready at {}", config.db_path);

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(prodvote::app::App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(db.clone())
            // JSON API before the Leptos routes
            .configure(prodvote::api::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), prodvote::app::App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use prodvote::app::*;

    prodvote::utils::panic_hook::init();

    leptos::mount_to_body(App);
}
