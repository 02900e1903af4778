#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::server::ServeError> {
    portfolio_site::server::init_tracing();
    portfolio_site::server::serve().await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
