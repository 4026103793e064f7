//! handlers/dashboard_handler.rs
use actix_files::NamedFile;

/// GET /
/// Sirve la página estática del dashboard.
pub async fn dashboard_endpoint() -> Result<NamedFile, std::io::Error> {
    Ok(NamedFile::open("./static/index.html")?)
}
