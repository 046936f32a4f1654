// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use jobboard_core::presentation::http::openapi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = openapi::snapshot_path_from_env();
    openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
