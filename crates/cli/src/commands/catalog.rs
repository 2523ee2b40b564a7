//! `larek-cli catalog`

use larek_core::Product;
use larek_storefront::api::LarekApi;

use super::{CliError, client};

/// Print the catalog.
#[allow(clippy::print_stdout)]
pub async fn list(json: bool) -> Result<(), CliError> {
    let products = client()?.get_products().await?;
    tracing::info!(count = products.len(), "Fetched catalog");

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
    } else {
        for product in &products {
            println!("{}", line(product));
        }
    }
    Ok(())
}

/// One table row: id, category, price, title.
fn line(product: &Product) -> String {
    let price = product
        .price
        .map_or_else(|| "Priceless".to_string(), |p| p.display());
    format!(
        "{:<36}  {:<16}  {:>16}  {}",
        product.id.as_str(),
        product.category,
        price,
        product.title
    )
}
