/// storefront - fetch the catalog once, pick a product, buy it
use pocket_bank_rs::catalog::find_by_id;
use pocket_bank_rs::{Account, CatalogClient, Earner, Money};

const CATALOG_URL: &str = "https://hickory-quilled-actress.glitch.me";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut account = Account::open(Money::from_major(200));
    let mut earner = Earner::new(&account);

    // a fetch failure propagates here and leaves the ledger untouched
    let client = CatalogClient::new(CATALOG_URL);
    let products = client.fetch_products().await?;

    for product in &products {
        println!(
            "#{} {} - {} ({})",
            product.id,
            product.title,
            product.price_money(),
            product.image_url(client.base_url())
        );
    }

    let selected = find_by_id(&products, 1).ok_or("product 1 not in catalog")?;

    // work until the balance covers the price
    while account.balance() < selected.price_money() {
        earner.work();
        earner.transfer_to_account(&mut account)?;
    }

    account.purchase(selected.price_money())?;
    println!(
        "you are now the owner of {}! balance left: {}",
        selected.title,
        account.balance()
    );

    Ok(())
}
