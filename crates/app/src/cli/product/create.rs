use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::{
        categories::records::CategoryUuid,
        products::{PgProductsService, ProductsService, data::NewProduct, records::ProductUuid},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product model name, shown on cart lines
    #[arg(long)]
    model: String,

    /// Price in minor currency units (e.g. pence)
    #[arg(long)]
    price: u64,

    /// Category to file the product under
    #[arg(long)]
    category: Option<CategoryUuid>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<ProductUuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.model.trim().is_empty() {
        return Err("model cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let product = service
        .create_product(NewProduct {
            uuid: args.product_uuid.unwrap_or_default(),
            model: args.model,
            price: args.price,
            category: args.category,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_model: {}", product.model);
    println!("product_price: {}", product.price);

    Ok(())
}
