use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::categories::{
        CategoriesService, PgCategoriesService, data::NewCategory, records::CategoryUuid,
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateCategoryArgs {
    /// Category display name
    #[arg(long)]
    name: String,

    /// Parent category UUID; a root category is created when omitted
    #[arg(long)]
    parent: Option<CategoryUuid>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional category UUID; generated when omitted
    #[arg(long)]
    category_uuid: Option<CategoryUuid>,
}

pub(crate) async fn run(args: CreateCategoryArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCategoriesService::new(Db::new(pool));

    let category = service
        .create_category(NewCategory {
            uuid: args.category_uuid.unwrap_or_default(),
            name: args.name,
            parent: args.parent,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("category_name: {}", category.name);
    if let Some(parent) = category.parent {
        println!("parent_uuid: {parent}");
    }

    Ok(())
}
