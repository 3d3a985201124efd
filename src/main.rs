use dotenvy::dotenv;
use storefront_service::domain::ports::{SequenceMapper, Store};
use storefront_service::domain::sequence::ORDER_SEQUENCE;
use storefront_service::{create_pool, run_migrations, AppError, Config, PgStore};

fn main() -> Result<(), AppError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let pool = create_pool(&config.database_url, config.pool_size)?;
    run_migrations(&pool)?;

    let store = PgStore::new(pool);
    match store.transaction(|m| m.get_sequence(ORDER_SEQUENCE))? {
        Some(seq) => log::info!("Storefront database ready; next order number is {}", seq.next_id),
        None => log::warn!("Storefront database has no '{}' sequence row", ORDER_SEQUENCE),
    }
    Ok(())
}
