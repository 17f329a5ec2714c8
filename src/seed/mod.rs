use sqlx::PgConnection;
use tracing::info;

use crate::models::SEED_ITEMS;

/// Insert the fixed seed rows in a single statement. Returns rows inserted.
pub async fn seed_inventory(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
    let names: Vec<&str> = SEED_ITEMS.iter().map(|(name, _)| *name).collect();
    let quantities: Vec<i32> = SEED_ITEMS.iter().map(|(_, quantity)| *quantity).collect();

    // UNNEST keeps it to one round trip and preserves array order, so ids follow SEED_ITEMS.
    let result = sqlx::query(
        r#"
        INSERT INTO inventory (name, quantity)
        SELECT * FROM UNNEST($1::text[], $2::int[])
        "#,
    )
    .bind(&names)
    .bind(&quantities)
    .execute(conn)
    .await?;

    info!("Inserted {} rows into inventory table.", result.rows_affected());
    Ok(result.rows_affected())
}
