// Demo data for a fresh store

use contact_rpc_core::domain::Contact;
use sqlx::SqlitePool;
use tracing::info;

/// Rows inserted by [`seed_demo_contacts`]
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "julien", "regnault", "Singapore"),
        Contact::new(2, "marc", "jeandau", "Geneva"),
    ]
}

/// Insert the demo contacts if the table is empty.
///
/// Returns the number of rows inserted.
pub async fn seed_demo_contacts(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Contacts")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!(existing, "Contacts table not empty, skipping demo seed");
        return Ok(0);
    }

    insert_contacts(pool, &demo_contacts()).await
}

/// Insert contacts in one transaction
pub async fn insert_contacts(pool: &SqlitePool, contacts: &[Contact]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for contact in contacts {
        inserted += sqlx::query(
            "INSERT INTO Contacts (id, firstname, lastname, address) VALUES (?, ?, ?, ?)",
        )
        .bind(contact.id)
        .bind(&contact.firstname)
        .bind(&contact.lastname)
        .bind(&contact.address)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    tx.commit().await?;

    info!(inserted, "Contacts inserted");
    Ok(inserted)
}
