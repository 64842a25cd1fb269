use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
///
/// `password` is stored and returned exactly as submitted. There is no
/// hashing; clients of `GET /api/users` see it in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serializes_all_columns_with_rfc3339_timestamps() {
        let user = User {
            id: 1,
            email: "a@b.com".into(),
            password: "secret".into(),
            created_at: datetime!(2024-06-01 12:00:00 UTC),
            updated_at: datetime!(2024-06-01 12:00:00 UTC),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["password"], "secret");
        assert_eq!(json["created_at"], "2024-06-01T12:00:00Z");
        assert_eq!(json["updated_at"], "2024-06-01T12:00:00Z");
    }
}
