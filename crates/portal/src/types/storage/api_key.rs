use time::PrimitiveDateTime;

/// An API key issued to a portal account.
#[derive(Clone, Debug)]
pub struct ApiKey {
    pub key: String,
    pub user_id: String,
    pub created_at: PrimitiveDateTime,
}
