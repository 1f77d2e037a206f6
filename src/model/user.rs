use serenity::all::UserId;

/// The account performing the migration.
#[derive(Debug, Clone, PartialEq)]
pub struct ActingUser {
    pub id: UserId,
    pub name: String,
}
