use crate::models::User;
use serde::Serialize;

/// Response envelope for `GET /users/:id`. `user` is null when the id does
/// not exist or the record fails the age filter; callers cannot tell the
/// two apart, which matches the upstream contract.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Option<User>,
}
