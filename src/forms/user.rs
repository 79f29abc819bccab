use crate::models::user::User as UserModel;
use serde::{Deserialize, Serialize};

/// Body returned by the identity endpoint.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub user: User,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub email_confirmed: bool,
}

fn default_role() -> String {
    "user".to_string()
}

impl TryInto<UserModel> for UserForm {
    type Error = String;

    fn try_into(self) -> Result<UserModel, Self::Error> {
        if self.user.id.trim().is_empty() {
            return Err("identity response carries no user id".to_string());
        }

        Ok(UserModel {
            id: self.user.id,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            email: self.user.email,
            role: self.user.role,
            email_confirmed: self.user.email_confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_body_maps_to_user() {
        let body = r#"{"user": {"_id": "u-42", "email": "ana@example.com", "first_name": "Ana",
            "last_name": "Li", "email_confirmed": true}}"#;
        let form: UserForm = serde_json::from_str(body).unwrap();
        let user: UserModel = form.try_into().unwrap();

        assert_eq!(user.id, "u-42");
        assert_eq!(user.role, "user");
        assert!(user.email_confirmed);
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut form = UserForm::default();
        form.user.id = "  ".to_string();
        let result: Result<UserModel, String> = form.try_into();
        assert!(result.is_err());
    }
}
