use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Employee => "Employee",
            UserType::Admin => "Admin",
        }
    }
}

/// Usuario de la sesión activa (guardado en localStorage bajo `user`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub status: String,
}

impl User {
    pub fn connected(user_type: UserType, email: String, password: String) -> Self {
        Self {
            user_type,
            email,
            password,
            status: "connected".to_string(),
        }
    }

    /// Nombre que se envía al crear la cuenta (parte local del email)
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl From<&User> for Credentials {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

/// Payload de `users().create`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&User> for NewUser {
    fn from(user: &User) -> Self {
        Self {
            user_type: user.user_type,
            name: user.display_name().to_string(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub jwt: String,
}
