use serde::{Deserialize, Serialize};

use crate::Department;

labelled_enum! {
    pub enum UserRole {
        Admin => "admin",
        Hr => "hr",
        Manager => "manager",
        Employee => "employee",
    }
}

/// The signed-in dashboard user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub department: Department,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        crate::full_name(&self.first_name, &self.last_name)
    }
}
