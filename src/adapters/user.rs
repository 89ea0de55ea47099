use crate::domain::model::{PluginUser, SignedInUser};

/// Converts the signed-in user into the user model passed to plugins.
pub fn backend_user_from_signed_in_user(user: Option<&SignedInUser>) -> Option<PluginUser> {
    let user = user?;
    Some(PluginUser {
        login: user.login.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.org_role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RoleType;

    fn signed_in(role: RoleType) -> SignedInUser {
        SignedInUser {
            user_id: 42,
            org_id: 1,
            login: "alice".to_string(),
            name: "Alice A".to_string(),
            email: "a@x.com".to_string(),
            org_role: role,
        }
    }

    #[test]
    fn test_absent_user() {
        assert_eq!(backend_user_from_signed_in_user(None), None);
    }

    #[test]
    fn test_fields_copied() {
        let user = backend_user_from_signed_in_user(Some(&signed_in(RoleType::Admin))).unwrap();

        assert_eq!(
            user,
            PluginUser {
                login: "alice".to_string(),
                name: "Alice A".to_string(),
                email: "a@x.com".to_string(),
                role: "Admin".to_string(),
            }
        );
    }

    #[test]
    fn test_role_rendered_as_text() {
        for role in [RoleType::Viewer, RoleType::Editor, RoleType::Admin] {
            let user = backend_user_from_signed_in_user(Some(&signed_in(role))).unwrap();
            assert_eq!(user.role, role.to_string());
        }
    }
}
