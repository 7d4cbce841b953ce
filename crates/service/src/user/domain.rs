use models::user::{NewUser, UserPatch};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /users`. Nothing is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        NewUser {
            name: input.name,
            age: input.age,
            email: input.email,
            number: input.number,
            plan: input.plan,
            is_admin: input.is_admin.unwrap_or(false),
        }
    }
}

/// Body of `PUT /users/:id`. Absent fields are left untouched; `null` clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub age: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub plan: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_admin: Option<Option<bool>>,
}

// Only called for keys present in the body, so a present `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateUserInput> for UserPatch {
    fn from(input: UpdateUserInput) -> Self {
        UserPatch {
            name: input.name,
            age: input.age,
            email: input.email,
            number: input.number,
            plan: input.plan,
            is_admin: input.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_admin_defaults_to_false() {
        let input: CreateUserInput = serde_json::from_value(serde_json::json!({"name": "Ada"})).unwrap();
        let new = NewUser::from(input);
        assert!(!new.is_admin);
        assert_eq!(new.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn camel_case_is_admin_is_read() {
        let input: CreateUserInput = serde_json::from_value(serde_json::json!({"isAdmin": true, "age": 41})).unwrap();
        let new = NewUser::from(input);
        assert!(new.is_admin);
        assert_eq!(new.age, Some(41.0));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let res = serde_json::from_value::<CreateUserInput>(serde_json::json!({"age": "old"}));
        assert!(res.is_err());
    }

    #[test]
    fn update_maps_to_partial_patch() {
        let input: UpdateUserInput = serde_json::from_value(serde_json::json!({"plan": "silver"})).unwrap();
        let patch = UserPatch::from(input);
        assert_eq!(patch, UserPatch { plan: Some(Some("silver".into())), ..Default::default() });
    }

    #[test]
    fn explicit_null_is_distinct_from_absent() {
        let input: UpdateUserInput =
            serde_json::from_value(serde_json::json!({"plan": null, "name": "Bo"})).unwrap();
        let patch = UserPatch::from(input);
        assert_eq!(patch.plan, Some(None));
        assert_eq!(patch.name, Some(Some("Bo".to_string())));
        assert_eq!(patch.email, None);
        assert_eq!(patch.is_admin, None);
    }
}
