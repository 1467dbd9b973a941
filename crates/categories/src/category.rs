use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use catalog_core::{DomainResult, Entity, FieldRules, Rule, Uuid, validate_fields};

/// Maximum number of characters in a category name.
pub const NAME_MAX_LENGTH: usize = 255;

const NAME_RULES: &[Rule] = &[
    Rule::NotEmpty,
    Rule::IsString,
    Rule::MaxLength(NAME_MAX_LENGTH),
];
const DESCRIPTION_RULES: &[Rule] = &[Rule::IsString];
const IS_ACTIVE_RULES: &[Rule] = &[Rule::IsBoolean];

/// Field rules checked by [`Category::validate`].
pub const CATEGORY_RULES: &[FieldRules] = &[
    FieldRules::required("name", NAME_RULES),
    FieldRules::optional("description", DESCRIPTION_RULES),
    FieldRules::required("is_active", IS_ACTIVE_RULES),
];

/// Property bag for raw construction via [`Category::new`].
///
/// Business fields are loosely typed: whatever the caller supplies is stored and
/// only checked by [`Category::validate`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryProps {
    /// Identity to reuse. Anything that is not a valid UUID string is dropped
    /// when deserializing, and a fresh identifier is generated instead.
    #[serde(default, deserialize_with = "lenient_category_id")]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    /// `null` means active.
    #[serde(default)]
    pub is_active: Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

fn lenient_category_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| Uuid::parse(s).ok()))
}

/// Command: CreateCategory.
///
/// Identity and creation time are always generated by [`Category::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCategory {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub is_active: Value,
}

impl CreateCategory {
    pub fn new(name: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<Value>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_is_active(mut self, is_active: impl Into<Value>) -> Self {
        self.is_active = is_active.into();
        self
    }
}

/// Entity: Category.
///
/// Identity is `category_id`; two categories with the same id are the same
/// category whatever their other fields hold.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    category_id: Uuid,
    name: Value,
    description: Value,
    is_active: Value,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build a category from `props`, filling in defaults.
    ///
    /// Business fields are not validated here; use [`Category::create`] when the
    /// result must be valid.
    pub fn new(props: CategoryProps) -> Self {
        let is_active = match props.is_active {
            Value::Null => Value::Bool(true),
            other => other,
        };

        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active,
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Create a new, validated category with a fresh identifier.
    pub fn create(cmd: CreateCategory) -> DomainResult<Self> {
        let category = Self::new(CategoryProps {
            category_id: None,
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            created_at: None,
        });
        category.validate()?;

        tracing::debug!(category_id = %category.category_id, "category created");
        Ok(category)
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    /// The name, if it currently holds a string.
    pub fn name(&self) -> Option<&str> {
        self.name.as_str()
    }

    /// The description, if it currently holds a string.
    pub fn description(&self) -> Option<&str> {
        self.description.as_str()
    }

    /// The active flag, if it currently holds a boolean.
    pub fn is_active(&self) -> Option<bool> {
        self.is_active.as_bool()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the category, then revalidate the whole entity.
    ///
    /// The new name is stored even when validation fails.
    pub fn change_name(&mut self, name: impl Into<Value>) -> DomainResult<()> {
        self.name = name.into();
        self.validate()?;

        tracing::debug!(category_id = %self.category_id, "category renamed");
        Ok(())
    }

    /// Replace the description (`null` clears it), then revalidate the whole
    /// entity.
    pub fn change_description(&mut self, description: impl Into<Value>) -> DomainResult<()> {
        self.description = description.into();
        self.validate()?;

        tracing::debug!(category_id = %self.category_id, "category description changed");
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = Value::Bool(true);
        tracing::debug!(category_id = %self.category_id, "category activated");
    }

    pub fn deactivate(&mut self) {
        self.is_active = Value::Bool(false);
        tracing::debug!(category_id = %self.category_id, "category deactivated");
    }

    /// Check every field against [`CATEGORY_RULES`].
    pub fn validate(&self) -> DomainResult<()> {
        let errors = validate_fields(CATEGORY_RULES, &self.field_values());
        if !errors.is_empty() {
            tracing::debug!(
                category_id = %self.category_id,
                fields = ?errors.fields().collect::<Vec<_>>(),
                "category validation failed"
            );
        }
        errors.into_result()
    }

    fn field_values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert("name".to_string(), self.name.clone());
        values.insert("description".to_string(), self.description.clone());
        values.insert("is_active".to_string(), self.is_active.clone());
        values
    }
}

impl Entity for Category {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        &self.category_id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Category {}
