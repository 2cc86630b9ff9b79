use std::collections::BTreeMap;

use serde::Serialize;

use super::form::Field;
use crate::constants::MSG_ENTER_CREDENTIALS;

/// Field name to message, holding only the fields that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(
        &mut self,
        field: Field,
        message: &str,
    ) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(
        &self,
        field: Field,
    ) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Form-level hint that is not tied to any single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    EnterCredentials,
}

impl Advisory {
    pub fn text(&self) -> &'static str {
        match self {
            Advisory::EnterCredentials => MSG_ENTER_CREDENTIALS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: ValidationErrors,
    pub advisory: Option<Advisory>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}
