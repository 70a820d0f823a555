use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::utils::validation::{
    validate_employee_number, validate_first_name, validate_gender, validate_gross_salary,
    validate_last_name, validate_salutation,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", from = "EmployeeWire")]
pub struct Employee {
    /// `0` until the record has been persisted by the service.
    pub id: i64,
    #[validate(custom = "validate_employee_number")]
    pub employee_number: String,
    #[validate(custom = "validate_first_name")]
    pub first_name: String,
    #[validate(custom = "validate_last_name")]
    pub last_name: String,
    pub full_name: String,
    #[validate(custom = "validate_salutation")]
    pub salutation: String,
    #[validate(custom = "validate_gender")]
    pub gender: Gender,
    #[validate(custom = "validate_gross_salary")]
    pub gross_salary: String,
    #[serde(serialize_with = "profile_color::serialize")]
    pub profile_color: Option<ProfileColor>,
}

// Incoming shape: any field may be missing or null, and the colour may come
// as `profileColor`, `profileColors`, or both.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EmployeeWire {
    id: Option<i64>,
    employee_number: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    full_name: Option<String>,
    salutation: Option<String>,
    gender: Option<Gender>,
    gross_salary: Option<String>,
    #[serde(deserialize_with = "profile_color::deserialize")]
    profile_color: Option<ProfileColor>,
    #[serde(deserialize_with = "profile_color::deserialize")]
    profile_colors: Option<ProfileColor>,
}

impl From<EmployeeWire> for Employee {
    fn from(wire: EmployeeWire) -> Self {
        Self {
            id: wire.id.unwrap_or_default(),
            employee_number: wire.employee_number.unwrap_or_default(),
            first_name: wire.first_name.unwrap_or_default(),
            last_name: wire.last_name.unwrap_or_default(),
            full_name: wire.full_name.unwrap_or_default(),
            salutation: wire.salutation.unwrap_or_default(),
            gender: wire.gender.unwrap_or_default(),
            gross_salary: wire.gross_salary.unwrap_or_default(),
            profile_color: wire.profile_color.or(wire.profile_colors),
        }
    }
}

impl Employee {
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Salutation {
    Dr,
    Mr,
    Ms,
    Mrs,
    Mx,
}

impl Salutation {
    pub const ALL: [Salutation; 5] = [
        Salutation::Dr,
        Salutation::Mr,
        Salutation::Ms,
        Salutation::Mrs,
        Salutation::Mx,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Salutation::Dr => "Dr.",
            Salutation::Mr => "Mr.",
            Salutation::Ms => "Ms.",
            Salutation::Mrs => "Mrs.",
            Salutation::Mx => "Mx.",
        }
    }

    /// Gender implied by the title. `Dr.` implies none.
    pub fn gender(self) -> Gender {
        match self {
            Salutation::Mr => Gender::Male,
            Salutation::Ms | Salutation::Mrs => Gender::Female,
            Salutation::Mx => Gender::Unspecified,
            Salutation::Dr => Gender::Unset,
        }
    }
}

impl FromStr for Salutation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Salutation::ALL
            .into_iter()
            .find(|salutation| salutation.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Gender {
    #[default]
    Unset,
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub const CHOICES: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    /// One of the selectable values, matched exactly.
    pub fn choice(value: &str) -> Option<Gender> {
        Gender::CHOICES
            .into_iter()
            .find(|gender| gender.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Unset => "",
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unspecified => "Unspecified",
        }
    }

    /// Lookup used when the salutation changes; unknown titles clear the gender.
    pub fn from_salutation(salutation: &str) -> Gender {
        salutation
            .parse::<Salutation>()
            .map(Salutation::gender)
            .unwrap_or_default()
    }

    pub fn is_unset(self) -> bool {
        self == Gender::Unset
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Unspecified" => Gender::Unspecified,
            _ => Gender::Unset,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::from(value.as_str())
    }
}

impl From<Gender> for &'static str {
    fn from(gender: Gender) -> Self {
        gender.as_str()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileColor {
    Blue,
    Green,
    Red,
    Default,
}

impl ProfileColor {
    pub const ALL: [ProfileColor; 4] = [
        ProfileColor::Blue,
        ProfileColor::Green,
        ProfileColor::Red,
        ProfileColor::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileColor::Blue => "Blue",
            ProfileColor::Green => "Green",
            ProfileColor::Red => "Red",
            ProfileColor::Default => "Default",
        }
    }
}

impl FromStr for ProfileColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for ProfileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Written as a plain string ("" for none). Reads either that or the older
// array shape, keeping the first entry; null and unknown names read as none.
mod profile_color {
    use super::ProfileColor;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        One(String),
        Many(Vec<String>),
        Nothing,
    }

    pub fn serialize<S: Serializer>(
        color: &Option<ProfileColor>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(color.map(ProfileColor::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ProfileColor>, D::Error> {
        let name = match Wire::deserialize(deserializer)? {
            Wire::One(name) => Some(name),
            Wire::Many(names) => names.into_iter().next(),
            Wire::Nothing => None,
        };
        Ok(name.and_then(|name| name.parse().ok()))
    }
}

/// Form fields that carry a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    EmployeeNumber,
    FirstName,
    LastName,
    Salutation,
    Gender,
    GrossSalary,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::EmployeeNumber,
        Field::FirstName,
        Field::LastName,
        Field::Salutation,
        Field::Gender,
        Field::GrossSalary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::EmployeeNumber => "employeeNumber",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Salutation => "salutation",
            Field::Gender => "gender",
            Field::GrossSalary => "grossSalary",
        }
    }

    fn snake_case(self) -> &'static str {
        match self {
            Field::EmployeeNumber => "employee_number",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Salutation => "salutation",
            Field::Gender => "gender",
            Field::GrossSalary => "gross_salary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::EmployeeNumber => "Employee #",
            Field::FirstName => "First Name(s)",
            Field::LastName => "Last Name",
            Field::Salutation => "Salutation",
            Field::Gender => "Gender",
            Field::GrossSalary => "Gross Salary $PY",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    // Accepts the wire name or the struct field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s || field.snake_case() == s)
            .ok_or(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
