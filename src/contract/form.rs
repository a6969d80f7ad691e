//! The normalized labor-contract form record

use crate::core::field::FieldKind;
use crate::core::validation::filters::normalize_field;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declares the form struct together with its field table
///
/// Each field name doubles as the JSON key and the template placeholder.
macro_rules! contract_form {
    ($($field:ident: $kind:ident),* $(,)?) => {
        /// Every recognized contract field, trimmed and length-capped
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct ContractForm {
            $(pub $field: String,)*
        }

        impl ContractForm {
            /// Field names with their kinds, in declaration order
            pub const FIELDS: &'static [(&'static str, FieldKind)] = &[
                $((stringify!($field), FieldKind::$kind),)*
            ];

            /// Normalize every recognized field of a payload object
            ///
            /// Unknown keys are ignored, missing keys become empty strings.
            pub fn normalize(payload: &Map<String, Value>) -> Self {
                Self {
                    $($field: normalize_field(
                        payload,
                        stringify!($field),
                        FieldKind::$kind.max_length(),
                    ),)*
                }
            }

            /// Look a field up by its wire name
            pub fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }

            /// Iterate `(name, value)` pairs in declaration order
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
                [$((stringify!($field), self.$field.as_str()),)*].into_iter()
            }
        }
    };
}

contract_form! {
    employer_name: Short,
    employer_uscc: Short,
    employer_representative: Short,
    employer_registered_address: Long,
    employer_business_address: Long,
    employer_phone: Short,
    employee_name: Short,
    employee_id: Short,
    employee_hukou_address: Long,
    employee_contact_address: Long,
    employee_phone: Short,
    term_type: Code,
    start_date: Date,
    end_date: Date,
    probation_end_date: Date,
    position: Short,
    job_duties: Long,
    work_location: Long,
    worktime_type: Code,
    worktime_cycle: Short,
    wage_type: Code,
    monthly_wage: Short,
    piece_rate: Short,
    base_wage: Short,
    performance_rule: Long,
    wage_other: Long,
    probation_wage: Short,
    payday: DayOfMonth,
    sign_date: Date,
    employer_sign_date: Date,
    employee_sign_date: Date,
}

impl ContractForm {
    /// Normalize any JSON value; non-objects count as an empty payload
    pub fn from_value(payload: &Value) -> Self {
        match payload.as_object() {
            Some(map) => Self::normalize(map),
            None => Self::default(),
        }
    }
}
