//! Authoritative contract validation
//!
//! [`validate`] is a pure function of the payload: it normalizes every field,
//! runs every rule without short-circuiting and returns the complete ordered
//! error list together with the normalized data. The same rule set runs in
//! the form layer for early feedback, so messages and their order are part of
//! the contract and must stay byte-identical.

use super::form::ContractForm;
use super::labels::{WageType, WorktimeType, term_type_label, wage_type_label, worktime_type_label};
use crate::core::error::{SiteError, ValidationError};
use crate::core::validation::validators::{
    date_format, day_of_month, identity_number, required, required_when,
};
use serde::Serialize;
use serde_json::Value;

/// Fields that must be non-empty, with the label used in their message
pub const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("employer_name", "甲方用人单位"),
    ("employee_name", "乙方姓名"),
    ("employee_id", "身份证号"),
    ("term_type", "合同期限方式"),
    ("start_date", "起始日期"),
    ("position", "工作岗位"),
    ("work_location", "工作地点"),
    ("wage_type", "工资方式"),
    ("payday", "发薪日"),
    ("sign_date", "签订日期"),
];

/// Date fields checked for `YYYY-MM-DD` when present
pub const DATE_FIELDS: &[(&str, &str)] = &[
    ("start_date", "起始日期"),
    ("end_date", "结束日期"),
    ("probation_end_date", "试用期截止"),
    ("sign_date", "签订日期"),
    ("employer_sign_date", "甲方签章日期"),
    ("employee_sign_date", "乙方签字日期"),
];

pub const END_DATE_REQUIRED: &str = "固定期限/无固定期限合同必须填写结束日期";
pub const WORKTIME_CYCLE_REQUIRED: &str = "综合工时制度必须填写工时周期";
pub const MONTHLY_WAGE_REQUIRED: &str = "月工资方式必须填写月工资";
pub const PIECE_RATE_REQUIRED: &str = "计件方式必须填写计件单价";
pub const PERFORMANCE_WAGE_REQUIRED: &str = "基本+绩效方式必须填写基本工资和绩效计发办法";
pub const OTHER_WAGE_REQUIRED: &str = "其他工资方式必须填写说明";

/// Normalized form plus the derived display labels, ready for the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractData {
    #[serde(flatten)]
    pub form: ContractForm,
    pub term_type_label: &'static str,
    pub worktime_type_label: &'static str,
    pub wage_type_label: &'static str,
}

impl ContractData {
    /// Attach the display labels to a normalized form
    pub fn new(form: ContractForm) -> Self {
        Self {
            term_type_label: term_type_label(&form.term_type),
            worktime_type_label: worktime_type_label(&form.worktime_type),
            wage_type_label: wage_type_label(&form.wage_type),
            form,
        }
    }

    /// Every placeholder name with its value, labels last
    pub fn placeholders(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.form.iter().chain([
            ("term_type_label", self.term_type_label),
            ("worktime_type_label", self.worktime_type_label),
            ("wage_type_label", self.wage_type_label),
        ])
    }
}

/// Result of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Messages in rule order; empty means the payload is accepted
    pub errors: Vec<String>,
    pub data: ContractData,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn a non-empty error list into a validation failure
    pub fn into_result(self) -> Result<ContractData, SiteError> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(ValidationError::Rejected {
                errors: self.errors,
            }
            .into())
        }
    }
}

/// Validate a raw JSON payload
pub fn validate(payload: &Value) -> ValidationOutcome {
    validate_form(ContractForm::from_value(payload))
}

/// Validate an already normalized form
pub fn validate_form(form: ContractForm) -> ValidationOutcome {
    let mut errors = Vec::new();
    let mut check = |result: Result<(), String>| {
        if let Err(message) = result {
            errors.push(message);
        }
    };

    for &(field, label) in REQUIRED_FIELDS {
        check(required(label)(form.get(field).unwrap_or_default()));
    }

    check(identity_number()(&form.employee_id));

    for &(field, label) in DATE_FIELDS {
        check(date_format(label)(form.get(field).unwrap_or_default()));
    }

    check(required_when(form.term_type != "3", END_DATE_REQUIRED)(&[form.end_date.as_str()]));

    let worktime = WorktimeType::from_code(&form.worktime_type);
    check(required_when(
        worktime == Some(WorktimeType::Aggregated),
        WORKTIME_CYCLE_REQUIRED,
    )(&[form.worktime_cycle.as_str()]));

    let wage = WageType::from_code(&form.wage_type);
    check(required_when(wage == Some(WageType::Monthly), MONTHLY_WAGE_REQUIRED)(&[
        form.monthly_wage.as_str(),
    ]));
    check(required_when(wage == Some(WageType::PieceRate), PIECE_RATE_REQUIRED)(&[
        form.piece_rate.as_str(),
    ]));
    check(required_when(
        wage == Some(WageType::BasePlusPerformance),
        PERFORMANCE_WAGE_REQUIRED,
    )(&[form.base_wage.as_str(), form.performance_rule.as_str()]));
    check(required_when(wage == Some(WageType::Other), OTHER_WAGE_REQUIRED)(&[
        form.wage_other.as_str(),
    ]));

    check(day_of_month()(&form.payday));

    ValidationOutcome {
        errors,
        data: ContractData::new(form),
    }
}
