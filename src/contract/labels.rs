//! Display labels for the coded enum fields
//!
//! Unknown codes map to an empty label instead of failing.

/// Contract duration scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermType {
    FixedTerm,
    OpenEnded,
    TaskCompletion,
}

impl TermType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(TermType::FixedTerm),
            "2" => Some(TermType::OpenEnded),
            "3" => Some(TermType::TaskCompletion),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TermType::FixedTerm => "固定期限",
            TermType::OpenEnded => "无固定期限",
            TermType::TaskCompletion => "以完成任务为期限",
        }
    }
}

/// Working-hour regime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorktimeType {
    Standard,
    Aggregated,
    Unscheduled,
}

impl WorktimeType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(WorktimeType::Standard),
            "2" => Some(WorktimeType::Aggregated),
            "3" => Some(WorktimeType::Unscheduled),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorktimeType::Standard => "标准工时",
            WorktimeType::Aggregated => "综合工时",
            WorktimeType::Unscheduled => "不定时工时",
        }
    }
}

/// Compensation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WageType {
    Monthly,
    PieceRate,
    BasePlusPerformance,
    Other,
}

impl WageType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(WageType::Monthly),
            "2" => Some(WageType::PieceRate),
            "3" => Some(WageType::BasePlusPerformance),
            "4" => Some(WageType::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WageType::Monthly => "月工资",
            WageType::PieceRate => "计件",
            WageType::BasePlusPerformance => "基本+绩效",
            WageType::Other => "其他",
        }
    }
}

pub fn term_type_label(code: &str) -> &'static str {
    TermType::from_code(code).map_or("", TermType::label)
}

pub fn worktime_type_label(code: &str) -> &'static str {
    WorktimeType::from_code(code).map_or("", WorktimeType::label)
}

pub fn wage_type_label(code: &str) -> &'static str {
    WageType::from_code(code).map_or("", WageType::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_labels() {
        assert_eq!(term_type_label("1"), "固定期限");
        assert_eq!(term_type_label("2"), "无固定期限");
        assert_eq!(term_type_label("3"), "以完成任务为期限");
    }

    #[test]
    fn test_worktime_labels() {
        assert_eq!(worktime_type_label("1"), "标准工时");
        assert_eq!(worktime_type_label("2"), "综合工时");
        assert_eq!(worktime_type_label("3"), "不定时工时");
    }

    #[test]
    fn test_wage_labels() {
        assert_eq!(wage_type_label("1"), "月工资");
        assert_eq!(wage_type_label("2"), "计件");
        assert_eq!(wage_type_label("3"), "基本+绩效");
        assert_eq!(wage_type_label("4"), "其他");
    }

    #[test]
    fn test_unknown_codes_map_to_empty() {
        assert_eq!(term_type_label(""), "");
        assert_eq!(term_type_label("4"), "");
        assert_eq!(worktime_type_label("x"), "");
        assert_eq!(wage_type_label("5"), "");
    }
}
