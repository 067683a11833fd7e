use serde::{Deserialize, Serialize};

use super::domain::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationBucket {
    SpecialistLevelTwo,
    SpecialistLevelOne,
    University,
    College,
    Intermediate,
    Other,
}

impl QualificationBucket {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::SpecialistLevelTwo,
            Self::SpecialistLevelOne,
            Self::University,
            Self::College,
            Self::Intermediate,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SpecialistLevelTwo => "CKII",
            Self::SpecialistLevelOne => "CKI",
            Self::University => "ĐH",
            Self::College => "CĐ",
            Self::Intermediate => "TC",
            Self::Other => "Khác",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::SpecialistLevelTwo => 0,
            Self::SpecialistLevelOne => 1,
            Self::University => 2,
            Self::College => 3,
            Self::Intermediate => 4,
            Self::Other => 5,
        }
    }
}

/// One row of the classification table: the bucket applies when the text
/// contains any of the markers.
#[derive(Debug, Clone, Copy)]
pub struct QualificationRule {
    pub bucket: QualificationBucket,
    pub markers: &'static [&'static str],
}

impl QualificationRule {
    fn matches(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| text.contains(marker))
    }
}

/// Most senior first. "CKII" must precede "CKI" since the former contains the
/// latter.
pub const QUALIFICATION_RULES: &[QualificationRule] = &[
    QualificationRule {
        bucket: QualificationBucket::SpecialistLevelTwo,
        markers: &["CKII"],
    },
    QualificationRule {
        bucket: QualificationBucket::SpecialistLevelOne,
        markers: &["CKI"],
    },
    QualificationRule {
        bucket: QualificationBucket::University,
        markers: &["ĐH", "Cử nhân"],
    },
    QualificationRule {
        bucket: QualificationBucket::College,
        markers: &["CĐ"],
    },
    QualificationRule {
        bucket: QualificationBucket::Intermediate,
        markers: &["TC"],
    },
];

pub fn classify_specialization(text: Option<&str>) -> QualificationBucket {
    let text = text.unwrap_or_default();
    QUALIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.bucket)
        .unwrap_or(QualificationBucket::Other)
}

pub fn classify_employee(employee: &Employee) -> QualificationBucket {
    classify_specialization(employee.highest_specialization.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senior_marker_wins_over_contained_junior_marker() {
        assert_eq!(
            classify_specialization(Some("Thạc sĩ CKII Nội khoa")),
            QualificationBucket::SpecialistLevelTwo
        );
        assert_eq!(
            classify_specialization(Some("Bác sĩ CKI Ngoại")),
            QualificationBucket::SpecialistLevelOne
        );
    }

    #[test]
    fn university_accepts_both_markers() {
        assert_eq!(
            classify_specialization(Some("ĐH Y đa khoa")),
            QualificationBucket::University
        );
        assert_eq!(
            classify_specialization(Some("Cử nhân Điều dưỡng")),
            QualificationBucket::University
        );
    }

    #[test]
    fn first_rule_in_table_order_decides_mixed_text() {
        assert_eq!(
            classify_specialization(Some("CĐ Dược, liên thông ĐH")),
            QualificationBucket::University
        );
        assert_eq!(
            classify_specialization(Some("TC Y sĩ, CĐ Điều dưỡng")),
            QualificationBucket::College
        );
    }

    #[test]
    fn missing_or_unmatched_text_falls_back_to_other() {
        assert_eq!(classify_specialization(None), QualificationBucket::Other);
        assert_eq!(classify_specialization(Some("")), QualificationBucket::Other);
        assert_eq!(
            classify_specialization(Some("Sơ cấp dược")),
            QualificationBucket::Other
        );
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(
            classify_specialization(Some("cki nội")),
            QualificationBucket::Other
        );
    }

    #[test]
    fn indices_follow_display_order() {
        for (position, bucket) in QualificationBucket::ordered().into_iter().enumerate() {
            assert_eq!(bucket.index(), position);
        }
    }
}
