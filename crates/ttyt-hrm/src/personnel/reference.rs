use serde::{Deserialize, Serialize};

/// Display name used for a reference that does not resolve.
pub const UNRESOLVED_REFERENCE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub name: String,
}

/// Departments and positions of the medical centre, in display order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceCatalog {
    departments: Vec<Department>,
    positions: Vec<Position>,
}

impl ReferenceCatalog {
    pub fn new(departments: Vec<Department>, positions: Vec<Position>) -> Self {
        Self {
            departments,
            positions,
        }
    }

    pub fn standard() -> Self {
        let departments = [
            ("khth", "Phòng Kế hoạch - Tổng hợp"),
            ("tchc", "Phòng Tổ chức - Hành chính"),
            ("tckt", "Phòng Tài chính - Kế toán"),
            ("ddg", "Phòng Điều dưỡng"),
            ("kkb", "Khoa Khám bệnh"),
            ("hscc", "Khoa Hồi sức cấp cứu"),
            ("noi", "Khoa Nội tổng hợp"),
            ("ngoai", "Khoa Ngoại tổng hợp"),
            ("san", "Khoa Phụ sản"),
            ("nhi", "Khoa Nhi"),
            ("xn", "Khoa Xét nghiệm - Chẩn đoán hình ảnh"),
            ("ksbt", "Khoa Kiểm soát bệnh tật"),
        ]
        .into_iter()
        .map(|(id, name)| Department {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        let positions = [
            ("gd", "Giám đốc"),
            ("pgd", "Phó Giám đốc"),
            ("tp", "Trưởng phòng"),
            ("tk", "Trưởng khoa"),
            ("ddt", "Điều dưỡng trưởng"),
            ("bs", "Bác sĩ"),
            ("ys", "Y sĩ"),
            ("dd", "Điều dưỡng"),
            ("ktv", "Kỹ thuật viên"),
            ("ds", "Dược sĩ"),
            ("nv", "Nhân viên"),
        ]
        .into_iter()
        .map(|(id, name)| Position {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        Self::new(departments, positions)
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }

    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|position| position.id == id)
    }

    pub fn department_name(&self, id: &str) -> &str {
        self.department(id)
            .map(|department| department.name.as_str())
            .unwrap_or(UNRESOLVED_REFERENCE)
    }

    pub fn position_name(&self, id: &str) -> &str {
        self.position(id)
            .map(|position| position.name.as_str())
            .unwrap_or(UNRESOLVED_REFERENCE)
    }
}
