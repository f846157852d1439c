use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Convert enum → spreadsheet string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Masuk",
            AttendanceStatus::Absent => "Tidak Masuk",
        }
    }

    /// Convert spreadsheet string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Masuk" => Some(AttendanceStatus::Present),
            "Tidak Masuk" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}
