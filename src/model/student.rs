use serde::{Deserialize, Serialize};

/// The one record the card presents. Fields are shown as given; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub course: String,
    pub id_number: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        course: impl Into<String>,
        id_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            id_number: id_number.into(),
        }
    }

    /// Record shown at startup.
    pub fn sample() -> Self {
        Self::new("John Mark P. Magdasal", "BSIT", "1351124")
    }

    /// Name as printed on the card. Empty or blank names stay blank.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_the_startup_record() {
        let student = Student::sample();
        assert_eq!(student.name, "John Mark P. Magdasal");
        assert_eq!(student.course, "BSIT");
        assert_eq!(student.id_number, "1351124");
    }

    #[test]
    fn display_name_is_upper_cased() {
        assert_eq!(Student::sample().display_name(), "JOHN MARK P. MAGDASAL");
        assert_eq!(Student::new("José Ñuñez", "", "").display_name(), "JOSÉ ÑUÑEZ");
    }

    #[test]
    fn blank_names_render_blank() {
        assert_eq!(Student::default().display_name(), "");
        assert_eq!(Student::new("   ", "", "").display_name(), "   ");
    }
}
