//! # Client-side form validation
//!
//! These checks run before any request is sent; a failure blocks submission
//! and is shown inline. They mirror the backend's own rules (10-digit phone,
//! minimum password length) so the common failures never cost a round-trip.

use store::UserRole;

/// Email addresses must belong to this domain to register.
pub const ALLOWED_EMAIL_DOMAIN: &str = "gmail.com";

/// Minimum password length, matching the backend rule.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a role.")]
    RoleRequired,
    #[error("Full name is required.")]
    FullNameRequired,
    #[error("Phone number must be exactly 10 digits.")]
    Phone,
    #[error("Email must be a valid @{ALLOWED_EMAIL_DOMAIN} address.")]
    Email,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::Phone)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    let suffix = format!("@{ALLOWED_EMAIL_DOMAIN}");
    if email.len() > suffix.len() && email.ends_with(&suffix) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

pub fn validate_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// An image (or resume) picked in a file input, held as raw bytes until the
/// multipart request is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Build an upload from a picked file, guessing the content type from
    /// the extension.
    pub fn from_file(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        };
        Self {
            file_name,
            mime: mime.to_string(),
            bytes,
        }
    }
}

/// Everything collected by the registration form.
///
/// Profile fields overlap between roles (department, college, experience,
/// designation are each shared by two of them); [`fields`](Self::fields)
/// narrows the struct down to exactly the set the backend expects for the
/// selected role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub role: Option<UserRole>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,

    // student
    pub dob: String,
    pub gender: String,
    pub course: String,
    pub semester: String,
    pub roll_no: String,

    // teacher
    pub qualification: String,
    pub position: String,

    // placement officer
    pub office_role: String,

    // shared
    pub college: String,
    pub department: String,
    pub designation: String,
    pub experience: String,

    pub image: Option<ImageUpload>,
}

impl RegistrationForm {
    /// Run every client-side check. Nothing is sent unless this passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.role.is_none() {
            return Err(ValidationError::RoleRequired);
        }
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::FullNameRequired);
        }
        validate_phone(&self.phone)?;
        validate_email(&self.email)?;
        validate_password(&self.password, &self.confirm_password)?;
        Ok(())
    }

    /// The exact `(name, value)` pairs for the multipart body: common account
    /// fields plus the role-specific profile set. An unselected or
    /// unrecognized role falls back to the student field set, consistent with
    /// the rendering fallback.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let role = self.role.unwrap_or(UserRole::Student);
        let mut fields = vec![
            ("role", role.as_str().to_string()),
            ("full_name", self.full_name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.trim().to_string()),
            ("password", self.password.clone()),
        ];
        match role {
            UserRole::Teacher => {
                fields.push(("designation", self.designation.clone()));
                fields.push(("qualification", self.qualification.clone()));
                fields.push(("department", self.department.clone()));
                fields.push(("experience", self.experience.clone()));
                fields.push(("position", self.position.clone()));
            }
            UserRole::Placement => {
                fields.push(("designation", self.designation.clone()));
                fields.push(("office_role", self.office_role.clone()));
                fields.push(("experience", self.experience.clone()));
                fields.push(("college", self.college.clone()));
            }
            UserRole::Student | UserRole::Unknown => {
                fields.push(("dob", self.dob.clone()));
                fields.push(("gender", self.gender.clone()));
                fields.push(("college", self.college.clone()));
                fields.push(("department", self.department.clone()));
                fields.push(("course", self.course.clone()));
                fields.push(("semester", self.semester.clone()));
                fields.push(("roll_no", self.roll_no.clone()));
            }
        }
        fields
    }
}

/// Editable subset of the student profile, PATCHed as multipart. `None`
/// fields are omitted so the backend leaves them unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub college: Option<String>,
    pub department: Option<String>,
    pub course: Option<String>,
    pub semester: Option<String>,
    pub roll_no: Option<String>,
    pub skills: Option<String>,
    pub image: Option<ImageUpload>,
    pub resume: Option<ImageUpload>,
}

impl ProfileUpdate {
    /// Text `(name, value)` pairs for the fields actually being changed.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        let mut push = |name, value: &Option<String>| {
            if let Some(v) = value {
                fields.push((name, v.clone()));
            }
        };
        push("dob", &self.dob);
        push("gender", &self.gender);
        push("college", &self.college);
        push("department", &self.department);
        push("course", &self.course);
        push("semester", &self.semester);
        push("roll_no", &self.roll_no);
        push("skills", &self.skills);
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty() && self.image.is_none() && self.resume.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_student_form() -> RegistrationForm {
        RegistrationForm {
            role: Some(UserRole::Student),
            full_name: "Ravi Kumar".to_string(),
            email: "a@gmail.com".to_string(),
            phone: "9876543210".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            dob: "2004-06-12".to_string(),
            gender: "male".to_string(),
            college: "Govt Engineering College".to_string(),
            department: "Computer Science".to_string(),
            course: "ug".to_string(),
            semester: "6".to_string(),
            roll_no: "2026102400".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn short_phone_is_rejected_before_any_request() {
        let mut form = valid_student_form();
        form.phone = "12345".to_string();
        assert_eq!(form.validate(), Err(ValidationError::Phone));
    }

    #[test]
    fn phone_with_letters_is_rejected() {
        assert_eq!(validate_phone("98765x3210"), Err(ValidationError::Phone));
    }

    #[test]
    fn wrong_email_domain_is_rejected() {
        assert_eq!(validate_email("a@college.edu"), Err(ValidationError::Email));
        assert_eq!(validate_email("@gmail.com"), Err(ValidationError::Email));
        assert!(validate_email("a@gmail.com").is_ok());
    }

    #[test]
    fn password_rules() {
        assert_eq!(
            validate_password("short", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("longenough", "different1"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_password("longenough", "longenough").is_ok());
    }

    #[test]
    fn missing_role_blocks_submission() {
        let mut form = valid_student_form();
        form.role = None;
        assert_eq!(form.validate(), Err(ValidationError::RoleRequired));
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_student_form().validate().is_ok());
    }

    #[test]
    fn student_fields_are_exactly_the_student_set() {
        let names: Vec<&str> = valid_student_form()
            .fields()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(
            names,
            vec![
                "role", "full_name", "email", "phone", "password", "dob", "gender", "college",
                "department", "course", "semester", "roll_no"
            ]
        );
    }

    #[test]
    fn teacher_fields_are_exactly_the_teacher_set() {
        let mut form = valid_student_form();
        form.role = Some(UserRole::Teacher);
        form.designation = "Assistant Professor".to_string();
        form.qualification = "PhD".to_string();
        form.experience = "8".to_string();
        form.position = "faculty".to_string();
        let names: Vec<&str> = form.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "role", "full_name", "email", "phone", "password", "designation",
                "qualification", "department", "experience", "position"
            ]
        );
    }

    #[test]
    fn placement_fields_are_exactly_the_placement_set() {
        let mut form = valid_student_form();
        form.role = Some(UserRole::Placement);
        let names: Vec<&str> = form.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "role", "full_name", "email", "phone", "password", "designation",
                "office_role", "experience", "college"
            ]
        );
    }

    #[test]
    fn image_upload_guesses_mime_from_extension() {
        assert_eq!(ImageUpload::from_file("me.JPG", vec![]).mime, "image/jpeg");
        assert_eq!(ImageUpload::from_file("me.png", vec![]).mime, "image/png");
        assert_eq!(
            ImageUpload::from_file("resume.pdf", vec![]).mime,
            "application/pdf"
        );
        assert_eq!(
            ImageUpload::from_file("noext", vec![]).mime,
            "application/octet-stream"
        );
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            skills: Some("Rust, SQL".to_string()),
            semester: Some("7".to_string()),
            ..Default::default()
        };
        let names: Vec<&str> = update.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["semester", "skills"]);
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }
}
