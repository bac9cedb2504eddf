// src/app/forms.rs  -  Field bookkeeping for the auth, OTP and profile forms
use crate::auth::{Registration, CODE_LEN};
use crate::i18n::keys;

use super::session::{Role, User};

const PHONE_MAX: usize = 10;
const TEXT_MAX:  usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn label_key(self) -> &'static str {
        match self {
            AuthMode::Login    => keys::login,
            AuthMode::Register => keys::register,
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            AuthMode::Login    => keys::loginTitle,
            AuthMode::Register => keys::registerTitle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField { Mode, Role, Name, Village, Phone, Password }

impl AuthField {
    pub fn label_key(self) -> &'static str {
        match self {
            AuthField::Mode     => keys::mode,
            AuthField::Role     => keys::role,
            AuthField::Name     => keys::name,
            AuthField::Village  => keys::village,
            AuthField::Phone    => keys::phone,
            AuthField::Password => keys::password,
        }
    }

    /// Toggled with ←/→ instead of typed into
    pub fn is_choice(self) -> bool {
        matches!(self, AuthField::Mode | AuthField::Role)
    }
}

/// Combined login / registration form
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode:     AuthMode,
    pub role:     Role,
    pub name:     String,
    pub village:  String,
    pub phone:    String,
    pub password: String,
    focus:        usize,
}

/// What a submitted auth form asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login { phone: String, password: String, role: Role },
    Register(Registration),
}

impl AuthForm {
    pub fn prefilled(role: Role, name: &str, phone: &str, village: &str) -> Self {
        Self {
            role,
            name:    name.to_string(),
            village: village.to_string(),
            phone:   phone.chars().filter(char::is_ascii_digit).take(PHONE_MAX).collect(),
            ..Self::default()
        }
    }

    /// Rows shown for the current mode, top to bottom
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Mode, AuthField::Role, AuthField::Phone, AuthField::Password],
            AuthMode::Register => &[
                AuthField::Mode, AuthField::Role, AuthField::Name,
                AuthField::Village, AuthField::Phone, AuthField::Password,
            ],
        }
    }

    pub fn focused(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let n = self.fields().len();
        self.focus = (self.focus + n - 1) % n;
    }

    /// ←/→ on a choice row
    pub fn toggle(&mut self) {
        match self.focused() {
            AuthField::Mode => {
                self.mode = match self.mode {
                    AuthMode::Login    => AuthMode::Register,
                    AuthMode::Register => AuthMode::Login,
                };
                // Keep the cursor on the mode row; row counts differ per mode.
                self.focus = 0;
            }
            AuthField::Role => self.role = self.role.toggled(),
            _ => {}
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name     => &self.name,
            AuthField::Village  => &self.village,
            AuthField::Phone    => &self.phone,
            AuthField::Password => &self.password,
            AuthField::Mode | AuthField::Role => "",
        }
    }

    pub fn type_char(&mut self, c: char) {
        match self.focused() {
            AuthField::Phone    => push_digit(&mut self.phone, c, PHONE_MAX),
            AuthField::Name     => push_text(&mut self.name, c),
            AuthField::Village  => push_text(&mut self.village, c),
            AuthField::Password => push_text(&mut self.password, c),
            AuthField::Mode | AuthField::Role => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focused() {
            AuthField::Phone    => { self.phone.pop(); }
            AuthField::Name     => { self.name.pop(); }
            AuthField::Village  => { self.village.pop(); }
            AuthField::Password => { self.password.pop(); }
            AuthField::Mode | AuthField::Role => {}
        }
    }

    /// `None` while a required field is empty
    pub fn submit(&self) -> Option<AuthRequest> {
        let filled = |s: &str| !s.trim().is_empty();
        match self.mode {
            AuthMode::Login => (filled(&self.phone) && filled(&self.password)).then(|| AuthRequest::Login {
                phone:    self.phone.clone(),
                password: self.password.clone(),
                role:     self.role,
            }),
            AuthMode::Register => (filled(&self.name) && filled(&self.phone) && filled(&self.password))
                .then(|| AuthRequest::Register(Registration {
                    name:    self.name.trim().to_string(),
                    phone:   self.phone.clone(),
                    village: self.village.trim().to_string(),
                    role:    self.role,
                })),
        }
    }
}

/// Six digit slots
#[derive(Debug, Clone, Default)]
pub struct OtpForm {
    pub digits: String,
}

impl OtpForm {
    pub fn type_char(&mut self, c: char) {
        push_digit(&mut self.digits, c, CODE_LEN);
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == CODE_LEN
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField { Name, Phone, Village }

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Name, ProfileField::Phone, ProfileField::Village];

    pub fn label_key(self) -> &'static str {
        match self {
            ProfileField::Name    => keys::name,
            ProfileField::Phone   => keys::phone,
            ProfileField::Village => keys::village,
        }
    }
}

/// Editable copy of the signed-in user's details
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name:    String,
    pub phone:   String,
    pub village: String,
    focus:       usize,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name:    user.name.clone(),
            phone:   user.phone.clone(),
            village: user.village.clone(),
            focus:   0,
        }
    }

    pub fn focused(&self) -> ProfileField {
        ProfileField::ALL[self.focus % ProfileField::ALL.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ProfileField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        let n = ProfileField::ALL.len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name    => &self.name,
            ProfileField::Phone   => &self.phone,
            ProfileField::Village => &self.village,
        }
    }

    pub fn type_char(&mut self, c: char) {
        match self.focused() {
            ProfileField::Name    => push_text(&mut self.name, c),
            ProfileField::Phone   => push_digit(&mut self.phone, c, PHONE_MAX),
            ProfileField::Village => push_text(&mut self.village, c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focused() {
            ProfileField::Name    => { self.name.pop(); }
            ProfileField::Phone   => { self.phone.pop(); }
            ProfileField::Village => { self.village.pop(); }
        }
    }

    /// Copy the edited fields into `user`. Returns false if name or phone is blank.
    pub fn apply_to(&self, user: &mut User) -> bool {
        if self.name.trim().is_empty() || self.phone.is_empty() {
            return false;
        }
        user.name    = self.name.trim().to_string();
        user.phone   = self.phone.clone();
        user.village = self.village.trim().to_string();
        true
    }
}

fn push_digit(buf: &mut String, c: char, max: usize) {
    if c.is_ascii_digit() && buf.len() < max {
        buf.push(c);
    }
}

fn push_text(buf: &mut String, c: char) {
    if !c.is_control() && buf.chars().count() < TEXT_MAX {
        buf.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_takes_digits_only_up_to_ten() {
        let mut f = AuthForm::default();
        while f.focused() != AuthField::Phone { f.focus_next(); }
        for c in "98x7-65 43210999".chars() { f.type_char(c); }
        assert_eq!(f.phone, "9876543210");
    }

    #[test]
    fn switching_mode_changes_rows_and_resets_focus() {
        let mut f = AuthForm::default();
        assert_eq!(f.fields().len(), 4);
        f.toggle();
        assert_eq!(f.mode, AuthMode::Register);
        assert_eq!(f.fields().len(), 6);
        assert_eq!(f.focused(), AuthField::Mode);
        f.focus_prev();
        assert_eq!(f.focused(), AuthField::Password);
    }

    #[test]
    fn role_row_toggles_role() {
        let mut f = AuthForm::default();
        f.focus_next();
        assert_eq!(f.focused(), AuthField::Role);
        f.toggle();
        assert_eq!(f.role, Role::Worker);
        assert_eq!(f.mode, AuthMode::Login);
    }

    #[test]
    fn login_requires_phone_and_password() {
        let mut f = AuthForm::prefilled(Role::Farmer, "", "9000000000", "");
        assert_eq!(f.submit(), None);
        f.password = "secret".into();
        assert_eq!(
            f.submit(),
            Some(AuthRequest::Login { phone: "9000000000".into(), password: "secret".into(), role: Role::Farmer })
        );
    }

    #[test]
    fn register_requires_name_but_not_village() {
        let mut f = AuthForm::prefilled(Role::Worker, "", "9000000000", "");
        f.mode = AuthMode::Register;
        f.password = "pw".into();
        assert_eq!(f.submit(), None);
        f.name = "  Asha ".into();
        match f.submit() {
            Some(AuthRequest::Register(r)) => {
                assert_eq!(r.name, "Asha");
                assert_eq!(r.role, Role::Worker);
                assert!(r.village.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn otp_accepts_six_digits_only() {
        let mut o = OtpForm::default();
        for c in "12a3456789".chars() { o.type_char(c); }
        assert_eq!(o.digits, "123456");
        assert!(o.is_complete());
        o.backspace();
        assert!(!o.is_complete());
    }

    #[test]
    fn profile_apply_rejects_blank_name() {
        let mut user = User {
            id: "FC-1".into(), name: "Old".into(), phone: "1".into(),
            village: String::new(), role: Role::Farmer, verified: true,
        };
        let mut p = ProfileForm::from_user(&user);
        p.name.clear();
        assert!(!p.apply_to(&mut user));
        assert_eq!(user.name, "Old");
        p.name = "New".into();
        p.focus_next();
        p.focus_next();
        for c in "Rajkot".chars() { p.type_char(c); }
        assert!(p.apply_to(&mut user));
        assert_eq!((user.name.as_str(), user.village.as_str()), ("New", "Rajkot"));
    }
}
