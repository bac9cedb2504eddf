// src/auth.rs  -  AuthGateway trait + always-succeeding mock
//
// There is no backend. The mock accepts any credentials and any 6-digit
// code; a real gateway can replace it without touching the screens.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::app::{Role, User};

pub const CODE_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("verification code must be exactly 6 digits")]
    MalformedCode,
}

/// Details collected by the registration form, held until the code is verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name:    String,
    pub phone:   String,
    pub village: String,
    pub role:    Role,
}

pub trait AuthGateway {
    fn login(&mut self, phone: &str, password: &str, role: Role) -> Result<User, AuthError>;
    /// Ask for a one-time code to be sent to `phone`
    fn request_code(&mut self, phone: &str) -> Result<(), AuthError>;
    fn verify_code(&mut self, reg: &Registration, code: &str) -> Result<User, AuthError>;
}

pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

pub struct MockAuthGateway {
    rng: SmallRng,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    fn fabricate_id(&mut self) -> String {
        format!("FC-{:06}", self.rng.gen_range(0..1_000_000u32))
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self { Self::new() }
}

impl AuthGateway for MockAuthGateway {
    fn login(&mut self, phone: &str, _password: &str, role: Role) -> Result<User, AuthError> {
        log::debug!("[auth] mock login for {phone}");
        Ok(User {
            id:       self.fabricate_id(),
            name:     phone.to_string(),
            phone:    phone.to_string(),
            village:  String::new(),
            role,
            verified: true,
        })
    }

    fn request_code(&mut self, phone: &str) -> Result<(), AuthError> {
        log::debug!("[auth] mock code requested for {phone}");
        Ok(())
    }

    fn verify_code(&mut self, reg: &Registration, code: &str) -> Result<User, AuthError> {
        if !is_well_formed_code(code) {
            return Err(AuthError::MalformedCode);
        }
        log::debug!("[auth] mock code accepted for {}", reg.phone);
        Ok(User {
            id:       self.fabricate_id(),
            name:     reg.name.clone(),
            phone:    reg.phone.clone(),
            village:  reg.village.clone(),
            role:     reg.role,
            verified: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reg() -> Registration {
        Registration {
            name:    "Kiran".into(),
            phone:   "9000000001".into(),
            village: "Anand".into(),
            role:    Role::Farmer,
        }
    }

    #[rstest]
    #[case("123456")]
    #[case("000000")]
    #[case("999999")]
    fn any_six_digits_verify(#[case] code: &str) {
        let mut gw = MockAuthGateway::with_seed(7);
        let user = gw.verify_code(&reg(), code).unwrap();
        assert!(user.verified);
        assert_eq!(user.name, "Kiran");
        assert_eq!(user.role, Role::Farmer);
        assert!(user.id.starts_with("FC-"));
    }

    #[rstest]
    #[case("")]
    #[case("12345")]
    #[case("1234567")]
    #[case("12a456")]
    #[case("١٢٣٤٥٦")]
    fn malformed_codes_are_rejected(#[case] code: &str) {
        let mut gw = MockAuthGateway::with_seed(7);
        assert_eq!(gw.verify_code(&reg(), code), Err(AuthError::MalformedCode));
    }

    #[test]
    fn login_accepts_anything() {
        let mut gw = MockAuthGateway::with_seed(1);
        let user = gw.login("42", "", Role::Worker).unwrap();
        assert_eq!(user.phone, "42");
        assert_eq!(user.role, Role::Worker);
        assert!(gw.request_code("42").is_ok());
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let a = MockAuthGateway::with_seed(99).login("1", "x", Role::Farmer).unwrap();
        let b = MockAuthGateway::with_seed(99).login("1", "x", Role::Farmer).unwrap();
        assert_eq!(a.id, b.id);
    }
}
