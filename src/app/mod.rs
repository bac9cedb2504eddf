// src/app/mod.rs  -  In-memory UI state + input dispatch
//
// Every change happens synchronously inside `handle` in response to one
// input. Rendering reads this state; it never mutates it.
pub mod forms;
pub mod nav;
pub mod session;

pub use forms::{AuthField, AuthForm, AuthMode, AuthRequest, OtpForm, ProfileField, ProfileForm};
pub use nav::{Screen, Section};
pub use session::{Role, Session, User};

use std::collections::BTreeSet;

use crate::auth::{AuthGateway, Registration};
use crate::config::AppConfig;
use crate::i18n::{keys, Language};
use crate::market::Market;

/// Terminal-independent key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Esc,
    /// F2
    SwitchLanguage,
    /// F10
    Logout,
    /// Ctrl+C
    Quit,
}

pub struct App {
    pub screen:     Screen,
    pub section:    Section,
    pub language:   Language,
    pub session:    Session,
    pub auth:       AuthForm,
    pub otp:        OtpForm,
    pub profile:    ProfileForm,
    pub market:     Market,
    /// Registration waiting for its code
    pub pending:    Option<Registration>,
    /// Job ids the user applied for
    pub applied:    BTreeSet<u32>,
    /// Asset ids with a lease request
    pub leased:     BTreeSet<u32>,
    /// Worker ids with a hire request
    pub hired:      BTreeSet<u32>,
    /// Notice ids already read
    pub read:       BTreeSet<u32>,
    /// List cursor inside the current section
    pub cursor:     usize,
    /// Phrase key of the last status message
    pub status:     Option<&'static str>,
    pub show_otp_hint: bool,
    pub quit:       bool,
    gateway:        Box<dyn AuthGateway>,
}

impl App {
    pub fn new(cfg: &AppConfig, gateway: Box<dyn AuthGateway>) -> Self {
        let mut app = Self {
            screen:   Screen::Landing,
            section:  Section::Home,
            language: cfg.language,
            session:  Session::default(),
            auth:     AuthForm::prefilled(cfg.role, &cfg.name, &cfg.phone, &cfg.village),
            otp:      OtpForm::default(),
            profile:  ProfileForm::default(),
            market:   Market::sample(),
            pending:  None,
            applied:  BTreeSet::new(),
            leased:   BTreeSet::new(),
            hired:    BTreeSet::new(),
            read:     BTreeSet::new(),
            cursor:   0,
            status:   None,
            show_otp_hint: cfg.show_otp_hint,
            quit:     false,
            gateway,
        };
        if cfg.demo {
            app.start_demo(cfg);
        }
        app
    }

    fn start_demo(&mut self, cfg: &AppConfig) {
        let name = if cfg.name.is_empty() { "Demo" } else { cfg.name.as_str() };
        let reg = Registration {
            name:    name.to_string(),
            phone:   if cfg.phone.is_empty() { "9999999999".into() } else { cfg.phone.clone() },
            village: cfg.village.clone(),
            role:    cfg.role,
        };
        match self.gateway.verify_code(&reg, "000000") {
            Ok(user) => self.enter_dashboard(user),
            Err(e)   => log::warn!("[demo] mock verification failed: {e}"),
        }
    }

    // ── Navigation ────────────────────────────────────────────────────────────
    pub fn go(&mut self, screen: Screen) {
        if self.screen != screen {
            log::info!("[nav] {} -> {}", self.screen, screen);
        }
        self.screen = screen;
        self.status = None;
    }

    pub fn select_section(&mut self, section: Section) {
        log::debug!("[nav] section {}", section);
        self.section = section;
        self.cursor  = 0;
        self.status  = None;
        if section == Section::Profile {
            if let Some(u) = self.session.user() {
                self.profile = ProfileForm::from_user(u);
            }
        }
    }

    pub fn switch_language(&mut self) {
        self.language = self.language.next();
        log::info!("[i18n] language -> {}", self.language);
    }

    fn enter_dashboard(&mut self, user: User) {
        self.profile = ProfileForm::from_user(&user);
        self.session.sign_in(user);
        self.section = Section::Home;
        self.cursor  = 0;
        self.go(Screen::Dashboard);
    }

    pub fn logout(&mut self) {
        self.session.sign_out();
        self.pending = None;
        self.otp.clear();
        self.auth.password.clear();
        self.applied.clear();
        self.leased.clear();
        self.hired.clear();
        self.read.clear();
        self.go(Screen::Landing);
    }

    // ── Input ─────────────────────────────────────────────────────────────────
    pub fn handle(&mut self, input: Input) {
        log::debug!("[input] {:?} on {}", input, self.screen);
        match input {
            Input::Quit => { self.quit = true; return; }
            Input::SwitchLanguage => { self.switch_language(); return; }
            _ => {}
        }
        match self.screen {
            Screen::Landing   => self.handle_landing(input),
            Screen::Auth      => self.handle_auth(input),
            Screen::Otp       => self.handle_otp(input),
            Screen::Dashboard => self.handle_dashboard(input),
        }
    }

    fn handle_landing(&mut self, input: Input) {
        match input {
            Input::Enter => self.go(Screen::Auth),
            Input::Esc   => self.quit = true,
            _ => {}
        }
    }

    fn handle_auth(&mut self, input: Input) {
        match input {
            Input::Esc => self.go(Screen::Landing),
            Input::Up | Input::BackTab => self.auth.focus_prev(),
            Input::Down | Input::Tab   => self.auth.focus_next(),
            Input::Left | Input::Right => self.auth.toggle(),
            Input::Char(c)   => self.auth.type_char(c),
            Input::Backspace => self.auth.backspace(),
            Input::Enter     => self.submit_auth(),
            _ => {}
        }
    }

    fn submit_auth(&mut self) {
        let Some(req) = self.auth.submit() else {
            self.status = Some(keys::errRequired);
            return;
        };
        match req {
            AuthRequest::Login { phone, password, role } => {
                match self.gateway.login(&phone, &password, role) {
                    Ok(user) => {
                        self.auth.password.clear();
                        self.enter_dashboard(user);
                    }
                    Err(e) => {
                        log::warn!("[auth] login failed: {e}");
                        self.status = Some(keys::errRequired);
                    }
                }
            }
            AuthRequest::Register(reg) => {
                if let Err(e) = self.gateway.request_code(&reg.phone) {
                    log::warn!("[auth] code request failed: {e}");
                }
                self.auth.password.clear();
                self.pending = Some(reg);
                self.otp.clear();
                self.go(Screen::Otp);
            }
        }
    }

    fn handle_otp(&mut self, input: Input) {
        match input {
            Input::Esc => {
                self.pending = None;
                self.otp.clear();
                self.go(Screen::Auth);
            }
            Input::Char(c)   => self.otp.type_char(c),
            Input::Backspace => self.otp.backspace(),
            Input::Tab => {
                if let Some(reg) = &self.pending {
                    if let Err(e) = self.gateway.request_code(&reg.phone) {
                        log::warn!("[auth] code request failed: {e}");
                    }
                }
                self.otp.clear();
                self.status = Some(keys::codeResent);
            }
            Input::Enter => self.submit_otp(),
            _ => {}
        }
    }

    fn submit_otp(&mut self) {
        let Some(reg) = self.pending.clone() else {
            self.go(Screen::Auth);
            return;
        };
        if !self.otp.is_complete() {
            self.status = Some(keys::errCode);
            return;
        }
        match self.gateway.verify_code(&reg, &self.otp.digits) {
            Ok(user) => {
                self.pending = None;
                self.otp.clear();
                self.enter_dashboard(user);
            }
            Err(e) => {
                log::debug!("[auth] verification rejected: {e}");
                self.status = Some(keys::errCode);
            }
        }
    }

    fn handle_dashboard(&mut self, input: Input) {
        match input {
            Input::Logout  => return self.logout(),
            Input::Tab     => return self.select_section(self.section.next()),
            Input::BackTab => return self.select_section(self.section.prev()),
            _ => {}
        }
        if self.section == Section::Profile {
            return self.handle_profile(input);
        }
        let len = self.list_len();
        match input {
            Input::Up   => self.cursor = self.cursor.saturating_sub(1),
            Input::Down => if self.cursor + 1 < len { self.cursor += 1 },
            Input::Enter if self.cursor < len => self.act_on_selection(),
            _ => {}
        }
    }

    fn handle_profile(&mut self, input: Input) {
        match input {
            Input::Up        => self.profile.focus_prev(),
            Input::Down      => self.profile.focus_next(),
            Input::Char(c)   => self.profile.type_char(c),
            Input::Backspace => self.profile.backspace(),
            Input::Enter => {
                let saved = match self.session.user_mut() {
                    Some(user) => self.profile.apply_to(user),
                    None       => false,
                };
                self.status = Some(if saved { keys::profileSaved } else { keys::errRequired });
            }
            _ => {}
        }
    }

    /// Rows in the current section's list
    pub fn list_len(&self) -> usize {
        match self.section {
            Section::Home | Section::Profile => 0,
            Section::FindWorkers   => self.market.workers.len(),
            Section::JobListings | Section::FindWork => self.market.jobs.len(),
            Section::LeaseAssets   => self.market.assets.len(),
            Section::News          => self.market.news.len(),
            Section::Notifications => self.market.notices.len(),
        }
    }

    fn act_on_selection(&mut self) {
        let i = self.cursor;
        self.status = match self.section {
            Section::FindWorkers => {
                let id = self.market.workers[i].id;
                Some(if self.hired.insert(id) { keys::hireSent } else { keys::alreadyRequested })
            }
            Section::FindWork | Section::JobListings => {
                let id = self.market.jobs[i].id;
                Some(if self.applied.insert(id) { keys::applicationSent } else { keys::alreadyApplied })
            }
            Section::LeaseAssets => {
                let id = self.market.assets[i].id;
                Some(if self.leased.insert(id) { keys::leaseSent } else { keys::alreadyRequested })
            }
            Section::Notifications => {
                self.read.insert(self.market.notices[i].id);
                Some(keys::markedRead)
            }
            Section::Home | Section::Profile | Section::News => self.status,
        };
    }

    // ── Derived values for drawing ────────────────────────────────────────────
    pub fn unread_count(&self) -> usize {
        self.market.notices.iter().filter(|n| !self.read.contains(&n.id)).count()
    }

    /// Applicants for a job, counting the signed-in user
    pub fn applicants_for(&self, job_id: u32) -> u32 {
        let base = self.market.jobs.iter().find(|j| j.id == job_id).map_or(0, |j| j.applicants);
        base + u32::from(self.applied.contains(&job_id))
    }
}
