// src/tui/views.rs  -  One drawing function per screen / dashboard section
//
// Screens never hold literals of their own: every label goes through the
// Translator, keyed by a constant from `i18n::keys`.
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AuthField, AuthMode, ProfileField, Role, Screen, Section};
use crate::auth::CODE_LEN;
use crate::i18n::{keys, Translator};

const LANDING_FARMERS:  u32 = 1200;
const LANDING_WORKERS:  u32 = 3500;
const LANDING_VILLAGES: u32 = 80;

pub fn render(f: &mut Frame<'_>, app: &App, t: &Translator<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Min(8),     // screen
            Constraint::Length(2),  // status + key hints
        ])
        .split(f.area());

    f.render_widget(header(app, t), chunks[0]);
    match app.screen {
        Screen::Landing => f.render_widget(
            panel(landing_lines(t), t.t(keys::appName), Color::Green), chunks[1]),
        Screen::Auth => f.render_widget(
            panel(auth_lines(app, t), t.t(app.auth.mode.label_key()), Color::Cyan), chunks[1]),
        Screen::Otp => f.render_widget(
            panel(otp_lines(app, t), t.t(keys::verify), Color::Cyan), chunks[1]),
        Screen::Dashboard => draw_dashboard(f, chunks[1], app, t),
    }
    f.render_widget(footer(app, t), chunks[2]);
}

// ── Chrome ────────────────────────────────────────────────────────────────────
fn header<'a>(app: &App, t: &Translator<'a>) -> Paragraph<'a> {
    let who = match app.session.user() {
        Some(u) => t.format(keys::signedInAs, &[("name", u.name.as_str())]),
        None    => t.t(keys::guest).to_string(),
    };
    Paragraph::new(format!(
        " {}  |  {}: {}  |  {}",
        t.t(keys::appName), t.t(keys::language), app.language.native_name(), who
    ))
    .style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
}

fn footer<'a>(app: &App, t: &Translator<'a>) -> Paragraph<'a> {
    let hint = match app.screen {
        Screen::Landing   => keys::hintLanding,
        Screen::Auth      => keys::hintAuth,
        Screen::Otp       => keys::hintOtp,
        Screen::Dashboard => keys::hintDashboard,
    };
    let status = app.status.map(|k| t.t(k)).unwrap_or("");
    Paragraph::new(vec![
        Line::from(Span::styled(format!(" {status}"), Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(format!(" {}", t.t(hint)), Style::default().fg(Color::DarkGray))),
    ])
}

fn panel<'a>(lines: Vec<Line<'a>>, title: &'a str, color: Color) -> Paragraph<'a> {
    Paragraph::new(lines)
        .block(Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)))
        .wrap(Wrap { trim: false })
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Row prefixed with a cursor marker when selected
fn marked<'a>(selected: bool, mut spans: Vec<Span<'a>>) -> Line<'a> {
    let marker = if selected {
        Span::styled("▶ ", bold(Color::Yellow))
    } else {
        Span::raw("  ")
    };
    spans.insert(0, marker);
    Line::from(spans)
}

fn button_span<'a>(label: &'a str) -> Span<'a> {
    Span::styled(
        format!("[ {label} ]"),
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
    )
}

fn button<'a>(label: &'a str) -> Line<'a> {
    Line::from(button_span(label))
}

// ── Landing ───────────────────────────────────────────────────────────────────
pub(crate) fn landing_lines<'a>(t: &Translator<'a>) -> Vec<Line<'a>> {
    let feature = |title: &'a str, desc: &'a str| {
        Line::from(vec![
            Span::styled(format!("  • {}", t.t(title)), bold(Color::Cyan)),
            Span::raw("  "),
            Span::raw(t.t(desc)),
        ])
    };
    let stat = |key: &'a str, n: u32| t.format(key, &[("count", n.to_string().as_str())]);
    vec![
        Line::default(),
        Line::from(Span::styled(t.t(keys::welcome), bold(Color::Green))),
        Line::from(t.t(keys::tagline)),
        Line::default(),
        feature(keys::findWork, keys::findWorkDesc),
        feature(keys::findWorkers, keys::findWorkersDesc),
        feature(keys::leaseAssets, keys::leaseAssetsDesc),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "  {}   ·   {}   ·   {}",
                stat(keys::statFarmers, LANDING_FARMERS),
                stat(keys::statWorkers, LANDING_WORKERS),
                stat(keys::statVillages, LANDING_VILLAGES),
            ),
            Style::default().fg(Color::Magenta),
        )),
        Line::default(),
        button(t.t(keys::getStarted)),
    ]
}

// ── Auth ──────────────────────────────────────────────────────────────────────
/// Two options side by side, the chosen one highlighted
fn choice<'a>(t: &Translator<'a>, options: [&'a str; 2], first_chosen: bool) -> Vec<Span<'a>> {
    let opt = |key: &'a str, chosen: bool| {
        if chosen {
            Span::styled(format!("[{}]", t.t(key)), bold(Color::Cyan))
        } else {
            Span::styled(format!(" {} ", t.t(key)), dim())
        }
    };
    vec![opt(options[0], first_chosen), Span::raw("  "), opt(options[1], !first_chosen)]
}

pub(crate) fn auth_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let form = &app.auth;
    let mut lines = vec![
        Line::from(Span::styled(t.t(form.mode.title_key()), bold(Color::Green))),
        Line::default(),
    ];
    for &field in form.fields() {
        let value = match field {
            AuthField::Mode => choice(
                t, [AuthMode::Login.label_key(), AuthMode::Register.label_key()],
                form.mode == AuthMode::Login),
            AuthField::Role => choice(
                t, [Role::Farmer.label_key(), Role::Worker.label_key()],
                form.role == Role::Farmer),
            AuthField::Password => vec![Span::raw("•".repeat(form.password.chars().count()))],
            other => vec![Span::raw(form.value(other).to_string())],
        };
        let mut spans = vec![Span::styled(format!("{:<18}", t.t(field.label_key())), dim())];
        spans.extend(value);
        lines.push(marked(field == form.focused(), spans));
    }
    lines.push(Line::default());
    lines.push(button(t.t(form.mode.label_key())));
    lines
}

// ── OTP ───────────────────────────────────────────────────────────────────────
pub(crate) fn otp_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let phone = app.pending.as_ref().map(|r| r.phone.as_str()).unwrap_or("");
    let slots: Vec<Span<'a>> = (0..CODE_LEN)
        .map(|i| {
            let c = app.otp.digits.chars().nth(i).unwrap_or('_');
            Span::styled(format!(" {c} "), bold(Color::White).bg(Color::DarkGray))
        })
        .collect();
    let mut lines = vec![
        Line::from(Span::styled(t.t(keys::otpTitle), bold(Color::Green))),
        Line::from(t.format(keys::otpSentTo, &[("phone", phone)])),
        Line::default(),
        Line::from(slots),
        Line::default(),
    ];
    if app.show_otp_hint {
        lines.push(Line::from(Span::styled(t.t(keys::otpDemoHint), dim())));
    }
    lines.push(Line::from(vec![
        button_span(t.t(keys::verify)),
        Span::raw("   "),
        Span::styled(format!("Tab: {}", t.t(keys::resendCode)), dim()),
    ]));
    lines
}

// ── Dashboard ─────────────────────────────────────────────────────────────────
fn draw_dashboard(f: &mut Frame<'_>, area: Rect, app: &App, t: &Translator<'_>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(area);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|&s| {
            let mut label = t.t(s.label_key()).to_string();
            if s == Section::Notifications {
                let unread = app.unread_count();
                if unread > 0 { label = format!("{label} ({unread})"); }
            }
            let style = if s == app.section {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!(" {label}"), style)))
        })
        .chain([
            ListItem::new(Line::default()),
            ListItem::new(Line::from(Span::styled(format!(" F10: {}", t.t(keys::logout)), dim()))),
        ])
        .collect();
    let sidebar = List::new(items).block(Block::default()
        .title(format!(" {} ", t.t(keys::dashboard)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)));
    f.render_widget(sidebar, cols[0]);

    f.render_widget(
        panel(section_lines(app, t), t.t(app.section.label_key()), Color::Yellow),
        cols[1],
    );
}

pub(crate) fn section_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let lines = match app.section {
        Section::Home          => home_lines(app, t),
        Section::Profile       => profile_lines(app, t),
        Section::FindWorkers   => worker_lines(app, t),
        Section::JobListings   => job_listing_lines(app, t),
        Section::FindWork      => find_work_lines(app, t),
        Section::LeaseAssets   => asset_lines(app, t),
        Section::News          => news_lines(app, t),
        Section::Notifications => notice_lines(app, t),
    };
    if lines.is_empty() {
        vec![Line::from(Span::styled(t.t(keys::nothingHere), dim()))]
    } else {
        lines
    }
}

fn home_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let Some(user) = app.session.user() else { return Vec::new() };
    let count = |key: &'a str, n: usize| {
        Line::from(vec![
            Span::styled(format!("  {:<26}", t.t(key)), dim()),
            Span::styled(n.to_string(), bold(Color::Cyan)),
        ])
    };
    let verified = if user.verified {
        Span::styled(t.t(keys::verified), Style::default().fg(Color::Green))
    } else {
        Span::styled(t.t(keys::notVerified), Style::default().fg(Color::Red))
    };
    vec![
        Line::from(Span::styled(t.format(keys::greeting, &[("name", user.name.as_str())]), bold(Color::Green))),
        Line::from(vec![
            Span::raw(format!("{}: {}   ", t.t(keys::role), t.t(user.role.label_key()))),
            verified,
        ]),
        Line::default(),
        count(keys::openJobs, app.market.jobs.len()),
        count(keys::applications, app.applied.len()),
        count(keys::leaseRequests, app.leased.len()),
        count(keys::unread, app.unread_count()),
    ]
}

fn profile_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let form = &app.profile;
    let mut lines = vec![
        Line::from(Span::styled(t.t(keys::editProfile), bold(Color::Green))),
        Line::default(),
    ];
    for field in ProfileField::ALL {
        lines.push(marked(field == form.focused(), vec![
            Span::styled(format!("{:<18}", t.t(field.label_key())), dim()),
            Span::raw(form.value(field).to_string()),
        ]));
    }
    lines.push(Line::default());
    lines.push(button(t.t(keys::save)));
    lines
}

fn done_marker<'a>(done: bool, t: &Translator<'a>, done_key: &'a str, action_key: &'a str) -> Span<'a> {
    if done {
        Span::styled(format!("  ✔ {}", t.t(done_key)), Style::default().fg(Color::Green))
    } else {
        Span::styled(format!("  Enter: {}", t.t(action_key)), dim())
    }
}

fn money<'a>(t: &Translator<'a>, amount: u32) -> String {
    t.format(keys::perDay, &[("amount", amount.to_string().as_str())])
}

fn worker_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, w) in app.market.workers.iter().enumerate() {
        let skills: Vec<&str> = w.skills.iter().map(|s| t.t(s.label_key())).collect();
        lines.push(marked(i == app.cursor, vec![
            Span::styled(w.name, bold(Color::White)),
            Span::raw(format!("  ·  {}  ·  {}", t.t(w.village.label_key()), money(t, w.daily_rate))),
            done_marker(app.hired.contains(&w.id), t, keys::requested, keys::hire),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "    {}: {}  ·  {}",
                t.t(keys::skills),
                skills.join(", "),
                t.format(keys::experience, &[("count", w.experience_years.to_string().as_str())]),
            ),
            dim(),
        )));
    }
    lines
}

fn job_summary<'a>(app: &App, t: &Translator<'a>, i: usize) -> Vec<Span<'a>> {
    let j = &app.market.jobs[i];
    vec![
        Span::styled(t.t(j.kind.label_key()), bold(Color::White)),
        Span::raw(format!(
            "  ·  {}  ·  {}  ·  {}",
            t.t(j.village.label_key()),
            money(t, j.wage_per_day),
            t.format(keys::durationDays, &[("count", j.days.to_string().as_str())]),
        )),
    ]
}

fn job_listing_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, j) in app.market.jobs.iter().enumerate() {
        let mut spans = job_summary(app, t, i);
        if app.applied.contains(&j.id) {
            spans.push(Span::styled(format!("  ✔ {}", t.t(keys::applied)), Style::default().fg(Color::Green)));
        }
        lines.push(marked(i == app.cursor, spans));
        lines.push(Line::from(Span::styled(
            format!(
                "    {}  ·  {}  ·  {}",
                t.format(keys::postedBy, &[("name", j.farmer)]),
                t.format(keys::workersNeeded, &[("count", j.workers_needed.to_string().as_str())]),
                t.format(keys::applicants, &[("count", app.applicants_for(j.id).to_string().as_str())]),
            ),
            dim(),
        )));
    }
    lines
}

fn find_work_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    app.market.jobs.iter().enumerate()
        .map(|(i, j)| {
            let mut spans = job_summary(app, t, i);
            spans.push(done_marker(app.applied.contains(&j.id), t, keys::applied, keys::apply));
            marked(i == app.cursor, spans)
        })
        .collect()
}

fn asset_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    app.market.assets.iter().enumerate()
        .map(|(i, a)| marked(i == app.cursor, vec![
            Span::styled(t.t(a.kind.label_key()), bold(Color::White)),
            Span::raw(format!(
                "  ·  {}  ·  {}  ·  {}",
                t.format(keys::ownedBy, &[("name", a.owner)]),
                t.t(a.village.label_key()),
                money(t, a.rate_per_day),
            )),
            done_marker(app.leased.contains(&a.id), t, keys::requested, keys::requestLease),
        ]))
        .collect()
}

fn news_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, n) in app.market.news.iter().enumerate() {
        lines.push(marked(i == app.cursor, vec![Span::styled(t.t(n.title_key), bold(Color::White))]));
        lines.push(Line::from(Span::styled(format!("    {}", t.t(n.body_key)), dim())));
        lines.push(Line::default());
    }
    lines
}

fn notice_lines<'a>(app: &App, t: &Translator<'a>) -> Vec<Line<'a>> {
    app.market.notices.iter().enumerate()
        .map(|(i, n)| {
            let mut spans = Vec::new();
            if !app.read.contains(&n.id) {
                spans.push(Span::styled(format!("{} ", t.t(keys::new)), bold(Color::Magenta)));
            }
            spans.push(Span::raw(t.t(n.text_key)));
            marked(i == app.cursor, spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Input;
    use crate::auth::MockAuthGateway;
    use crate::config::AppConfig;
    use crate::i18n::{Language, TranslationTable};
    use ratatui::{backend::TestBackend, Terminal};

    fn text(lines: &[Line<'_>]) -> String {
        lines.iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn demo_app() -> App {
        App::new(&AppConfig { demo: true, ..AppConfig::default() }, Box::new(MockAuthGateway::with_seed(5)))
    }

    #[test]
    fn landing_follows_the_active_language() {
        let table = TranslationTable::builtin().unwrap();
        let en = text(&landing_lines(&Translator::new(&table, Language::En)));
        let gu = text(&landing_lines(&Translator::new(&table, Language::Gu)));
        assert!(en.contains("Welcome to FarmConnect"));
        assert!(gu.contains("ફાર્મ કનેક્ટમાં તમારું સ્વાગત છે"));
        assert!(gu.contains("1200+ ખેડૂતો"));
        assert!(!gu.contains("Welcome"));
    }

    #[test]
    fn auth_masks_password_and_shows_mode() {
        let table = TranslationTable::builtin().unwrap();
        let mut app = App::new(&AppConfig::default(), Box::new(MockAuthGateway::with_seed(5)));
        app.handle(Input::Enter);
        app.auth.password = "hunter2".into();
        let out = text(&auth_lines(&app, &Translator::new(&table, Language::Hi)));
        assert!(out.contains("अपने खाते में लॉगिन करें"));
        assert!(out.contains("•••••••"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn otp_shows_phone_and_filled_slots() {
        let table = TranslationTable::builtin().unwrap();
        let mut app = App::new(&AppConfig::default(), Box::new(MockAuthGateway::with_seed(5)));
        app.pending = Some(crate::auth::Registration {
            name: "A".into(), phone: "9123456780".into(), village: String::new(), role: Role::Farmer,
        });
        app.otp.digits = "42".into();
        let out = text(&otp_lines(&app, &Translator::new(&table, Language::En)));
        assert!(out.contains("sent to 9123456780"));
        assert!(out.contains(" 4  2  _ "));
        assert!(out.contains("any 6 digits"));
    }

    #[test]
    fn every_section_renders_something_in_every_language() {
        let table = TranslationTable::builtin().unwrap();
        let mut app = demo_app();
        for lang in Language::ALL {
            let t = Translator::new(&table, lang);
            for s in Section::ALL {
                app.select_section(s);
                assert!(!text(&section_lines(&app, &t)).trim().is_empty(), "{s} / {lang}");
            }
        }
    }

    #[test]
    fn job_type_labels_come_from_the_table() {
        let table = TranslationTable::builtin().unwrap();
        let mut app = demo_app();
        app.select_section(Section::FindWork);
        let hi = text(&section_lines(&app, &Translator::new(&table, Language::Hi)));
        assert!(hi.contains("कटाई"));
        assert!(hi.contains("₹450/दिन"));
    }

    #[test]
    fn applied_marker_appears_after_applying() {
        let table = TranslationTable::builtin().unwrap();
        let t = Translator::new(&table, Language::En);
        let mut app = demo_app();
        app.select_section(Section::JobListings);
        assert!(!text(&section_lines(&app, &t)).contains("✔ Applied"));
        app.handle(Input::Enter);
        let out = text(&section_lines(&app, &t));
        assert!(out.contains("✔ Applied"));
        assert!(out.contains("4 applicants"));
    }

    #[test]
    fn full_frame_draws_on_every_screen() {
        let table = TranslationTable::builtin().unwrap();
        let mut app = App::new(&AppConfig::default(), Box::new(MockAuthGateway::with_seed(5)));
        let mut term = Terminal::new(TestBackend::new(110, 32)).unwrap();
        let mut draw = |app: &App| {
            let t = Translator::new(&table, app.language);
            term.draw(|f| render(f, app, &t)).unwrap();
        };
        draw(&app);
        app.handle(Input::SwitchLanguage);
        app.handle(Input::Enter);
        draw(&app);
        app.handle(Input::Right);
        app.pending = Some(crate::auth::Registration {
            name: "A".into(), phone: "1".into(), village: String::new(), role: Role::Worker,
        });
        app.go(Screen::Otp);
        draw(&app);
        let mut app = demo_app();
        for _ in 0..Section::ALL.len() {
            draw(&app);
            app.handle(Input::Tab);
        }
    }
}
