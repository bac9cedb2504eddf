// src/app/nav.rs  -  Which screen / dashboard section is showing
//
// Plain selectors: any screen may switch to any other. No transition guards.
use std::fmt;
use std::str::FromStr;

use crate::i18n::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Auth,
    Otp,
    Dashboard,
}

impl Screen {
    pub fn id(self) -> &'static str {
        match self {
            Screen::Landing   => "landing",
            Screen::Auth      => "auth",
            Screen::Otp       => "otp",
            Screen::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Profile,
    FindWorkers,
    JobListings,
    FindWork,
    LeaseAssets,
    News,
    Notifications,
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::Profile,
        Section::FindWorkers,
        Section::JobListings,
        Section::FindWork,
        Section::LeaseAssets,
        Section::News,
        Section::Notifications,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home          => "home",
            Section::Profile       => "profile",
            Section::FindWorkers   => "find-workers",
            Section::JobListings   => "job-listings",
            Section::FindWork      => "find-work",
            Section::LeaseAssets   => "lease-assets",
            Section::News          => "news",
            Section::Notifications => "notifications",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home          => keys::home,
            Section::Profile       => keys::profile,
            Section::FindWorkers   => keys::findWorkers,
            Section::JobListings   => keys::jobListings,
            Section::FindWork      => keys::findWork,
            Section::LeaseAssets   => keys::leaseAssets,
            Section::News          => keys::news,
            Section::Notifications => keys::notifications,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|sec| sec.id() == s)
            .ok_or_else(|| format!("unknown dashboard section '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationTable;

    #[test]
    fn section_cycle_wraps_both_ways() {
        assert_eq!(Section::Notifications.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Notifications);
        let mut s = Section::Home;
        for _ in 0..Section::ALL.len() {
            s = s.next();
        }
        assert_eq!(s, Section::Home);
    }

    #[test]
    fn section_ids_round_trip() {
        for s in Section::ALL {
            assert_eq!(s.id().parse::<Section>(), Ok(s));
        }
        assert!("settings".parse::<Section>().is_err());
    }

    #[test]
    fn every_section_label_is_translated() {
        let table = TranslationTable::builtin().unwrap();
        for s in Section::ALL {
            assert!(table.contains(s.label_key()), "{s}");
        }
    }
}
