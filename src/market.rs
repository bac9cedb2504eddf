// src/market.rs  -  Mock listings: jobs, workers, equipment, news, notices
//
// Static sample data only. Every label is a phrase key; people's names are
// proper nouns and stay untranslated.
use crate::i18n::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType { Harvesting, Sowing, Weeding, Irrigation, Spraying, Ploughing }

impl JobType {
    pub fn label_key(self) -> &'static str {
        match self {
            JobType::Harvesting => keys::jobHarvesting,
            JobType::Sowing     => keys::jobSowing,
            JobType::Weeding    => keys::jobWeeding,
            JobType::Irrigation => keys::jobIrrigation,
            JobType::Spraying   => keys::jobSpraying,
            JobType::Ploughing  => keys::jobPloughing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind { Tractor, Harvester, Sprayer, WaterPump, Rotavator }

impl AssetKind {
    pub fn label_key(self) -> &'static str {
        match self {
            AssetKind::Tractor   => keys::assetTractor,
            AssetKind::Harvester => keys::assetHarvester,
            AssetKind::Sprayer   => keys::assetSprayer,
            AssetKind::WaterPump => keys::assetWaterPump,
            AssetKind::Rotavator => keys::assetRotavator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Village { Anand, Mehsana, Rajkot, Nadiad }

impl Village {
    pub fn label_key(self) -> &'static str {
        match self {
            Village::Anand   => keys::villageAnand,
            Village::Mehsana => keys::villageMehsana,
            Village::Rajkot  => keys::villageRajkot,
            Village::Nadiad  => keys::villageNadiad,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id:             u32,
    pub kind:           JobType,
    pub village:        Village,
    pub farmer:         &'static str,
    pub wage_per_day:   u32,
    pub days:           u32,
    pub workers_needed: u32,
    /// Applicants other than the signed-in user
    pub applicants:     u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerProfile {
    pub id:               u32,
    pub name:             &'static str,
    pub village:          Village,
    pub skills:           &'static [JobType],
    pub experience_years: u32,
    pub daily_rate:       u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id:           u32,
    pub kind:         AssetKind,
    pub owner:        &'static str,
    pub village:      Village,
    pub rate_per_day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title_key: &'static str,
    pub body_key:  &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id:      u32,
    pub text_key: &'static str,
}

/// All sample listings the dashboard shows
#[derive(Debug, Clone)]
pub struct Market {
    pub jobs:    Vec<Job>,
    pub workers: Vec<WorkerProfile>,
    pub assets:  Vec<Asset>,
    pub news:    Vec<NewsItem>,
    pub notices: Vec<Notice>,
}

impl Market {
    pub fn sample() -> Self {
        Self {
            jobs: vec![
                Job { id: 1, kind: JobType::Harvesting, village: Village::Anand,   farmer: "Ramesh Patel",  wage_per_day: 450, days: 5,  workers_needed: 6, applicants: 3 },
                Job { id: 2, kind: JobType::Sowing,     village: Village::Mehsana, farmer: "Suresh Chaudhary", wage_per_day: 400, days: 3, workers_needed: 4, applicants: 1 },
                Job { id: 3, kind: JobType::Weeding,    village: Village::Nadiad,  farmer: "Geeta Desai",   wage_per_day: 350, days: 7,  workers_needed: 8, applicants: 5 },
                Job { id: 4, kind: JobType::Irrigation, village: Village::Rajkot,  farmer: "Mahesh Vaghela", wage_per_day: 500, days: 2, workers_needed: 2, applicants: 0 },
                Job { id: 5, kind: JobType::Spraying,   village: Village::Anand,   farmer: "Ramesh Patel",  wage_per_day: 480, days: 1,  workers_needed: 1, applicants: 2 },
            ],
            workers: vec![
                WorkerProfile { id: 1, name: "Raju Solanki",   village: Village::Anand,   skills: &[JobType::Harvesting, JobType::Sowing],     experience_years: 8,  daily_rate: 450 },
                WorkerProfile { id: 2, name: "Meena Rathod",   village: Village::Nadiad,  skills: &[JobType::Weeding, JobType::Sowing],        experience_years: 5,  daily_rate: 380 },
                WorkerProfile { id: 3, name: "Vikram Thakor",  village: Village::Mehsana, skills: &[JobType::Ploughing, JobType::Irrigation], experience_years: 12, daily_rate: 550 },
                WorkerProfile { id: 4, name: "Lakshmi Parmar", village: Village::Rajkot,  skills: &[JobType::Spraying],                        experience_years: 3,  daily_rate: 400 },
            ],
            assets: vec![
                Asset { id: 1, kind: AssetKind::Tractor,   owner: "Jignesh Patel",  village: Village::Anand,   rate_per_day: 1800 },
                Asset { id: 2, kind: AssetKind::Harvester, owner: "Harish Chaudhary", village: Village::Mehsana, rate_per_day: 4500 },
                Asset { id: 3, kind: AssetKind::Sprayer,   owner: "Geeta Desai",    village: Village::Nadiad,  rate_per_day: 300 },
                Asset { id: 4, kind: AssetKind::WaterPump, owner: "Mahesh Vaghela", village: Village::Rajkot,  rate_per_day: 250 },
                Asset { id: 5, kind: AssetKind::Rotavator, owner: "Ramesh Patel",   village: Village::Anand,   rate_per_day: 1200 },
            ],
            news: vec![
                NewsItem { title_key: keys::newsMsp,     body_key: keys::newsMspBody },
                NewsItem { title_key: keys::newsMonsoon, body_key: keys::newsMonsoonBody },
                NewsItem { title_key: keys::newsDrip,    body_key: keys::newsDripBody },
            ],
            notices: vec![
                Notice { id: 1, text_key: keys::noticeWelcome },
                Notice { id: 2, text_key: keys::noticeNewJob },
                Notice { id: 3, text_key: keys::noticeWeather },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationTable;

    #[test]
    fn every_sample_label_is_in_the_table() {
        let table = TranslationTable::builtin().unwrap();
        let m = Market::sample();
        let mut used: Vec<&str> = Vec::new();
        for j in &m.jobs    { used.extend([j.kind.label_key(), j.village.label_key()]); }
        for w in &m.workers {
            used.push(w.village.label_key());
            used.extend(w.skills.iter().map(|s| s.label_key()));
        }
        for a in &m.assets  { used.extend([a.kind.label_key(), a.village.label_key()]); }
        for n in &m.news    { used.extend([n.title_key, n.body_key]); }
        for n in &m.notices { used.push(n.text_key); }
        for key in used {
            assert!(table.contains(key), "{key}");
        }
    }

    #[test]
    fn ids_are_unique_per_list() {
        let m = Market::sample();
        let mut ids: Vec<u32> = m.jobs.iter().map(|j| j.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), m.jobs.len());
        let mut ids: Vec<u32> = m.assets.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), m.assets.len());
    }
}
