//! Read-only HR datasets bound to the dashboard charts
//!
//! Everything here is built once at startup by [`Datasets::generate`] and
//! never mutated afterwards. Two series (average team KPI and error rate)
//! are random placeholders; pass a seeded generator to make them
//! reproducible.

use chrono::{Month, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::view::Icon;

/// Headline KPI with month-over-month change
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: u64,
    pub delta_pct: i32,
    pub icon: Icon,
}

/// Named part of a whole (donut slices)
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthValue {
    pub month: Month,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourValue {
    pub hour: u8,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub title: &'static str,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub stage: &'static str,
    pub value: u32,
}

/// Headcount in an age bracket
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBucket {
    pub range: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpsKpi {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Units per hour for picking and packing
#[derive(Debug, Clone, PartialEq)]
pub struct Throughput {
    pub hour: u8,
    pub pick: u32,
    pub pack: u32,
}

/// Revenue per staff member by seniority, in k$
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterRevenue {
    pub quarter: &'static str,
    pub junior: u32,
    pub mid: u32,
    pub senior: u32,
}

/// A metric split by gender for one group
#[derive(Debug, Clone, PartialEq)]
pub struct GenderPair {
    pub group: &'static str,
    pub male: f64,
    pub female: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    // dashboard
    pub kpis: Vec<Kpi>,
    pub working_format: Vec<Share>,
    pub avg_team_kpi: Vec<MonthValue>,
    pub schedule: Vec<Appointment>,

    // recruitment
    pub funnel: Vec<FunnelStage>,
    pub hiring_trend: Vec<MonthValue>,
    pub source_split: Vec<Share>,

    // workforce
    pub gender_structure: Vec<Share>,
    pub generation_split: Vec<Share>,
    pub age_distribution: Vec<AgeBucket>,

    // productivity
    pub productivity_kpis: Vec<OpsKpi>,
    pub uph: Vec<Throughput>,
    pub error_trend: Vec<HourValue>,
    pub revenue_per_staff: Vec<QuarterRevenue>,

    // attendance
    pub overtime: Vec<MonthValue>,
    pub absence: Vec<MonthValue>,

    // diversity
    pub promotion_rate: Vec<GenderPair>,
    pub pay_gap: Vec<GenderPair>,
    pub leadership: Vec<Share>,
}

const FIRST_HALF: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

impl Datasets {
    pub fn from_seed(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::generate(&mut StdRng::from_entropy())
    }

    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let uph = vec![
            Throughput { hour: 8, pick: 120, pack: 110 },
            Throughput { hour: 9, pick: 135, pack: 118 },
            Throughput { hour: 10, pick: 142, pack: 124 },
            Throughput { hour: 11, pick: 138, pack: 121 },
        ];
        let error_trend = uph
            .iter()
            .map(|t| HourValue {
                hour: t.hour,
                value: 3.8 + rng.gen_range(0.0..0.6),
            })
            .collect();

        Self {
            kpis: vec![
                Kpi {
                    label: "Total Employees",
                    value: 23_541,
                    delta_pct: 5,
                    icon: Icon::Users,
                },
                Kpi {
                    label: "Total Projects",
                    value: 12_389,
                    delta_pct: -8,
                    icon: Icon::Briefcase,
                },
                Kpi {
                    label: "Job Applicants",
                    value: 17_389,
                    delta_pct: 4,
                    icon: Icon::ClipboardList,
                },
                Kpi {
                    label: "Job Views",
                    value: 9_993,
                    delta_pct: -3,
                    icon: Icon::Activity,
                },
            ],
            working_format: vec![
                Share { name: "Remote", value: 220 },
                Share { name: "Hybrid", value: 180 },
                Share { name: "On-site", value: 120 },
            ],
            avg_team_kpi: FIRST_HALF
                .iter()
                .map(|&month| MonthValue {
                    month,
                    value: 60.0 + rng.gen_range(0.0..10.0),
                })
                .collect(),
            schedule: vec![
                Appointment {
                    title: "Interview – UX Designer",
                    start: at(9, 0),
                    end: at(10, 0),
                },
                Appointment {
                    title: "Retro Day – HR Dept",
                    start: at(14, 0),
                    end: at(17, 0),
                },
            ],

            funnel: vec![
                FunnelStage { stage: "Applications", value: 929 },
                FunnelStage { stage: "Screening", value: 820 },
                FunnelStage { stage: "Interviews", value: 680 },
                FunnelStage { stage: "Offers", value: 449 },
                FunnelStage { stage: "Hires", value: 353 },
            ],
            hiring_trend: FIRST_HALF[..5]
                .iter()
                .enumerate()
                .map(|(i, &month)| MonthValue {
                    month,
                    value: (220 + 20 * i) as f64,
                })
                .collect(),
            source_split: vec![
                Share { name: "Job Boards", value: 40 },
                Share { name: "Referral", value: 30 },
                Share { name: "Agency", value: 20 },
                Share { name: "Direct", value: 10 },
            ],

            gender_structure: vec![
                Share { name: "Female", value: 45 },
                Share { name: "Male", value: 55 },
            ],
            generation_split: vec![
                Share { name: "Gen Z", value: 15 },
                Share { name: "Gen Y", value: 45 },
                Share { name: "Gen X", value: 30 },
                Share { name: "Boomer", value: 10 },
            ],
            age_distribution: vec![
                AgeBucket { range: "20-24", count: 400 },
                AgeBucket { range: "25-29", count: 820 },
                AgeBucket { range: "30-34", count: 730 },
                AgeBucket { range: "35-39", count: 540 },
            ],

            productivity_kpis: vec![
                OpsKpi { label: "Pick UPH", value: 118.0, unit: "" },
                OpsKpi { label: "Pack UPH", value: 111.0, unit: "" },
                OpsKpi { label: "Err Rate", value: 4.2, unit: "%" },
                OpsKpi { label: "Cap Util", value: 82.0, unit: "%" },
            ],
            uph,
            error_trend,
            revenue_per_staff: vec![
                QuarterRevenue { quarter: "Q1", junior: 320, mid: 450, senior: 520 },
                QuarterRevenue { quarter: "Q2", junior: 330, mid: 460, senior: 540 },
                QuarterRevenue { quarter: "Q3", junior: 340, mid: 470, senior: 560 },
            ],

            overtime: vec![
                MonthValue { month: Month::January, value: 8.2 },
                MonthValue { month: Month::February, value: 8.7 },
                MonthValue { month: Month::March, value: 9.1 },
            ],
            absence: vec![
                MonthValue { month: Month::January, value: 8.5 },
                MonthValue { month: Month::February, value: 9.2 },
                MonthValue { month: Month::March, value: 10.1 },
            ],

            promotion_rate: vec![
                GenderPair { group: "Gen Z", male: 12.0, female: 14.0 },
                GenderPair { group: "Gen Y", male: 8.0, female: 10.0 },
            ],
            pay_gap: vec![
                GenderPair { group: "Jr", male: 42.0, female: 40.0 },
                GenderPair { group: "Mid", male: 62.0, female: 59.0 },
                GenderPair { group: "Sr", male: 88.0, female: 84.0 },
            ],
            leadership: vec![
                Share { name: "Female", value: 35 },
                Share { name: "Male", value: 65 },
            ],
        }
    }
}

/// Three-letter month label ("Jan")
pub fn month_label(month: Month) -> &'static str {
    let name = month.name();
    &name[..3]
}

pub fn hour_label(hour: u8) -> String {
    format!("{hour:02}")
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_series_stay_in_range() {
        let data = Datasets::from_seed(7);
        assert_eq!(data.avg_team_kpi.len(), 6);
        assert!(data
            .avg_team_kpi
            .iter()
            .all(|m| (60.0..70.0).contains(&m.value)));
        assert_eq!(data.error_trend.len(), data.uph.len());
        assert!(data
            .error_trend
            .iter()
            .all(|h| (3.8..4.4).contains(&h.value)));
    }

    #[test]
    fn test_hiring_trend_is_linear() {
        let data = Datasets::from_seed(0);
        let hires: Vec<f64> = data.hiring_trend.iter().map(|m| m.value).collect();
        assert_eq!(hires, vec![220.0, 240.0, 260.0, 280.0, 300.0]);
        assert_eq!(data.hiring_trend[4].month, Month::May);
    }

    #[test]
    fn test_month_and_hour_labels() {
        assert_eq!(month_label(Month::January), "Jan");
        assert_eq!(month_label(Month::September), "Sep");
        assert_eq!(hour_label(8), "08");
        assert_eq!(hour_label(11), "11");
    }

    #[test]
    fn test_schedule_times() {
        let data = Datasets::from_seed(0);
        let first = &data.schedule[0];
        assert_eq!(first.start.format("%H:%M").to_string(), "09:00");
        assert_eq!(first.end.format("%H:%M").to_string(), "10:00");
    }
}
