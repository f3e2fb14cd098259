//! # Derived values
//!
//! Pure functions recomputed from session state on every render. Each helper
//! exists exactly once; every screen calls these instead of re-deriving them.
//!
//! - [`convert_to_display_currency`] / [`convert_with`] — foreign amount → "约合人民币X万元".
//! - [`days_until`] / [`days_left`] — deadline countdown; `days_left` is the
//!   clamped value every screen displays.
//! - [`profile_completion`] — weighted completion (30/30/20/20), plus the flat
//!   [`simple_profile_completion`] variant.
//! - [`filter_scholarships`], [`average_match_rate`], [`total_amount`],
//!   [`match_tier`] — list summaries for the results page.

use chrono::{NaiveDate, NaiveDateTime};

use crate::clock;
use crate::config::CurrencyTable;
use crate::models::{ProfileDraft, Scholarship};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Currencies recognised in catalog amount strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Gbp,
    Cad,
    Aud,
    Eur,
    Chf,
}

impl Currency {
    /// Markers checked in priority order; the first one present wins.
    const MARKERS: [(&'static str, Currency); 5] = [
        ("£", Currency::Gbp),
        ("CAD", Currency::Cad),
        ("AUD", Currency::Aud),
        ("€", Currency::Eur),
        ("CHF", Currency::Chf),
    ];

    /// Detect the currency of an amount string. Unmarked amounts are USD.
    pub fn detect(amount: &str) -> Self {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| amount.contains(marker))
            .map(|(_, currency)| *currency)
            .unwrap_or(Currency::Usd)
    }
}

impl CurrencyTable {
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Gbp => self.gbp,
            Currency::Cad => self.cad,
            Currency::Aud => self.aud,
            Currency::Eur => self.eur,
            Currency::Chf => self.chf,
        }
    }
}

/// Numeric magnitude of an amount string: all ASCII digits, separators ignored.
/// `"£35,000/年"` → `Some(35000)`.
pub fn parse_amount(amount: &str) -> Option<u64> {
    let digits: String = amount.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Convert with the default exchange table.
pub fn convert_to_display_currency(amount: &str) -> String {
    convert_with(amount, &CurrencyTable::default())
}

/// Magnitude as a float, so digit runs too long for `u64` still convert.
fn amount_magnitude(amount: &str) -> Option<f64> {
    let digits: String = amount.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Convert a currency-tagged amount to RMB, in units of 10,000 (万), one decimal.
pub fn convert_with(amount: &str, table: &CurrencyTable) -> String {
    let magnitude = amount_magnitude(amount).unwrap_or_else(|| {
        tracing::warn!(amount, "amount has no digits, showing zero");
        0.0
    });
    let rate = table.rate(Currency::detect(amount));
    format!("约合人民币{:.1}万元", magnitude * rate / 10_000.0)
}

/// Parse a deadline written as `2024-12-15`, `2024/12/15` or `2024年12月15日`.
pub fn parse_deadline(deadline: &str) -> Option<NaiveDate> {
    let parts: Vec<u32> = deadline
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [y, m, d] => NaiveDate::from_ymd_opt(i32::try_from(*y).ok()?, *m, *d),
        _ => None,
    }
}

/// Whole days from `now` until the start of the deadline day, rounded up.
/// Negative once the deadline has passed; `None` if the date does not parse.
pub fn days_until_at(deadline: &str, now: NaiveDateTime) -> Option<i64> {
    let due = parse_deadline(deadline)?.and_hms_opt(0, 0, 0)?;
    let millis = (due - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    Some(if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    })
}

pub fn days_until(deadline: &str) -> Option<i64> {
    days_until_at(deadline, clock::now())
}

/// The countdown shown on screen: never negative, 0 for unparseable dates.
pub fn days_left_at(deadline: &str, now: NaiveDateTime) -> i64 {
    days_until_at(deadline, now).unwrap_or(0).max(0)
}

pub fn days_left(deadline: &str) -> i64 {
    days_left_at(deadline, clock::now())
}

/// zh-CN short date: `2024/11/17`.
pub fn format_localized_date(date: NaiveDate) -> String {
    date.format("%Y/%-m/%-d").to_string()
}

const CONTACT_WEIGHT: f64 = 30.0;
const EDUCATION_WEIGHT: f64 = 30.0;
const AWARD_WEIGHT: f64 = 20.0;
const RESUME_WEIGHT: f64 = 20.0;

/// Weighted profile completion: 30% contact fields, 30% a complete education
/// record, 20% a complete award record, 20% a résumé.
pub fn profile_completion(draft: &ProfileDraft) -> u8 {
    let mut score = 0.0;
    if draft.contact.is_complete() {
        score += CONTACT_WEIGHT;
    }
    if draft.education.iter().any(|e| e.is_complete()) {
        score += EDUCATION_WEIGHT;
    }
    if draft.awards.iter().any(|a| a.is_complete()) {
        score += AWARD_WEIGHT;
    }
    if draft.resume.is_some() {
        score += RESUME_WEIGHT;
    }
    score.round() as u8
}

/// Flat completion: share of the eight scalar profile fields that are filled.
pub fn simple_profile_completion(draft: &ProfileDraft) -> u8 {
    let scalars = [
        &draft.contact.name,
        &draft.contact.email,
        &draft.contact.phone,
        &draft.university,
        &draft.major,
        &draft.gpa,
        &draft.personal_statement,
    ];
    let filled = scalars.iter().filter(|f| !f.trim().is_empty()).count()
        + usize::from(draft.resume.is_some());
    let total = scalars.len() + 1;
    ((filled as f64 / total as f64) * 100.0).round() as u8
}

/// Colour band of a match rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    pub fn css_class(self) -> &'static str {
        match self {
            MatchTier::High => "match-high",
            MatchTier::Good => "match-good",
            MatchTier::Fair => "match-fair",
            MatchTier::Low => "match-low",
        }
    }
}

pub fn match_tier(rate: u8) -> MatchTier {
    match rate {
        90.. => MatchTier::High,
        80..=89 => MatchTier::Good,
        70..=79 => MatchTier::Fair,
        _ => MatchTier::Low,
    }
}

/// Filled stars (out of five) shown next to a match rate.
pub fn star_rating(rate: u8) -> u8 {
    (rate / 20).min(5)
}

/// Rounded mean match rate; 0 for an empty list.
pub fn average_match_rate(scholarships: &[Scholarship]) -> u8 {
    if scholarships.is_empty() {
        return 0;
    }
    let sum: u32 = scholarships.iter().map(|s| u32::from(s.match_rate)).sum();
    (sum as f64 / scholarships.len() as f64).round() as u8
}

/// Sum of the numeric magnitudes, ignoring currency.
pub fn total_amount(scholarships: &[Scholarship]) -> u64 {
    scholarships
        .iter()
        .filter_map(|s| parse_amount(&s.amount))
        .sum()
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Narrowing options for the results list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScholarshipFilter {
    pub country: Option<String>,
    pub min_match_rate: u8,
    /// Only ids in this list, when set.
    pub only_ids: Option<Vec<u32>>,
}

/// Apply `filter`, then order by match rate (highest first).
pub fn filter_scholarships(
    scholarships: &[Scholarship],
    filter: &ScholarshipFilter,
) -> Vec<Scholarship> {
    let mut out: Vec<Scholarship> = scholarships
        .iter()
        .filter(|s| filter.country.as_deref().is_none_or(|c| s.country == c))
        .filter(|s| s.match_rate >= filter.min_match_rate)
        .filter(|s| {
            filter
                .only_ids
                .as_ref()
                .is_none_or(|ids| ids.contains(&s.id))
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| b.match_rate.cmp(&a.match_rate));
    out
}

/// Split into (recommended, others), preserving order.
pub fn split_recommended(scholarships: &[Scholarship]) -> (Vec<Scholarship>, Vec<Scholarship>) {
    scholarships.iter().cloned().partition(|s| s.is_recommended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{AwardRecord, ContactInfo, EducationRecord, ResumeRef};

    fn at(date: &str) -> NaiveDateTime {
        parse_deadline(date).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_days_until_exact_days() {
        assert_eq!(days_until_at("2024-12-15", at("2024-11-17")), Some(28));
        assert_eq!(days_until_at("2024年12月15日", at("2024-11-17")), Some(28));
    }

    #[test]
    fn test_days_until_rounds_up_partial_days() {
        let afternoon = at("2024-11-17").date().and_hms_opt(15, 30, 0).unwrap();
        // 27 days and 8.5 hours -> 28
        assert_eq!(days_until_at("2024-12-15", afternoon), Some(28));
        // Later on the eve of the deadline still counts as a day.
        let eve = at("2024-12-14").date().and_hms_opt(23, 0, 0).unwrap();
        assert_eq!(days_until_at("2024-12-15", eve), Some(1));
    }

    #[test]
    fn test_days_left_clamps_past_deadlines() {
        assert_eq!(days_until_at("2024-11-01", at("2024-11-17")), Some(-16));
        assert_eq!(days_left_at("2024-11-01", at("2024-11-17")), 0);
        assert_eq!(days_left_at("not a date", at("2024-11-17")), 0);
    }

    #[test]
    fn test_parse_deadline_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert_eq!(parse_deadline("2025-01-31"), expected);
        assert_eq!(parse_deadline("2025/1/31"), expected);
        assert_eq!(parse_deadline("2025年1月31日"), expected);
        assert_eq!(parse_deadline("2025年2月31日"), None);
        assert_eq!(parse_deadline("soon"), None);
    }

    #[test]
    fn test_convert_gbp() {
        assert_eq!(convert_to_display_currency("£35,000/年"), "约合人民币32.2万元");
    }

    #[test]
    fn test_convert_markers() {
        assert_eq!(convert_to_display_currency("$50,000/年"), "约合人民币36.5万元");
        assert_eq!(convert_to_display_currency("CAD $30,000/年"), "约合人民币16.2万元");
        assert_eq!(convert_to_display_currency("AUD $20,000/年"), "约合人民币9.6万元");
        assert_eq!(convert_to_display_currency("€22,000/年"), "约合人民币17.2万元");
        assert_eq!(convert_to_display_currency("CHF 10,000/年"), "约合人民币8.1万元");
        // Unmarked falls back to USD.
        assert_eq!(convert_to_display_currency("10,000"), "约合人民币7.3万元");
    }

    #[test]
    fn test_convert_first_marker_wins() {
        assert_eq!(Currency::detect("£1 or €1"), Currency::Gbp);
        assert_eq!(Currency::detect("CHF / CAD"), Currency::Cad);
    }

    #[test]
    fn test_convert_with_custom_table() {
        let table = CurrencyTable {
            gbp: 10.0,
            ..CurrencyTable::default()
        };
        assert_eq!(convert_with("£10,000", &table), "约合人民币10.0万元");
    }

    #[test]
    fn test_convert_amount_wider_than_u64() {
        let out = convert_to_display_currency("$99999999999999999999999");
        let wan: f64 = out
            .trim_start_matches("约合人民币")
            .trim_end_matches("万元")
            .parse()
            .unwrap();
        assert!(wan > 7.2e19 && wan < 7.4e19, "{out}");
        assert_eq!(parse_amount("$99999999999999999999999"), None);
    }

    #[test]
    fn test_profile_completion_weights() {
        let mut draft = ProfileDraft::default();
        assert_eq!(profile_completion(&draft), 0);

        draft.contact = ContactInfo {
            name: "张同学".into(),
            email: "student@example.com".into(),
            phone: "+86 138****8888".into(),
        };
        assert_eq!(profile_completion(&draft), 30);

        // An incomplete record earns nothing.
        draft.education.push(EducationRecord {
            school: "北京大学".into(),
            ..Default::default()
        });
        assert_eq!(profile_completion(&draft), 30);

        draft.education.push(EducationRecord {
            school: "北京大学".into(),
            degree: "本科".into(),
            major: "计算机科学".into(),
            gpa: "3.8/4.0".into(),
            ..Default::default()
        });
        draft.awards.push(AwardRecord {
            title: "国家奖学金".into(),
            issuer: "教育部".into(),
            year: "2023".into(),
        });
        draft.resume = Some(ResumeRef {
            file_name: "cv.pdf".into(),
        });
        assert_eq!(profile_completion(&draft), 100);
    }

    #[test]
    fn test_simple_profile_completion() {
        let mut draft = ProfileDraft::default();
        assert_eq!(simple_profile_completion(&draft), 0);
        draft.contact.name = "张同学".into();
        draft.contact.email = "student@example.com".into();
        draft.contact.phone = "+86".into();
        // 3 of 8
        assert_eq!(simple_profile_completion(&draft), 38);
    }

    #[test]
    fn test_match_tiers() {
        assert_eq!(match_tier(95), MatchTier::High);
        assert_eq!(match_tier(90), MatchTier::High);
        assert_eq!(match_tier(85), MatchTier::Good);
        assert_eq!(match_tier(70), MatchTier::Fair);
        assert_eq!(match_tier(69), MatchTier::Low);
        assert_eq!(star_rating(95), 4);
        assert_eq!(star_rating(100), 5);
        assert_eq!(star_rating(19), 0);
    }

    #[test]
    fn test_summaries_over_catalog() {
        let all = catalog::scholarships();
        assert_eq!(average_match_rate(&[]), 0);
        assert_eq!(average_match_rate(all), 80);
        assert_eq!(total_amount(&all[..2]), 75_000);
        assert_eq!(group_thousands(433_000), "433,000");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn test_filter_sorts_and_narrows() {
        let all = catalog::scholarships();
        let uk = filter_scholarships(
            all,
            &ScholarshipFilter {
                country: Some("英国".into()),
                ..Default::default()
            },
        );
        assert!(uk.iter().all(|s| s.country == "英国"));
        assert!(uk.windows(2).all(|w| w[0].match_rate >= w[1].match_rate));

        let saved = filter_scholarships(
            all,
            &ScholarshipFilter {
                only_ids: Some(vec![3, 1]),
                ..Default::default()
            },
        );
        assert_eq!(saved.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

        let (recommended, others) = split_recommended(all);
        assert_eq!(recommended.len(), 2);
        assert_eq!(others.len(), all.len() - 2);
    }

    #[test]
    fn test_filter_min_match_and_saved_only_combine() {
        let all = catalog::scholarships();
        let strong = filter_scholarships(
            all,
            &ScholarshipFilter {
                min_match_rate: 90,
                ..Default::default()
            },
        );
        assert!(!strong.is_empty());
        assert!(strong.iter().all(|s| s.match_rate >= 90));

        let nothing = filter_scholarships(
            all,
            &ScholarshipFilter {
                min_match_rate: 90,
                only_ids: Some(Vec::new()),
                ..Default::default()
            },
        );
        assert!(nothing.is_empty());
    }
}
