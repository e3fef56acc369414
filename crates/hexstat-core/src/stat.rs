//! Stat records, the ordered stat set, and the JSON input document.

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::rank::RankScale;
use crate::{Error, Result};

pub const MIN_STATS: usize = 3;
pub const MAX_STATS: usize = 12;
pub const MAX_NAME_LEN: usize = 20;

const DEFAULT_STAT_NAME: &str = "STAT";
const DEFAULT_STAT_RANK: &str = "A";

/// One named, ranked attribute.
///
/// `percentage` is derived from `rank` under the active scale and is only
/// ever written by [`StatSet`]; input documents carry no percentage at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: String,
    pub rank: String,
    pub percentage: f64,
}

/// One stat as it appears in an input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetStat {
    pub name: String,
    pub rank: String,
}

/// The JSON input document: the headless analog of the interactive form.
///
/// ```json
/// { "maxRank": "S", "stats": [ { "name": "SPEED", "rank": "A+" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatSheet {
    #[serde(rename = "maxRank")]
    pub max_rank: String,
    #[serde(default)]
    pub stats: Vec<SheetStat>,
    /// Optional embedded chart configuration overrides.
    #[serde(default)]
    pub config: Option<ChartConfig>,
}

impl StatSheet {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The stock six-stat sheet shipped with the original chart.
    pub fn example() -> Self {
        let stats = [
            ("KNOWLEDGE", "A+"),
            ("SPEED", "S+"),
            ("INTELLIGENCE", "A+"),
            ("POTENTIAL", "SS"),
            ("REACTIVITY", "S"),
            ("VERSATILITY", "S"),
        ];
        Self {
            max_rank: "S".to_string(),
            stats: stats
                .into_iter()
                .map(|(name, rank)| SheetStat {
                    name: name.to_string(),
                    rank: rank.to_string(),
                })
                .collect(),
            config: None,
        }
    }
}

/// Ordered stat set plus the active scale.
///
/// Order is semantically significant: index 0 renders at the top of the
/// chart and subsequent records proceed clockwise. Resizing only ever
/// touches the tail, so surviving records keep their angular position.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSet {
    records: Vec<StatRecord>,
    scale: RankScale,
}

impl StatSet {
    pub fn new(max_rank: &str) -> Result<Self> {
        Ok(Self {
            records: Vec::new(),
            scale: RankScale::new(max_rank)?,
        })
    }

    /// Builds a set from an input document.
    ///
    /// Records past [`MAX_STATS`] are dropped (the form layer should have
    /// rejected them; the core clamps instead of failing). Short or empty
    /// sheets are accepted: "nothing to draw" is a valid state.
    pub fn from_sheet(sheet: &StatSheet) -> Result<Self> {
        let scale = RankScale::new(&sheet.max_rank)?;
        if sheet.stats.len() > MAX_STATS {
            tracing::debug!(
                dropped = sheet.stats.len() - MAX_STATS,
                "stat sheet exceeds {MAX_STATS} records, truncating"
            );
        }
        let records = sheet
            .stats
            .iter()
            .take(MAX_STATS)
            .map(|stat| {
                validate_name(&stat.name)?;
                Ok(StatRecord {
                    name: stat.name.clone(),
                    rank: stat.rank.clone(),
                    percentage: scale.resolve(&stat.rank),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records, scale })
    }

    pub fn records(&self) -> &[StatRecord] {
        &self.records
    }

    pub fn scale(&self) -> RankScale {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn set_name(&mut self, index: usize, name: &str) -> Result<()> {
        validate_name(name)?;
        let record = self.record_mut(index)?;
        record.name = name.to_string();
        Ok(())
    }

    /// Replaces one record's rank token and re-resolves its percentage.
    ///
    /// Unknown tokens are not an error here; they resolve to the scale
    /// minimum like everywhere else.
    pub fn set_rank(&mut self, index: usize, rank: &str) -> Result<()> {
        let percentage = self.scale.resolve(rank);
        let record = self.record_mut(index)?;
        record.rank = rank.to_string();
        record.percentage = percentage;
        Ok(())
    }

    /// Grows or shrinks the set to `count`, clamped to `[MIN_STATS, MAX_STATS]`.
    ///
    /// Growth appends template records at the tail; shrinking pops from the
    /// tail. Records below the cut keep their index and angular position.
    pub fn set_count(&mut self, count: usize) {
        let count = count.clamp(MIN_STATS, MAX_STATS);
        while self.records.len() < count {
            self.records.push(StatRecord {
                name: DEFAULT_STAT_NAME.to_string(),
                rank: DEFAULT_STAT_RANK.to_string(),
                percentage: self.scale.resolve(DEFAULT_STAT_RANK),
            });
        }
        self.records.truncate(count);
    }

    /// Re-pins the scale to a new pivot and recomputes every percentage.
    ///
    /// The new pivot is validated before anything is touched, so on error
    /// the set is unchanged; on success no record retains a percentage from
    /// the previous pivot.
    pub fn set_max_rank(&mut self, max_rank: &str) -> Result<()> {
        let scale = RankScale::new(max_rank)?;
        for record in &mut self.records {
            record.percentage = scale.resolve(&record.rank);
        }
        self.scale = scale;
        tracing::debug!(
            max_rank = scale.max_rank(),
            count = self.records.len(),
            "recomputed stat percentages for new pivot"
        );
        Ok(())
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut StatRecord> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidStatName {
            name: name.to_string(),
            reason: "must not be blank",
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Error::InvalidStatName {
            name: name.to_string(),
            reason: "longer than 20 characters",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_set() -> StatSet {
        StatSet::from_sheet(&StatSheet::example()).unwrap()
    }

    #[test]
    fn sheet_resolves_every_percentage_against_the_scale() {
        let set = example_set();
        assert_eq!(set.len(), 6);
        for record in set.records() {
            assert_eq!(record.percentage, set.scale().resolve(&record.rank));
        }
        // Pivot "S": "S" is exactly 100, "S+" sits in the overflow band.
        assert_eq!(set.records()[4].percentage, 100.0);
        assert!(set.records()[1].percentage > 100.0);
    }

    #[test]
    fn sheet_with_unknown_max_rank_fails_before_any_resolution() {
        let mut sheet = StatSheet::example();
        sheet.max_rank = "S+".to_string();
        assert!(matches!(
            StatSet::from_sheet(&sheet),
            Err(Error::UnknownMaxRank { .. })
        ));
    }

    #[test]
    fn sheet_past_twelve_records_is_truncated() {
        let mut sheet = StatSheet::example();
        for i in 0..10 {
            sheet.stats.push(SheetStat {
                name: format!("EXTRA{i}"),
                rank: "B".to_string(),
            });
        }
        let set = StatSet::from_sheet(&sheet).unwrap();
        assert_eq!(set.len(), MAX_STATS);
        assert_eq!(set.records()[0].name, "KNOWLEDGE");
    }

    #[test]
    fn blank_and_overlong_names_are_rejected() {
        let mut sheet = StatSheet::example();
        sheet.stats[2].name = "   ".to_string();
        assert!(matches!(
            StatSet::from_sheet(&sheet),
            Err(Error::InvalidStatName { .. })
        ));

        let mut set = example_set();
        let long = "X".repeat(MAX_NAME_LEN + 1);
        assert!(set.set_name(0, &long).is_err());
        assert!(set.set_name(0, "AGILITY").is_ok());
        assert_eq!(set.records()[0].name, "AGILITY");
    }

    #[test]
    fn changing_max_rank_recomputes_every_record_in_one_batch() {
        let mut set = example_set();
        let before: Vec<f64> = set.records().iter().map(|r| r.percentage).collect();

        set.set_max_rank("UR").unwrap();
        for (record, old) in set.records().iter().zip(&before) {
            assert_eq!(record.percentage, set.scale().resolve(&record.rank));
            assert!(record.percentage < *old, "shrinks under a higher pivot");
        }
    }

    #[test]
    fn failed_max_rank_change_leaves_the_set_untouched() {
        let mut set = example_set();
        let before = set.clone();
        assert!(set.set_max_rank("??").is_err());
        assert_eq!(set, before);
    }

    #[test]
    fn set_count_clamps_and_only_touches_the_tail() {
        let mut set = example_set();
        let head = set.records()[..3].to_vec();

        set.set_count(100);
        assert_eq!(set.len(), MAX_STATS);
        assert_eq!(&set.records()[..3], &head[..]);
        assert_eq!(set.records()[MAX_STATS - 1].name, DEFAULT_STAT_NAME);

        set.set_count(0);
        assert_eq!(set.len(), MIN_STATS);
        assert_eq!(set.records(), &head[..]);
    }

    #[test]
    fn grown_records_carry_resolved_template_percentages() {
        let mut set = StatSet::new("A").unwrap();
        set.set_count(MIN_STATS);
        for record in set.records() {
            assert_eq!(record.rank, DEFAULT_STAT_RANK);
            // Template rank "A" under pivot "A" is exactly the pivot.
            assert_eq!(record.percentage, 100.0);
        }
    }

    #[test]
    fn set_rank_updates_one_record_only() {
        let mut set = example_set();
        let before: Vec<f64> = set.records().iter().map(|r| r.percentage).collect();
        set.set_rank(3, "F").unwrap();
        assert_eq!(
            set.records()[3].percentage,
            set.scale().resolve("F")
        );
        for (i, record) in set.records().iter().enumerate() {
            if i != 3 {
                assert_eq!(record.percentage, before[i]);
            }
        }
        assert!(set.set_rank(99, "A").is_err());
    }

    #[test]
    fn sheet_json_round_trip() {
        let text = r#"{
            "maxRank": "SS",
            "stats": [
                { "name": "POWER", "rank": "SSS" },
                { "name": "GUARD", "rank": "B+" },
                { "name": "LUCK", "rank": "UNRATED" }
            ]
        }"#;
        let sheet = StatSheet::from_json(text).unwrap();
        let set = StatSet::from_sheet(&sheet).unwrap();
        assert_eq!(set.scale().max_rank(), "SS");
        // Unknown token falls back to the scale minimum instead of failing.
        assert_eq!(set.records()[2].percentage, set.scale().resolve("F"));

        assert!(StatSheet::from_json("{").is_err());
    }
}
