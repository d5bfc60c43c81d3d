//! Delimiter-encoded structured fields.
//!
//! Several content columns hold small lists as flat text: records are
//! separated by `,` and fields inside a record by `|`, for example
//! `"140+|Villas Transformed|Across Dubai,3-8|Weeks|Per scope"`. There is no
//! escaping, so a value can contain neither delimiter. Parsing trims every
//! value and silently skips records without a `|`.
//!
//! [`lint_records`] reports the records a parser would drop so the dashboard
//! can warn about values that accidentally contain a comma.

use serde::Serialize;

/// Record separator.
pub const RECORD_SEP: char = ',';

/// Field separator inside a record.
pub const FIELD_SEP: char = '|';

/// Showcase tile size used when a record does not name one.
pub const DEFAULT_SHOWCASE_SIZE: &str = "half";

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// One entry of a service's stats strip (`number|label|subtext`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatStripItem {
    pub number: String,
    pub label: String,
    pub subtext: String,
}

/// One hero stat (`number|label`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub number: String,
    pub label: String,
}

/// One timeline row (`week|task`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    pub week: String,
    pub task: String,
}

/// One step of a service's own process (`icon|title|description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStepItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// One showcase tile (`tag|name[|size[|image_url]]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseProject {
    pub tag: String,
    pub name: String,
    /// `large`, `small` or `half`. Other values are passed through.
    pub size: String,
    pub image_url: String,
}

/// One key/value specification row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecItem {
    pub key: String,
    pub value: String,
}

/// One FAQ entry (`question|answer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

/// Iterate over the records of `raw` that contain a field separator.
fn records(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(RECORD_SEP).filter(|r| r.contains(FIELD_SEP))
}

/// Split a record on the first `|` and trim both halves.
fn pair(record: &str) -> Option<(String, String)> {
    record
        .split_once(FIELD_SEP)
        .map(|(a, b)| (a.trim().to_string(), b.trim().to_string()))
}

/// Split a record into exactly three trimmed parts; further `|` stay in the third.
fn triple(record: &str) -> Option<(String, String, String)> {
    let mut parts = record.splitn(3, FIELD_SEP).map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c)) => Some((a.to_string(), b.to_string(), c.to_string())),
        _ => None,
    }
}

/// Parse `number|label|subtext` records.
pub fn parse_stats_strip(raw: &str) -> Vec<StatStripItem> {
    records(raw)
        .filter_map(triple)
        .map(|(number, label, subtext)| StatStripItem {
            number,
            label,
            subtext,
        })
        .collect()
}

/// Parse `number|label` hero stats.
pub fn parse_hero_stats(raw: &str) -> Vec<HeroStat> {
    records(raw)
        .filter_map(pair)
        .map(|(number, label)| HeroStat { number, label })
        .collect()
}

/// Parse `week|task` timeline rows.
pub fn parse_timeline(raw: &str) -> Vec<TimelineItem> {
    records(raw)
        .filter_map(pair)
        .map(|(week, task)| TimelineItem { week, task })
        .collect()
}

/// Parse `icon|title|description` process steps.
pub fn parse_process_steps(raw: &str) -> Vec<ProcessStepItem> {
    records(raw)
        .filter_map(triple)
        .map(|(icon, title, description)| ProcessStepItem {
            icon,
            title,
            description,
        })
        .collect()
}

/// Parse showcase tiles.
///
/// Accepts both the three-field form (`tag|name|size`) and the four-field
/// form with a trailing image URL. A missing or blank size becomes
/// [`DEFAULT_SHOWCASE_SIZE`].
pub fn parse_showcase_projects(raw: &str) -> Vec<ShowcaseProject> {
    records(raw)
        .map(|record| {
            let parts: Vec<&str> = record.split(FIELD_SEP).map(str::trim).collect();
            let size = parts
                .get(2)
                .filter(|s| !s.is_empty())
                .copied()
                .unwrap_or(DEFAULT_SHOWCASE_SIZE);
            ShowcaseProject {
                tag: parts[0].to_string(),
                name: parts[1].to_string(),
                size: size.to_string(),
                image_url: parts.get(3).copied().unwrap_or_default().to_string(),
            }
        })
        .collect()
}

/// Parse a service's `key|value` specs. Further `|` stay in the value.
pub fn parse_service_specs(raw: &str) -> Vec<SpecItem> {
    records(raw)
        .filter_map(pair)
        .map(|(key, value)| SpecItem { key, value })
        .collect()
}

/// Parse a project's `key|value` specs. Records with more than one `|` are skipped.
pub fn parse_project_specs(raw: &str) -> Vec<SpecItem> {
    records(raw)
        .filter(|r| r.matches(FIELD_SEP).count() == 1)
        .filter_map(pair)
        .map(|(key, value)| SpecItem { key, value })
        .collect()
}

/// Parse `question|answer` FAQ entries.
pub fn parse_faqs(raw: &str) -> Vec<FaqItem> {
    records(raw)
        .filter_map(pair)
        .map(|(question, answer)| FaqItem { question, answer })
        .collect()
}

/// Split a comma-separated list, dropping blank items.
pub fn parse_csv_list(raw: &str) -> Vec<String> {
    raw.split(RECORD_SEP)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split one-item-per-line text, dropping blank lines.
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into paragraphs on blank lines.
pub fn parse_paragraphs(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Linting
// ---------------------------------------------------------------------------

/// How many `|`-separated fields a record of a given column must have.
#[derive(Debug, Clone, Copy)]
pub struct RecordShape {
    pub min_fields: usize,
    /// `None` means any number of extra separators is accepted.
    pub max_fields: Option<usize>,
}

impl RecordShape {
    pub const PAIR: RecordShape = RecordShape {
        min_fields: 2,
        max_fields: None,
    };
    pub const EXACT_PAIR: RecordShape = RecordShape {
        min_fields: 2,
        max_fields: Some(2),
    };
    pub const TRIPLE: RecordShape = RecordShape {
        min_fields: 3,
        max_fields: None,
    };
}

/// Describe every non-blank record of `raw` that parsing would drop.
///
/// Each warning names the column and quotes the fragment. The most common
/// cause is a value containing a `,`, which splits one record in two.
pub fn lint_records(column: &str, raw: &str, shape: RecordShape) -> Vec<String> {
    raw.split(RECORD_SEP)
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
        .filter_map(|(index, record)| {
            let fields = record.split(FIELD_SEP).count();
            let too_few = fields < shape.min_fields;
            let too_many = shape.max_fields.is_some_and(|max| fields > max);
            (too_few || too_many).then(|| {
                format!(
                    "{column}: record {} \"{}\" has {fields} field(s) and will be ignored \
                     (values must not contain ',' or '|')",
                    index + 1,
                    record.trim()
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_stats_strip("").is_empty());
        assert!(parse_timeline("").is_empty());
        assert!(parse_showcase_projects("").is_empty());
        assert!(parse_csv_list("").is_empty());
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn stats_strip_keeps_extra_pipes_in_subtext() {
        let stats = parse_stats_strip("140+|Villas| Across Dubai | UAE ,3-8|Weeks|Per scope");
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].number, "140+");
        assert_eq!(stats[0].subtext, "Across Dubai | UAE");
        assert_eq!(stats[1].label, "Weeks");
    }

    #[test]
    fn stats_strip_requires_three_fields() {
        assert!(parse_stats_strip("140+|Villas").is_empty());
    }

    #[test]
    fn comma_inside_value_drops_the_tail_fragment() {
        let stats = parse_stats_strip("140+|Villas|Across Dubai, Abu Dhabi & Sharjah,2yr|Guarantee|Plants");
        // "Abu Dhabi & Sharjah" has no '|' and is skipped.
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].subtext, "Across Dubai");
        assert_eq!(stats[1].number, "2yr");
    }

    #[test]
    fn timeline_splits_once() {
        let rows = parse_timeline("Week 1|Survey|brief,Week 2|Design");
        assert_eq!(
            rows,
            vec![
                TimelineItem {
                    week: "Week 1".into(),
                    task: "Survey|brief".into()
                },
                TimelineItem {
                    week: "Week 2".into(),
                    task: "Design".into()
                },
            ]
        );
    }

    #[test]
    fn hero_stats_parse() {
        let stats = parse_hero_stats("3+|Years in Dubai, 340+ | Projects Completed,junk");
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[1].number, "340+");
        assert_eq!(stats[1].label, "Projects Completed");
    }

    #[test]
    fn process_steps_parse() {
        let steps = parse_process_steps("fa-search|Discovery|We survey the site,fa-key|Handover");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].icon, "fa-search");
        assert_eq!(steps[0].description, "We survey the site");
    }

    #[test]
    fn showcase_defaults_size_and_image() {
        let tiles = parse_showcase_projects(
            "Dubai Hills|Palm Garden|large,Ranches|Pool Terrace,Palm|Pergola||https://cdn/x.webp",
        );
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].size, "large");
        assert_eq!(tiles[0].image_url, "");
        assert_eq!(tiles[1].size, DEFAULT_SHOWCASE_SIZE);
        assert_eq!(tiles[2].size, DEFAULT_SHOWCASE_SIZE);
        assert_eq!(tiles[2].image_url, "https://cdn/x.webp");
    }

    #[test]
    fn service_specs_keep_extra_pipes() {
        let specs = parse_service_specs("Style|Tropical|Modern");
        assert_eq!(specs[0].value, "Tropical|Modern");
    }

    #[test]
    fn project_specs_require_exactly_two_fields() {
        let specs = parse_project_specs("Area|500 sqm,Style|Tropical|Modern,Completion|2024");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].key, "Area");
        assert_eq!(specs[1].value, "2024");
    }

    #[test]
    fn faqs_parse() {
        let faqs = parse_faqs("How long?|Four to eight weeks.,Summer?|Yes");
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].answer, "Four to eight weeks.");
    }

    #[test]
    fn csv_list_drops_blanks() {
        assert_eq!(
            parse_csv_list(" pools , ,pergolas,"),
            vec!["pools".to_string(), "pergolas".to_string()]
        );
    }

    #[test]
    fn lines_and_paragraphs() {
        assert_eq!(parse_lines("a\n\n  b  \r\nc").len(), 3);
        let paras = parse_paragraphs("First para.\r\n\r\nSecond para.\n\n\n");
        assert_eq!(paras, vec!["First para.".to_string(), "Second para.".to_string()]);
    }

    #[test]
    fn lint_reports_dropped_fragments() {
        let warnings = lint_records(
            "stats_strip_data",
            "140+|Villas|Across Dubai, Abu Dhabi,2yr|Guarantee|Plants",
            RecordShape::TRIPLE,
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("record 2"));
        assert!(warnings[0].contains("Abu Dhabi"));
    }

    #[test]
    fn lint_exact_pair_flags_extra_fields() {
        let warnings = lint_records("specs_data", "Area|500,Style|A|B", RecordShape::EXACT_PAIR);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("3 field(s)"));
    }

    #[test]
    fn lint_clean_input_is_quiet() {
        assert!(lint_records("faq_data", "Q|A,Q2|A2", RecordShape::PAIR).is_empty());
        assert!(lint_records("faq_data", "", RecordShape::PAIR).is_empty());
    }
}
