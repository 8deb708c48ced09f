//! Fabricated but plausible company data for names no real source knows.
//!
//! Everything produced here is clearly flagged as synthetic by the resolver.
//! Metric values stay inside the per-industry ranges in [`metric_ranges`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::error::SourceError;
use crate::industry::{Classifier, Industry};
use crate::models::{
    Category, CompanyQuery, CompanyRecord, CultureKeywords, Fragment, MetricValue, NewsItem, Provenance,
    ReputationRecord,
};
use crate::resolver::DataSource;

pub const TENURE: &str = "Average Tenure (years)";
pub const ATTRITION: &str = "Annual Attrition Rate (%)";
pub const ENGAGEMENT: &str = "Engagement Score (/5)";
pub const RATING: &str = "Glassdoor Rating (/5)";
pub const SATISFACTION: &str = "Satisfaction %";

const MAX_POSITIVE: usize = 4;
const MAX_NEGATIVE: usize = 4;
const MAX_HIGHLIGHTS: usize = 3;
const MAX_CULTURE_KEYWORDS: usize = 6;

/// Mention count range for each generated culture keyword.
pub const KEYWORD_COUNTS: RangeInclusive<u32> = 6..=35;

// --- Templates ---

pub struct Template {
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub culture: &'static [&'static str],
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

pub fn template(industry: Industry) -> Template {
    match industry {
        Industry::Tech => Template {
            strengths: &["innovation-driven projects", "cutting-edge tech", "strong R&D", "flexible/hybrid work"],
            weaknesses: &["tight deadlines", "rapid reorgs", "high performance pressure", "long hours during sprints"],
            culture: &["innovation", "continuous learning", "peer collaboration", "agile ways of working"],
            positive: &["Great learning opportunities", "Modern tech stack", "Flexible work policies", "Strong peer culture"],
            negative: &["Workload can be high", "Frequent reorganizations", "Performance pressure", "Siloed teams"],
            highlights: &["High innovation focus", "Attracts top talent", "Fast product cycles"],
        },
        Industry::ConsultingIt => Template {
            strengths: &["structured training and career paths", "client exposure", "global delivery", "mentorship programs"],
            weaknesses: &["project-driven workload spikes", "billable pressure", "slow promotions in some bands"],
            culture: &["client-first mindset", "knowledge sharing", "process orientation"],
            positive: &["Strong training", "Global opportunities", "Career development", "Structured processes"],
            negative: &["Work-life varies by project", "Billable targets", "Travel requirements"],
            highlights: &["Good for career growth", "Excellent learning programs"],
        },
        Industry::Finance => Template {
            strengths: &["strong compliance and process", "financial stability", "clear career ladders"],
            weaknesses: &["conservative culture", "bureaucracy", "long hours in investment banking roles"],
            culture: &["risk-aware", "process-driven", "client-focused"],
            positive: &["Good compensation", "Clear processes", "Professional environment"],
            negative: &["Conservative decision-making", "High stress in deal teams"],
            highlights: &["Strong brand in finance", "Robust compliance"],
        },
        Industry::PharmaHealth => Template {
            strengths: &["research-led culture", "strong benefits", "stable career paths"],
            weaknesses: &["slow decision-making", "regulatory constraints", "gradual career progression"],
            culture: &["evidence-driven", "collaborative R&D", "patient-centric"],
            positive: &["Strong benefits", "Meaningful work", "Stable roles"],
            negative: &["Slow promotions", "Bureaucratic processes"],
            highlights: &["High R&D investment", "Strong employer brand for stability"],
        },
        Industry::RetailConsumer => Template {
            strengths: &["scale and distribution", "brand recognition", "fast operational execution"],
            weaknesses: &["hourly workforce issues", "margin pressures", "variable scheduling"],
            culture: &["customer-centric", "operationally focused", "fast turnaround"],
            positive: &["Great brand", "Many entry-level opportunities", "Strong logistics"],
            negative: &["Work-life scheduling challenges", "Pressure on margins", "Seasonal spikes"],
            highlights: &["High brand pull", "Operational excellence"],
        },
        Industry::Auto => Template {
            strengths: &["engineering heritage", "scale manufacturing", "global supply chains"],
            weaknesses: &["legacy processes", "slow product cycles", "union/HR complexities"],
            culture: &["engineering-driven", "safety-first", "manufacturing discipline"],
            positive: &["Strong engineering teams", "Stable manufacturing roles"],
            negative: &["Legacy processes", "Slow change"],
            highlights: &["Large-scale manufacturing capabilities"],
        },
        Industry::Energy => Template {
            strengths: &["scale and capital", "global reach", "stable demand"],
            weaknesses: &["regulatory complexity", "safety/regulatory constraints", "legacy systems"],
            culture: &["safety-first", "regulation-aware", "operational continuity"],
            positive: &["Stable careers", "Strong safety programs"],
            negative: &["Slow tech adoption in some pockets"],
            highlights: &["Capital-intensive operations"],
        },
        Industry::Telecom => Template {
            strengths: &["large customer base", "infrastructure scale", "regulated cash flows"],
            weaknesses: &["competitive pressures", "legacy networks", "regulatory oversight"],
            culture: &["operations-driven", "customer-centric", "infrastructure-heavy"],
            positive: &["Stable demand", "Network scale"],
            negative: &["Legacy tech", "Regulatory complexity"],
            highlights: &["Large-scale infrastructure operations"],
        },
        Industry::Industrial => Template {
            strengths: &["engineering excellence", "long-term contracts", "diverse product lines"],
            weaknesses: &["cyclical demand", "supply-chain sensitivity"],
            culture: &["engineering-focused", "safety-first", "process-driven"],
            positive: &["Reliable products", "Skilled workforce"],
            negative: &["Cyclicality effects", "Sourcing challenges"],
            highlights: &["Strong industrial heritage"],
        },
        Industry::MediaEntertainment => Template {
            strengths: &["creative talent", "brand reach", "content portfolio"],
            weaknesses: &["cyclical revenues", "creative churn", "reorgs"],
            culture: &["creative", "deadline-driven", "high collaboration"],
            positive: &["Creative work", "Brand recognition"],
            negative: &["High project stress", "Reorganizations"],
            highlights: &["High audience reach"],
        },
        Industry::Ecommerce => Template {
            strengths: &["digital-first", "data-driven", "fast execution"],
            weaknesses: &["logistics complexity", "margin pressure", "customer service load"],
            culture: &["data-driven", "fast-paced", "customer-obsessed"],
            positive: &["Fast growth", "Data-driven insights"],
            negative: &["Logistics & returns stress", "Burnout in operations"],
            highlights: &["Rapid growth environment"],
        },
        Industry::General => Template {
            strengths: &["supportive management", "diverse teams", "learning opportunities"],
            weaknesses: &["process gaps", "limited recognition", "training gaps"],
            culture: &["collaboration", "continuous learning"],
            positive: &["Supportive teams", "Learning culture"],
            negative: &["Inconsistent policies", "Training gaps"],
            highlights: &["Balanced profile"],
        },
    }
}

// --- Metric ranges ---

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricKind {
    /// Uniform float rounded to one decimal.
    Decimal,
    /// Uniform integer, bounds inclusive.
    Whole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub kind: MetricKind,
}

impl MetricRange {
    const fn decimal(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max, kind: MetricKind::Decimal }
    }

    const fn whole(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max, kind: MetricKind::Whole }
    }

    fn sample(&self, rng: &mut StdRng) -> MetricValue {
        match self.kind {
            MetricKind::Decimal => {
                let raw = rng.gen_range(self.min..=self.max);
                MetricValue::Float(((raw * 10.0).round() / 10.0).clamp(self.min, self.max))
            }
            MetricKind::Whole => MetricValue::Integer(rng.gen_range(self.min as i64..=self.max as i64)),
        }
    }

    #[allow(dead_code)]
    pub fn contains(&self, value: &MetricValue) -> bool {
        match value {
            MetricValue::Integer(v) => (self.min..=self.max).contains(&(*v as f64)),
            MetricValue::Float(v) => (self.min..=self.max).contains(v),
            MetricValue::Text(_) => false,
        }
    }
}

/// Value ranges per generated metric. Tenure in years, attrition in percent,
/// engagement and rating out of 5, satisfaction as a whole percentage.
pub fn metric_ranges(industry: Industry) -> [MetricRange; 5] {
    let (tenure, attrition, engagement, rating, satisfaction) = match industry {
        Industry::Tech => ((2.5, 6.0), (8.0, 20.0), (3.6, 4.8), (3.5, 4.6), (70.0, 95.0)),
        Industry::ConsultingIt => ((2.0, 5.5), (10.0, 22.0), (3.5, 4.5), (3.4, 4.4), (65.0, 90.0)),
        Industry::Finance => ((3.0, 8.0), (6.0, 18.0), (3.4, 4.5), (3.2, 4.3), (60.0, 88.0)),
        Industry::PharmaHealth => ((3.5, 8.0), (6.0, 16.0), (3.6, 4.5), (3.5, 4.4), (68.0, 92.0)),
        Industry::RetailConsumer => ((1.5, 6.0), (10.0, 35.0), (3.0, 4.3), (3.0, 4.2), (50.0, 85.0)),
        Industry::Auto => ((3.0, 9.0), (6.0, 18.0), (3.4, 4.4), (3.2, 4.2), (60.0, 88.0)),
        Industry::Energy => ((4.0, 10.0), (4.0, 14.0), (3.6, 4.4), (3.4, 4.3), (65.0, 90.0)),
        Industry::Telecom => ((3.0, 8.0), (6.0, 20.0), (3.3, 4.2), (3.2, 4.1), (60.0, 86.0)),
        Industry::Industrial => ((4.0, 10.0), (4.0, 15.0), (3.5, 4.4), (3.3, 4.2), (65.0, 90.0)),
        Industry::MediaEntertainment => ((2.0, 6.0), (8.0, 24.0), (3.5, 4.5), (3.4, 4.3), (65.0, 90.0)),
        Industry::Ecommerce => ((1.5, 5.5), (10.0, 30.0), (3.2, 4.4), (3.1, 4.2), (55.0, 88.0)),
        Industry::General => ((2.0, 7.0), (6.0, 22.0), (3.2, 4.4), (3.1, 4.4), (60.0, 90.0)),
    };
    [
        MetricRange::decimal(TENURE, tenure.0, tenure.1),
        MetricRange::decimal(ATTRITION, attrition.0, attrition.1),
        MetricRange::decimal(ENGAGEMENT, engagement.0, engagement.1),
        MetricRange::decimal(RATING, rating.0, rating.1),
        MetricRange::whole(SATISFACTION, satisfaction.0, satisfaction.1),
    ]
}

const EXTRA_CULTURE: &[&str] = &["Trust", "Accountability", "Diversity", "Empathy", "Agility", "Communication"];

// --- Provider ---

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a, so a given seed yields the same data on every build.
fn name_hash(name: &str) -> u64 {
    name.bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

pub struct SyntheticDataProvider {
    seed: Option<u64>,
    classifier: Classifier,
}

impl SyntheticDataProvider {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_classifier(seed, Classifier::standard())
    }

    pub fn with_classifier(seed: Option<u64>, classifier: Classifier) -> Self {
        Self { seed, classifier }
    }

    /// Seeded: one stream per company so results don't depend on call order.
    fn rng_for(&self, company: &CompanyQuery) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ name_hash(&company.folded())),
            None => StdRng::from_entropy(),
        }
    }

    pub fn generate(&self, company: &CompanyQuery) -> CompanyRecord {
        let industry = self.classifier.classify(company.as_str());
        let template = template(industry);
        let mut rng = self.rng_for(company);

        let summary = format!(
            "{name} is known for {strength}. The culture typically shows {culture}. \
             Areas employees flag include {weakness}. Overall sentiment is {tone}, \
             with strengths around {strength2} and development areas in operations.",
            name = company,
            strength = pick(template.strengths, &mut rng),
            culture = pick(template.culture, &mut rng),
            weakness = pick(template.weaknesses, &mut rng),
            tone = if rng.gen_bool(0.6) { "generally positive" } else { "mixed" },
            strength2 = pick(template.strengths, &mut rng),
        );

        let metrics: ReputationRecord = metric_ranges(industry)
            .iter()
            .map(|range| (range.name.to_string(), range.sample(&mut rng)))
            .collect();

        let positive_feedback = sample(template.positive, MAX_POSITIVE, &mut rng);
        let negative_feedback = sample(template.negative, MAX_NEGATIVE, &mut rng);
        let highlights = sample(template.highlights, MAX_HIGHLIGHTS, &mut rng);

        let mut culture_pool: Vec<&str> = template.culture.to_vec();
        culture_pool.extend_from_slice(EXTRA_CULTURE);
        let culture_keywords: CultureKeywords = sample(&culture_pool, MAX_CULTURE_KEYWORDS, &mut rng)
            .into_iter()
            .map(|term| {
                let count = rng.gen_range(KEYWORD_COUNTS);
                (term, count)
            })
            .collect();

        let news = vec![
            synthetic_headline(
                format!("{} recognised for {}", company, pick(template.strengths, &mut rng)),
                format!("Staff point to {} as a defining trait.", pick(&culture_pool, &mut rng)),
            ),
            synthetic_headline(
                format!("{} employees raise concerns over {}", company, pick(template.weaknesses, &mut rng)),
                format!("Internal feedback mentions {}.", pick(template.negative, &mut rng).to_lowercase()),
            ),
            synthetic_headline(
                format!("{} invests in {}", company, pick(template.culture, &mut rng)),
                pick(template.highlights, &mut rng).to_string(),
            ),
        ];

        CompanyRecord {
            summary,
            metrics,
            positive_feedback,
            negative_feedback,
            highlights,
            news,
            culture_keywords,
        }
    }
}

fn pick<'a>(pool: &[&'a str], rng: &mut StdRng) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn sample(pool: &[&str], max: usize, rng: &mut StdRng) -> Vec<String> {
    pool.choose_multiple(rng, max.min(pool.len()))
        .map(|s| s.to_string())
        .collect()
}

fn synthetic_headline(title: String, description: String) -> NewsItem {
    NewsItem {
        title,
        description,
        link: String::new(),
        source: "synthetic".to_string(),
        published_at: String::new(),
    }
}

/// Generates at most one record per company, so every category of an
/// analysis describes the same fabricated company.
pub struct SyntheticSource {
    provider: SyntheticDataProvider,
    records: RefCell<HashMap<String, CompanyRecord>>,
}

impl SyntheticSource {
    pub fn new(provider: SyntheticDataProvider) -> Self {
        Self {
            provider,
            records: RefCell::new(HashMap::new()),
        }
    }
}

impl DataSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn provenance(&self) -> Provenance {
        Provenance::Synthetic
    }

    fn supports(&self, _category: Category) -> bool {
        true
    }

    fn fetch(&self, company: &CompanyQuery, category: Category) -> Result<Vec<Fragment>, SourceError> {
        let key = company.folded();
        if let Some(record) = self.records.borrow().get(&key) {
            return Ok(record.fragments(category));
        }
        let record = self.provider.generate(company);
        let fragments = record.fragments(category);
        self.records.borrow_mut().insert(key, record);
        Ok(fragments)
    }
}
