use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Tech,
    ConsultingIt,
    Finance,
    PharmaHealth,
    RetailConsumer,
    Auto,
    Energy,
    Telecom,
    Industrial,
    MediaEntertainment,
    Ecommerce,
    General,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Industry::Tech => "Technology",
            Industry::ConsultingIt => "Consulting / IT services",
            Industry::Finance => "Finance",
            Industry::PharmaHealth => "Pharma / Healthcare",
            Industry::RetailConsumer => "Retail / Consumer",
            Industry::Auto => "Automotive",
            Industry::Energy => "Energy",
            Industry::Telecom => "Telecom",
            Industry::Industrial => "Industrial",
            Industry::MediaEntertainment => "Media / Entertainment",
            Industry::Ecommerce => "E-commerce",
            Industry::General => "General",
        };
        f.write_str(name)
    }
}

pub struct Rule {
    pub keywords: &'static [&'static str],
    pub industry: Industry,
}

impl Rule {
    fn matches(&self, folded_name: &str) -> bool {
        self.keywords.iter().any(|k| folded_name.contains(k))
    }
}

/// Ordered rule table. The first rule with a keyword contained in the
/// lower-cased company name decides; nothing matching yields `default`.
pub struct Classifier {
    rules: Vec<Rule>,
    default: Industry,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>, default: Industry) -> Self {
        Self { rules, default }
    }

    pub fn standard() -> Self {
        Self::new(standard_rules(), Industry::General)
    }

    pub fn classify(&self, company: &str) -> Industry {
        let folded = company.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&folded))
            .map(|rule| rule.industry)
            .unwrap_or(self.default)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

// Some names appear twice (amazon, alibaba); the earlier rule wins.
fn standard_rules() -> Vec<Rule> {
    vec![
        Rule {
            keywords: &[
                "software", "tech", "nvidia", "intel", "microsoft", "google", "meta", "amazon",
                "apple", "oracle", "ibm", "adobe", "salesforce", "cisco", "sap", "tencent",
                "alibaba", "baidu", "bytedance", "xiaomi", "huawei",
            ],
            industry: Industry::Tech,
        },
        Rule {
            keywords: &[
                "consult", "accenture", "capgemini", "cognizant", "tcs", "infosys", "wipro", "hcl",
                "eci",
            ],
            industry: Industry::ConsultingIt,
        },
        Rule {
            keywords: &[
                "bank", "jpmorgan", "goldman", "hsbc", "barclays", "citigroup", "wells", "ubs",
                "credit", "santander", "deutsche",
            ],
            industry: Industry::Finance,
        },
        Rule {
            keywords: &[
                "pharma", "pfizer", "novartis", "roche", "merck", "glaxo", "sanofi", "astrazeneca",
                "j&j", "johnson", "health",
            ],
            industry: Industry::PharmaHealth,
        },
        Rule {
            keywords: &[
                "walmart", "costco", "retail", "target", "tesco", "carrefour", "kroger", "mcdonald",
                "starbucks", "kfc", "yum", "nike", "adidas", "inditex", "h&m", "zara",
            ],
            industry: Industry::RetailConsumer,
        },
        Rule {
            keywords: &[
                "toyota", "volkswagen", "mercedes", "bmw", "honda", "ford", "general motors", "gm",
                "nissan", "hyundai", "mahindra", "bajaj", "tesla",
            ],
            industry: Industry::Auto,
        },
        Rule {
            keywords: &[
                "exxon", "chevron", "bp ", "shell", "total", "petrochina", "sinopec", "saudi aramco",
                "adani",
            ],
            industry: Industry::Energy,
        },
        Rule {
            keywords: &[
                "verizon", "at&t", "telefonica", "vodafone", "telecom", "china mobile",
                "deutsche telekom",
            ],
            industry: Industry::Telecom,
        },
        Rule {
            keywords: &[
                "siemens", "ge ", "honeywell", "3m", "caterpillar", "boeing", "abb", "schneider",
            ],
            industry: Industry::Industrial,
        },
        Rule {
            keywords: &["comcast", "disney", "netflix", "warner", "paramount", "viacom", "sony pictures"],
            industry: Industry::MediaEntertainment,
        },
        Rule {
            keywords: &[
                "amazon", "alibaba", "jd", "shopify", "ebay", "flipkart", "rakuten", "booking",
                "uber", "lyft",
            ],
            industry: Industry::Ecommerce,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_names() {
        let classifier = Classifier::standard();
        assert_eq!(classifier.classify("Microsoft"), Industry::Tech);
        assert_eq!(classifier.classify("Infosys Limited"), Industry::ConsultingIt);
        assert_eq!(classifier.classify("HSBC Holdings"), Industry::Finance);
        assert_eq!(classifier.classify("Pfizer"), Industry::PharmaHealth);
        assert_eq!(classifier.classify("Walmart"), Industry::RetailConsumer);
        assert_eq!(classifier.classify("Toyota Motor"), Industry::Auto);
        assert_eq!(classifier.classify("ExxonMobil"), Industry::Energy);
        assert_eq!(classifier.classify("Vodafone"), Industry::Telecom);
        assert_eq!(classifier.classify("Caterpillar"), Industry::Industrial);
        assert_eq!(classifier.classify("Netflix"), Industry::MediaEntertainment);
        assert_eq!(classifier.classify("Shopify"), Industry::Ecommerce);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // amazon is listed under both tech and e-commerce
        assert_eq!(Classifier::standard().classify("Amazon"), Industry::Tech);
        // "deutsche" is a finance keyword, checked before telecom
        assert_eq!(Classifier::standard().classify("Deutsche Telekom"), Industry::Finance);
    }

    #[test]
    fn test_unknown_name_uses_default() {
        assert_eq!(Classifier::standard().classify("Zzyzx Widgets"), Industry::General);

        let custom = Classifier::new(
            vec![Rule {
                keywords: &["widget"],
                industry: Industry::Industrial,
            }],
            Industry::Energy,
        );
        assert_eq!(custom.classify("Zzyzx Widgets"), Industry::Industrial);
        assert_eq!(custom.classify("Nothing Here"), Industry::Energy);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Classifier::standard().classify("NVIDIA"), Industry::Tech);
    }
}
