//! Static department routing table
//!
//! Loaded once, never mutated at runtime. Keyword phrases are stored
//! lowercase; the classifier matches normalized tokens against the
//! concatenation of a department's phrases. Routing messages carry the
//! department-specific links: they are part of the reply payload,
//! rendered directly by the client.

/// One hospital department and the symptom vocabulary that routes to it.
#[derive(Debug, PartialEq, Eq)]
pub struct DepartmentProfile {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub info_html: &'static str,
}

impl DepartmentProfile {
    /// Concatenated keyword text the classifier substring-matches against.
    pub fn keyword_text(&self) -> String {
        self.keywords.join(" ")
    }
}

/// All departments, in fixed priority order: score ties resolve to the
/// earliest entry.
pub const DEPARTMENTS: &[DepartmentProfile] = &[
    DepartmentProfile {
        name: "Medicine",
        keywords: &["fever", "cough", "body aches", "nausea", "vomiting", "diarrhea"],
        info_html: "For information on general medical conditions, visit: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=370'>Medicine Department</a>",
    },
    DepartmentProfile {
        name: "Child Health",
        keywords: &["fever", "cough", "earache", "diarrhea", "vomiting", "rash"],
        info_html: "For concerns related to children's health, visit: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=074'>Child Health Department</a>",
    },
    DepartmentProfile {
        name: "Haematology",
        keywords: &["fatigue", "pale skin", "easy bruising", "bleeding", "frequent infections"],
        info_html: "Visit a hematologist for evaluation. Find one near you: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=017'>Haematology Department</a>",
    },
    DepartmentProfile {
        name: "Cardiology",
        keywords: &["chest pain", "shortness of breath", "palpitations", "fatigue", "sweating"],
        info_html: "Visit a cardiologist for evaluation. Find one near you: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=113'>Cardiology Department</a>",
    },
    DepartmentProfile {
        name: "ENT",
        keywords: &["earache", "sore throat", "sinus congestion", "runny nose", "loss of voice"],
        info_html: "Visit an otolaryngologist (ENT) for evaluation. Find one near you: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=013'>ENT Services</a>",
    },
    DepartmentProfile {
        name: "Gastrology",
        keywords: &[
            "gas and acidity", "indigestion", "hard stool", "vomiting", "belching", "hiccups",
            "bloating", "flatulence", "mucoid stool", "worm stool", "loose stool",
            "frequency dysentery", "abdomen pain", "ruq", "luq", "rlq", "llq",
            "blood mixed stool", "constipation",
        ],
        info_html: "Visit an Gastroenterologist for evaluation. Find one near you: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=121'>Gastroenterology Department</a>",
    },
    DepartmentProfile {
        name: "Oncology",
        keywords: &[
            "bladder cancer", "breast cancer", "colorectal cancer", "kidney cancer",
            "lung cancer non small cell", "lymphoma non hodgkin", "melanoma", "myeloma",
            "oral and oropharyngeal cancer", "pancreatic cancer", "prostate cancer",
            "thyroid cancer", "uterine cancer",
        ],
        info_html: "Visit an Oncologist for evaluation. Find one near you:<a href='https://www.cmch-vellore.edu/Departments.aspx?depttype=ALL'>Oncology Department</a>",
    },
    DepartmentProfile {
        name: "Nephrology",
        keywords: &[
            "facial puffiness", "bilateral pedel edema", "dryness oral and skin", "hair fall",
            "pallor", "breathing difficulty", "loss of appetite", "bad smell",
        ],
        info_html: "Visit an Nephrologist for evaluation. Find one near you:<a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=102'>Nephrology Department</a>",
    },
    DepartmentProfile {
        name: "Neurology",
        keywords: &[
            "severe head ache", "recurrent seizure", "giddiness", "unclean speech", "memory loss",
            "weakness of right limb", "weakness of left upperlimb",
            "weakness of both upper limb and lower limb",
            "involuntary movement of upperlimbs and lower limbs", "imbalance while walking",
            "chronic head ache", "learning disorder", "wasting of muscles",
            "tremors of upper limb and lower limb",
        ],
        info_html: "Visit an Neurologist for evaluation. Find one near you: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=893'>Neurology Department</a>",
    },
    DepartmentProfile {
        name: "Urology",
        keywords: &[
            "cancers in kidney", "urinary bladder", "testes", "penis or prostate",
            "other prostate problems", "urinary infection", "urine leakage", "hematuria",
            "blood in urine", "sexual dysfunction", "kidney stones", "urinary tb",
            "blockage in urine pipes",
        ],
        info_html: "Visit an Urologist for evaluation. Find one near you: <a href='https://www.cmch-vellore.edu/DeptContent.aspx?dept=090'>Urology Department</a>",
    },
];

/// Department minors are routed to, regardless of symptoms.
pub fn pediatric() -> &'static DepartmentProfile {
    &DEPARTMENTS[1]
}

/// Appointment-booking link appended to every department recommendation.
pub const BOOKING_HTML: &str = "<br/><br/>If you have to book appointment online, you may visit this webpage <a href='https://clin.cmcvellore.ac.in/webapt/CMC/Login'>CMC Appointment Booking</a>.";

/// Closing line appended to every department recommendation.
pub const CLOSING_HTML: &str = "<br/><br/>Thank you for visiting our CMC!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pediatric_is_child_health() {
        assert_eq!(pediatric().name, "Child Health");
    }

    #[test]
    fn keywords_are_lowercase() {
        for dept in DEPARTMENTS {
            for keyword in dept.keywords {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword {keyword:?} in {} is not lowercase",
                    dept.name
                );
            }
        }
    }

    #[test]
    fn every_department_has_a_link() {
        for dept in DEPARTMENTS {
            assert!(dept.info_html.contains("<a href="), "{} has no link", dept.name);
        }
    }
}
