//! RTI application generator: interpolated application text plus the fee,
//! timeline, and authority fixtures that go with it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::guides::{require_fields, Authority, FeeRow, SuccessStory, TimelineRow};
use crate::localize::Lang;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtiRequest {
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub public_authority: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub info_sought: String,
    pub language: Option<String>,
    pub urgency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Normal,
    /// Below-poverty-line applicant, fee-exempt under Section 7(5).
    Bpl,
    /// Life-or-liberty request, 48-hour response under Section 7(1).
    Urgent,
}

impl FromStr for Urgency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "bpl" => Ok(Self::Bpl),
            "urgent" => Ok(Self::Urgent),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RtiBundle {
    pub application: String,
    pub fees: Vec<FeeRow>,
    pub timeline: Vec<TimelineRow>,
    pub authorities: Vec<Authority>,
    pub success_stories: Vec<SuccessStory>,
    pub tips: Vec<&'static str>,
}

/// Build the full RTI bundle. The application body is English or Hindi per
/// the `language` field; Tamil callers get the English body since the
/// template set is bilingual only.
pub fn build(request: &RtiRequest) -> Result<RtiBundle, ApiError> {
    let mut missing = Vec::new();
    if request.applicant_name.trim().is_empty() {
        missing.push("applicantName");
    }
    if request.address.trim().is_empty() {
        missing.push("address");
    }
    if request.public_authority.trim().is_empty() {
        missing.push("publicAuthority");
    }
    if request.subject.trim().is_empty() {
        missing.push("subject");
    }
    if request.info_sought.trim().is_empty() {
        missing.push("infoSought");
    }
    require_fields(missing)?;

    let urgency = match &request.urgency {
        Some(raw) => raw.parse::<Urgency>().map_err(|()| {
            ApiError::bad_request("urgency must be one of: normal, bpl, urgent")
        })?,
        None => Urgency::Normal,
    };
    let lang = Lang::parse(request.language.as_deref());

    Ok(RtiBundle {
        application: application_text(request, lang, urgency),
        fees: fees(urgency),
        timeline: timeline(urgency),
        authorities: AUTHORITIES.to_vec(),
        success_stories: SUCCESS_STORIES.to_vec(),
        tips: TIPS.to_vec(),
    })
}

fn application_text(request: &RtiRequest, lang: Lang, urgency: Urgency) -> String {
    match lang {
        Lang::Hi => hindi_application(request, urgency),
        Lang::En | Lang::Ta => english_application(request, urgency),
    }
}

fn english_application(request: &RtiRequest, urgency: Urgency) -> String {
    let fee_clause = match urgency {
        Urgency::Bpl => {
            "I belong to a family below the poverty line (proof enclosed); no fee is payable under Section 7(5) of the Act."
        }
        _ => "The application fee of Rs. 10 is enclosed as required under Section 6(1) of the Act.",
    };
    let urgency_clause = match urgency {
        Urgency::Urgent => {
            "\n\nThis request concerns the life and liberty of a person. Information is requested within 48 hours under the proviso to Section 7(1) of the Act."
        }
        _ => "",
    };
    format!(
        "To,\nThe Public Information Officer,\n{authority}\n\nSubject: Application under the Right to Information Act, 2005 - {subject}\n\nSir/Madam,\n\nI, {name}, residing at {address}, seek the following information under Section 6(1) of the Right to Information Act, 2005:\n\n{info}\n\nTo the best of my knowledge, the information sought does not fall within the exemptions of Sections 8 or 9 of the Act and pertains to your public authority. {fee_clause}{urgency_clause}\n\nDate: ____________\nPlace: ____________\n\nYours faithfully,\n{name}",
        authority = request.public_authority.trim(),
        subject = request.subject.trim(),
        name = request.applicant_name.trim(),
        address = request.address.trim(),
        info = request.info_sought.trim(),
    )
}

fn hindi_application(request: &RtiRequest, urgency: Urgency) -> String {
    let fee_clause = match urgency {
        Urgency::Bpl => {
            "मैं गरीबी रेखा से नीचे के परिवार से हूँ (प्रमाण संलग्न); धारा 7(5) के अंतर्गत कोई शुल्क देय नहीं है।"
        }
        _ => "धारा 6(1) के अंतर्गत आवेदन शुल्क ₹10 संलग्न है।",
    };
    let urgency_clause = match urgency {
        Urgency::Urgent => {
            "\n\nयह अनुरोध किसी व्यक्ति के जीवन एवं स्वतंत्रता से संबंधित है। धारा 7(1) के परंतुक के अंतर्गत 48 घंटे के भीतर सूचना का अनुरोध किया जाता है।"
        }
        _ => "",
    };
    format!(
        "सेवा में,\nलोक सूचना अधिकारी,\n{authority}\n\nविषय: सूचना का अधिकार अधिनियम, 2005 के अंतर्गत आवेदन - {subject}\n\nमहोदय/महोदया,\n\nमैं, {name}, निवासी {address}, सूचना का अधिकार अधिनियम, 2005 की धारा 6(1) के अंतर्गत निम्नलिखित सूचना चाहता/चाहती हूँ:\n\n{info}\n\nमेरी जानकारी के अनुसार मांगी गई सूचना अधिनियम की धारा 8 या 9 के अपवादों में नहीं आती है। {fee_clause}{urgency_clause}\n\nदिनांक: ____________\nस्थान: ____________\n\nभवदीय,\n{name}",
        authority = request.public_authority.trim(),
        subject = request.subject.trim(),
        name = request.applicant_name.trim(),
        address = request.address.trim(),
        info = request.info_sought.trim(),
    )
}

fn fees(urgency: Urgency) -> Vec<FeeRow> {
    match urgency {
        Urgency::Bpl => vec![
            FeeRow {
                item: "Application fee",
                amount: "Free",
                notes: "Fee-exempt under Section 7(5); enclose BPL certificate",
            },
            FeeRow {
                item: "Copies of records",
                amount: "Free",
                notes: "No copying charges for BPL applicants",
            },
        ],
        _ => vec![
            FeeRow {
                item: "Application fee",
                amount: "₹10",
                notes: "Cash, demand draft, banker's cheque, or court fee stamp",
            },
            FeeRow {
                item: "Copies (A4/A3)",
                amount: "₹2 per page",
                notes: "Charged before supply; payment demand pauses the clock",
            },
            FeeRow {
                item: "Inspection of records",
                amount: "First hour free",
                notes: "₹5 for each subsequent hour",
            },
            FeeRow {
                item: "Information on CD/DVD",
                amount: "₹50 per disc",
                notes: "",
            },
        ],
    }
}

fn timeline(urgency: Urgency) -> Vec<TimelineRow> {
    let first = match urgency {
        Urgency::Urgent => TimelineRow {
            stage: "PIO response (life and liberty)",
            duration: "48 hours",
        },
        _ => TimelineRow {
            stage: "PIO response",
            duration: "30 days",
        },
    };
    vec![
        first,
        TimelineRow {
            stage: "Transfer to the correct authority (Section 6(3))",
            duration: "5 days, added to the response period",
        },
        TimelineRow {
            stage: "First appeal to the First Appellate Authority",
            duration: "Within 30 days of the decision or deadline",
        },
        TimelineRow {
            stage: "First appeal decision",
            duration: "30 days, extendable to 45",
        },
        TimelineRow {
            stage: "Second appeal to the Information Commission",
            duration: "Within 90 days of the first-appeal decision",
        },
    ]
}

const AUTHORITIES: [Authority; 3] = [
    Authority {
        name: "Public Information Officer (PIO)",
        role: "Receives and decides RTI applications for the public authority",
        contact: "Named on the public authority's website and notice board",
    },
    Authority {
        name: "First Appellate Authority (FAA)",
        role: "Officer senior to the PIO who hears first appeals",
        contact: "Listed alongside the PIO for every public authority",
    },
    Authority {
        name: "Central / State Information Commission",
        role: "Hears second appeals and complaints, can impose penalties",
        contact: "cic.gov.in for central authorities; state commissions for state bodies",
    },
];

const SUCCESS_STORIES: [SuccessStory; 2] = [
    SuccessStory {
        title: "Ration records opened",
        summary: "Applicants in Delhi used RTI to obtain fair-price-shop sale registers, exposing diverted grain and restoring rations to hundreds of families.",
    },
    SuccessStory {
        title: "Road funds traced",
        summary: "A village sarpanch obtained measurement books for a sanctioned road through RTI, forcing completion of work that had been billed but never built.",
    },
];

const TIPS: [&str; 5] = [
    "Ask for specific records (registers, file notings, reports) rather than reasons or opinions.",
    "Number your questions; each gets a separate reply.",
    "File online at rtionline.gov.in for central public authorities.",
    "Keep proof of submission; the 30-day clock starts on receipt.",
    "If the PIO is silent for 30 days, that is a deemed refusal and you may appeal.",
];
