//! Sector complaint guides. One bundle shape, hand-written data per
//! sector: steps to follow, who to approach, what it costs, and how to
//! escalate when the first door stays shut.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::guides::{require_fields, Authority, EscalationStep, FeeRow, Helpline, Statistic};

/// The common form. Sector-specific required fields arrive flattened and
/// are validated against the sector's `required` list by wire name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorForm {
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub issue_description: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

pub struct SectorData {
    pub key: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub required: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub authorities: &'static [Authority],
    pub fees: &'static [FeeRow],
    pub escalation: &'static [EscalationStep],
    pub helplines: &'static [Helpline],
    pub statistics: &'static [Statistic],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorBundle {
    pub sector: &'static str,
    pub title: &'static str,
    pub summary: String,
    pub issue: String,
    pub steps: Vec<&'static str>,
    pub authorities: Vec<Authority>,
    pub fees: Vec<FeeRow>,
    pub escalation: Vec<EscalationStep>,
    pub helplines: Vec<Helpline>,
    pub statistics: Vec<Statistic>,
}

pub fn all() -> &'static [SectorData] {
    &SECTORS
}

pub fn find(key: &str) -> Option<&'static SectorData> {
    SECTORS.iter().find(|sector| sector.key == key)
}

/// Validate the form and assemble the sector's bundle.
pub fn build(sector: &'static SectorData, form: &SectorForm) -> Result<SectorBundle, ApiError> {
    let mut missing = Vec::new();
    if form.applicant_name.trim().is_empty() {
        missing.push("applicantName");
    }
    if form.issue_description.trim().is_empty() {
        missing.push("issueDescription");
    }
    for &field in sector.required {
        if !has_value(&form.details, field) {
            missing.push(field);
        }
    }
    require_fields(missing)?;

    Ok(SectorBundle {
        sector: sector.key,
        title: sector.title,
        summary: format!(
            "{} Prepared for {}.",
            sector.blurb,
            form.applicant_name.trim()
        ),
        issue: form.issue_description.trim().to_string(),
        steps: sector.steps.to_vec(),
        authorities: sector.authorities.to_vec(),
        fees: sector.fees.to_vec(),
        escalation: sector.escalation.to_vec(),
        helplines: sector.helplines.to_vec(),
        statistics: sector.statistics.to_vec(),
    })
}

fn has_value(details: &Map<String, Value>, key: &str) -> bool {
    match details.get(key) {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    }
}

static SECTORS: [SectorData; 13] = [
    SectorData {
        key: "banking",
        title: "Banking Complaints",
        blurb: "Banking disputes go to the bank first and to the RBI Ombudsman once the bank has had 30 days.",
        required: &["bankName", "accountType"],
        steps: &[
            "File a written complaint with the branch manager and keep the acknowledgement.",
            "Escalate to the bank's nodal officer if there is no reply in 10 working days.",
            "After 30 days without resolution, file with the RBI Integrated Ombudsman on cms.rbi.org.in.",
            "Attach account statements, complaint copies, and the bank's replies.",
            "An Ombudsman award is binding on the bank once you accept it.",
        ],
        authorities: &[
            Authority {
                name: "Bank branch / nodal officer",
                role: "First point of redress, 30 days to resolve",
                contact: "Listed on the bank's grievance page",
            },
            Authority {
                name: "RBI Integrated Ombudsman",
                role: "Statutory appeal for unresolved banking complaints",
                contact: "cms.rbi.org.in",
            },
        ],
        fees: &[FeeRow {
            item: "Ombudsman complaint",
            amount: "Free",
            notes: "No fee at any stage of the RB-IOS scheme",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Branch manager",
                when: "Immediately, in writing",
            },
            EscalationStep {
                level: 2,
                authority: "Bank nodal officer",
                when: "No reply in 10 working days",
            },
            EscalationStep {
                level: 3,
                authority: "RBI Integrated Ombudsman",
                when: "30 days after the first complaint",
            },
        ],
        helplines: &[
            Helpline {
                name: "RBI complaint contact centre",
                number: "14448",
            },
            Helpline {
                name: "National Cyber fraud (wrong debit)",
                number: "1930",
            },
        ],
        statistics: &[
            Statistic {
                label: "Complaints handled by RB-IOS yearly",
                value: "Over 7 lakh",
            },
            Statistic {
                label: "Typical Ombudsman disposal time",
                value: "About 30 days",
            },
        ],
    },
    SectorData {
        key: "consumer",
        title: "Consumer Disputes",
        blurb: "The Consumer Protection Act, 2019 gives buyers a three-tier commission system with low fees.",
        required: &["productOrService", "purchaseDate"],
        steps: &[
            "Send a written complaint to the seller or service provider and keep proof.",
            "Call the National Consumer Helpline (1915) to register the grievance.",
            "File before the District Consumer Commission on e-daakhil.nic.in with bills and correspondence.",
            "Claims up to Rs. 50 lakh go to the District Commission; larger claims go up the tier.",
            "Attend hearings or authorise a representative; lawyers are optional.",
        ],
        authorities: &[
            Authority {
                name: "National Consumer Helpline",
                role: "Pre-litigation conciliation with registered companies",
                contact: "1915 / consumerhelpline.gov.in",
            },
            Authority {
                name: "District Consumer Commission",
                role: "Adjudicates claims up to Rs. 50 lakh",
                contact: "e-daakhil.nic.in",
            },
        ],
        fees: &[
            FeeRow {
                item: "Claim up to Rs. 5 lakh",
                amount: "Free",
                notes: "No court fee under the 2019 Act",
            },
            FeeRow {
                item: "Claim Rs. 5-10 lakh",
                amount: "₹200",
                notes: "",
            },
            FeeRow {
                item: "Claim Rs. 10-20 lakh",
                amount: "₹400",
                notes: "",
            },
        ],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Seller / company grievance cell",
                when: "Immediately, in writing",
            },
            EscalationStep {
                level: 2,
                authority: "District Consumer Commission",
                when: "No remedy within the seller's stated time",
            },
            EscalationStep {
                level: 3,
                authority: "State, then National Commission",
                when: "Appeal within 45 days of an order",
            },
        ],
        helplines: &[Helpline {
            name: "National Consumer Helpline",
            number: "1915",
        }],
        statistics: &[
            Statistic {
                label: "Helpline grievances resolved at conciliation",
                value: "Roughly 9 in 10",
            },
            Statistic {
                label: "District Commission decision target",
                value: "90 days from notice",
            },
        ],
    },
    SectorData {
        key: "housing",
        title: "Housing and Builder Disputes",
        blurb: "Delayed or defective housing projects fall under the state RERA authority.",
        required: &["propertyAddress", "builderName"],
        steps: &[
            "Check the project's registration on the state RERA portal.",
            "Serve the builder a written notice citing the agreement clauses breached.",
            "File a RERA complaint for delay, deviation, or refund with interest.",
            "For deficiency in service you may instead approach the consumer commission, not both.",
            "Decree execution goes through the RERA adjudicating officer.",
        ],
        authorities: &[
            Authority {
                name: "State RERA Authority",
                role: "Registers projects, hears allottee complaints",
                contact: "State RERA portal (e.g. maharera, up-rera)",
            },
            Authority {
                name: "RERA Appellate Tribunal",
                role: "Appeals against authority orders",
                contact: "Via the state portal, 60-day appeal window",
            },
        ],
        fees: &[FeeRow {
            item: "RERA complaint",
            amount: "₹1,000-₹5,000",
            notes: "Varies by state",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Builder / promoter in writing",
                when: "Immediately",
            },
            EscalationStep {
                level: 2,
                authority: "State RERA Authority",
                when: "No remedy in 30 days",
            },
            EscalationStep {
                level: 3,
                authority: "RERA Appellate Tribunal, then High Court",
                when: "Within 60 days of the order",
            },
        ],
        helplines: &[Helpline {
            name: "State RERA help desk",
            number: "On the state portal",
        }],
        statistics: &[Statistic {
            label: "Complaints disposed by RERA authorities nationwide",
            value: "Over 1.2 lakh",
        }],
    },
    SectorData {
        key: "insurance",
        title: "Insurance Grievances",
        blurb: "Rejected or delayed claims go to the insurer's GRO, then IRDAI, then the Insurance Ombudsman.",
        required: &["insurerName", "policyNumber"],
        steps: &[
            "Complain in writing to the insurer's Grievance Redressal Officer (GRO).",
            "If unresolved in 15 days, register on IRDAI's Bima Bharosa portal.",
            "Approach the Insurance Ombudsman for claims up to Rs. 50 lakh.",
            "File within one year of the insurer's rejection.",
            "Keep the policy, surveyor report, and all repudiation letters.",
        ],
        authorities: &[
            Authority {
                name: "Insurer's Grievance Redressal Officer",
                role: "First-tier resolution inside the company",
                contact: "Named on the policy document",
            },
            Authority {
                name: "IRDAI (Bima Bharosa)",
                role: "Regulator's grievance channel",
                contact: "bimabharosa.irdai.gov.in / 155255",
            },
            Authority {
                name: "Insurance Ombudsman",
                role: "Binding awards up to Rs. 50 lakh",
                contact: "cioins.co.in, 17 centres",
            },
        ],
        fees: &[FeeRow {
            item: "All complaint tiers",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Insurer GRO",
                when: "Immediately, in writing",
            },
            EscalationStep {
                level: 2,
                authority: "IRDAI Bima Bharosa",
                when: "No reply in 15 days",
            },
            EscalationStep {
                level: 3,
                authority: "Insurance Ombudsman",
                when: "Within one year of repudiation",
            },
        ],
        helplines: &[Helpline {
            name: "IRDAI grievance call centre",
            number: "155255",
        }],
        statistics: &[Statistic {
            label: "Ombudsman award compliance deadline",
            value: "30 days for the insurer",
        }],
    },
    SectorData {
        key: "pension",
        title: "Pension and Provident Fund",
        blurb: "EPF and pension delays have dedicated grievance portals with tracked timelines.",
        required: &["pensionType", "employerName"],
        steps: &[
            "Check the claim status on the EPFO member portal first.",
            "Raise a grievance on EPFiGMS (epfigms.gov.in) quoting the claim id.",
            "Central government pensioners use the CPENGRAMS portal instead.",
            "Unresolved EPF grievances can be taken to the Regional PF Commissioner.",
            "For deducted-but-undeposited PF, the EPFO can prosecute the employer under Section 14.",
        ],
        authorities: &[
            Authority {
                name: "EPFO (EPFiGMS)",
                role: "Provident fund and EPS-95 pension grievances",
                contact: "epfigms.gov.in / 14470",
            },
            Authority {
                name: "CPENGRAMS",
                role: "Central civil pension grievances",
                contact: "pgportal.gov.in/pension",
            },
        ],
        fees: &[FeeRow {
            item: "All grievance portals",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Employer / EPFO field office",
                when: "Claim pending beyond 20 days",
            },
            EscalationStep {
                level: 2,
                authority: "EPFiGMS grievance",
                when: "No movement after the field office",
            },
            EscalationStep {
                level: 3,
                authority: "Regional PF Commissioner / Central PF Commissioner",
                when: "Grievance closed without remedy",
            },
        ],
        helplines: &[Helpline {
            name: "EPFO helpline",
            number: "14470",
        }],
        statistics: &[Statistic {
            label: "EPF claim settlement target",
            value: "20 days",
        }],
    },
    SectorData {
        key: "police",
        title: "Police Complaints",
        blurb: "Refusal to register an FIR and custodial misconduct both have fixed statutory remedies.",
        required: &["incidentDate", "policeStation"],
        steps: &[
            "Give a written complaint at the police station and insist on an acknowledgement.",
            "If the FIR is refused, send the complaint to the Superintendent of Police by post.",
            "A Magistrate can order registration on a complaint under Section 175(3) BNSS.",
            "For misconduct, approach the State Police Complaints Authority.",
            "Custodial violence can also go to the State or National Human Rights Commission.",
        ],
        authorities: &[
            Authority {
                name: "Superintendent of Police / Commissioner",
                role: "Supervisory remedy when a station refuses an FIR",
                contact: "District police office",
            },
            Authority {
                name: "Judicial Magistrate",
                role: "Can direct FIR registration (Section 175(3) BNSS)",
                contact: "Through the local court",
            },
            Authority {
                name: "State Human Rights Commission",
                role: "Custodial violence and abuse of power",
                contact: "hrcnet.nic.in",
            },
        ],
        fees: &[FeeRow {
            item: "FIR registration",
            amount: "Free",
            notes: "Charging for an FIR is itself misconduct",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Station House Officer",
                when: "Immediately",
            },
            EscalationStep {
                level: 2,
                authority: "Superintendent of Police",
                when: "FIR refused at the station",
            },
            EscalationStep {
                level: 3,
                authority: "Magistrate / Police Complaints Authority",
                when: "SP takes no action in 15 days",
            },
        ],
        helplines: &[
            Helpline {
                name: "Police emergency",
                number: "112",
            },
            Helpline {
                name: "NHRC",
                number: "011-24651330",
            },
        ],
        statistics: &[Statistic {
            label: "Arrested persons must see a magistrate within",
            value: "24 hours (Article 22)",
        }],
    },
    SectorData {
        key: "municipal",
        title: "Municipal Services",
        blurb: "Civic complaints move fastest through the municipality's own grievance system, with the commissioner above it.",
        required: &["ward", "civicIssueType"],
        steps: &[
            "Lodge the complaint on the municipal app or helpline and save the token number.",
            "Copy the ward councillor; sanitation and roads are ward subjects.",
            "Escalate to the zonal officer, then the Municipal Commissioner, with the token.",
            "Several states provide a Local Bodies Ombudsman for inaction or corruption.",
            "An RTI for the complaint's file often unblocks a stalled grievance.",
        ],
        authorities: &[
            Authority {
                name: "Municipal ward office",
                role: "Sanitation, streetlights, local roads",
                contact: "Ward office / municipal app",
            },
            Authority {
                name: "Municipal Commissioner",
                role: "Administrative head of the corporation",
                contact: "Corporation head office",
            },
            Authority {
                name: "Local Bodies Ombudsman",
                role: "Corruption and maladministration in local bodies",
                contact: "Where constituted by the state",
            },
        ],
        fees: &[FeeRow {
            item: "Grievance registration",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Ward office / civic app",
                when: "Immediately, with photos",
            },
            EscalationStep {
                level: 2,
                authority: "Zonal officer",
                when: "No action in 7 days",
            },
            EscalationStep {
                level: 3,
                authority: "Municipal Commissioner / Ombudsman",
                when: "No action in 30 days",
            },
        ],
        helplines: &[Helpline {
            name: "Swachhata / municipal helpline",
            number: "1533 (many cities)",
        }],
        statistics: &[Statistic {
            label: "Swachhata app complaint resolution target",
            value: "Within 48 hours for sweeping and garbage",
        }],
    },
    SectorData {
        key: "education",
        title: "Education Grievances",
        blurb: "Fee, admission, and certificate disputes split between state fee committees and the UGC or board.",
        required: &["institutionName", "issueType"],
        steps: &[
            "Put the grievance before the institution's head or grievance cell in writing.",
            "Fee overcharging in schools goes to the state Fee Regulation Committee.",
            "College and university issues go to the UGC's e-Samadhan portal.",
            "Denied admission under the RTE 25% quota goes to the local education officer.",
            "Withheld certificates can be recovered through the board or university registrar.",
        ],
        authorities: &[
            Authority {
                name: "Institution grievance cell",
                role: "Mandatory first tier in schools and colleges",
                contact: "Institution office",
            },
            Authority {
                name: "UGC e-Samadhan",
                role: "Higher-education grievances",
                contact: "samadhaan.ugc.ac.in / 1800-111-656",
            },
            Authority {
                name: "State education department",
                role: "School recognition, RTE, fee regulation",
                contact: "District Education Officer",
            },
        ],
        fees: &[FeeRow {
            item: "All grievance channels",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Principal / registrar",
                when: "Immediately, in writing",
            },
            EscalationStep {
                level: 2,
                authority: "Management / grievance committee",
                when: "No reply in 15 days",
            },
            EscalationStep {
                level: 3,
                authority: "UGC / education department",
                when: "Committee fails or does not exist",
            },
        ],
        helplines: &[Helpline {
            name: "UGC helpline",
            number: "1800-111-656",
        }],
        statistics: &[Statistic {
            label: "RTE free-seat quota in private schools",
            value: "25% at entry level",
        }],
    },
    SectorData {
        key: "healthcare",
        title: "Healthcare Complaints",
        blurb: "Medical negligence and overbilling have parallel routes: the facility, the council, and the consumer forum.",
        required: &["facilityName", "treatmentDate"],
        steps: &[
            "Obtain the complete medical record; facilities must supply it within 72 hours.",
            "Complain to the hospital's grievance cell first.",
            "Professional misconduct goes to the State Medical Council.",
            "Billing and deficiency claims go to the consumer commission with records attached.",
            "Ayushman Bharat beneficiaries can call 14555 for empanelled-hospital issues.",
        ],
        authorities: &[
            Authority {
                name: "Hospital grievance cell",
                role: "Internal redress, record requests",
                contact: "Hospital administration",
            },
            Authority {
                name: "State Medical Council",
                role: "Doctor misconduct and negligence findings",
                contact: "State council registrar",
            },
            Authority {
                name: "Consumer Commission",
                role: "Compensation for deficient treatment",
                contact: "e-daakhil.nic.in",
            },
        ],
        fees: &[
            FeeRow {
                item: "Medical record copy",
                amount: "Cost of copying",
                notes: "Must be supplied within 72 hours",
            },
            FeeRow {
                item: "Medical Council complaint",
                amount: "Free",
                notes: "",
            },
        ],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Treating facility",
                when: "Immediately, ask for records",
            },
            EscalationStep {
                level: 2,
                authority: "State Medical Council / CEA authority",
                when: "Facility response inadequate",
            },
            EscalationStep {
                level: 3,
                authority: "Consumer Commission",
                when: "For compensation, within 2 years",
            },
        ],
        helplines: &[
            Helpline {
                name: "Ayushman Bharat",
                number: "14555",
            },
            Helpline {
                name: "Medical emergency",
                number: "108",
            },
        ],
        statistics: &[Statistic {
            label: "Limitation for consumer medical claims",
            value: "2 years from the cause",
        }],
    },
    SectorData {
        key: "employment",
        title: "Employment and Wages",
        blurb: "Unpaid wages and wrongful dismissal go to the labour machinery, not the ordinary courts, for most workers.",
        required: &["employerName", "employmentType"],
        steps: &[
            "Raise the issue with HR or the employer in writing and keep copies.",
            "File a claim with the Labour Commissioner's office for unpaid wages.",
            "Industrial workmen can raise a dispute for reinstatement through conciliation.",
            "PF and ESI defaults go to the EPFO and ESIC portals respectively.",
            "Sexual harassment complaints go to the employer's Internal Committee under POSH.",
        ],
        authorities: &[
            Authority {
                name: "Labour Commissioner",
                role: "Wage claims, conciliation, dispute reference",
                contact: "District labour office",
            },
            Authority {
                name: "EPFO / ESIC",
                role: "Provident fund and insurance defaults",
                contact: "epfigms.gov.in / esic.gov.in",
            },
        ],
        fees: &[FeeRow {
            item: "Labour office claims",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Employer / HR",
                when: "Immediately, in writing",
            },
            EscalationStep {
                level: 2,
                authority: "Labour Commissioner (conciliation)",
                when: "No remedy in 30 days",
            },
            EscalationStep {
                level: 3,
                authority: "Labour Court / Industrial Tribunal",
                when: "Conciliation fails",
            },
        ],
        helplines: &[Helpline {
            name: "Shram Suvidha help desk",
            number: "011-23354722",
        }],
        statistics: &[Statistic {
            label: "Gratuity payment deadline after leaving",
            value: "30 days",
        }],
    },
    SectorData {
        key: "transport",
        title: "Transport Grievances",
        blurb: "Rail, air, and road transport each run their own grievance channel; pick the operator's first.",
        required: &["serviceType", "incidentDate"],
        steps: &[
            "Railways: file on RailMadad (railmadad.indianrailways.gov.in) or call 139.",
            "Airlines: complain to the airline, then the DGCA's AirSewa portal.",
            "RTO matters (licence, registration) go to the state transport portal.",
            "State bus corporations have depot-level complaint books and online forms.",
            "Keep tickets, PNRs, and booking references; they are the case id.",
        ],
        authorities: &[
            Authority {
                name: "RailMadad",
                role: "All railway complaints, live tracking",
                contact: "railmadad.indianrailways.gov.in / 139",
            },
            Authority {
                name: "AirSewa (DGCA / MoCA)",
                role: "Airline service and refund complaints",
                contact: "airsewa.gov.in",
            },
            Authority {
                name: "Regional Transport Office",
                role: "Licences, registration, permits",
                contact: "parivahan.gov.in",
            },
        ],
        fees: &[FeeRow {
            item: "All grievance portals",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Operator (railway/airline/depot)",
                when: "Immediately, with booking reference",
            },
            EscalationStep {
                level: 2,
                authority: "RailMadad / AirSewa / RTO",
                when: "Operator reply unsatisfactory",
            },
            EscalationStep {
                level: 3,
                authority: "Consumer Commission",
                when: "Deficiency persists; within 2 years",
            },
        ],
        helplines: &[
            Helpline {
                name: "RailMadad",
                number: "139",
            },
            Helpline {
                name: "Road accident emergency",
                number: "1073",
            },
        ],
        statistics: &[Statistic {
            label: "RailMadad average first response",
            value: "Under 1 hour for train-borne complaints",
        }],
    },
    SectorData {
        key: "utilities",
        title: "Electricity, Water, and Gas",
        blurb: "Every distribution company must run a Consumer Grievance Redressal Forum, with an Electricity Ombudsman above it.",
        required: &["utilityType", "consumerNumber"],
        steps: &[
            "Register the complaint with the discom/board helpline and note the docket number.",
            "Billing disputes: pay the undisputed portion to avoid disconnection while contesting.",
            "Escalate to the Consumer Grievance Redressal Forum (CGRF) of the utility.",
            "Appeal a CGRF order to the state Electricity Ombudsman within 30 days.",
            "New-connection and meter timelines are fixed in the state supply code.",
        ],
        authorities: &[
            Authority {
                name: "Distribution company helpline",
                role: "Outages, billing, metering",
                contact: "1912 (electricity, most states)",
            },
            Authority {
                name: "CGRF",
                role: "Forum inside each discom for unresolved complaints",
                contact: "Addresses on the discom site",
            },
            Authority {
                name: "Electricity Ombudsman",
                role: "Appeals against CGRF orders",
                contact: "State electricity regulatory commission site",
            },
        ],
        fees: &[FeeRow {
            item: "CGRF and Ombudsman",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "Utility helpline (docket)",
                when: "Immediately",
            },
            EscalationStep {
                level: 2,
                authority: "CGRF",
                when: "Docket unresolved in 30 days",
            },
            EscalationStep {
                level: 3,
                authority: "Electricity Ombudsman",
                when: "Within 30 days of the CGRF order",
            },
        ],
        helplines: &[
            Helpline {
                name: "Electricity (most states)",
                number: "1912",
            },
            Helpline {
                name: "LPG emergency",
                number: "1906",
            },
        ],
        statistics: &[Statistic {
            label: "CGRF decision deadline",
            value: "45 days from the complaint",
        }],
    },
    SectorData {
        key: "cyber",
        title: "Cybercrime Reporting",
        blurb: "Online fraud is time-critical: the 1930 helpline can freeze money in transit if called within hours.",
        required: &["incidentType", "incidentDate"],
        steps: &[
            "For financial fraud call 1930 immediately; the golden hour matters.",
            "File on cybercrime.gov.in with screenshots, transaction ids, and URLs.",
            "Note the acknowledgement number; the portal routes to your state's cyber cell.",
            "Inform your bank in writing the same day to cap liability for unauthorised transactions.",
            "Serious offences also need an FIR at the local or cyber police station.",
        ],
        authorities: &[
            Authority {
                name: "National Cyber Crime Reporting Portal",
                role: "Single window for all cyber offences",
                contact: "cybercrime.gov.in",
            },
            Authority {
                name: "State cyber cell",
                role: "Investigation after portal routing",
                contact: "District cyber police station",
            },
            Authority {
                name: "CERT-In",
                role: "Technical incidents against systems",
                contact: "incident@cert-in.org.in",
            },
        ],
        fees: &[FeeRow {
            item: "Portal and helpline",
            amount: "Free",
            notes: "",
        }],
        escalation: &[
            EscalationStep {
                level: 1,
                authority: "1930 helpline + portal",
                when: "Within hours of the fraud",
            },
            EscalationStep {
                level: 2,
                authority: "Cyber police station (FIR)",
                when: "For offences needing investigation",
            },
            EscalationStep {
                level: 3,
                authority: "Superintendent of Police",
                when: "FIR refused or investigation stalled",
            },
        ],
        helplines: &[
            Helpline {
                name: "Cyber financial fraud",
                number: "1930",
            },
            Helpline {
                name: "Women and children online abuse",
                number: "cybercrime.gov.in priority queue",
            },
        ],
        statistics: &[
            Statistic {
                label: "Zero-liability window for unauthorised bank debits",
                value: "Report within 3 working days",
            },
            Statistic {
                label: "Money recovered via 1930 golden hour",
                value: "Hundreds of crores yearly",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(extra: Value) -> SectorForm {
        let mut details = Map::new();
        if let Value::Object(map) = extra {
            details = map;
        }
        SectorForm {
            applicant_name: "Ravi Kumar".into(),
            issue_description: "Failed transaction not reversed for 40 days.".into(),
            details,
        }
    }

    #[test]
    fn test_every_sector_is_complete() {
        let mut keys = Vec::new();
        for sector in all() {
            assert!(!sector.steps.is_empty(), "{} has no steps", sector.key);
            assert!(
                !sector.authorities.is_empty(),
                "{} has no authorities",
                sector.key
            );
            assert!(!sector.helplines.is_empty(), "{} has no helplines", sector.key);
            assert_eq!(sector.escalation.len(), 3, "{} escalation ladder", sector.key);
            for (i, step) in sector.escalation.iter().enumerate() {
                assert_eq!(step.level as usize, i + 1);
            }
            assert!(!keys.contains(&sector.key));
            keys.push(sector.key);
        }
        assert_eq!(keys.len(), 13);
    }

    #[test]
    fn test_find_by_key() {
        assert!(find("banking").is_some());
        assert!(find("astrology").is_none());
    }

    #[test]
    fn test_build_interpolates_applicant() {
        let sector = find("banking").unwrap();
        let bundle = build(
            sector,
            &form(json!({"bankName": "State Bank", "accountType": "savings"})),
        )
        .unwrap();
        assert!(bundle.summary.contains("Ravi Kumar"));
        assert_eq!(bundle.sector, "banking");
        assert_eq!(bundle.escalation.len(), 3);
    }

    #[test]
    fn test_missing_sector_fields_reported_by_wire_name() {
        let sector = find("banking").unwrap();
        let err = build(sector, &form(json!({"bankName": "State Bank"}))).unwrap_err();
        assert!(err.to_string().contains("accountType"));
    }

    #[test]
    fn test_numeric_detail_accepted() {
        let sector = find("utilities").unwrap();
        let bundle = build(
            sector,
            &form(json!({"utilityType": "electricity", "consumerNumber": 480211})),
        );
        assert!(bundle.is_ok());
    }

    #[test]
    fn test_blank_shared_fields_rejected() {
        let sector = find("cyber").unwrap();
        let mut f = form(json!({"incidentType": "phishing", "incidentDate": "2026-08-01"}));
        f.applicant_name = "   ".into();
        let err = build(sector, &f).unwrap_err();
        assert!(err.to_string().contains("applicantName"));
    }
}
