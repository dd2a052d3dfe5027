//! Embedded content catalogue loaded by the seeder.
//!
//! Parts and articles carry genuine Hindi and Tamil text for a
//! representative subset, so the fallback paths run against real
//! translations rather than placeholders. Cross-references use article and
//! amendment numbers, resolved to row ids at insert time.

pub struct PartSeed {
    pub id: i64,
    pub number: i64,
    pub sort_order: i64,
    pub title_en: &'static str,
    pub title_hi: Option<&'static str>,
    pub title_ta: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub struct ArticleSeed {
    pub id: i64,
    pub number: &'static str,
    pub part: i64,
    pub title_en: &'static str,
    pub title_hi: Option<&'static str>,
    pub title_ta: Option<&'static str>,
    pub content_en: &'static str,
    pub content_hi: Option<&'static str>,
    pub content_ta: Option<&'static str>,
    pub category: &'static str,
    pub importance: i64,
}

pub struct ExplanationSeed {
    pub article: &'static str,
    pub language: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub examples: &'static [&'static str],
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

pub struct AmendmentSeed {
    pub id: i64,
    pub number: i64,
    pub year: i64,
    pub title_en: &'static str,
    pub title_hi: Option<&'static str>,
    pub description: &'static str,
    pub act_name: &'static str,
    /// Articles this amendment touched, by number.
    pub articles: &'static [&'static str],
}

pub struct CaseLawSeed {
    pub id: i64,
    pub title: &'static str,
    pub citation: &'static str,
    pub court: &'static str,
    pub year: i64,
    pub summary_en: &'static str,
    pub summary_hi: Option<&'static str>,
    pub landmark: bool,
    /// Articles this decision interpreted, by number.
    pub articles: &'static [&'static str],
}

pub struct McqSeed {
    pub article: Option<&'static str>,
    pub question: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
    pub option_c: &'static str,
    pub option_d: &'static str,
    pub correct_answer: &'static str,
    pub explanation: &'static str,
    pub difficulty: &'static str,
    pub category: &'static str,
}

pub struct GuideSeed {
    pub title: &'static str,
    pub category: &'static str,
    pub content_en: &'static str,
    pub content_hi: Option<&'static str>,
    pub content_ta: Option<&'static str>,
    pub helpline: &'static str,
    pub legal_aid: &'static str,
}

pub const PARTS: [PartSeed; 5] = [
    PartSeed {
        id: 1,
        number: 1,
        sort_order: 1,
        title_en: "The Union and its Territory",
        title_hi: Some("संघ और उसका राज्यक्षेत्र"),
        title_ta: Some("ஒன்றியமும் அதன் ஆட்சிப்பகுதியும்"),
        description: Some("Defines India as a Union of States and governs the admission, formation, and alteration of States."),
    },
    PartSeed {
        id: 2,
        number: 2,
        sort_order: 2,
        title_en: "Citizenship",
        title_hi: Some("नागरिकता"),
        title_ta: Some("குடியுரிமை"),
        description: Some("Who was a citizen at the commencement of the Constitution and how citizenship continues."),
    },
    PartSeed {
        id: 3,
        number: 3,
        sort_order: 3,
        title_en: "Fundamental Rights",
        title_hi: Some("मौलिक अधिकार"),
        title_ta: Some("அடிப்படை உரிமைகள்"),
        description: Some("Justiciable rights enforceable against the State, with Article 32 as the remedy."),
    },
    PartSeed {
        id: 4,
        number: 4,
        sort_order: 4,
        title_en: "Directive Principles of State Policy",
        title_hi: Some("राज्य की नीति के निदेशक तत्त्व"),
        title_ta: None,
        description: Some("Non-justiciable principles fundamental in the governance of the country; includes the fundamental duties added in 1976."),
    },
    PartSeed {
        id: 5,
        number: 5,
        sort_order: 5,
        title_en: "The Union",
        title_hi: Some("संघ"),
        title_ta: None,
        description: Some("The President, the Council of Ministers, Parliament, and the Union judiciary."),
    },
];

pub const ARTICLES: [ArticleSeed; 26] = [
    ArticleSeed {
        id: 1,
        number: "1",
        part: 1,
        title_en: "Name and territory of the Union",
        title_hi: Some("संघ का नाम और राज्यक्षेत्र"),
        title_ta: None,
        content_en: "India, that is Bharat, shall be a Union of States. The territory of India comprises the territories of the States, the Union territories, and such other territories as may be acquired.",
        content_hi: Some("भारत अर्थात् इंडिया, राज्यों का संघ होगा। भारत के राज्यक्षेत्र में राज्यों के राज्यक्षेत्र, संघ राज्यक्षेत्र और अर्जित अन्य राज्यक्षेत्र समाविष्ट होंगे।"),
        content_ta: None,
        category: "other",
        importance: 4,
    },
    ArticleSeed {
        id: 2,
        number: "2",
        part: 1,
        title_en: "Admission or establishment of new States",
        title_hi: None,
        title_ta: None,
        content_en: "Parliament may by law admit into the Union, or establish, new States on such terms and conditions as it thinks fit.",
        content_hi: None,
        content_ta: None,
        category: "other",
        importance: 2,
    },
    ArticleSeed {
        id: 3,
        number: "3",
        part: 1,
        title_en: "Formation of new States and alteration of areas, boundaries or names of existing States",
        title_hi: None,
        title_ta: None,
        content_en: "Parliament may by law form a new State, increase or diminish the area of any State, or alter the boundaries or name of any State.",
        content_hi: None,
        content_ta: None,
        category: "other",
        importance: 3,
    },
    ArticleSeed {
        id: 4,
        number: "5",
        part: 2,
        title_en: "Citizenship at the commencement of the Constitution",
        title_hi: None,
        title_ta: None,
        content_en: "At the commencement of this Constitution, every person who has his domicile in the territory of India and who was born in the territory of India shall be a citizen of India.",
        content_hi: None,
        content_ta: None,
        category: "other",
        importance: 3,
    },
    ArticleSeed {
        id: 5,
        number: "12",
        part: 3,
        title_en: "Definition of the State",
        title_hi: Some("राज्य की परिभाषा"),
        title_ta: None,
        content_en: "In this Part, unless the context otherwise requires, the State includes the Government and Parliament of India, the Government and the Legislature of each of the States, and all local or other authorities within the territory of India.",
        content_hi: None,
        content_ta: None,
        category: "other",
        importance: 3,
    },
    ArticleSeed {
        id: 6,
        number: "14",
        part: 3,
        title_en: "Equality before law",
        title_hi: Some("विधि के समक्ष समता"),
        title_ta: Some("சட்டத்தின் முன் சமத்துவம்"),
        content_en: "The State shall not deny to any person equality before the law or the equal protection of the laws within the territory of India.",
        content_hi: Some("राज्य, भारत के राज्यक्षेत्र में किसी व्यक्ति को विधि के समक्ष समता से या विधियों के समान संरक्षण से वंचित नहीं करेगा।"),
        content_ta: Some("இந்திய ஆட்சிப்பகுதிக்குள் எந்த நபருக்கும் சட்டத்தின் முன் சமத்துவத்தையோ சட்டங்களின் சம பாதுகாப்பையோ அரசு மறுக்கக்கூடாது."),
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 7,
        number: "15",
        part: 3,
        title_en: "Prohibition of discrimination on grounds of religion, race, caste, sex or place of birth",
        title_hi: Some("धर्म, मूलवंश, जाति, लिंग या जन्मस्थान के आधार पर विभेद का प्रतिषेध"),
        title_ta: None,
        content_en: "The State shall not discriminate against any citizen on grounds only of religion, race, caste, sex, place of birth or any of them.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 8,
        number: "16",
        part: 3,
        title_en: "Equality of opportunity in matters of public employment",
        title_hi: Some("लोक नियोजन के विषय में अवसर की समता"),
        title_ta: None,
        content_en: "There shall be equality of opportunity for all citizens in matters relating to employment or appointment to any office under the State.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 4,
    },
    ArticleSeed {
        id: 9,
        number: "17",
        part: 3,
        title_en: "Abolition of untouchability",
        title_hi: Some("अस्पृश्यता का अंत"),
        title_ta: Some("தீண்டாமை ஒழிப்பு"),
        content_en: "Untouchability is abolished and its practice in any form is forbidden. The enforcement of any disability arising out of untouchability shall be an offence punishable in accordance with law.",
        content_hi: Some("अस्पृश्यता का अंत किया जाता है और उसका किसी भी रूप में आचरण निषिद्ध किया जाता है।"),
        content_ta: None,
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 10,
        number: "19",
        part: 3,
        title_en: "Protection of certain rights regarding freedom of speech, etc.",
        title_hi: Some("वाक्-स्वातंत्र्य आदि विषयक कुछ अधिकारों का संरक्षण"),
        title_ta: Some("பேச்சுரிமை முதலிய உரிமைகளின் பாதுகாப்பு"),
        content_en: "All citizens shall have the right to freedom of speech and expression; to assemble peaceably and without arms; to form associations or unions; to move freely throughout the territory of India; to reside and settle in any part of the territory of India; and to practise any profession, or to carry on any occupation, trade or business.",
        content_hi: Some("सभी नागरिकों को वाक्-स्वातंत्र्य और अभिव्यक्ति-स्वातंत्र्य, शांतिपूर्वक सम्मेलन, संगम या संघ बनाने, भारत में अबाध संचरण, निवास और कोई वृत्ति या कारबार करने का अधिकार होगा।"),
        content_ta: None,
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 11,
        number: "21",
        part: 3,
        title_en: "Protection of life and personal liberty",
        title_hi: Some("प्राण और दैहिक स्वतंत्रता का संरक्षण"),
        title_ta: Some("உயிர் மற்றும் தனிநபர் சுதந்திரத்தின் பாதுகாப்பு"),
        content_en: "No person shall be deprived of his life or personal liberty except according to procedure established by law.",
        content_hi: Some("किसी व्यक्ति को उसके प्राण या दैहिक स्वतंत्रता से विधि द्वारा स्थापित प्रक्रिया के अनुसार ही वंचित किया जाएगा, अन्यथा नहीं।"),
        content_ta: Some("சட்டத்தால் நிறுவப்பட்ட நடைமுறையின்படி அன்றி எந்த நபரும் தம் உயிரையோ தனிநபர் சுதந்திரத்தையோ இழக்கச் செய்யப்படக்கூடாது."),
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 12,
        number: "21A",
        part: 3,
        title_en: "Right to education",
        title_hi: Some("शिक्षा का अधिकार"),
        title_ta: Some("கல்வி உரிமை"),
        content_en: "The State shall provide free and compulsory education to all children of the age of six to fourteen years in such manner as the State may, by law, determine.",
        content_hi: Some("राज्य छह वर्ष से चौदह वर्ष तक की आयु के सभी बालकों को निःशुल्क और अनिवार्य शिक्षा देने की व्यवस्था करेगा।"),
        content_ta: None,
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 13,
        number: "22",
        part: 3,
        title_en: "Protection against arrest and detention in certain cases",
        title_hi: None,
        title_ta: None,
        content_en: "No person who is arrested shall be detained in custody without being informed of the grounds for such arrest, nor shall he be denied the right to consult and to be defended by a legal practitioner of his choice. Every person arrested must be produced before the nearest magistrate within twenty-four hours.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 4,
    },
    ArticleSeed {
        id: 14,
        number: "23",
        part: 3,
        title_en: "Prohibition of traffic in human beings and forced labour",
        title_hi: None,
        title_ta: None,
        content_en: "Traffic in human beings and begar and other similar forms of forced labour are prohibited and any contravention of this provision shall be an offence punishable in accordance with law.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 4,
    },
    ArticleSeed {
        id: 15,
        number: "24",
        part: 3,
        title_en: "Prohibition of employment of children in factories, etc.",
        title_hi: Some("कारखानों आदि में बालकों के नियोजन का प्रतिषेध"),
        title_ta: None,
        content_en: "No child below the age of fourteen years shall be employed to work in any factory or mine or engaged in any other hazardous employment.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 4,
    },
    ArticleSeed {
        id: 16,
        number: "25",
        part: 3,
        title_en: "Freedom of conscience and free profession, practice and propagation of religion",
        title_hi: Some("अंतःकरण की और धर्म के अबाध रूप से मानने, आचरण और प्रचार करने की स्वतंत्रता"),
        title_ta: None,
        content_en: "Subject to public order, morality and health, all persons are equally entitled to freedom of conscience and the right freely to profess, practise and propagate religion.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 4,
    },
    ArticleSeed {
        id: 17,
        number: "29",
        part: 3,
        title_en: "Protection of interests of minorities",
        title_hi: None,
        title_ta: None,
        content_en: "Any section of the citizens residing in the territory of India having a distinct language, script or culture of its own shall have the right to conserve the same.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 3,
    },
    ArticleSeed {
        id: 18,
        number: "30",
        part: 3,
        title_en: "Right of minorities to establish and administer educational institutions",
        title_hi: None,
        title_ta: None,
        content_en: "All minorities, whether based on religion or language, shall have the right to establish and administer educational institutions of their choice.",
        content_hi: None,
        content_ta: None,
        category: "fundamental_right",
        importance: 3,
    },
    ArticleSeed {
        id: 19,
        number: "32",
        part: 3,
        title_en: "Remedies for enforcement of rights conferred by this Part",
        title_hi: Some("इस भाग द्वारा प्रदत्त अधिकारों को प्रवर्तित कराने के लिए उपचार"),
        title_ta: Some("இப்பகுதி வழங்கும் உரிமைகளை நிலைநாட்டும் தீர்வுகள்"),
        content_en: "The right to move the Supreme Court by appropriate proceedings for the enforcement of the rights conferred by this Part is guaranteed. The Supreme Court shall have power to issue directions or orders or writs, including writs in the nature of habeas corpus, mandamus, prohibition, quo warranto and certiorari.",
        content_hi: Some("इस भाग द्वारा प्रदत्त अधिकारों को प्रवर्तित कराने के लिए समुचित कार्यवाहियों द्वारा उच्चतम न्यायालय में समावेदन करने का अधिकार प्रत्याभूत किया जाता है।"),
        content_ta: None,
        category: "fundamental_right",
        importance: 5,
    },
    ArticleSeed {
        id: 20,
        number: "38",
        part: 4,
        title_en: "State to secure a social order for the promotion of welfare of the people",
        title_hi: Some("राज्य लोक कल्याण की अभिवृद्धि के लिए सामाजिक व्यवस्था बनाएगा"),
        title_ta: None,
        content_en: "The State shall strive to promote the welfare of the people by securing and protecting as effectively as it may a social order in which justice, social, economic and political, shall inform all the institutions of the national life.",
        content_hi: None,
        content_ta: None,
        category: "directive_principle",
        importance: 4,
    },
    ArticleSeed {
        id: 21,
        number: "39",
        part: 4,
        title_en: "Certain principles of policy to be followed by the State",
        title_hi: None,
        title_ta: None,
        content_en: "The State shall direct its policy towards securing that citizens have the right to an adequate means of livelihood, that ownership and control of material resources are distributed to subserve the common good, and that there is equal pay for equal work for both men and women.",
        content_hi: None,
        content_ta: None,
        category: "directive_principle",
        importance: 4,
    },
    ArticleSeed {
        id: 22,
        number: "40",
        part: 4,
        title_en: "Organisation of village panchayats",
        title_hi: None,
        title_ta: None,
        content_en: "The State shall take steps to organise village panchayats and endow them with such powers and authority as may be necessary to enable them to function as units of self-government.",
        content_hi: None,
        content_ta: None,
        category: "directive_principle",
        importance: 3,
    },
    ArticleSeed {
        id: 23,
        number: "44",
        part: 4,
        title_en: "Uniform civil code for the citizens",
        title_hi: Some("नागरिकों के लिए एक समान सिविल संहिता"),
        title_ta: None,
        content_en: "The State shall endeavour to secure for the citizens a uniform civil code throughout the territory of India.",
        content_hi: None,
        content_ta: None,
        category: "directive_principle",
        importance: 4,
    },
    ArticleSeed {
        id: 24,
        number: "48A",
        part: 4,
        title_en: "Protection and improvement of environment and safeguarding of forests and wild life",
        title_hi: None,
        title_ta: None,
        content_en: "The State shall endeavour to protect and improve the environment and to safeguard the forests and wild life of the country.",
        content_hi: None,
        content_ta: None,
        category: "directive_principle",
        importance: 3,
    },
    ArticleSeed {
        id: 25,
        number: "51A",
        part: 4,
        title_en: "Fundamental duties",
        title_hi: Some("मूल कर्तव्य"),
        title_ta: Some("அடிப்படைக் கடமைகள்"),
        content_en: "It shall be the duty of every citizen of India to abide by the Constitution and respect its ideals and institutions, the National Flag and the National Anthem; to cherish and follow the noble ideals which inspired our national struggle for freedom; to protect and improve the natural environment; and to develop the scientific temper, humanism and the spirit of inquiry and reform.",
        content_hi: Some("भारत के प्रत्येक नागरिक का यह कर्तव्य होगा कि वह संविधान का पालन करे और उसके आदर्शों, संस्थाओं, राष्ट्र ध्वज और राष्ट्रगान का आदर करे।"),
        content_ta: None,
        category: "fundamental_duty",
        importance: 4,
    },
    ArticleSeed {
        id: 26,
        number: "52",
        part: 5,
        title_en: "The President of India",
        title_hi: Some("भारत के राष्ट्रपति"),
        title_ta: None,
        content_en: "There shall be a President of India.",
        content_hi: None,
        content_ta: None,
        category: "other",
        importance: 3,
    },
];

pub const EXPLANATIONS: [ExplanationSeed; 6] = [
    ExplanationSeed {
        article: "14",
        language: "en",
        title: "Everyone is equal before the law",
        content: "The government cannot favour or target anyone arbitrarily. Similar cases must be treated similarly; any different treatment needs a reasonable basis connected to a real purpose.",
        examples: &[
            "A state job notification cannot exclude applicants from one district without reason.",
            "Two shopkeepers breaking the same rule must face the same penalty process.",
        ],
        dos: &[
            "Ask for the rule or order behind any differential treatment by an authority.",
            "Keep written proof when you suspect arbitrary treatment.",
        ],
        donts: &["Do not assume private discrimination is covered; Article 14 binds the State."],
    },
    ExplanationSeed {
        article: "14",
        language: "hi",
        title: "कानून के सामने सब बराबर",
        content: "सरकार किसी के साथ मनमाना भेदभाव नहीं कर सकती। समान स्थिति वाले लोगों के साथ समान व्यवहार होना चाहिए; अलग व्यवहार का उचित और वास्तविक आधार होना चाहिए।",
        examples: &["सरकारी नौकरी की भर्ती में बिना कारण किसी जिले के आवेदकों को बाहर नहीं किया जा सकता।"],
        dos: &["किसी प्राधिकारी के भेदभावपूर्ण व्यवहार का लिखित प्रमाण रखें।"],
        donts: &["यह न मानें कि निजी भेदभाव भी इसमें आता है; अनुच्छेद 14 राज्य पर लागू होता है।"],
    },
    ExplanationSeed {
        article: "21",
        language: "en",
        title: "Your right to live with dignity",
        content: "Life and personal liberty can be taken away only by a procedure that is fair, just and reasonable. Courts have read into this article the rights to privacy, livelihood, health, and a clean environment.",
        examples: &[
            "Police custody must follow the legal procedure for arrest and production before a magistrate.",
            "The right to privacy flows from this article.",
        ],
        dos: &[
            "Insist on knowing the legal basis for any detention.",
            "Approach the High Court or Supreme Court if the procedure was not followed.",
        ],
        donts: &["Do not sign documents you have not read while in custody."],
    },
    ExplanationSeed {
        article: "21",
        language: "hi",
        title: "गरिमा के साथ जीने का अधिकार",
        content: "प्राण और दैहिक स्वतंत्रता केवल निष्पक्ष, न्यायसंगत और उचित प्रक्रिया से ही छीनी जा सकती है। न्यायालयों ने इस अनुच्छेद में निजता, आजीविका, स्वास्थ्य और स्वच्छ पर्यावरण के अधिकार पढ़े हैं।",
        examples: &["निजता का अधिकार इसी अनुच्छेद से निकलता है।"],
        dos: &["किसी भी हिरासत का कानूनी आधार पूछें।"],
        donts: &["हिरासत में बिना पढ़े किसी कागज पर हस्ताक्षर न करें।"],
    },
    ExplanationSeed {
        article: "21A",
        language: "ta",
        title: "இலவசக் கல்விக்கான உரிமை",
        content: "ஆறு முதல் பதினான்கு வயது வரையிலான ஒவ்வொரு குழந்தைக்கும் இலவச, கட்டாயக் கல்வி அரசின் கடமை. பள்ளி சேர்க்கை மறுக்கப்பட்டால் மாவட்டக் கல்வி அலுவலரிடம் முறையிடலாம்.",
        examples: &["அருகிலுள்ள அரசுப் பள்ளியில் கட்டணமின்றி சேர்க்கை கோரலாம்."],
        dos: &["சேர்க்கை மறுப்பை எழுத்துப்பூர்வமாகக் கேளுங்கள்."],
        donts: &["வயது சான்றிதழ் இல்லை என்ற காரணத்தால் சேர்க்கை மறுக்கப்படுவதை ஏற்க வேண்டாம்."],
    },
    ExplanationSeed {
        article: "32",
        language: "en",
        title: "The right that protects all other rights",
        content: "If a fundamental right is violated you can go straight to the Supreme Court, which can issue writs such as habeas corpus and mandamus. Dr. Ambedkar called this article the heart and soul of the Constitution.",
        examples: &["A habeas corpus petition to produce a person held in illegal detention."],
        dos: &["You may also move the High Court under Article 226, which covers more grounds."],
        donts: &["Do not treat it as an appeal route for ordinary civil disputes."],
    },
];

pub const AMENDMENTS: [AmendmentSeed; 10] = [
    AmendmentSeed {
        id: 1,
        number: 1,
        year: 1951,
        title_en: "First Amendment",
        title_hi: Some("पहला संशोधन"),
        description: "Added restrictions on free speech, enabled special provisions for backward classes, and created the Ninth Schedule.",
        act_name: "The Constitution (First Amendment) Act, 1951",
        articles: &["15", "19"],
    },
    AmendmentSeed {
        id: 2,
        number: 7,
        year: 1956,
        title_en: "Seventh Amendment",
        title_hi: None,
        description: "Reorganised the States on linguistic lines and abolished the class-based system of States.",
        act_name: "The Constitution (Seventh Amendment) Act, 1956",
        articles: &["1", "3"],
    },
    AmendmentSeed {
        id: 3,
        number: 24,
        year: 1971,
        title_en: "Twenty-fourth Amendment",
        title_hi: None,
        description: "Affirmed the power of Parliament to amend any part of the Constitution including fundamental rights.",
        act_name: "The Constitution (Twenty-fourth Amendment) Act, 1971",
        articles: &[],
    },
    AmendmentSeed {
        id: 4,
        number: 42,
        year: 1976,
        title_en: "Forty-second Amendment",
        title_hi: Some("बयालीसवां संशोधन"),
        description: "Added the words socialist and secular to the Preamble, inserted the fundamental duties, and added directives on environment protection.",
        act_name: "The Constitution (Forty-second Amendment) Act, 1976",
        articles: &["48A", "51A"],
    },
    AmendmentSeed {
        id: 5,
        number: 44,
        year: 1978,
        title_en: "Forty-fourth Amendment",
        title_hi: None,
        description: "Removed the right to property from the fundamental rights and strengthened safeguards against preventive detention.",
        act_name: "The Constitution (Forty-fourth Amendment) Act, 1978",
        articles: &["19", "22"],
    },
    AmendmentSeed {
        id: 6,
        number: 61,
        year: 1989,
        title_en: "Sixty-first Amendment",
        title_hi: None,
        description: "Lowered the voting age for Lok Sabha and State assembly elections from 21 years to 18 years.",
        act_name: "The Constitution (Sixty-first Amendment) Act, 1988",
        articles: &[],
    },
    AmendmentSeed {
        id: 7,
        number: 73,
        year: 1992,
        title_en: "Seventy-third Amendment",
        title_hi: None,
        description: "Gave constitutional status to panchayati raj institutions with regular elections and reserved seats.",
        act_name: "The Constitution (Seventy-third Amendment) Act, 1992",
        articles: &["40"],
    },
    AmendmentSeed {
        id: 8,
        number: 86,
        year: 2002,
        title_en: "Eighty-sixth Amendment",
        title_hi: Some("छियासीवां संशोधन"),
        description: "Made free and compulsory education for children aged six to fourteen a fundamental right by inserting Article 21A.",
        act_name: "The Constitution (Eighty-sixth Amendment) Act, 2002",
        articles: &["21A", "51A"],
    },
    AmendmentSeed {
        id: 9,
        number: 101,
        year: 2016,
        title_en: "One Hundred and First Amendment",
        title_hi: None,
        description: "Introduced the Goods and Services Tax, a single indirect tax shared between the Union and the States.",
        act_name: "The Constitution (One Hundred and First Amendment) Act, 2016",
        articles: &[],
    },
    AmendmentSeed {
        id: 10,
        number: 103,
        year: 2019,
        title_en: "One Hundred and Third Amendment",
        title_hi: None,
        description: "Enabled up to ten per cent reservation for economically weaker sections in education and public employment.",
        act_name: "The Constitution (One Hundred and Third Amendment) Act, 2019",
        articles: &["15", "16"],
    },
];

pub const CASE_LAWS: [CaseLawSeed; 6] = [
    CaseLawSeed {
        id: 1,
        title: "Kesavananda Bharati v. State of Kerala",
        citation: "(1973) 4 SCC 225",
        court: "Supreme Court",
        year: 1973,
        summary_en: "A thirteen-judge bench held that Parliament may amend the Constitution but cannot destroy its basic structure, which includes the supremacy of the Constitution and judicial review.",
        summary_hi: Some("तेरह न्यायाधीशों की पीठ ने माना कि संसद संविधान में संशोधन कर सकती है, किन्तु उसके मूल ढांचे को नष्ट नहीं कर सकती।"),
        landmark: true,
        articles: &["25"],
    },
    CaseLawSeed {
        id: 2,
        title: "Maneka Gandhi v. Union of India",
        citation: "AIR 1978 SC 597",
        court: "Supreme Court",
        year: 1978,
        summary_en: "Procedure established by law under Article 21 must be fair, just and reasonable; Articles 14, 19 and 21 are to be read together.",
        summary_hi: Some("अनुच्छेद 21 के अधीन विधि द्वारा स्थापित प्रक्रिया निष्पक्ष, न्यायसंगत और उचित होनी चाहिए।"),
        landmark: true,
        articles: &["14", "19", "21"],
    },
    CaseLawSeed {
        id: 3,
        title: "Indra Sawhney v. Union of India",
        citation: "AIR 1993 SC 477",
        court: "Supreme Court",
        year: 1992,
        summary_en: "Upheld reservation for other backward classes in public employment, capped total reservation at fifty per cent, and excluded the creamy layer.",
        summary_hi: None,
        landmark: true,
        articles: &["16"],
    },
    CaseLawSeed {
        id: 4,
        title: "Vishaka v. State of Rajasthan",
        citation: "AIR 1997 SC 3011",
        court: "Supreme Court",
        year: 1997,
        summary_en: "Laid down binding guidelines against sexual harassment at the workplace until legislation was enacted, drawing on Articles 14, 15 and 21.",
        summary_hi: None,
        landmark: true,
        articles: &["14", "15", "21"],
    },
    CaseLawSeed {
        id: 5,
        title: "Shreya Singhal v. Union of India",
        citation: "(2015) 5 SCC 1",
        court: "Supreme Court",
        year: 2015,
        summary_en: "Struck down Section 66A of the Information Technology Act as an unconstitutional restriction on the freedom of speech and expression.",
        summary_hi: None,
        landmark: true,
        articles: &["19"],
    },
    CaseLawSeed {
        id: 6,
        title: "Justice K. S. Puttaswamy v. Union of India",
        citation: "(2017) 10 SCC 1",
        court: "Supreme Court",
        year: 2017,
        summary_en: "A nine-judge bench unanimously held that the right to privacy is a fundamental right protected under Article 21 and Part III of the Constitution.",
        summary_hi: Some("नौ न्यायाधीशों की पीठ ने सर्वसम्मति से माना कि निजता का अधिकार अनुच्छेद 21 के अधीन संरक्षित मौलिक अधिकार है।"),
        landmark: true,
        articles: &["14", "21"],
    },
];

pub const MCQS: [McqSeed; 12] = [
    McqSeed {
        article: Some("14"),
        question: "Which article guarantees equality before the law to every person in India?",
        option_a: "Article 14",
        option_b: "Article 19",
        option_c: "Article 21",
        option_d: "Article 32",
        correct_answer: "A",
        explanation: "Article 14 guarantees equality before the law and the equal protection of the laws.",
        difficulty: "easy",
        category: "fundamental_rights",
    },
    McqSeed {
        article: Some("21"),
        question: "The right to privacy was recognised as part of which article?",
        option_a: "Article 14",
        option_b: "Article 21",
        option_c: "Article 25",
        option_d: "Article 19",
        correct_answer: "B",
        explanation: "Puttaswamy (2017) held that privacy is protected under Article 21.",
        difficulty: "medium",
        category: "fundamental_rights",
    },
    McqSeed {
        article: Some("32"),
        question: "Which article did Dr. Ambedkar describe as the heart and soul of the Constitution?",
        option_a: "Article 14",
        option_b: "Article 19",
        option_c: "Article 32",
        option_d: "Article 21",
        correct_answer: "C",
        explanation: "Article 32, the right to constitutional remedies, lets citizens move the Supreme Court directly.",
        difficulty: "easy",
        category: "fundamental_rights",
    },
    McqSeed {
        article: Some("21A"),
        question: "Free and compulsory education is guaranteed for children of which age group?",
        option_a: "3 to 12 years",
        option_b: "5 to 16 years",
        option_c: "6 to 18 years",
        option_d: "6 to 14 years",
        correct_answer: "D",
        explanation: "Article 21A covers children aged six to fourteen years.",
        difficulty: "easy",
        category: "fundamental_rights",
    },
    McqSeed {
        article: Some("17"),
        question: "Which article abolishes untouchability?",
        option_a: "Article 15",
        option_b: "Article 17",
        option_c: "Article 23",
        option_d: "Article 25",
        correct_answer: "B",
        explanation: "Article 17 abolishes untouchability and makes its practice punishable.",
        difficulty: "easy",
        category: "fundamental_rights",
    },
    McqSeed {
        article: None,
        question: "Which amendment added the words socialist and secular to the Preamble?",
        option_a: "42nd Amendment",
        option_b: "44th Amendment",
        option_c: "24th Amendment",
        option_d: "86th Amendment",
        correct_answer: "A",
        explanation: "The Forty-second Amendment of 1976 amended the Preamble.",
        difficulty: "medium",
        category: "amendments",
    },
    McqSeed {
        article: None,
        question: "The Sixty-first Amendment lowered the voting age to how many years?",
        option_a: "16",
        option_b: "17",
        option_c: "18",
        option_d: "20",
        correct_answer: "C",
        explanation: "The voting age was lowered from 21 to 18 in 1989.",
        difficulty: "easy",
        category: "amendments",
    },
    McqSeed {
        article: None,
        question: "Which case established the basic structure doctrine?",
        option_a: "Maneka Gandhi v. Union of India",
        option_b: "Kesavananda Bharati v. State of Kerala",
        option_c: "Indra Sawhney v. Union of India",
        option_d: "Vishaka v. State of Rajasthan",
        correct_answer: "B",
        explanation: "Kesavananda Bharati (1973) held that Parliament cannot destroy the basic structure of the Constitution.",
        difficulty: "medium",
        category: "judiciary",
    },
    McqSeed {
        article: None,
        question: "Who chaired the drafting committee of the Constituent Assembly?",
        option_a: "Jawaharlal Nehru",
        option_b: "Rajendra Prasad",
        option_c: "Sardar Patel",
        option_d: "B. R. Ambedkar",
        correct_answer: "D",
        explanation: "Dr. B. R. Ambedkar chaired the drafting committee.",
        difficulty: "easy",
        category: "history",
    },
    McqSeed {
        article: None,
        question: "When did the Constitution of India come into force?",
        option_a: "15 August 1947",
        option_b: "26 January 1950",
        option_c: "26 November 1949",
        option_d: "2 October 1950",
        correct_answer: "B",
        explanation: "It was adopted on 26 November 1949 and came into force on 26 January 1950.",
        difficulty: "easy",
        category: "history",
    },
    McqSeed {
        article: Some("40"),
        question: "Organising village panchayats is mentioned in which part of the Constitution?",
        option_a: "Fundamental Rights",
        option_b: "Fundamental Duties",
        option_c: "Directive Principles of State Policy",
        option_d: "The Union",
        correct_answer: "C",
        explanation: "Article 40, a directive principle, asks the State to organise village panchayats.",
        difficulty: "medium",
        category: "directive_principles",
    },
    McqSeed {
        article: Some("51A"),
        question: "The fundamental duties were added on the recommendation of which committee?",
        option_a: "Sarkaria Commission",
        option_b: "Punchhi Commission",
        option_c: "Swaran Singh Committee",
        option_d: "Balwant Rai Mehta Committee",
        correct_answer: "C",
        explanation: "The Swaran Singh Committee recommended the fundamental duties, added by the Forty-second Amendment.",
        difficulty: "hard",
        category: "history",
    },
];

pub const EMERGENCY_GUIDES: [GuideSeed; 4] = [
    GuideSeed {
        title: "If you are arrested",
        category: "arrest",
        content_en: "You must be told the grounds of arrest and produced before the nearest magistrate within 24 hours. You have the right to consult a lawyer of your choice and to inform a relative or friend. A memo of arrest must be prepared and attested.",
        content_hi: Some("आपको गिरफ्तारी के आधार बताए जाने चाहिए और 24 घंटे के भीतर निकटतम मजिस्ट्रेट के समक्ष पेश किया जाना चाहिए। आपको अपनी पसंद के वकील से परामर्श करने और किसी रिश्तेदार या मित्र को सूचित करने का अधिकार है।"),
        content_ta: Some("கைது செய்யப்பட்டால் கைது காரணங்கள் உங்களுக்குத் தெரிவிக்கப்பட வேண்டும்; 24 மணி நேரத்திற்குள் அருகிலுள்ள நீதிபதி முன் நிறுத்தப்பட வேண்டும். விருப்பமான வழக்கறிஞரை அணுகவும் உறவினருக்குத் தெரிவிக்கவும் உங்களுக்கு உரிமை உண்டு."),
        helpline: "100",
        legal_aid: "NALSA free legal aid: 15100",
    },
    GuideSeed {
        title: "If your home is searched",
        category: "search",
        content_en: "Ask to see the search warrant and note the names of the officers. Two independent witnesses from the locality must be present. You are entitled to a copy of the seizure list signed by the witnesses.",
        content_hi: Some("तलाशी वारंट देखने की मांग करें और अधिकारियों के नाम नोट करें। मोहल्ले के दो स्वतंत्र गवाह उपस्थित होने चाहिए। जब्ती सूची की प्रति पाने का आपको अधिकार है।"),
        content_ta: None,
        helpline: "100",
        legal_aid: "NALSA free legal aid: 15100",
    },
    GuideSeed {
        title: "If someone is held in preventive detention",
        category: "detention",
        content_en: "The grounds of detention must be communicated as soon as may be, and the detainee has the right to make a representation against the order. Detention beyond three months requires the opinion of an advisory board. A habeas corpus petition can be filed in the High Court or Supreme Court.",
        content_hi: Some("निरोध के आधार यथाशीघ्र बताए जाने चाहिए और बंदी को आदेश के विरुद्ध अभ्यावेदन करने का अधिकार है। तीन महीने से अधिक के निरोध के लिए सलाहकार बोर्ड की राय आवश्यक है।"),
        content_ta: None,
        helpline: "100",
        legal_aid: "NALSA free legal aid: 15100",
    },
    GuideSeed {
        title: "Filing a First Information Report",
        category: "fir",
        content_en: "The police must register an FIR for any cognisable offence; refusal can be escalated to the Superintendent of Police or a magistrate. You are entitled to a free copy of the FIR. A woman reporting certain offences may ask to be heard by a woman officer.",
        content_hi: None,
        content_ta: None,
        helpline: "112",
        legal_aid: "NALSA free legal aid: 15100",
    },
];

pub const SETTINGS: [(&str, &str); 4] = [
    ("app_name", "Samvidhan"),
    ("content_version", "2026.08"),
    ("languages", "en,hi,ta"),
    ("source", "Constitution of India, updated to the 106th Amendment"),
];
